//! Core domain types for the movie metadata dataset.
//!
//! A `Movie` is one row of the CSV export. Rows are immutable once parsed and
//! owned by the `MovieCatalog` for the rest of the run; every analysis only
//! ever borrows them.

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// Identifier from the `id` column (0 when the column is blank or absent)
pub type MovieId = u32;

// =============================================================================
// Movie
// =============================================================================

/// One dataset row.
///
/// Numeric fields are zero and text fields empty when the source cell was
/// blank. The four list fields come from pipe-delimited cells and keep both
/// the source order and any duplicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// Average user rating (the "IMDb rating" of the reports)
    pub vote_average: f32,
    pub vote_count: u32,
    pub status: String,
    /// Raw release date, day/month/year separated by `/`
    pub release_date: String,
    pub revenue: i64,
    /// Runtime in minutes
    pub runtime: u32,
    pub adult: bool,
    pub budget: i64,
    /// Short language code such as `en` or `ja`
    pub original_language: String,
    pub original_title: String,
    pub overview: String,
    pub popularity: f32,
    pub tagline: String,
    pub genres: Vec<String>,
    pub production_companies: Vec<String>,
    pub production_countries: Vec<String>,
    pub spoken_languages: Vec<String>,
}

impl Movie {
    /// Convenience constructor used by tests and demos; every other field is
    /// left at its blank-cell default.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

// =============================================================================
// MovieCatalog - the loaded, read-only record collection
// =============================================================================

/// Owns every record loaded for a run.
///
/// The catalog is built once (see `catalog.rs`) and then only lent out as
/// `&[Movie]`, which is what lets independent report sections run side by
/// side without locking.
#[derive(Debug, Default)]
pub struct MovieCatalog {
    pub(crate) movies: Vec<Movie>,
    /// Data rows seen in the source file, including skipped ones
    pub(crate) rows_read: usize,
    /// Rows dropped because they failed to parse
    pub(crate) rows_skipped: usize,
}

impl MovieCatalog {
    /// Creates a new, empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps records that were produced somewhere other than the CSV parser
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        let rows_read = movies.len();
        Self {
            movies,
            rows_read,
            rows_skipped: 0,
        }
    }

    /// All records, in file order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// `(records kept, rows read, rows skipped)` for logging and validation
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.movies.len(), self.rows_read, self.rows_skipped)
    }

    /// Extracts one numeric column, in record order.
    ///
    /// Columns pulled from the same catalog always have equal length, which
    /// is what the correlation calculator expects.
    pub fn column<T>(&self, field: impl Fn(&Movie) -> T) -> Vec<T> {
        self.movies.iter().map(field).collect()
    }
}
