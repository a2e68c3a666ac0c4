//! Building a `MovieCatalog` from the CSV export.
//!
//! Loading is the only place that mutates the record collection. Once
//! `load_from_file` returns, the catalog is handed out read-only.

use crate::error::Result;
use crate::parser::{self, ParseMode};
use crate::types::*;
use std::path::Path;
use tracing::{info, warn};

impl MovieCatalog {
    /// Load every parseable row of a CSV export.
    ///
    /// Malformed rows are skipped (and logged); they are the loader's problem,
    /// not the analysis code's. Use `load_with_mode` with `ParseMode::Strict`
    /// to fail on the first bad row instead.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        Self::load_with_mode(path, ParseMode::Lenient)
    }

    /// Load a CSV export with an explicit `ParseMode`
    pub fn load_with_mode(path: &Path, mode: ParseMode) -> Result<Self> {
        info!("Loading movie dataset from {:?}", path);

        let parsed = parser::parse_movies_with_mode(path, mode)?;
        if parsed.rows_skipped > 0 {
            warn!(
                "Skipped {} of {} rows while loading {:?}",
                parsed.rows_skipped, parsed.rows_read, path
            );
        }

        let catalog = Self {
            movies: parsed.movies,
            rows_read: parsed.rows_read,
            rows_skipped: parsed.rows_skipped,
        };

        info!("Loaded {} movies", catalog.len());
        Ok(catalog)
    }

    /// Append a record; only used while a catalog is being assembled by hand
    pub fn insert_movie(&mut self, movie: Movie) {
        self.movies.push(movie);
        self.rows_read += 1;
    }
}
