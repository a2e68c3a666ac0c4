//! Parser for the movie metadata CSV export.
//!
//! Header row plus comma-separated data rows. Text columns that contain commas
//! are double-quoted; the `csv` reader takes care of that, so cells reach the
//! field converters already unquoted.
//!
//! Columns are looked up by header name. Only `title` is required; any other
//! missing column behaves like a column of blank cells.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::warn;

/// What to do with a row that fails to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Stop at the first bad row
    Strict,
    /// Log the bad row and carry on
    #[default]
    Lenient,
}

/// Output of a parse: the good rows plus how many were dropped
#[derive(Debug, Default)]
pub struct ParsedMovies {
    pub movies: Vec<Movie>,
    pub rows_read: usize,
    pub rows_skipped: usize,
}

/// Parse a CSV file, failing on the first malformed row
pub fn parse_movies(path: &Path) -> Result<Vec<Movie>> {
    parse_movies_with_mode(path, ParseMode::Strict).map(|parsed| parsed.movies)
}

/// Parse a CSV file with an explicit `ParseMode`
pub fn parse_movies_with_mode(path: &Path, mode: ParseMode) -> Result<ParsedMovies> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    parse_movies_from_reader(file, &file_name, mode)
}

/// Parse CSV content from any reader.
///
/// `file_name` only feeds error messages.
pub fn parse_movies_from_reader<R: Read>(
    reader: R,
    file_name: &str,
    mode: ParseMode,
) -> Result<ParsedMovies> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns = ColumnMap::from_headers(rdr.headers()?)?;
    let mut parsed = ParsedMovies::default();

    let mut record = csv::StringRecord::new();
    loop {
        // Where the next record starts; quoted cells may span several lines
        let line_no = rdr.position().line() as usize;
        let outcome = match rdr.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {
                let line_no = record
                    .position()
                    .map(|p| p.line() as usize)
                    .unwrap_or(line_no);
                columns
                    .build_movie(&record)
                    .map_err(|reason| DataLoadError::ParseError {
                        file: file_name.to_string(),
                        line: line_no,
                        reason,
                    })
            }
            // The reader cannot resume after an I/O failure
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => Err(DataLoadError::from(e)),
        };
        parsed.rows_read += 1;

        match (outcome, mode) {
            (Ok(movie), _) => parsed.movies.push(movie),
            (Err(e), ParseMode::Strict) => return Err(e),
            (Err(e), ParseMode::Lenient) => {
                warn!(line = line_no, "Skipping row: {}", e);
                parsed.rows_skipped += 1;
            }
        }
    }

    Ok(parsed)
}

// =============================================================================
// Column resolution
// =============================================================================

/// Position of every known column in the header row
#[derive(Debug, Default)]
struct ColumnMap {
    id: Option<usize>,
    title: usize,
    vote_average: Option<usize>,
    vote_count: Option<usize>,
    status: Option<usize>,
    release_date: Option<usize>,
    revenue: Option<usize>,
    runtime: Option<usize>,
    adult: Option<usize>,
    budget: Option<usize>,
    original_language: Option<usize>,
    original_title: Option<usize>,
    overview: Option<usize>,
    popularity: Option<usize>,
    tagline: Option<usize>,
    genres: Option<usize>,
    production_companies: Option<usize>,
    production_countries: Option<usize>,
    spoken_languages: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().trim_start_matches('\u{feff}') == name)
        };

        let title = find("title").ok_or_else(|| DataLoadError::MissingColumn {
            name: "title".to_string(),
        })?;

        Ok(Self {
            id: find("id"),
            title,
            vote_average: find("vote_average"),
            vote_count: find("vote_count"),
            status: find("status"),
            release_date: find("release_date"),
            revenue: find("revenue"),
            runtime: find("runtime"),
            adult: find("adult"),
            budget: find("budget"),
            original_language: find("original_language"),
            original_title: find("original_title"),
            overview: find("overview"),
            popularity: find("popularity"),
            tagline: find("tagline"),
            genres: find("genres"),
            production_companies: find("production_companies"),
            production_countries: find("production_countries"),
            spoken_languages: find("spoken_languages"),
        })
    }

    /// Convert one CSV row; the error string becomes the `ParseError` reason
    fn build_movie(&self, record: &csv::StringRecord) -> std::result::Result<Movie, String> {
        let cell = |column: Option<usize>| {
            column
                .and_then(|idx| record.get(idx))
                .map(clean_cell)
                .unwrap_or("")
        };

        Ok(Movie {
            id: parse_number(cell(self.id), "id")?,
            title: cell(Some(self.title)).to_string(),
            vote_average: parse_float(cell(self.vote_average), "vote_average")?,
            vote_count: parse_number(cell(self.vote_count), "vote_count")?,
            status: cell(self.status).to_string(),
            release_date: cell(self.release_date).to_string(),
            revenue: parse_number(cell(self.revenue), "revenue")?,
            runtime: parse_number(cell(self.runtime), "runtime")?,
            adult: parse_flag(cell(self.adult)).map_err(|e| e.to_string())?,
            budget: parse_number(cell(self.budget), "budget")?,
            original_language: cell(self.original_language).to_string(),
            original_title: cell(self.original_title).to_string(),
            overview: cell(self.overview).to_string(),
            popularity: parse_float(cell(self.popularity), "popularity")?,
            tagline: cell(self.tagline).to_string(),
            genres: split_list(cell(self.genres)),
            production_companies: split_list(cell(self.production_companies)),
            production_countries: split_list(cell(self.production_countries)),
            spoken_languages: split_list(cell(self.spoken_languages)),
        })
    }
}

// =============================================================================
// Field converters
// =============================================================================

/// Trim whitespace and one level of stray double quotes
fn clean_cell(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .map(str::trim)
        .unwrap_or(trimmed)
}

/// Parse a numeric cell; blank means zero
fn parse_number<T>(s: &str, field: &str) -> std::result::Result<T, String>
where
    T: std::str::FromStr + Default,
    T::Err: std::fmt::Display,
{
    if s.is_empty() {
        return Ok(T::default());
    }
    s.parse()
        .map_err(|e| format!("Invalid {}: '{}' ({})", field, s, e))
}

/// Parse a floating-point cell; NaN and infinities are rejected
fn parse_float(s: &str, field: &str) -> std::result::Result<f32, String> {
    let value: f32 = parse_number(s, field)?;
    if !value.is_finite() {
        return Err(format!("Invalid {}: '{}' (not a finite number)", field, s));
    }
    Ok(value)
}

/// Parse the `adult` column
///
/// Example: "True" -> Ok(true)
///          ""     -> Ok(false)
fn parse_flag(s: &str) -> Result<bool> {
    match s {
        "True" | "true" | "TRUE" | "1" => Ok(true),
        "False" | "false" | "FALSE" | "0" | "" => Ok(false),
        _ => Err(DataLoadError::InvalidValue {
            field: "adult".to_string(),
            value: s.to_string(),
        }),
    }
}

/// Split a pipe-delimited list cell
///
/// Example: "Pixar|Disney|Pixar" -> vec!["Pixar", "Disney", "Pixar"]
fn split_list(s: &str) -> Vec<String> {
    s.split('|')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "id,title,vote_average,vote_count,status,release_date,revenue,runtime,adult,backdrop_path,budget,homepage,imdb_id,original_language,original_title,overview,popularity,poster_path,tagline,genres,production_companies,production_countries,spoken_languages";

    #[test]
    fn test_parse_full_row() {
        let csv = format!(
            "{}\n{}\n",
            HEADER,
            r#"862,Toy Story,7.97,17000,Released,22/11/1995,394436586,81,False,/bg.jpg,30000000,,tt0114709,en,Toy Story,"Woody, a cowboy doll, ...",100.5,/p.jpg,Hang on for the comedy,"Animation, Comedy|Family",Pixar,United States of America,English"#
        );

        let parsed = parse_movies_from_reader(csv.as_bytes(), "test.csv", ParseMode::Strict).unwrap();
        assert_eq!(parsed.movies.len(), 1);

        let movie = &parsed.movies[0];
        assert_eq!(movie.id, 862);
        assert_eq!(movie.title, "Toy Story");
        assert_eq!(movie.revenue, 394_436_586);
        assert_eq!(movie.runtime, 81);
        assert!(!movie.adult);
        assert_eq!(movie.budget, 30_000_000);
        assert_eq!(movie.original_language, "en");
        assert_eq!(movie.overview, "Woody, a cowboy doll, ...");
        assert_eq!(movie.genres, vec!["Animation, Comedy", "Family"]);
        assert_eq!(movie.production_countries, vec!["United States of America"]);
    }

    #[test]
    fn test_blank_cells_default_to_zero() {
        let csv = "title,revenue,popularity,genres\nBlank,,,\n";
        let parsed = parse_movies_from_reader(csv.as_bytes(), "test.csv", ParseMode::Strict).unwrap();

        let movie = &parsed.movies[0];
        assert_eq!(movie.revenue, 0);
        assert_eq!(movie.popularity, 0.0);
        assert!(movie.genres.is_empty());
        assert!(movie.release_date.is_empty());
    }

    #[test]
    fn test_missing_title_column() {
        let csv = "id,revenue\n1,100\n";
        let err = parse_movies_from_reader(csv.as_bytes(), "test.csv", ParseMode::Strict).unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn { .. }));
    }

    #[test]
    fn test_strict_mode_reports_line() {
        let csv = "title,revenue\nGood,10\nBad,lots\n";
        let err = parse_movies_from_reader(csv.as_bytes(), "test.csv", ParseMode::Strict).unwrap_err();
        match err {
            DataLoadError::ParseError { line, reason, .. } => {
                assert_eq!(line, 3);
                assert!(reason.contains("revenue"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_lenient_mode_skips_bad_rows() {
        let csv = "title,revenue,adult\nGood,10,False\nBad,lots,False\nWeird,5,maybe\nAlso Good,20,True\n";
        let parsed = parse_movies_from_reader(csv.as_bytes(), "test.csv", ParseMode::Lenient).unwrap();

        assert_eq!(parsed.rows_read, 4);
        assert_eq!(parsed.rows_skipped, 2);
        assert_eq!(parsed.movies.len(), 2);
        assert!(parsed.movies[1].adult);
    }

    #[test]
    fn test_non_finite_floats_are_rejected() {
        let csv = "title,popularity\nA,NaN\nB,inf\n";
        let err = parse_movies_from_reader(csv.as_bytes(), "test.csv", ParseMode::Strict).unwrap_err();
        match err {
            DataLoadError::ParseError { line, reason, .. } => {
                assert_eq!(line, 2);
                assert!(reason.contains("popularity"));
            }
            other => panic!("unexpected error: {other}"),
        }

        let csv = "title,vote_average,popularity\nA,nan,1.0\nB,7.5,-inf\nC,6.0,2.5\n";
        let parsed = parse_movies_from_reader(csv.as_bytes(), "test.csv", ParseMode::Lenient).unwrap();
        assert_eq!(parsed.rows_skipped, 2);
        assert_eq!(parsed.movies.len(), 1);
        assert_eq!(parsed.movies[0].title, "C");
    }

    #[test]
    fn test_line_numbers_follow_multiline_cells() {
        let csv = "title,overview,revenue\nLong,\"first line\nsecond line\nthird line\",10\nBad,short,lots\n";
        let err = parse_movies_from_reader(csv.as_bytes(), "test.csv", ParseMode::Strict).unwrap_err();
        match err {
            DataLoadError::ParseError { line, .. } => assert_eq!(line, 5),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_open_errors_keep_their_kind() {
        let dir = tempfile::tempdir().unwrap();

        let missing = parse_movies(&dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(missing, DataLoadError::FileNotFound { .. }));

        // Opening succeeds on some platforms; reading a directory never does
        let directory = parse_movies(dir.path()).unwrap_err();
        assert!(!matches!(directory, DataLoadError::FileNotFound { .. }));
    }

    #[test]
    fn test_split_list_preserves_order_and_duplicates() {
        assert_eq!(split_list("B| A |B"), vec!["B", "A", "B"]);
        assert!(split_list("").is_empty());
        assert_eq!(split_list("|X||"), vec!["X"]);
    }

    #[test]
    fn test_clean_cell_strips_stray_quotes() {
        assert_eq!(clean_cell(" \"7.5\" "), "7.5");
        assert_eq!(clean_cell("plain"), "plain");
    }
}
