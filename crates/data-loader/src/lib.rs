//! # Data Loader Crate
//!
//! This crate turns the movie metadata CSV export into typed records.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, MovieCatalog)
//! - **parser**: Parse CSV rows into `Movie` structs
//! - **catalog**: Load a whole file into a read-only `MovieCatalog`
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::MovieCatalog;
//! use std::path::Path;
//!
//! let catalog = MovieCatalog::load_from_file(Path::new("data/movies.csv"))?;
//! let revenues = catalog.column(|m| m.revenue);
//!
//! println!("Loaded {} movies", catalog.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod catalog;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use parser::{ParseMode, ParsedMovies};
pub use types::{Movie, MovieCatalog, MovieId};
