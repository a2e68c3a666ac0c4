//! # Report Crate
//!
//! Turns a loaded `MovieCatalog` into a full `AnalyticsReport`.
//!
//! - **config**: `ReportConfig` file loading and saving (TOML or YAML)
//! - **sections**: Owned, serializable section types
//! - **orchestrator**: Runs each section, optionally in parallel
//!
//! ```ignore
//! use data_loader::MovieCatalog;
//! use report::{ReportConfig, ReportOrchestrator};
//!
//! let catalog = MovieCatalog::load_from_file(Path::new("data/movies.csv"))?;
//! let report = ReportOrchestrator::new(ReportConfig::default()).run(&catalog);
//! ```

pub mod config;
pub mod orchestrator;
pub mod sections;

pub use config::{ReportConfig, ReportLimits};
pub use orchestrator::ReportOrchestrator;
pub use sections::{
    AnalyticsReport, CorrelationPair, CountryLeaders, GroupedWords, MovieField, RankedMovie,
    CORRELATION_PAIRS,
};
