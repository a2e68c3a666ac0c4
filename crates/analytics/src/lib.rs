//! Ranking, grouping and statistics engine for movie metadata.
//!
//! This crate provides:
//! - `ordering`: one stable merge sort, parametrized by a key closure and a
//!   `Direction`, behind every ranked list
//! - `membership`: sorted reference lists with binary-search lookups
//!   (stop-words, stop-languages)
//! - `tally` / `aggregate`: single-pass group-by over the records
//!   (country, company, genre, release year, language, title word)
//! - `correlation`: Pearson r and simple linear regression
//! - `config`: the exclusion lists the word tables consume
//!
//! Nothing here performs I/O or formatting; every function returns plain data.
//!
//! ## Example Usage
//! ```ignore
//! use analytics::{aggregate, AnalysisConfig};
//!
//! let config = AnalysisConfig::default();
//! let stop_words = config.stop_word_index();
//!
//! let top_countries = aggregate::country_totals(catalog.movies(), |m| m.revenue)
//!     .ranked_by_value();
//! let words = aggregate::title_word_frequency(catalog.movies(), &stop_words)
//!     .ranked_by_value();
//! ```

pub mod aggregate;
pub mod config;
pub mod correlation;
pub mod membership;
pub mod ordering;
pub mod tally;
pub mod words;

// Re-export main types
pub use aggregate::CompanyRevenue;
pub use config::AnalysisConfig;
pub use correlation::{correlate, CorrelationIssue, CorrelationResult, Sample};
pub use membership::MembershipIndex;
pub use ordering::{sort_by_key, top_n, Direction};
pub use tally::{AggregateEntry, FrequencyTable, Tally};
