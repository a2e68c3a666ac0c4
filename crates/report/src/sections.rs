//! Report section types.
//!
//! Everything the orchestrator hands to a renderer: plain, owned,
//! serializable data with no formatting applied.

use analytics::{AggregateEntry, CompanyRevenue, CorrelationResult};
use data_loader::Movie;
use serde::{Deserialize, Serialize};

/// Numeric movie fields that can be ranked or correlated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovieField {
    Runtime,
    Rating,
    Popularity,
    Revenue,
    Budget,
}

impl MovieField {
    pub fn label(self) -> &'static str {
        match self {
            MovieField::Runtime => "runtime",
            MovieField::Rating => "rating",
            MovieField::Popularity => "popularity",
            MovieField::Revenue => "revenue",
            MovieField::Budget => "budget",
        }
    }

    /// The field's value for one movie, widened to `f64`
    pub fn value(self, movie: &Movie) -> f64 {
        match self {
            MovieField::Runtime => f64::from(movie.runtime),
            MovieField::Rating => f64::from(movie.vote_average),
            MovieField::Popularity => f64::from(movie.popularity),
            MovieField::Revenue => movie.revenue as f64,
            MovieField::Budget => movie.budget as f64,
        }
    }
}

/// The pairs correlated by a full report
pub const CORRELATION_PAIRS: [(MovieField, MovieField); 10] = [
    (MovieField::Runtime, MovieField::Rating),
    (MovieField::Runtime, MovieField::Popularity),
    (MovieField::Runtime, MovieField::Revenue),
    (MovieField::Revenue, MovieField::Popularity),
    (MovieField::Rating, MovieField::Popularity),
    (MovieField::Revenue, MovieField::Rating),
    (MovieField::Budget, MovieField::Revenue),
    (MovieField::Budget, MovieField::Runtime),
    (MovieField::Budget, MovieField::Popularity),
    (MovieField::Budget, MovieField::Rating),
];

/// One row of a "top movies" list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMovie {
    pub title: String,
    pub revenue: i64,
    pub popularity: f32,
    pub production_companies: Vec<String>,
}

impl From<&Movie> for RankedMovie {
    fn from(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            revenue: movie.revenue,
            popularity: movie.popularity,
            production_companies: movie.production_companies.clone(),
        }
    }
}

/// Leading production country for each per-country total
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryLeaders {
    pub highest_revenue: Option<AggregateEntry<String, i64>>,
    pub highest_rating: Option<AggregateEntry<String, f32>>,
    pub highest_popularity: Option<AggregateEntry<String, f32>>,
    pub most_movies: Option<AggregateEntry<String, u32>>,
}

/// A ranked word list under one grouping key (a language or a year)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedWords<K> {
    pub group: K,
    pub words: Vec<AggregateEntry<String, u32>>,
}

/// Correlation of one field pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationPair {
    pub x: MovieField,
    pub y: MovieField,
    pub result: CorrelationResult,
}

/// Every section of a full run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub movie_count: usize,
    pub top_companies: Vec<AggregateEntry<String, CompanyRevenue>>,
    pub country_leaders: CountryLeaders,
    pub genre_frequency: Vec<AggregateEntry<String, u32>>,
    pub release_years: Vec<AggregateEntry<i32, u32>>,
    pub language_distribution: Vec<AggregateEntry<String, u32>>,
    pub top_by_revenue: Vec<RankedMovie>,
    pub top_by_popularity: Vec<RankedMovie>,
    pub title_words: Vec<AggregateEntry<String, u32>>,
    pub words_by_language: Vec<GroupedWords<String>>,
    pub words_by_year: Vec<GroupedWords<i32>>,
    pub correlations: Vec<CorrelationPair>,
}
