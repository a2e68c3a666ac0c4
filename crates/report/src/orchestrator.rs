//! # Report Orchestrator
//!
//! Runs the analytics engine section by section over a loaded catalog:
//! 1. Company revenue ranking and per-country leaders
//! 2. Genre, release-year and language frequencies
//! 3. Top movies by revenue and by popularity
//! 4. Title word frequencies (overall, per language, per year)
//! 5. Pairwise correlations
//!
//! Sections only read the record slice, so with `parallel` enabled the
//! independent groups run on the rayon pool via `rayon::join`. Output is the
//! same either way.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, instrument};

use analytics::aggregate;
use analytics::{correlate, top_n, AggregateEntry, CompanyRevenue, Direction, FrequencyTable, MembershipIndex, Tally};
use data_loader::{Movie, MovieCatalog};

use crate::config::ReportConfig;
use crate::sections::*;

/// Coordinates every report section
#[derive(Debug, Clone)]
pub struct ReportOrchestrator {
    config: ReportConfig,
    stop_words: MembershipIndex,
    stop_languages: MembershipIndex,
}

impl ReportOrchestrator {
    /// Create an orchestrator; both exclusion indices are built here, once
    pub fn new(config: ReportConfig) -> Self {
        let stop_words = config.analysis.stop_word_index();
        let stop_languages = config.analysis.stop_language_index();
        Self {
            config,
            stop_words,
            stop_languages,
        }
    }

    /// Create an orchestrator from a TOML or YAML config file
    pub fn from_config_file(path: &Path) -> Result<Self> {
        let config = ReportConfig::load(path)
            .with_context(|| format!("Failed to load report config {}", path.display()))?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Compute every section
    #[instrument(skip_all, fields(movies = catalog.len(), parallel = self.config.parallel))]
    pub fn run(&self, catalog: &MovieCatalog) -> AnalyticsReport {
        let start = Instant::now();
        let movies = catalog.movies();

        let (
            (top_companies, country_leaders),
            ((genre_frequency, release_years, language_distribution), (rankings, (words, correlations))),
        ) = self.join(
            || (self.top_companies(movies), self.country_leaders(movies)),
            || {
                self.join(
                    || {
                        (
                            self.genre_frequency(movies),
                            self.release_years(movies),
                            self.language_distribution(movies),
                        )
                    },
                    || {
                        self.join(
                            || {
                                (
                                    self.top_movies(movies, MovieField::Revenue),
                                    self.top_movies(movies, MovieField::Popularity),
                                )
                            },
                            || {
                                self.join(
                                    || {
                                        (
                                            self.title_words(movies),
                                            self.words_by_language(movies),
                                            self.words_by_year(movies),
                                        )
                                    },
                                    || self.correlations(movies),
                                )
                            },
                        )
                    },
                )
            },
        );

        let (top_by_revenue, top_by_popularity) = rankings;
        let (title_words, words_by_language, words_by_year) = words;

        info!("Report computed in {:?}", start.elapsed());

        AnalyticsReport {
            movie_count: movies.len(),
            top_companies,
            country_leaders,
            genre_frequency,
            release_years,
            language_distribution,
            top_by_revenue,
            top_by_popularity,
            title_words,
            words_by_language,
            words_by_year,
            correlations,
        }
    }

    fn join<A, B, RA, RB>(&self, a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        if self.config.parallel {
            rayon::join(a, b)
        } else {
            (a(), b())
        }
    }

    // =========================================================================
    // Sections
    // =========================================================================

    /// Production companies ranked by total revenue
    #[instrument(skip_all)]
    pub fn top_companies(&self, movies: &[Movie]) -> Vec<AggregateEntry<String, CompanyRevenue>> {
        let mut ranked = aggregate::company_revenue(movies)
            .ranked(Direction::Descending, |entry| entry.value.total_revenue);
        ranked.truncate(self.config.limits.top_companies);
        ranked
    }

    /// Which country leads revenue, rating, popularity and movie count
    #[instrument(skip_all)]
    pub fn country_leaders(&self, movies: &[Movie]) -> CountryLeaders {
        CountryLeaders {
            highest_revenue: aggregate::country_totals(movies, |m| m.revenue)
                .highest()
                .cloned(),
            highest_rating: aggregate::country_totals(movies, |m| m.vote_average)
                .highest()
                .cloned(),
            highest_popularity: aggregate::country_totals(movies, |m| m.popularity)
                .highest()
                .cloned(),
            most_movies: aggregate::country_movie_counts(movies).highest().cloned(),
        }
    }

    /// Every genre tag with its count, alphabetical
    #[instrument(skip_all)]
    pub fn genre_frequency(&self, movies: &[Movie]) -> Vec<AggregateEntry<String, u32>> {
        aggregate::genre_frequency(movies)
    }

    /// Movies per release year, busiest year first
    #[instrument(skip_all)]
    pub fn release_years(&self, movies: &[Movie]) -> Vec<AggregateEntry<i32, u32>> {
        aggregate::release_year_counts(movies).ranked_by_value()
    }

    /// Movies per original language, most common first
    #[instrument(skip_all)]
    pub fn language_distribution(&self, movies: &[Movie]) -> Vec<AggregateEntry<String, u32>> {
        aggregate::language_distribution(movies).ranked_by_value()
    }

    /// Highest movies by `field`
    #[instrument(skip_all, fields(field = field.label()))]
    pub fn top_movies(&self, movies: &[Movie], field: MovieField) -> Vec<RankedMovie> {
        let refs: Vec<&Movie> = movies.iter().collect();
        let limit = self.config.limits.top_movies;

        let top = match field {
            // Integer revenue keeps full precision
            MovieField::Revenue => top_n(refs, Direction::Descending, limit, |m| m.revenue),
            other => top_n(refs, Direction::Descending, limit, |m| other.value(m)),
        };
        top.into_iter().map(RankedMovie::from).collect()
    }

    /// Most common title words overall
    #[instrument(skip_all)]
    pub fn title_words(&self, movies: &[Movie]) -> Vec<AggregateEntry<String, u32>> {
        let mut ranked = aggregate::title_word_frequency(movies, &self.stop_words).ranked_by_value();
        ranked.truncate(self.config.limits.top_words);
        ranked
    }

    /// Most common title words per original language, languages in
    /// first-seen order
    #[instrument(skip_all)]
    pub fn words_by_language(&self, movies: &[Movie]) -> Vec<GroupedWords<String>> {
        let tables =
            aggregate::title_words_by_language(movies, &self.stop_words, &self.stop_languages);
        let limit = self.config.limits.words_per_language;

        tables
            .into_entries()
            .into_iter()
            .map(|entry| GroupedWords {
                group: entry.key,
                words: top_words(entry.value, limit),
            })
            .collect()
    }

    /// Most common title words per release year, newest year first
    #[instrument(skip_all)]
    pub fn words_by_year(&self, movies: &[Movie]) -> Vec<GroupedWords<i32>> {
        let tables: Tally<i32, FrequencyTable> = aggregate::title_words_by_year(
            movies,
            &self.stop_words,
            &self.stop_languages,
            &self.config.analysis.excluded_years,
        );
        let limits = self.config.limits;

        tables
            .ranked(Direction::Descending, |entry| entry.key)
            .into_iter()
            .take(limits.years_shown)
            .map(|entry| GroupedWords {
                group: entry.key,
                words: top_words(entry.value, limits.words_per_year),
            })
            .collect()
    }

    /// The standard field pairs
    #[instrument(skip_all)]
    pub fn correlations(&self, movies: &[Movie]) -> Vec<CorrelationPair> {
        CORRELATION_PAIRS
            .iter()
            .map(|&(x, y)| self.correlation(movies, x, y))
            .collect()
    }

    /// Correlate any two fields
    pub fn correlation(&self, movies: &[Movie], x: MovieField, y: MovieField) -> CorrelationPair {
        let xs: Vec<f64> = movies.iter().map(|m| x.value(m)).collect();
        let ys: Vec<f64> = movies.iter().map(|m| y.value(m)).collect();
        CorrelationPair {
            x,
            y,
            result: correlate(&xs, &ys),
        }
    }
}

impl Default for ReportOrchestrator {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}

fn top_words(table: FrequencyTable, limit: usize) -> Vec<AggregateEntry<String, u32>> {
    let mut ranked = table.ranked_by_value();
    ranked.truncate(limit);
    ranked
}
