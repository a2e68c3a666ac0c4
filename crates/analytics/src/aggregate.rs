//! Group-by aggregation over the record collection.
//!
//! Each function scans the records once for one grouping dimension
//! (production country, production company, genre tag, release year,
//! original language, title word) and folds them into a `Tally`. Entries are
//! created on first sight of a key and updated in place afterwards. The
//! returned tallies are unranked; hand them to `Tally::ranked` or the
//! `ordering` module for top-N output.

use crate::membership::MembershipIndex;
use crate::ordering::{self, Direction};
use crate::tally::{AggregateEntry, FrequencyTable, Tally};
use crate::words;
use data_loader::Movie;
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;
use tracing::{debug, instrument};

/// A production company's revenue total and where it has produced
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyRevenue {
    pub total_revenue: i64,
    /// Production countries seen alongside this company, duplicate-free,
    /// in first-seen order
    pub countries: Vec<String>,
}

impl CompanyRevenue {
    fn add_country(&mut self, country: &str) {
        if !self.countries.iter().any(|c| c == country) {
            self.countries.push(country.to_string());
        }
    }
}

/// Year of a `day/month/year` release date.
///
/// The year is the segment after the last `/`; it must be a non-empty run of
/// ASCII digits. Blank or malformed dates yield `None`.
///
/// Example: "22/11/1995" -> Some(1995)
///          "1995"       -> Some(1995)
///          ""           -> None
pub fn release_year(date: &str) -> Option<i32> {
    let date = date.trim();
    let segment = match date.rfind('/') {
        Some(pos) => &date[pos + 1..],
        None => date,
    };
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

// =============================================================================
// Country and company totals
// =============================================================================

/// Sum a numeric field per production country.
///
/// A movie with k countries contributes its value to each of the k totals.
#[instrument(skip_all, fields(movies = movies.len()))]
pub fn country_totals<T, F>(movies: &[Movie], field: F) -> Tally<String, T>
where
    T: AddAssign + Copy + Default,
    F: Fn(&Movie) -> T,
{
    let mut totals = Tally::new();
    for movie in movies {
        let value = field(movie);
        for country in &movie.production_countries {
            *totals.entry_or_insert_with(country.clone(), T::default) += value;
        }
    }
    debug!("Aggregated totals for {} countries", totals.len());
    totals
}

/// Number of (movie, country) pairs per production country
#[instrument(skip_all, fields(movies = movies.len()))]
pub fn country_movie_counts(movies: &[Movie]) -> Tally<String, u32> {
    country_totals(movies, |_| 1u32)
}

/// Revenue total and produced-in countries per production company
#[instrument(skip_all, fields(movies = movies.len()))]
pub fn company_revenue(movies: &[Movie]) -> Tally<String, CompanyRevenue> {
    let mut companies: Tally<String, CompanyRevenue> = Tally::new();
    for movie in movies {
        for company in &movie.production_companies {
            let info = companies.entry_or_insert_with(company.clone(), CompanyRevenue::default);
            info.total_revenue += movie.revenue;
            for country in &movie.production_countries {
                info.add_country(country);
            }
        }
    }
    debug!("Aggregated revenue for {} companies", companies.len());
    companies
}

// =============================================================================
// Categorical frequencies
// =============================================================================

/// Occurrences of every genre tag, alphabetical.
///
/// Some exports pack several genres into one pipe item ("Animation, Comedy"),
/// so each item is split again on `,`. The tags are then ordered ascending
/// and counted run by run.
#[instrument(skip_all, fields(movies = movies.len()))]
pub fn genre_frequency(movies: &[Movie]) -> Vec<AggregateEntry<String, u32>> {
    let tags: Vec<String> = movies
        .iter()
        .flat_map(|movie| movie.genres.iter())
        .flat_map(|genre| genre.split(','))
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect();

    let sorted = ordering::sort_by_key(tags, Direction::Ascending, |tag| tag.clone());

    let mut counts: Vec<AggregateEntry<String, u32>> = Vec::new();
    for tag in sorted {
        match counts.last_mut() {
            Some(last) if last.key == tag => last.value += 1,
            _ => counts.push(AggregateEntry::new(tag, 1)),
        }
    }
    counts
}

/// Movies per release year, including the excluded years.
///
/// Records without a usable date are left out.
#[instrument(skip_all, fields(movies = movies.len()))]
pub fn release_year_counts(movies: &[Movie]) -> Tally<i32, u32> {
    let mut years = Tally::new();
    let mut undated = 0usize;
    for movie in movies {
        match release_year(&movie.release_date) {
            Some(year) => *years.entry_or_insert_with(year, || 0) += 1,
            None => undated += 1,
        }
    }
    debug!("Counted {} release years ({} undated movies)", years.len(), undated);
    years
}

/// Movies per original language
#[instrument(skip_all, fields(movies = movies.len()))]
pub fn language_distribution(movies: &[Movie]) -> Tally<String, u32> {
    let mut languages: FrequencyTable = Tally::new();
    for movie in movies {
        languages.record(&movie.original_language);
    }
    languages
}

// =============================================================================
// Title word frequencies
// =============================================================================

fn record_title_words(table: &mut FrequencyTable, title: &str, stop_words: &MembershipIndex) {
    for word in words::title_words(title) {
        if !stop_words.contains(&word) {
            table.record(&word);
        }
    }
}

/// Frequency of every non-stop-word across all titles
#[instrument(skip_all, fields(movies = movies.len()))]
pub fn title_word_frequency(movies: &[Movie], stop_words: &MembershipIndex) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for movie in movies {
        record_title_words(&mut table, &movie.title, stop_words);
    }
    debug!("Found {} distinct title words", table.len());
    table
}

/// Title word frequencies nested under each original language.
///
/// Movies whose language is a stop-language are skipped entirely. A language
/// only gets a table once one of its titles yields a counted word.
#[instrument(skip_all, fields(movies = movies.len()))]
pub fn title_words_by_language(
    movies: &[Movie],
    stop_words: &MembershipIndex,
    stop_languages: &MembershipIndex,
) -> Tally<String, FrequencyTable> {
    let mut by_language: Tally<String, FrequencyTable> = Tally::new();
    for movie in movies {
        if stop_languages.contains(&movie.original_language) {
            continue;
        }
        for word in words::title_words(&movie.title) {
            if stop_words.contains(&word) {
                continue;
            }
            by_language
                .entry_or_insert_with(movie.original_language.clone(), FrequencyTable::new)
                .record(&word);
        }
    }
    debug!("Built word tables for {} languages", by_language.len());
    by_language
}

/// Title word frequencies nested under each release year.
///
/// Skipped: movies in a stop-language, movies without a usable date, and
/// movies from an excluded year. A year gets a (possibly empty) table as soon
/// as one of its movies is kept.
#[instrument(skip_all, fields(movies = movies.len()))]
pub fn title_words_by_year(
    movies: &[Movie],
    stop_words: &MembershipIndex,
    stop_languages: &MembershipIndex,
    excluded_years: &[i32],
) -> Tally<i32, FrequencyTable> {
    let mut by_year: Tally<i32, FrequencyTable> = Tally::new();
    for movie in movies {
        if stop_languages.contains(&movie.original_language) {
            continue;
        }
        let Some(year) = release_year(&movie.release_date) else {
            continue;
        };
        if excluded_years.contains(&year) {
            continue;
        }
        let table = by_year.entry_or_insert_with(year, FrequencyTable::new);
        record_title_words(table, &movie.title, stop_words);
    }
    debug!("Built word tables for {} years", by_year.len());
    by_year
}
