//! Console rendering for each report section

use analytics::{AggregateEntry, CompanyRevenue};
use colored::Colorize;
use report::{AnalyticsReport, CorrelationPair, CountryLeaders, GroupedWords, MovieField, RankedMovie};
use std::fmt::Display;

fn header(title: &str) {
    println!("\n{}", title.bold().blue());
}

pub fn report(report: &AnalyticsReport) {
    println!("{}", format!("Report over {} movies", report.movie_count).bold());
    companies(&report.top_companies);
    country_leaders(&report.country_leaders);
    counts("Genres", &report.genre_frequency);
    counts("Release years", &report.release_years);
    counts("Original languages", &report.language_distribution);
    top_movies(MovieField::Revenue, &report.top_by_revenue);
    top_movies(MovieField::Popularity, &report.top_by_popularity);
    counts("Title words", &report.title_words);
    grouped_words("Title words by language", &report.words_by_language);
    grouped_words("Title words by year", &report.words_by_year);
    correlations(&report.correlations);
}

pub fn top_movies(field: MovieField, movies: &[RankedMovie]) {
    header(&format!("Top movies by {}", field.label()));
    for (i, movie) in movies.iter().enumerate() {
        println!(
            "{}. {} - revenue {} - popularity {:.2}",
            (i + 1).to_string().green(),
            movie.title,
            movie.revenue,
            movie.popularity
        );
        if !movie.production_companies.is_empty() {
            println!("   {}", movie.production_companies.join(", ").dimmed());
        }
    }
}

pub fn companies(companies: &[AggregateEntry<String, CompanyRevenue>]) {
    header("Top production companies by revenue");
    for (i, entry) in companies.iter().enumerate() {
        println!(
            "{}. {}: {}",
            (i + 1).to_string().green(),
            entry.key,
            entry.value.total_revenue
        );
        if !entry.value.countries.is_empty() {
            println!("   {}", entry.value.countries.join(", ").dimmed());
        }
    }
}

pub fn country_leaders(leaders: &CountryLeaders) {
    header("Leading production countries");
    leader("Highest total revenue", leaders.highest_revenue.as_ref());
    leader("Highest total rating", leaders.highest_rating.as_ref());
    leader("Highest total popularity", leaders.highest_popularity.as_ref());
    leader("Most movies produced", leaders.most_movies.as_ref());
}

fn leader<V: Display>(label: &str, entry: Option<&AggregateEntry<String, V>>) {
    match entry {
        Some(entry) => println!("{}{}: {} ({})", "• ".green(), label, entry.key, entry.value),
        None => println!("{}{}: {}", "• ".green(), label, "none".dimmed()),
    }
}

pub fn counts<K: Display>(title: &str, entries: &[AggregateEntry<K, u32>]) {
    header(title);
    for entry in entries {
        println!("  {:<30} {}", entry.key, entry.value);
    }
}

pub fn grouped_words<K: Display>(title: &str, groups: &[GroupedWords<K>]) {
    header(title);
    for group in groups {
        println!("{}", group.group.to_string().cyan());
        for word in &group.words {
            println!("  {:<24} {}", word.key, word.value);
        }
    }
}

pub fn correlations(pairs: &[CorrelationPair]) {
    header("Correlations");
    for pair in pairs {
        let label = format!("{} vs {}", pair.x.label(), pair.y.label());
        match &pair.result.diagnostic {
            Some(issue) => println!("  {:<26} {}", label, issue.to_string().red()),
            None => println!(
                "  {:<26} r = {:>7.4}   y = {:.4}x + {:.4}",
                label, pair.result.coefficient, pair.result.slope, pair.result.intercept
            ),
        }
    }
}
