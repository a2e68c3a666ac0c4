//! Integration tests for the analytics engine.
//!
//! These run the aggregator, the ordering engine and the correlation
//! calculator together over a small hand-built catalog.

use analytics::aggregate;
use analytics::{correlate, AnalysisConfig, Direction, MembershipIndex};
use data_loader::{Movie, MovieCatalog};

fn create_test_catalog() -> MovieCatalog {
    let rows = [
        // title, date, revenue, popularity, runtime, lang, countries, companies
        ("Toy Story", "22/11/1995", 394_436_586, 100.5, 81, "en", &["US"][..], &["Pixar"][..]),
        ("Spirited Away", "20/07/2001", 274_925_095, 90.1, 125, "ja", &["JP"][..], &["Ghibli"][..]),
        ("The Lion King", "24/06/1994", 763_455_561, 120.0, 88, "en", &["US"][..], &["Disney"][..]),
        ("Chicken Run", "23/06/2000", 224_834_564, 40.2, 84, "en", &["UK", "US"][..], &["Aardman", "DreamWorks"][..]),
        ("Toy Story 2", "24/11/1999", 497_366_869, 80.3, 92, "en", &["US"][..], &["Pixar"][..]),
        ("Princess Mononoke", "12/07/1997", 159_375_308, 75.0, 134, "ja", &["JP"][..], &["Ghibli"][..]),
        ("Future Toy", "01/01/2026", 0, 1.0, 0, "en", &["US"][..], &["Pixar"][..]),
        ("Kazakh Tale", "", 10, 0.5, 70, "kk", &["KZ"][..], &[][..]),
    ];

    let movies = rows
        .iter()
        .map(|&(title, date, revenue, popularity, runtime, lang, countries, companies)| Movie {
            title: title.to_string(),
            release_date: date.to_string(),
            revenue,
            popularity,
            runtime,
            original_language: lang.to_string(),
            production_countries: countries.iter().map(|s| s.to_string()).collect(),
            production_companies: companies.iter().map(|s| s.to_string()).collect(),
            ..Movie::default()
        })
        .collect();

    MovieCatalog::from_movies(movies)
}

#[test]
fn test_country_ranking_scenario() {
    let movies = vec![
        Movie {
            title: "A".to_string(),
            production_countries: vec!["US".to_string()],
            revenue: 100,
            ..Movie::default()
        },
        Movie {
            title: "B".to_string(),
            production_countries: vec!["US".to_string(), "UK".to_string()],
            revenue: 50,
            ..Movie::default()
        },
    ];

    let ranked = aggregate::country_totals(&movies, |m| m.revenue).ranked_by_value();
    assert_eq!(ranked.len(), 2);
    assert_eq!((ranked[0].key.as_str(), ranked[0].value), ("US", 150));
    assert_eq!((ranked[1].key.as_str(), ranked[1].value), ("UK", 50));
}

#[test]
fn test_stop_word_scenario() {
    let stop_words = MembershipIndex::build(["the", "a"]);
    let table = aggregate::title_word_frequency(&[Movie::titled("The Great Adventure")], &stop_words);

    let words: Vec<(String, u32)> = table.into_entries().into_iter().map(|e| (e.key, e.value)).collect();
    assert_eq!(words, vec![("great".to_string(), 1), ("adventure".to_string(), 1)]);
}

#[test]
fn test_release_year_scenario() {
    let mut a = Movie::titled("A");
    a.release_date = "01/02/1999".to_string();
    let mut b = Movie::titled("B");
    b.release_date = "05/06/1999".to_string();

    let years = aggregate::release_year_counts(&[a, b]);
    assert_eq!(years.len(), 1);
    assert_eq!(years.get(&1999), Some(&2));
}

#[test]
fn test_top_movies_by_revenue() {
    let catalog = create_test_catalog();

    let top = analytics::top_n(
        catalog.movies().iter().collect(),
        Direction::Descending,
        3,
        |m: &&Movie| m.revenue,
    );
    let titles: Vec<&str> = top.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["The Lion King", "Toy Story 2", "Toy Story"]);
}

#[test]
fn test_company_ranking() {
    let catalog = create_test_catalog();

    let ranked = aggregate::company_revenue(catalog.movies())
        .ranked(Direction::Descending, |e| e.value.total_revenue);

    assert_eq!(ranked[0].key, "Pixar");
    assert_eq!(ranked[0].value.total_revenue, 394_436_586 + 497_366_869);
    assert_eq!(ranked[0].value.countries, vec!["US"]);

    let dreamworks = ranked.iter().find(|e| e.key == "DreamWorks").unwrap();
    assert_eq!(dreamworks.value.countries, vec!["UK", "US"]);
}

#[test]
fn test_most_producing_country() {
    let catalog = create_test_catalog();

    let counts = aggregate::country_movie_counts(catalog.movies());
    let leader = counts.highest().unwrap();
    assert_eq!(leader.key, "US");
    assert_eq!(leader.value, 5);
}

#[test]
fn test_words_by_year_with_default_config() {
    let catalog = create_test_catalog();
    let config = AnalysisConfig::default();

    let tables = aggregate::title_words_by_year(
        catalog.movies(),
        &config.stop_word_index(),
        &config.stop_language_index(),
        &config.excluded_years,
    );

    // 2026 is excluded, the Kazakh title is undated and a stop-language
    assert!(tables.get(&2026).is_none());
    assert_eq!(tables.len(), 6);
    assert_eq!(tables.get(&1999).unwrap().count("toy"), 1);
    assert_eq!(tables.get(&1994).unwrap().count("the"), 0);

    let newest_first = tables.ranked(Direction::Descending, |e| e.key);
    assert_eq!(newest_first[0].key, 2001);
}

#[test]
fn test_words_by_language_with_default_config() {
    let catalog = create_test_catalog();
    let config = AnalysisConfig::default();

    let tables = aggregate::title_words_by_language(
        catalog.movies(),
        &config.stop_word_index(),
        &config.stop_language_index(),
    );

    let languages: Vec<&String> = tables.keys().collect();
    assert_eq!(languages, vec!["en", "ja"]);

    let english = tables.get(&"en".to_string()).unwrap();
    assert_eq!(english.count("toy"), 3);
    assert_eq!(english.count("story"), 2);
}

#[test]
fn test_runtime_revenue_correlation() {
    let catalog = create_test_catalog();

    let runtimes = catalog.column(|m| m.runtime);
    let revenues = catalog.column(|m| m.revenue);
    let result = correlate(&runtimes, &revenues);

    assert!(result.is_valid());
    assert_eq!(result.n, catalog.len());
    assert!(result.coefficient >= -1.0 && result.coefficient <= 1.0);
}
