mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use data_loader::MovieCatalog;
use report::{MovieField, ReportConfig, ReportOrchestrator};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// movie-stats - Movie Dataset Analytics
#[derive(Parser)]
#[command(name = "movie-stats")]
#[command(about = "Rankings, frequency tables and correlations over a movie metadata CSV", long_about = None)]
struct Cli {
    /// Path to the movie metadata CSV
    #[arg(short, long, default_value = "data/movies.csv", global = true)]
    data: PathBuf,

    /// Report configuration file (TOML or YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print the selected section as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every section
    Report,

    /// Highest movies by a metric
    Top {
        #[arg(long, value_enum, default_value = "revenue")]
        by: TopMetric,

        /// Number of movies to show (overrides the config)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Production companies ranked by total revenue
    Companies,

    /// Leading production country per metric
    Countries,

    /// Genre frequencies
    Genres,

    /// Movies per release year
    Years,

    /// Movies per original language
    Languages,

    /// Title word frequencies
    Words {
        #[arg(long, value_enum, default_value = "all")]
        by: WordGrouping,
    },

    /// Pairwise correlations between numeric fields
    Correlations,

    /// Write the default configuration to a file
    InitConfig {
        /// Destination (.toml, .yaml or .yml)
        path: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TopMetric {
    Revenue,
    Popularity,
}

impl From<TopMetric> for MovieField {
    fn from(metric: TopMetric) -> Self {
        match metric {
            TopMetric::Revenue => MovieField::Revenue,
            TopMetric::Popularity => MovieField::Popularity,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum WordGrouping {
    All,
    Language,
    Year,
}

fn main() -> Result<()> {
    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Commands::InitConfig { path } = &cli.command {
        return handle_init_config(path);
    }

    let mut config = match &cli.config {
        Some(path) => ReportConfig::load(path)?,
        None => ReportConfig::default(),
    };

    if let Commands::Top {
        limit: Some(limit), ..
    } = &cli.command
    {
        config.limits.top_movies = *limit;
    }

    eprintln!("Loading movies from {}...", cli.data.display());
    let start = Instant::now();
    let catalog = MovieCatalog::load_from_file(&cli.data)
        .with_context(|| format!("Failed to load movie dataset {}", cli.data.display()))?;
    let (kept, _, skipped) = catalog.counts();
    eprintln!(
        "{} Loaded {} movies ({} rows skipped) in {:?}",
        "✓".green(),
        kept,
        skipped,
        start.elapsed()
    );

    let orchestrator = ReportOrchestrator::new(config);
    let movies = catalog.movies();
    let json = cli.json;

    match cli.command {
        Commands::Report => {
            let report = orchestrator.run(&catalog);
            output(json, &report, || render::report(&report))?
        }
        Commands::Top { by, .. } => {
            let field = MovieField::from(by);
            let top = orchestrator.top_movies(movies, field);
            output(json, &top, || render::top_movies(field, &top))?
        }
        Commands::Companies => {
            let companies = orchestrator.top_companies(movies);
            output(json, &companies, || render::companies(&companies))?
        }
        Commands::Countries => {
            let leaders = orchestrator.country_leaders(movies);
            output(json, &leaders, || render::country_leaders(&leaders))?
        }
        Commands::Genres => {
            let genres = orchestrator.genre_frequency(movies);
            output(json, &genres, || render::counts("Genres", &genres))?
        }
        Commands::Years => {
            let years = orchestrator.release_years(movies);
            output(json, &years, || render::counts("Release years", &years))?
        }
        Commands::Languages => {
            let languages = orchestrator.language_distribution(movies);
            output(json, &languages, || {
                render::counts("Original languages", &languages)
            })?
        }
        Commands::Words { by } => match by {
            WordGrouping::All => {
                let words = orchestrator.title_words(movies);
                output(json, &words, || render::counts("Title words", &words))?
            }
            WordGrouping::Language => {
                let groups = orchestrator.words_by_language(movies);
                output(json, &groups, || {
                    render::grouped_words("Title words by language", &groups)
                })?
            }
            WordGrouping::Year => {
                let groups = orchestrator.words_by_year(movies);
                output(json, &groups, || {
                    render::grouped_words("Title words by year", &groups)
                })?
            }
        },
        Commands::Correlations => {
            let pairs = orchestrator.correlations(movies);
            output(json, &pairs, || render::correlations(&pairs))?
        }
        Commands::InitConfig { .. } => {}
    }

    Ok(())
}

/// Handle the 'init-config' command
fn handle_init_config(path: &Path) -> Result<()> {
    ReportConfig::default()
        .save(path)
        .with_context(|| format!("Failed to write default config to {}", path.display()))?;
    println!("{} Wrote default configuration to {}", "✓".green(), path.display());
    Ok(())
}

/// Print `value` as JSON or through its text renderer
fn output<T, F>(json: bool, value: &T, text: F) -> Result<()>
where
    T: serde::Serialize,
    F: FnOnce(),
{
    if json {
        let rendered =
            serde_json::to_string_pretty(value).context("Failed to serialize output as JSON")?;
        println!("{}", rendered);
    } else {
        text();
    }
    Ok(())
}
