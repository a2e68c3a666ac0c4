use anyhow::{Context, Result};
use data_loader::MovieCatalog;
use std::path::PathBuf;
use std::time::Instant;

fn main() -> Result<()> {
    let data_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/movies.csv"));

    println!("Loading {}...\n", data_path.display());

    let start = Instant::now();
    let catalog = MovieCatalog::load_from_file(&data_path)
        .with_context(|| format!("Failed to load {}", data_path.display()))?;
    let elapsed = start.elapsed();

    let (movies, rows, skipped) = catalog.counts();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Rows read: {}", rows);
    println!("Movies kept: {}", movies);
    println!("Rows skipped: {}", skipped);
    println!("\nPerformance: {:.0} rows/second",
             rows as f64 / elapsed.as_secs_f64());
    Ok(())
}
