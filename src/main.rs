//! GapFinder: business opportunity recommendations for an area
//!
//! This is the main entrypoint that loads the dataset once and answers one or
//! more area queries against it.

use anyhow::{Context, Result};
use clap::Parser;
use gapfinder::cli::DEFAULT_AREA;
use gapfinder::{load_dataset, recommend_with, viz, Args, Dataset, RecommendParams};
use log::{debug, warn};
use std::io::{self, BufRead, Write};
use std::time::Instant;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let params = args.recommend_params()?;

    let load_start = Instant::now();
    let dataset = load_dataset(&args.input)
        .with_context(|| format!("Failed to load dataset from {}", args.input))?;
    debug!("Dataset loaded in {:.2}s", load_start.elapsed().as_secs_f64());

    match &args.area {
        Some(area) => run_query(&args, &dataset, &params, area),
        None => run_interactive(&args, &dataset, &params),
    }
}

/// Answer area names read from stdin until EOF
fn run_interactive(args: &Args, dataset: &Dataset, params: &RecommendParams) -> Result<()> {
    println!("=== Business Recommendation System ===");
    println!("Type an area name to find profitable business opportunities.");
    println!("(blank line = {}, Ctrl-D to quit)\n", DEFAULT_AREA);

    let stdin = io::stdin();
    loop {
        print!("Area> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            break;
        }

        let area = match line.trim() {
            "" => DEFAULT_AREA,
            area => area,
        };
        run_query(args, dataset, params, area)?;
        println!();
    }

    Ok(())
}

/// Run the pipeline for one area and print the result
fn run_query(args: &Args, dataset: &Dataset, params: &RecommendParams, area: &str) -> Result<()> {
    let start_time = Instant::now();
    let results = recommend_with(dataset, area, params)?;
    debug!(
        "Query '{}' took {:.3}s",
        area,
        start_time.elapsed().as_secs_f64()
    );

    if args.json {
        println!("{}", viz::render_json(&results)?);
    } else if results.is_empty() {
        println!("No recommendations found for {}.", area);
    } else {
        println!("Top business opportunities in {}:\n", area);
        print!("{}", viz::render_table(&results));
    }

    if let Some(chart_path) = &args.chart {
        if results.is_empty() {
            warn!("Skipping chart: no recommendations for '{}'", area);
        } else {
            viz::create_score_chart(&results, area, chart_path)?;
        }
    }

    Ok(())
}
