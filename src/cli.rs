//! Command-line interface definitions and argument parsing

use crate::gap::GapThresholds;
use crate::recommend::RecommendParams;
use clap::Parser;

/// Area used when an interactive query line is left blank
pub const DEFAULT_AREA: &str = "Koregaon Park";

/// Find under-served, profitable business categories for an area
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the business dataset CSV file
    #[arg(short, long, default_value = "businesses.csv")]
    pub input: String,

    /// Area to analyse; reads area names from stdin when omitted
    #[arg(short, long)]
    pub area: Option<String>,

    /// Number of recommendations to show
    #[arg(short = 'n', long, default_value = "8")]
    pub top_n: usize,

    /// Maximum businesses of a category already in the area for it to count as a gap
    #[arg(long, default_value = "2")]
    pub min_area_count: usize,

    /// Minimum businesses of a category outside the area for it to count as a gap
    #[arg(long, default_value = "5")]
    pub min_other_count: usize,

    /// Print results as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Save a bar chart of final scores to this PNG path
    #[arg(short, long)]
    pub chart: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Build pipeline parameters from the flags
    pub fn recommend_params(&self) -> crate::Result<RecommendParams> {
        if self.top_n == 0 {
            anyhow::bail!("--top-n must be at least 1");
        }

        Ok(RecommendParams {
            thresholds: GapThresholds {
                min_area_count: self.min_area_count,
                min_other_count: self.min_other_count,
            },
            top_n: self.top_n,
        })
    }

    /// Log filter matching the verbosity flag
    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}
