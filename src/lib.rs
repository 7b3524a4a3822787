//! GapFinder: recommend under-served, profitable business categories for an area
//!
//! The pipeline filters a business dataset to an area by fuzzy address matching,
//! finds categories that are scarce there but common elsewhere, scores them by
//! dataset-wide rating and review volume, and ranks them on a blended score.

pub mod area;
pub mod cli;
pub mod data;
pub mod density;
pub mod gap;
pub mod normalize;
pub mod profitability;
pub mod ranking;
pub mod recommend;
pub mod viz;

// Re-export public items for easier access
pub use area::{area_variations, filter_by_area, AreaSubset};
pub use cli::Args;
pub use data::{load_dataset, BusinessRecord, Dataset, DatasetError};
pub use density::{business_density, CategoryCounts};
pub use gap::{gap_analysis, GapCandidate, GapThresholds};
pub use normalize::normalize;
pub use profitability::{profitability_ranking, ScoredCandidate};
pub use ranking::{final_ranking, min_max_normalize, RankedCandidate};
pub use recommend::{recommend_top, recommend_with, RecommendParams, DEFAULT_TOP_N};

/// Common result type used throughout the application
pub type Result<T> = anyhow::Result<T>;
