//! End-to-end recommendation pipeline

use crate::area::filter_by_area;
use crate::data::Dataset;
use crate::gap::{gap_analysis, GapThresholds};
use crate::profitability::profitability_ranking;
use crate::ranking::{final_ranking, RankedCandidate};
use log::{debug, info};

/// Default number of recommendations returned per query
pub const DEFAULT_TOP_N: usize = 8;

/// Tunable parameters for a recommendation query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendParams {
    pub thresholds: GapThresholds,
    pub top_n: usize,
}

impl Default for RecommendParams {
    fn default() -> Self {
        Self {
            thresholds: GapThresholds::default(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// Recommend up to `top_n` under-served, profitable categories for an area
/// using the default gap thresholds.
///
/// Returns an empty list when the area matches nothing or has no gaps.
pub fn recommend_top(
    dataset: &Dataset,
    area_name: &str,
    top_n: usize,
) -> crate::Result<Vec<RankedCandidate>> {
    recommend_with(
        dataset,
        area_name,
        &RecommendParams {
            top_n,
            ..RecommendParams::default()
        },
    )
}

/// Run the full pipeline with explicit parameters
///
/// # Arguments
/// * `dataset` - Loaded businesses; never modified
/// * `area_name` - Free-text area name, matched against addresses
/// * `params` - Gap thresholds and result size
pub fn recommend_with(
    dataset: &Dataset,
    area_name: &str,
    params: &RecommendParams,
) -> crate::Result<Vec<RankedCandidate>> {
    let area = filter_by_area(dataset, area_name);
    if area.is_empty() {
        info!("No businesses found for area '{}'", area_name);
        return Ok(Vec::new());
    }

    let gaps = gap_analysis(&area, params.thresholds)?;
    debug!("{} gap categories for '{}'", gaps.len(), area_name);

    let scored = profitability_ranking(dataset, gaps)?;
    let ranked = final_ranking(scored, params.top_n);
    info!(
        "{} recommendations for '{}' ({} businesses in area)",
        ranked.len(),
        area_name,
        area.len()
    );
    Ok(ranked)
}
