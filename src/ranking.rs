//! Final ranking: inverse local density blended with profitability

use crate::profitability::{desc_nulls_last, ScoredCandidate};
use serde::Serialize;

/// Weight of the inverse-density component in the final score
pub const DENSITY_WEIGHT: f64 = 0.5;
/// Weight of the profitability component in the final score
pub const PROFIT_WEIGHT: f64 = 0.5;

/// A scored candidate with its normalized components and final score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCandidate {
    #[serde(flatten)]
    pub scored: ScoredCandidate,
    /// `1 / (count_in_area + 1)`
    pub inverse_density_score: f64,
    pub inv_density_norm: f64,
    pub profit_norm: Option<f64>,
    pub final_score: Option<f64>,
}

impl RankedCandidate {
    pub fn business_type(&self) -> &str {
        self.scored.business_type()
    }
}

/// Min-max scale values into `[0, 1]`.
///
/// Missing and non-finite values come out missing and are excluded from the
/// range. When every present value is equal the range is empty and each
/// present value maps to 1.0.
pub fn min_max_normalize(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let finite = |value: &Option<f64>| value.filter(|v| v.is_finite());
    let (min, max) = values
        .iter()
        .filter_map(finite)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let range = max - min;

    values
        .iter()
        .map(|value| {
            finite(value).map(|v| {
                if range > 0.0 {
                    ((v - min) / range).clamp(0.0, 1.0)
                } else {
                    1.0
                }
            })
        })
        .collect()
}

/// Blend inverse density and profitability and keep the best `top_n`.
///
/// Sorted by descending `final_score`; candidates without a profitability score
/// have no final score and come last. Ties keep the incoming order.
pub fn final_ranking(scored: Vec<ScoredCandidate>, top_n: usize) -> Vec<RankedCandidate> {
    if scored.is_empty() {
        return Vec::new();
    }

    let inverse_density: Vec<f64> = scored
        .iter()
        .map(|s| 1.0 / (s.gap.count_in_area as f64 + 1.0))
        .collect();
    let density_norm =
        min_max_normalize(&inverse_density.iter().copied().map(Some).collect::<Vec<_>>());
    let profit_norm = min_max_normalize(
        &scored
            .iter()
            .map(|s| s.profitability_score)
            .collect::<Vec<_>>(),
    );

    let mut ranked: Vec<RankedCandidate> = scored
        .into_iter()
        .zip(inverse_density)
        .zip(density_norm.into_iter().zip(profit_norm))
        .map(|((scored, inverse_density_score), (inv_norm, profit_norm))| {
            let inv_density_norm = inv_norm.unwrap_or(1.0);
            RankedCandidate {
                scored,
                inverse_density_score,
                inv_density_norm,
                profit_norm,
                final_score: profit_norm
                    .map(|p| DENSITY_WEIGHT * inv_density_norm + PROFIT_WEIGHT * p),
            }
        })
        .collect();

    ranked.sort_by(|a, b| desc_nulls_last(a.final_score, b.final_score));
    ranked.truncate(top_n);
    ranked
}
