//! Profitability scoring of gap categories from ratings and review volume

use crate::data::Dataset;
use crate::gap::GapCandidate;
use log::debug;
use polars::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Gap candidate enriched with dataset-wide rating aggregates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub gap: GapCandidate,
    /// Mean rating of the category across the whole dataset
    pub avg_rating: Option<f64>,
    /// Mean review count of the category across the whole dataset
    pub avg_reviews: Option<f64>,
    /// `avg_rating * ln(1 + avg_reviews)`, missing if either input is
    pub profitability_score: Option<f64>,
}

impl ScoredCandidate {
    pub fn business_type(&self) -> &str {
        &self.gap.business_type
    }
}

type Aggregates = HashMap<String, (Option<f64>, Option<f64>)>;

/// Per-category (mean rating, mean review count) over every record
fn category_aggregates(dataset: &Dataset) -> crate::Result<Aggregates> {
    let means = dataset
        .frame()
        .clone()
        .lazy()
        .group_by([col("business_type")])
        .agg([
            // nulls are skipped; an all-null group yields null
            col("rating").mean().alias("avg_rating"),
            col("user_rating_total").mean().alias("avg_reviews"),
        ])
        .collect()?;

    let kinds = means.column("business_type")?.str()?;
    let ratings = means.column("avg_rating")?.f64()?;
    let reviews = means.column("avg_reviews")?.f64()?;

    Ok(kinds
        .into_iter()
        .zip(ratings.into_iter().zip(reviews.into_iter()))
        .filter_map(|(kind, means)| Some((kind?.to_string(), means)))
        .collect())
}

/// Log-dampened profitability: rating weighted by `ln(1 + reviews)`.
/// Missing when either input is missing or the result is not finite.
pub fn profitability_score(avg_rating: Option<f64>, avg_reviews: Option<f64>) -> Option<f64> {
    Some(avg_rating? * avg_reviews?.ln_1p()).filter(|score| score.is_finite())
}

/// Descending order with missing values last
pub(crate) fn desc_nulls_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Score gap candidates by how well their category performs across the dataset.
///
/// Aggregates use the full dataset, not only the records outside the area.
/// Candidates whose category has no rating or review data keep `None` scores and
/// sort after every scored candidate; ties keep the incoming order.
pub fn profitability_ranking(
    dataset: &Dataset,
    gaps: Vec<GapCandidate>,
) -> crate::Result<Vec<ScoredCandidate>> {
    let aggregates = category_aggregates(dataset)?;

    let mut scored: Vec<ScoredCandidate> = gaps
        .into_iter()
        .map(|gap| {
            let (avg_rating, avg_reviews) = aggregates
                .get(gap.business_type.as_str())
                .copied()
                .unwrap_or((None, None));
            ScoredCandidate {
                gap,
                avg_rating,
                avg_reviews,
                profitability_score: profitability_score(avg_rating, avg_reviews),
            }
        })
        .collect();

    scored.sort_by(|a, b| desc_nulls_last(a.profitability_score, b.profitability_score));

    debug!(
        "Profitability: {} candidates, {} without score",
        scored.len(),
        scored.iter().filter(|s| s.profitability_score.is_none()).count()
    );
    Ok(scored)
}
