//! Business counts per category

use crate::area::AreaSubset;
use polars::prelude::*;
use std::collections::BTreeMap;

/// Number of businesses per `business_type`, iterated in category order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    counts: BTreeMap<String, usize>,
}

impl CategoryCounts {
    /// Count 0 for categories not present
    pub fn get(&self, business_type: &str) -> usize {
        self.counts.get(business_type).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// Total number of businesses counted
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Categories by descending count, ties in category order
    pub fn most_common(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

/// Group a frame with a `business_type` column and count rows per category
pub(crate) fn category_counts(frame: DataFrame) -> crate::Result<CategoryCounts> {
    let grouped = frame
        .lazy()
        .group_by([col("business_type")])
        .agg([len().alias("count")])
        .collect()?;

    let totals = grouped.column("count")?.cast(&DataType::UInt64)?;
    let kinds = grouped.column("business_type")?;

    let counts = kinds
        .str()?
        .into_iter()
        .zip(totals.u64()?.into_iter())
        .filter_map(|(kind, count)| Some((kind?.to_string(), count? as usize)))
        .collect();

    Ok(CategoryCounts { counts })
}

/// Count businesses per category within a subset of the dataset
pub fn business_density(subset: &AreaSubset<'_>) -> crate::Result<CategoryCounts> {
    category_counts(subset.frame()?)
}
