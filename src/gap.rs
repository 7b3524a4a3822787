//! Gap analysis: categories scarce in an area but common elsewhere

use crate::area::AreaSubset;
use crate::density::business_density;
use log::debug;
use serde::Serialize;
use std::collections::BTreeSet;

/// Thresholds deciding which categories count as a market gap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapThresholds {
    /// Maximum number of businesses of the category already in the area
    pub min_area_count: usize,
    /// Minimum number of businesses of the category outside the area
    pub min_other_count: usize,
}

impl Default for GapThresholds {
    fn default() -> Self {
        Self {
            min_area_count: 2,
            min_other_count: 5,
        }
    }
}

/// A category that is rare in the area but common in the rest of the dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GapCandidate {
    pub business_type: String,
    pub count_in_area: usize,
    pub count_elsewhere: usize,
}

/// Find categories with few businesses in `area` and many in the rest of its dataset.
///
/// Categories missing from either side count as 0 there. Results are sorted by
/// descending `count_elsewhere`, ties by category name.
pub fn gap_analysis(
    area: &AreaSubset<'_>,
    thresholds: GapThresholds,
) -> crate::Result<Vec<GapCandidate>> {
    let elsewhere = area.complement();

    let area_counts = business_density(area)?;
    let other_counts = business_density(&elsewhere)?;

    // outer join on business_type
    let categories: BTreeSet<&str> = area_counts
        .categories()
        .chain(other_counts.categories())
        .collect();

    let mut gaps: Vec<GapCandidate> = categories
        .into_iter()
        .map(|business_type| GapCandidate {
            business_type: business_type.to_string(),
            count_in_area: area_counts.get(business_type),
            count_elsewhere: other_counts.get(business_type),
        })
        .filter(|c| {
            c.count_in_area <= thresholds.min_area_count
                && c.count_elsewhere >= thresholds.min_other_count
        })
        .collect();

    gaps.sort_by(|a, b| b.count_elsewhere.cmp(&a.count_elsewhere));

    debug!(
        "Gap analysis: {} in area, {} elsewhere, {} candidates ({:?})",
        area.len(),
        elsewhere.len(),
        gaps.len(),
        thresholds
    );
    Ok(gaps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::filter_by_area;
    use crate::data::{BusinessRecord, Dataset};

    fn push(records: &mut Vec<BusinessRecord>, kind: &str, address: &str, n: usize) {
        for _ in 0..n {
            records.push(BusinessRecord::new(kind, Some(address), Some(4.0), Some(10.0)));
        }
    }

    fn create_test_dataset() -> Dataset {
        let mut records = Vec::new();
        push(&mut records, "cafe", "Koregaon Park", 1);
        push(&mut records, "cafe", "Baner", 10);
        push(&mut records, "gym", "Koregaon Park", 5);
        push(&mut records, "gym", "Aundh", 3);
        push(&mut records, "bakery", "Aundh", 6);
        push(&mut records, "salon", "Koregaon Park", 2);
        push(&mut records, "salon", "Wakad", 6);
        push(&mut records, "florist", "Koregaon Park", 1);
        Dataset::from_records(records).unwrap()
    }

    #[test]
    fn test_gap_analysis_thresholds() {
        let dataset = create_test_dataset();
        let area = filter_by_area(&dataset, "Koregaon Park");

        let gaps = gap_analysis(&area, GapThresholds::default()).unwrap();
        let kinds: Vec<&str> = gaps.iter().map(|g| g.business_type.as_str()).collect();

        // gym has too many in the area, florist too few elsewhere
        assert_eq!(kinds, vec!["cafe", "bakery", "salon"]);
        assert_eq!(
            gaps[0],
            GapCandidate {
                business_type: "cafe".to_string(),
                count_in_area: 1,
                count_elsewhere: 10,
            }
        );
    }

    #[test]
    fn test_gap_analysis_outer_join_fills_zero() {
        let dataset = create_test_dataset();
        let area = filter_by_area(&dataset, "Koregaon Park");

        let gaps = gap_analysis(&area, GapThresholds::default()).unwrap();
        let bakery = gaps.iter().find(|g| g.business_type == "bakery").unwrap();
        assert_eq!(bakery.count_in_area, 0);
        assert_eq!(bakery.count_elsewhere, 6);

        let loose = GapThresholds {
            min_area_count: 10,
            min_other_count: 0,
        };
        let all = gap_analysis(&area, loose).unwrap();
        let florist = all.iter().find(|g| g.business_type == "florist").unwrap();
        assert_eq!(florist.count_elsewhere, 0);
    }

    #[test]
    fn test_gap_counts_sum_to_dataset_totals() {
        let dataset = create_test_dataset();
        let area = filter_by_area(&dataset, "Koregaon Park");
        let totals = business_density(&AreaSubset::all(&dataset)).unwrap();

        let loose = GapThresholds {
            min_area_count: usize::MAX,
            min_other_count: 0,
        };
        let all = gap_analysis(&area, loose).unwrap();
        assert_eq!(all.len(), totals.len());
        for gap in &all {
            assert_eq!(gap.count_in_area + gap.count_elsewhere, totals.get(&gap.business_type));
        }
    }

    #[test]
    fn test_gap_analysis_sorted_with_ties_by_name() {
        let dataset = create_test_dataset();
        let area = filter_by_area(&dataset, "Koregaon Park");

        let gaps = gap_analysis(&area, GapThresholds::default()).unwrap();
        assert!(gaps.windows(2).all(|w| w[0].count_elsewhere >= w[1].count_elsewhere));
        // bakery and salon both have 6 elsewhere
        assert_eq!(gaps[1].business_type, "bakery");
        assert_eq!(gaps[2].business_type, "salon");
    }

    #[test]
    fn test_gap_analysis_empty_area() {
        let dataset = create_test_dataset();
        let area = filter_by_area(&dataset, "Hinjewadi");

        // every category is absent from the area
        let gaps = gap_analysis(&area, GapThresholds::default()).unwrap();
        assert!(gaps.iter().all(|g| g.count_in_area == 0));

        let empty = Dataset::from_records(Vec::new()).unwrap();
        let area = filter_by_area(&empty, "Koregaon Park");
        assert!(gap_analysis(&area, GapThresholds::default()).unwrap().is_empty());
    }
}
