//! Selecting the businesses that belong to a named area

use crate::data::{BusinessRecord, Dataset};
use crate::normalize::normalize;
use log::debug;
use polars::prelude::{DataFrame, IdxCa, IdxSize, PolarsResult};
use std::collections::HashSet;

/// Rows of a dataset, identified by index, in original order
#[derive(Debug, Clone)]
pub struct AreaSubset<'a> {
    dataset: &'a Dataset,
    rows: Vec<usize>,
}

impl<'a> AreaSubset<'a> {
    pub fn new(dataset: &'a Dataset, rows: Vec<usize>) -> Self {
        Self { dataset, rows }
    }

    /// Every row of the dataset
    pub fn all(dataset: &'a Dataset) -> Self {
        Self::new(dataset, (0..dataset.len()).collect())
    }

    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn records(&self) -> impl Iterator<Item = &'a BusinessRecord> + '_ {
        let dataset = self.dataset;
        self.rows.iter().filter_map(move |&row| dataset.get(row))
    }

    /// The dataset's frame restricted to this subset's rows
    pub fn frame(&self) -> PolarsResult<DataFrame> {
        let idx: Vec<IdxSize> = self.rows.iter().map(|&row| row as IdxSize).collect();
        self.dataset.frame().take(&IdxCa::from_vec("row", idx))
    }

    /// Every row of the dataset that is not in this subset
    pub fn complement(&self) -> AreaSubset<'a> {
        let members: HashSet<usize> = self.rows.iter().copied().collect();
        let rows = (0..self.dataset.len())
            .filter(|row| !members.contains(row))
            .collect();
        AreaSubset::new(self.dataset, rows)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Build the set of strings an address may contain to count as in-area.
///
/// Includes the normalized name, its initialism for multi-word names, and
/// the "gaon"/"goan" spelling swaps. Empty strings are never produced.
pub fn area_variations(area_name: &str) -> Vec<String> {
    let area_clean = normalize(Some(area_name));
    if area_clean.is_empty() {
        return Vec::new();
    }

    let words: Vec<&str> = area_clean.split_whitespace().collect();
    let mut variations = vec![area_clean.clone()];

    if words.len() > 1 {
        let initialism: String = words.iter().filter_map(|w| w.chars().next()).collect();
        variations.push(initialism);
    }

    variations.push(area_clean.replace("gaon", "goan"));
    variations.push(area_clean.replace("goan", "gaon"));

    let mut seen = HashSet::new();
    variations.retain(|v| seen.insert(v.clone()));
    variations
}

/// Select the records whose normalized address contains any area variation.
///
/// An empty or unmatched area yields an empty subset.
pub fn filter_by_area<'a>(dataset: &'a Dataset, area_name: &str) -> AreaSubset<'a> {
    let variations = area_variations(area_name);
    debug!("Area '{}' variations: {:?}", area_name, variations);

    let rows = dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            let address = record.address_clean();
            variations.iter().any(|v| address.contains(v.as_str()))
        })
        .map(|(row, _)| row)
        .collect();

    let subset = AreaSubset::new(dataset, rows);
    debug!(
        "Area '{}' matched {} of {} businesses",
        area_name,
        subset.len(),
        dataset.len()
    );
    subset
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_dataset() -> Dataset {
        Dataset::from_records(vec![
            BusinessRecord::new("cafe", Some("Lane 7, Koregaon Park, Pune"), Some(4.5), Some(100.0)),
            BusinessRecord::new("gym", Some("FC Road, Shivajinagar"), Some(4.0), Some(50.0)),
            BusinessRecord::new("bakery", Some("North Main Rd, KP, Pune"), Some(4.2), Some(30.0)),
            BusinessRecord::new("salon", Some("Koregoan Park Annexe"), None, None),
            BusinessRecord::new("pharmacy", None, Some(3.9), Some(12.0)),
            BusinessRecord::new("bar", Some("Kalyani Nagar"), Some(4.4), Some(800.0)),
        ])
        .unwrap()
    }

    #[test]
    fn test_area_variations() {
        let variations = area_variations("Koregaon Park");
        assert_eq!(variations, vec!["koregaon park", "kp", "koregoan park"]);

        // single word: no initialism, swaps collapse to the name itself
        assert_eq!(area_variations("Baner"), vec!["baner"]);
        assert_eq!(area_variations("Goregoan"), vec!["goregoan", "goregaon"]);
    }

    #[test]
    fn test_area_variations_empty() {
        assert!(area_variations("").is_empty());
        assert!(area_variations("  ,.!  ").is_empty());
    }

    #[test]
    fn test_filter_matches_name_initialism_and_misspelling() {
        let dataset = create_test_dataset();
        let subset = filter_by_area(&dataset, "Koregaon Park");

        assert_eq!(subset.rows(), &[0, 2, 3]);
        let kinds: Vec<&str> = subset.records().map(|r| r.business_type.as_str()).collect();
        assert_eq!(kinds, vec!["cafe", "bakery", "salon"]);
    }

    #[test]
    fn test_filter_is_case_and_punctuation_insensitive() {
        let dataset = create_test_dataset();
        let subset = filter_by_area(&dataset, "  kalyani-NAGAR ");
        // "kalyaninagar" does not occur: punctuation is removed, not replaced by a space
        assert!(subset.is_empty());

        let subset = filter_by_area(&dataset, "KALYANI   nagar!");
        assert_eq!(subset.rows(), &[5]);
    }

    #[test]
    fn test_filter_empty_or_unmatched() {
        let dataset = create_test_dataset();
        assert!(filter_by_area(&dataset, "").is_empty());
        assert!(filter_by_area(&dataset, "Hinjewadi").is_empty());
        let empty = Dataset::from_records(Vec::new()).unwrap();
        assert!(filter_by_area(&empty, "Koregaon Park").is_empty());
    }

    #[test]
    fn test_filter_returns_subset_of_dataset() {
        let dataset = create_test_dataset();
        for area in ["Koregaon Park", "Pune", "road", "a", "Shivajinagar"] {
            let subset = filter_by_area(&dataset, area);
            assert!(subset.len() <= dataset.len());
            assert!(subset.rows().windows(2).all(|w| w[0] < w[1]));
            for (&row, record) in subset.rows().iter().zip(subset.records()) {
                assert_eq!(dataset.get(row), Some(record));
            }
        }
    }

    #[test]
    fn test_complement_is_disjoint_and_complete() {
        let dataset = create_test_dataset();
        let subset = filter_by_area(&dataset, "Koregaon Park");
        let other = subset.complement();

        assert_eq!(other.rows(), &[1, 4, 5]);
        assert_eq!(subset.len() + other.len(), dataset.len());
        assert!(other.rows().iter().all(|r| !subset.rows().contains(r)));
        assert_eq!(AreaSubset::all(&dataset).len(), dataset.len());
    }

    #[test]
    fn test_subset_frame_follows_rows() {
        let dataset = create_test_dataset();
        let subset = filter_by_area(&dataset, "Koregaon Park");

        let frame = subset.frame().unwrap();
        assert_eq!(frame.height(), 3);
        let kinds: Vec<Option<&str>> = frame
            .column("business_type")
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(kinds, vec![Some("cafe"), Some("bakery"), Some("salon")]);

        let nothing = filter_by_area(&dataset, "Hinjewadi");
        assert_eq!(nothing.frame().unwrap().height(), 0);
    }
}
