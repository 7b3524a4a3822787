//! Business records and CSV dataset loading using Polars

use crate::normalize::normalize;
use log::{debug, info, warn};
use polars::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Fatal problems with an input dataset, surfaced at load time.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset is missing required column '{0}'")]
    MissingColumn(String),
    #[error("failed to read dataset: {0}")]
    Polars(#[from] PolarsError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A single business listing from the dataset
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessRecord {
    /// Category label, e.g. "cafe" or "gym"
    pub business_type: String,
    /// Free-text address as supplied
    pub address: Option<String>,
    /// Average star rating, if known
    pub rating: Option<f64>,
    /// Number of user reviews, if known
    pub user_rating_total: Option<f64>,
    address_clean: String,
}

impl BusinessRecord {
    /// Non-finite numbers and negative review counts are stored as missing.
    pub fn new(
        business_type: impl Into<String>,
        address: Option<&str>,
        rating: Option<f64>,
        user_rating_total: Option<f64>,
    ) -> Self {
        Self {
            business_type: business_type.into(),
            address: address.map(str::to_string),
            rating: rating.filter(|v| v.is_finite()),
            user_rating_total: user_rating_total.filter(|v| v.is_finite() && *v >= 0.0),
            address_clean: normalize(address),
        }
    }

    /// Normalized address, computed once at construction
    pub fn address_clean(&self) -> &str {
        &self.address_clean
    }
}

/// Immutable, in-memory collection of business records.
///
/// Row indices are the record identity used by subsets. The category and
/// rating columns are mirrored in a Polars frame for aggregation.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<BusinessRecord>,
    frame: DataFrame,
}

impl Dataset {
    pub fn from_records(records: Vec<BusinessRecord>) -> Result<Self, DatasetError> {
        let kinds: Vec<&str> = records.iter().map(|r| r.business_type.as_str()).collect();
        let ratings: Vec<Option<f64>> = records.iter().map(|r| r.rating).collect();
        let reviews: Vec<Option<f64>> = records.iter().map(|r| r.user_rating_total).collect();

        let frame = DataFrame::new(vec![
            Series::new("business_type", kinds),
            Series::new("rating", ratings),
            Series::new("user_rating_total", reviews),
        ])?;

        Ok(Self { records, frame })
    }

    pub fn records(&self) -> &[BusinessRecord] {
        &self.records
    }

    /// `business_type`, `rating` and `user_rating_total` columns, one row per record
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn get(&self, row: usize) -> Option<&BusinessRecord> {
        self.records.get(row)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Load a business dataset from a CSV file
///
/// # Arguments
/// * `file_path` - Path to a CSV file with `business_type`, `address`, `rating`
///   and `user_rating_total` columns
///
/// # Returns
/// * `Dataset` with one record per row that has a business type, values kept as read
pub fn load_dataset(file_path: impl AsRef<Path>) -> Result<Dataset, DatasetError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(DatasetError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("dataset file not found: {}", file_path.display()),
        )));
    }

    let df = LazyCsvReader::new(file_path)
        .with_has_header(true)
        .finish()?
        .collect()?;
    debug!("Read {} rows from {}", df.height(), file_path.display());

    let dataset = dataset_from_frame(&df)?;
    info!(
        "Loaded {} businesses from {}",
        dataset.len(),
        file_path.display()
    );
    Ok(dataset)
}

/// Convert a DataFrame into records, validating the required columns
pub fn dataset_from_frame(df: &DataFrame) -> Result<Dataset, DatasetError> {
    let column = |name: &str| {
        df.column(name)
            .map_err(|_| DatasetError::MissingColumn(name.to_string()))
    };

    let kinds = column("business_type")?.cast(&DataType::String)?;
    let addresses = column("address")?.cast(&DataType::String)?;
    let ratings = column("rating")?.cast(&DataType::Float64)?;
    let review_totals = column("user_rating_total")?.cast(&DataType::Float64)?;

    let mut records = Vec::with_capacity(df.height());
    let mut skipped = 0usize;

    for (((kind, addr), rating), reviews) in kinds
        .str()?
        .into_iter()
        .zip(addresses.str()?.into_iter())
        .zip(ratings.f64()?.into_iter())
        .zip(review_totals.f64()?.into_iter())
    {
        match kind {
            Some(kind) => records.push(BusinessRecord::new(kind, addr, rating, reviews)),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!("Skipped {} rows without a business_type", skipped);
    }

    Dataset::from_records(records)
}
