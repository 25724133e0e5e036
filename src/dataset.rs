// src/dataset.rs
//! The credit catalog. Loaded once, read-only afterwards.

use itertools::Itertools;
use offset_types::CarbonCredit;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

const EMBEDDED_DATASET: &str = include_str!("../data/carbon_credits.json");

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read dataset from '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Dataset is not a valid list of credit records: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate credit id '{0}' in dataset")]
    DuplicateId(String),
}

/// An immutable, ordered collection of credit records.
///
/// Cloning is cheap; clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Arc<[CarbonCredit]>,
}

impl Dataset {
    /// Builds a dataset, rejecting duplicate ids.
    pub fn new(records: Vec<CarbonCredit>) -> Result<Self, DatasetError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(DatasetError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self {
            records: records.into(),
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let records: Vec<CarbonCredit> = serde_json::from_str(json)?;
        Self::new(records)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path_ref = path.as_ref();
        let json = fs::read_to_string(path_ref).map_err(|source| DatasetError::Io {
            path: path_ref.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json_str(&json)?;
        log::info!("Loaded {} credits from {}", dataset.len(), path_ref.display());
        Ok(dataset)
    }

    /// The catalog bundled with the binary.
    pub fn embedded() -> Result<Self, DatasetError> {
        let dataset = Self::from_json_str(EMBEDDED_DATASET)?;
        log::info!("Loaded {} credits from the embedded catalog", dataset.len());
        Ok(dataset)
    }

    pub fn records(&self) -> &[CarbonCredit] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CarbonCredit> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Distinct vintage years present in the catalog, newest first.
    pub fn vintages(&self) -> Vec<i32> {
        self.records
            .iter()
            .map(|record| record.vintage_year)
            .unique()
            .sorted_by(|a, b| b.cmp(a))
            .collect()
    }
}
