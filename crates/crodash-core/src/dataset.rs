//! JSON dataset store
//!
//! The dashboard reads a fixed set of JSON documents from a data directory.
//! Loading never fails: a missing or malformed file is replaced by an empty
//! object and the substitution is recorded so pages can flag it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::prelude::*;

/// Known data files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetId {
    Kpi,
    Pillars,
    Checklist,
    Pnl,
    HistoricalRatios,
    Benchmarking,
}

impl DatasetId {
    pub const ALL: [DatasetId; 6] = [
        DatasetId::Kpi,
        DatasetId::Pillars,
        DatasetId::Checklist,
        DatasetId::Pnl,
        DatasetId::HistoricalRatios,
        DatasetId::Benchmarking,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            DatasetId::Kpi => "kpi_data.json",
            DatasetId::Pillars => "pillars_data.json",
            DatasetId::Checklist => "checklist_data.json",
            DatasetId::Pnl => "pnl_data.json",
            DatasetId::HistoricalRatios => "historical_ratios.json",
            DatasetId::Benchmarking => "benchmarking_data.json",
        }
    }

    /// Short name used in logs and error messages
    pub fn name(&self) -> &'static str {
        match self {
            DatasetId::Kpi => "kpi_data",
            DatasetId::Pillars => "pillars_data",
            DatasetId::Checklist => "checklist_data",
            DatasetId::Pnl => "pnl_data",
            DatasetId::HistoricalRatios => "historical_ratios",
            DatasetId::Benchmarking => "benchmarking_data",
        }
    }
}

/// Where a dataset's content came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetOrigin {
    File(PathBuf),
    /// Default (empty) content substituted for an unreadable file
    Fallback { reason: String },
}

/// A loaded JSON document
#[derive(Debug, Clone)]
pub struct Dataset {
    pub id: DatasetId,
    pub value: Value,
    pub origin: DatasetOrigin,
}

impl Dataset {
    fn fallback(id: DatasetId, reason: impl Into<String>) -> Self {
        Self {
            id,
            value: Value::Object(Map::new()),
            origin: DatasetOrigin::Fallback {
                reason: reason.into(),
            },
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.origin, DatasetOrigin::Fallback { .. })
    }
}

/// All datasets for one render
#[derive(Debug, Clone)]
pub struct DataStore {
    datasets: HashMap<DatasetId, Dataset>,
}

impl DataStore {
    /// Load every known dataset from `dir`, substituting defaults on failure
    pub fn load(dir: &Path) -> Self {
        let datasets = DatasetId::ALL
            .iter()
            .map(|&id| (id, load_dataset(dir, id)))
            .collect();
        Self { datasets }
    }

    /// A store where every dataset is the fallback
    pub fn empty() -> Self {
        let datasets = DatasetId::ALL
            .iter()
            .map(|&id| (id, Dataset::fallback(id, "not loaded")))
            .collect();
        Self { datasets }
    }

    /// Replace one dataset's content (used to build fixtures)
    pub fn with_value(mut self, id: DatasetId, value: Value) -> Self {
        self.datasets.insert(
            id,
            Dataset {
                id,
                value,
                origin: DatasetOrigin::File(PathBuf::from(id.file_name())),
            },
        );
        self
    }

    pub fn get(&self, id: DatasetId) -> &Dataset {
        // Every id is inserted by both constructors
        &self.datasets[&id]
    }

    pub fn value(&self, id: DatasetId) -> &Value {
        &self.get(id).value
    }

    /// Ids of datasets that fell back to defaults, in `DatasetId::ALL` order
    pub fn fallbacks(&self) -> Vec<DatasetId> {
        DatasetId::ALL
            .iter()
            .copied()
            .filter(|id| self.get(*id).is_fallback())
            .collect()
    }
}

fn load_dataset(dir: &Path, id: DatasetId) -> Dataset {
    let path = dir.join(id.file_name());
    match read_json(&path) {
        Ok(value) => {
            debug!("Loaded dataset {} from {:?}", id.name(), path);
            Dataset {
                id,
                value,
                origin: DatasetOrigin::File(path),
            }
        }
        Err(e) => {
            warn!("Dataset {} unavailable ({}), using defaults", id.name(), e);
            Dataset::fallback(id, e.to_string())
        }
    }
}

fn read_json(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_dir_falls_back() {
        let temp = tempdir().unwrap();
        let store = DataStore::load(&temp.path().join("nope"));

        assert_eq!(store.fallbacks().len(), DatasetId::ALL.len());
        assert!(store.value(DatasetId::Kpi).as_object().unwrap().is_empty());
    }

    #[test]
    fn test_load_valid_file() {
        let temp = tempdir().unwrap();
        std::fs::write(
            temp.path().join("pnl_data.json"),
            r#"{"net_income": 1250.5, "currency": "EUR"}"#,
        )
        .unwrap();

        let store = DataStore::load(temp.path());

        assert!(!store.get(DatasetId::Pnl).is_fallback());
        assert_eq!(store.value(DatasetId::Pnl)["currency"], "EUR");
        assert!(store.get(DatasetId::Kpi).is_fallback());
    }

    #[test]
    fn test_load_malformed_file_falls_back() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join("kpi_data.json"), "{ not json").unwrap();

        let store = DataStore::load(temp.path());
        let kpi = store.get(DatasetId::Kpi);

        assert!(kpi.is_fallback());
        match &kpi.origin {
            DatasetOrigin::Fallback { reason } => assert!(reason.contains("JSON")),
            other => panic!("unexpected origin {:?}", other),
        }
    }

    #[test]
    fn test_with_value_overrides_fallback() {
        let store = DataStore::empty().with_value(DatasetId::Checklist, serde_json::json!({}));
        assert!(!store.get(DatasetId::Checklist).is_fallback());
        assert!(!store.fallbacks().contains(&DatasetId::Checklist));
    }
}
