use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::scoring::Observation;

/// One long-format sample record, one contaminant per entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SampleRecord {
    pub contaminant: String,
    /// Measured level, in the unit the contaminant's limit uses.
    #[serde(default)]
    pub value: Option<f64>,
    /// Violation flag as reported (e.g. "Yes" / "No").
    #[serde(default)]
    pub violation: Option<String>,
}

/// A sample sheet: where and when the samples were taken, plus the records.
///
/// Example YAML:
/// ```yaml
/// location: Perkins District
/// date: 2024-06-01
/// samples:
///   - { contaminant: Nitrate, value: 1.9 }
///   - { contaminant: Ecoli, violation: "No" }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SampleSheet {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub samples: Vec<SampleRecord>,
}

impl SampleSheet {
    /// Build the observation map for scoring. The first record wins when a
    /// contaminant appears more than once.
    pub fn observations(&self) -> HashMap<String, Observation> {
        let mut map = HashMap::new();
        for record in &self.samples {
            map.entry(record.contaminant.clone()).or_insert_with(|| Observation {
                value: record.value,
                violation: record.violation.clone(),
            });
        }
        map
    }
}

/// Load a sample sheet from a YAML file.
pub fn load_samples(path: &Path) -> Result<SampleSheet> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read sample sheet at {}", path.display()))?;

    let sheet: SampleSheet = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse sample sheet: invalid YAML in {}", path.display()))?;

    Ok(sheet)
}
