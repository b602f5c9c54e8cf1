use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::rules::Rule;

/// One row of the contaminant reference table.
#[derive(Debug, Clone, Copy)]
pub struct Contaminant {
    pub id: &'static str,
    pub rule: Rule,
    /// Default weight in the composite index. The defaults sum to 1.00.
    pub weight: f64,
}

/// The contaminant reference table. Declaration order is the engine's
/// iteration order, which is what makes limiting-factor tie-breaks
/// deterministic.
///
/// Limits are in the unit the corresponding measurement is reported in.
pub const CONTAMINANTS: &[Contaminant] = &[
    Contaminant { id: "Ecoli", rule: Rule::BinarySafe, weight: 0.25 },
    Contaminant { id: "TTHM", rule: Rule::LowerIsBetter { limit: 80.0 }, weight: 0.15 },
    Contaminant { id: "HAA5", rule: Rule::LowerIsBetter { limit: 60.0 }, weight: 0.10 },
    Contaminant { id: "Nitrate", rule: Rule::LowerIsBetter { limit: 10.0 }, weight: 0.10 },
    Contaminant { id: "Turb", rule: Rule::LowerIsBetter { limit: 0.3 }, weight: 0.10 },
    Contaminant { id: "Chlor", rule: Rule::TargetBand { low: 1.0, high: 2.0, slope: 80.0 }, weight: 0.05 },
    Contaminant { id: "pH", rule: Rule::TargetBand { low: 6.5, high: 8.5, slope: 40.0 }, weight: 0.05 },
    Contaminant { id: "Mn", rule: Rule::LowerIsBetter { limit: 50.0 }, weight: 0.05 },
    // Action Level for Copper is 1.3 mg/L
    Contaminant { id: "Cu", rule: Rule::LowerIsBetter { limit: 1.3 }, weight: 0.05 },
    // Action Level for Lead is 15 ppb
    Contaminant { id: "Pb", rule: Rule::LowerIsBetter { limit: 15.0 }, weight: 0.10 },
];

/// Look up a reference-table row by contaminant id.
pub fn find_contaminant(id: &str) -> Option<&'static Contaminant> {
    CONTAMINANTS.iter().find(|c| c.id == id)
}

/// Scoring configuration.
///
/// Weights can be tweaked per deployment; rule parameters (limits, bands,
/// slopes) are fixed so every deployment scores compatibly.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   weights:
///     Ecoli: 0.30
///     Pb: 0.15
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Per-contaminant weight overrides, merged onto the reference table
    /// by id. Weights do not need to sum to 1.
    #[serde(default)]
    pub weights: Option<BTreeMap<String, f64>>,
}

impl ScoringConfig {
    /// Effective weight for a contaminant: the override if one is present,
    /// the reference weight otherwise.
    pub fn weight_for(&self, contaminant: &Contaminant) -> f64 {
        self.weights
            .as_ref()
            .and_then(|weights| weights.get(contaminant.id).copied())
            .unwrap_or(contaminant.weight)
    }
}
