use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

use super::config::{ScoringConfig, CONTAMINANTS};
use super::rules::Observation;

/// No contaminant had usable data (or the included weights total zero), so
/// there is nothing to average. Distinct from a valid low index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no contaminant has usable data to score")]
pub struct NoData;

/// One scored contaminant: its subscore, its renormalized share of the
/// total weight, and the points it contributes to the index.
#[derive(Debug, Clone, Serialize)]
pub struct SubscoreEntry {
    pub contaminant: &'static str,
    pub score: f64,
    pub share: f64,
    pub contribution: f64,
}

/// Outcome of one scoring run.
#[derive(Debug, Clone, Serialize)]
pub struct ScoringResult {
    /// Composite index in [0, 100].
    pub index: f64,
    /// Star rating in 1..=5.
    pub rating: u8,
    /// Contaminant with the lowest subscore; ties break to the earliest
    /// reference-table row.
    pub limiting_factor: &'static str,
    /// Scored contaminants in reference-table order.
    pub subscores: Vec<SubscoreEntry>,
}

/// Map an index to the 1-5 star rating. Thresholds are closed on the lower
/// bound and checked top-down.
pub fn star_rating(index: f64) -> u8 {
    if index >= 90.0 {
        5
    } else if index >= 75.0 {
        4
    } else if index >= 60.0 {
        3
    } else if index >= 40.0 {
        2
    } else {
        1
    }
}

/// Score one observation set against the reference table.
///
/// Contaminants without usable data are dropped and the remaining weights
/// rescaled to sum to 1, so a partial sample sheet still yields a comparable
/// 0-100 index. Observation keys that are not in the reference table are
/// ignored.
pub fn score(
    observations: &HashMap<String, Observation>,
    config: &ScoringConfig,
) -> Result<ScoringResult, NoData> {
    // Subscores in table order; this order also breaks limiting-factor ties.
    let mut scored: Vec<(&'static str, f64, f64)> = Vec::new();
    for contaminant in CONTAMINANTS {
        let Some(observation) = observations.get(contaminant.id) else {
            continue;
        };
        let Some(subscore) = contaminant.rule.subscore(observation) else {
            continue;
        };
        scored.push((contaminant.id, subscore, config.weight_for(contaminant)));
    }

    let total_weight: f64 = scored.iter().map(|(_, _, weight)| weight).sum();
    if scored.is_empty() || total_weight <= 0.0 {
        return Err(NoData);
    }

    let mut index = 0.0;
    let mut limiting: Option<(&'static str, f64)> = None;
    let mut subscores = Vec::with_capacity(scored.len());
    for (contaminant, subscore, weight) in scored {
        let share = weight / total_weight;
        let contribution = subscore * share;
        index += contribution;

        // Strict comparison keeps the earliest row on ties
        if limiting.map_or(true, |(_, lowest)| subscore < lowest) {
            limiting = Some((contaminant, subscore));
        }

        subscores.push(SubscoreEntry {
            contaminant,
            score: subscore,
            share,
            contribution,
        });
    }
    let Some((limiting_factor, _)) = limiting else {
        return Err(NoData);
    };

    Ok(ScoringResult {
        index,
        rating: star_rating(index),
        limiting_factor,
        subscores,
    })
}
