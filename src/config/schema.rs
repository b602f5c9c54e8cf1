use serde::{Deserialize, Serialize};

use crate::scoring::ScoringConfig;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Fallback location label for summaries when a sample sheet does not
    /// carry one.
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}
