use super::config::{find_contaminant, ScoringConfig, CONTAMINANTS};

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref weights) = config.weights {
        for (id, weight) in weights {
            if find_contaminant(id).is_none() {
                errors.push(format!("weights.{}: unknown contaminant", id));
            }
            if !weight.is_finite() {
                errors.push(format!("weights.{}: must be a finite number", id));
            } else if *weight < 0.0 {
                errors.push(format!("weights.{}: must be non-negative", id));
            }
        }
    }

    // The effective table must leave at least one contaminant scoreable
    let total: f64 = CONTAMINANTS.iter().map(|c| config.weight_for(c)).sum();
    if total <= 0.0 {
        errors.push("weights: effective weights are all zero".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn config_with(entries: Vec<(&str, f64)>) -> ScoringConfig {
        let weights: BTreeMap<String, f64> = entries
            .into_iter()
            .map(|(id, weight)| (id.to_string(), weight))
            .collect();
        ScoringConfig { weights: Some(weights) }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_scoring(&ScoringConfig::default()).is_ok());
    }

    #[test]
    fn test_valid_override() {
        let config = config_with(vec![("Ecoli", 0.5), ("Pb", 0.0)]);
        assert!(validate_scoring(&config).is_ok());
    }

    #[test]
    fn test_unknown_contaminant() {
        let config = config_with(vec![("Fluoride", 0.1)]);
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("weights.Fluoride"));
        assert!(errors[0].contains("unknown"));
    }

    #[test]
    fn test_negative_weight() {
        let config = config_with(vec![("Pb", -0.1)]);
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("weights.Pb"));
        assert!(errors[0].contains("non-negative"));
    }

    #[test]
    fn test_non_finite_weight() {
        let config = config_with(vec![("Pb", f64::NAN)]);
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("finite"));
    }

    #[test]
    fn test_all_zero_weights() {
        let config = config_with(CONTAMINANTS.iter().map(|c| (c.id, 0.0)).collect());
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("all zero"));
    }

    #[test]
    fn test_collects_all_errors() {
        let config = config_with(vec![("Fluoride", 0.1), ("Pb", -0.1)]);
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
