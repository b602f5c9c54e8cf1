/// Floor applied to measured values before division, so zero or negative
/// readings cannot blow up the ratio.
const VALUE_FLOOR: f64 = 1e-6;

/// Violation-flag token that counts as a detected violation.
const VIOLATION_TOKEN: &str = "yes";

/// One raw measurement for a contaminant. Either field may be absent;
/// which one the subscore needs depends on the rule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Observation {
    /// Measured level, in the same unit as the contaminant's limit.
    pub value: Option<f64>,
    /// Violation flag as reported (e.g. "Yes" / "No").
    pub violation: Option<String>,
}

/// Scoring rule assigned to a contaminant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// Full score at or below `limit`, decaying toward 0 above it.
    LowerIsBetter { limit: f64 },
    /// Full score inside `[low, high]`, losing `slope` points per unit of
    /// distance outside the band.
    TargetBand { low: f64, high: f64, slope: f64 },
    /// 100 unless a violation was flagged.
    BinarySafe,
}

impl Rule {
    /// Subscore for one observation under this rule, or `None` when the
    /// field the rule needs is missing. `None` is the only missing-data
    /// signal; a defined subscore is always within [0, 100].
    pub fn subscore(&self, observation: &Observation) -> Option<f64> {
        match *self {
            Rule::LowerIsBetter { limit } => {
                observation.value.map(|v| lower_is_better(v, limit))
            }
            Rule::TargetBand { low, high, slope } => {
                observation.value.map(|v| target_band(v, low, high, slope))
            }
            Rule::BinarySafe => observation.violation.as_deref().map(binary_safe),
        }
    }
}

fn clamp(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

/// Lower-is-better decay: 100 at or below the limit, `100 * limit / value`
/// above it, approaching 0 asymptotically.
pub fn lower_is_better(value: f64, limit: f64) -> f64 {
    let v = value.max(VALUE_FLOOR);
    clamp(100.0 * limit / v)
}

/// Target band: 100 inside `[low, high]` (edges included), linear decay
/// outside at `slope` points per unit of distance from the band.
pub fn target_band(value: f64, low: f64, high: f64, slope: f64) -> f64 {
    if (low..=high).contains(&value) {
        return 100.0;
    }
    let distance = if value < low { low - value } else { value - high };
    clamp(100.0 - slope * distance)
}

/// Binary pass/fail from a violation flag: exactly 0 on a detected
/// violation, exactly 100 otherwise. Matching is trimmed and
/// case-insensitive.
pub fn binary_safe(flag: &str) -> f64 {
    if flag.trim().eq_ignore_ascii_case(VIOLATION_TOKEN) {
        0.0
    } else {
        100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_is_better_at_or_below_limit() {
        assert_eq!(lower_is_better(10.0, 10.0), 100.0);
        assert_eq!(lower_is_better(1.9, 10.0), 100.0);
        assert_eq!(lower_is_better(0.0, 10.0), 100.0);
    }

    #[test]
    fn test_lower_is_better_negative_reading_saturates() {
        // Negative readings are floored to epsilon, which saturates at 100
        assert_eq!(lower_is_better(-5.0, 10.0), 100.0);
    }

    #[test]
    fn test_lower_is_better_above_limit_decays() {
        // 100 * 10 / 20 = 50
        assert_eq!(lower_is_better(20.0, 10.0), 50.0);
        assert_eq!(lower_is_better(40.0, 10.0), 25.0);
    }

    #[test]
    fn test_lower_is_better_strictly_decreasing() {
        let a = lower_is_better(12.0, 10.0);
        let b = lower_is_better(15.0, 10.0);
        let c = lower_is_better(100.0, 10.0);
        assert!(a > b && b > c);
        assert!(c > 0.0 && a < 100.0);
    }

    #[test]
    fn test_target_band_inside_is_full_score() {
        assert_eq!(target_band(1.0, 1.0, 2.0, 80.0), 100.0);
        assert_eq!(target_band(1.5, 1.0, 2.0, 80.0), 100.0);
        assert_eq!(target_band(2.0, 1.0, 2.0, 80.0), 100.0);
    }

    #[test]
    fn test_target_band_below_band() {
        // 100 - 80 * (1.0 - 0.5) = 60
        assert_eq!(target_band(0.5, 1.0, 2.0, 80.0), 60.0);
    }

    #[test]
    fn test_target_band_above_band() {
        // 100 - 40 * (9.0 - 8.5) = 80
        assert_eq!(target_band(9.0, 6.5, 8.5, 40.0), 80.0);
    }

    #[test]
    fn test_target_band_monotonic_away_from_band() {
        assert!(target_band(0.8, 1.0, 2.0, 80.0) > target_band(0.5, 1.0, 2.0, 80.0));
        assert!(target_band(2.2, 1.0, 2.0, 80.0) > target_band(2.6, 1.0, 2.0, 80.0));
    }

    #[test]
    fn test_target_band_clamps_at_zero() {
        // 100 - 80 * 3.0 would be -140
        assert_eq!(target_band(5.0, 1.0, 2.0, 80.0), 0.0);
    }

    #[test]
    fn test_binary_safe_violation_tokens() {
        assert_eq!(binary_safe("Yes"), 0.0);
        assert_eq!(binary_safe("yes"), 0.0);
        assert_eq!(binary_safe(" YES "), 0.0);
    }

    #[test]
    fn test_binary_safe_pass_tokens() {
        assert_eq!(binary_safe("No"), 100.0);
        assert_eq!(binary_safe(""), 100.0);
        assert_eq!(binary_safe("N/A"), 100.0);
    }

    #[test]
    fn test_subscore_missing_value_is_undefined() {
        let rule = Rule::LowerIsBetter { limit: 10.0 };
        assert_eq!(rule.subscore(&Observation::default()), None);

        let band = Rule::TargetBand { low: 1.0, high: 2.0, slope: 80.0 };
        assert_eq!(band.subscore(&Observation::default()), None);
    }

    #[test]
    fn test_subscore_missing_flag_is_undefined() {
        // A measured value does not stand in for the flag
        let observation = Observation { value: Some(3.0), violation: None };
        assert_eq!(Rule::BinarySafe.subscore(&observation), None);
    }

    #[test]
    fn test_subscore_dispatches_on_rule() {
        let observation = Observation {
            value: Some(20.0),
            violation: Some("Yes".to_string()),
        };
        let rule = Rule::LowerIsBetter { limit: 10.0 };
        // Value rules ignore the flag
        assert_eq!(rule.subscore(&observation), Some(50.0));
        // The flag rule ignores the value
        assert_eq!(Rule::BinarySafe.subscore(&observation), Some(0.0));
    }
}
