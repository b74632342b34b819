// ==========================================
// Salon Color Engine - Configuration Layer
// ==========================================
// Salon-level business defaults only: costs, labor rate, margin,
// waste allowance. Chemistry constants (pigment map, developer
// specs, pH ranges, timing factors) are fixed tables and are
// deliberately NOT configurable.
// ==========================================

use crate::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Salon business defaults used by the mixing/pricing calculators
/// and the formulation facade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalonConfig {
    /// Developer cost per gram, salon currency.
    pub developer_cost_per_gram: f64,
    /// Stylist labor rate per hour.
    pub labor_rate_per_hour: f64,
    /// Target margin for service pricing, percent.
    pub target_margin_percent: f64,
    /// Waste allowance for inventory deduction, percent.
    pub waste_percentage: f64,
}

impl Default for SalonConfig {
    fn default() -> Self {
        Self {
            developer_cost_per_gram: 0.05,
            labor_rate_per_hour: 60.0,
            target_margin_percent: 30.0,
            waste_percentage: crate::engine::DEFAULT_WASTE_PERCENTAGE,
        }
    }
}

impl SalonConfig {
    /// Load config from a JSON file. Missing fields fall back to
    /// defaults; a missing file is an error (callers decide whether
    /// to fall back to `SalonConfig::default()`).
    pub fn load(path: &Path) -> EngineResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            EngineError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: SalonConfig = serde_json::from_str(&raw)
            .map_err(|e| EngineError::ConfigError(format!("invalid config JSON: {e}")))?;
        config.validate()?;
        info!(path = %path.display(), "salon config loaded");
        Ok(config)
    }

    /// Reject values that would make the pricing math meaningless.
    pub fn validate(&self) -> EngineResult<()> {
        if !(0.0..100.0).contains(&self.target_margin_percent) {
            return Err(EngineError::ConfigError(format!(
                "target_margin_percent must be in [0, 100), got {}",
                self.target_margin_percent
            )));
        }
        if self.developer_cost_per_gram < 0.0
            || self.labor_rate_per_hour < 0.0
            || self.waste_percentage < 0.0
        {
            return Err(EngineError::ConfigError(
                "cost, labor rate and waste percentage must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SalonConfig::default();
        assert_eq!(config.waste_percentage, 10.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"labor_rate_per_hour": 85.0}}"#).unwrap();

        let config = SalonConfig::load(file.path()).unwrap();
        assert_eq!(config.labor_rate_per_hour, 85.0);
        assert_eq!(config.developer_cost_per_gram, 0.05);
    }

    #[test]
    fn test_load_rejects_bad_margin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"target_margin_percent": 100.0}}"#).unwrap();
        assert!(SalonConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = SalonConfig::load(Path::new("/nonexistent/salon.json"));
        assert!(matches!(result, Err(EngineError::ConfigError(_))));
    }
}
