use crate::error::{AquaplanError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Weights of the four sub-scores in the composite priority score.
///
/// Calibrated model constants; `drought_risk` contributes with a
/// positive weight, so higher climate vulnerability raises a field's
/// priority. That is the documented behavior of the scoring model and
/// is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ScoringWeights {
    pub yield_weight: f64,
    pub health_weight: f64,
    pub moisture_weight: f64,
    pub drought_risk_weight: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.yield_weight + self.health_weight + self.moisture_weight + self.drought_risk_weight
    }

    /// Weights must each lie in [0, 1] and sum to 1.0.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("yield_weight", self.yield_weight),
            ("health_weight", self.health_weight),
            ("moisture_weight", self.moisture_weight),
            ("drought_risk_weight", self.drought_risk_weight),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(AquaplanError::InvalidWeightConfiguration(format!(
                    "{} is {}, expected a value in [0, 1]",
                    name, value
                )));
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(AquaplanError::InvalidWeightConfiguration(format!(
                "weights sum to {}, expected 1.0",
                sum
            )));
        }
        Ok(())
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            yield_weight: 0.35,
            health_weight: 0.30,
            moisture_weight: 0.25,
            drought_risk_weight: 0.10,
        }
    }
}

/// Cutoffs for the post-allocation stress classification.
///
/// Exposed as configuration so thresholds can be recalibrated per
/// region without touching the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct StressThresholds {
    /// Moisture below this plus shortfall above `high_shortfall` is high stress.
    pub high_moisture: f64,
    pub high_shortfall: f64,
    /// Moisture below this plus shortfall above `medium_shortfall` is medium stress.
    pub medium_moisture: f64,
    pub medium_shortfall: f64,
    /// Any shortfall, or moisture below this, is at least low stress.
    pub low_moisture: f64,
}

impl StressThresholds {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("high_moisture", self.high_moisture),
            ("high_shortfall", self.high_shortfall),
            ("medium_moisture", self.medium_moisture),
            ("medium_shortfall", self.medium_shortfall),
            ("low_moisture", self.low_moisture),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(AquaplanError::Config(format!(
                    "stress threshold {} is {}, expected a value in [0, 1]",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl Default for StressThresholds {
    fn default() -> Self {
        Self {
            high_moisture: 0.4,
            high_shortfall: 0.5,
            medium_moisture: 0.6,
            medium_shortfall: 0.25,
            low_moisture: 0.6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineConfig {
    pub weights: ScoringWeights,
    pub stress: StressThresholds,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        self.stress.validate()
    }

    /// Load configuration from `config_override`, a standard location,
    /// or fall back to the built-in defaults when no file exists.
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(AquaplanError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                p
            }
            None => match Self::find_config_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| AquaplanError::Config(format!("Failed to read config: {}", e)))?;

        // Substitute environment variables
        let config_str = Self::substitute_env_vars(&config_str);

        let config: EngineConfig = serde_yaml::from_str(&config_str)
            .map_err(|e| AquaplanError::Config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Search for config.yaml in standard locations.
    fn find_config_path() -> Option<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        // Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("aquaplan").join("config.yaml");
            if xdg_config.exists() {
                return Some(xdg_config);
            }
        }

        None
    }

    /// Replace `${VAR_NAME}` references with their environment values.
    fn substitute_env_vars(content: &str) -> String {
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();

        let mut result = content.to_string();
        for cap in re.captures_iter(content) {
            if let Ok(value) = std::env::var(&cap[1]) {
                result = result.replace(&cap[0], &value);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_weights_match_calibrated_model() {
        let weights = ScoringWeights::default();
        assert!((weights.yield_weight - 0.35).abs() < 1e-12);
        assert!((weights.health_weight - 0.30).abs() < 1e-12);
        assert!((weights.moisture_weight - 0.25).abs() < 1e-12);
        assert!((weights.drought_risk_weight - 0.10).abs() < 1e-12);
        assert!(weights.validate().is_ok());
    }

    #[test]
    fn default_config_validates() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn weights_must_sum_to_one() {
        let weights = ScoringWeights {
            yield_weight: 0.5,
            health_weight: 0.5,
            moisture_weight: 0.5,
            drought_risk_weight: 0.0,
        };
        let err = weights.validate().unwrap_err();
        assert!(err.to_string().contains("sum"));
    }

    #[test]
    fn negative_weight_is_rejected() {
        let weights = ScoringWeights {
            yield_weight: 1.2,
            health_weight: -0.2,
            moisture_weight: 0.0,
            drought_risk_weight: 0.0,
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let thresholds = StressThresholds {
            high_moisture: 1.4,
            ..StressThresholds::default()
        };
        assert!(thresholds.validate().is_err());
    }

    #[test]
    fn load_reads_yaml_overrides() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            "weights:\n  yield_weight: 0.4\n  health_weight: 0.3\n  moisture_weight: 0.2\n  drought_risk_weight: 0.1\n"
        )
        .unwrap();

        let config = EngineConfig::load(Some(file.path().to_path_buf())).unwrap();
        assert!((config.weights.yield_weight - 0.4).abs() < 1e-12);
        // Unspecified sections fall back to defaults
        assert_eq!(config.stress, StressThresholds::default());
    }

    #[test]
    fn load_without_file_uses_defaults() {
        // No override and no config in standard locations of the test env
        let config = EngineConfig::load(None).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_override_file_is_an_error() {
        let result = EngineConfig::load(Some(PathBuf::from("/nonexistent/config.yaml")));
        assert!(result.is_err());
    }
}
