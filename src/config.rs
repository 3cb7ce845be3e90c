//! Run configuration.

use serde::{Deserialize, Serialize};

/// Scale applied to raw coordinate distances (degrees to kilometres, roughly).
pub const DEFAULT_DISTANCE_SCALE: f64 = 100.0;

/// Parameters for a savings run.
///
/// # Examples
///
/// ```
/// use savings_routing::SavingsConfig;
///
/// let config = SavingsConfig::default().with_distance_scale(1.0);
/// assert_eq!(config.distance_scale(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavingsConfig {
    distance_scale: f64,
}

impl SavingsConfig {
    /// Sets the factor applied to every coordinate distance.
    pub fn with_distance_scale(mut self, scale: f64) -> Self {
        self.distance_scale = scale;
        self
    }

    /// Factor applied to every coordinate distance.
    pub fn distance_scale(&self) -> f64 {
        self.distance_scale
    }

    /// Reads a configuration from JSON; missing fields take their defaults.
    #[cfg(feature = "json")]
    pub fn from_json(input: &str) -> Result<Self, crate::RoutingError> {
        Ok(serde_json::from_str(input)?)
    }
}

impl Default for SavingsConfig {
    fn default() -> Self {
        Self {
            distance_scale: DEFAULT_DISTANCE_SCALE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scale() {
        assert_eq!(SavingsConfig::default().distance_scale(), 100.0);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: SavingsConfig = serde_json::from_str("{}").expect("valid");
        assert_eq!(config, SavingsConfig::default());

        let config: SavingsConfig =
            serde_json::from_str(r#"{"distance_scale": 2.5}"#).expect("valid");
        assert_eq!(config.distance_scale(), 2.5);
    }
}
