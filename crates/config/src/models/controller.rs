use crate::validation::{ConfigValidator, ValidationUtils};
use serde::{Deserialize, Serialize};

/// Strategy names accepted by `ControllerConfig::selection_strategy`.
pub const SELECTION_STRATEGIES: [&str; 2] = ["directional", "closest"];

/// How `elevator_range` bounds the car search.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RangeMode {
    /// Absolute floor distance between a car and the calling floor.
    #[default]
    Floors,
    /// Position of the car in registration order.
    CarIndex,
}

impl std::str::FromStr for RangeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "floors" => Ok(RangeMode::Floors),
            "car_index" => Ok(RangeMode::CarIndex),
            _ => Err(format!(
                "Invalid range mode: {s}. Valid modes: floors, car_index"
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControllerConfig {
    pub number: i32,
    pub elevators: Vec<i32>,
    pub elevator_range: i32,
    pub range_mode: RangeMode,
    pub destination_dispatch: bool,
    pub tick_interval_ms: u64,
    pub selection_strategy: String,
    pub verbose: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            number: 1,
            elevators: Vec::new(),
            elevator_range: 5,
            range_mode: RangeMode::Floors,
            destination_dispatch: false,
            tick_interval_ms: 1000,
            selection_strategy: "directional".to_string(),
            verbose: false,
        }
    }
}

impl ControllerConfig {
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_interval_ms)
    }
}

impl ConfigValidator for ControllerConfig {
    fn validate(&self) -> crate::ConfigResult<()> {
        ValidationUtils::validate_positive(self.elevator_range, "controller.elevator_range")?;
        ValidationUtils::validate_interval_ms(self.tick_interval_ms, "controller.tick_interval_ms")?;
        ValidationUtils::validate_unique_ids(&self.elevators, "controller.elevators")?;
        ValidationUtils::validate_not_empty(
            &self.selection_strategy,
            "controller.selection_strategy",
        )?;
        ValidationUtils::validate_one_of(
            &self.selection_strategy,
            &SELECTION_STRATEGIES,
            "controller.selection_strategy",
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controller_config_validation() {
        let config = ControllerConfig {
            elevators: vec![1, 2],
            ..ControllerConfig::default()
        };

        assert!(config.validate().is_ok());

        // Test invalid elevator_range
        let mut invalid_config = config.clone();
        invalid_config.elevator_range = 0;
        assert!(invalid_config.validate().is_err());

        // Test invalid tick interval
        let mut invalid_config = config.clone();
        invalid_config.tick_interval_ms = 0;
        assert!(invalid_config.validate().is_err());

        // Test duplicate elevators
        let mut invalid_config = config.clone();
        invalid_config.elevators = vec![3, 3];
        assert!(invalid_config.validate().is_err());

        // Test invalid strategy
        let mut invalid_config = config.clone();
        invalid_config.selection_strategy = "round_robin".to_string();
        assert!(invalid_config.validate().is_err());
    }

    #[test]
    fn test_range_mode_from_str() {
        assert_eq!("floors".parse::<RangeMode>(), Ok(RangeMode::Floors));
        assert_eq!("CAR_INDEX".parse::<RangeMode>(), Ok(RangeMode::CarIndex));
        assert!("lobby".parse::<RangeMode>().is_err());
    }

    #[test]
    fn test_tick_interval() {
        let config = ControllerConfig {
            tick_interval_ms: 250,
            ..ControllerConfig::default()
        };
        assert_eq!(config.tick_interval(), std::time::Duration::from_millis(250));
    }
}
