//! Builders for controller configuration with test-friendly defaults.

use elevator_config::{ControllerConfig, RangeMode};
use elevator_core::ElevatorId;

/// Builder for `ControllerConfig`
pub struct ControllerConfigBuilder {
    config: ControllerConfig,
}

impl ControllerConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ControllerConfig {
                number: 1,
                elevators: vec![],
                elevator_range: 5,
                range_mode: RangeMode::Floors,
                destination_dispatch: false,
                tick_interval_ms: 100,
                selection_strategy: "directional".to_string(),
                verbose: false,
            },
        }
    }

    pub fn with_number(mut self, number: i32) -> Self {
        self.config.number = number;
        self
    }

    pub fn with_elevators(mut self, elevators: &[ElevatorId]) -> Self {
        self.config.elevators = elevators.to_vec();
        self
    }

    pub fn with_range(mut self, elevator_range: i32) -> Self {
        self.config.elevator_range = elevator_range;
        self
    }

    pub fn with_range_mode(mut self, range_mode: RangeMode) -> Self {
        self.config.range_mode = range_mode;
        self
    }

    pub fn with_strategy(mut self, strategy: &str) -> Self {
        self.config.selection_strategy = strategy.to_string();
        self
    }

    pub fn with_tick_interval_ms(mut self, tick_interval_ms: u64) -> Self {
        self.config.tick_interval_ms = tick_interval_ms;
        self
    }

    pub fn destination_dispatch(mut self) -> Self {
        self.config.destination_dispatch = true;
        self
    }

    pub fn verbose(mut self) -> Self {
        self.config.verbose = true;
        self
    }

    pub fn build(self) -> ControllerConfig {
        self.config
    }
}

impl Default for ControllerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
