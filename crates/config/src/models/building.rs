use crate::validation::ConfigValidator;
use serde::{Deserialize, Serialize};

/// Floor span of the building served by the controller.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuildingConfig {
    pub bottom_floor: i32,
    pub top_floor: i32,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self {
            bottom_floor: 0,
            top_floor: 30,
        }
    }
}

impl ConfigValidator for BuildingConfig {
    fn validate(&self) -> crate::ConfigResult<()> {
        if self.bottom_floor > self.top_floor {
            return Err(crate::ConfigError::Validation(format!(
                "building.bottom_floor ({}) must not be above building.top_floor ({})",
                self.bottom_floor, self.top_floor
            )));
        }
        Ok(())
    }
}
