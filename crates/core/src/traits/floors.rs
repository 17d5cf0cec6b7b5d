use serde::{Deserialize, Serialize};

use crate::models::Floor;

/// Building-wide floor validity check
pub trait FloorRange: Send + Sync {
    fn is_valid_floor(&self, floor: Floor) -> bool;
}

/// Contiguous floor range, both ends inclusive
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoundedFloorRange {
    pub bottom: Floor,
    pub top: Floor,
}

impl BoundedFloorRange {
    pub fn new(bottom: Floor, top: Floor) -> Self {
        Self { bottom, top }
    }
}

impl FloorRange for BoundedFloorRange {
    fn is_valid_floor(&self, floor: Floor) -> bool {
        (self.bottom..=self.top).contains(&floor)
    }
}
