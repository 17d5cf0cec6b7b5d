pub mod direction;
pub mod elevator;
pub mod request;

pub use direction::*;
pub use elevator::*;
pub use request::*;

/// Numeric identity of an elevator car owned outside the controller.
pub type ElevatorId = i32;

/// Floor number as defined by the building.
pub type Floor = i32;
