pub mod models;
pub mod reporting;
pub mod traits;

pub use models::{
    Arrival, CarState, Direction, ElevatorEntry, ElevatorId, Floor, HallCall, Request,
};
pub use reporting::TracingReporter;
pub use traits::{BoundedFloorRange, ControllerContext, ElevatorCommander, FloorRange, Reporter};

pub use elevator_errors::{DispatchError, DispatchResult};
