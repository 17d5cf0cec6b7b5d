//! Elevator group dispatch.
//!
//! Wires a [`DispatchController`] to configuration, logging and a tick task.
//! Hosts supply the elevator fleet through [`ElevatorCommander`].

pub mod app;
pub mod logging;
pub mod shutdown;

pub use app::DispatchApp;
pub use logging::init_logging;
pub use shutdown::ShutdownManager;

pub use elevator_config::AppConfig;
pub use elevator_core::{Direction, ElevatorCommander, ElevatorId, Floor};
pub use elevator_dispatcher::{DispatchController, RouteOutcome, TickReport};
pub use elevator_errors::{DispatchError, DispatchResult};
