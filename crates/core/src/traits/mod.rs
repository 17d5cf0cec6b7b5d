//! Collaborator interfaces a dispatch controller talks through.
//!
//! The controller owns no hardware. Cars and log sinks are reached through
//! these traits so a simulator or a test double can stand in for them.

pub mod elevator;
pub mod floors;
pub mod reporter;

pub use elevator::*;
pub use floors::*;
pub use reporter::*;

use std::sync::Arc;

/// Injected collaborators for one controller instance
#[derive(Clone)]
pub struct ControllerContext {
    pub commander: Arc<dyn ElevatorCommander>,
    pub floors: Arc<dyn FloorRange>,
    pub reporter: Arc<dyn Reporter>,
}

impl ControllerContext {
    pub fn new(
        commander: Arc<dyn ElevatorCommander>,
        floors: Arc<dyn FloorRange>,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        Self {
            commander,
            floors,
            reporter,
        }
    }
}

impl std::fmt::Debug for ControllerContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControllerContext").finish_non_exhaustive()
    }
}
