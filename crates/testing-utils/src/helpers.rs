//! Wiring helpers for controller tests.

use std::sync::Arc;

use elevator_core::{BoundedFloorRange, ControllerContext, Floor};

use crate::mocks::{MockElevatorCommander, RecordingReporter};

pub const TEST_BOTTOM_FLOOR: Floor = 0;
pub const TEST_TOP_FLOOR: Floor = 30;

/// Mock collaborators plus the context built from them.
pub struct TestContext {
    pub commander: MockElevatorCommander,
    pub reporter: RecordingReporter,
    pub context: ControllerContext,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_commander(MockElevatorCommander::new())
    }

    pub fn with_commander(commander: MockElevatorCommander) -> Self {
        let reporter = RecordingReporter::new();
        let context = ControllerContext::new(
            Arc::new(commander.clone()),
            Arc::new(BoundedFloorRange::new(TEST_BOTTOM_FLOOR, TEST_TOP_FLOOR)),
            Arc::new(reporter.clone()),
        );
        Self {
            commander,
            reporter,
            context,
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
