//! In-memory collaborators that record every interaction.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use elevator_core::{Direction, ElevatorCommander, ElevatorId, Floor, Reporter};
use elevator_errors::{DispatchError, DispatchResult};

/// One command accepted by `MockElevatorCommander`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssuedCommand {
    pub id: ElevatorId,
    pub floor: Floor,
    pub direction: Direction,
}

/// Mock elevator fleet. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockElevatorCommander {
    commands: Arc<Mutex<Vec<IssuedCommand>>>,
    rejected: Arc<Mutex<Vec<IssuedCommand>>>,
    rejecting: Arc<Mutex<HashSet<ElevatorId>>>,
    positions: Arc<Mutex<HashMap<ElevatorId, Floor>>>,
    directions: Arc<Mutex<HashMap<ElevatorId, Direction>>>,
}

impl MockElevatorCommander {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(self, id: ElevatorId, floor: Floor) -> Self {
        self.set_position(id, floor);
        self
    }

    pub fn with_direction(self, id: ElevatorId, direction: Direction) -> Self {
        self.directions.lock().unwrap().insert(id, direction);
        self
    }

    pub fn rejecting(self, id: ElevatorId) -> Self {
        self.reject(id);
        self
    }

    pub fn set_position(&self, id: ElevatorId, floor: Floor) {
        self.positions.lock().unwrap().insert(id, floor);
    }

    /// Every later command to `id` fails with `CommandRejected`.
    pub fn reject(&self, id: ElevatorId) {
        self.rejecting.lock().unwrap().insert(id);
    }

    pub fn accept(&self, id: ElevatorId) {
        self.rejecting.lock().unwrap().remove(&id);
    }

    pub fn commands(&self) -> Vec<IssuedCommand> {
        self.commands.lock().unwrap().clone()
    }

    pub fn commands_for(&self, id: ElevatorId) -> Vec<IssuedCommand> {
        self.commands()
            .into_iter()
            .filter(|command| command.id == id)
            .collect()
    }

    pub fn rejected_commands(&self) -> Vec<IssuedCommand> {
        self.rejected.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.commands.lock().unwrap().clear();
        self.rejected.lock().unwrap().clear();
    }
}

impl ElevatorCommander for MockElevatorCommander {
    fn command(
        &self,
        id: ElevatorId,
        destination_floor: Floor,
        direction: Direction,
    ) -> DispatchResult<()> {
        let command = IssuedCommand {
            id,
            floor: destination_floor,
            direction,
        };
        if self.rejecting.lock().unwrap().contains(&id) {
            self.rejected.lock().unwrap().push(command);
            return Err(DispatchError::command_rejected(
                id,
                destination_floor,
                "out of service",
            ));
        }
        self.commands.lock().unwrap().push(command);
        Ok(())
    }

    fn query_position(&self, id: ElevatorId) -> Option<Floor> {
        self.positions.lock().unwrap().get(&id).copied()
    }

    fn query_direction(&self, id: ElevatorId) -> Option<Direction> {
        self.directions.lock().unwrap().get(&id).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLevel {
    Info,
    Error,
}

/// Reporter that keeps every message for later assertions
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    entries: Arc<Mutex<Vec<(ReportLevel, String)>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn infos(&self) -> Vec<String> {
        self.messages(ReportLevel::Info)
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages(ReportLevel::Error)
    }

    fn messages(&self, level: ReportLevel) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(entry_level, _)| *entry_level == level)
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn contains(&self, fragment: &str) -> bool {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .any(|(_, message)| message.contains(fragment))
    }

    pub fn has_error_containing(&self, fragment: &str) -> bool {
        self.errors().iter().any(|message| message.contains(fragment))
    }

    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((ReportLevel::Info, message.to_string()));
    }

    fn report_error(&self, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((ReportLevel::Error, message.to_string()));
    }
}
