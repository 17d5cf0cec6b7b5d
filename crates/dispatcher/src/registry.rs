use tracing::debug;

use elevator_core::{Arrival, Direction, ElevatorEntry, ElevatorId, Floor};
use elevator_errors::{DispatchError, DispatchResult};

/// Cars serviced by one controller, kept in the order they were added.
///
/// Entries are always looked up and removed by id, never by position, so a
/// removal cannot shift another car's identity.
#[derive(Debug, Default, Clone)]
pub struct ElevatorRegistry {
    entries: Vec<ElevatorEntry>,
}

impl ElevatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, id: ElevatorId) -> DispatchResult<()> {
        if self.contains(id) {
            return Err(DispatchError::duplicate_elevator(id));
        }
        self.entries.push(ElevatorEntry::new(id));
        debug!(elevator.id = id, "elevator added to registry");
        Ok(())
    }

    pub fn remove(&mut self, id: ElevatorId) -> DispatchResult<ElevatorEntry> {
        let index = self
            .index_of(id)
            .ok_or_else(|| DispatchError::unknown_elevator(id))?;
        debug!(elevator.id = id, "elevator removed from registry");
        Ok(self.entries.remove(index))
    }

    pub fn contains(&self, id: ElevatorId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    pub fn get(&self, id: ElevatorId) -> Option<&ElevatorEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    fn get_mut(&mut self, id: ElevatorId) -> Option<&mut ElevatorEntry> {
        self.entries.iter_mut().find(|entry| entry.id == id)
    }

    /// Records an arrival, replacing any arrival not yet consumed.
    pub fn record_arrival(
        &mut self,
        id: ElevatorId,
        floor: Floor,
        direction: Direction,
    ) -> DispatchResult<()> {
        let entry = self
            .get_mut(id)
            .ok_or_else(|| DispatchError::unknown_elevator(id))?;
        entry.record_arrival(floor, direction);
        Ok(())
    }

    pub fn consume_arrival(&mut self, id: ElevatorId) -> Option<Arrival> {
        self.get_mut(id).and_then(ElevatorEntry::consume_arrival)
    }

    /// Ids of cars holding an arrival that no decision has consumed yet.
    pub fn pending_arrivals(&self) -> Vec<ElevatorId> {
        self.entries
            .iter()
            .filter(|entry| entry.has_arrived)
            .map(|entry| entry.id)
            .collect()
    }

    pub fn index_of(&self, id: ElevatorId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ElevatorEntry> {
        self.entries.iter()
    }

    pub fn ids(&self) -> Vec<ElevatorId> {
        self.entries.iter().map(|entry| entry.id).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_rejects_duplicate() {
        let mut registry = ElevatorRegistry::new();
        assert!(registry.add(1).is_ok());
        assert_eq!(
            registry.add(1).unwrap_err(),
            DispatchError::DuplicateElevator { id: 1 }
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_remove_keeps_insertion_order() {
        let mut registry = ElevatorRegistry::new();
        for id in [7, 3, 5] {
            registry.add(id).unwrap();
        }

        let removed = registry.remove(3).unwrap();
        assert_eq!(removed.id, 3);
        assert_eq!(registry.ids(), vec![7, 5]);
        assert_eq!(registry.index_of(5), Some(1));
        assert!(!registry.contains(3));
    }

    #[test]
    fn test_remove_unknown_fails() {
        let mut registry = ElevatorRegistry::new();
        assert_eq!(
            registry.remove(9).unwrap_err(),
            DispatchError::UnknownElevator { id: 9 }
        );
    }

    #[test]
    fn test_record_arrival_unknown_car() {
        let mut registry = ElevatorRegistry::new();
        let result = registry.record_arrival(4, 2, Direction::Up);
        assert!(matches!(result, Err(DispatchError::UnknownElevator { id: 4 })));
    }

    #[test]
    fn test_pending_arrivals_and_consume() {
        let mut registry = ElevatorRegistry::new();
        registry.add(1).unwrap();
        registry.add(2).unwrap();
        registry.record_arrival(2, 6, Direction::Down).unwrap();

        assert_eq!(registry.pending_arrivals(), vec![2]);
        let arrival = registry.consume_arrival(2).unwrap();
        assert_eq!(arrival.floor, 6);
        assert!(registry.pending_arrivals().is_empty());
        assert_eq!(registry.get(2).unwrap().arrival_floor(), Some(6));
        assert_eq!(registry.consume_arrival(1), None);
    }
}
