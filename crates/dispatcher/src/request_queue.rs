use std::collections::VecDeque;

use elevator_core::{Floor, Request};
use elevator_errors::{DispatchError, DispatchResult};

/// Pending destination dispatch requests in arrival order
#[derive(Debug, Default, Clone)]
pub struct RequestQueue {
    requests: VecDeque<Request>,
}

impl RequestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(
        &mut self,
        starting_floor: Floor,
        destination_floor: Floor,
    ) -> DispatchResult<Request> {
        let request = Request::new(starting_floor, destination_floor)?;
        self.requests.push_back(request);
        Ok(request)
    }

    /// Puts an orphaned request back at the head so it keeps its priority.
    pub fn requeue_front(&mut self, request: Request) {
        self.requests.push_front(request);
    }

    /// Removes the first request matching both floors.
    pub fn remove_matching(
        &mut self,
        starting_floor: Floor,
        destination_floor: Floor,
    ) -> DispatchResult<Request> {
        let index = self
            .requests
            .iter()
            .position(|request| request.matches(starting_floor, destination_floor))
            .ok_or_else(|| DispatchError::route_not_found(starting_floor, destination_floor))?;
        self.requests
            .remove(index)
            .ok_or_else(|| DispatchError::route_not_found(starting_floor, destination_floor))
    }

    /// Copy of the queue in FIFO order. The queue itself is left untouched.
    pub fn snapshot(&self) -> Vec<Request> {
        self.requests.iter().copied().collect()
    }

    pub fn contains(&self, starting_floor: Floor, destination_floor: Floor) -> bool {
        self.requests
            .iter()
            .any(|request| request.matches(starting_floor, destination_floor))
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}
