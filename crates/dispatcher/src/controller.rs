use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use elevator_config::{ConfigValidator, ControllerConfig};
use elevator_core::{
    CarState, ControllerContext, Direction, ElevatorCommander, ElevatorId, Floor, FloorRange,
    HallCall, Reporter, Request,
};
use elevator_errors::{DispatchError, DispatchResult};

use crate::policy::AssignmentPolicy;
use crate::registry::ElevatorRegistry;
use crate::request_queue::RequestQueue;
use crate::strategies::{strategy_from_name, CarCandidate};

/// What a car was sent to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentSource {
    Route(Request),
    HallCall(HallCall),
}

/// Pending work held by one car until it arrives at `target_floor`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub target_floor: Floor,
    pub direction: Direction,
    pub source: AssignmentSource,
}

/// Result of a successfully admitted route request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Held in the queue until the next tick.
    Queued,
    Dispatched(ElevatorId),
    /// Registered as an outstanding call; no car qualified.
    Unanswered,
}

/// Decisions taken during one tick
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub assigned: Vec<(Request, ElevatorId)>,
    /// Requests that joined a car already booked for the same route this tick.
    pub coalesced: Vec<(Request, ElevatorId)>,
    pub deferred: Vec<Request>,
    pub rejected: Vec<(Request, ElevatorId)>,
    pub arrivals_consumed: usize,
}

impl TickReport {
    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
            && self.coalesced.is_empty()
            && self.deferred.is_empty()
            && self.rejected.is_empty()
            && self.arrivals_consumed == 0
    }

    pub fn dispatched(&self) -> usize {
        self.assigned.len() + self.coalesced.len()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchSummary {
    pub serviced: usize,
    pub idle: usize,
    pub assigned: usize,
    pub queued: usize,
    pub outstanding: usize,
}

impl DispatchSummary {
    pub fn pending(&self) -> usize {
        self.queued + self.outstanding
    }
    pub fn has_capacity(&self) -> bool {
        self.idle > 0
    }
}

pub struct DispatchController {
    number: i32,
    destination_dispatch: bool,
    verbose: bool,
    registry: ElevatorRegistry,
    queue: RequestQueue,
    policy: AssignmentPolicy,
    assignments: BTreeMap<ElevatorId, Vec<Assignment>>,
    outstanding_calls: Vec<HallCall>,
    commander: Arc<dyn ElevatorCommander>,
    floors: Arc<dyn FloorRange>,
    reporter: Arc<dyn Reporter>,
}

impl DispatchController {
    pub fn new(config: &ControllerConfig, context: ControllerContext) -> DispatchResult<Self> {
        config
            .validate()
            .map_err(|e| DispatchError::config_error(e.to_string()))?;
        let strategy = strategy_from_name(&config.selection_strategy)?;

        let mut controller = Self {
            number: config.number,
            destination_dispatch: config.destination_dispatch,
            verbose: config.verbose,
            registry: ElevatorRegistry::new(),
            queue: RequestQueue::new(),
            policy: AssignmentPolicy::new(config.elevator_range, config.range_mode, strategy),
            assignments: BTreeMap::new(),
            outstanding_calls: Vec::new(),
            commander: context.commander,
            floors: context.floors,
            reporter: context.reporter,
        };
        for &id in &config.elevators {
            controller.add_elevator(id)?;
        }

        info!(
            controller.number = controller.number,
            elevators = controller.registry.len(),
            destination_dispatch = controller.destination_dispatch,
            strategy = controller.policy.strategy_name(),
            "dispatch controller created"
        );
        if controller.verbose {
            controller.report("Created");
        }
        Ok(controller)
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn is_destination_dispatch(&self) -> bool {
        self.destination_dispatch
    }

    pub fn registry(&self) -> &ElevatorRegistry {
        &self.registry
    }

    pub fn policy(&self) -> &AssignmentPolicy {
        &self.policy
    }

    pub fn report(&self, message: &str) {
        self.reporter
            .report(&format!("Controller {} - {}", self.number, message));
    }

    pub fn report_error(&self, message: &str) {
        self.reporter
            .report_error(&format!("Controller {} - {}", self.number, message));
    }

    /// Entry point for call stations.
    ///
    /// In destination dispatch mode the request is queued for the next tick.
    /// Otherwise it is handled at once as a floor call at `starting_floor`.
    pub fn request_route(
        &mut self,
        starting_floor: Floor,
        destination_floor: Floor,
    ) -> DispatchResult<RouteOutcome> {
        let request = self.validate_route(starting_floor, destination_floor)?;

        if self.destination_dispatch {
            self.queue.enqueue(starting_floor, destination_floor)?;
            debug!(
                controller.number = self.number,
                route = %request,
                queued = self.queue.len(),
                "route queued"
            );
            if self.verbose {
                self.report(&format!("Queued route {request}"));
            }
            return Ok(RouteOutcome::Queued);
        }

        match self.process(request.pickup_call()) {
            Some(id) => Ok(RouteOutcome::Dispatched(id)),
            None => Ok(RouteOutcome::Unanswered),
        }
    }

    fn validate_route(
        &self,
        starting_floor: Floor,
        destination_floor: Floor,
    ) -> DispatchResult<Request> {
        let result = Request::new(starting_floor, destination_floor).and_then(|request| {
            match [starting_floor, destination_floor]
                .into_iter()
                .find(|floor| !self.floors.is_valid_floor(*floor))
            {
                Some(floor) => Err(DispatchError::invalid_request(
                    starting_floor,
                    destination_floor,
                    format!("floor {floor} is outside the building"),
                )),
                None => Ok(request),
            }
        });
        if let Err(e) = &result {
            self.report_error(&e.to_string());
        }
        result
    }

    pub fn add_elevator(&mut self, id: ElevatorId) -> DispatchResult<()> {
        if let Err(e) = self.registry.add(id) {
            self.report_error(&e.to_string());
            return Err(e);
        }
        if self.verbose {
            self.report(&format!("Added elevator {id}"));
        }
        self.retry_outstanding_calls();
        Ok(())
    }

    /// Removes a car from the group. Work assigned to it is handed back
    /// instead of being dropped.
    pub fn remove_elevator(&mut self, id: ElevatorId) -> DispatchResult<()> {
        if let Err(e) = self.registry.remove(id) {
            self.report_error(&e.to_string());
            return Err(e);
        }
        let orphaned = self.assignments.remove(&id).unwrap_or_default();
        self.recover_orphans(id, orphaned);
        if self.verbose {
            self.report(&format!("Removed elevator {id}"));
        }
        self.retry_outstanding_calls();
        Ok(())
    }

    pub fn services_elevator(&self, id: ElevatorId) -> bool {
        self.registry.contains(id)
    }

    fn recover_orphans(&mut self, id: ElevatorId, orphaned: Vec<Assignment>) {
        let mut routes = Vec::new();
        for assignment in orphaned {
            match assignment.source {
                AssignmentSource::Route(request) => routes.push(request),
                AssignmentSource::HallCall(call) => {
                    self.report_error(&format!(
                        "Elevator {id} removed while answering call at {call}"
                    ));
                    self.push_outstanding(call);
                }
            }
        }

        // Head of the queue, original order kept.
        for request in routes.into_iter().rev() {
            self.report_error(&format!(
                "Elevator {id} removed while assigned route {request}, route returned"
            ));
            if self.destination_dispatch {
                self.queue.requeue_front(request);
            } else {
                self.push_outstanding(request.pickup_call());
            }
        }
    }

    /// Cancels a queued route that has not been assigned yet.
    pub fn remove_route(
        &mut self,
        starting_floor: Floor,
        destination_floor: Floor,
    ) -> DispatchResult<Request> {
        match self.queue.remove_matching(starting_floor, destination_floor) {
            Ok(request) => {
                if self.verbose {
                    self.report(&format!("Removed route {request}"));
                }
                Ok(request)
            }
            Err(e) => {
                self.report_error(&e.to_string());
                Err(e)
            }
        }
    }

    /// Arrival callback from a car.
    ///
    /// Assignments targeting `floor` are completed. In conventional mode the
    /// arrival is consumed at once and unanswered calls are retried; in
    /// destination dispatch mode the next tick consumes it.
    pub fn elevator_arrived(
        &mut self,
        id: ElevatorId,
        floor: Floor,
        direction: Direction,
    ) -> DispatchResult<()> {
        if !self.floors.is_valid_floor(floor) {
            let e = DispatchError::invalid_request(
                floor,
                floor,
                format!("elevator {id} reported an arrival outside the building"),
            );
            self.report_error(&format!("Arrival at floor {floor} ignored: {e}"));
            return Err(e);
        }
        if let Err(e) = self.registry.record_arrival(id, floor, direction) {
            self.report_error(&format!("Arrival at floor {floor} ignored: {e}"));
            return Err(e);
        }
        debug!(
            controller.number = self.number,
            elevator.id = id,
            floor,
            direction = %direction,
            "elevator arrived"
        );
        if self.verbose {
            self.report(&format!(
                "Elevator {id} arrived at floor {floor} going {direction}"
            ));
        }

        let completed = self.complete_assignments(id, floor);
        let before = self.outstanding_calls.len();
        self.outstanding_calls
            .retain(|call| !(call.floor == floor && call.direction == direction));
        let answered = before - self.outstanding_calls.len();
        if answered > 0 && self.verbose {
            self.report(&format!(
                "Elevator {id} answered outstanding call at floor {floor} going {direction}"
            ));
        }
        debug!(elevator.id = id, completed, answered, "arrival processed");

        if !self.destination_dispatch {
            self.registry.consume_arrival(id);
            self.retry_outstanding_calls();
        }
        Ok(())
    }

    fn complete_assignments(&mut self, id: ElevatorId, floor: Floor) -> usize {
        let Some(pending) = self.assignments.get_mut(&id) else {
            return 0;
        };
        let before = pending.len();
        pending.retain(|assignment| assignment.target_floor != floor);
        let completed = before - pending.len();
        if pending.is_empty() {
            self.assignments.remove(&id);
        }
        completed
    }

    /// Periodic entry point. Runs a destination dispatch pass; does nothing
    /// in conventional mode.
    pub fn tick(&mut self) -> TickReport {
        let mut report = TickReport::default();
        if !self.destination_dispatch {
            return report;
        }

        for id in self.registry.pending_arrivals() {
            if self.registry.consume_arrival(id).is_some() {
                report.arrivals_consumed += 1;
            }
        }
        self.process_destination_dispatch(&mut report);

        if !report.is_empty() {
            debug!(
                controller.number = self.number,
                assigned = report.assigned.len(),
                coalesced = report.coalesced.len(),
                deferred = report.deferred.len(),
                rejected = report.rejected.len(),
                "tick processed"
            );
        }
        report
    }

    /// Assigns queued requests in FIFO order, at most one route per car.
    fn process_destination_dispatch(&mut self, report: &mut TickReport) {
        let pending = self.queue.snapshot();
        let mut booked: Vec<(Request, ElevatorId)> = Vec::new();

        for request in pending {
            if let Some(&(_, id)) = booked.iter().find(|(route, _)| *route == request) {
                self.ride_along(request, id, report);
                continue;
            }

            let call = request.pickup_call();
            let mut exclude: Vec<ElevatorId> = booked.iter().map(|(_, id)| *id).collect();
            loop {
                let candidates = self.candidates(true);
                let Some(id) = self
                    .policy
                    .find_closest_elevator(&call, &candidates, &exclude)
                else {
                    report.deferred.push(request);
                    break;
                };

                let source = AssignmentSource::Route(request);
                match self.dispatch_elevator(
                    id,
                    request.destination_floor,
                    request.direction(),
                    source,
                ) {
                    Ok(()) => {
                        self.take_from_queue(&request);
                        booked.push((request, id));
                        report.assigned.push((request, id));
                        break;
                    }
                    Err(_) => {
                        report.rejected.push((request, id));
                        exclude.push(id);
                    }
                }
            }
        }

        if !report.deferred.is_empty() {
            warn!(
                controller.number = self.number,
                deferred = report.deferred.len(),
                "requests left queued, no elevator available"
            );
        }
    }

    fn ride_along(&mut self, request: Request, id: ElevatorId, report: &mut TickReport) {
        self.take_from_queue(&request);
        self.assignments.entry(id).or_default().push(Assignment {
            target_floor: request.destination_floor,
            direction: request.direction(),
            source: AssignmentSource::Route(request),
        });
        if self.verbose {
            self.report(&format!("Route {request} joined elevator {id}"));
        }
        report.coalesced.push((request, id));
    }

    fn take_from_queue(&mut self, request: &Request) {
        if let Err(e) = self
            .queue
            .remove_matching(request.starting_floor, request.destination_floor)
        {
            self.report_error(&e.to_string());
        }
    }

    /// Handles a floor call, falling back to other cars on rejection.
    fn process(&mut self, call: HallCall) -> Option<ElevatorId> {
        if let Some(id) = self.try_assign(call) {
            return Some(id);
        }
        self.push_outstanding(call);
        let error = DispatchError::no_elevator_available(call.floor);
        self.report_error(&format!("{error} going {}", call.direction));
        None
    }

    fn try_assign(&mut self, call: HallCall) -> Option<ElevatorId> {
        let mut exclude = Vec::new();
        loop {
            let candidates = self.candidates(false);
            let id = self
                .policy
                .find_closest_elevator(&call, &candidates, &exclude)?;
            match self.dispatch_elevator(
                id,
                call.floor,
                call.direction,
                AssignmentSource::HallCall(call),
            ) {
                Ok(()) => return Some(id),
                Err(_) => exclude.push(id),
            }
        }
    }

    fn push_outstanding(&mut self, call: HallCall) {
        if !self.outstanding_calls.contains(&call) {
            self.outstanding_calls.push(call);
        }
    }

    /// Re-evaluates unanswered floor calls. Conventional mode only.
    fn retry_outstanding_calls(&mut self) {
        if self.destination_dispatch || self.outstanding_calls.is_empty() {
            return;
        }
        let calls = std::mem::take(&mut self.outstanding_calls);
        for call in calls {
            match self.try_assign(call) {
                Some(id) => {
                    if self.verbose {
                        self.report(&format!(
                            "Outstanding call at {call} answered by elevator {id}"
                        ));
                    }
                }
                None => self.outstanding_calls.push(call),
            }
        }
    }

    /// Sends a car to `destination_floor` and records the assignment.
    fn dispatch_elevator(
        &mut self,
        id: ElevatorId,
        destination_floor: Floor,
        direction: Direction,
        source: AssignmentSource,
    ) -> DispatchResult<()> {
        if let Err(e) = self.commander.command(id, destination_floor, direction) {
            let error = match e {
                DispatchError::CommandRejected { .. } => e,
                other => DispatchError::command_rejected(id, destination_floor, other.to_string()),
            };
            self.report_error(&error.to_string());
            return Err(error);
        }

        self.assignments.entry(id).or_default().push(Assignment {
            target_floor: destination_floor,
            direction,
            source,
        });
        info!(
            controller.number = self.number,
            elevator.id = id,
            floor = destination_floor,
            direction = %direction,
            "elevator dispatched"
        );
        if self.verbose {
            self.report(&format!(
                "Dispatched elevator {id} to floor {destination_floor} going {direction}"
            ));
        }
        Ok(())
    }

    /// Current view of each car for the assignment policy.
    ///
    /// A moving car's cached arrival is stale, so the commander is asked
    /// first; an idle car is trusted to be where it last arrived.
    fn candidates(&self, idle_only: bool) -> Vec<CarCandidate> {
        self.registry
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                let pending = self
                    .assignments
                    .get(&entry.id)
                    .filter(|pending| !pending.is_empty());
                let state = if pending.is_some() {
                    CarState::Assigned
                } else {
                    CarState::Idle
                };
                if idle_only && state == CarState::Assigned {
                    return None;
                }

                let (position, direction) = match pending.and_then(|pending| pending.first()) {
                    Some(current) => {
                        let position = self
                            .commander
                            .query_position(entry.id)
                            .or(entry.arrival_floor());
                        let direction = self.commander.query_direction(entry.id).or_else(|| {
                            position
                                .and_then(|floor| Direction::between(floor, current.target_floor))
                                .or(Some(current.direction))
                        });
                        (position, direction)
                    }
                    None => (
                        entry
                            .arrival_floor()
                            .or_else(|| self.commander.query_position(entry.id)),
                        entry
                            .arrival_direction()
                            .or_else(|| self.commander.query_direction(entry.id)),
                    ),
                };

                Some(CarCandidate {
                    id: entry.id,
                    index,
                    position,
                    direction,
                    state,
                })
            })
            .collect()
    }

    /// Car that would answer a call from `starting_floor` toward
    /// `destination_floor` right now, without dispatching it.
    pub fn find_closest_elevator(
        &self,
        starting_floor: Floor,
        destination_floor: Floor,
    ) -> DispatchResult<Option<ElevatorId>> {
        let request = Request::new(starting_floor, destination_floor)?;
        let candidates = self.candidates(self.destination_dispatch);
        Ok(self
            .policy
            .find_closest_elevator(&request.pickup_call(), &candidates, &[]))
    }

    /// Switches dispatch discipline at runtime.
    ///
    /// Leaving destination dispatch hands every queued request to the
    /// conventional path, so nothing stays stranded in the queue.
    pub fn set_destination_dispatch(&mut self, enabled: bool) {
        if self.destination_dispatch == enabled {
            return;
        }
        self.destination_dispatch = enabled;
        info!(
            controller.number = self.number,
            destination_dispatch = enabled,
            "dispatch mode changed"
        );
        if self.verbose {
            let state = if enabled { "enabled" } else { "disabled" };
            self.report(&format!("Destination dispatch {state}"));
        }
        if enabled {
            return;
        }

        for id in self.registry.pending_arrivals() {
            self.registry.consume_arrival(id);
        }
        self.retry_outstanding_calls();
        for request in self.queue.snapshot() {
            self.take_from_queue(&request);
            self.process(request.pickup_call());
        }
    }

    pub fn state_of(&self, id: ElevatorId) -> Option<CarState> {
        if !self.registry.contains(id) {
            return None;
        }
        match self.assignments.get(&id) {
            Some(pending) if !pending.is_empty() => Some(CarState::Assigned),
            _ => Some(CarState::Idle),
        }
    }

    pub fn assignments_for(&self, id: ElevatorId) -> &[Assignment] {
        self.assignments
            .get(&id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn pending_requests(&self) -> Vec<Request> {
        self.queue.snapshot()
    }

    pub fn outstanding_calls(&self) -> &[HallCall] {
        &self.outstanding_calls
    }

    pub fn summary(&self) -> DispatchSummary {
        let serviced = self.registry.len();
        let assigned = self
            .registry
            .iter()
            .filter(|entry| self.state_of(entry.id) == Some(CarState::Assigned))
            .count();
        DispatchSummary {
            serviced,
            idle: serviced - assigned,
            assigned,
            queued: self.queue.len(),
            outstanding: self.outstanding_calls.len(),
        }
    }
}

impl std::fmt::Debug for DispatchController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatchController")
            .field("number", &self.number)
            .field("destination_dispatch", &self.destination_dispatch)
            .field("registry", &self.registry)
            .field("queue", &self.queue)
            .field("policy", &self.policy)
            .field("assignments", &self.assignments)
            .field("outstanding_calls", &self.outstanding_calls)
            .finish_non_exhaustive()
    }
}
