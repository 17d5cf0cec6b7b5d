//! Dispatch controller for a group of elevator cars.
//!
//! The controller decides which car answers which call. It runs in one of two
//! modes: conventional floor calls are answered immediately, destination
//! dispatch requests are queued and assigned in batches on every tick.

pub mod controller;
pub mod policy;
pub mod registry;
pub mod request_queue;
pub mod scheduler;
pub mod strategies;


pub use controller::*;
pub use policy::AssignmentPolicy;
pub use registry::ElevatorRegistry;
pub use request_queue::RequestQueue;
pub use scheduler::*;
pub use strategies::*;
