//! # Elevator Testing Utils
//!
//! Shared test doubles for the dispatch workspace: a recording elevator
//! commander, a recording reporter and builders for controller configuration.
//!
//! ```toml
//! [dev-dependencies]
//! elevator-testing-utils = { path = "../testing-utils" }
//! ```

pub mod builders;
pub mod helpers;
pub mod mocks;

pub use builders::*;
pub use helpers::*;
pub use mocks::*;
