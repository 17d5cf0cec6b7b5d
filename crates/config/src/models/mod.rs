pub mod app_config;
pub mod building;
pub mod controller;
pub mod logging;

pub use app_config::*;
pub use building::*;
pub use controller::*;
pub use logging::*;
