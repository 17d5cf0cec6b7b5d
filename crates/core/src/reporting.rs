use tracing::{error, info};

use crate::traits::Reporter;

/// Reporter that forwards controller messages to `tracing`.
#[derive(Debug, Clone, Default)]
pub struct TracingReporter {
    component: String,
}

impl TracingReporter {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
        }
    }

    pub fn component(&self) -> &str {
        &self.component
    }
}

impl Reporter for TracingReporter {
    fn report(&self, message: &str) {
        info!(component = %self.component, "{}", message);
    }

    fn report_error(&self, message: &str) {
        error!(component = %self.component, "{}", message);
    }
}
