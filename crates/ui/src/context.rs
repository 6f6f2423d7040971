use std::sync::Arc;

use drill_core::DrillSettings;
use services::{Clock, DrillError, DrillService};

pub trait UiApp: Send + Sync {
    fn settings(&self) -> DrillSettings;
    fn seed(&self) -> Option<u64>;
    fn clock(&self) -> Clock;
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppContext {
    settings: DrillSettings,
    seed: Option<u64>,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            settings: app.settings(),
            seed: app.seed(),
            clock: app.clock(),
        }
    }

    /// Start a drill with the configured settings.
    ///
    /// # Errors
    ///
    /// Propagates `DrillError` from the service.
    pub fn start_drill(&self) -> Result<DrillService, DrillError> {
        DrillService::new(self.settings, self.seed, self.clock)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
