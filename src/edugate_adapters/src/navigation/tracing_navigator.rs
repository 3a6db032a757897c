use edugate_core::{Navigator, Route};

/// Navigator for headless hosts: logs the transition instead of rendering
/// a screen change.
#[derive(Debug, Clone, Default)]
pub struct TracingNavigator;

impl TracingNavigator {
    pub fn new() -> Self {
        Self
    }
}

impl Navigator for TracingNavigator {
    fn navigate_to(&self, route: Route) {
        match &route {
            Route::Home { email } => tracing::info!(%email, "navigating to home"),
            Route::Register => tracing::info!("navigating to register"),
        }
    }
}
