use std::sync::{Arc, Mutex};

use edugate_core::{Navigator, Route};

/// Navigator double that records every requested transition.
#[derive(Debug, Clone, Default)]
pub struct MockNavigator {
    routes: Arc<Mutex<Vec<Route>>>,
}

impl MockNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().expect("route log lock poisoned").clone()
    }
}

impl Navigator for MockNavigator {
    fn navigate_to(&self, route: Route) {
        self.routes
            .lock()
            .expect("route log lock poisoned")
            .push(route);
    }
}
