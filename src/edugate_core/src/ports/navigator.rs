use crate::domain::email::Email;

/// Destination screens the gate can transition to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The authenticated email is carried for display purposes only, never
    /// for re-authentication.
    Home { email: Email },
    Register,
}

/// Port trait for screen transitions. Fire-and-forget: the controller never
/// observes a return value.
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, route: Route);
}
