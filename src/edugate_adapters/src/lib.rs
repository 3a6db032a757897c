pub mod config;
pub mod identity;
pub mod navigation;
pub mod telemetry;

pub use identity::{InMemoryIdentityProvider, RestIdentityProvider};
pub use navigation::{MockNavigator, TracingNavigator};
