pub mod mock_navigator;
pub mod tracing_navigator;

pub use mock_navigator::MockNavigator;
pub use tracing_navigator::TracingNavigator;
