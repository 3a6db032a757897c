pub mod in_memory_identity_provider;
pub mod rest_identity_provider;

pub use in_memory_identity_provider::InMemoryIdentityProvider;
pub use rest_identity_provider::RestIdentityProvider;
