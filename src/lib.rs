//! # Edugate - Institutional Login Gate
//!
//! This is a facade crate that re-exports all public APIs from the login gate components.
//! Use this crate to get access to the whole gate in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! edugate = { path = "../edugate" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `Credential`, `Decision`, etc.
//! - **Port traits**: `IdentityProvider`, `Navigator`
//! - **Use cases**: `LoginUseCase`, `ResendVerificationUseCase`
//! - **Adapters**: `InMemoryIdentityProvider`, `RestIdentityProvider`, navigators
//! - **Controller**: `SessionController` - the entry point the presentation layer calls

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use edugate_core::*;
}

// Re-export most commonly used core types at the root level
pub use edugate_core::{
    AuthenticatedUser, Credential, CredentialError, Decision, Email, EmailError, Password,
    PasswordError, ResendChoice, ResendOutcome, Route,
};

// ============================================================================
// Port Traits
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use edugate_core::{IdentityProvider, IdentityProviderError, Navigator};
}

// Re-export port traits at root level
pub use edugate_core::{IdentityProvider, IdentityProviderError, Navigator};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use edugate_application::*;
}

// Re-export use cases at root level
pub use edugate_application::{LoginUseCase, ResendVerificationUseCase};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Identity provider implementations
    pub mod identity {
        pub use edugate_adapters::identity::*;
    }

    /// Navigator implementations
    pub mod navigation {
        pub use edugate_adapters::navigation::*;
    }

    /// Configuration
    pub mod config {
        pub use edugate_adapters::config::*;
    }

    /// Telemetry
    pub mod telemetry {
        pub use edugate_adapters::telemetry::*;
    }
}

// Re-export commonly used adapters at root level
pub use edugate_adapters::{
    InMemoryIdentityProvider, MockNavigator, RestIdentityProvider, TracingNavigator,
};

// ============================================================================
// Session Controller (Main Entry Point)
// ============================================================================

/// Main session controller
pub use edugate_application::SessionController;

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
