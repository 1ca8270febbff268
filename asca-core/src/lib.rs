//! ASCA Onboarding Core
//!
//! Platform-agnostic state logic for the ASCA protocol onboarding page.
//! This crate owns the wallet-session state machine, the login/signup form
//! controller, the dashboard navigation guard and the network selection,
//! without any UI or browser-specific dependencies.

pub mod auth;
pub mod guard;
pub mod network;
pub mod wallet;

// Re-export commonly used types
pub use auth::{
    AuthForm, AuthMode, FormError, LoginField, LoginFields, LoginRequest, SignupField,
    SignupFields, SignupRequest, Submission,
};
pub use guard::{GuardState, NavigationGuard};
pub use network::{Network, NetworkSelection, UnknownNetwork};
pub use wallet::{ConnectionState, WalletSession};
