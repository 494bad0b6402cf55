// Service exports
pub mod credentials;
pub mod identity;
pub mod messages;
pub mod swipes;
pub mod token;

pub use credentials::{Argon2Verifier, CredentialError, CredentialVerifier};
pub use identity::IdentityStore;
pub use messages::MessageRelay;
pub use swipes::SwipeEngine;
pub use token::{Claims, TokenError, TokenService};
