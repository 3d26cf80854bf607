//! Bearer token authentication

pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, capability_names, generate_token, validate_token};
pub use middleware::{AuthState, identity_middleware};
