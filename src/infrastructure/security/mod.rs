//! Credential primitives: password hashing and access tokens.

pub mod password;
pub mod token;

pub use password::{PasswordError, PasswordHasher};
pub use token::{Claims, IssuedToken, TokenError, TokenService};
