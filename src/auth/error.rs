//! Error types for the auth stub.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    /// Unknown username or wrong password. The two cases are not distinguished.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// A bearer token was presented but is not the accepted one.
    #[error("Invalid token")]
    InvalidToken,

    /// No usable `Authorization: Bearer` header.
    #[error("Not authenticated")]
    MissingToken,
}
