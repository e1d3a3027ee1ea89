//! Account and credential shapes used by the auth stub.
use serde::{Deserialize, Serialize};

/// A stub account. Passwords are compared in plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: &'static str,
    pub password: &'static str,
    pub user_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub user_id: i64,
    pub username: String,
}

/// The caller identity attached to an authenticated request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub user_id: i64,
    pub username: String,
}
