//! Stub authentication: a fixed account table and a single accepted bearer token.
//!
//! Nothing here is real security. `login` checks plain-text passwords and always hands
//! out the same token; `verify_token` accepts only that token and always answers with
//! the same demo identity, whoever logged in.

pub mod error;

pub use error::*;

use crate::model::{Identity, LoginRequest, LoginResponse, User};
use tracing::{debug, warn};

/// The only bearer token accepted by authenticated routes.
pub const VALID_TOKEN: &str = "valid_token";

/// The `token_type` reported by [`AuthStub::login`].
pub const TOKEN_TYPE: &str = "bearer";

const DEMO_USER_ID: i64 = 1;
const DEMO_USERNAME: &str = "demo_user";

static USERS: [User; 3] = [
    User { username: "admin", password: "admin123", user_id: 1 },
    User { username: "customer", password: "customer123", user_id: 2 },
    User { username: "staff", password: "staff123", user_id: 3 },
];

#[derive(Debug, Clone, Copy)]
pub struct AuthStub {
    users: &'static [User],
}

impl AuthStub {
    pub fn new() -> Self {
        Self { users: &USERS }
    }

    pub fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AuthError> {
        let user = self
            .users
            .iter()
            .find(|user| user.username == request.username)
            .filter(|user| user.password == request.password)
            .ok_or_else(|| {
                warn!(username = %request.username, "Login rejected");
                AuthError::InvalidCredentials
            })?;

        debug!(username = user.username, user_id = user.user_id, "Login accepted");
        Ok(LoginResponse {
            access_token: VALID_TOKEN.to_string(),
            token_type: TOKEN_TYPE.to_string(),
            user_id: user.user_id,
            username: user.username.to_string(),
        })
    }

    /// Checks a bearer token. The returned identity is fixed and carries no
    /// information about who logged in.
    pub fn verify_token(&self, token: &str) -> Result<Identity, AuthError> {
        if token != VALID_TOKEN {
            return Err(AuthError::InvalidToken);
        }
        Ok(Identity {
            user_id: DEMO_USER_ID,
            username: DEMO_USERNAME.to_string(),
        })
    }
}

impl Default for AuthStub {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.into(),
            password: password.into(),
        }
    }

    #[test]
    fn test_login_accepts_known_accounts() {
        let auth = AuthStub::new();

        let admin = auth.login(&credentials("admin", "admin123")).unwrap();
        assert_eq!(admin.user_id, 1);
        assert_eq!(admin.access_token, VALID_TOKEN);
        assert_eq!(admin.token_type, "bearer");

        let staff = auth.login(&credentials("staff", "staff123")).unwrap();
        assert_eq!((staff.user_id, staff.username.as_str()), (3, "staff"));
    }

    #[test]
    fn test_login_rejects_bad_credentials() {
        let auth = AuthStub::new();
        assert_eq!(
            auth.login(&credentials("admin", "wrong")),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            auth.login(&credentials("nobody", "admin123")),
            Err(AuthError::InvalidCredentials)
        );
        // Another account's password does not work.
        assert_eq!(
            auth.login(&credentials("admin", "staff123")),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_verify_token_returns_fixed_identity() {
        let auth = AuthStub::new();
        let identity = auth.verify_token("valid_token").unwrap();
        assert_eq!(identity.user_id, 1);
        assert_eq!(identity.username, "demo_user");

        assert_eq!(auth.verify_token("anything_else"), Err(AuthError::InvalidToken));
        assert_eq!(auth.verify_token(""), Err(AuthError::InvalidToken));
    }
}
