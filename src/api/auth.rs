//! Bearer-token extractor for routes that require a caller.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::debug;

use super::{error::ApiError, state::AppState};
use crate::{auth::AuthError, model::Identity};

/// The identity behind a verified `Authorization: Bearer <token>` header.
///
/// Adding this as a handler argument makes the route authenticated: a missing,
/// malformed, or wrong token is answered with 401 before the handler runs.
#[derive(Debug, Clone)]
pub struct Authenticated(pub Identity);

impl FromRequestParts<AppState> for Authenticated {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or(AuthError::MissingToken)?;
        let identity = state.auth.verify_token(token).map_err(|e| {
            debug!(error = %e, "Bearer token rejected");
            e
        })?;
        Ok(Authenticated(identity))
    }
}

/// The credentials of a `Bearer` authorization header; the scheme is matched
/// case-insensitively.
fn bearer_token(parts: &Parts) -> Option<&str> {
    let value = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, credentials) = value.split_once(' ')?;
    let credentials = credentials.trim();
    if !scheme.eq_ignore_ascii_case("bearer") || credentials.is_empty() {
        return None;
    }
    Some(credentials)
}
