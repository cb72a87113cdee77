use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::auth::jwt::verify_token;

/// Authenticated and authorized caller for protected routes
///
/// Verifies the bearer token with the configured secret, then checks the
/// token's role claims against `AuthConfig::allowed_roles`. An empty allow
/// list admits any caller holding a valid token.
///
/// Usage:
/// ```rust,ignore
/// async fn protected_handler(caller: AuthenticatedUser) -> Result<String, ApiError> {
///     Ok(format!("Hello {}", caller.subject))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub subject: String,
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    /// True when the caller holds any of `allowed`, or `allowed` is empty
    pub fn has_any_role(&self, allowed: &[String]) -> bool {
        allowed.is_empty() || self.roles.iter().any(|role| allowed.contains(role))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("Missing authorization header"))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            ApiError::unauthorized("Invalid authorization format. Use: Bearer <token>")
        })?;

        let claims = verify_token(token, &state.auth.jwt_secret)
            .map_err(|e| ApiError::unauthorized(format!("Invalid token: {}", e)))?;

        let caller = AuthenticatedUser {
            subject: claims.sub,
            roles: claims.roles,
        };

        if !caller.has_any_role(&state.auth.allowed_roles) {
            tracing::warn!(subject = %caller.subject, "Caller lacks a required role");
            return Err(ApiError::forbidden("Permisos insuficientes"));
        }

        Ok(caller)
    }
}
