//! Authorization guard and extractors.
//!
//! Admin access is decided once, at this boundary, by [`authorize_admin`];
//! handlers never test roles inline. Admin routes take the [`RequireAdmin`]
//! extractor and are unreachable without a granted decision.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use tower_sessions::Session;

use crate::models::{CurrentUser, Role, session_keys};

/// Outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    Denied,
}

/// Decide whether `user` may use the admin panel.
#[must_use]
pub fn authorize_admin(user: Option<&CurrentUser>) -> AccessDecision {
    match user {
        Some(user) if user.role == Role::Admin => AccessDecision::Granted,
        _ => AccessDecision::Denied,
    }
}

/// Extractor that requires an admin session.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAdmin(user): RequireAdmin,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", user.name)
/// }
/// ```
pub struct RequireAdmin(pub CurrentUser);

/// Rejection for [`RequireAdmin`].
pub enum AuthRejection {
    /// No session user at all.
    Unauthenticated,
    /// Logged in, but not an admin.
    Forbidden,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED.into_response(),
            Self::Forbidden => StatusCode::FORBIDDEN.into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(AuthRejection::Unauthenticated)?;

        let user: CurrentUser = session
            .get(session_keys::CURRENT_USER)
            .await
            .ok()
            .flatten()
            .ok_or(AuthRejection::Unauthenticated)?;

        match authorize_admin(Some(&user)) {
            AccessDecision::Granted => Ok(Self(user)),
            AccessDecision::Denied => Err(AuthRejection::Forbidden),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> CurrentUser {
        CurrentUser {
            email: "someone@example.com".to_string(),
            name: "Someone".to_string(),
            role,
        }
    }

    #[test]
    fn test_admin_is_granted() {
        assert_eq!(
            authorize_admin(Some(&user(Role::Admin))),
            AccessDecision::Granted
        );
    }

    #[test]
    fn test_regular_user_is_denied() {
        assert_eq!(
            authorize_admin(Some(&user(Role::User))),
            AccessDecision::Denied
        );
    }

    #[test]
    fn test_anonymous_is_denied() {
        assert_eq!(authorize_admin(None), AccessDecision::Denied);
    }
}
