//! Login and logout.
//!
//! "Authentication" here is the original's credential string comparison:
//! the admin pair comes from configuration, and any non-empty email and
//! password make a regular shopper session. There is no account store.

use axum::{Json, extract::State, http::StatusCode};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::{AppError, Result};
use crate::models::{CurrentUser, Role, session_keys};
use crate::state::AppState;

/// Login payload.
#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
    /// Whether the admin login form was used.
    #[serde(default)]
    pub admin: bool,
}

/// Login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: CurrentUser,
}

/// Log in via credential comparison.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<LoginResponse>> {
    let config = state.config();

    let user = if payload.admin {
        let matches = payload.email == config.admin_email
            && payload.password == *config.admin_password.expose_secret();
        if !matches {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }
        CurrentUser {
            email: payload.email,
            name: "Administrador".to_string(),
            role: Role::Admin,
        }
    } else {
        if payload.email.trim().is_empty() || payload.password.is_empty() {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }
        let name = payload
            .email
            .split('@')
            .next()
            .unwrap_or_default()
            .to_string();
        CurrentUser {
            email: payload.email,
            name,
            role: Role::User,
        }
    };

    session.insert(session_keys::CURRENT_USER, &user).await?;
    tracing::info!(email = %user.email, role = ?user.role, "User logged in");

    Ok(Json(LoginResponse { user }))
}

/// Log out, dropping the session user.
pub async fn logout(session: Session) -> Result<StatusCode> {
    session.remove::<CurrentUser>(session_keys::CURRENT_USER).await?;
    Ok(StatusCode::NO_CONTENT)
}
