//! Authentication route handlers.
//!
//! Handles registration, login, and logout. Form field names follow the
//! original HTML forms (`nombre`, `edad`, `email`, `password`).

use axum::{
    Form,
    extract::State,
    response::Redirect,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::{AppError, Result};
use crate::middleware::{clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "edad")]
    pub age: i64,
    pub email: String,
    pub password: String,
}

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Handle registration form submission.
///
/// Creates the account and redirects to the login page.
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Redirect> {
    let auth = AuthService::new(state.pool());
    let user = auth
        .register(&form.name, form.age, &form.email, &form.password)
        .await?;

    tracing::info!(user_id = %user.id, "user registered");
    Ok(Redirect::to("/login"))
}

/// Handle login form submission.
///
/// On success the user identity is stored in the session and the client
/// is redirected to the dashboard.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Redirect> {
    let auth = AuthService::new(state.pool());
    let user = auth.authenticate(&form.email, &form.password).await?;

    let current_user = CurrentUser {
        id: user.id,
        name: user.name,
        email: user.email,
    };
    set_current_user(&session, &current_user)
        .await
        .map_err(|e| AppError::Internal(format!("failed to set session: {e}")))?;

    tracing::info!(user_id = %current_user.id, "user logged in");
    Ok(Redirect::to("/dashboard"))
}

/// Handle logout.
pub async fn logout(session: Session) -> Result<Redirect> {
    clear_current_user(&session)
        .await
        .map_err(|e| AppError::Internal(format!("failed to clear session: {e}")))?;

    Ok(Redirect::to("/"))
}
