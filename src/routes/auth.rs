use axum::extract::State;
use axum::Json;
use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::auth::{jwt, password};
use crate::db;
use crate::error::AppError;
use crate::extract::ValidForm;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

fn incorrect_login() -> AppError {
    AppError::Unauthorized("Incorrect username or password".to_string())
}

/// `POST /token` with a form-encoded username and password.
pub async fn login(
    State(state): State<SharedState>,
    ValidForm(form): ValidForm<LoginForm>,
) -> Result<Json<TokenResponse>, AppError> {
    let Some(user) = db::users::find_by_username(&state.pool, &form.username).await? else {
        password::verify_dummy(&form.password);
        tracing::debug!(username = %form.username, "Login failed: unknown user");
        return Err(incorrect_login());
    };

    let valid = password::verify(&form.password, &user.password_hash).map_err(AppError::Internal)?;
    if !valid || !user.is_active {
        tracing::debug!(username = %user.username, "Login failed");
        return Err(incorrect_login());
    }

    let ttl = Duration::minutes(state.config.token_ttl_minutes);
    let access_token =
        jwt::issue_token(&user.username, ttl, &state.config.jwt_secret).map_err(AppError::Internal)?;

    tracing::info!(username = %user.username, "User logged in");
    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
    }))
}
