use axum::extract::State;
use axum::Json;

use crate::auth::extractor::{AdminUser, CurrentUser};
use crate::auth::password;
use crate::db;
use crate::error::AppError;
use crate::extract::{Pagination, ValidJson, ValidQuery};
use crate::middleware::audit;
use crate::models::{NewUser, User};
use crate::state::SharedState;

pub async fn me(CurrentUser(user): CurrentUser) -> Json<User> {
    Json(user)
}

pub async fn list(
    _admin: AdminUser,
    State(state): State<SharedState>,
    ValidQuery(page): ValidQuery<Pagination>,
) -> Result<Json<Vec<User>>, AppError> {
    let (offset, limit) = page.bounds(state.config.max_page_size);
    let users = db::users::list(&state.pool, offset, limit).await?;
    Ok(Json(users))
}

pub async fn create(
    AdminUser(admin): AdminUser,
    State(state): State<SharedState>,
    ValidJson(req): ValidJson<NewUser>,
) -> Result<Json<User>, AppError> {
    req.validate().map_err(AppError::Validation)?;

    let pw_hash = password::hash(&req.password).map_err(AppError::Internal)?;

    let user = db::users::create(&state.pool, &req.username, &req.email, &pw_hash, req.role)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("Username or email already registered".to_string())
            }
            _ => AppError::Database(e),
        })?;

    audit::log_event(&admin, "created", "users", user.id);
    Ok(Json(user))
}
