use axum::extract::State;
use axum::Json;
use serde_json::Value;

use super::{deleted, not_found};
use crate::auth::extractor::CurrentUser;
use crate::db;
use crate::error::AppError;
use crate::extract::{Pagination, ValidJson, ValidPath, ValidQuery};
use crate::middleware::audit;
use crate::models::{Location, LocationUpdate, NewLocation};
use crate::state::SharedState;

pub async fn list(
    _user: CurrentUser,
    State(state): State<SharedState>,
    ValidQuery(page): ValidQuery<Pagination>,
) -> Result<Json<Vec<Location>>, AppError> {
    let (offset, limit) = page.bounds(state.config.max_page_size);
    let rows = db::locations::list(&state.pool, offset, limit).await?;
    Ok(Json(rows))
}

pub async fn create(
    CurrentUser(user): CurrentUser,
    State(state): State<SharedState>,
    ValidJson(req): ValidJson<NewLocation>,
) -> Result<Json<Location>, AppError> {
    req.validate().map_err(AppError::Validation)?;

    let record = db::locations::create(&state.pool, &req)
        .await
        .map_err(|e| AppError::from_write(e, "Location"))?;

    audit::log_event(&user, "created", "locations", record.id);
    Ok(Json(record))
}

pub async fn get(
    _user: CurrentUser,
    State(state): State<SharedState>,
    ValidPath(id): ValidPath<i64>,
) -> Result<Json<Location>, AppError> {
    let record = db::locations::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Location"))?;
    Ok(Json(record))
}

pub async fn update(
    CurrentUser(user): CurrentUser,
    State(state): State<SharedState>,
    ValidPath(id): ValidPath<i64>,
    ValidJson(req): ValidJson<LocationUpdate>,
) -> Result<Json<Location>, AppError> {
    req.validate().map_err(AppError::Validation)?;

    let record = db::locations::update(&state.pool, id, req)
        .await
        .map_err(|e| AppError::from_write(e, "Location"))?
        .ok_or_else(|| not_found("Location"))?;

    audit::log_event(&user, "updated", "locations", record.id);
    Ok(Json(record))
}

pub async fn delete(
    CurrentUser(user): CurrentUser,
    State(state): State<SharedState>,
    ValidPath(id): ValidPath<i64>,
) -> Result<Json<Value>, AppError> {
    let removed = db::locations::delete(&state.pool, id)
        .await
        .map_err(|e| AppError::from_delete(e, "Location"))?;
    if !removed {
        return Err(not_found("Location"));
    }

    audit::log_event(&user, "deleted", "locations", id);
    Ok(deleted("Location"))
}
