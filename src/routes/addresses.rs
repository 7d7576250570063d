use axum::extract::State;
use axum::Json;
use serde_json::Value;

use super::{deleted, not_found};
use crate::auth::extractor::CurrentUser;
use crate::db;
use crate::error::AppError;
use crate::extract::{Pagination, ValidJson, ValidPath, ValidQuery};
use crate::middleware::audit;
use crate::models::{Address, AddressUpdate, NewAddress};
use crate::state::SharedState;

pub async fn list(
    _user: CurrentUser,
    State(state): State<SharedState>,
    ValidQuery(page): ValidQuery<Pagination>,
) -> Result<Json<Vec<Address>>, AppError> {
    let (offset, limit) = page.bounds(state.config.max_page_size);
    let rows = db::addresses::list(&state.pool, offset, limit).await?;
    Ok(Json(rows))
}

pub async fn create(
    CurrentUser(user): CurrentUser,
    State(state): State<SharedState>,
    ValidJson(req): ValidJson<NewAddress>,
) -> Result<Json<Address>, AppError> {
    req.validate().map_err(AppError::Validation)?;

    let record = db::addresses::create(&state.pool, &req)
        .await
        .map_err(|e| AppError::from_write(e, "Address"))?;

    audit::log_event(&user, "created", "addresses", record.id);
    Ok(Json(record))
}

pub async fn get(
    _user: CurrentUser,
    State(state): State<SharedState>,
    ValidPath(id): ValidPath<i64>,
) -> Result<Json<Address>, AppError> {
    let record = db::addresses::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Address"))?;
    Ok(Json(record))
}

pub async fn update(
    CurrentUser(user): CurrentUser,
    State(state): State<SharedState>,
    ValidPath(id): ValidPath<i64>,
    ValidJson(req): ValidJson<AddressUpdate>,
) -> Result<Json<Address>, AppError> {
    req.validate().map_err(AppError::Validation)?;

    let record = db::addresses::update(&state.pool, id, req)
        .await
        .map_err(|e| AppError::from_write(e, "Address"))?
        .ok_or_else(|| not_found("Address"))?;

    audit::log_event(&user, "updated", "addresses", record.id);
    Ok(Json(record))
}

pub async fn delete(
    CurrentUser(user): CurrentUser,
    State(state): State<SharedState>,
    ValidPath(id): ValidPath<i64>,
) -> Result<Json<Value>, AppError> {
    let removed = db::addresses::delete(&state.pool, id)
        .await
        .map_err(|e| AppError::from_delete(e, "Address"))?;
    if !removed {
        return Err(not_found("Address"));
    }

    audit::log_event(&user, "deleted", "addresses", id);
    Ok(deleted("Address"))
}
