use axum::extract::State;
use axum::Json;
use serde_json::Value;

use super::{deleted, not_found};
use crate::auth::extractor::CurrentUser;
use crate::db;
use crate::error::AppError;
use crate::extract::{Pagination, ValidJson, ValidPath, ValidQuery};
use crate::middleware::audit;
use crate::models::{Contact, ContactUpdate, NewContact};
use crate::state::SharedState;

pub async fn list(
    _user: CurrentUser,
    State(state): State<SharedState>,
    ValidQuery(page): ValidQuery<Pagination>,
) -> Result<Json<Vec<Contact>>, AppError> {
    let (offset, limit) = page.bounds(state.config.max_page_size);
    let rows = db::contacts::list(&state.pool, offset, limit).await?;
    Ok(Json(rows))
}

pub async fn create(
    CurrentUser(user): CurrentUser,
    State(state): State<SharedState>,
    ValidJson(req): ValidJson<NewContact>,
) -> Result<Json<Contact>, AppError> {
    req.validate().map_err(AppError::Validation)?;

    let record = db::contacts::create(&state.pool, &req)
        .await
        .map_err(|e| AppError::from_write(e, "Contact"))?;

    audit::log_event(&user, "created", "contacts", record.id);
    Ok(Json(record))
}

pub async fn get(
    _user: CurrentUser,
    State(state): State<SharedState>,
    ValidPath(id): ValidPath<i64>,
) -> Result<Json<Contact>, AppError> {
    let record = db::contacts::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Contact"))?;
    Ok(Json(record))
}

pub async fn update(
    CurrentUser(user): CurrentUser,
    State(state): State<SharedState>,
    ValidPath(id): ValidPath<i64>,
    ValidJson(req): ValidJson<ContactUpdate>,
) -> Result<Json<Contact>, AppError> {
    req.validate().map_err(AppError::Validation)?;

    let record = db::contacts::update(&state.pool, id, req)
        .await
        .map_err(|e| AppError::from_write(e, "Contact"))?
        .ok_or_else(|| not_found("Contact"))?;

    audit::log_event(&user, "updated", "contacts", record.id);
    Ok(Json(record))
}

pub async fn delete(
    CurrentUser(user): CurrentUser,
    State(state): State<SharedState>,
    ValidPath(id): ValidPath<i64>,
) -> Result<Json<Value>, AppError> {
    let removed = db::contacts::delete(&state.pool, id)
        .await
        .map_err(|e| AppError::from_delete(e, "Contact"))?;
    if !removed {
        return Err(not_found("Contact"));
    }

    audit::log_event(&user, "deleted", "contacts", id);
    Ok(deleted("Contact"))
}
