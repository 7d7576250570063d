//! Handlers shared by `/owners`, `/cooperators` and `/benefits`.

use axum::extract::State;
use axum::Json;
use serde_json::Value;

use super::{deleted, not_found};
use crate::auth::extractor::CurrentUser;
use crate::db;
use crate::db::named::NamedKind;
use crate::error::AppError;
use crate::extract::{Pagination, ValidJson, ValidPath, ValidQuery};
use crate::middleware::audit;
use crate::models::{NamedEntity, NamedEntityUpdate, NewNamedEntity};
use crate::state::SharedState;

pub async fn list<K: NamedKind>(
    _user: CurrentUser,
    State(state): State<SharedState>,
    ValidQuery(page): ValidQuery<Pagination>,
) -> Result<Json<Vec<NamedEntity>>, AppError> {
    let (offset, limit) = page.bounds(state.config.max_page_size);
    let rows = db::named::list::<K>(&state.pool, offset, limit).await?;
    Ok(Json(rows))
}

pub async fn create<K: NamedKind>(
    CurrentUser(user): CurrentUser,
    State(state): State<SharedState>,
    ValidJson(req): ValidJson<NewNamedEntity>,
) -> Result<Json<NamedEntity>, AppError> {
    req.validate().map_err(AppError::Validation)?;

    let entity = db::named::create::<K>(&state.pool, &req)
        .await
        .map_err(|e| AppError::from_write(e, K::LABEL))?;

    audit::log_event(&user, "created", K::TABLE, entity.id);
    Ok(Json(entity))
}

pub async fn get<K: NamedKind>(
    _user: CurrentUser,
    State(state): State<SharedState>,
    ValidPath(id): ValidPath<i64>,
) -> Result<Json<NamedEntity>, AppError> {
    let entity = db::named::find_by_id::<K>(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(K::LABEL))?;
    Ok(Json(entity))
}

pub async fn update<K: NamedKind>(
    CurrentUser(user): CurrentUser,
    State(state): State<SharedState>,
    ValidPath(id): ValidPath<i64>,
    ValidJson(req): ValidJson<NamedEntityUpdate>,
) -> Result<Json<NamedEntity>, AppError> {
    req.validate().map_err(AppError::Validation)?;

    let entity = db::named::update::<K>(&state.pool, id, req)
        .await
        .map_err(|e| AppError::from_write(e, K::LABEL))?
        .ok_or_else(|| not_found(K::LABEL))?;

    audit::log_event(&user, "updated", K::TABLE, entity.id);
    Ok(Json(entity))
}

pub async fn delete<K: NamedKind>(
    CurrentUser(user): CurrentUser,
    State(state): State<SharedState>,
    ValidPath(id): ValidPath<i64>,
) -> Result<Json<Value>, AppError> {
    let removed = db::named::delete::<K>(&state.pool, id)
        .await
        .map_err(|e| AppError::from_delete(e, K::LABEL))?;
    if !removed {
        return Err(not_found(K::LABEL));
    }

    audit::log_event(&user, "deleted", K::TABLE, id);
    Ok(deleted(K::LABEL))
}
