use axum::extract::State;
use axum::Json;
use serde_json::Value;

use super::{deleted, not_found};
use crate::auth::extractor::CurrentUser;
use crate::db;
use crate::error::AppError;
use crate::extract::{Pagination, ValidJson, ValidPath, ValidQuery};
use crate::middleware::audit;
use crate::models::{NewProject, ProjectDetail, ProjectUpdate};
use crate::state::SharedState;

pub async fn list(
    _user: CurrentUser,
    State(state): State<SharedState>,
    ValidQuery(page): ValidQuery<Pagination>,
) -> Result<Json<Vec<ProjectDetail>>, AppError> {
    let (offset, limit) = page.bounds(state.config.max_page_size);
    let projects = db::projects::list(&state.pool, offset, limit).await?;
    Ok(Json(projects))
}

pub async fn create(
    CurrentUser(user): CurrentUser,
    State(state): State<SharedState>,
    ValidJson(req): ValidJson<NewProject>,
) -> Result<Json<ProjectDetail>, AppError> {
    req.validate().map_err(AppError::Validation)?;

    let project = db::projects::create(&state.pool, &req)
        .await
        .map_err(|e| AppError::from_write(e, "Project"))?;

    audit::log_event(&user, "created", "projects", project.project.id);
    Ok(Json(project))
}

pub async fn get(
    _user: CurrentUser,
    State(state): State<SharedState>,
    ValidPath(id): ValidPath<i64>,
) -> Result<Json<ProjectDetail>, AppError> {
    let project = db::projects::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Project"))?;
    Ok(Json(project))
}

pub async fn update(
    CurrentUser(user): CurrentUser,
    State(state): State<SharedState>,
    ValidPath(id): ValidPath<i64>,
    ValidJson(req): ValidJson<ProjectUpdate>,
) -> Result<Json<ProjectDetail>, AppError> {
    req.validate().map_err(AppError::Validation)?;

    let project = db::projects::update(&state.pool, id, req)
        .await?
        .ok_or_else(|| not_found("Project"))?;

    audit::log_event(&user, "updated", "projects", id);
    Ok(Json(project))
}

pub async fn delete(
    CurrentUser(user): CurrentUser,
    State(state): State<SharedState>,
    ValidPath(id): ValidPath<i64>,
) -> Result<Json<Value>, AppError> {
    if !db::projects::delete(&state.pool, id).await? {
        return Err(not_found("Project"));
    }

    audit::log_event(&user, "deleted", "projects", id);
    Ok(deleted("Project"))
}
