pub mod addresses;
pub mod auth;
pub mod contacts;
pub mod locations;
pub mod named;
pub mod projects;
pub mod users;

use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::db::named::{Benefits, Cooperators, NamedKind, Owners};
use crate::error::AppError;
use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(root))
        // Auth
        .route("/token", post(auth::login))
        // Users
        .route("/users", get(users::list).post(users::create))
        .route("/users/me", get(users::me))
        // Projects
        .route("/projects", get(projects::list).post(projects::create))
        .route(
            "/projects/{id}",
            get(projects::get)
                .put(projects::update)
                .delete(projects::delete),
        )
        // Owners, cooperators, benefits
        .merge(named_routes::<Owners>())
        .merge(named_routes::<Cooperators>())
        .merge(named_routes::<Benefits>())
        // Contacts
        .route("/contacts", get(contacts::list).post(contacts::create))
        .route(
            "/contacts/{id}",
            get(contacts::get)
                .put(contacts::update)
                .delete(contacts::delete),
        )
        // Addresses
        .route("/addresses", get(addresses::list).post(addresses::create))
        .route(
            "/addresses/{id}",
            get(addresses::get)
                .put(addresses::update)
                .delete(addresses::delete),
        )
        // Locations
        .route("/locations", get(locations::list).post(locations::create))
        .route(
            "/locations/{id}",
            get(locations::get)
                .put(locations::update)
                .delete(locations::delete),
        )
}

/// `/{table}` and `/{table}/{id}` for one of the name/description tables.
fn named_routes<K: NamedKind>() -> Router<SharedState> {
    Router::new()
        .route(
            &format!("/{}", K::TABLE),
            get(named::list::<K>).post(named::create::<K>),
        )
        .route(
            &format!("/{}/{{id}}", K::TABLE),
            get(named::get::<K>)
                .put(named::update::<K>)
                .delete(named::delete::<K>),
        )
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Welcome to KART Database API" }))
}

pub(crate) fn not_found(label: &str) -> AppError {
    AppError::NotFound(format!("{label} not found"))
}

pub(crate) fn deleted(label: &str) -> Json<Value> {
    Json(json!({ "message": format!("{label} deleted successfully") }))
}
