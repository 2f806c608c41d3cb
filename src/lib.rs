pub mod catalogue;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod omdb;
pub mod routes;
pub mod templates;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{catalogue::Catalogue, omdb::OmdbClient};

#[derive(Clone)]
pub struct AppState {
    pub catalogue: Catalogue,
    pub omdb: Arc<OmdbClient>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/add", get(routes::add_form).post(routes::add))
        .route("/edit", get(routes::edit_form).post(routes::edit))
        .route("/delete", post(routes::delete))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
