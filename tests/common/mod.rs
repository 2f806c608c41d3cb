#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{Json, Router, extract::Query, routing::get};
use reelrank::{
    AppState,
    catalogue::Catalogue,
    db,
    error::LookupError,
    models::MovieMetadata,
    omdb::{MetadataProvider, OmdbClient},
};
use serde_json::{Value, json};
use tempfile::TempDir;

/// A catalogue backed by a fresh SQLite file. Keep the `TempDir` alive for
/// the duration of the test.
pub async fn test_catalogue() -> (TempDir, Catalogue) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("movies.db").display());
    let db = db::connect_and_migrate(&url).await.unwrap();
    (dir, Catalogue::new(db))
}

pub fn phone_booth() -> MovieMetadata {
    MovieMetadata {
        title: "Phone Booth".to_string(),
        year: 2002,
        plot: "Publicist Stuart Shepard finds himself trapped in a phone booth.".to_string(),
        poster_url: "http://img.omdbapi.com/phone-booth.jpg".to_string(),
    }
}

/// Answers every lookup with the same canned result.
pub struct StubProvider {
    answer: Result<MovieMetadata, String>,
}

impl StubProvider {
    pub fn found(meta: MovieMetadata) -> Self {
        Self { answer: Ok(meta) }
    }

    pub fn not_found(message: &str) -> Self {
        Self { answer: Err(message.to_string()) }
    }
}

impl MetadataProvider for StubProvider {
    async fn lookup(&self, _title: &str) -> Result<MovieMetadata, LookupError> {
        self.answer.clone().map_err(LookupError::NoMatch)
    }
}

/// Serves a minimal OMDb lookalike on an ephemeral port and returns its base URL.
pub async fn spawn_omdb_stub() -> String {
    let app = Router::new().route("/", get(omdb_lookup));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn omdb_lookup(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    if params.get("apikey").map(String::as_str) != Some("test-key") {
        return Json(json!({ "Response": "False", "Error": "Invalid API key!" }));
    }

    match params.get("t").map(String::as_str) {
        Some("Phone Booth") => Json(json!({
            "Title": "Phone Booth",
            "Year": "2002",
            "Rated": "R",
            "Plot": "Publicist Stuart Shepard finds himself trapped in a phone booth.",
            "Poster": "http://img.omdbapi.com/phone-booth.jpg",
            "Response": "True",
        })),
        Some("Undated") => Json(json!({
            "Title": "Undated",
            "Year": "N/A",
            "Plot": "N/A",
            "Poster": "N/A",
            "Response": "True",
        })),
        _ => Json(json!({ "Response": "False", "Error": "Movie not found!" })),
    }
}

/// The full router wired to a temporary database and the OMDb stub.
pub async fn test_app() -> (TempDir, Catalogue, Router) {
    test_app_with_omdb(&spawn_omdb_stub().await).await
}

/// The full router wired to a temporary database and an OMDb client that
/// talks to `omdb_base_url`.
pub async fn test_app_with_omdb(omdb_base_url: &str) -> (TempDir, Catalogue, Router) {
    let (dir, catalogue) = test_catalogue().await;

    let http = reqwest::Client::builder().timeout(Duration::from_secs(5)).build().unwrap();
    let omdb = OmdbClient::new(http, "test-key".to_string(), omdb_base_url.to_string(), 50);

    let state = Arc::new(AppState { catalogue: catalogue.clone(), omdb: Arc::new(omdb) });

    (dir, catalogue, reelrank::router(state))
}
