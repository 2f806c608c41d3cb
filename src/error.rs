use std::fmt;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::templates;

/// How a missing movie was addressed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MovieRef {
    Id(i32),
    Title(String),
}

impl fmt::Display for MovieRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovieRef::Id(id) => write!(f, "with id {id}"),
            MovieRef::Title(title) => write!(f, "titled \"{title}\""),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The provider answered but had no match; carries its message verbatim.
    #[error("{0}")]
    NoMatch(String),

    #[error("movie database unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected movie database response: {0}")]
    Malformed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    #[error("{0}")]
    ConstraintViolation(String),

    #[error("no movie {0}")]
    NotFound(MovieRef),

    #[error(transparent)]
    ExternalLookupFailed(#[from] LookupError),

    #[error("catalogue inconsistent: {0}")]
    Inconsistency(String),

    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

pub type CatalogueResult<T> = Result<T, CatalogueError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Catalogue(CatalogueError::NotFound(movie)) => {
                (StatusCode::NOT_FOUND, templates::not_found_page(&movie.to_string()))
            },
            AppError::Catalogue(CatalogueError::ExternalLookupFailed(LookupError::NoMatch(
                message,
            ))) => (StatusCode::NOT_FOUND, templates::error_page(message)),
            AppError::Catalogue(CatalogueError::ExternalLookupFailed(err)) => {
                tracing::warn!(error = %err, "movie lookup failed");
                (StatusCode::BAD_GATEWAY, templates::error_page(&err.to_string()))
            },
            AppError::Catalogue(CatalogueError::ConstraintViolation(message)) => {
                (StatusCode::CONFLICT, templates::error_page(message))
            },
            AppError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, templates::error_page(message))
            },
            other => {
                tracing::error!(error = %other, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    templates::error_page("Something went wrong. Please try again."),
                )
            },
        };

        (status, Html(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
