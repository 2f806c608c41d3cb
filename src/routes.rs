use std::sync::Arc;

use axum::{
    extract::{Form, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{AddMovieRequest, DeleteMovieRequest, RateMovieRequest},
    templates,
};

#[derive(Debug, Deserialize)]
pub struct EditQuery {
    id: i32,
}

pub async fn index(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let movies = state.catalogue.list().await?;
    Ok(Html(templates::index_page(&movies)))
}

pub async fn add_form() -> Html<String> {
    Html(templates::add_page("", None))
}

pub async fn add(
    State(state): State<Arc<AppState>>,
    Form(req): Form<AddMovieRequest>,
) -> AppResult<Response> {
    let title = req.title.trim();
    if title.is_empty() {
        let body = templates::add_page("", Some("Movie title is required"));
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(body)).into_response());
    }

    let id = state.catalogue.resolve_external(&*state.omdb, title).await?;
    Ok(Redirect::to(&format!("/edit?id={id}")).into_response())
}

pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    query: Result<Query<EditQuery>, QueryRejection>,
) -> AppResult<Html<String>> {
    let movie = state.catalogue.get(edit_id(query)?).await?;
    let rating = movie.rating.map(|r| r.to_string()).unwrap_or_default();
    let review = movie.review.clone().unwrap_or_default();
    Ok(Html(templates::edit_page(&movie, &rating, &review, None)))
}

pub async fn edit(
    State(state): State<Arc<AppState>>,
    query: Result<Query<EditQuery>, QueryRejection>,
    Form(req): Form<RateMovieRequest>,
) -> AppResult<Response> {
    let movie = state.catalogue.get(edit_id(query)?).await?;

    let rating = match parse_rating(&req.rating) {
        Ok(rating) => rating,
        Err(message) => {
            let body = templates::edit_page(&movie, &req.rating, &req.review, Some(message));
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(body)).into_response());
        },
    };

    let review = req.review.trim();
    let review = (!review.is_empty()).then_some(review);

    state.catalogue.update_rating(&movie.title, rating, review).await?;
    Ok(Redirect::to("/").into_response())
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Form(req): Form<DeleteMovieRequest>,
) -> AppResult<Redirect> {
    state.catalogue.delete(&req.title).await?;
    Ok(Redirect::to("/"))
}

fn edit_id(query: Result<Query<EditQuery>, QueryRejection>) -> AppResult<i32> {
    query
        .map(|Query(q)| q.id)
        .map_err(|_| AppError::BadRequest("Pick a movie to edit from the list".to_string()))
}

fn parse_rating(raw: &str) -> Result<f64, &'static str> {
    let rating: f64 = raw.trim().parse().map_err(|_| "Rating must be a number, e.g. 7.5")?;
    if !rating.is_finite() || !(0.0..=10.0).contains(&rating) {
        return Err("Rating must be between 0 and 10");
    }
    Ok(rating)
}
