use serde::{Deserialize, Serialize};

use crate::entities::movie;

/// A catalogue entry as shown in the listing, carrying its position in the
/// rating-descending order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankedMovie {
    pub rank: u32,
    pub id: i32,
    pub title: String,
    pub year: i32,
    pub description: String,
    pub rating: Option<f64>,
    pub review: Option<String>,
    pub image_url: String,
}

impl RankedMovie {
    pub fn new(rank: u32, movie: movie::Model) -> Self {
        Self {
            rank,
            id: movie.id,
            title: movie.title,
            year: movie.year,
            description: movie.description,
            rating: movie.rating,
            review: movie.review,
            image_url: movie.image_url,
        }
    }
}

/// Metadata resolved for a title by the external provider.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MovieMetadata {
    pub title: String,
    pub year: i32,
    pub plot: String,
    pub poster_url: String,
}

#[derive(Debug, Deserialize)]
pub struct AddMovieRequest {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct RateMovieRequest {
    pub rating: String,
    #[serde(default)]
    pub review: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteMovieRequest {
    pub title: String,
}
