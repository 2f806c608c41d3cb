use std::cmp::Ordering;

use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set, SqlErr,
    sea_query::Expr,
};
use tracing::{debug, info};

use crate::{
    entities::movie,
    error::{CatalogueError, CatalogueResult, MovieRef},
    models::{MovieMetadata, RankedMovie},
    omdb::MetadataProvider,
};

const TITLE_MAX: usize = 250;
const DESCRIPTION_MAX: usize = 500;
const IMAGE_URL_MAX: usize = 250;
const REVIEW_MAX: usize = 250;

#[derive(Clone)]
pub struct Catalogue {
    db: DatabaseConnection,
}

impl Catalogue {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Every movie, best rated first, with ranks assigned from 1.
    pub async fn list(&self) -> CatalogueResult<Vec<RankedMovie>> {
        let movies = movie::Entity::find()
            .order_by_asc(movie::Column::Id)
            .all(&self.db)
            .await?;

        debug!(count = movies.len(), "loaded catalogue");
        Ok(rank(movies))
    }

    pub async fn get(&self, id: i32) -> CatalogueResult<movie::Model> {
        movie::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(CatalogueError::NotFound(MovieRef::Id(id)))
    }

    pub async fn find_by_title(&self, title: &str) -> CatalogueResult<Option<movie::Model>> {
        let movie = movie::Entity::find()
            .filter(movie::Column::Title.eq(title))
            .one(&self.db)
            .await?;
        Ok(movie)
    }

    pub async fn create(
        &self,
        title: &str,
        year: i32,
        description: &str,
        image_url: &str,
    ) -> CatalogueResult<()> {
        check_width("title", title, TITLE_MAX)?;
        check_width("description", description, DESCRIPTION_MAX)?;
        check_width("poster URL", image_url, IMAGE_URL_MAX)?;

        let model = movie::ActiveModel {
            id: Default::default(),
            title: Set(title.to_string()),
            year: Set(year),
            description: Set(description.to_string()),
            rating: Set(None),
            review: Set(None),
            image_url: Set(image_url.to_string()),
        };

        movie::Entity::insert(model).exec(&self.db).await.map_err(|err| {
            match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => CatalogueError::ConstraintViolation(
                    format!("\"{title}\" is already in the catalogue"),
                ),
                _ => CatalogueError::Database(err),
            }
        })?;

        info!(title = %title, year = year, "movie added");
        Ok(())
    }

    pub async fn delete(&self, title: &str) -> CatalogueResult<()> {
        let res = movie::Entity::delete_many()
            .filter(movie::Column::Title.eq(title))
            .exec(&self.db)
            .await?;

        if res.rows_affected == 0 {
            return Err(CatalogueError::NotFound(MovieRef::Title(title.to_string())));
        }

        info!(title = %title, "movie deleted");
        Ok(())
    }

    pub async fn update_rating(
        &self,
        title: &str,
        rating: f64,
        review: Option<&str>,
    ) -> CatalogueResult<()> {
        if let Some(review) = review {
            check_width("review", review, REVIEW_MAX)?;
        }

        let res = movie::Entity::update_many()
            .col_expr(movie::Column::Rating, Expr::value(rating))
            .col_expr(movie::Column::Review, Expr::value(review.map(str::to_string)))
            .filter(movie::Column::Title.eq(title))
            .exec(&self.db)
            .await?;

        if res.rows_affected == 0 {
            return Err(CatalogueError::NotFound(MovieRef::Title(title.to_string())));
        }

        info!(title = %title, rating = rating, "movie rated");
        Ok(())
    }

    /// Looks `query` up with the provider, stores the match and returns the
    /// new movie's id.
    pub async fn resolve_external<P: MetadataProvider>(
        &self,
        provider: &P,
        query: &str,
    ) -> CatalogueResult<i32> {
        debug!(query = %query, "resolving title");

        let MovieMetadata { title, year, plot, poster_url } = provider.lookup(query).await?;

        self.create(&title, year, &plot, &poster_url).await?;

        let created = self.find_by_title(&title).await?.ok_or_else(|| {
            CatalogueError::Inconsistency(format!("\"{title}\" missing right after insert"))
        })?;

        Ok(created.id)
    }
}

/// Orders by rating descending, unrated last, keeping the incoming order for
/// ties, and numbers the result from 1.
pub fn rank(mut movies: Vec<movie::Model>) -> Vec<RankedMovie> {
    movies.sort_by(|a, b| by_rating_desc(a.rating, b.rating));

    movies
        .into_iter()
        .zip(1..)
        .map(|(movie, rank)| RankedMovie::new(rank, movie))
        .collect()
}

fn by_rating_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn check_width(field: &str, value: &str, max: usize) -> CatalogueResult<()> {
    let len = value.chars().count();
    if len > max {
        return Err(CatalogueError::ConstraintViolation(format!(
            "{field} is {len} characters, the limit is {max}"
        )));
    }
    Ok(())
}
