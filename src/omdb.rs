use std::{future::Future, num::NonZeroU32, sync::Arc};

use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use serde::Deserialize;

use crate::{error::LookupError, models::MovieMetadata};

/// Resolves a free-text title to movie metadata.
pub trait MetadataProvider {
    fn lookup(&self, title: &str) -> impl Future<Output = Result<MovieMetadata, LookupError>> + Send;
}

pub struct OmdbClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl OmdbClient {
    pub fn new(client: reqwest::Client, api_key: String, base_url: String, rps: u32) -> Self {
        // Warn once on app load if using mock data
        if api_key.trim().is_empty() {
            tracing::warn!("Using mock OMDb data - no OMDB_API_KEY provided");
        }

        let rps = NonZeroU32::new(rps).unwrap_or(NonZeroU32::MIN);
        let limiter = Arc::new(RateLimiter::direct(Quota::per_second(rps)));
        Self { client, api_key, base_url, limiter }
    }

    pub async fn find_by_title(&self, title: &str) -> Result<MovieMetadata, LookupError> {
        if self.api_key.trim().is_empty() {
            return Ok(mock_metadata(title));
        }

        self.limiter.until_ready().await;

        let url = format!("{}/", self.base_url.trim_end_matches('/'));
        let resp: OmdbResponse = self
            .client
            .get(url)
            .query(&[("apikey", self.api_key.as_str()), ("t", title)])
            .send()
            .await?
            .json()
            .await?;

        tracing::debug!(query = %title, response = %resp.response, "omdb lookup");
        resp.into_metadata()
    }
}

impl MetadataProvider for OmdbClient {
    async fn lookup(&self, title: &str) -> Result<MovieMetadata, LookupError> {
        self.find_by_title(title).await
    }
}

fn mock_metadata(title: &str) -> MovieMetadata {
    MovieMetadata {
        title: title.to_string(),
        year: 2002,
        plot: "Mock plot for local development.".to_string(),
        poster_url: "https://placehold.co/300x450?text=Poster".to_string(),
    }
}

/// Parses the leading four-digit year of values such as `2002` or `2019–2020`.
pub fn parse_year(raw: &str) -> Option<i32> {
    let digits = raw.trim().get(..4)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct OmdbResponse {
    response: String,
    title: Option<String>,
    year: Option<String>,
    plot: Option<String>,
    poster: Option<String>,
    error: Option<String>,
}

impl OmdbResponse {
    fn into_metadata(self) -> Result<MovieMetadata, LookupError> {
        if !self.response.eq_ignore_ascii_case("true") {
            let message = self.error.unwrap_or_else(|| "Movie not found!".to_string());
            return Err(LookupError::NoMatch(message));
        }

        let title = self.title.ok_or_else(|| missing("Title"))?;
        let raw_year = self.year.ok_or_else(|| missing("Year"))?;
        let year = parse_year(&raw_year)
            .ok_or_else(|| LookupError::Malformed(format!("unrecognised year {raw_year:?}")))?;

        Ok(MovieMetadata {
            title,
            year,
            plot: self.plot.ok_or_else(|| missing("Plot"))?,
            poster_url: self.poster.ok_or_else(|| missing("Poster"))?,
        })
    }
}

fn missing(field: &str) -> LookupError {
    LookupError::Malformed(format!("missing {field}"))
}
