//! Business discovery through the Google Places web service.
//!
//! A text search finds candidate places, then a details call per place fills in phone,
//! website, and rating. Closed places and places whose details cannot be fetched are skipped.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;

use super::domain::BusinessRecord;
use crate::config::PlacesConfig;

/// Details are fetched for at most this many search hits.
const DETAILS_LIMIT: usize = 10;
const DETAIL_FIELDS: &str =
    "name,formatted_address,formatted_phone_number,website,rating,user_ratings_total,business_status";

#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("Google Places API key is required. Please add GOOGLE_PLACES_API_KEY to your environment variables.")]
    MissingApiKey,

    #[error("No {niche} businesses found in {location}")]
    NoResults { niche: String, location: String },

    #[error("Google Places API error: {status} - {message}")]
    Upstream { status: String, message: String },

    #[error("places request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid places base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },
}

/// Source of candidate businesses for a location and niche.
#[async_trait]
pub trait PlacesDirectory: Send + Sync {
    async fn search(&self, location: &str, niche: &str)
        -> Result<Vec<BusinessRecord>, PlacesError>;
}

#[async_trait]
impl<T> PlacesDirectory for Arc<T>
where
    T: PlacesDirectory + ?Sized,
{
    async fn search(
        &self,
        location: &str,
        niche: &str,
    ) -> Result<Vec<BusinessRecord>, PlacesError> {
        (**self).search(location, niche).await
    }
}

pub struct GooglePlacesClient {
    client: Client,
    api_key: Option<String>,
    base_url: Url,
}

impl GooglePlacesClient {
    pub fn new(config: &PlacesConfig, timeout_secs: u64) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        let normalised = format!("{}/", config.base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|err| PlacesError::InvalidBaseUrl {
            url: config.base_url.clone(),
            message: err.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url,
        })
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, PlacesError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|err| PlacesError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                message: err.to_string(),
            })?;
        url.query_pairs_mut().extend_pairs(params);
        Ok(url)
    }

    async fn text_search(&self, query: &str, key: &str) -> Result<Vec<SearchHit>, PlacesError> {
        let url = self.endpoint(
            "textsearch/json",
            &[("query", query), ("key", key), ("type", "establishment")],
        )?;
        let response: TextSearchResponse = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if response.status == "OK" {
            return Ok(response.results);
        }
        if response.status == "ZERO_RESULTS" {
            return Ok(Vec::new());
        }
        Err(PlacesError::Upstream {
            message: response
                .error_message
                .unwrap_or_else(|| "Unknown error".to_string()),
            status: response.status,
        })
    }

    async fn details(&self, place_id: &str, key: &str) -> Result<PlaceDetails, PlacesError> {
        let url = self.endpoint(
            "details/json",
            &[("place_id", place_id), ("fields", DETAIL_FIELDS), ("key", key)],
        )?;
        let response: DetailsResponse = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        match response.result {
            Some(result) if response.status == "OK" => Ok(result),
            _ => Err(PlacesError::Upstream {
                message: response
                    .error_message
                    .unwrap_or_else(|| "missing place details".to_string()),
                status: response.status,
            }),
        }
    }
}

#[async_trait]
impl PlacesDirectory for GooglePlacesClient {
    async fn search(
        &self,
        location: &str,
        niche: &str,
    ) -> Result<Vec<BusinessRecord>, PlacesError> {
        let key = self.api_key.as_deref().ok_or(PlacesError::MissingApiKey)?;
        let query = format!("{niche} businesses in {location}");
        tracing::info!(%query, "searching places");

        let hits = self.text_search(&query, key).await?;
        let no_results = || PlacesError::NoResults {
            niche: niche.to_string(),
            location: location.to_string(),
        };
        if hits.is_empty() {
            return Err(no_results());
        }

        let mut businesses = Vec::new();
        for hit in hits.into_iter().take(DETAILS_LIMIT) {
            let details = match self.details(&hit.place_id, key).await {
                Ok(details) => details,
                Err(err) => {
                    tracing::warn!(place_id = %hit.place_id, error = %err, "skipping place without details");
                    continue;
                }
            };
            if !details.is_operational() {
                tracing::debug!(place_id = %hit.place_id, "skipping non-operational place");
                continue;
            }
            businesses.push(details.into_record(hit));
        }

        if businesses.is_empty() {
            return Err(no_results());
        }

        tracing::info!(count = businesses.len(), "places lookup complete");
        Ok(businesses)
    }
}

#[derive(Debug, Deserialize)]
struct TextSearchResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    place_id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    formatted_address: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    result: Option<PlaceDetails>,
}

#[derive(Debug, Deserialize)]
struct PlaceDetails {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    formatted_address: Option<String>,
    #[serde(default)]
    formatted_phone_number: Option<String>,
    #[serde(default)]
    website: Option<String>,
    #[serde(default)]
    rating: Option<f32>,
    #[serde(default)]
    user_ratings_total: Option<u32>,
    #[serde(default)]
    business_status: Option<String>,
}

impl PlaceDetails {
    fn is_operational(&self) -> bool {
        self.business_status
            .as_deref()
            .map_or(true, |status| status == "OPERATIONAL")
    }

    fn into_record(self, hit: SearchHit) -> BusinessRecord {
        BusinessRecord {
            name: self.name.or(hit.name).unwrap_or_default(),
            website: non_empty(self.website),
            phone: non_empty(self.formatted_phone_number),
            email: None,
            address: self
                .formatted_address
                .or(hit.formatted_address)
                .unwrap_or_default(),
            rating: self.rating,
            review_count: self.user_ratings_total,
            place_id: Some(hit.place_id),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
