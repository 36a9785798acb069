//! Batch pipeline: places lookup, then per-business inspection, scoring, and outreach copy.

use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::domain::{AnalyzedBusiness, BusinessRecord, Priority, WebsiteAnalysisView, WebsiteSummary};
use super::inspector::{InspectError, WebsiteInspector};
use super::outreach::{compose, fallback_messages};
use super::places::{PlacesDirectory, PlacesError};
use super::scoring::{analysis_failed_result, estimate_roi, score_website, LOW_SCORE_THRESHOLD};
use crate::config::MAX_BATCH_SIZE;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub niche: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisSummary {
    pub total: usize,
    pub needs_improvement: usize,
    pub average_score: u8,
    pub has_websites: usize,
    pub location: String,
    pub niche: String,
}

impl AnalysisSummary {
    pub fn from_businesses(businesses: &[AnalyzedBusiness], location: &str, niche: &str) -> Self {
        let total = businesses.len();
        let score_sum: u32 = businesses.iter().map(|b| u32::from(b.score)).sum();
        let average_score = if total == 0 {
            0
        } else {
            (f64::from(score_sum) / total as f64).round() as u8
        };

        Self {
            total,
            needs_improvement: businesses.iter().filter(|b| b.needs_improvement()).count(),
            average_score,
            has_websites: businesses.iter().filter(|b| b.has_website()).count(),
            location: location.to_string(),
            niche: niche.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub businesses: Vec<AnalyzedBusiness>,
    pub location: String,
    pub niche: String,
    pub summary: AnalysisSummary,
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Location and niche are required")]
    MissingInput,

    #[error("Google Places API Setup Required: {message}")]
    SetupRequired { message: String },

    #[error("No {niche} businesses found in {location}")]
    NotFound { niche: String, location: String },

    #[error("Failed to find businesses: {0}")]
    Upstream(PlacesError),
}

impl From<PlacesError> for AnalysisError {
    fn from(value: PlacesError) -> Self {
        match value {
            PlacesError::MissingApiKey => Self::SetupRequired {
                message: PlacesError::MissingApiKey.to_string(),
            },
            PlacesError::NoResults { niche, location } => Self::NotFound { niche, location },
            other => Self::Upstream(other),
        }
    }
}

/// Runs a bounded, order-preserving analysis over the businesses a places lookup returns.
pub struct ProspectAnalyzer<P, W> {
    places: P,
    inspector: W,
    max_businesses: usize,
}

impl<P, W> ProspectAnalyzer<P, W>
where
    P: PlacesDirectory,
    W: WebsiteInspector,
{
    pub fn new(places: P, inspector: W) -> Self {
        Self {
            places,
            inspector,
            max_businesses: MAX_BATCH_SIZE,
        }
    }

    /// Caps both the batch size and the number of concurrent inspections, within `1..=8`.
    pub fn with_max_businesses(mut self, max_businesses: usize) -> Self {
        self.max_businesses = max_businesses.clamp(1, MAX_BATCH_SIZE);
        self
    }

    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport, AnalysisError> {
        let location = request.location.trim();
        let niche = request.niche.trim();
        if location.is_empty() || niche.is_empty() {
            return Err(AnalysisError::MissingInput);
        }

        tracing::info!(%location, %niche, "searching for businesses");
        let records = self.places.search(location, niche).await?;
        if records.is_empty() {
            return Err(AnalysisError::NotFound {
                niche: niche.to_string(),
                location: location.to_string(),
            });
        }

        tracing::info!(found = records.len(), limit = self.max_businesses, "processing businesses");
        let businesses = self.analyze_batch(records).await;
        let summary = AnalysisSummary::from_businesses(&businesses, location, niche);
        tracing::info!(
            total = summary.total,
            needs_improvement = summary.needs_improvement,
            average_score = summary.average_score,
            "analysis complete"
        );

        Ok(AnalysisReport {
            businesses,
            location: location.to_string(),
            niche: niche.to_string(),
            summary,
        })
    }

    /// Processes at most `max_businesses` records. A failed item becomes its fallback entry.
    pub async fn analyze_batch(&self, records: Vec<BusinessRecord>) -> Vec<AnalyzedBusiness> {
        stream::iter(records.into_iter().take(self.max_businesses).enumerate())
            .map(|(index, record)| self.analyze_one(index + 1, record))
            .buffered(self.max_businesses)
            .collect()
            .await
    }

    async fn analyze_one(&self, ordinal: usize, record: BusinessRecord) -> AnalyzedBusiness {
        match self.inspect(&record).await {
            Ok(summary) => analyze_business(ordinal, record, summary),
            Err(err) => {
                tracing::warn!(business = %record.name, error = %err, "business analysis failed");
                failed_business(ordinal, record)
            }
        }
    }

    async fn inspect(&self, record: &BusinessRecord) -> Result<Option<WebsiteSummary>, InspectError> {
        match record.website_url() {
            Some(url) => {
                tracing::debug!(%url, "analyzing website");
                self.inspector.inspect(url).await.map(Some)
            }
            None => Ok(None),
        }
    }
}

/// Scores one business and drafts its outreach. `summary` is `None` when there is no website.
pub fn analyze_business(
    ordinal: usize,
    mut record: BusinessRecord,
    summary: Option<WebsiteSummary>,
) -> AnalyzedBusiness {
    if record.email.is_none() {
        record.email = summary.as_ref().and_then(|s| s.contact_email.clone());
    }

    let result = score_website(summary.as_ref(), &record.name);
    let priority = Priority::from_score(result.score);
    let roi = estimate_roi(result.score);
    let outreach_messages = compose(&record, result.score, &roi, priority);
    let id = business_id(ordinal);
    let redesign_url =
        (result.score < LOW_SCORE_THRESHOLD).then(|| format!("/redesigns/{id}.html"));

    AnalyzedBusiness {
        id,
        name: record.name,
        website: record.website,
        phone: record.phone,
        email: record.email,
        address: record.address,
        rating: record.rating.unwrap_or(0.0),
        review_count: record.review_count.unwrap_or(0),
        score: result.score,
        issues: result.issues,
        recommendations: result.recommendations,
        category_scores: result.category_scores,
        priority,
        roi: Some(roi),
        redesign_url,
        outreach_messages,
        website_analysis: summary.as_ref().map(WebsiteAnalysisView::from),
    }
}

/// Fixed entry recorded when a business could not be processed.
pub fn failed_business(ordinal: usize, record: BusinessRecord) -> AnalyzedBusiness {
    let result = analysis_failed_result();
    let id = business_id(ordinal);

    AnalyzedBusiness {
        id,
        outreach_messages: fallback_messages(&record.name),
        name: record.name,
        website: record.website,
        phone: record.phone,
        email: record.email,
        address: record.address,
        rating: record.rating.unwrap_or(0.0),
        review_count: record.review_count.unwrap_or(0),
        score: result.score,
        issues: result.issues,
        recommendations: result.recommendations,
        category_scores: result.category_scores,
        priority: Priority::High,
        roi: None,
        redesign_url: None,
        website_analysis: None,
    }
}

fn business_id(ordinal: usize) -> String {
    format!("business-{ordinal}")
}
