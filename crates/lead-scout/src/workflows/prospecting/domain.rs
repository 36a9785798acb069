use serde::{Deserialize, Serialize};

/// Business discovered by the places lookup.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BusinessRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
}

impl BusinessRecord {
    /// Website URL when one is on record and non-blank.
    pub fn website_url(&self) -> Option<&str> {
        self.website
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Town or district portion of the free-text address.
    pub fn location(&self) -> String {
        location_from_address(&self.address)
    }
}

/// Second-to-last comma segment of an address, or the first segment when there is only one.
pub fn location_from_address(address: &str) -> String {
    let parts: Vec<&str> = address.split(',').collect();
    if parts.len() >= 2 {
        parts[parts.len() - 2].trim().to_string()
    } else {
        parts[0].trim().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Reachability {
    #[default]
    Reachable,
    Unreachable {
        note: String,
    },
}

/// Summary of a fetched homepage, consumed read-only by the scoring rubric.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WebsiteSummary {
    pub title: String,
    pub meta_description: String,
    pub body_excerpt: String,
    pub has_ssl: bool,
    pub load_time_ms: u64,
    pub is_mobile_responsive: bool,
    pub has_contact_info: bool,
    pub has_call_to_action: bool,
    pub heading_count: u32,
    pub image_count: u32,
    pub link_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub reachability: Reachability,
}

impl WebsiteSummary {
    pub fn unreachable(note: impl Into<String>) -> Self {
        let note = note.into();
        Self {
            title: "Unable to analyze website".to_string(),
            body_excerpt: format!("Website analysis failed: {note}"),
            reachability: Reachability::Unreachable { note },
            ..Self::default()
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self.reachability, Reachability::Reachable)
    }
}

/// Per-category breakdown of the rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryScores {
    pub performance: u8,
    pub seo: u8,
    pub accessibility: u8,
    pub design: u8,
    pub content: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u8,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
    pub category_scores: CategoryScores,
}

/// Urgency classification derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const fn from_score(score: u8) -> Self {
        if score < 50 {
            Self::High
        } else if score < 70 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Phrase used by outreach copy to describe how much work a site needs.
    pub const fn urgency_phrase(self) -> &'static str {
        match self {
            Self::High => "urgent attention",
            Self::Medium => "some improvements",
            Self::Low => "optimization opportunities",
        }
    }
}

/// Projected percentage uplift after a redesign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiEstimate {
    pub traffic_increase_pct: u32,
    pub conversion_increase_pct: u32,
    pub lead_increase_pct: u32,
}

impl RoiEstimate {
    pub fn traffic_increase(&self) -> String {
        format!("{}%", self.traffic_increase_pct)
    }

    pub fn conversion_increase(&self) -> String {
        format!("{}%", self.conversion_increase_pct)
    }

    pub fn lead_increase(&self) -> String {
        format!("{}%", self.lead_increase_pct)
    }
}

/// The three channel messages produced for one business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposedMessages {
    pub email: String,
    pub chat: String,
    pub sms: String,
}

/// Subset of the page summary surfaced in API responses and exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebsiteAnalysisView {
    pub title: String,
    pub has_ssl: bool,
    pub load_time_ms: u64,
    pub is_mobile_responsive: bool,
    pub has_contact_info: bool,
    pub has_call_to_action: bool,
}

impl From<&WebsiteSummary> for WebsiteAnalysisView {
    fn from(summary: &WebsiteSummary) -> Self {
        Self {
            title: summary.title.clone(),
            has_ssl: summary.has_ssl,
            load_time_ms: summary.load_time_ms,
            is_mobile_responsive: summary.is_mobile_responsive,
            has_contact_info: summary.has_contact_info,
            has_call_to_action: summary.has_call_to_action,
        }
    }
}

/// Fully processed business as returned by the batch analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedBusiness {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub review_count: u32,
    pub score: u8,
    #[serde(default)]
    pub issues: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub category_scores: CategoryScores,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roi: Option<RoiEstimate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redesign_url: Option<String>,
    pub outreach_messages: ComposedMessages,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_analysis: Option<WebsiteAnalysisView>,
}

impl AnalyzedBusiness {
    pub fn has_website(&self) -> bool {
        self.website
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }

    pub fn needs_improvement(&self) -> bool {
        self.score < 70
    }

    /// Business record view used when rendering templates for an analyzed business.
    pub fn record(&self) -> BusinessRecord {
        BusinessRecord {
            name: self.name.clone(),
            website: self.website.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            rating: Some(self.rating),
            review_count: Some(self.review_count),
            place_id: None,
        }
    }

    /// Score result view carrying the stored issues and category breakdown.
    pub fn score_result(&self) -> ScoreResult {
        ScoreResult {
            score: self.score,
            issues: self.issues.clone(),
            recommendations: self.recommendations.clone(),
            category_scores: self.category_scores,
        }
    }
}
