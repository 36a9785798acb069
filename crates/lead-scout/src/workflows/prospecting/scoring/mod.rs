mod roi;
mod rules;

pub use roi::estimate_roi;

use super::domain::{CategoryScores, ScoreResult, WebsiteSummary};

/// Score returned for a business with no website at all.
pub const NO_WEBSITE_SCORE: u8 = 25;

/// Score returned when a business could not be processed.
pub const ANALYSIS_FAILED_SCORE: u8 = 30;

/// Scores below this are pitched as needing improvement.
pub const LOW_SCORE_THRESHOLD: u8 = 70;

/// Applies the website rubric, or returns the no-website result when `summary` is absent.
pub fn score_website(summary: Option<&WebsiteSummary>, business_name: &str) -> ScoreResult {
    match summary {
        Some(summary) => rules::score_summary(summary, business_name),
        None => no_website_result(),
    }
}

pub fn no_website_result() -> ScoreResult {
    ScoreResult {
        score: NO_WEBSITE_SCORE,
        issues: to_strings(&[
            "No website found",
            "Missing online presence",
            "No digital marketing",
        ]),
        recommendations: to_strings(&[
            "Create a professional website immediately",
            "Establish online presence with Google My Business",
            "Set up social media profiles",
            "Implement basic SEO",
        ]),
        category_scores: CategoryScores::default(),
    }
}

/// Result recorded for a business whose processing failed mid-batch.
pub fn analysis_failed_result() -> ScoreResult {
    ScoreResult {
        score: ANALYSIS_FAILED_SCORE,
        issues: to_strings(&[
            "Website analysis failed",
            "Unable to access website for scoring",
        ]),
        recommendations: to_strings(&[
            "Manual website review needed",
            "Check website accessibility",
        ]),
        category_scores: CategoryScores::default(),
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}
