use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use super::super::domain::AnalyzedBusiness;
use super::super::scoring::LOW_SCORE_THRESHOLD;
use super::render::{render, render_subject, RenderContext};
use super::templates::{find_template, standard_templates, Channel, OutreachTemplate};

const PROJECT_VALUE_USD: u64 = 2000;
const CONVERSION_RATE: f64 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Draft,
    Active,
    Completed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CampaignStats {
    pub sent: u32,
    pub opened: u32,
    pub replied: u32,
    pub converted: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutreachCampaign {
    pub id: String,
    pub name: String,
    pub business_ids: Vec<String>,
    pub templates: Vec<OutreachTemplate>,
    pub status: CampaignStatus,
    pub created_at: DateTime<Utc>,
    pub stats: CampaignStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampaignRoi {
    pub total_businesses: usize,
    pub low_score_businesses: usize,
    pub no_website_businesses: usize,
    pub potential_revenue: String,
    pub estimated_conversion_rate: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub channel: Channel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedMessage {
    pub message: String,
    pub template: TemplateSummary,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CampaignError {
    #[error("Business or template not found")]
    NotFound {
        business_id: String,
        template_id: String,
    },
}

/// Starts a draft campaign over the given businesses with a copy of the standard templates.
pub fn create_campaign(
    businesses: &[AnalyzedBusiness],
    niche: &str,
    location: &str,
) -> OutreachCampaign {
    let created_at = Utc::now();
    OutreachCampaign {
        id: format!("campaign-{}", created_at.timestamp_millis()),
        name: format!("{niche} businesses in {location}"),
        business_ids: businesses.iter().map(|b| b.id.clone()).collect(),
        templates: standard_templates().to_vec(),
        status: CampaignStatus::Draft,
        created_at,
        stats: CampaignStats::default(),
    }
}

/// Rough revenue projection assuming a flat project value and conversion rate.
pub fn campaign_roi(businesses: &[AnalyzedBusiness]) -> CampaignRoi {
    let low_score = businesses
        .iter()
        .filter(|b| b.score < LOW_SCORE_THRESHOLD)
        .count();
    let no_website = businesses.iter().filter(|b| !b.has_website()).count();

    let projects = ((low_score + no_website) as f64 * CONVERSION_RATE).round() as u64;

    CampaignRoi {
        total_businesses: businesses.len(),
        low_score_businesses: low_score,
        no_website_businesses: no_website,
        potential_revenue: format!("${}", group_thousands(projects * PROJECT_VALUE_USD)),
        estimated_conversion_rate: "15%".to_string(),
    }
}

/// Renders one template for one analyzed business.
pub fn generate_message(
    businesses: &[AnalyzedBusiness],
    business_id: &str,
    template_id: &str,
    context: &RenderContext,
    overrides: &BTreeMap<String, String>,
) -> Result<GeneratedMessage, CampaignError> {
    let business = businesses.iter().find(|b| b.id == business_id);
    let template = find_template(template_id);
    let (Some(business), Some(template)) = (business, template) else {
        return Err(CampaignError::NotFound {
            business_id: business_id.to_string(),
            template_id: template_id.to_string(),
        });
    };

    let record = business.record();
    let score = business.score_result();
    let message = render(
        template,
        &record,
        Some(&score),
        business.roi.as_ref(),
        context,
        overrides,
    );

    Ok(GeneratedMessage {
        message,
        template: TemplateSummary {
            id: template.id,
            name: template.name,
            channel: template.channel,
            subject: render_subject(template, &record, business.roi.as_ref(), context),
        },
    })
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_commas() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(2000), "2,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
