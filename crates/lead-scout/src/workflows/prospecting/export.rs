//! Spreadsheet export of an analyzed batch, including rendered outreach copy per business.

use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use thiserror::Error;

use super::domain::AnalyzedBusiness;
use super::outreach::{
    campaign_roi, find_template, render, render_subject, OutreachTemplate, RenderContext,
    CHAT_FOLLOW_UP, EMAIL_LOW_SCORE, EMAIL_NO_WEBSITE, SMS_URGENT,
};
use super::scoring::LOW_SCORE_THRESHOLD;

pub const CSV_HEADERS: [&str; 28] = [
    "Business Name",
    "Website",
    "Phone",
    "Email",
    "Address",
    "Rating",
    "Review Count",
    "Website Score",
    "Priority Level",
    "Issues Found",
    "Recommendations",
    "Traffic Increase Potential",
    "Lead Increase Potential",
    "Conversion Increase Potential",
    "Has SSL",
    "Mobile Responsive",
    "Load Time (ms)",
    "Has Contact Info",
    "Has Call to Action",
    "Needs Redesign",
    "Redesign URL",
    "Email Subject",
    "Email Message",
    "Chat Message",
    "SMS Message",
    "Best Contact Method",
    "Estimated Project Value",
    "Notes",
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush CSV buffer: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV output was not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("outreach template '{0}' is missing")]
    MissingTemplate(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
}

/// Builds the campaign spreadsheet dated today (UTC).
pub fn export_csv(
    businesses: &[AnalyzedBusiness],
    niche: &str,
    location: &str,
) -> Result<CsvExport, ExportError> {
    export_csv_dated(businesses, niche, location, Utc::now().date_naive())
}

/// Summary row, blank row, header row, then one row per business; every row has 28 fields.
pub fn export_csv_dated(
    businesses: &[AnalyzedBusiness],
    niche: &str,
    location: &str,
    date: NaiveDate,
) -> Result<CsvExport, ExportError> {
    let roi = campaign_roi(businesses);
    let context = RenderContext::new(niche, location);
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut summary = vec![
        format!("CAMPAIGN SUMMARY: {} businesses analyzed", businesses.len()),
        format!("Location: {location}"),
        format!("Niche: {niche}"),
        format!("Low Score Businesses: {}", roi.low_score_businesses),
        format!("No Website: {}", roi.no_website_businesses),
        format!("Potential Revenue: {}", roi.potential_revenue),
        format!("Conversion Rate: {}", roi.estimated_conversion_rate),
    ];
    summary.resize(CSV_HEADERS.len(), String::new());
    writer.write_record(&summary)?;
    writer.write_record(vec![""; CSV_HEADERS.len()])?;
    writer.write_record(CSV_HEADERS)?;

    for business in businesses {
        writer.write_record(business_row(business, &context)?)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Io(err.into_error()))?;
    let content = String::from_utf8(bytes)?;

    tracing::info!(rows = businesses.len(), %niche, %location, "exported CSV");

    Ok(CsvExport {
        filename: format!(
            "leadgen-{}-{}-{}.csv",
            filename_part(location),
            filename_part(niche),
            date.format("%Y-%m-%d")
        ),
        content,
    })
}

fn business_row(
    business: &AnalyzedBusiness,
    context: &RenderContext,
) -> Result<Vec<String>, ExportError> {
    let email_template_id = if business.has_website() {
        EMAIL_LOW_SCORE
    } else {
        EMAIL_NO_WEBSITE
    };
    let template =
        |id: &'static str| find_template(id).ok_or(ExportError::MissingTemplate(id));
    let email_template = template(email_template_id)?;
    let chat_template = template(CHAT_FOLLOW_UP)?;
    let sms_template = template(SMS_URGENT)?;

    let record = business.record();
    let score = business.score_result();
    let roi = business.roi.as_ref();
    let overrides = BTreeMap::new();
    let rendered = |body: &OutreachTemplate| render(body, &record, Some(&score), roi, context, &overrides);

    let analysis = business.website_analysis.as_ref();
    let flag = |value: Option<bool>| yes_no(value.unwrap_or(false));

    Ok(vec![
        business.name.clone(),
        business.website.clone().unwrap_or_default(),
        business.phone.clone().unwrap_or_default(),
        business.email.clone().unwrap_or_default(),
        business.address.clone(),
        if business.rating > 0.0 {
            business.rating.to_string()
        } else {
            String::new()
        },
        if business.review_count > 0 {
            business.review_count.to_string()
        } else {
            String::new()
        },
        business.score.to_string(),
        business.priority.label().to_string(),
        business.issues.join("; "),
        business.recommendations.join("; "),
        roi.map(|r| r.traffic_increase()).unwrap_or_default(),
        roi.map(|r| r.lead_increase()).unwrap_or_default(),
        roi.map(|r| r.conversion_increase()).unwrap_or_default(),
        flag(analysis.map(|a| a.has_ssl)),
        flag(analysis.map(|a| a.is_mobile_responsive)),
        analysis
            .filter(|a| a.load_time_ms > 0)
            .map(|a| a.load_time_ms.to_string())
            .unwrap_or_default(),
        flag(analysis.map(|a| a.has_contact_info)),
        flag(analysis.map(|a| a.has_call_to_action)),
        yes_no(business.score < LOW_SCORE_THRESHOLD),
        business.redesign_url.clone().unwrap_or_default(),
        render_subject(email_template, &record, roi, context).unwrap_or_default(),
        rendered(email_template),
        rendered(chat_template),
        rendered(sms_template),
        best_contact_method(business).to_string(),
        estimated_project_value(business.score).to_string(),
        follow_up_note(business.score).to_string(),
    ])
}

fn best_contact_method(business: &AnalyzedBusiness) -> &'static str {
    let known = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.trim().is_empty());
    if known(&business.email) {
        "Email"
    } else if known(&business.phone) {
        "Phone"
    } else {
        "Website Contact"
    }
}

fn estimated_project_value(score: u8) -> &'static str {
    if score < 50 {
        "$3000-5000"
    } else if score < 70 {
        "$2000-3000"
    } else {
        "$1000-2000"
    }
}

fn follow_up_note(score: u8) -> &'static str {
    if score < 50 {
        "High priority - website needs major improvements"
    } else if score < 70 {
        "Good opportunity - moderate improvements needed"
    } else {
        "Low priority - minor optimizations only"
    }
}

fn yes_no(value: bool) -> String {
    let label = if value { "Yes" } else { "No" };
    label.to_string()
}

fn filename_part(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}
