use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};

use super::super::domain::{BusinessRecord, RoiEstimate, ScoreResult};
use super::templates::OutreachTemplate;

static ISSUES_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\{\{#issues\}\}.*?\{\{/issues\}\}").expect("valid issues block regex")
});

const DEFAULT_NICHE: &str = "business";
const DEFAULT_TRAFFIC_INCREASE: &str = "25%";
const DEFAULT_LEAD_INCREASE: &str = "40%";
const DEFAULT_CONVERSION_INCREASE: &str = "30%";

/// Campaign metadata supplied alongside a business when rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderContext {
    #[serde(default)]
    pub niche: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl RenderContext {
    pub fn new(niche: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            niche: Some(niche.into()),
            location: Some(location.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateValue {
    Text(String),
    List(Vec<String>),
}

pub type TemplateVariables = BTreeMap<String, TemplateValue>;

/// Builds the placeholder map for one business.
///
/// Later sources win: derived business fields, then the context location, then `overrides`.
/// Absent optional fields are left out so their placeholders survive rendering untouched.
pub fn template_variables(
    business: &BusinessRecord,
    score: Option<&ScoreResult>,
    roi: Option<&RoiEstimate>,
    context: &RenderContext,
    overrides: &BTreeMap<String, String>,
) -> TemplateVariables {
    let mut variables = TemplateVariables::new();
    let mut text = |key: &str, value: String| {
        variables.insert(key.to_string(), TemplateValue::Text(value));
    };

    text("businessName", business.name.clone());
    text("location", business.location());
    text(
        "niche",
        non_blank(context.niche.as_deref())
            .unwrap_or(DEFAULT_NICHE)
            .to_string(),
    );
    text(
        "trafficIncrease",
        roi.map(RoiEstimate::traffic_increase)
            .unwrap_or_else(|| DEFAULT_TRAFFIC_INCREASE.to_string()),
    );
    text(
        "leadIncrease",
        roi.map(RoiEstimate::lead_increase)
            .unwrap_or_else(|| DEFAULT_LEAD_INCREASE.to_string()),
    );
    text(
        "conversionIncrease",
        roi.map(RoiEstimate::conversion_increase)
            .unwrap_or_else(|| DEFAULT_CONVERSION_INCREASE.to_string()),
    );
    text(
        "score",
        score.map(|result| result.score).unwrap_or(0).to_string(),
    );
    if let Some(phone) = &business.phone {
        text("phone", phone.clone());
    }
    if let Some(email) = &business.email {
        text("email", email.clone());
    }
    if let Some(website) = &business.website {
        text("website", website.clone());
    }
    if let Some(location) = non_blank(context.location.as_deref()) {
        text("location", location.to_string());
    }

    variables.insert(
        "issues".to_string(),
        TemplateValue::List(score.map(|result| result.issues.clone()).unwrap_or_default()),
    );

    for (key, value) in overrides {
        variables.insert(key.clone(), TemplateValue::Text(value.clone()));
    }

    variables
}

/// Renders a template body for one business. Never fails; unresolved placeholders stay literal.
pub fn render(
    template: &OutreachTemplate,
    business: &BusinessRecord,
    score: Option<&ScoreResult>,
    roi: Option<&RoiEstimate>,
    context: &RenderContext,
    overrides: &BTreeMap<String, String>,
) -> String {
    let variables = template_variables(business, score, roi, context, overrides);
    render_text(template.body, &variables)
}

/// Renders the subject line, when the template has one.
pub fn render_subject(
    template: &OutreachTemplate,
    business: &BusinessRecord,
    roi: Option<&RoiEstimate>,
    context: &RenderContext,
) -> Option<String> {
    let variables = template_variables(business, None, roi, context, &BTreeMap::new());
    template
        .subject
        .map(|subject| render_text(subject, &variables))
}

/// Substitutes scalar placeholders, then collapses every `{{#issues}}` block into a bullet list.
///
/// The block's inner markup is discarded; each issue is always rendered as `• {issue}`.
pub fn render_text(text: &str, variables: &TemplateVariables) -> String {
    let mut message = text.to_string();

    for (key, value) in variables {
        if let TemplateValue::Text(value) = value {
            let placeholder = format!("{{{{{key}}}}}");
            if message.contains(&placeholder) {
                message = message.replace(&placeholder, value);
            }
        }
    }

    if let Some(TemplateValue::List(issues)) = variables.get("issues") {
        let bullets = issues
            .iter()
            .map(|issue| format!("• {issue}"))
            .collect::<Vec<_>>()
            .join("\n");
        message = ISSUES_BLOCK_RE
            .replace_all(&message, NoExpand(&bullets))
            .into_owned();
    }

    message
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}
