use std::collections::BTreeMap;

use super::common::*;
use crate::workflows::prospecting::analysis::analyze_business;
use crate::workflows::prospecting::outreach::{
    campaign_roi, create_campaign, find_template, generate_message, render, render_subject,
    CampaignError, CampaignStatus, Channel, RenderContext, EMAIL_LOW_SCORE, EMAIL_NO_WEBSITE,
    SMS_URGENT,
};
use crate::workflows::prospecting::scoring::{estimate_roi, score_website};
use crate::workflows::prospecting::WebsiteSummary;

#[test]
fn low_score_email_lists_every_issue_as_a_bullet() {
    let template = find_template(EMAIL_LOW_SCORE).expect("standard template");
    let record = acme();
    let summary = WebsiteSummary {
        has_ssl: false,
        is_mobile_responsive: false,
        ..good_summary()
    };
    let score = score_website(Some(&summary), &record.name);
    let roi = estimate_roi(score.score);

    let message = render(
        template,
        &record,
        Some(&score),
        Some(&roi),
        &RenderContext::new("plumbers", "Leeds"),
        &BTreeMap::new(),
    );

    assert!(message.starts_with("Hi Acme Plumbing team!"));
    assert!(message.contains("• No SSL certificate\n• Not mobile responsive"));
    assert!(!message.contains("{{#issues}}"));
    assert!(!message.contains("{{businessName}}"));
}

#[test]
fn missing_roi_falls_back_to_default_percentages() {
    let template = find_template(SMS_URGENT).expect("standard template");

    let message = render(
        template,
        &acme(),
        None,
        None,
        &RenderContext::default(),
        &BTreeMap::new(),
    );

    assert!(message.contains("Missing 40% potential customers"));
}

#[test]
fn overrides_replace_derived_values() {
    let template = find_template(EMAIL_NO_WEBSITE).expect("standard template");
    let overrides = BTreeMap::from([("businessName".to_string(), "Acme & Sons".to_string())]);

    let message = render(
        template,
        &business("Acme Plumbing", None),
        None,
        Some(&estimate_roi(25)),
        &RenderContext::new("plumbers", "Leeds"),
        &overrides,
    );

    assert!(message.contains("Acme & Sons"));
    assert!(!message.contains("Acme Plumbing"));
}

#[test]
fn subject_lines_render_placeholders() {
    let template = find_template(EMAIL_NO_WEBSITE).expect("standard template");

    let subject = render_subject(
        template,
        &business("Acme Plumbing", None),
        Some(&estimate_roi(25)),
        &RenderContext::default(),
    );

    assert_eq!(
        subject.as_deref(),
        Some("Acme Plumbing - Missing out on 72% potential customers?")
    );
    assert_eq!(
        render_subject(
            find_template(SMS_URGENT).expect("standard template"),
            &acme(),
            None,
            &RenderContext::default()
        ),
        None
    );
}

#[test]
fn campaign_starts_as_draft_with_every_template() {
    let analyzed = vec![
        analyze_business(1, acme(), Some(good_summary())),
        analyze_business(2, business("Bolt Electrics", None), None),
    ];

    let campaign = create_campaign(&analyzed, "plumbers", "Leeds");

    assert!(campaign.id.starts_with("campaign-"));
    assert_eq!(campaign.name, "plumbers businesses in Leeds");
    assert_eq!(campaign.business_ids, vec!["business-1", "business-2"]);
    assert_eq!(campaign.status, CampaignStatus::Draft);
    assert_eq!(campaign.templates.len(), 4);
    assert_eq!(campaign.stats.sent, 0);
}

#[test]
fn campaign_roi_counts_low_scores_and_missing_sites() {
    let analyzed: Vec<_> = (1..=4)
        .map(|n| analyze_business(n, business(&format!("Shop {n}"), None), None))
        .collect();

    let roi = campaign_roi(&analyzed);

    assert_eq!(roi.total_businesses, 4);
    assert_eq!(roi.low_score_businesses, 4);
    assert_eq!(roi.no_website_businesses, 4);
    // round(8 * 0.15) = 1 project
    assert_eq!(roi.potential_revenue, "$2,000");
    assert_eq!(roi.estimated_conversion_rate, "15%");
}

#[test]
fn generate_message_renders_the_requested_template() {
    let analyzed = vec![analyze_business(
        1,
        business("Bolt Electrics", None),
        None,
    )];

    let generated = generate_message(
        &analyzed,
        "business-1",
        EMAIL_NO_WEBSITE,
        &RenderContext::new("electricians", "Leeds"),
        &BTreeMap::new(),
    )
    .expect("business and template exist");

    assert!(generated.message.contains("Bolt Electrics"));
    assert_eq!(generated.template.channel, Channel::Email);
    assert!(generated
        .template
        .subject
        .as_deref()
        .is_some_and(|subject| subject.starts_with("Bolt Electrics")));
}

#[test]
fn generate_message_rejects_unknown_ids() {
    let analyzed = vec![analyze_business(1, acme(), Some(good_summary()))];

    let err = generate_message(
        &analyzed,
        "business-9",
        EMAIL_LOW_SCORE,
        &RenderContext::default(),
        &BTreeMap::new(),
    )
    .expect_err("unknown business");
    assert!(matches!(err, CampaignError::NotFound { .. }));

    let err = generate_message(
        &analyzed,
        "business-1",
        "fax-blast",
        &RenderContext::default(),
        &BTreeMap::new(),
    )
    .expect_err("unknown template");
    assert_eq!(err.to_string(), "Business or template not found");
}
