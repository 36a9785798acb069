use super::common::*;
use crate::workflows::prospecting::analysis::{analyze_business, failed_business, AnalysisSummary};
use crate::workflows::prospecting::domain::{Priority, WebsiteSummary};

#[test]
fn business_without_website_gets_no_website_pitch_and_redesign() {
    let analyzed = analyze_business(3, business("Bolt Electrics", None), None);

    assert_eq!(analyzed.id, "business-3");
    assert_eq!(analyzed.score, 25);
    assert_eq!(analyzed.priority, Priority::High);
    assert_eq!(analyzed.redesign_url.as_deref(), Some("/redesigns/business-3.html"));
    assert_eq!(analyzed.roi.map(|roi| roi.lead_increase_pct), Some(72));
    assert!(analyzed.website_analysis.is_none());
    assert!(analyzed
        .outreach_messages
        .email
        .contains("don't have a website"));
    assert!(!analyzed.has_website());
}

#[test]
fn healthy_site_keeps_no_redesign_and_backfills_email() {
    let analyzed = analyze_business(1, acme(), Some(good_summary()));

    assert_eq!(analyzed.score, 100);
    assert_eq!(analyzed.priority, Priority::Low);
    assert_eq!(analyzed.redesign_url, None);
    assert_eq!(analyzed.email.as_deref(), Some("info@acmeplumbing.co.uk"));
    assert_eq!(analyzed.rating, 4.6);
    assert_eq!(analyzed.review_count, 87);
    let view = analyzed.website_analysis.expect("site was inspected");
    assert!(view.has_ssl);
    assert_eq!(view.load_time_ms, 850);
}

#[test]
fn listed_email_wins_over_scraped_email() {
    let mut record = acme();
    record.email = Some("bookings@acmeplumbing.co.uk".to_string());

    let analyzed = analyze_business(1, record, Some(good_summary()));

    assert_eq!(analyzed.email.as_deref(), Some("bookings@acmeplumbing.co.uk"));
}

#[test]
fn failed_business_uses_fixed_fallback() {
    let analyzed = failed_business(2, acme());

    assert_eq!(analyzed.id, "business-2");
    assert_eq!(analyzed.score, 30);
    assert_eq!(analyzed.priority, Priority::High);
    assert_eq!(analyzed.roi, None);
    assert_eq!(analyzed.redesign_url, None);
    assert_eq!(
        analyzed.issues,
        vec![
            "Website analysis failed".to_string(),
            "Unable to access website for scoring".to_string(),
        ]
    );
    assert!(analyzed.outreach_messages.sms.starts_with("Hi Acme Plumbing!"));
}

#[test]
fn summary_rounds_average_and_counts_sites() {
    let businesses = vec![
        analyze_business(1, acme(), Some(good_summary())),
        analyze_business(2, business("Bolt Electrics", None), None),
        analyze_business(
            3,
            business("Cobble Cafe", Some("http://cobble.test")),
            Some(WebsiteSummary::unreachable("HTTP 500")),
        ),
    ];

    let summary = AnalysisSummary::from_businesses(&businesses, "Leeds", "trades");

    // (100 + 25 + 18) / 3 = 47.67
    assert_eq!(summary.total, 3);
    assert_eq!(summary.average_score, 48);
    assert_eq!(summary.needs_improvement, 2);
    assert_eq!(summary.has_websites, 2);
    assert_eq!(summary.location, "Leeds");
}

#[test]
fn empty_batch_averages_to_zero() {
    let summary = AnalysisSummary::from_businesses(&[], "Leeds", "trades");
    assert_eq!(summary.total, 0);
    assert_eq!(summary.average_score, 0);
}
