use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use lead_scout::workflows::prospecting::{
    AnalysisError, AnalysisRequest, BusinessRecord, InspectError, PlacesDirectory, PlacesError,
    ProspectAnalyzer, WebsiteInspector, WebsiteSummary,
};

struct FakeDirectory {
    outcome: Mutex<Option<Result<Vec<BusinessRecord>, PlacesError>>>,
    calls: AtomicUsize,
}

impl FakeDirectory {
    fn returning(records: Vec<BusinessRecord>) -> Self {
        Self {
            outcome: Mutex::new(Some(Ok(records))),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing(err: PlacesError) -> Self {
        Self {
            outcome: Mutex::new(Some(Err(err))),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl PlacesDirectory for FakeDirectory {
    async fn search(
        &self,
        _location: &str,
        _niche: &str,
    ) -> Result<Vec<BusinessRecord>, PlacesError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome
            .lock()
            .expect("outcome mutex")
            .take()
            .expect("search called once")
    }
}

/// Fails for URLs containing `broken`; later businesses answer faster than earlier ones.
#[derive(Default)]
struct FakeInspector {
    inspected: Mutex<Vec<String>>,
}

#[async_trait]
impl WebsiteInspector for FakeInspector {
    async fn inspect(&self, url: &str) -> Result<WebsiteSummary, InspectError> {
        self.inspected
            .lock()
            .expect("inspected mutex")
            .push(url.to_string());

        let ordinal: u64 = url
            .trim_end_matches(".test")
            .rsplit('-')
            .next()
            .and_then(|n| n.parse().ok())
            .unwrap_or(0);
        tokio::time::sleep(Duration::from_millis(40u64.saturating_sub(ordinal * 4))).await;

        if url.contains("broken") {
            return Err(InspectError::Failed {
                url: url.to_string(),
                message: "connection reset".to_string(),
            });
        }
        Ok(healthy_summary(url))
    }
}

fn healthy_summary(url: &str) -> WebsiteSummary {
    WebsiteSummary {
        title: "Shop | Family business in Leeds".to_string(),
        meta_description:
            "Independent family business serving Leeds and the surrounding area for thirty years."
                .to_string(),
        body_excerpt: "Independent family business serving Leeds and the surrounding area for \
                       thirty years, with friendly staff and fair prices."
            .to_string(),
        has_ssl: url.starts_with("https://"),
        load_time_ms: 600,
        is_mobile_responsive: true,
        has_contact_info: true,
        has_call_to_action: true,
        heading_count: 3,
        image_count: 2,
        link_count: 9,
        ..WebsiteSummary::default()
    }
}

fn shop(n: usize, website: Option<String>) -> BusinessRecord {
    BusinessRecord {
        name: format!("Shop {n}"),
        website,
        address: format!("{n} Briggate, Leeds, LS1 6HD"),
        rating: Some(4.2),
        review_count: Some(30),
        ..BusinessRecord::default()
    }
}

fn shops(count: usize) -> Vec<BusinessRecord> {
    (1..=count)
        .map(|n| shop(n, Some(format!("https://shop-{n}.test"))))
        .collect()
}

fn request() -> AnalysisRequest {
    AnalysisRequest {
        location: " Leeds ".to_string(),
        niche: "shops".to_string(),
    }
}

#[tokio::test]
async fn failing_business_becomes_fallback_without_disturbing_the_batch() {
    let mut records = shops(8);
    records[2].website = Some("https://broken-3.test".to_string());
    let analyzer = ProspectAnalyzer::new(
        FakeDirectory::returning(records),
        FakeInspector::default(),
    );

    let report = analyzer.analyze(&request()).await.expect("analysis succeeds");

    assert_eq!(report.businesses.len(), 8);
    let names: Vec<_> = report.businesses.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(
        names,
        ["Shop 1", "Shop 2", "Shop 3", "Shop 4", "Shop 5", "Shop 6", "Shop 7", "Shop 8"]
    );

    let failed = &report.businesses[2];
    assert_eq!(failed.id, "business-3");
    assert_eq!(failed.score, 30);
    assert!(failed.roi.is_none());
    assert!(failed.website_analysis.is_none());

    for business in report.businesses.iter().filter(|b| b.id != "business-3") {
        assert_eq!(business.score, 100, "{} should score full marks", business.name);
        assert!(business.website_analysis.is_some());
    }

    assert_eq!(report.location, "Leeds");
    assert_eq!(report.summary.total, 8);
    assert_eq!(report.summary.needs_improvement, 1);
    assert_eq!(report.summary.has_websites, 8);
    // (7 * 100 + 30) / 8 = 91.25
    assert_eq!(report.summary.average_score, 91);
}

#[tokio::test]
async fn batch_is_truncated_to_the_configured_maximum() {
    let inspector = Arc::new(FakeInspector::default());
    let analyzer = ProspectAnalyzer::new(FakeDirectory::returning(shops(12)), inspector.clone());

    let report = analyzer.analyze(&request()).await.expect("analysis succeeds");

    assert_eq!(report.businesses.len(), 8);
    assert_eq!(report.businesses[7].name, "Shop 8");
    assert_eq!(inspector.inspected.lock().expect("inspected mutex").len(), 8);

    let smaller = ProspectAnalyzer::new(FakeDirectory::returning(shops(12)), FakeInspector::default())
        .with_max_businesses(3);
    let report = smaller.analyze(&request()).await.expect("analysis succeeds");
    assert_eq!(report.businesses.len(), 3);
}

#[tokio::test]
async fn businesses_without_websites_are_not_inspected() {
    let inspector = Arc::new(FakeInspector::default());
    let records = vec![shop(1, None), shop(2, Some("   ".to_string()))];
    let analyzer = ProspectAnalyzer::new(FakeDirectory::returning(records), inspector.clone());

    let report = analyzer.analyze(&request()).await.expect("analysis succeeds");

    assert!(inspector.inspected.lock().expect("inspected mutex").is_empty());
    assert!(report.businesses.iter().all(|b| b.score == 25));
    assert_eq!(report.summary.has_websites, 0);
}

#[tokio::test]
async fn missing_input_is_rejected_before_searching() {
    let directory = Arc::new(FakeDirectory::returning(shops(1)));
    let analyzer = ProspectAnalyzer::new(directory.clone(), FakeInspector::default());

    let err = analyzer
        .analyze(&AnalysisRequest {
            location: "Leeds".to_string(),
            niche: "  ".to_string(),
        })
        .await
        .expect_err("niche is required");

    assert!(matches!(err, AnalysisError::MissingInput));
    assert_eq!(directory.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn places_failures_map_to_analysis_errors() {
    let analyzer = ProspectAnalyzer::new(
        FakeDirectory::failing(PlacesError::MissingApiKey),
        FakeInspector::default(),
    );
    let err = analyzer.analyze(&request()).await.expect_err("no key");
    assert!(matches!(err, AnalysisError::SetupRequired { .. }));

    let analyzer = ProspectAnalyzer::new(
        FakeDirectory::failing(PlacesError::NoResults {
            niche: "shops".to_string(),
            location: "Leeds".to_string(),
        }),
        FakeInspector::default(),
    );
    let err = analyzer.analyze(&request()).await.expect_err("nothing found");
    assert_eq!(err.to_string(), "No shops businesses found in Leeds");
}

#[tokio::test]
async fn empty_search_is_not_found() {
    let analyzer = ProspectAnalyzer::new(FakeDirectory::returning(Vec::new()), FakeInspector::default());

    let err = analyzer.analyze(&request()).await.expect_err("no businesses");

    assert!(matches!(err, AnalysisError::NotFound { .. }));
}
