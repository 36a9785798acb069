//! Integration tests for `HttpWebsiteInspector`: direct fetch, proxy fallback, and the
//! unreachable summary produced when both fail.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lead_scout::config::ScraperConfig;
use lead_scout::workflows::prospecting::domain::Reachability;
use lead_scout::workflows::prospecting::{HttpWebsiteInspector, WebsiteInspector};

const HOMEPAGE: &str = r#"<html>
<head>
  <title>Smile Studio Dental | Leeds</title>
  <meta name="description" content="Friendly family dentists in the heart of Leeds, open six days a week.">
  <meta name="viewport" content="width=device-width, initial-scale=1">
</head>
<body>
  <h1>Smile Studio</h1>
  <p>Call us on 0113 496 0123 or email hello@smilestudio.test</p>
  <a href="/treatments">Treatments</a>
  <a href="/book" class="cta">Book appointment</a>
</body>
</html>"#;

fn inspector(server: &MockServer) -> HttpWebsiteInspector {
    let config = ScraperConfig {
        timeout_secs: 5,
        proxy_url: format!("{}/proxy", server.uri()),
        ..ScraperConfig::default()
    };
    HttpWebsiteInspector::new(&config).expect("failed to build test inspector")
}

#[tokio::test]
async fn direct_fetch_is_summarised() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(HOMEPAGE))
        .mount(&server)
        .await;

    let url = format!("{}/", server.uri());
    let summary = inspector(&server)
        .inspect(&url)
        .await
        .expect("inspection never errors on fetch problems");

    assert!(summary.is_reachable());
    assert_eq!(summary.title, "Smile Studio Dental | Leeds");
    assert!(summary.is_mobile_responsive);
    assert!(!summary.has_ssl);
    assert!(summary.has_contact_info);
    assert!(summary.has_call_to_action);
    assert_eq!(summary.heading_count, 1);
    assert_eq!(summary.link_count, 2);
    assert_eq!(summary.contact_email.as_deref(), Some("hello@smilestudio.test"));
}

#[tokio::test]
async fn proxy_is_used_when_direct_fetch_fails() {
    let server = MockServer::start().await;
    let url = format!("{}/blocked", server.uri());
    Mock::given(method("GET"))
        .and(path("/blocked"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/proxy"))
        .and(query_param("url", url.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({ "contents": HOMEPAGE })))
        .expect(1)
        .mount(&server)
        .await;

    let summary = inspector(&server)
        .inspect(&url)
        .await
        .expect("proxy fallback succeeds");

    assert!(summary.is_reachable());
    assert_eq!(summary.title, "Smile Studio Dental | Leeds");
}

#[tokio::test]
async fn both_fetches_failing_yields_an_unreachable_summary() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/down"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/proxy"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let summary = inspector(&server)
        .inspect(&format!("{}/down", server.uri()))
        .await
        .expect("unreachable sites are not errors");

    assert_eq!(summary.title, "Unable to analyze website");
    assert_eq!(
        summary.reachability,
        Reachability::Unreachable {
            note: "Proxy fetch failed: HTTP 502".to_string()
        }
    );
    assert_eq!(summary.load_time_ms, 0);
    assert!(!summary.has_ssl);
}
