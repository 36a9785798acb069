use lead_scout::config::AppConfig;
use lead_scout::error::AppError;
use lead_scout::workflows::prospecting::{
    GooglePlacesClient, HttpWebsiteInspector, PlacesDirectory, ProspectAnalyzer, WebsiteInspector,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Analyzer with its collaborators erased, so routes can be exercised with fakes.
pub(crate) type SharedAnalyzer =
    ProspectAnalyzer<Arc<dyn PlacesDirectory>, Arc<dyn WebsiteInspector>>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) analyzer: Arc<SharedAnalyzer>,
}

pub(crate) fn build_analyzer(config: &AppConfig) -> Result<SharedAnalyzer, AppError> {
    let places: Arc<dyn PlacesDirectory> = Arc::new(GooglePlacesClient::new(
        &config.places,
        config.scraper.timeout_secs,
    )?);
    let inspector: Arc<dyn WebsiteInspector> =
        Arc::new(HttpWebsiteInspector::new(&config.scraper)?);

    if config.places.api_key.is_none() {
        tracing::warn!("GOOGLE_PLACES_API_KEY is not set; analysis requests will report setup required");
    }

    Ok(ProspectAnalyzer::new(places, inspector).with_max_businesses(config.scraper.max_businesses))
}
