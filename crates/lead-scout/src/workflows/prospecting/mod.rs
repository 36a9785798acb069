//! Local-business prospecting: discover businesses for a niche and location, score their
//! websites, project uplift, and draft outreach and redesign material for each one.

pub mod analysis;
pub mod domain;
pub mod export;
pub mod inspector;
pub mod outreach;
pub mod places;
pub mod redesign;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use analysis::{
    analyze_business, failed_business, AnalysisError, AnalysisReport, AnalysisRequest,
    AnalysisSummary, ProspectAnalyzer,
};
pub use domain::{
    location_from_address, AnalyzedBusiness, BusinessRecord, CategoryScores, ComposedMessages,
    Priority, Reachability, RoiEstimate, ScoreResult, WebsiteAnalysisView, WebsiteSummary,
};
pub use export::{export_csv, export_csv_dated, CsvExport, ExportError, CSV_HEADERS};
pub use inspector::{HttpWebsiteInspector, InspectError, WebsiteInspector};
pub use places::{GooglePlacesClient, PlacesDirectory, PlacesError};
pub use scoring::{estimate_roi, score_website};
