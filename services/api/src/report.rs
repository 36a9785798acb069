use crate::infra::build_analyzer;
use clap::Args;
use lead_scout::config::AppConfig;
use lead_scout::error::AppError;
use lead_scout::telemetry;
use lead_scout::workflows::prospecting::{export_csv, AnalysisReport, AnalysisRequest};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Town or area to search, e.g. "Leeds"
    #[arg(long)]
    pub(crate) location: String,
    /// Business category to search for, e.g. "dentists"
    #[arg(long)]
    pub(crate) niche: String,
    /// Write the campaign spreadsheet to this path
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

pub(crate) async fn run_analysis_report(args: AnalyzeArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let analyzer = build_analyzer(&config)?;
    let request = AnalysisRequest {
        location: args.location,
        niche: args.niche,
    };
    let report = analyzer.analyze(&request).await?;
    print_report(&report);

    if let Some(path) = args.csv {
        let export = export_csv(&report.businesses, &report.niche, &report.location)?;
        std::fs::write(&path, export.content)?;
        println!("\nCSV written to {} ({})", path.display(), export.filename);
    }

    Ok(())
}

fn print_report(report: &AnalysisReport) {
    let summary = &report.summary;
    println!("Lead Scout: {} in {}", report.niche, report.location);
    println!(
        "  analyzed {} businesses, {} need improvement, {} have websites, average score {}",
        summary.total, summary.needs_improvement, summary.has_websites, summary.average_score
    );

    for business in &report.businesses {
        println!(
            "\n{:<4} {} [{} / {}]",
            business.score,
            business.name,
            business.priority.label(),
            business.website.as_deref().unwrap_or("no website")
        );
        for issue in business.issues.iter().take(3) {
            println!("     - {issue}");
        }
        if let Some(url) = &business.redesign_url {
            println!("     redesign: {url}");
        }
    }
}
