use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use lead_scout::error::AppError;
use lead_scout::workflows::prospecting::outreach::{
    campaign_roi, create_campaign, generate_message, standard_templates, CampaignRoi,
    GeneratedMessage, OutreachCampaign, OutreachTemplate, RenderContext, TemplateSummary,
};
use lead_scout::workflows::prospecting::redesign::{generate_redesign, CopyBlock};
use lead_scout::workflows::prospecting::{
    export_csv, AnalysisReport, AnalysisRequest, AnalyzedBusiness, BusinessRecord,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/businesses/analyze", post(analyze_endpoint))
        .route("/api/v1/export/csv", post(export_csv_endpoint))
        .route("/api/v1/outreach/campaign", post(campaign_endpoint))
        .route("/api/v1/redesign", post(redesign_endpoint))
        .layer(Extension(state))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[derive(Debug, Serialize)]
pub(crate) struct AnalyzeResponse {
    pub(crate) success: bool,
    #[serde(flatten)]
    pub(crate) report: AnalysisReport,
}

pub(crate) async fn analyze_endpoint(
    Extension(state): Extension<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let report = state.analyzer.analyze(&request).await?;
    Ok(Json(AnalyzeResponse {
        success: true,
        report,
    }))
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExportRequest {
    #[serde(default)]
    pub(crate) businesses: Option<Vec<AnalyzedBusiness>>,
    #[serde(default)]
    pub(crate) niche: String,
    #[serde(default)]
    pub(crate) location: String,
}

pub(crate) async fn export_csv_endpoint(
    Json(request): Json<ExportRequest>,
) -> Result<impl IntoResponse, AppError> {
    let businesses = request
        .businesses
        .ok_or_else(|| AppError::Validation("Invalid businesses data".to_string()))?;
    let export = export_csv(&businesses, &request.niche, &request.location)?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", export.filename),
            ),
        ],
        export.content,
    ))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum CampaignAction {
    #[default]
    Create,
    GenerateMessages,
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CampaignRequest {
    #[serde(default)]
    pub(crate) action: CampaignAction,
    #[serde(default)]
    pub(crate) businesses: Vec<AnalyzedBusiness>,
    #[serde(default)]
    pub(crate) niche: String,
    #[serde(default)]
    pub(crate) location: String,
    #[serde(default)]
    pub(crate) business_id: String,
    #[serde(default)]
    pub(crate) template_id: String,
    #[serde(default)]
    pub(crate) additional_data: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum CampaignResponse {
    Created {
        success: bool,
        campaign: OutreachCampaign,
        roi: CampaignRoi,
        templates: &'static [OutreachTemplate],
    },
    Message {
        success: bool,
        message: String,
        template: TemplateSummary,
    },
}

pub(crate) async fn campaign_endpoint(
    Json(request): Json<CampaignRequest>,
) -> Result<Json<CampaignResponse>, AppError> {
    let CampaignRequest {
        action,
        businesses,
        niche,
        location,
        business_id,
        template_id,
        additional_data,
    } = request;

    match action {
        CampaignAction::Create => {
            let campaign = create_campaign(&businesses, &niche, &location);
            tracing::info!(campaign = %campaign.id, businesses = businesses.len(), "created outreach campaign");
            Ok(Json(CampaignResponse::Created {
                success: true,
                campaign,
                roi: campaign_roi(&businesses),
                templates: standard_templates(),
            }))
        }
        CampaignAction::GenerateMessages => {
            let context = RenderContext {
                niche: Some(niche),
                location: Some(location),
            };
            let GeneratedMessage { message, template } = generate_message(
                &businesses,
                &business_id,
                &template_id,
                &context,
                &additional_data,
            )?;
            Ok(Json(CampaignResponse::Message {
                success: true,
                message,
                template,
            }))
        }
        CampaignAction::Unsupported => Err(AppError::Validation("Invalid action".to_string())),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RedesignRequest {
    #[serde(default)]
    pub(crate) business: Option<BusinessRecord>,
    #[serde(default)]
    pub(crate) website_score: Option<u8>,
    #[serde(default)]
    pub(crate) niche: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RedesignSummary {
    pub(crate) id: String,
    pub(crate) business_name: String,
    pub(crate) url: String,
    pub(crate) improvements: Vec<String>,
    pub(crate) design_notes: Vec<String>,
    pub(crate) copy: CopyBlock,
}

pub(crate) async fn redesign_endpoint(
    Json(request): Json<RedesignRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let (Some(business), Some(score), Some(niche)) = (
        request.business,
        request.website_score,
        request.niche.filter(|niche| !niche.trim().is_empty()),
    ) else {
        return Err(AppError::Validation(
            "Missing required parameters".to_string(),
        ));
    };

    let mockup = generate_redesign(&business, score, &niche);
    tracing::info!(business = %mockup.business_name, url = %mockup.url, "generated redesign");

    let template = RedesignSummary {
        id: mockup.id,
        business_name: mockup.business_name,
        url: mockup.url,
        improvements: mockup.improvements,
        design_notes: mockup.design_notes,
        copy: mockup.copy,
    };
    Ok(Json(json!({ "success": true, "template": template })))
}
