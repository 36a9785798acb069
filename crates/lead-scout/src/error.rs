use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::prospecting::analysis::AnalysisError;
use crate::workflows::prospecting::export::ExportError;
use crate::workflows::prospecting::inspector::InspectError;
use crate::workflows::prospecting::outreach::CampaignError;
use crate::workflows::prospecting::places::PlacesError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{Map, Value};
use std::fmt;

const NOT_FOUND_SUGGESTION: &str =
    "Try a different location or niche (e.g., restaurants, dentists, plumbers, cafes, gyms)";
const LOOKUP_SUGGESTION: &str =
    "Please check your Google Places API key and try a different location or niche.";
const SETUP_SUGGESTION: &str =
    "Set GOOGLE_PLACES_API_KEY in the environment (or .env) and restart the service";

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Validation(String),
    Analysis(AnalysisError),
    Places(PlacesError),
    Inspector(InspectError),
    Export(ExportError),
    Campaign(CampaignError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Validation(message) => f.write_str(message),
            AppError::Analysis(err) => write!(f, "{}", err),
            AppError::Places(err) => write!(f, "{}", err),
            AppError::Inspector(err) => write!(f, "{}", err),
            AppError::Export(err) => write!(f, "Failed to export CSV: {}", err),
            AppError::Campaign(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Validation(_) => None,
            AppError::Analysis(err) => Some(err),
            AppError::Places(err) => Some(err),
            AppError::Inspector(err) => Some(err),
            AppError::Export(err) => Some(err),
            AppError::Campaign(err) => Some(err),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Analysis(AnalysisError::MissingInput) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Analysis(AnalysisError::SetupRequired { .. })
            | AppError::Places(PlacesError::MissingApiKey) => StatusCode::UNAUTHORIZED,
            AppError::Analysis(AnalysisError::NotFound { .. })
            | AppError::Places(PlacesError::NoResults { .. })
            | AppError::Campaign(CampaignError::NotFound { .. }) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> Value {
        let mut body = Map::new();
        body.insert("success".into(), Value::Bool(false));

        match self {
            AppError::Analysis(AnalysisError::SetupRequired { message }) => {
                body.insert("error".into(), "Google Places API Setup Required".into());
                body.insert("details".into(), message.as_str().into());
                body.insert("suggestion".into(), SETUP_SUGGESTION.into());
                body.insert("setup_required".into(), Value::Bool(true));
            }
            AppError::Places(err @ PlacesError::MissingApiKey) => {
                body.insert("error".into(), "Google Places API Setup Required".into());
                body.insert("details".into(), err.to_string().into());
                body.insert("suggestion".into(), SETUP_SUGGESTION.into());
                body.insert("setup_required".into(), Value::Bool(true));
            }
            AppError::Analysis(AnalysisError::NotFound { .. })
            | AppError::Places(PlacesError::NoResults { .. }) => {
                body.insert("error".into(), self.to_string().into());
                body.insert("suggestion".into(), NOT_FOUND_SUGGESTION.into());
            }
            AppError::Analysis(AnalysisError::Upstream(_))
            | AppError::Places(PlacesError::Upstream { .. } | PlacesError::Http(_)) => {
                body.insert("error".into(), "Failed to find businesses".into());
                body.insert("details".into(), self.to_string().into());
                body.insert("suggestion".into(), LOOKUP_SUGGESTION.into());
            }
            _ if self.status().is_server_error() => {
                body.insert("error".into(), "Failed to process request".into());
                body.insert("details".into(), self.to_string().into());
            }
            _ => {
                body.insert("error".into(), self.to_string().into());
            }
        }

        Value::Object(body)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(self.body())).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<AnalysisError> for AppError {
    fn from(value: AnalysisError) -> Self {
        Self::Analysis(value)
    }
}

impl From<PlacesError> for AppError {
    fn from(value: PlacesError) -> Self {
        Self::Places(value)
    }
}

impl From<InspectError> for AppError {
    fn from(value: InspectError) -> Self {
        Self::Inspector(value)
    }
}

impl From<ExportError> for AppError {
    fn from(value: ExportError) -> Self {
        Self::Export(value)
    }
}

impl From<CampaignError> for AppError {
    fn from(value: CampaignError) -> Self {
        Self::Campaign(value)
    }
}
