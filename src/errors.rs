use crate::models::{ErrorBody, Provider};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::fmt;

pub const INVALID_CUIT_MESSAGE: &str = "CUIT inválido (11 dígitos)";
pub const MISSING_CREDENTIALS_MESSAGE: &str = "Faltan credenciales TusFacturasAPP";
pub const INTERNAL_ERROR_MESSAGE: &str = "Error interno del servidor";

/// Application-specific error types.
#[derive(Debug, Clone)]
pub enum AppError {
    /// Caller sent a malformed or missing CUIT.
    InvalidInput(String),
    /// Server-side setup needed for the request is missing.
    ConfigurationError(String),
    /// A provider answered with a non-success status.
    UpstreamError {
        provider: Provider,
        status: u16,
        /// Raw upstream body, forwarded to the caller as `detalle`.
        detail: String,
    },
    /// Anything else. The message is logged, never returned.
    InternalError(String),
}

impl AppError {
    pub fn invalid_cuit() -> Self {
        AppError::InvalidInput(INVALID_CUIT_MESSAGE.to_string())
    }

    pub fn missing_credentials() -> Self {
        AppError::ConfigurationError(MISSING_CREDENTIALS_MESSAGE.to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::ConfigurationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UpstreamError { .. } => StatusCode::BAD_GATEWAY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Body sent to the caller. Internal details never leave the server.
    pub fn body(&self) -> ErrorBody {
        match self {
            AppError::InvalidInput(msg) | AppError::ConfigurationError(msg) => ErrorBody {
                error: msg.clone(),
                detalle: None,
            },
            AppError::UpstreamError {
                provider, detail, ..
            } => ErrorBody {
                error: provider.upstream_error_message().to_string(),
                detalle: Some(detail.clone()),
            },
            AppError::InternalError(_) => ErrorBody {
                error: INTERNAL_ERROR_MESSAGE.to_string(),
                detalle: None,
            },
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AppError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::UpstreamError {
                provider, status, ..
            } => write!(f, "{} returned status {}", provider.label(), status),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    /// Converts the error into an HTTP response.
    ///
    /// Logs according to severity before building the JSON body.
    fn into_response(self) -> Response {
        match &self {
            AppError::InvalidInput(msg) => tracing::debug!("Rejected lookup: {}", msg),
            AppError::ConfigurationError(msg) => tracing::error!("Configuration error: {}", msg),
            AppError::UpstreamError {
                provider,
                status,
                detail,
            } => tracing::warn!(
                "{} returned status {}: {}",
                provider.label(),
                status,
                detail
            ),
            AppError::InternalError(msg) => {
                tracing::error!("Error endpoint /api/consultar_cuit: {}", msg)
            }
        }

        (self.status_code(), Json(self.body())).into_response()
    }
}

/// Extension trait for adding context to errors.
/// Similar to `anyhow::Context` but for our `AppError` type.
/// Transport and decode failures become `InternalError` with the context prepended.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T, AppError>;
}

impl<T> ResultExt<T> for Result<T, reqwest::Error> {
    fn context(self, context: impl Into<String>) -> Result<T, AppError> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", context.into(), e)))
    }
}
