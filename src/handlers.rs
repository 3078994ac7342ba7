use crate::config::Config;
use crate::errors::AppError;
use crate::lookup::LookupService;
use crate::models::{ErrorBody, LookupRequest, NormalizedResult};
use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
///
/// Built once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration, including provider credentials.
    pub config: Config,
    /// Lookup orchestration over both providers.
    pub lookup: LookupService,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client = reqwest::Client::new();
        let lookup = LookupService::new(client, &config);
        Self { config, lookup }
    }
}

/// Health check endpoint.
///
/// Returns the service status and version.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// POST /api/consultar_cuit
///
/// Looks up a CUIT in AFIP (default) or TusFacturasAPP (`fuente: "tusfacturas"`)
/// and returns the normalized record.
///
/// A missing or unparseable body is treated like a body without `cuit`.
#[utoipa::path(
    post,
    path = "/api/consultar_cuit",
    request_body = LookupRequest,
    responses(
        (status = 200, description = "Normalized taxpayer record", body = NormalizedResult),
        (status = 400, description = "CUIT missing or not 11 digits", body = ErrorBody),
        (status = 500, description = "Missing provider credentials or internal error", body = ErrorBody),
        (status = 502, description = "Provider answered with a non-success status", body = ErrorBody)
    )
)]
pub async fn consultar_cuit(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LookupRequest>, JsonRejection>,
) -> Result<Json<NormalizedResult>, AppError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!("Unreadable lookup body: {}", rejection.body_text());
            LookupRequest::default()
        }
    };
    tracing::info!(
        "POST /api/consultar_cuit - cuit: {:?}, fuente: {:?}",
        request.cuit,
        request.fuente
    );

    let result = state.lookup.handle(&request).await?;
    Ok(Json(result))
}
