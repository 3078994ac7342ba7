/// CUIT lookup orchestration
///
/// 1. Validate the CUIT and resolve the provider
/// 2. Fetch the raw record from AFIP or TusFacturasAPP
/// 3. Normalize it into the result shape for that provider
use crate::config::Config;
use crate::errors::AppError;
use crate::models::{LookupRequest, NormalizedResult, Provider, ValidatedLookup};
use crate::normalize::{afip_result, tusfacturas_result};
use crate::services::{AfipService, TusFacturasService};
use crate::validation::validate_request;
use chrono::Utc;
use reqwest::Client;

#[derive(Clone)]
pub struct LookupService {
    afip: AfipService,
    tusfacturas: TusFacturasService,
}

impl LookupService {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            afip: AfipService::new(client.clone(), config),
            tusfacturas: TusFacturasService::new(client, config),
        }
    }

    /// Validates and runs a lookup. Validation errors short-circuit before any outbound call.
    pub async fn handle(&self, request: &LookupRequest) -> Result<NormalizedResult, AppError> {
        let validated = validate_request(request)?;
        self.lookup(&validated).await
    }

    /// Runs an already-validated lookup against the selected provider.
    pub async fn lookup(&self, request: &ValidatedLookup) -> Result<NormalizedResult, AppError> {
        tracing::info!(
            "Looking up CUIT {} via {}",
            request.cuit,
            request.provider.label()
        );

        let result = match request.provider {
            Provider::TusFacturas => {
                let payload = self.tusfacturas.fetch_afip_info(&request.cuit).await?;
                NormalizedResult::TusFacturas(tusfacturas_result(
                    &request.cuit,
                    &payload,
                    Utc::now(),
                )?)
            }
            Provider::Afip => {
                let payload = self.afip.fetch_persona(&request.cuit).await?;
                NormalizedResult::Afip(afip_result(&request.cuit, &payload, Utc::now())?)
            }
        };

        tracing::info!(
            "✓ CUIT {} resolved via {}",
            result.cuit(),
            result.provider().label()
        );
        Ok(result)
    }
}
