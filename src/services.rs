use crate::config::{Config, TusFacturasCredentials};
use crate::errors::{AppError, ResultExt};
use crate::models::Provider;
use reqwest::{Client, Response};
use serde_json::{json, Value};

const AFIP_PERSONA_PATH: &str = "/persona/";
const TUSFACTURAS_CUIT_ENDPOINT: &str = "/clientes/afip-info";

/// Turns a non-success upstream status into `UpstreamError`, keeping the raw body.
async fn check_status(provider: Provider, response: Response) -> Result<Response, AppError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let error_text = response.text().await.unwrap_or_default();
    tracing::warn!("{} returned error {}", provider.label(), status);
    Err(AppError::UpstreamError {
        provider,
        status: status.as_u16(),
        detail: error_text,
    })
}

/// Client for the AFIP public registry (`sr-padron`).
#[derive(Clone)]
pub struct AfipService {
    client: Client,
    base_url: String,
}

impl AfipService {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.afip_base_url.clone(),
        }
    }

    /// Fetches the raw registry record for a CUIT.
    pub async fn fetch_persona(&self, cuit: &str) -> Result<Value, AppError> {
        let url = format!("{}{}{}", self.base_url, AFIP_PERSONA_PATH, cuit);
        tracing::info!("Fetching AFIP persona {}: {}", cuit, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("AFIP request failed")?;

        let response = check_status(Provider::Afip, response).await?;

        let data = response
            .json()
            .await
            .context("Failed to parse AFIP response")?;

        Ok(data)
    }
}

/// Client for the TusFacturasAPP `afip-info` endpoint.
#[derive(Clone)]
pub struct TusFacturasService {
    client: Client,
    base_url: String,
    credentials: Option<TusFacturasCredentials>,
}

impl TusFacturasService {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.tusfacturas_base_url.clone(),
            credentials: config.tusfacturas.clone(),
        }
    }

    /// Fetches the raw `afip-info` record for a CUIT.
    ///
    /// Fails with `ConfigurationError` before touching the network when credentials are missing.
    pub async fn fetch_afip_info(&self, cuit: &str) -> Result<Value, AppError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or_else(AppError::missing_credentials)?;

        let url = format!("{}{}", self.base_url, TUSFACTURAS_CUIT_ENDPOINT);
        tracing::info!("Fetching TusFacturasAPP afip-info for {}: {}", cuit, url);

        let body = json!({
            "cliente": cuit,
            "apikey": credentials.api_key,
            "usertoken": credentials.user_token,
            "apitoken": credentials.api_token,
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("TusFacturasAPP request failed")?;

        let response = check_status(Provider::TusFacturas, response).await?;

        let data = response
            .json()
            .await
            .context("Failed to parse TusFacturasAPP response")?;

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config::from_vars(|_| None).unwrap()
    }

    #[tokio::test]
    async fn test_unconfigured_tusfacturas_fails_without_network() {
        let service = TusFacturasService::new(Client::new(), &test_config());

        let err = service.fetch_afip_info("20123456789").await.unwrap_err();
        assert!(matches!(err, AppError::ConfigurationError(_)));
    }
}
