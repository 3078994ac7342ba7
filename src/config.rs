use std::fmt;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_AFIP_BASE_URL: &str = "https://soa.afip.gob.ar/sr-padron/v2";
pub const DEFAULT_TUSFACTURAS_BASE_URL: &str = "https://www.tusfacturas.app/app/api/v2";
pub const DEFAULT_STATIC_DIR: &str = "public";

/// API credentials for TusFacturasAPP.
///
/// Only built when all three values are present. `Debug` never prints the secrets.
#[derive(Clone, PartialEq, Eq)]
pub struct TusFacturasCredentials {
    pub api_key: String,
    pub user_token: String,
    pub api_token: String,
}

impl fmt::Debug for TusFacturasCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TusFacturasCredentials")
            .field("api_key", &"[REDACTED]")
            .field("user_token", &"[REDACTED]")
            .field("api_token", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub afip_base_url: String,
    pub tusfacturas_base_url: String,
    /// `None` disables the TusFacturasAPP branch (requests get a configuration error).
    pub tusfacturas: Option<TusFacturasCredentials>,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset
        let non_blank = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        let port = match non_blank("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            None => DEFAULT_PORT,
        };

        let afip_base_url = base_url(
            "AFIP_BASE_URL",
            non_blank("AFIP_BASE_URL"),
            DEFAULT_AFIP_BASE_URL,
        )?;
        let tusfacturas_base_url = base_url(
            "TFA_BASE_URL",
            non_blank("TFA_BASE_URL"),
            DEFAULT_TUSFACTURAS_BASE_URL,
        )?;

        let api_key = non_blank("TFA_APIKEY");
        let user_token = non_blank("TFA_USERTOKEN");
        let api_token = non_blank("TFA_APITOKEN");
        let tusfacturas = match (api_key, user_token, api_token) {
            (Some(api_key), Some(user_token), Some(api_token)) => Some(TusFacturasCredentials {
                api_key,
                user_token,
                api_token,
            }),
            (None, None, None) => None,
            _ => {
                tracing::warn!(
                    "TusFacturasAPP credentials are incomplete (need TFA_APIKEY, TFA_USERTOKEN and TFA_APITOKEN); provider disabled"
                );
                None
            }
        };

        let static_dir = non_blank("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

        let config = Self {
            port,
            afip_base_url,
            tusfacturas_base_url,
            tusfacturas,
            static_dir,
        };

        // Log configuration (without sensitive values)
        tracing::debug!("AFIP Base URL: {}", config.afip_base_url);
        tracing::debug!("TusFacturasAPP Base URL: {}", config.tusfacturas_base_url);
        tracing::debug!(
            "TusFacturasAPP credentials configured: {}",
            config.tusfacturas.is_some()
        );
        tracing::debug!("Static dir: {}", config.static_dir);
        tracing::debug!("Server Port: {}", config.port);

        Ok(config)
    }
}

fn base_url(key: &str, value: Option<String>, default: &str) -> anyhow::Result<String> {
    let url = value.unwrap_or_else(|| default.to_string());
    let url = url.trim();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        anyhow::bail!("{} must start with http:// or https://", key);
    }
    Ok(url.trim_end_matches('/').to_string())
}
