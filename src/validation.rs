//! Input validation for lookup requests.

use crate::errors::AppError;
use crate::models::{LookupRequest, Provider, ValidatedLookup};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

// ASCII only: `\d` would also accept other Unicode digits.
static CUIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{11}$").expect("CUIT pattern is a valid regex")
});

/// Returns true when `cuit` is exactly 11 ASCII digits.
pub fn is_valid_cuit(cuit: &str) -> bool {
    CUIT_RE.is_match(cuit)
}

/// Text form of a `cuit` field. Integers are accepted and rendered in decimal.
fn cuit_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => n.as_u64().map(|n| n.to_string()),
        _ => None,
    }
}

/// Checks the CUIT and resolves the provider.
///
/// Runs before any outbound call, so a bad CUIT never reaches a provider.
pub fn validate_request(request: &LookupRequest) -> Result<ValidatedLookup, AppError> {
    let cuit = request
        .cuit
        .as_ref()
        .and_then(cuit_text)
        .filter(|c| is_valid_cuit(c))
        .ok_or_else(AppError::invalid_cuit)?;

    Ok(ValidatedLookup {
        cuit,
        provider: Provider::from_fuente(request.fuente_str()),
    })
}
