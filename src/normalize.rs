//! Maps provider payloads onto the normalized result shapes.
//!
//! Upstream payloads are loosely typed: fields go missing, come back empty, or
//! move between alternative names. Every field is read through the helpers
//! below, which treat `null`, `false`, `0` and `""` as absent and walk an
//! ordered list of candidate keys.

use crate::errors::AppError;
use crate::models::{Address, AfipResult, Provider, TusFacturasResult};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

/// Whether an upstream value counts as present.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// First present value among `keys`, in order.
pub fn first_present(object: &Value, keys: &[&str]) -> Option<Value> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find(|value| is_present(value))
        .cloned()
}

/// Value at a nested `path`, if every step exists and the leaf is present.
pub fn nested_field(object: &Value, path: &[&str]) -> Option<Value> {
    path.iter()
        .try_fold(object, |current, key| current.get(*key))
        .filter(|value| is_present(value))
        .cloned()
}

/// Array at `key`; anything else (including a missing key) yields an empty list.
pub fn sequence_field(object: &Value, key: &str) -> Vec<Value> {
    match object.get(key) {
        Some(Value::Array(items)) => items.clone(),
        _ => Vec::new(),
    }
}

/// AFIP answers either `{ success, data: {...} }` or the bare person object.
pub fn unwrap_data(payload: &Value) -> &Value {
    match payload.get("data") {
        Some(inner) if is_present(inner) => inner,
        _ => payload,
    }
}

/// ISO-8601 UTC with millisecond precision, e.g. `2024-05-01T12:30:00.000Z`.
pub fn query_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// A `null` payload has no fields to read. Other non-object payloads map to all-null results.
fn reject_null(provider: Provider, payload: &Value) -> Result<(), AppError> {
    if payload.is_null() {
        Err(AppError::InternalError(format!(
            "{} returned a null payload",
            provider.label()
        )))
    } else {
        Ok(())
    }
}

/// Builds the AFIP result from a registry payload (wrapped or bare).
pub fn afip_result(
    cuit: &str,
    payload: &Value,
    now: DateTime<Utc>,
) -> Result<AfipResult, AppError> {
    reject_null(Provider::Afip, payload)?;
    let persona = unwrap_data(payload);
    let domicilio = |field: &str| nested_field(persona, &["domicilioFiscal", field]);

    Ok(AfipResult {
        fuente: Provider::Afip.label().to_string(),
        cuit: cuit.to_string(),
        nombre: first_present(persona, &["nombre", "razonSocial"]),
        tipo_persona: first_present(persona, &["tipoPersona"]),
        estado: first_present(persona, &["estadoClave", "estado"]),
        domicilio: Address {
            direccion: domicilio("direccion"),
            localidad: domicilio("localidad"),
            provincia: domicilio("descripcionProvincia"),
            codigo_postal: domicilio("codPostal"),
        },
        actividades: sequence_field(persona, "actividades"),
        impuestos: sequence_field(persona, "impuestos"),
        consulta_fecha: query_timestamp(now),
    })
}

/// Builds the TusFacturasAPP result from an `afip-info` payload.
pub fn tusfacturas_result(
    cuit: &str,
    payload: &Value,
    now: DateTime<Utc>,
) -> Result<TusFacturasResult, AppError> {
    reject_null(Provider::TusFacturas, payload)?;

    Ok(TusFacturasResult {
        fuente: Provider::TusFacturas.label().to_string(),
        cuit: cuit.to_string(),
        razon_social: first_present(payload, &["razon_social"]),
        estado: first_present(payload, &["estado"]),
        condicion_impositiva: first_present(payload, &["condicion_impositiva"]),
        domicilio: Address {
            direccion: first_present(payload, &["direccion"]),
            localidad: first_present(payload, &["localidad"]),
            provincia: first_present(payload, &["provincia"]),
            codigo_postal: first_present(payload, &["codigopostal"]),
        },
        actividades: sequence_field(payload, "actividad"),
        consulta_fecha: query_timestamp(now),
    })
}
