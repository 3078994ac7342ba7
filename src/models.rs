use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

// ============ Providers ============

/// Upstream registry that served (or failed) a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// AFIP public registry (`sr-padron`).
    Afip,
    /// TusFacturasAPP commercial API.
    TusFacturas,
}

impl Provider {
    /// Value of the `fuente` field in normalized results.
    pub fn label(&self) -> &'static str {
        match self {
            Provider::Afip => "AFIP",
            Provider::TusFacturas => "TusFacturasAPP",
        }
    }

    /// Message returned to the caller when the provider answers with a non-success status.
    pub fn upstream_error_message(&self) -> &'static str {
        match self {
            Provider::Afip => "Error en API AFIP",
            Provider::TusFacturas => "Error en TusFacturasAPP",
        }
    }

    /// Selects the provider from the request's `fuente` field.
    ///
    /// Only `"tusfacturas"` picks the commercial provider; anything else falls back to AFIP.
    pub fn from_fuente(fuente: Option<&str>) -> Self {
        match fuente {
            Some("tusfacturas") => Provider::TusFacturas,
            _ => Provider::Afip,
        }
    }
}

// ============ Request ============

/// Body of `POST /api/consultar_cuit`.
///
/// Both fields stay loosely typed so a bad value in one never discards the other.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct LookupRequest {
    /// 11-digit CUIT, as a string or an integer.
    #[schema(value_type = Option<String>, example = "20123456789")]
    pub cuit: Option<Value>,
    /// `"tusfacturas"` to query the commercial provider; any other value means AFIP.
    #[schema(value_type = Option<String>, example = "tusfacturas")]
    pub fuente: Option<Value>,
}

impl LookupRequest {
    /// The `fuente` field when it is a JSON string.
    pub fn fuente_str(&self) -> Option<&str> {
        self.fuente.as_ref().and_then(Value::as_str)
    }
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedLookup {
    pub cuit: String,
    pub provider: Provider,
}

// ============ Normalized output ============

/// Fiscal address fields shared by both result shapes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Address {
    #[schema(value_type = Option<String>)]
    pub direccion: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub localidad: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub provincia: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub codigo_postal: Option<Value>,
}

/// Result served from the AFIP public registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AfipResult {
    #[schema(example = "AFIP")]
    pub fuente: String,
    pub cuit: String,
    #[schema(value_type = Option<String>)]
    pub nombre: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub tipo_persona: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub estado: Option<Value>,
    #[serde(flatten)]
    pub domicilio: Address,
    #[schema(value_type = Vec<Object>)]
    pub actividades: Vec<Value>,
    #[schema(value_type = Vec<Object>)]
    pub impuestos: Vec<Value>,
    /// ISO-8601 UTC timestamp of the lookup.
    pub consulta_fecha: String,
}

/// Result served from TusFacturasAPP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TusFacturasResult {
    #[schema(example = "TusFacturasAPP")]
    pub fuente: String,
    pub cuit: String,
    #[schema(value_type = Option<String>)]
    pub razon_social: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub estado: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub condicion_impositiva: Option<Value>,
    #[serde(flatten)]
    pub domicilio: Address,
    #[schema(value_type = Vec<Object>)]
    pub actividades: Vec<Value>,
    /// ISO-8601 UTC timestamp of the lookup.
    pub consulta_fecha: String,
}

/// Canonical lookup result returned to callers, whichever provider answered.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum NormalizedResult {
    Afip(AfipResult),
    TusFacturas(TusFacturasResult),
}

impl NormalizedResult {
    pub fn provider(&self) -> Provider {
        match self {
            NormalizedResult::Afip(_) => Provider::Afip,
            NormalizedResult::TusFacturas(_) => Provider::TusFacturas,
        }
    }

    pub fn cuit(&self) -> &str {
        match self {
            NormalizedResult::Afip(r) => &r.cuit,
            NormalizedResult::TusFacturas(r) => &r.cuit,
        }
    }
}

// ============ Errors ============

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    /// Raw upstream body, only present on 502 responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detalle: Option<String>,
}
