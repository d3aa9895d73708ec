// ============================================================================
// ERRORES - Taxonomía de errores de DOM y transporte
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errores del constructor de elementos
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// Tag vacío/ausente, destino nulo o valor de hijos no soportado
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("no document available")]
    NoDocument,

    /// Una llamada nativa del DOM lanzó una excepción
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl DomError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(js_error_message(&value))
    }
}

impl From<DomError> for JsValue {
    fn from(err: DomError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Errores del transporte HTTP
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Fallo síncrono antes de enviar (open, headers, send)
    #[error("request setup failed: {0}")]
    Setup(String),

    #[error("could not serialize request body: {0}")]
    Serialize(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status} {status_text}: {body}")]
    Status {
        status: u16,
        status_text: String,
        body: String,
    },

    /// Respuesta 200 cuyo cuerpo no es JSON válido
    #[error("malformed response (HTTP {status}): {message}")]
    MalformedResponse { status: u16, message: String },
}

impl TransportError {
    /// Status HTTP asociado, si lo hay
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } | Self::MalformedResponse { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<TransportError> for JsValue {
    fn from(err: TransportError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Extraer un mensaje legible de una excepción JS
pub(crate) fn js_error_message(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
