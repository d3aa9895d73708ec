// ============================================================================
// TRANSPORT - Una request XHR asíncrona con callback de éxito o error
// ============================================================================
// Sin retry, sin timeout, sin cancelación: una request colgada nunca llama
// a ninguno de los dos callbacks.
// ============================================================================

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, XmlHttpRequest};
use crate::config::CONFIG;
use crate::error::{js_error_message, TransportError};

/// Headers de request: nombre -> valor
pub type Headers = HashMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Por convención GET y DELETE van sin cuerpo
    pub fn carries_body(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = TransportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            other => Err(TransportError::Setup(format!("unsupported HTTP method: {}", other))),
        }
    }
}

/// Respuesta cruda que recibe el callback de error
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
    /// Headers tal como los devuelve getAllResponseHeaders()
    pub headers: String,
    /// Presente cuando un 200 no pudo decodificarse como JSON
    pub decode_error: Option<String>,
}

impl RawResponse {
    pub fn from_xhr(xhr: &XmlHttpRequest) -> Self {
        Self {
            status: xhr.status().unwrap_or(0),
            status_text: xhr.status_text().unwrap_or_default(),
            body: xhr.response_text().ok().flatten().unwrap_or_default(),
            headers: xhr.get_all_response_headers().unwrap_or_default(),
            decode_error: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    pub fn is_malformed(&self) -> bool {
        self.decode_error.is_some()
    }

    /// Buscar un header de respuesta (sin distinguir mayúsculas)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(key, _)| key.trim().eq_ignore_ascii_case(name))
            .map(|(_, value)| value.trim())
    }

    /// Decodificar el cuerpo (útil para payloads de error en JSON)
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, TransportError> {
        serde_json::from_str(&self.body).map_err(|e| TransportError::MalformedResponse {
            status: self.status,
            message: e.to_string(),
        })
    }
}

/// Resultado de una request terminada
#[derive(Debug, PartialEq)]
pub enum Completion<T> {
    Success(T),
    Failure(RawResponse),
}

/// Clasificar una respuesta terminada: solo 200 con JSON válido es éxito.
/// Un 200 con JSON inválido va por el camino de error con `decode_error`.
pub fn complete<T: DeserializeOwned>(mut response: RawResponse) -> Completion<T> {
    if !response.is_success() {
        log::warn!("⚠️ [HTTP] Respuesta {} {}", response.status, response.status_text);
        return Completion::Failure(response);
    }
    match serde_json::from_str::<T>(&response.body) {
        Ok(value) => Completion::Success(value),
        Err(err) => {
            log::error!("❌ [HTTP] Respuesta 200 con JSON inválido: {}", err);
            response.decode_error = Some(err.to_string());
            Completion::Failure(response)
        }
    }
}

/// Headers por defecto + headers de la request (estos ganan, sin distinguir mayúsculas)
pub fn merge_headers(defaults: &Headers, overrides: &Headers) -> Headers {
    let mut merged: Headers = defaults
        .iter()
        .filter(|(name, _)| !overrides.keys().any(|o| o.eq_ignore_ascii_case(name)))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();
    merged.extend(overrides.iter().map(|(name, value)| (name.clone(), value.clone())));
    merged
}

fn setup_error(err: JsValue) -> TransportError {
    TransportError::Setup(js_error_message(&err))
}

/// Enviar una request con cuerpo ya serializado.
/// `on_done` recibe el XHR una sola vez, cuando llega a readyState DONE.
pub fn send_raw<F>(
    method: Method,
    path: &str,
    headers: &Headers,
    body: Option<String>,
    on_done: F,
) -> Result<(), TransportError>
where
    F: FnOnce(XmlHttpRequest) + 'static,
{
    let url = CONFIG.resolve_url(path);
    if body_against_convention(method, body.as_deref()) {
        log::warn!("⚠️ [HTTP] {} {} con cuerpo; muchos servidores lo ignoran", method, url);
    }
    let xhr = XmlHttpRequest::new().map_err(setup_error)?;
    xhr.open_with_async(method.as_str(), &url, true).map_err(setup_error)?;
    for (name, value) in merge_headers(&CONFIG.default_headers, headers) {
        xhr.set_request_header(&name, &value).map_err(setup_error)?;
    }

    // loadend se dispara una única vez (éxito, error de red o abort)
    let handle = xhr.clone();
    let on_loadend = Closure::once_into_js(move |_event: Event| on_done(handle));
    xhr.set_onloadend(Some(on_loadend.unchecked_ref()));

    log::debug!("📡 [HTTP] {} {}", method, url);
    match body.as_deref() {
        Some(text) => xhr.send_with_opt_str(Some(text)),
        None => xhr.send(),
    }
    .map_err(setup_error)
}

/// GET/DELETE con cuerpo: se envía igual, pero se avisa
fn body_against_convention(method: Method, body: Option<&str>) -> bool {
    body.is_some() && !method.carries_body()
}

/// Request genérica. Exactamente uno de los callbacks se ejecuta al terminar:
/// `on_success` con el cuerpo decodificado si el status es 200, `on_error` en otro caso.
pub fn request<T, B, S, E>(
    method: Method,
    path: &str,
    on_success: S,
    on_error: E,
    headers: &Headers,
    body: Option<&B>,
) -> Result<(), TransportError>
where
    T: DeserializeOwned + 'static,
    B: Serialize + ?Sized,
    S: FnOnce(T) + 'static,
    E: FnOnce(RawResponse) + 'static,
{
    let body = body
        .map(serde_json::to_string)
        .transpose()
        .map_err(|e| TransportError::Serialize(e.to_string()))?;

    send_raw(method, path, headers, body, move |xhr| {
        match complete::<T>(RawResponse::from_xhr(&xhr)) {
            Completion::Success(value) => on_success(value),
            Completion::Failure(response) => on_error(response),
        }
    })
}

pub fn get<T, S, E>(path: &str, on_success: S, on_error: E, headers: &Headers) -> Result<(), TransportError>
where
    T: DeserializeOwned + 'static,
    S: FnOnce(T) + 'static,
    E: FnOnce(RawResponse) + 'static,
{
    request::<T, (), S, E>(Method::Get, path, on_success, on_error, headers, None)
}

pub fn post<T, B, S, E>(
    path: &str,
    on_success: S,
    on_error: E,
    headers: &Headers,
    body: &B,
) -> Result<(), TransportError>
where
    T: DeserializeOwned + 'static,
    B: Serialize + ?Sized,
    S: FnOnce(T) + 'static,
    E: FnOnce(RawResponse) + 'static,
{
    request(Method::Post, path, on_success, on_error, headers, Some(body))
}

pub fn put<T, B, S, E>(
    path: &str,
    on_success: S,
    on_error: E,
    headers: &Headers,
    body: &B,
) -> Result<(), TransportError>
where
    T: DeserializeOwned + 'static,
    B: Serialize + ?Sized,
    S: FnOnce(T) + 'static,
    E: FnOnce(RawResponse) + 'static,
{
    request(Method::Put, path, on_success, on_error, headers, Some(body))
}

pub fn patch<T, B, S, E>(
    path: &str,
    on_success: S,
    on_error: E,
    headers: &Headers,
    body: &B,
) -> Result<(), TransportError>
where
    T: DeserializeOwned + 'static,
    B: Serialize + ?Sized,
    S: FnOnce(T) + 'static,
    E: FnOnce(RawResponse) + 'static,
{
    request(Method::Patch, path, on_success, on_error, headers, Some(body))
}

pub fn delete<T, S, E>(path: &str, on_success: S, on_error: E, headers: &Headers) -> Result<(), TransportError>
where
    T: DeserializeOwned + 'static,
    S: FnOnce(T) + 'static,
    E: FnOnce(RawResponse) + 'static,
{
    request::<T, (), S, E>(Method::Delete, path, on_success, on_error, headers, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    fn response(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            status_text: if status == 200 { "OK" } else { "Not Found" }.to_string(),
            body: body.to_string(),
            headers: "content-type: application/json\r\nX-Request-Id: abc-1\r\n".to_string(),
            decode_error: None,
        }
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Item {
        id: u32,
    }

    #[test]
    fn ok_with_json_is_success() {
        let outcome = complete::<serde_json::Value>(response(200, r#"{"id":1}"#));
        assert_eq!(outcome, Completion::Success(json!({ "id": 1 })));

        let typed = complete::<Item>(response(200, r#"{"id":1}"#));
        assert_eq!(typed, Completion::Success(Item { id: 1 }));
    }

    #[test]
    fn non_200_is_failure_with_status() {
        match complete::<serde_json::Value>(response(404, "missing")) {
            Completion::Failure(raw) => {
                assert_eq!(raw.status, 404);
                assert_eq!(raw.body, "missing");
                assert!(!raw.is_malformed());
            }
            Completion::Success(_) => panic!("404 must not reach the success callback"),
        }
        // 201/204 tampoco cuentan como éxito
        assert!(matches!(complete::<serde_json::Value>(response(201, "{}")), Completion::Failure(_)));
        assert!(matches!(complete::<serde_json::Value>(response(0, "")), Completion::Failure(_)));
    }

    #[test]
    fn malformed_ok_body_goes_to_error_path() {
        for body in ["{not json", ""] {
            match complete::<serde_json::Value>(response(200, body)) {
                Completion::Failure(raw) => {
                    assert_eq!(raw.status, 200);
                    assert!(raw.is_malformed());
                }
                Completion::Success(_) => panic!("malformed body must not decode"),
            }
        }
    }

    #[test]
    fn raw_response_helpers() {
        let raw = response(422, r#"{"error":"invalid"}"#);
        assert_eq!(raw.header("X-REQUEST-ID"), Some("abc-1"));
        assert_eq!(raw.header("content-type"), Some("application/json"));
        assert_eq!(raw.header("etag"), None);

        let payload: serde_json::Value = raw.json().unwrap();
        assert_eq!(payload["error"], "invalid");

        let err = response(500, "<html>").json::<serde_json::Value>().unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn method_names() {
        assert_eq!("get".parse::<Method>().unwrap(), Method::Get);
        assert_eq!("Patch".parse::<Method>().unwrap(), Method::Patch);
        assert_eq!(Method::Delete.to_string(), "DELETE");
        assert!("TRACE".parse::<Method>().is_err());
        assert!(Method::Put.carries_body());
        assert!(!Method::Get.carries_body());
        assert!(!Method::Delete.carries_body());
    }

    #[test]
    fn body_on_get_or_delete_is_flagged() {
        assert!(body_against_convention(Method::Get, Some("{}")));
        assert!(body_against_convention(Method::Delete, Some("")));
        assert!(!body_against_convention(Method::Get, None));
        assert!(!body_against_convention(Method::Post, Some("{}")));
        assert!(!body_against_convention(Method::Patch, None));
    }

    #[test]
    fn request_headers_override_defaults() {
        let defaults: Headers = [("Accept", "application/json"), ("X-Client", "dom-kit")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let overrides: Headers = [("accept".to_string(), "text/plain".to_string())].into_iter().collect();

        let merged = merge_headers(&defaults, &overrides);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.get("accept").map(String::as_str), Some("text/plain"));
        assert_eq!(merged.get("X-Client").map(String::as_str), Some("dom-kit"));
        assert!(!merged.contains_key("Accept"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    async fn missing_resource_reaches_error_callback() {
        let promise = js_sys::Promise::new(&mut |resolve, reject| {
            let sent = get::<serde_json::Value, _, _>(
                "/dom-kit-missing-resource.json",
                move |_| {
                    let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("unexpected success"));
                },
                move |raw| {
                    let _ = resolve.call1(&JsValue::NULL, &JsValue::from(raw.status));
                },
                &Headers::new(),
            );
            assert!(sent.is_ok());
        });

        let status = JsFuture::from(promise).await.unwrap();
        assert_eq!(status.as_f64(), Some(404.0));
    }

    #[derive(serde::Deserialize)]
    struct Item {
        id: u32,
    }

    #[wasm_bindgen_test]
    async fn ok_response_reaches_success_callback() {
        let promise = js_sys::Promise::new(&mut |resolve, reject| {
            let sent = get::<Item, _, _>(
                "data:application/json,%7B%22id%22%3A1%7D",
                move |item| {
                    let _ = resolve.call1(&JsValue::NULL, &JsValue::from(item.id));
                },
                move |raw| {
                    let _ = reject.call1(&JsValue::NULL, &JsValue::from(raw.status));
                },
                &Headers::new(),
            );
            assert!(sent.is_ok());
        });

        let id = JsFuture::from(promise).await.unwrap();
        assert_eq!(id.as_f64(), Some(1.0));
    }
}
