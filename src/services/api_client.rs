// ============================================================================
// API CLIENT - Variante async (gloo-net) del transporte
// ============================================================================
// Mismas reglas que el transporte con callbacks: solo 200 es éxito y el
// cuerpo se decodifica como JSON. Sin retry ni caché.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use crate::config::{KitConfig, CONFIG};
use crate::error::TransportError;
use crate::services::transport::{merge_headers, Headers, Method};

impl From<Method> for gloo_net::http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Patch => Self::PATCH,
            Method::Delete => Self::DELETE,
        }
    }
}

/// Cliente REST async (stateless)
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: KitConfig,
    headers: Headers,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Cliente con la configuración global
    pub fn new() -> Self {
        Self::with_config(CONFIG.clone())
    }

    pub fn with_config(config: KitConfig) -> Self {
        Self {
            headers: config.default_headers.clone(),
            config,
        }
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_config(KitConfig {
            base_url: base_url.to_string(),
            ..CONFIG.clone()
        })
    }

    /// Header enviado en todas las requests de este cliente
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers = merge_headers(&self.headers, &Headers::from([(name.to_string(), value.to_string())]));
        self
    }

    pub fn url(&self, path: &str) -> String {
        self.config.resolve_url(path)
    }

    fn build<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Request, TransportError>
    where
        B: Serialize + ?Sized,
    {
        let builder = self
            .headers
            .iter()
            .fold(RequestBuilder::new(&self.url(path)).method(method.into()), |builder, (name, value)| {
                builder.header(name, value)
            });

        match body {
            Some(body) => builder.json(body).map_err(|e| TransportError::Serialize(e.to_string())),
            None => builder.build().map_err(|e| TransportError::Setup(e.to_string())),
        }
    }

    /// Enviar request y decodificar la respuesta 200
    pub async fn send<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, TransportError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.build(method, path, body)?;
        log::debug!("📡 [HTTP] {} {}", method, request.url());

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let status_text = response.status_text();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if status != 200 {
            log::warn!("⚠️ [HTTP] {} {} -> {} {}", method, path, status, status_text);
            return Err(TransportError::Status { status, status_text, body: text });
        }

        serde_json::from_str::<T>(&text).map_err(|e| {
            log::error!("❌ [HTTP] {} {}: JSON inválido: {}", method, path, e);
            TransportError::MalformedResponse { status, message: e.to_string() }
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, TransportError> {
        self.send::<T, ()>(Method::Get, path, None).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, TransportError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(Method::Post, path, Some(body)).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, TransportError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(Method::Put, path, Some(body)).await
    }

    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, TransportError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(Method::Patch, path, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, TransportError> {
        self.send::<T, ()>(Method::Delete, path, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_resolve_against_client_base() {
        let client = ApiClient::with_base_url("https://api.example.com/");
        assert_eq!(client.url("/items"), "https://api.example.com/items");
        assert_eq!(client.url("https://other.example.com/x"), "https://other.example.com/x");
    }

    #[test]
    fn client_headers_replace_case_insensitively() {
        let client = ApiClient::with_config(KitConfig::default())
            .header("Authorization", "Bearer a")
            .header("authorization", "Bearer b");
        assert_eq!(client.headers.len(), 1);
        assert_eq!(client.headers.get("authorization").map(String::as_str), Some("Bearer b"));
    }
}
