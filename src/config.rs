use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitConfig {
    /// Prefijo para paths relativos; vacío = se usan tal cual
    pub base_url: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub default_headers: HashMap<String, String>,
}

impl Default for KitConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            enable_logging: true,
            log_level: "info".to_string(),
            default_headers: HashMap::new(),
        }
    }
}

impl KitConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            base_url: option_env!("DOM_KIT_BASE_URL").unwrap_or("").to_string(),
            enable_logging: option_env!("DOM_KIT_ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            log_level: option_env!("DOM_KIT_LOG_LEVEL").unwrap_or("info").to_string(),
            default_headers: parse_header_list(option_env!("DOM_KIT_DEFAULT_HEADERS").unwrap_or("")),
        }
    }

    /// Nivel de log para wasm-logger (info si el valor no se reconoce)
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Resolver un path contra `base_url`.
    /// URLs absolutas (con esquema o `//`) y configuraciones sin base se devuelven sin tocar.
    pub fn resolve_url(&self, path: &str) -> String {
        if self.base_url.is_empty() || is_absolute_url(path) {
            return path.to_string();
        }
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}

fn is_absolute_url(path: &str) -> bool {
    if path.starts_with("//") {
        return true;
    }
    match path.split_once("://") {
        Some((scheme, _)) => {
            !scheme.is_empty()
                && scheme.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

/// Formato `Nombre:Valor;Nombre:Valor`; entradas sin `:` se ignoran
pub fn parse_header_list(raw: &str) -> HashMap<String, String> {
    raw.split(';')
        .filter_map(|pair| pair.split_once(':'))
        .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
        .filter(|(name, _)| !name.is_empty())
        .collect()
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: KitConfig = KitConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_base(base: &str) -> KitConfig {
        KitConfig { base_url: base.to_string(), ..KitConfig::default() }
    }

    #[test]
    fn paths_untouched_without_base_url() {
        let config = KitConfig::default();
        assert_eq!(config.resolve_url("/items"), "/items");
        assert_eq!(config.resolve_url("items?id=1"), "items?id=1");
    }

    #[test]
    fn relative_paths_join_base_url() {
        let config = with_base("https://api.example.com/v1/");
        assert_eq!(config.resolve_url("/items"), "https://api.example.com/v1/items");
        assert_eq!(config.resolve_url("items/3"), "https://api.example.com/v1/items/3");
    }

    #[test]
    fn absolute_urls_ignore_base_url() {
        let config = with_base("https://api.example.com");
        assert_eq!(config.resolve_url("http://other.host/x"), "http://other.host/x");
        assert_eq!(config.resolve_url("//cdn.host/y"), "//cdn.host/y");
    }

    #[test]
    fn header_list_parsing() {
        let headers = parse_header_list("Accept: application/json; X-Token:abc;broken; :empty");
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("Accept").map(String::as_str), Some("application/json"));
        assert_eq!(headers.get("X-Token").map(String::as_str), Some("abc"));
        assert!(parse_header_list("").is_empty());
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let mut config = KitConfig::default();
        assert_eq!(config.level(), log::Level::Info);
        config.log_level = "debug".to_string();
        assert_eq!(config.level(), log::Level::Debug);
        config.log_level = "loud".to_string();
        assert_eq!(config.level(), log::Level::Info);
    }
}
