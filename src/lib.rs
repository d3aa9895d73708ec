// ============================================================================
// DOM KIT - Helpers mínimos para DOM y REST desde Rust/WASM
// ============================================================================
// - dom:      construcción de elementos, atributos, listeners y reemplazo de hijos
// - services: transporte XHR con callbacks + cliente async (gloo-net)
// - utils:    casting a número / bool / string
// - js_api:   las mismas funciones exportadas para JavaScript
// ============================================================================

pub mod config;
pub mod error;
pub mod dom;
pub mod services;
pub mod utils;
pub mod js_api;

use std::sync::Once;
use wasm_bindgen::prelude::*;

pub use config::{KitConfig, CONFIG};
pub use dom::{
    by_id, create_element, replace_children, replace_children_by_id, tags, Attributes, Children,
    ElementBuilder, EventName, Listener, Listeners,
};
pub use error::{DomError, TransportError};
pub use services::{
    delete, get, patch, post, put, request, ApiClient, Completion, Headers, Method, RawResponse,
};
pub use utils::{as_bool, as_number, as_string};

static INIT: Once = Once::new();

/// Inicializar panic hook y logging (idempotente)
#[wasm_bindgen(js_name = initDomKit)]
pub fn init() {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        if CONFIG.is_logging_enabled() {
            wasm_logger::init(wasm_logger::Config::new(CONFIG.level()));
        }
        log::info!("🚀 dom-kit inicializado (base_url: '{}')", CONFIG.base_url);
    });
}

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);
