// ============================================================================
// JS API - Funciones exportadas para llamar la librería desde JavaScript
// ============================================================================
// Reciben JsValue sin tipar y los traducen a los tipos del lado Rust.
// ============================================================================

use js_sys::{Array, Function, Object};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Node};
use crate::dom::{by_id, create_element, replace_children, Attributes, Children, Listeners};
use crate::error::{js_error_message, DomError};
use crate::services::transport::{send_raw, Headers, Method};
use crate::utils::cast::{as_bool, as_number, as_string, CastValue};

/// Pares (clave, valor como string) de un objeto plano; no-objetos no aportan nada
fn string_entries(value: &JsValue) -> Vec<(String, String)> {
    if !value.is_object() {
        return Vec::new();
    }
    Object::entries(value.unchecked_ref())
        .iter()
        .filter_map(|entry| {
            let pair: Array = entry.unchecked_into();
            let key = pair.get(0).as_string()?;
            Some((key, pair.get(1).cast_string()))
        })
        .collect()
}

/// string/number -> texto, array -> nodos, nodo -> nodo, null/undefined -> vacío
pub fn children_from_js(value: &JsValue) -> Result<Children, DomError> {
    if value.is_null() || value.is_undefined() {
        return Ok(Children::Empty);
    }
    if let Some(text) = value.as_string() {
        return Ok(Children::Text(text));
    }
    if let Some(number) = value.as_f64() {
        return Ok(Children::from(number));
    }
    if Array::is_array(value) {
        return value
            .unchecked_ref::<Array>()
            .iter()
            .map(|child| {
                child
                    .dyn_into::<Node>()
                    .map_err(|_| DomError::invalid("bad children: array items must be DOM nodes"))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Children::Nodes);
    }
    if let Some(node) = value.dyn_ref::<Node>() {
        return Ok(Children::Node(node.clone()));
    }
    // Booleanos y demás primitivos no insertan nada
    if !value.is_object() {
        return Ok(Children::Empty);
    }
    Err(DomError::invalid("bad children: expected string, number, node or array of nodes"))
}

pub fn attributes_from_js(value: &JsValue) -> Attributes {
    string_entries(value).into_iter().collect()
}

pub fn headers_from_js(value: &JsValue) -> Headers {
    string_entries(value).into_iter().collect()
}

/// Objeto `{evento: función}` a `Listeners`
pub fn listeners_from_js(value: &JsValue) -> Result<Listeners, DomError> {
    if !value.is_object() {
        return Ok(Listeners::new());
    }
    let mut listeners = Listeners::new();
    for entry in Object::entries(value.unchecked_ref()).iter() {
        let pair: Array = entry.unchecked_into();
        let Some(name) = pair.get(0).as_string() else { continue };
        let function = pair
            .get(1)
            .dyn_into::<Function>()
            .map_err(|_| DomError::invalid(format!("listener for '{}' is not a function", name)))?;
        listeners.insert_js(name.as_str(), function);
    }
    Ok(listeners)
}

#[wasm_bindgen(js_name = createNode)]
pub fn create_node(
    tag: Option<String>,
    children: JsValue,
    attrs: JsValue,
    listeners: JsValue,
) -> Result<Element, JsValue> {
    let tag = tag.ok_or_else(|| DomError::invalid("bad tag: tag name is required"))?;
    let element = create_element(
        &tag,
        children_from_js(&children)?,
        attributes_from_js(&attrs),
        listeners_from_js(&listeners)?,
    )?;
    Ok(element)
}

#[wasm_bindgen(js_name = setChildren)]
pub fn set_children(destination: JsValue, children: JsValue) -> Result<(), JsValue> {
    let target = destination
        .dyn_ref::<Node>()
        .ok_or_else(|| DomError::invalid("bad destination: expected a DOM node"))?;
    replace_children(target, &children_from_js(&children)?)?;
    Ok(())
}

#[wasm_bindgen(js_name = byId)]
pub fn by_id_js(id: &str) -> Option<Element> {
    by_id(id)
}

#[wasm_bindgen(js_name = asNumber)]
pub fn as_number_js(value: JsValue) -> f64 {
    as_number(&value)
}

#[wasm_bindgen(js_name = asBool)]
pub fn as_bool_js(value: JsValue) -> bool {
    as_bool(&value)
}

#[wasm_bindgen(js_name = asString)]
pub fn as_string_js(value: JsValue) -> String {
    as_string(&value)
}

/// Request desde JS. `on_success` recibe el JSON parseado (solo status 200);
/// `on_error` recibe el XMLHttpRequest crudo, también cuando un 200 trae JSON inválido.
#[wasm_bindgen(js_name = request)]
pub fn request_js(
    method: &str,
    path: &str,
    on_success: Function,
    on_error: Function,
    headers: JsValue,
    body: JsValue,
) -> Result<(), JsValue> {
    let method: Method = method.parse()?;
    let body = if body.is_undefined() {
        None
    } else {
        Some(String::from(js_sys::JSON::stringify(&body)?))
    };

    send_raw(method, path, &headers_from_js(&headers), body, move |xhr| {
        let outcome = if xhr.status().unwrap_or(0) == 200 {
            let text = xhr.response_text().ok().flatten().unwrap_or_default();
            match js_sys::JSON::parse(&text) {
                Ok(value) => on_success.call1(&JsValue::UNDEFINED, &value),
                Err(err) => {
                    log::error!("❌ [HTTP] Respuesta 200 con JSON inválido: {}", js_error_message(&err));
                    on_error.call1(&JsValue::UNDEFINED, &xhr)
                }
            }
        } else {
            on_error.call1(&JsValue::UNDEFINED, &xhr)
        };
        if let Err(err) = outcome {
            log::error!("❌ [HTTP] Callback JS lanzó: {}", js_error_message(&err));
        }
    })?;
    Ok(())
}
