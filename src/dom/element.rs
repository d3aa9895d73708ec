// ============================================================================
// ELEMENT HELPERS - Funciones básicas sobre el DOM nativo
// ============================================================================

use web_sys::{Document, Element, Node, Text, Window};
use crate::error::DomError;

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Result<Document, DomError> {
    window()
        .and_then(|win| win.document())
        .ok_or(DomError::NoDocument)
}

/// Alias de `document.getElementById`
pub fn by_id(id: &str) -> Option<Element> {
    window()?.document()?.get_element_by_id(id)
}

/// Crear un elemento vacío; el tag no puede estar vacío
pub fn create_bare_element(tag: &str) -> Result<Element, DomError> {
    if tag.trim().is_empty() {
        return Err(DomError::invalid("bad tag: tag name must not be empty"));
    }
    Ok(document()?.create_element(tag)?)
}

/// Crear nodo de texto
pub fn create_text_node(value: &str) -> Result<Text, DomError> {
    Ok(document()?.create_text_node(value))
}

pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), DomError> {
    element.set_attribute(name, value)?;
    Ok(())
}

pub fn append_child(parent: &Node, child: &Node) -> Result<(), DomError> {
    parent.append_child(child)?;
    Ok(())
}

/// Quitar todos los hijos de un nodo
pub fn clear_children(node: &Node) -> Result<(), DomError> {
    while let Some(child) = node.first_child() {
        node.remove_child(&child)?;
    }
    Ok(())
}

/// Hijos actuales en orden (snapshot, no live)
pub fn child_nodes(node: &Node) -> Vec<Node> {
    let list = node.child_nodes();
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}
