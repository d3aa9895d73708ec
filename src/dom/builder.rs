// ============================================================================
// ELEMENT BUILDER - Creación genérica de elementos
// ============================================================================

use web_sys::{Element, Node};
use crate::dom::{create_bare_element, replace_children, Attributes, Children, EventName, Listeners};
use crate::error::DomError;
use crate::utils::cast::CastValue;

/// Crear un elemento con atributos, hijos y listeners.
/// Orden: atributos, luego hijos, luego listeners. No toca ningún otro nodo.
pub fn create_element(
    tag: &str,
    children: impl Into<Children>,
    attrs: Attributes,
    listeners: Listeners,
) -> Result<Element, DomError> {
    let element = create_bare_element(tag)?;
    attrs.apply(&element)?;
    let children = children.into();
    replace_children(&element, &children)?;
    let listener_count = listeners.len();
    listeners.attach(&element)?;
    log::debug!(
        "🧱 [DOM] <{}> creado ({} atributos, {} hijos, {} listeners)",
        tag,
        attrs.len(),
        children.expected_len(),
        listener_count
    );
    Ok(element)
}

/// Builder fluido; todo se aplica en `build()` vía `create_element`
#[derive(Debug)]
pub struct ElementBuilder {
    tag: String,
    children: Children,
    attrs: Attributes,
    listeners: Listeners,
}

impl ElementBuilder {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            children: Children::Empty,
            attrs: Attributes::new(),
            listeners: Listeners::new(),
        }
    }

    /// Establecer class (reemplaza todas las clases)
    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn attr(mut self, name: &str, value: impl CastValue) -> Self {
        self.attrs.insert(name, value);
        self
    }

    /// Texto como único hijo (reemplaza hijos previos)
    pub fn text(mut self, value: impl CastValue) -> Self {
        self.children = Children::text(value);
        self
    }

    /// Agregar hijo al final
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Reemplazar todos los hijos
    pub fn children(mut self, children: impl Into<Children>) -> Self {
        self.children = children.into();
        self
    }

    pub fn on<F>(mut self, event: impl Into<EventName>, handler: F) -> Self
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        self.listeners.insert(event, handler);
        self
    }

    /// Construir y retornar elemento
    pub fn build(self) -> Result<Element, DomError> {
        create_element(&self.tag, self.children, self.attrs, self.listeners)
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::dom::child_nodes;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    const TAGS: &[&str] = &[
        "a", "p", "span", "div", "ul", "ol", "li", "table", "tr", "td", "form", "button", "input",
        "img", "h1", "h2", "h3",
    ];

    #[wasm_bindgen_test]
    fn bare_elements_are_empty() {
        for tag in TAGS {
            let el = create_element(tag, Children::Empty, Attributes::new(), Listeners::new()).unwrap();
            assert_eq!(el.tag_name().to_lowercase(), *tag);
            assert_eq!(el.attributes().length(), 0);
            assert!(child_nodes(&el).is_empty());
        }
    }

    #[wasm_bindgen_test]
    fn attributes_match_exactly() {
        let attrs = Attributes::from([("type", "radio"), ("name", "color"), ("data-x", "1")]);
        let el = create_element("input", None::<String>, attrs.clone(), Listeners::new()).unwrap();

        assert_eq!(el.attributes().length() as usize, attrs.len());
        for (name, value) in attrs.iter() {
            assert_eq!(el.get_attribute(name).as_deref(), Some(value));
        }
    }

    #[wasm_bindgen_test]
    fn empty_tag_fails_before_creating_anything() {
        let err = create_element("", "x", Attributes::new(), Listeners::new()).unwrap_err();
        assert!(matches!(err, DomError::InvalidArgument(_)));
    }

    #[wasm_bindgen_test]
    fn listeners_fire_on_created_element() {
        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        let el = create_element(
            "button",
            "ok",
            Attributes::new(),
            Listeners::new().on(EventName::Click, move |_| counter.set(counter.get() + 1)),
        )
        .unwrap();

        el.dispatch_event(&web_sys::Event::new("click").unwrap()).unwrap();
        assert_eq!(clicks.get(), 1);
        assert_eq!(el.text_content().as_deref(), Some("ok"));
    }

    #[wasm_bindgen_test]
    fn builder_matches_create_element() {
        let first = create_bare_element("li").unwrap();
        let second = create_bare_element("li").unwrap();
        let list = ElementBuilder::new("ul")
            .class("items")
            .id("builder-list")
            .attr("data-count", 2)
            .text("reemplazado")
            .child(first.clone())
            .child(second.clone())
            .build()
            .unwrap();

        assert_eq!(list.class_name(), "items");
        assert_eq!(list.id(), "builder-list");
        assert_eq!(list.get_attribute("data-count").as_deref(), Some("2"));
        let expected: Vec<Node> = vec![first.into(), second.into()];
        assert_eq!(child_nodes(&list), expected);
    }
}
