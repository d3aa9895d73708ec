// ============================================================================
// TAGS - Constructores cortos para los tags más comunes
// ============================================================================

use web_sys::{Element, Text};
use crate::dom::{create_element, create_text_node, Attributes, Children, Listeners};
use crate::error::DomError;
use crate::utils::cast::CastValue;

macro_rules! container_tags {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("`<", stringify!($name), ">` con hijos, atributos y listeners")]
            pub fn $name(
                children: impl Into<Children>,
                attrs: Attributes,
                listeners: Listeners,
            ) -> Result<Element, DomError> {
                create_element(stringify!($name), children, attrs, listeners)
            }
        )*
    };
}

container_tags!(a, p, span, div, ul, ol, li, table, tr, td, form, button, h1, h2, h3);

/// `<input>`: elemento vacío, sin hijos
pub fn input(attrs: Attributes, listeners: Listeners) -> Result<Element, DomError> {
    create_element("input", Children::Empty, attrs, listeners)
}

/// `<img>`: elemento vacío, sin hijos
pub fn img(attrs: Attributes, listeners: Listeners) -> Result<Element, DomError> {
    create_element("img", Children::Empty, attrs, listeners)
}

/// Nodo de texto a partir de un string o número
pub fn text(value: impl CastValue) -> Result<Text, DomError> {
    create_text_node(&value.cast_string())
}
