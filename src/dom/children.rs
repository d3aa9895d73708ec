// ============================================================================
// CHILDREN - Valor de hijos y reemplazo completo de hijos de un nodo
// ============================================================================
// Sin diff: siempre se vacía el destino y se insertan los hijos nuevos
// ============================================================================

use web_sys::{Element, HtmlElement, Node, Text};
use crate::dom::{append_child, by_id, clear_children, create_text_node};
use crate::error::DomError;
use crate::utils::cast::{number_to_string, CastValue};

/// Hijos a insertar en un nodo
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Children {
    /// Texto o número, se inserta como un único nodo de texto
    Text(String),
    /// Secuencia ordenada de nodos
    Nodes(Vec<Node>),
    Node(Node),
    #[default]
    Empty,
}

impl Children {
    /// Hijo de texto a partir de cualquier valor casteable (string, número, bool)
    pub fn text(value: impl CastValue) -> Self {
        Self::Text(value.cast_string())
    }

    /// Cantidad de nodos hijos que produce el reemplazo
    pub fn expected_len(&self) -> usize {
        match self {
            Self::Text(_) | Self::Node(_) => 1,
            Self::Nodes(nodes) => nodes.len(),
            Self::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Agregar un nodo al final. Un texto previo se descarta.
    pub fn push(&mut self, node: Node) {
        *self = match std::mem::take(self) {
            Self::Nodes(mut nodes) => {
                nodes.push(node);
                Self::Nodes(nodes)
            }
            Self::Node(first) => Self::Nodes(vec![first, node]),
            Self::Text(_) | Self::Empty => Self::Node(node),
        };
    }
}

impl From<&str> for Children {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Children {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Children {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<f64> for Children {
    fn from(value: f64) -> Self {
        Self::Text(number_to_string(value))
    }
}

macro_rules! integer_children {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Children {
                fn from(value: $t) -> Self {
                    Self::Text(value.to_string())
                }
            }
        )*
    };
}

integer_children!(i32, i64, u32, u64, usize);

impl From<Node> for Children {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<Element> for Children {
    fn from(element: Element) -> Self {
        Self::Node(element.into())
    }
}

impl From<HtmlElement> for Children {
    fn from(element: HtmlElement) -> Self {
        Self::Node(element.into())
    }
}

impl From<Text> for Children {
    fn from(text: Text) -> Self {
        Self::Node(text.into())
    }
}

impl From<Vec<Node>> for Children {
    fn from(nodes: Vec<Node>) -> Self {
        Self::Nodes(nodes)
    }
}

impl From<Vec<Element>> for Children {
    fn from(elements: Vec<Element>) -> Self {
        Self::Nodes(elements.into_iter().map(Node::from).collect())
    }
}

impl<T: Into<Children>> From<Option<T>> for Children {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

/// Vaciar `target` e insertar `children`.
/// Llamarlo dos veces con el mismo valor deja la misma lista de hijos.
///
/// No es atómico: si un `appendChild` falla a mitad de `Children::Nodes`
/// (p. ej. un ancestro de `target`), los hijos anteriores ya se quitaron y
/// los nodos previos al fallo quedan insertados.
pub fn replace_children(target: &Node, children: &Children) -> Result<(), DomError> {
    clear_children(target)?;
    match children {
        Children::Text(text) => append_child(target, &create_text_node(text)?.into())?,
        Children::Nodes(nodes) => {
            for node in nodes {
                append_child(target, node)?;
            }
        }
        Children::Node(node) => append_child(target, node)?,
        Children::Empty => {}
    }
    Ok(())
}

/// Igual que `replace_children` pero buscando el destino por id
pub fn replace_children_by_id(id: &str, children: &Children) -> Result<(), DomError> {
    let target = by_id(id)
        .ok_or_else(|| DomError::invalid(format!("bad destination: no element with id '{}'", id)))?;
    replace_children(&target, children)
}
