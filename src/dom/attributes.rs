// ============================================================================
// ATTRIBUTES - Mapa nombre -> valor aplicado al construir el elemento
// ============================================================================

use std::collections::HashMap;
use web_sys::Element;
use crate::dom::set_attribute;
use crate::error::DomError;
use crate::utils::cast::CastValue;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(HashMap<String, String>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Agregar atributo (estilo builder). El valor se castea a string.
    pub fn with(mut self, name: impl Into<String>, value: impl CastValue) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl CastValue) {
        self.0.insert(name.into(), value.cast_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Aplicar todos los atributos con `setAttribute`
    pub fn apply(&self, element: &Element) -> Result<(), DomError> {
        for (name, value) in self.iter() {
            set_attribute(element, name, value)?;
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Attributes {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<HashMap<String, String>> for Attributes {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}
