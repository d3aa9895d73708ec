// ============================================================================
// DOM MODULE - Helpers para construir y reemplazar nodos
// ============================================================================

pub mod element;
pub mod attributes;
pub mod events;
pub mod children;
pub mod builder;
pub mod tags;

pub use element::*;
pub use attributes::*;
pub use events::*;
pub use children::*;
pub use builder::*;
