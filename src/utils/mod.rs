// Utils compartidos

pub mod cast;

pub use cast::{as_bool, as_number, as_string, CastValue};
