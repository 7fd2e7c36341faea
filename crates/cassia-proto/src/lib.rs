//! Rectangles and JSON rehydration for the Cassia workspace.
//!
//! - [`rectangle`] - a width/height value with a computed area
//! - [`json`] - encode values to JSON and decode JSON into a plain record
//!   attached to a [`json::Prototype`] that supplies its methods

pub mod json;
pub mod rectangle;

pub use json::{Attached, JsonError, Prototype, from_json, to_json};
pub use rectangle::{Area, AreaMethod, Rectangle, RectangleFields, RectanglePrototype};
