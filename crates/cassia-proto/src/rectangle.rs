//! Rectangle value.

use serde::{Deserialize, Serialize};

use crate::json::{Attached, Prototype};

/// Anything with an area.
pub trait Area {
    /// `width * height` for rectangles.
    fn area(&self) -> f64;
}

/// A prototype that can compute the area of its records.
///
/// Every [`Attached`] record of such a prototype implements [`Area`] by
/// delegating here.
pub trait AreaMethod: Prototype {
    /// Area of one record.
    fn area_of(&self, fields: &Self::Fields) -> f64;
}

impl<P: AreaMethod> Area for Attached<'_, P> {
    fn area(&self) -> f64 {
        self.prototype().area_of(self.fields())
    }
}

/// A rectangle with its own `width` and `height` fields.
///
/// Serializes as `{"width":..,"height":..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Area for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// The data a rectangle record carries once parsed from JSON.
///
/// Unknown keys are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangleFields {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl From<Rectangle> for RectangleFields {
    fn from(rect: Rectangle) -> Self {
        Self {
            width: rect.width,
            height: rect.height,
        }
    }
}

impl From<RectangleFields> for Rectangle {
    fn from(fields: RectangleFields) -> Self {
        Self::new(fields.width, fields.height)
    }
}

/// The rectangle method set. Parsed [`RectangleFields`] attached to it
/// gain [`Area`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RectanglePrototype;

impl Prototype for RectanglePrototype {
    type Fields = RectangleFields;
}

impl AreaMethod for RectanglePrototype {
    fn area_of(&self, fields: &RectangleFields) -> f64 {
        fields.width * fields.height
    }
}
