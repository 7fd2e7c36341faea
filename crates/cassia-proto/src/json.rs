//! JSON encoding and prototype attachment.
//!
//! Decoding never mutates an existing object's behavior. The parsed text
//! becomes a plain [`Prototype::Fields`] record, and [`Attached`] pairs that
//! record with the prototype that supplies its methods.

use std::ops::Deref;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors from [`to_json`] and [`from_json`].
#[derive(Debug, Error)]
pub enum JsonError {
    /// The value could not be represented as JSON (e.g. a map with
    /// non-string keys).
    #[error("failed to encode JSON: {0}")]
    Encode(#[source] serde_json::Error),

    /// The text is not valid JSON, or its fields do not fit the record.
    #[error("failed to decode JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    /// The text is valid JSON but not an object.
    #[error("expected a JSON object, found {found}")]
    NotAnObject {
        /// JSON type that was found instead (`array`, `string`, ...).
        found: &'static str,
    },
}

/// A method set that parsed records can be attached to.
pub trait Prototype {
    /// The plain record the JSON object is parsed into.
    type Fields: DeserializeOwned;
}

/// A parsed record together with the prototype that supplies its methods.
///
/// Derefs to the record, so its fields read as own fields.
#[derive(Debug, Clone)]
pub struct Attached<'p, P: Prototype> {
    fields: P::Fields,
    prototype: &'p P,
}

impl<'p, P: Prototype> Attached<'p, P> {
    /// Attach an already-built record to `prototype`.
    #[must_use]
    pub const fn new(prototype: &'p P, fields: P::Fields) -> Self {
        Self { fields, prototype }
    }

    /// The record's own data.
    #[must_use]
    pub const fn fields(&self) -> &P::Fields {
        &self.fields
    }

    /// The method set this record delegates to.
    #[must_use]
    pub const fn prototype(&self) -> &'p P {
        self.prototype
    }

    /// Detach, keeping only the record.
    #[must_use]
    pub fn into_fields(self) -> P::Fields {
        self.fields
    }
}

impl<P: Prototype> Deref for Attached<'_, P> {
    type Target = P::Fields;

    fn deref(&self) -> &Self::Target {
        &self.fields
    }
}

/// Encode `value` as compact JSON. Struct fields keep declaration order.
///
/// # Errors
///
/// [`JsonError::Encode`] if the value has no JSON representation.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string(value).map_err(JsonError::Encode)
}

/// Parse `json` into `P::Fields` and attach it to `prototype`.
///
/// # Errors
///
/// [`JsonError::Syntax`] for malformed text or fields that do not fit
/// `P::Fields`; [`JsonError::NotAnObject`] if the top-level value is not an
/// object.
pub fn from_json<'p, P: Prototype>(
    prototype: &'p P,
    json: &str,
) -> Result<Attached<'p, P>, JsonError> {
    let value: serde_json::Value = serde_json::from_str(json).map_err(JsonError::Syntax)?;
    if !value.is_object() {
        return Err(JsonError::NotAnObject {
            found: json_type_name(&value),
        });
    }
    let fields = serde_json::from_value(value).map_err(JsonError::Syntax)?;
    Ok(Attached::new(prototype, fields))
}

const fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
