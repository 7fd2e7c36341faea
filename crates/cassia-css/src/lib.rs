//! CSS selector builder for the Cassia workspace.
//!
//! Builds compound selectors part by part, rejecting parts that break the
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/) ordering
//! (element, id, class, attribute, pseudo-class, pseudo-element) or repeat a
//! singular part, and joins compound selectors with combinators.
//!
//! Nothing here parses or matches selectors; values are embedded verbatim.

pub mod builder;
pub mod selector;

pub use builder::{Combinator, Combined, SelectorBuilder};
pub use selector::{PartKind, Render, Selector, SelectorError};
