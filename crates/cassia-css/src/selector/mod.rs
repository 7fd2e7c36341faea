//! Compound selector accumulation and rendering
//!
//! This module implements a single compound selector built part by part, with
//! the part-ordering rules of
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/) enforced at insert
//! time rather than at parse time.

use std::fmt;

use cassia_common::warning::warn_once;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use thiserror::Error;

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// The kinds of simple selector a compound selector may hold, in the order
/// they must appear. The derived `Ord` is the rank order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum PartKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `p`, `span`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Examples: `#main`, `#header`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Examples: `.highlight`, `.btn`
    Class,

    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Examples: `[href]`, `[src$=".png"]`
    Attribute,

    /// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Examples: `:hover`, `:nth-of-type(2)`
    PseudoClass,

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Examples: `::before`, `::first-line`
    PseudoElement,
}

impl PartKind {
    /// Ordering rank, 0 (element) through 5 (pseudo-element).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Element, id and pseudo-element may occur at most once per compound.
    #[must_use]
    pub const fn is_singular(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Look up a part kind by its kebab-case name (`"pseudo-class"`, ...).
    /// `"attr"` is accepted for [`PartKind::Attribute`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if name == "attr" {
            return Some(Self::Attribute);
        }
        Self::iter().find(|kind| kind.to_string() == name)
    }
}

/// Why a part could not be added to a [`Selector`].
///
/// The messages are fixed; callers match on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// An element, id or pseudo-element was set a second time.
    #[error(
        "Element, id and pseudo-element should not occur more then one time inside the selector"
    )]
    DuplicateSingularPart,

    /// A part was added after a part of a higher rank.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OutOfOrderPart,
}

/// Anything that can be turned into selector text.
///
/// Implemented by [`Selector`] and by the result of combining two selectors,
/// so combination results can be combined again.
pub trait Render {
    /// Produce the canonical selector string.
    fn render(&self) -> String;
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self) -> String {
        (**self).render()
    }
}

impl<T: Render + ?Sized> Render for &mut T {
    fn render(&self) -> String {
        (**self).render()
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn render(&self) -> String {
        (**self).render()
    }
}

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator, and represents a set of simultaneous
/// conditions on a single element."
///
/// Values are embedded verbatim; nothing is parsed or escaped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    element: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<String>,
    pseudo_classes: Vec<String>,
    pseudo_element: Option<String>,
    /// Kind of the most recently added part; `None` before any part.
    last: Option<PartKind>,
}

impl Selector {
    /// An empty selector. Any part may be added first.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A selector whose single initial part is `value` of kind `kind`.
    #[must_use]
    pub fn with_part(kind: PartKind, value: impl Into<String>) -> Self {
        let mut selector = Self::new();
        selector.store(kind, value.into());
        selector
    }

    /// Set the type selector.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateSingularPart`] if an element is already set,
    /// [`SelectorError::OutOfOrderPart`] if a later part was added before.
    pub fn element(&mut self, value: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.push(PartKind::Element, value.into())
    }

    /// Set the id selector.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateSingularPart`] if an id is already set,
    /// [`SelectorError::OutOfOrderPart`] if a later part was added before.
    pub fn id(&mut self, value: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.push(PartKind::Id, value.into())
    }

    /// Append a class selector.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrderPart`] if an attribute, pseudo-class or
    /// pseudo-element was added before.
    pub fn class(&mut self, value: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.push(PartKind::Class, value.into())
    }

    /// Append an attribute selector. `value` is the body between the
    /// brackets, e.g. `href$=".png"`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrderPart`] if a pseudo-class or pseudo-element
    /// was added before.
    pub fn attr(&mut self, value: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.push(PartKind::Attribute, value.into())
    }

    /// Append a pseudo-class, given without the leading colon.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrderPart`] if a pseudo-element was added before.
    pub fn pseudo_class(&mut self, value: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.push(PartKind::PseudoClass, value.into())
    }

    /// Set the pseudo-element, given without the leading colons.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateSingularPart`] if a pseudo-element is
    /// already set.
    pub fn pseudo_element(&mut self, value: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.push(PartKind::PseudoElement, value.into())
    }

    /// Add a part of any kind. The six named methods forward here.
    ///
    /// On error the selector is left exactly as it was.
    ///
    /// # Errors
    ///
    /// See [`SelectorError`].
    pub fn push(&mut self, kind: PartKind, value: String) -> Result<&mut Self, SelectorError> {
        if kind.is_singular() && self.has(kind) {
            return Err(SelectorError::DuplicateSingularPart);
        }
        if self.last.is_some_and(|last| kind < last) {
            return Err(SelectorError::OutOfOrderPart);
        }
        self.store(kind, value);
        Ok(self)
    }

    fn store(&mut self, kind: PartKind, value: String) {
        if value.is_empty() {
            warn_once("Selector", &format!("empty {kind} value"));
        }
        match kind {
            PartKind::Element => self.element = Some(value),
            PartKind::Id => self.id = Some(value),
            PartKind::Class => self.classes.push(value),
            PartKind::Attribute => self.attributes.push(value),
            PartKind::PseudoClass => self.pseudo_classes.push(value),
            PartKind::PseudoElement => self.pseudo_element = Some(value),
        }
        self.last = Some(kind);
    }

    fn has(&self, kind: PartKind) -> bool {
        match kind {
            PartKind::Element => self.element.is_some(),
            PartKind::Id => self.id.is_some(),
            PartKind::Class => !self.classes.is_empty(),
            PartKind::Attribute => !self.attributes.is_empty(),
            PartKind::PseudoClass => !self.pseudo_classes.is_empty(),
            PartKind::PseudoElement => self.pseudo_element.is_some(),
        }
    }

    /// The type selector, if set.
    #[must_use]
    pub fn element_name(&self) -> Option<&str> {
        self.element.as_deref()
    }

    /// The id, if set.
    #[must_use]
    pub fn id_value(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Classes in append order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Attribute bodies in append order.
    #[must_use]
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Pseudo-classes in append order.
    #[must_use]
    pub fn pseudo_classes(&self) -> &[String] {
        &self.pseudo_classes
    }

    /// The pseudo-element, if set.
    #[must_use]
    pub fn pseudo_element_name(&self) -> Option<&str> {
        self.pseudo_element.as_deref()
    }

    /// Kind of the most recently added part.
    #[must_use]
    pub const fn last_part(&self) -> Option<PartKind> {
        self.last
    }

    /// True if no part has been added.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.last.is_none()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Rank order; insertion order already agrees with it.
        if let Some(element) = &self.element {
            f.write_str(element)?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        for attr in &self.attributes {
            write!(f, "[{attr}]")?;
        }
        for pseudo in &self.pseudo_classes {
            write!(f, ":{pseudo}")?;
        }
        if let Some(pseudo) = &self.pseudo_element {
            write!(f, "::{pseudo}")?;
        }
        Ok(())
    }
}

impl Render for Selector {
    fn render(&self) -> String {
        self.to_string()
    }
}
