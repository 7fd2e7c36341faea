//! Selector facade and combinators
//!
//! [`SelectorBuilder`] starts compound selectors and joins finished ones with
//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators).
//! It holds no state: every call returns a fresh value.

use std::fmt;

use cassia_common::warning::warn_once;

use crate::selector::{PartKind, Render, Selector};

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// [`SelectorBuilder::combine`] takes any `AsRef<str>` token, so this enum is
/// a convenience; raw strings are rendered the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators) `>`
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators) `+`
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators) `~`
    SubsequentSibling,

    /// [§ 17.1 Column combinator](https://www.w3.org/TR/selectors-4/#the-column-combinator) `||`
    Column,
}

impl Combinator {
    /// The token as it appears between two compound selectors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
            Self::Column => "||",
        }
    }

    /// Recognize a combinator token. `"descendant"` is accepted as a
    /// spelled-out alias for the whitespace combinator.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            " " | "descendant" => Some(Self::Descendant),
            ">" => Some(Self::Child),
            "+" => Some(Self::NextSibling),
            "~" => Some(Self::SubsequentSibling),
            "||" => Some(Self::Column),
            _ => None,
        }
    }
}

impl AsRef<str> for Combinator {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// Two rendered selectors joined by a combinator. Renderable, so it can be
/// an operand of another [`SelectorBuilder::combine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combined {
    text: String,
}

impl Combined {
    /// The rendered text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Combined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Render for Combined {
    fn render(&self) -> String {
        self.text.clone()
    }
}

impl From<Combined> for String {
    fn from(combined: Combined) -> Self {
        combined.text
    }
}

/// Entry point for building selectors.
///
/// # Example
/// ```ignore
/// let b = SelectorBuilder;
/// let s = b.combine(
///     b.element("div").id("main")?,
///     "+",
///     b.element("table").id("data")?,
/// );
/// let nested = b.combine(&s, &Combinator::SubsequentSibling, &b.element("p"));
/// assert_eq!(s.render(), "div#main + table#data");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectorBuilder;

// Entry points take `&self` so calls read as `builder.element(..)`.
#[allow(clippy::unused_self)]
impl SelectorBuilder {
    /// Create a builder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Start a selector with a type selector.
    #[must_use]
    pub fn element(&self, value: impl Into<String>) -> Selector {
        Selector::with_part(PartKind::Element, value)
    }

    /// Start a selector with an id.
    #[must_use]
    pub fn id(&self, value: impl Into<String>) -> Selector {
        Selector::with_part(PartKind::Id, value)
    }

    /// Start a selector with a class.
    #[must_use]
    pub fn class(&self, value: impl Into<String>) -> Selector {
        Selector::with_part(PartKind::Class, value)
    }

    /// Start a selector with an attribute body, e.g. `href$=".png"`.
    #[must_use]
    pub fn attr(&self, value: impl Into<String>) -> Selector {
        Selector::with_part(PartKind::Attribute, value)
    }

    /// Start a selector with a pseudo-class.
    #[must_use]
    pub fn pseudo_class(&self, value: impl Into<String>) -> Selector {
        Selector::with_part(PartKind::PseudoClass, value)
    }

    /// Start a selector with a pseudo-element.
    #[must_use]
    pub fn pseudo_element(&self, value: impl Into<String>) -> Selector {
        Selector::with_part(PartKind::PseudoElement, value)
    }

    /// Join two selectors: `render(left) + " " + combinator + " " + render(right)`.
    ///
    /// The combinator is embedded verbatim. Tokens that are not a known
    /// combinator still render, with a one-time warning.
    #[must_use]
    pub fn combine<L, C, R>(&self, left: &L, combinator: &C, right: &R) -> Combined
    where
        L: Render + ?Sized,
        C: AsRef<str> + ?Sized,
        R: Render + ?Sized,
    {
        let combinator = combinator.as_ref();
        if Combinator::from_token(combinator).is_none() {
            warn_once("Selector", &format!("unrecognized combinator '{combinator}'"));
        }
        Combined {
            text: format!("{} {combinator} {}", left.render(), right.render()),
        }
    }
}
