//! Turns command-line tokens into a rendered selector.
//!
//! `kind=value` tokens extend the current compound selector; a combinator
//! token closes it and starts the next one.

use anyhow::{Context, Result, bail};
use cassia_css::{Combinator, PartKind, Render, Selector, SelectorBuilder};

enum Token<'a> {
    Part(PartKind, &'a str),
    Combinator(&'a str),
}

fn classify(token: &str) -> Result<Token<'_>> {
    if let Some(combinator) = Combinator::from_token(token) {
        // Render the spelled-out alias as the real token
        let text = if token == "descendant" {
            combinator.as_str()
        } else {
            token
        };
        return Ok(Token::Combinator(text));
    }
    let (kind, value) = token
        .split_once('=')
        .with_context(|| format!("expected `kind=value` or a combinator, got `{token}`"))?;
    let kind = PartKind::from_name(kind).with_context(|| format!("unknown part kind `{kind}`"))?;
    Ok(Token::Part(kind, value))
}

/// Build the selector described by `tokens` and render it.
pub fn build(tokens: &[String]) -> Result<String> {
    let builder = SelectorBuilder::new();
    let mut rendered: Option<String> = None;
    let mut pending: Option<&str> = None;
    let mut current = Selector::new();

    for token in tokens {
        match classify(token)? {
            Token::Part(kind, value) => {
                let _ = current
                    .push(kind, value.to_string())
                    .with_context(|| format!("cannot add {kind} `{value}`"))?;
            }
            Token::Combinator(combinator) => {
                if current.is_empty() {
                    bail!("combinator `{combinator}` must follow a selector");
                }
                rendered = Some(join(builder, rendered, pending, &current));
                pending = Some(combinator);
                current = Selector::new();
            }
        }
    }

    if current.is_empty() {
        bail!("selector must not end with a combinator");
    }
    Ok(join(builder, rendered, pending, &current))
}

fn join(
    builder: SelectorBuilder,
    left: Option<String>,
    combinator: Option<&str>,
    right: &Selector,
) -> String {
    match (left, combinator) {
        (Some(left), Some(combinator)) => builder
            .combine(&RenderedText(left), combinator, right)
            .into(),
        _ => right.render(),
    }
}

/// Text that has already been rendered.
struct RenderedText(String);

impl Render for RenderedText {
    fn render(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_build_compound() {
        let out = build(&args(&["element=a", "id=home", "class=nav", "pseudo-class=hover"]));
        assert_eq!(out.unwrap(), "a#home.nav:hover");
    }

    #[test]
    fn test_build_complex() {
        let out = build(&args(&[
            "element=div",
            "id=main",
            "+",
            "element=table",
            "id=data",
            "~",
            "element=p",
        ]));
        assert_eq!(out.unwrap(), "div#main + table#data ~ p");
    }

    #[test]
    fn test_build_descendant_alias() {
        let out = build(&args(&["element=ul", "descendant", "element=li"]));
        assert_eq!(out.unwrap(), "ul   li");
    }

    #[test]
    fn test_build_reports_order_error() {
        let err = build(&args(&["class=x", "id=y"])).unwrap_err();
        assert_eq!(
            err.root_cause().to_string(),
            "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
        );
    }

    #[test]
    fn test_build_rejects_bad_tokens() {
        assert!(build(&args(&["color=red"])).is_err());
        assert!(build(&args(&["div"])).is_err());
        assert!(build(&args(&[">", "element=a"])).is_err());
        assert!(build(&args(&["element=a", ">"])).is_err());
    }
}
