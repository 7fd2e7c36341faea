//! Property tests for part ordering and uniqueness.

use cassia_css::{PartKind, Render, Selector, SelectorError};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

const KINDS: [PartKind; 6] = [
    PartKind::Element,
    PartKind::Id,
    PartKind::Class,
    PartKind::Attribute,
    PartKind::PseudoClass,
    PartKind::PseudoElement,
];

/// A sequence of parts in non-decreasing rank with singular kinds at most once.
#[derive(Debug, Clone)]
struct ValidPlan(Vec<(PartKind, String)>);

impl Arbitrary for ValidPlan {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut parts = Vec::new();
        for kind in KINDS {
            let count = if kind.is_singular() {
                usize::from(bool::arbitrary(g))
            } else {
                usize::from(u8::arbitrary(g) % 4)
            };
            for i in 0..count {
                parts.push((kind, format!("{kind}{i}")));
            }
        }
        Self(parts)
    }
}

fn expected_text(kind: PartKind, value: &str) -> String {
    match kind {
        PartKind::Element => value.to_string(),
        PartKind::Id => format!("#{value}"),
        PartKind::Class => format!(".{value}"),
        PartKind::Attribute => format!("[{value}]"),
        PartKind::PseudoClass => format!(":{value}"),
        PartKind::PseudoElement => format!("::{value}"),
    }
}

#[quickcheck]
fn prop_valid_orderings_render_in_rank_order(plan: ValidPlan) -> bool {
    let mut selector = Selector::new();
    for (kind, value) in &plan.0 {
        if selector.push(*kind, value.clone()).is_err() {
            return false;
        }
    }
    let expected: String = plan
        .0
        .iter()
        .map(|(kind, value)| expected_text(*kind, value))
        .collect();
    selector.render() == expected
}

#[quickcheck]
fn prop_lower_rank_after_higher_rank_fails(a: u8, b: u8) -> bool {
    let (first, second) = (KINDS[usize::from(a % 6)], KINDS[usize::from(b % 6)]);
    let mut selector = Selector::with_part(first, "x");
    let before = selector.clone();
    let result = selector.push(second, "y".to_string()).map(|_| ());

    if first.is_singular() && first == second {
        result == Err(SelectorError::DuplicateSingularPart) && selector == before
    } else if second < first {
        result == Err(SelectorError::OutOfOrderPart) && selector == before
    } else {
        result.is_ok() && selector.last_part() == Some(second)
    }
}
