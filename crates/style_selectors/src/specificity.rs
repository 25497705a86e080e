//! Selector specificity.
//!
//! Spec: §3 — "a 32-bit value packed as (A·2²⁴)+(B·2¹⁶)+(C·2⁸)+D (A=id count,
//! B=class/attr/pseudo-class count, C=element/pseudo-element count; D=rule-
//! order tiebreak applied separately)."

use crate::CompoundSelector;
use crate::detail::{Combinator, DetailKind};

/// The packed (A, B, C) specificity of one selector chain. `D` (the rule-order
/// tiebreak) is deliberately not part of this value — callers combine it
/// with a rule/source index when they need a total order (see
/// `style_sheet::hash`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Specificity(pub u32);

impl Specificity {
    #[must_use]
    pub const fn new(ids: u32, classes: u32, elements: u32) -> Self {
        // Each field is clamped to 8 bits before packing; a chain with more
        // than 255 ids/classes/elements is pathological but must not corrupt
        // neighboring fields.
        let a = if ids > 0xFF { 0xFF } else { ids };
        let b = if classes > 0xFF { 0xFF } else { classes };
        let c = if elements > 0xFF { 0xFF } else { elements };
        Self((a << 24) | (b << 16) | (c << 8))
    }

    #[must_use]
    pub const ZERO: Self = Self(0);
}

fn detail_bucket(kind: DetailKind) -> (u32, u32, u32) {
    match kind {
        // The universal selector contributes nothing to any field (§4.6a).
        DetailKind::Universal => (0, 0, 0),
        DetailKind::Id => (1, 0, 0),
        DetailKind::Class
        | DetailKind::PseudoClass
        | DetailKind::Attribute
        | DetailKind::AttributeEquals
        | DetailKind::AttributeDashmatch
        | DetailKind::AttributeIncludes => (0, 1, 0),
        DetailKind::Element | DetailKind::PseudoElement => (0, 0, 1),
    }
}

fn compound_contribution(compound: &CompoundSelector) -> (u32, u32, u32) {
    let mut totals = (0u32, 0u32, 0u32);
    for detail in &compound.details {
        let (a, b, c) = detail_bucket(detail.kind);
        totals.0 += a;
        totals.1 += b;
        totals.2 += c;
    }
    totals
}

/// Compute the specificity of a full chain by summing every compound's
/// contribution.
#[must_use]
pub fn compute(
    rightmost: &CompoundSelector,
    ancestors: &[(Combinator, CompoundSelector)],
) -> Specificity {
    let mut totals = compound_contribution(rightmost);
    for (_combinator, compound) in ancestors {
        let contribution = compound_contribution(compound);
        totals.0 += contribution.0;
        totals.1 += contribution.1;
        totals.2 += contribution.2;
    }
    Specificity::new(totals.0, totals.1, totals.2)
}
