//! Chain match state machine.
//!
//! Spec: §4.6 — right-to-left traversal of a [`SelectorChain`]'s compounds,
//! advancing across combinators by asking the handler to navigate, and
//! §4.6a — the per-detail predicate table.
//!
//! The spec distinguishes a "named" combinator step (ask the handler for the
//! named ancestor/parent/sibling directly) from a "universal" one (ask for
//! the generic parent/sibling, then test). That distinction is a lookup
//! acceleration a host *could* offer via an indexed tree; [`MatchHandler`]
//! only exposes the generic navigation primitives, so every step here walks
//! generically and relies on [`matches_compound`] to reject non-matches. The
//! two strategies are observably identical — a named lookup that returns a
//! wrong-named node would simply fail the subsequent compound match anyway.

use crate::chain::{CompoundSelector, SelectorChain};
use crate::detail::{Combinator, Detail, DetailKind};
use crate::handler::MatchHandler;

/// Evaluate every detail of one compound selector against `node` (§4.6a).
/// All details must match; an empty compound (shouldn't occur in a
/// well-formed chain) trivially matches.
pub fn matches_compound<H: MatchHandler>(handler: &H, node: H::Node, compound: &CompoundSelector) -> bool {
    compound
        .details
        .iter()
        .all(|detail| matches_detail(handler, node, detail))
}

fn matches_detail<H: MatchHandler>(handler: &H, node: H::Node, detail: &Detail) -> bool {
    match detail.kind {
        DetailKind::Universal => true,
        DetailKind::Element => handler.node_has_name(node, detail.name),
        DetailKind::Class => handler.node_has_class(node, detail.name),
        DetailKind::Id => handler.node_has_id(node, detail.name),
        DetailKind::Attribute => handler.node_has_attribute(node, detail.name),
        DetailKind::AttributeEquals => match detail.value {
            Some(value) => handler.node_has_attribute_equals(node, detail.name, value),
            None => false,
        },
        DetailKind::AttributeDashmatch => match detail.value {
            Some(value) => handler.node_has_attribute_dashmatch(node, detail.name, value),
            None => false,
        },
        DetailKind::AttributeIncludes => match detail.value {
            Some(value) => handler.node_has_attribute_includes(node, detail.name, value),
            None => false,
        },
        DetailKind::PseudoClass => handler.matches_pseudo_class(node, detail.name),
        DetailKind::PseudoElement => handler.matches_pseudo_element(node, detail.name),
    }
}

/// Walk a full chain right-to-left starting at `node` (§4.6). Returns
/// `true` iff every compound, linked by its combinator, finds a matching
/// node.
pub fn matches_chain<H: MatchHandler>(handler: &H, node: H::Node, chain: &SelectorChain) -> bool {
    if !matches_compound(handler, node, &chain.rightmost) {
        return false;
    }

    let mut current = node;
    for (combinator, compound) in &chain.ancestors {
        match combinator {
            Combinator::None => {
                if !matches_compound(handler, current, compound) {
                    return false;
                }
            }
            Combinator::Child => {
                let Some(parent) = handler.parent(current) else {
                    return false;
                };
                if !matches_compound(handler, parent, compound) {
                    return false;
                }
                current = parent;
            }
            Combinator::AdjacentSibling => {
                let Some(sibling) = handler.previous_sibling(current) else {
                    return false;
                };
                if !matches_compound(handler, sibling, compound) {
                    return false;
                }
                current = sibling;
            }
            Combinator::Descendant => match find_matching_ancestor(handler, current, compound) {
                Some(ancestor) => current = ancestor,
                None => return false,
            },
        }
    }

    true
}

/// Step through ancestors one parent at a time until `compound` matches one
/// of them, or the root is reached without a match.
fn find_matching_ancestor<H: MatchHandler>(
    handler: &H,
    node: H::Node,
    compound: &CompoundSelector,
) -> Option<H::Node> {
    let mut candidate = handler.parent(node)?;
    loop {
        if matches_compound(handler, candidate, compound) {
            return Some(candidate);
        }
        candidate = handler.parent(candidate)?;
    }
}
