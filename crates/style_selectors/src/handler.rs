//! The navigation/predicate surface the matcher needs from a host tree.
//!
//! Spec: §4.6a — "Matching a compound selector against a node requires only
//! a small, fixed set of predicates and navigation steps; everything else in
//! the engine is built on top of this handler." Mirrors the shape of the
//! teacher's `selectors::Element` trait, but keyed on interned [`Symbol`]s
//! instead of borrowed strings, since every name a stylesheet can reference
//! is already interned by the time matching runs.

use style_intern::Symbol;

/// Everything [`crate::matcher`] needs to know about one node in the host
/// tree, and how to step to its neighbors. Method names follow the
/// `node_has_*` delegate table in §4.6a directly.
///
/// `Node` is an opaque handle the host owns (a tree index, a pointer
/// wrapper, whatever); this trait never assumes anything about its
/// representation beyond `Copy + Eq`.
pub trait MatchHandler {
    type Node: Copy + Eq;

    /// `element` detail: does the node's tag name equal `name`?
    fn node_has_name(&self, node: Self::Node, name: Symbol) -> bool;

    /// `id` detail.
    fn node_has_id(&self, node: Self::Node, id: Symbol) -> bool;

    /// `class` detail.
    fn node_has_class(&self, node: Self::Node, class: Symbol) -> bool;

    /// Bare `[attr]` presence check.
    fn node_has_attribute(&self, node: Self::Node, name: Symbol) -> bool;

    /// `[attr=value]`.
    fn node_has_attribute_equals(&self, node: Self::Node, name: Symbol, value: Symbol) -> bool;

    /// `[attr|=value]`: exact match or match up to and including a `-`.
    fn node_has_attribute_dashmatch(&self, node: Self::Node, name: Symbol, value: Symbol) -> bool;

    /// `[attr~=value]`: whitespace-separated token membership.
    fn node_has_attribute_includes(&self, node: Self::Node, name: Symbol, value: Symbol) -> bool;

    /// `first-child, link, visited, hover, active, focus` and any other
    /// pseudo-class the host chooses to support; unrecognized names must
    /// return `false` (§4.6a: "pseudo-class otherwise | no match").
    fn matches_pseudo_class(&self, node: Self::Node, name: Symbol) -> bool;

    /// `first-line, first-letter, before, after`.
    fn matches_pseudo_element(&self, node: Self::Node, name: Symbol) -> bool;

    /// The nearest element ancestor, or `None` at the document root.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// The nearest preceding element sibling, or `None` if this is the first
    /// element child of its parent.
    fn previous_sibling(&self, node: Self::Node) -> Option<Self::Node>;
}
