//! The full host surface the engine needs: selector matching
//! ([`style_selectors::MatchHandler`]) plus the three extra callbacks §4.2's
//! `select_style` contract and §4.8/§4.10 call out directly.
//!
//! Spec §6: "Handler table (client-provided) ... `node_name -> name`;
//! `node_classes -> list+count`; `node_id -> id|null`; ... " — the name/id/
//! class *accessors* (as opposed to the `node_has_*` match predicates
//! `MatchHandler` already covers) are needed here because §4.5's selector-hash
//! lookup keys its four buckets on the queried node's own identity, not on an
//! arbitrary candidate name baked into a selector.

use style_intern::Symbol;
use style_props::value::LengthValue;
use style_props::{PropertyId, UaDefaults, Value};
use style_selectors::MatchHandler;

/// §4.8: "query `handler.node_presentational_hint(node, property) ->
/// CSS_PROPERTY_NOT_SET | hint`." Returning `None` is the in-band
/// "not set" signal, never an error. `inherit` mirrors "hint.status==0"
/// from the spec's phrasing — `false` here means the hint supplies a
/// literal value, `true` means the hint is itself an explicit inherit.
#[derive(Clone, Debug, PartialEq)]
pub struct PresentationalHint {
    pub value: Value,
    pub inherit: bool,
}

/// Extends [`MatchHandler`] with the rest of §6's handler table that only
/// the cascade/compose side of the engine needs. A consumer that only wants
/// selector matching can implement `MatchHandler` alone; `select_style`
/// requires the full `StyleHandler`.
pub trait StyleHandler: MatchHandler + UaDefaults {
    /// §4.5: the node's own element name, used to pick the selector hash's
    /// by-name bucket.
    fn node_name(&self, node: Self::Node) -> Symbol;

    /// §4.5: the node's `id` attribute, if any.
    fn node_id(&self, node: Self::Node) -> Option<Symbol>;

    /// §4.5: the node's class list (possibly empty).
    fn node_classes(&self, node: Self::Node) -> Vec<Symbol>;

    /// §4.8: a presentational hint for `property`, or `None` if the host has
    /// nothing to contribute (`CSS_PROPERTY_NOT_SET`).
    fn node_presentational_hint(&self, node: Self::Node, property: PropertyId) -> Option<PresentationalHint>;

    /// §4.10/§6: `compute_font_size(parent_hint?, size_in_out)` — resolve
    /// `specified` (the node's own, possibly font-relative, `font-size`
    /// value) to an absolute pixel size, given the parent's already-resolved
    /// absolute font size (`None` at the document root). Delegated entirely
    /// to the host since it requires font-metrics knowledge this crate
    /// deliberately doesn't have (spec §1 Non-goals: "no font metrics").
    fn compute_font_size(
        &self,
        node: Self::Node,
        parent_font_size: Option<style_fixed::Fixed>,
        specified: LengthValue,
    ) -> style_fixed::Fixed;
}
