//! Selector details (the simple-selector predicates within one compound) and
//! combinators between compounds.
//!
//! Spec: §3 — "Each detail has a type (element, class, id, pseudo-class,
//! pseudo-element, attribute, attribute-equals, attribute-dashmatch,
//! attribute-includes), an interned name, and an optional interned value."

use style_intern::Symbol;

/// The kind of predicate one [`Detail`] evaluates against a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DetailKind {
    /// Element/type selector.
    Element,
    /// The universal selector (`*`). Always matches; contributes nothing to
    /// specificity. Spec §4.6a lists this as a distinct predicate row from
    /// plain `element`.
    Universal,
    Class,
    Id,
    PseudoClass,
    PseudoElement,
    Attribute,
    AttributeEquals,
    AttributeDashmatch,
    AttributeIncludes,
}

/// One simple-selector predicate. `value` is only meaningful for the
/// attribute-value kinds; pseudo-classes/elements and bare attribute
/// presence checks leave it `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Detail {
    pub kind: DetailKind,
    pub name: Symbol,
    pub value: Option<Symbol>,
}

impl Detail {
    #[must_use]
    pub const fn new(kind: DetailKind, name: Symbol) -> Self {
        Self {
            kind,
            name,
            value: None,
        }
    }

    #[must_use]
    pub const fn with_value(kind: DetailKind, name: Symbol, value: Symbol) -> Self {
        Self {
            kind,
            name,
            value: Some(value),
        }
    }

    /// The universal selector `*`. `name` is still carried (interned `"*"`)
    /// so debug printing and the selector hash's universal bucket have
    /// something stable to key on, but matching never inspects it.
    #[must_use]
    pub const fn universal(star: Symbol) -> Self {
        Self {
            kind: DetailKind::Universal,
            name: star,
            value: None,
        }
    }
}

/// Combinator joining one compound selector to the next (reading
/// right-to-left, as matching proceeds).
///
/// Spec: §3 — "(none, descendant, child, adjacent-sibling)". CSS 2.1 has no
/// general-sibling (`~`) combinator; that's a Selectors Level 3 addition and
/// is explicitly out of scope (spec §1 Non-goals).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Combinator {
    None,
    Descendant,
    Child,
    AdjacentSibling,
}
