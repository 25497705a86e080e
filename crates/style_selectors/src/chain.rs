//! Selector chains: a right-to-left sequence of compound selectors joined by
//! combinators, plus the precomputed specificity for the whole chain.
//!
//! Spec: §3 — "A right-to-left chain of *details* joined by *combinators*
//! ... Each chain stores a precomputed specificity."

use smallvec::SmallVec;

use crate::detail::{Combinator, Detail};
use crate::specificity::Specificity;

/// A sequence of details sharing no combinator between them — e.g. all of
/// `div.foo#bar[baz]` is one compound.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompoundSelector {
    pub details: SmallVec<[Detail; 4]>,
}

impl CompoundSelector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, detail: Detail) {
        self.details.push(detail);
    }
}

/// A full selector chain: the rightmost (subject) compound, then zero or
/// more `(combinator, compound)` pairs walking leftwards (towards more
/// distant ancestors), plus the chain's precomputed specificity.
///
/// `ancestors[0]` is the compound immediately to the left of `rightmost`;
/// `ancestors.last()` is the leftmost (outermost) compound in the chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorChain {
    pub rightmost: CompoundSelector,
    pub ancestors: Vec<(Combinator, CompoundSelector)>,
    pub specificity: Specificity,
}

impl SelectorChain {
    #[must_use]
    pub fn new(rightmost: CompoundSelector, ancestors: Vec<(Combinator, CompoundSelector)>) -> Self {
        let specificity = crate::specificity::compute(&rightmost, &ancestors);
        Self {
            rightmost,
            ancestors,
            specificity,
        }
    }

    /// True if the chain is a single compound with no combinators — the
    /// common case (`div`, `.foo`, `#bar`).
    #[must_use]
    pub fn is_simple(&self) -> bool {
        self.ancestors.is_empty()
    }
}
