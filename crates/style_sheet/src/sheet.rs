//! A parsed stylesheet: its rule arena plus the selector hash built over
//! it.
//!
//! Spec: §3 — "Stylesheet. Ordered list of rules plus a selector hash ...
//! Invariant: rule indices within a sheet are strictly increasing in
//! document order; the selector hash only indexes rules of type
//! `selector`."

use crate::hash::SelectorHash;
use crate::media::MediaMask;
use crate::rule::{Parent, Rule, RuleData};

/// A stylesheet: read-only after construction. `inline_style` marks a
/// synthetic one-rule sheet built from a node's `style="..."` attribute
/// (§4.2's contract requires it to contain exactly one selector rule with
/// zero items; `style_engine` enforces that shape at the call site, this
/// type just carries the flag so `insert_sheet` can reject it per §4.2).
#[derive(Clone, Debug, Default)]
pub struct Stylesheet {
    rules: Vec<Rule>,
    hash: SelectorHash,
    pub inline_style: bool,
}

impl Stylesheet {
    /// Build a stylesheet from an already-ordered rule list. `rules` must
    /// satisfy the §3 invariant (strictly increasing `index` among
    /// siblings) — this is a caller contract, not re-validated here, same
    /// as the corpus trusts its parser to produce well-formed output.
    #[must_use]
    pub fn new(rules: Vec<Rule>) -> Self {
        let hash = SelectorHash::build(&rules);
        Self {
            rules,
            hash,
            inline_style: false,
        }
    }

    #[must_use]
    pub fn inline(rule: Rule) -> Self {
        let mut sheet = Self::new(vec![rule]);
        sheet.inline_style = true;
        sheet
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub fn rule(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    #[must_use]
    pub fn selector_hash(&self) -> &SelectorHash {
        &self.hash
    }

    /// Leading `@charset` rules come before anything that can match; this
    /// gives the traversal (§4.4) a starting index that skips past them.
    #[must_use]
    pub fn first_non_charset_rule(&self) -> usize {
        self.rules
            .iter()
            .position(|rule| !matches!(rule.data, RuleData::Charset))
            .unwrap_or(self.rules.len())
    }

    /// Walk `rule_index`'s ancestor chain (through nested `@media` rules)
    /// and test that every enclosing mask intersects `active`. A rule with
    /// no enclosing `@media` always applies. §4.5: "Walk up the rule's
    /// ancestor chain: if any enclosing `@media` rule's mask does not
    /// intersect active media, skip."
    #[must_use]
    pub fn media_applies(&self, rule_index: usize, active: MediaMask) -> bool {
        let mut current = rule_index;
        loop {
            let Some(rule) = self.rules.get(current) else {
                return true;
            };
            match rule.parent {
                Parent::Stylesheet => return true,
                Parent::Rule(parent_index) => {
                    if let Some(parent_rule) = self.rules.get(parent_index) {
                        if let RuleData::Media { mask, .. } = &parent_rule.data {
                            if !mask.intersects(active) {
                                return false;
                            }
                        }
                    }
                    current = parent_index;
                }
            }
        }
    }
}
