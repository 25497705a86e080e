//! Rules within one stylesheet.
//!
//! Spec: §3 — "Ordered list of rules plus a selector hash. Each rule has:
//! type ..., monotonic index within sheet, item count, and a parent pointer
//! (rule or stylesheet)." And §9's Design Note: "represent as arena-
//! allocated nodes with integer indices plus a typed tag for parent kind
//! ... avoid cycles by never storing child→parent except as an index."

use style_selectors::SelectorChain;

use crate::bytecode::BytecodeBlob;
use crate::media::MediaMask;

/// The kind of parent a rule has: the stylesheet itself (top-level), or
/// another rule in the same sheet's arena (nested inside `@media`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parent {
    Stylesheet,
    Rule(usize),
}

/// One entry in a stylesheet's rule list. `index` is this rule's position
/// among its direct siblings in document order; `parent` never points
/// outside this sheet's own rule arena, which rules out cycles across
/// sheets by construction.
#[derive(Clone, Debug)]
pub struct Rule {
    pub index: u32,
    pub item_count: u32,
    pub parent: Parent,
    pub data: RuleData,
}

/// Variant-specific payload, one arm per rule type named in §3.
#[derive(Clone, Debug)]
pub enum RuleData {
    Unknown,
    Charset,
    /// A selector rule: one or more selector chains sharing one bytecode
    /// blob of declarations.
    Selector {
        chains: Vec<SelectorChain>,
        bytecode: BytecodeBlob,
    },
    /// `@media`: a mask plus the indices (into the owning sheet's rule
    /// arena) of the rules nested inside it.
    Media {
        mask: MediaMask,
        children: Vec<usize>,
    },
    /// `@import`: a resolved child stylesheet (absent if unresolved — the
    /// traversal in `style_engine` treats an unresolved import as simply
    /// contributing nothing) plus the media mask it was imported under.
    Import {
        child: Option<Box<crate::sheet::Stylesheet>>,
        mask: MediaMask,
    },
    /// `@font-face` — parsed but ignored by this engine (§4.4).
    FontFace,
    /// `@page` — parsed but ignored by the core cascade; surfaced only via
    /// the page extension block in `style_props` when that feature is on.
    Page,
}

impl Rule {
    #[must_use]
    pub const fn new(index: u32, item_count: u32, parent: Parent, data: RuleData) -> Self {
        Self {
            index,
            item_count,
            parent,
            data,
        }
    }

    #[must_use]
    pub const fn is_selector(&self) -> bool {
        matches!(self.data, RuleData::Selector { .. })
    }

    #[must_use]
    pub fn media_mask(&self) -> Option<MediaMask> {
        match &self.data {
            RuleData::Media { mask, .. } | RuleData::Import { mask, .. } => Some(*mask),
            _ => None,
        }
    }
}
