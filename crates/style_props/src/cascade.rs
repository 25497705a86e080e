//! Per-property cascade state and the outranking rule that decides whether
//! an incoming declaration beats the current winner.
//!
//! Spec: §3 "Property-cascade state" and §4.3's outranking table. Grounded
//! on the teacher's `storage/cascade.rs` (`Declaration::wins_over`,
//! `Origin`, `CascadeEngine`) — same shape (origin + specificity +
//! important deciding a winner), generalized to the spec's literal
//! three-valued `Origin` instead of the teacher's four-valued
//! `{UserAgent, Author, Inline}` (see DESIGN.md: inline styles are handled
//! here as author-origin declarations applied after every sheet, not as a
//! fourth origin — `select_style` gives inline declarations no special
//! specificity boost beyond what their own bytecode carries, matching
//! §4.2 step 3 literally).

use style_selectors::Specificity;

use crate::property::{opcode, PropertyId, PROPERTIES};

/// §6: "Origins. Three-valued: UA < user < author. Stored in 2 bits."
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Origin {
    Ua,
    User,
    Author,
}

/// §3: "a `set` flag, a 24-bit specificity, a 2-bit origin, an `important`
/// flag, and an `inherit` flag."
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CascadeSlot {
    pub set: bool,
    pub specificity: Specificity,
    pub origin: Origin,
    pub important: bool,
    pub inherit: bool,
}

impl CascadeSlot {
    pub const UNSET: Self = Self {
        set: false,
        specificity: Specificity(0),
        origin: Origin::Ua,
        important: false,
        inherit: false,
    };
}

impl Default for CascadeSlot {
    fn default() -> Self {
        Self::UNSET
    }
}

/// The five-way total order the §4.3 table reduces to:
/// `UA(any) < user(normal) < author(normal) < author(important) <
/// user(important)`. Same tier falls through to the specificity check;
/// different tiers decide the winner outright. Verified cell-by-cell
/// against every entry in the spec's table.
const fn tier(origin: Origin, important: bool) -> u8 {
    match (origin, important) {
        (Origin::Ua, _) => 0,
        (Origin::User, false) => 1,
        (Origin::Author, false) => 2,
        (Origin::Author, true) => 3,
        (Origin::User, true) => 4,
    }
}

/// Decide whether an incoming declaration beats `existing` for the same
/// property, per §4.3's table.
///
/// "spec" cells in the table mean: incoming wins iff its specificity is
/// greater than or equal to the existing winner's — equality favors the
/// incoming declaration because callers feed candidates in non-decreasing
/// `(specificity, rule_index)` order (§4.5/§5's ordering guarantee), so a
/// later equal-specificity rule is always the more recent one.
#[must_use]
pub fn outranks_existing(
    existing: &CascadeSlot,
    incoming_origin: Origin,
    incoming_specificity: Specificity,
    incoming_important: bool,
) -> bool {
    if !existing.set {
        log::trace!("cascade: unset slot, incoming wins unconditionally");
        return true;
    }

    let existing_tier = tier(existing.origin, existing.important);
    let incoming_tier = tier(incoming_origin, incoming_important);
    let winner = match incoming_tier.cmp(&existing_tier) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Less => false,
        std::cmp::Ordering::Equal => incoming_specificity >= existing.specificity,
    };

    log::trace!(
        "cascade: existing origin={existing_origin:?} important={existing_important} spec={existing_spec:?} \
         vs incoming origin={incoming_origin:?} important={incoming_important} spec={incoming_specificity:?} -> {winner}",
        existing_origin = existing.origin,
        existing_important = existing.important,
        existing_spec = existing.specificity,
    );
    winner
}

/// Per-query cascade-state array, one [`CascadeSlot`] per property index
/// (§3: "Selection state ... the property-cascade array").
#[derive(Clone, Debug)]
pub struct CascadeState {
    slots: Vec<CascadeSlot>,
}

impl Default for CascadeState {
    fn default() -> Self {
        Self::new()
    }
}

impl CascadeState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: vec![CascadeSlot::UNSET; PROPERTIES.len()],
        }
    }

    #[must_use]
    pub fn get(&self, id: PropertyId) -> CascadeSlot {
        self.slots[opcode(id) as usize]
    }

    pub fn set(&mut self, id: PropertyId, slot: CascadeSlot) {
        self.slots[opcode(id) as usize] = slot;
    }
}
