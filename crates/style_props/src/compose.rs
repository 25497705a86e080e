//! Compose a child's own cascaded style against its parent's already-
//! composed style, resolving every remaining `inherit` marker.
//!
//! Spec §4.9: "If the child's value is `inherit` -> copy parent's resolved
//! value ... Else if the property lives in an extension block and the
//! child lacks that block while the parent has it -> inherit parent's
//! value. Else -> retain child's value." Grounded on the teacher's
//! `storage/inheritance.rs` for the general shape (a parent/child pair
//! feeding a per-property resolution), generalized from its recursive
//! string-keyed query to this crate's flat per-property pass.
//!
//! Open-question resolution (recorded in DESIGN.md): `style_engine`'s
//! `select_style` is responsible for turning a still-unset, CSS-inheriting
//! property into an explicit [`Value::Inherit`] marker whenever a parent
//! node exists (falling back to `initial` only when unset-and-non-
//! inheriting, or at the document root where there is no parent to inherit
//! from). That keeps this module's job limited to exactly the two branches
//! §4.9 names, rather than re-deriving "is this property inheritable" here.

use crate::computed::ComputedStyle;
use crate::property::{property_meta, PropertyId, PROPERTIES};
use crate::value::Value;

/// Compose one property. `result` may alias `child` (composing in place)
/// or be a fresh, empty record — either way list-bearing values are cloned
/// (Rust's `Value: Clone` is this engine's "deep copy", replacing the
/// original's manual `lwc_string_ref`/copy dance) so that later mutating
/// one of `parent`/`child`/`result` independently can never alias another.
fn compose_one(id: PropertyId, parent: &ComputedStyle, child: &ComputedStyle, result: &mut ComputedStyle) {
    let child_value = child.get(id);

    if let Some(Value::Inherit) = child_value {
        if let Some(parent_value) = parent.get(id) {
            result.set(id, parent_value.clone());
        }
        return;
    }

    let group = property_meta(id).group;
    if group != crate::property::StorageGroup::Common
        && !child.has_block(group)
        && parent.has_block(group)
    {
        if let Some(parent_value) = parent.get(id) {
            result.set(id, parent_value.clone());
        }
        return;
    }

    if let Some(value) = child_value {
        result.set(id, value.clone());
    }
}

/// Compose every property (§4.9, applied property-by-property as the spec
/// describes). Idempotent: composing the same `(parent, child)` into a
/// fresh `result` twice produces equal records (modulo allocation
/// identity, same as the spec's idempotence note).
pub fn compose(parent: &ComputedStyle, child: &ComputedStyle, result: &mut ComputedStyle) {
    for id in PROPERTIES {
        compose_one(*id, parent, child, result);
    }
}
