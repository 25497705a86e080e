//! The computed-style record: one slot per common property, plus the
//! `uncommon`/`page`/`aural` extension blocks allocated lazily on first
//! touch.
//!
//! Spec: §3 — "a bit-packed 32-bit array covering common properties, plus
//! three optional blocks ... attached by pointer when any property within
//! is touched." Expansion (SPEC_FULL §5): Rust's `Box`/`Vec` ownership
//! replaces the original's manual allocator-and-free-on-every-path
//! discipline; "attached by pointer" becomes `Option<Box<[...]>>`, built on
//! first write and dropped automatically with the record.

use crate::property::{property_meta, PropertyId, StorageGroup, PROPERTIES};
use crate::value::Value;

fn group_index(id: PropertyId) -> usize {
    let group = property_meta(id).group;
    PROPERTIES
        .iter()
        .filter(|candidate| property_meta(**candidate).group == group)
        .position(|candidate| *candidate == id)
        .expect("id is a member of its own group")
}

fn group_len(group: StorageGroup) -> usize {
    PROPERTIES
        .iter()
        .filter(|candidate| property_meta(**candidate).group == group)
        .count()
}

/// One computed style. Common properties are always present (as a dense
/// `Vec<Option<Value>>` sized once at construction); the rarely-touched
/// groups start as `None` and are boxed in on first [`ComputedStyle::set`].
#[derive(Clone, Debug)]
pub struct ComputedStyle {
    common: Vec<Option<Value>>,
    uncommon: Option<Box<Vec<Option<Value>>>>,
    #[cfg(feature = "page")]
    page: Option<Box<Vec<Option<Value>>>>,
    #[cfg(feature = "aural")]
    aural: Option<Box<Vec<Option<Value>>>>,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputedStyle {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: vec![None; group_len(StorageGroup::Common)],
            uncommon: None,
            #[cfg(feature = "page")]
            page: None,
            #[cfg(feature = "aural")]
            aural: None,
        }
    }

    /// Read the current value, if this property has been touched at all
    /// (set by the cascade, a hint, or an initial-value fallback). `None`
    /// means "never touched" — distinct from `Some(Value::Inherit)`, which
    /// means "touched, and the composer must resolve it against the
    /// parent."
    #[must_use]
    pub fn get(&self, id: PropertyId) -> Option<&Value> {
        let index = group_index(id);
        match property_meta(id).group {
            StorageGroup::Common => self.common.get(index)?.as_ref(),
            StorageGroup::Uncommon => self.uncommon.as_ref()?.get(index)?.as_ref(),
            #[cfg(feature = "page")]
            StorageGroup::Page => self.page.as_ref()?.get(index)?.as_ref(),
            #[cfg(not(feature = "page"))]
            StorageGroup::Page => None,
            #[cfg(feature = "aural")]
            StorageGroup::Aural => self.aural.as_ref()?.get(index)?.as_ref(),
            #[cfg(not(feature = "aural"))]
            StorageGroup::Aural => None,
        }
    }

    /// Write a value, lazily allocating the owning extension block if this
    /// is its first touch.
    pub fn set(&mut self, id: PropertyId, value: Value) {
        let index = group_index(id);
        match property_meta(id).group {
            StorageGroup::Common => self.common[index] = Some(value),
            StorageGroup::Uncommon => {
                let block = self
                    .uncommon
                    .get_or_insert_with(|| Box::new(vec![None; group_len(StorageGroup::Uncommon)]));
                block[index] = Some(value);
            }
            #[cfg(feature = "page")]
            StorageGroup::Page => {
                let block = self
                    .page
                    .get_or_insert_with(|| Box::new(vec![None; group_len(StorageGroup::Page)]));
                block[index] = Some(value);
            }
            #[cfg(not(feature = "page"))]
            StorageGroup::Page => {}
            #[cfg(feature = "aural")]
            StorageGroup::Aural => {
                let block = self
                    .aural
                    .get_or_insert_with(|| Box::new(vec![None; group_len(StorageGroup::Aural)]));
                block[index] = Some(value);
            }
            #[cfg(not(feature = "aural"))]
            StorageGroup::Aural => {}
        }
    }

    /// Whether this record's extension block for `group` has ever been
    /// allocated. Used by [`crate::compose::compose`]'s "child lacks that
    /// block" branch (§4.9).
    #[must_use]
    pub fn has_block(&self, group: StorageGroup) -> bool {
        match group {
            StorageGroup::Common => true,
            StorageGroup::Uncommon => self.uncommon.is_some(),
            #[cfg(feature = "page")]
            StorageGroup::Page => self.page.is_some(),
            #[cfg(not(feature = "page"))]
            StorageGroup::Page => false,
            #[cfg(feature = "aural")]
            StorageGroup::Aural => self.aural.is_some(),
            #[cfg(not(feature = "aural"))]
            StorageGroup::Aural => false,
        }
    }
}
