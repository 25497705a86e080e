//! Interned-string facility.
//!
//! This is the one "external collaborator" from spec §1 that this workspace
//! actually provides an implementation of, since the corpus has no existing
//! interner crate to depend on directly. It is kept deliberately thin: a
//! [`Symbol`] is a `Copy` handle that compares by identity (the underlying
//! `lasso::Spur` index), matching the "two handles refer to the same string
//! iff pointer-equal" contract from spec §3. Selector/attribute/family names
//! flow through this pervasively.
#![forbid(unsafe_code)]

use lasso::{Key, Spur, ThreadedRodeo};

/// An interned string handle. Cheap to copy, compares by identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Symbol(Spur);

impl Symbol {
    /// Encode as a raw word for storage in a bytecode operand (spec §3:
    /// name/string operands are interned handles, and the bytecode format
    /// itself only moves opaque 32-bit words). Valid only within the
    /// process that produced it, same as `Spur` itself — there is no
    /// cross-process serialization story here.
    #[must_use]
    pub fn to_raw(self) -> u32 {
        self.0.into_usize() as u32
    }

    /// Inverse of [`Self::to_raw`]. Panics if `raw` is not a value a
    /// `Spur` could have produced; callers only ever round-trip values
    /// obtained from `to_raw` within the same interner.
    #[must_use]
    pub fn from_raw(raw: u32) -> Self {
        Self(Spur::try_from_usize(raw as usize).expect("raw word is not a valid interned handle"))
    }
}

/// A deduplicated, thread-safe string table.
///
/// Stylesheets may be shared between selection contexts running on different
/// threads (spec §5), so interning itself must be thread-safe; `ThreadedRodeo`
/// gives us that without the engine needing its own locking.
#[derive(Debug, Default)]
pub struct Interner(ThreadedRodeo);

impl Interner {
    #[must_use]
    pub fn new() -> Self {
        Self(ThreadedRodeo::new())
    }

    /// Intern `text`, returning a handle. Interning the same text twice
    /// (from any thread) returns an equal `Symbol`.
    pub fn intern(&self, text: &str) -> Symbol {
        Symbol(self.0.get_or_intern(text))
    }

    /// Resolve a handle back to its text. Panics if `symbol` was not
    /// produced by this interner, matching `lasso`'s own contract.
    #[must_use]
    pub fn resolve(&self, symbol: Symbol) -> &str {
        self.0.resolve(&symbol.0)
    }

    /// Look up an already-interned string without interning it.
    #[must_use]
    pub fn get(&self, text: &str) -> Option<Symbol> {
        self.0.get(text).map(Symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::Interner;

    #[test]
    fn same_text_interns_to_equal_symbol() {
        let interner = Interner::new();
        let a = interner.intern("div");
        let b = interner.intern("div");
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_text_interns_to_distinct_symbol() {
        let interner = Interner::new();
        let a = interner.intern("div");
        let b = interner.intern("span");
        assert_ne!(a, b);
    }

    #[test]
    fn resolve_round_trips() {
        let interner = Interner::new();
        let handle = interner.intern("color");
        assert_eq!(interner.resolve(handle), "color");
    }

    #[test]
    fn get_without_interning() {
        let interner = Interner::new();
        assert!(interner.get("nope").is_none());
        interner.intern("nope");
        assert!(interner.get("nope").is_some());
    }

    #[test]
    fn raw_round_trips() {
        let interner = Interner::new();
        let symbol = interner.intern("content");
        assert_eq!(super::Symbol::from_raw(symbol.to_raw()), symbol);
    }
}
