//! The engine's error type: a plain enum mirroring §6/§7's error-code list.
//!
//! `PROPERTY_NOT_SET` is deliberately absent — it's an in-band hint-query
//! result (`Option<Value>` on [`crate::handler::StyleHandler`]), never a
//! failure of `select_style` itself. Grounded on `style_props::InterpretError`'s
//! own hand-rolled `Display`/`Error` impls — the corpus doesn't reach for
//! `thiserror` for small closed error sets like this one.

use std::fmt;

/// Mirrors spec §6's error-code list (minus `Ok` and `PROPERTY_NOT_SET`,
/// which aren't failure states).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleError {
    /// A null/invalid caller argument — reject at the boundary (§7).
    BadParam,
    /// A structural invariant was broken: an inline style with more than one
    /// rule, an `@import` recursion stack overflow, a bytecode cursor
    /// overrun, or an unknown opcode.
    Invalid,
    /// Allocation failure. Rust's global allocator aborts on OOM rather than
    /// returning `Err` for `Vec`/`Box`, so this variant is carried for
    /// interface parity with §6 but is not otherwise reachable.
    NoMem,
    /// Parser-only in the original; surfaced here only if a handler
    /// implementation legitimately needs to report it.
    NeedData,
    BadCharset,
    Eof,
    ImportsPending,
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadParam => write!(f, "invalid or null argument"),
            Self::Invalid => write!(f, "structural invariant violated"),
            Self::NoMem => write!(f, "allocation failure"),
            Self::NeedData => write!(f, "parser needs more data"),
            Self::BadCharset => write!(f, "unrecognized or unsupported charset"),
            Self::Eof => write!(f, "unexpected end of input"),
            Self::ImportsPending => write!(f, "unresolved @import still pending"),
        }
    }
}

impl std::error::Error for StyleError {}

impl From<style_props::InterpretError> for StyleError {
    fn from(err: style_props::InterpretError) -> Self {
        log::error!("cascade interpreter failed: {err}");
        Self::Invalid
    }
}
