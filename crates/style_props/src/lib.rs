//! The property dispatch table, computed-style record, and cascade
//! interpreter.
//!
//! Spec: §3 (computed-style record, property-cascade state, bytecode
//! operand table), §4.7–§4.9 (cascade interpreter, hints & initial values,
//! compose). See `SPEC_FULL.md` §3's "representative property coverage"
//! note for the scope decision on which CSS 2.1 properties are wired.
#![forbid(unsafe_code)]

pub mod cascade;
pub mod compose;
pub mod computed;
pub mod host;
pub mod initial;
pub mod interpreter;
pub mod keywords;
pub mod property;
pub mod value;

pub use cascade::{CascadeSlot, CascadeState, Origin};
pub use computed::ComputedStyle;
pub use host::UaDefaults;
pub use initial::initial_value;
pub use interpreter::{apply_hint, run_cascade, InterpretError};
pub use property::{property_meta, Family, PropertyId, StorageGroup, PROPERTIES};
pub use value::Value;
