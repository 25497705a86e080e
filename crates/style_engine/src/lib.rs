//! Selection contexts, the host handler trait, and `select_style`: the
//! engine that ties `style_sheet`'s parsed rules and `style_selectors`'
//! matcher into `style_props`'s cascade, hints, and absolute-value
//! resolution.
//!
//! Spec: §4.2 (selection context contract, `select_style`'s 5-step
//! contract), §4.4 (stylesheet traversal), §4.5 (selector matching for one
//! node), §4.8 (presentational hints, initial-value fallback), §4.10 (root
//! absolute-value resolution), §6 (external interface, handler table,
//! error codes), §7 (error handling policy), §8 (end-to-end scenarios and
//! invariants).
#![forbid(unsafe_code)]

pub mod absolute;
pub mod context;
pub mod error;
pub mod handler;
pub mod select;

pub use context::{RegisteredSheet, SelectionContext};
pub use error::StyleError;
pub use handler::{PresentationalHint, StyleHandler};
pub use select::select_style;

pub use style_props::{ComputedStyle, Origin, PropertyId, Value};
pub use style_selectors::MatchHandler;
pub use style_sheet::{MediaMask, MediaType, Stylesheet};
