//! The minimal host surface `style_props` needs from the embedder, kept
//! separate from `style_selectors::MatchHandler` so this crate never has to
//! depend on tree navigation.
//!
//! Spec: §4.8 — "Initial functions for `color`, `font-family`, and `quotes`
//! defer to `handler.ua_default_for_property`." `style_engine::StyleHandler`
//! extends [`UaDefaults`] with the rest of §6's handler table.

use crate::property::PropertyId;
use crate::value::Value;

/// Supplies the user-agent default for the handful of properties whose
/// initial value isn't a fixed constant (§4.8).
pub trait UaDefaults {
    fn ua_default_for_property(&self, id: PropertyId) -> Value;
}
