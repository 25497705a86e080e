//! The property identifier space: which properties exist, which operand
//! family their bytecode uses, which storage group their computed value
//! lives in, and whether they inherit.
//!
//! Spec: §3's bytecode operand table ("Operand shapes by property family")
//! and computed-style record ("common properties, plus three optional
//! blocks"). Expansion (SPEC_FULL §3): rather than the full ~120-property
//! CSS 2.1 set, this wires a representative subset — at least two member
//! properties per operand family and per storage group — so the dispatch
//! table structure is exercised completely; extending it to the full
//! property set is mechanical (one [`PROPERTIES`] row plus, if the family is
//! new, one decode/initial/compose arm).

use style_intern::Symbol;

/// One property. Declaration order here fixes each property's bytecode
/// opcode (§3: "bits 16-29 opcode (property index)") via its position in
/// [`PROPERTIES`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PropertyId {
    Color,
    BackgroundColor,
    BackgroundImage,
    Display,
    Position,
    Float,
    Clear,
    Overflow,
    Visibility,
    Direction,
    WhiteSpace,
    TextAlign,
    TextDecoration,
    FontStyle,
    FontVariant,
    FontWeight,
    FontSize,
    LineHeight,
    Width,
    Height,
    MinWidth,
    MinHeight,
    MaxWidth,
    MaxHeight,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
    Top,
    Right,
    Bottom,
    Left,
    BorderTopWidth,
    BorderRightWidth,
    BorderBottomWidth,
    BorderLeftWidth,
    BorderTopStyle,
    BorderRightStyle,
    BorderBottomStyle,
    BorderLeftStyle,
    BorderTopColor,
    BorderRightColor,
    BorderBottomColor,
    BorderLeftColor,
    FontFamily,
    Quotes,
    Cursor,
    Content,
    CounterIncrement,
    CounterReset,
    Clip,
    BackgroundPosition,
    LetterSpacing,
    WordSpacing,
    #[cfg(feature = "page")]
    Orphans,
    #[cfg(feature = "page")]
    Widows,
    #[cfg(feature = "page")]
    PageBreakBefore,
    #[cfg(feature = "page")]
    PageBreakAfter,
    #[cfg(feature = "page")]
    PageBreakInside,
    #[cfg(feature = "aural")]
    Speak,
    #[cfg(feature = "aural")]
    Volume,
}

/// The bytecode operand shape for a property, matching §3's table one row
/// per family (some families here — border-width/border-style/
/// bg-border-color — are the named per-family helper functions §4.7 calls
/// out: `cascade_border_width`, `cascade_border_style`,
/// `cascade_bg_border_color`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    KeywordOnly,
    Color,
    Length,
    LengthOrAuto,
    LengthOrNormal,
    LengthOrNone,
    Number,
    UriOrNone,
    Counter,
    Content,
    FamilyList,
    QuotesList,
    CursorList,
    Clip,
    BackgroundPosition,
    BorderWidth,
    BorderStyle,
    BgBorderColor,
}

/// Which of the computed-style record's blocks a property's value lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StorageGroup {
    Common,
    Uncommon,
    Page,
    Aural,
}

/// Static facts about a property: its operand family, storage group, and
/// whether it participates in §4.9 inheritance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyMeta {
    pub family: Family,
    pub group: StorageGroup,
    pub inherited: bool,
}

const fn meta(family: Family, group: StorageGroup, inherited: bool) -> PropertyMeta {
    PropertyMeta {
        family,
        group,
        inherited,
    }
}

use Family::{
    BackgroundPosition as BgPosFamily, BgBorderColor, BorderStyle as BorderStyleFamily,
    BorderWidth as BorderWidthFamily, Clip as ClipFamily, Color as ColorFamily,
    Content as ContentFamily, Counter as CounterFamily, CursorList, FamilyList,
    KeywordOnly, Length, LengthOrAuto, LengthOrNone, LengthOrNormal, Number, QuotesList,
    UriOrNone,
};
use StorageGroup::{Aural, Common, Page, Uncommon};

/// Declaration order here is this process's opcode assignment — stable
/// within one build, never persisted (§6: "No version negotiation; bytecode
/// is valid only within the same build").
pub const PROPERTIES: &[PropertyId] = &[
    PropertyId::Color,
    PropertyId::BackgroundColor,
    PropertyId::BackgroundImage,
    PropertyId::Display,
    PropertyId::Position,
    PropertyId::Float,
    PropertyId::Clear,
    PropertyId::Overflow,
    PropertyId::Visibility,
    PropertyId::Direction,
    PropertyId::WhiteSpace,
    PropertyId::TextAlign,
    PropertyId::TextDecoration,
    PropertyId::FontStyle,
    PropertyId::FontVariant,
    PropertyId::FontWeight,
    PropertyId::FontSize,
    PropertyId::LineHeight,
    PropertyId::Width,
    PropertyId::Height,
    PropertyId::MinWidth,
    PropertyId::MinHeight,
    PropertyId::MaxWidth,
    PropertyId::MaxHeight,
    PropertyId::MarginTop,
    PropertyId::MarginRight,
    PropertyId::MarginBottom,
    PropertyId::MarginLeft,
    PropertyId::PaddingTop,
    PropertyId::PaddingRight,
    PropertyId::PaddingBottom,
    PropertyId::PaddingLeft,
    PropertyId::Top,
    PropertyId::Right,
    PropertyId::Bottom,
    PropertyId::Left,
    PropertyId::BorderTopWidth,
    PropertyId::BorderRightWidth,
    PropertyId::BorderBottomWidth,
    PropertyId::BorderLeftWidth,
    PropertyId::BorderTopStyle,
    PropertyId::BorderRightStyle,
    PropertyId::BorderBottomStyle,
    PropertyId::BorderLeftStyle,
    PropertyId::BorderTopColor,
    PropertyId::BorderRightColor,
    PropertyId::BorderBottomColor,
    PropertyId::BorderLeftColor,
    PropertyId::FontFamily,
    PropertyId::Quotes,
    PropertyId::Cursor,
    PropertyId::Content,
    PropertyId::CounterIncrement,
    PropertyId::CounterReset,
    PropertyId::Clip,
    PropertyId::BackgroundPosition,
    PropertyId::LetterSpacing,
    PropertyId::WordSpacing,
    #[cfg(feature = "page")]
    PropertyId::Orphans,
    #[cfg(feature = "page")]
    PropertyId::Widows,
    #[cfg(feature = "page")]
    PropertyId::PageBreakBefore,
    #[cfg(feature = "page")]
    PropertyId::PageBreakAfter,
    #[cfg(feature = "page")]
    PropertyId::PageBreakInside,
    #[cfg(feature = "aural")]
    PropertyId::Speak,
    #[cfg(feature = "aural")]
    PropertyId::Volume,
];

/// Look up the static facts for `id`.
#[must_use]
pub fn property_meta(id: PropertyId) -> PropertyMeta {
    match id {
        PropertyId::Color => meta(ColorFamily, Common, true),
        PropertyId::BackgroundColor => meta(BgBorderColor, Common, false),
        PropertyId::BackgroundImage => meta(UriOrNone, Common, false),
        PropertyId::Display => meta(KeywordOnly, Common, false),
        PropertyId::Position => meta(KeywordOnly, Common, false),
        PropertyId::Float => meta(KeywordOnly, Common, false),
        PropertyId::Clear => meta(KeywordOnly, Common, false),
        PropertyId::Overflow => meta(KeywordOnly, Common, false),
        PropertyId::Visibility => meta(KeywordOnly, Common, true),
        PropertyId::Direction => meta(KeywordOnly, Common, true),
        PropertyId::WhiteSpace => meta(KeywordOnly, Common, true),
        PropertyId::TextAlign => meta(KeywordOnly, Common, true),
        PropertyId::TextDecoration => meta(KeywordOnly, Common, false),
        PropertyId::FontStyle => meta(KeywordOnly, Common, true),
        PropertyId::FontVariant => meta(KeywordOnly, Common, true),
        PropertyId::FontWeight => meta(KeywordOnly, Common, true),
        PropertyId::FontSize => meta(Length, Common, true),
        PropertyId::LineHeight => meta(LengthOrNormal, Common, true),
        PropertyId::Width => meta(LengthOrAuto, Common, false),
        PropertyId::Height => meta(LengthOrAuto, Common, false),
        PropertyId::MinWidth => meta(Length, Common, false),
        PropertyId::MinHeight => meta(Length, Common, false),
        PropertyId::MaxWidth => meta(LengthOrNone, Common, false),
        PropertyId::MaxHeight => meta(LengthOrNone, Common, false),
        PropertyId::MarginTop => meta(LengthOrAuto, Common, false),
        PropertyId::MarginRight => meta(LengthOrAuto, Common, false),
        PropertyId::MarginBottom => meta(LengthOrAuto, Common, false),
        PropertyId::MarginLeft => meta(LengthOrAuto, Common, false),
        PropertyId::PaddingTop => meta(Length, Common, false),
        PropertyId::PaddingRight => meta(Length, Common, false),
        PropertyId::PaddingBottom => meta(Length, Common, false),
        PropertyId::PaddingLeft => meta(Length, Common, false),
        PropertyId::Top => meta(LengthOrAuto, Common, false),
        PropertyId::Right => meta(LengthOrAuto, Common, false),
        PropertyId::Bottom => meta(LengthOrAuto, Common, false),
        PropertyId::Left => meta(LengthOrAuto, Common, false),
        PropertyId::BorderTopWidth => meta(BorderWidthFamily, Common, false),
        PropertyId::BorderRightWidth => meta(BorderWidthFamily, Common, false),
        PropertyId::BorderBottomWidth => meta(BorderWidthFamily, Common, false),
        PropertyId::BorderLeftWidth => meta(BorderWidthFamily, Common, false),
        PropertyId::BorderTopStyle => meta(BorderStyleFamily, Common, false),
        PropertyId::BorderRightStyle => meta(BorderStyleFamily, Common, false),
        PropertyId::BorderBottomStyle => meta(BorderStyleFamily, Common, false),
        PropertyId::BorderLeftStyle => meta(BorderStyleFamily, Common, false),
        PropertyId::BorderTopColor => meta(BgBorderColor, Common, false),
        PropertyId::BorderRightColor => meta(BgBorderColor, Common, false),
        PropertyId::BorderBottomColor => meta(BgBorderColor, Common, false),
        PropertyId::BorderLeftColor => meta(BgBorderColor, Common, false),
        PropertyId::FontFamily => meta(FamilyList, Common, true),
        PropertyId::Quotes => meta(QuotesList, Uncommon, true),
        PropertyId::Cursor => meta(CursorList, Uncommon, true),
        PropertyId::Content => meta(ContentFamily, Uncommon, false),
        PropertyId::CounterIncrement => meta(CounterFamily, Uncommon, false),
        PropertyId::CounterReset => meta(CounterFamily, Uncommon, false),
        PropertyId::Clip => meta(ClipFamily, Uncommon, false),
        PropertyId::BackgroundPosition => meta(BgPosFamily, Uncommon, false),
        PropertyId::LetterSpacing => meta(LengthOrNormal, Uncommon, true),
        PropertyId::WordSpacing => meta(LengthOrNormal, Uncommon, true),
        #[cfg(feature = "page")]
        PropertyId::Orphans => meta(Number, Page, true),
        #[cfg(feature = "page")]
        PropertyId::Widows => meta(Number, Page, true),
        #[cfg(feature = "page")]
        PropertyId::PageBreakBefore => meta(KeywordOnly, Page, false),
        #[cfg(feature = "page")]
        PropertyId::PageBreakAfter => meta(KeywordOnly, Page, false),
        #[cfg(feature = "page")]
        PropertyId::PageBreakInside => meta(KeywordOnly, Page, false),
        #[cfg(feature = "aural")]
        PropertyId::Speak => meta(KeywordOnly, Aural, true),
        #[cfg(feature = "aural")]
        PropertyId::Volume => meta(Number, Aural, false),
    }
}

/// The property's bytecode opcode: its index into [`PROPERTIES`].
///
/// # Panics
/// Panics if `id` is somehow absent from `PROPERTIES` — unreachable in
/// practice since every `PropertyId` variant has exactly one entry there.
#[must_use]
pub fn opcode(id: PropertyId) -> u16 {
    PROPERTIES
        .iter()
        .position(|candidate| *candidate == id)
        .expect("every PropertyId has an entry in PROPERTIES") as u16
}

/// Inverse of [`opcode`]: resolve a bytecode opcode word back to a property,
/// or `None` if it is out of range (a malformed blob — §4.7 treats this as
/// part of the "buggy blob" fatal-error case).
#[must_use]
pub fn from_opcode(opcode: u16) -> Option<PropertyId> {
    PROPERTIES.get(opcode as usize).copied()
}

/// A property name as it would appear in source CSS, for diagnostics.
/// Not used for matching (bytecode carries only opcodes).
#[must_use]
pub const fn static_name(id: PropertyId) -> &'static str {
    match id {
        PropertyId::Color => "color",
        PropertyId::BackgroundColor => "background-color",
        PropertyId::BackgroundImage => "background-image",
        PropertyId::Display => "display",
        PropertyId::Position => "position",
        PropertyId::Float => "float",
        PropertyId::Clear => "clear",
        PropertyId::Overflow => "overflow",
        PropertyId::Visibility => "visibility",
        PropertyId::Direction => "direction",
        PropertyId::WhiteSpace => "white-space",
        PropertyId::TextAlign => "text-align",
        PropertyId::TextDecoration => "text-decoration",
        PropertyId::FontStyle => "font-style",
        PropertyId::FontVariant => "font-variant",
        PropertyId::FontWeight => "font-weight",
        PropertyId::FontSize => "font-size",
        PropertyId::LineHeight => "line-height",
        PropertyId::Width => "width",
        PropertyId::Height => "height",
        PropertyId::MinWidth => "min-width",
        PropertyId::MinHeight => "min-height",
        PropertyId::MaxWidth => "max-width",
        PropertyId::MaxHeight => "max-height",
        PropertyId::MarginTop => "margin-top",
        PropertyId::MarginRight => "margin-right",
        PropertyId::MarginBottom => "margin-bottom",
        PropertyId::MarginLeft => "margin-left",
        PropertyId::PaddingTop => "padding-top",
        PropertyId::PaddingRight => "padding-right",
        PropertyId::PaddingBottom => "padding-bottom",
        PropertyId::PaddingLeft => "padding-left",
        PropertyId::Top => "top",
        PropertyId::Right => "right",
        PropertyId::Bottom => "bottom",
        PropertyId::Left => "left",
        PropertyId::BorderTopWidth => "border-top-width",
        PropertyId::BorderRightWidth => "border-right-width",
        PropertyId::BorderBottomWidth => "border-bottom-width",
        PropertyId::BorderLeftWidth => "border-left-width",
        PropertyId::BorderTopStyle => "border-top-style",
        PropertyId::BorderRightStyle => "border-right-style",
        PropertyId::BorderBottomStyle => "border-bottom-style",
        PropertyId::BorderLeftStyle => "border-left-style",
        PropertyId::BorderTopColor => "border-top-color",
        PropertyId::BorderRightColor => "border-right-color",
        PropertyId::BorderBottomColor => "border-bottom-color",
        PropertyId::BorderLeftColor => "border-left-color",
        PropertyId::FontFamily => "font-family",
        PropertyId::Quotes => "quotes",
        PropertyId::Cursor => "cursor",
        PropertyId::Content => "content",
        PropertyId::CounterIncrement => "counter-increment",
        PropertyId::CounterReset => "counter-reset",
        PropertyId::Clip => "clip",
        PropertyId::BackgroundPosition => "background-position",
        PropertyId::LetterSpacing => "letter-spacing",
        PropertyId::WordSpacing => "word-spacing",
        #[cfg(feature = "page")]
        PropertyId::Orphans => "orphans",
        #[cfg(feature = "page")]
        PropertyId::Widows => "widows",
        #[cfg(feature = "page")]
        PropertyId::PageBreakBefore => "page-break-before",
        #[cfg(feature = "page")]
        PropertyId::PageBreakAfter => "page-break-after",
        #[cfg(feature = "page")]
        PropertyId::PageBreakInside => "page-break-inside",
        #[cfg(feature = "aural")]
        PropertyId::Speak => "speak",
        #[cfg(feature = "aural")]
        PropertyId::Volume => "volume",
    }
}

/// `quotes`' list entries are (open, close) symbol pairs; this type alias
/// documents that shape at the property layer, the actual storage is in
/// [`crate::value::Value::QuotesList`].
pub type QuotePair = (Symbol, Symbol);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opcode_round_trips_for_every_property() {
        for (index, id) in PROPERTIES.iter().enumerate() {
            assert_eq!(opcode(*id), index as u16);
            assert_eq!(from_opcode(index as u16), Some(*id));
        }
    }

    #[test]
    fn every_family_has_at_least_two_properties() {
        use std::collections::HashMap;
        let mut counts: HashMap<Family, usize> = HashMap::new();
        for id in PROPERTIES {
            *counts.entry(property_meta(*id).family).or_default() += 1;
        }
        for count in counts.values() {
            assert!(*count >= 2);
        }
    }

    #[test]
    fn every_storage_group_has_at_least_two_properties() {
        use std::collections::HashMap;
        let mut counts: HashMap<StorageGroup, usize> = HashMap::new();
        for id in PROPERTIES {
            *counts.entry(property_meta(*id).group).or_default() += 1;
        }
        for count in counts.values() {
            assert!(*count >= 2);
        }
    }

    #[test]
    fn from_opcode_out_of_range_is_none() {
        assert_eq!(from_opcode(u16::MAX), None);
    }
}
