//! Decoded property values: the typed payloads a `cascade` function
//! produces after reading a property's operand words, per §3's operand
//! table.

use style_fixed::Fixed;
use style_intern::Symbol;

/// Length unit. Covers the relative units §4.10 resolves at the root
/// (`Em`, `Ex`, `Percent`) plus the fixed physical/absolute units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Px,
    Em,
    Ex,
    Percent,
    In,
    Cm,
    Mm,
    Pt,
    Pc,
}

impl Unit {
    /// §4.10: a length is "relative to font size" iff its unit is one of
    /// these three.
    #[must_use]
    pub const fn is_font_relative(self) -> bool {
        matches!(self, Self::Em | Self::Ex | Self::Percent)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LengthValue {
    pub value: Fixed,
    pub unit: Unit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthOrAuto {
    Auto,
    Set(LengthValue),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthOrNormal {
    Normal,
    Set(LengthValue),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthOrNone {
    None,
    Set(LengthValue),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };
}

/// `border-{side}-color`'s bg-border-color family value: either the special
/// "use the computed `color`" sentinel (§4.10: "if `border-{side}-color` is
/// `initial`, set it to the computed `color`"), `transparent`
/// (`background-color`'s non-set default), or a literal RGBA.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BgBorderColor {
    UseComputedColor,
    Transparent,
    Set(Rgba),
}

/// `counter-increment`/`counter-reset`: a list of (name, integer) pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterOp {
    pub name: Symbol,
    pub amount: i32,
}

/// The list-style used to render a `counter()`/`counters()` content item.
/// Kept separate from `list-style-type` proper (not modeled here) but reuses
/// the same vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterStyle {
    Decimal,
    DecimalLeadingZero,
    LowerRoman,
    UpperRoman,
    LowerAlpha,
    UpperAlpha,
    None,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentItem {
    Text(Symbol),
    Attr(Symbol),
    OpenQuote,
    CloseQuote,
    NoOpenQuote,
    NoCloseQuote,
    Counter(Symbol, CounterStyle),
    Counters(Symbol, Symbol, CounterStyle),
    Uri(Symbol),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipComponent {
    Auto,
    Set(LengthValue),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClipValue {
    pub top: ClipComponent,
    pub right: ClipComponent,
    pub bottom: ClipComponent,
    pub left: ClipComponent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BgPosComponent {
    Keyword(BgPosKeyword),
    Set(LengthValue),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BgPosKeyword {
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackgroundPositionValue {
    pub horizontal: BgPosComponent,
    pub vertical: BgPosComponent,
}

/// A fully decoded property value. One variant per operand family in §3's
/// table, plus the cross-family `Inherit` marker a `cascade` function
/// produces when the bytecode word's inherit bit is set (§4.7 step 2).
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Keyword(u16),
    Color(Rgba),
    BgBorderColor(BgBorderColor),
    Length(LengthValue),
    LengthOrAuto(LengthOrAuto),
    LengthOrNormal(LengthOrNormal),
    LengthOrNone(LengthOrNone),
    Number(Fixed),
    UriOrNone(Option<Symbol>),
    CounterOps(Vec<CounterOp>),
    Content(Vec<ContentItem>),
    SymbolList(Vec<Symbol>),
    QuotesList(Vec<(Symbol, Symbol)>),
    Clip(ClipValue),
    BackgroundPosition(BackgroundPositionValue),
    /// Value is "inherit": the composer (§4.9) resolves this against the
    /// parent's already-composed value.
    Inherit,
}

impl Value {
    #[must_use]
    pub const fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}
