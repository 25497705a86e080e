//! The cascade interpreter: walks a rule's bytecode blob, decodes each
//! property's operand(s) per its family, and applies the winner.
//!
//! Spec §4.7. Grounded on the teacher's `storage/cascade.rs` for the
//! winner-tracking shape; the operand decode tables are this crate's own,
//! since the teacher has no bytecode format (it cascades parsed `Value`
//! trees directly) — built from §3's operand-shape table instead.

use std::fmt;

use style_intern::Symbol;
use style_sheet::BytecodeCursor;

use crate::cascade::{outranks_existing, CascadeSlot, CascadeState, Origin};
use crate::computed::ComputedStyle;
use crate::property::{from_opcode, property_meta, Family, PropertyId};
use crate::value::{
    BgBorderColor, BgPosComponent, BgPosKeyword, BackgroundPositionValue, ClipComponent,
    ClipValue, ContentItem, CounterOp, CounterStyle, LengthOrAuto, LengthOrNone, LengthOrNormal,
    LengthValue, Rgba, Unit, Value,
};

/// Fatal interpreter failures. Spec §4.7/§7: "A buggy blob (cursor
/// overruns) is a fatal error" — `style_engine` maps this into
/// `StyleError::Invalid`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterpretError {
    CursorOverrun,
    UnknownOpcode(u16),
    MalformedOperand,
}

impl fmt::Display for InterpretError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CursorOverrun => write!(f, "bytecode cursor overran its blob"),
            Self::UnknownOpcode(op) => write!(f, "bytecode referenced unknown opcode {op}"),
            Self::MalformedOperand => write!(f, "bytecode operand did not match its family's shape"),
        }
    }
}

impl std::error::Error for InterpretError {}

const END_MARKER: u32 = u32::MAX;

fn next_word(cursor: &mut BytecodeCursor<'_>) -> Result<u32, InterpretError> {
    cursor.next_word().ok_or(InterpretError::CursorOverrun)
}

fn next_symbol(cursor: &mut BytecodeCursor<'_>) -> Result<Symbol, InterpretError> {
    Ok(Symbol::from_raw(next_word(cursor)?))
}

fn next_fixed(cursor: &mut BytecodeCursor<'_>) -> Result<style_fixed::Fixed, InterpretError> {
    Ok(style_fixed::Fixed::from_bits(next_word(cursor)? as i32))
}

fn next_unit(cursor: &mut BytecodeCursor<'_>) -> Result<Unit, InterpretError> {
    match next_word(cursor)? {
        0 => Ok(Unit::Px),
        1 => Ok(Unit::Em),
        2 => Ok(Unit::Ex),
        3 => Ok(Unit::Percent),
        4 => Ok(Unit::In),
        5 => Ok(Unit::Cm),
        6 => Ok(Unit::Mm),
        7 => Ok(Unit::Pt),
        8 => Ok(Unit::Pc),
        _ => Err(InterpretError::MalformedOperand),
    }
}

fn next_length(cursor: &mut BytecodeCursor<'_>) -> Result<LengthValue, InterpretError> {
    let value = next_fixed(cursor)?;
    let unit = next_unit(cursor)?;
    Ok(LengthValue { value, unit })
}

fn next_rgba(cursor: &mut BytecodeCursor<'_>) -> Result<Rgba, InterpretError> {
    let word = next_word(cursor)?;
    Ok(Rgba {
        r: (word >> 24) as u8,
        g: (word >> 16) as u8,
        b: (word >> 8) as u8,
        a: word as u8,
    })
}

fn next_counter_style(cursor: &mut BytecodeCursor<'_>) -> Result<CounterStyle, InterpretError> {
    match next_word(cursor)? {
        0 => Ok(CounterStyle::Decimal),
        1 => Ok(CounterStyle::DecimalLeadingZero),
        2 => Ok(CounterStyle::LowerRoman),
        3 => Ok(CounterStyle::UpperRoman),
        4 => Ok(CounterStyle::LowerAlpha),
        5 => Ok(CounterStyle::UpperAlpha),
        6 => Ok(CounterStyle::None),
        _ => Err(InterpretError::MalformedOperand),
    }
}

/// Decode one property's value given its already-read OPV word. Consumes
/// whatever trailing operand words its family needs (§3's table);
/// `Ok(None)` means the OPV's inherit bit was set (§4.7 step 2: "set value
/// <- inherit and leave operands empty").
fn decode_value(
    family: Family,
    value_bits: u16,
    inherit: bool,
    cursor: &mut BytecodeCursor<'_>,
) -> Result<Value, InterpretError> {
    if inherit {
        return Ok(Value::Inherit);
    }
    match family {
        Family::KeywordOnly => Ok(Value::Keyword(value_bits)),
        Family::Color => Ok(Value::Color(next_rgba(cursor)?)),
        Family::Length => Ok(Value::Length(next_length(cursor)?)),
        Family::LengthOrAuto => Ok(Value::LengthOrAuto(if value_bits == 0 {
            LengthOrAuto::Set(next_length(cursor)?)
        } else {
            LengthOrAuto::Auto
        })),
        Family::LengthOrNormal => Ok(Value::LengthOrNormal(if value_bits == 0 {
            LengthOrNormal::Set(next_length(cursor)?)
        } else {
            LengthOrNormal::Normal
        })),
        Family::LengthOrNone => Ok(Value::LengthOrNone(if value_bits == 0 {
            LengthOrNone::Set(next_length(cursor)?)
        } else {
            LengthOrNone::None
        })),
        Family::Number => Ok(Value::Number(next_fixed(cursor)?)),
        Family::UriOrNone => Ok(Value::UriOrNone(if value_bits == 0 {
            None
        } else {
            Some(next_symbol(cursor)?)
        })),
        Family::BorderWidth => match value_bits {
            0 => Ok(Value::Length(LengthValue {
                value: style_fixed::Fixed::from_int(1),
                unit: Unit::Px,
            })),
            1 => Ok(Value::Length(LengthValue {
                value: style_fixed::Fixed::from_int(2),
                unit: Unit::Px,
            })),
            2 => Ok(Value::Length(LengthValue {
                value: style_fixed::Fixed::from_int(4),
                unit: Unit::Px,
            })),
            3 => Ok(Value::Length(next_length(cursor)?)),
            _ => Err(InterpretError::MalformedOperand),
        },
        Family::BorderStyle => Ok(Value::Keyword(value_bits)),
        Family::BgBorderColor => match value_bits {
            0 => Ok(Value::BgBorderColor(BgBorderColor::Transparent)),
            1 => Ok(Value::BgBorderColor(BgBorderColor::Set(next_rgba(cursor)?))),
            2 => Ok(Value::BgBorderColor(BgBorderColor::UseComputedColor)),
            _ => Err(InterpretError::MalformedOperand),
        },
        Family::Counter => {
            let mut ops = Vec::new();
            loop {
                let name_word = next_word(cursor)?;
                if name_word == END_MARKER {
                    break;
                }
                let amount = next_word(cursor)? as i32;
                ops.push(CounterOp {
                    name: Symbol::from_raw(name_word),
                    amount,
                });
            }
            Ok(Value::CounterOps(ops))
        }
        Family::Content => Ok(Value::Content(decode_content(cursor)?)),
        Family::FamilyList | Family::CursorList => {
            let mut symbols = Vec::new();
            loop {
                let word = next_word(cursor)?;
                if word == END_MARKER {
                    break;
                }
                symbols.push(Symbol::from_raw(word));
            }
            Ok(Value::SymbolList(symbols))
        }
        Family::QuotesList => {
            let mut pairs = Vec::new();
            loop {
                let open = next_word(cursor)?;
                if open == END_MARKER {
                    break;
                }
                let close = next_word(cursor)?;
                pairs.push((Symbol::from_raw(open), Symbol::from_raw(close)));
            }
            Ok(Value::QuotesList(pairs))
        }
        Family::Clip => Ok(Value::Clip(decode_clip(value_bits, cursor)?)),
        Family::BackgroundPosition => Ok(Value::BackgroundPosition(decode_bg_position(
            value_bits, cursor,
        )?)),
    }
}

fn decode_content(cursor: &mut BytecodeCursor<'_>) -> Result<Vec<ContentItem>, InterpretError> {
    let mut items = Vec::new();
    loop {
        match next_word(cursor)? {
            0 => break,
            1 => items.push(ContentItem::Text(next_symbol(cursor)?)),
            2 => items.push(ContentItem::Attr(next_symbol(cursor)?)),
            3 => items.push(ContentItem::OpenQuote),
            4 => items.push(ContentItem::CloseQuote),
            5 => items.push(ContentItem::NoOpenQuote),
            6 => items.push(ContentItem::NoCloseQuote),
            7 => {
                let name = next_symbol(cursor)?;
                let style = next_counter_style(cursor)?;
                items.push(ContentItem::Counter(name, style));
            }
            8 => {
                let name = next_symbol(cursor)?;
                let separator = next_symbol(cursor)?;
                let style = next_counter_style(cursor)?;
                items.push(ContentItem::Counters(name, separator, style));
            }
            9 => items.push(ContentItem::Uri(next_symbol(cursor)?)),
            _ => return Err(InterpretError::MalformedOperand),
        }
    }
    Ok(items)
}

fn clip_side(
    mask: u16,
    bit: u16,
    cursor: &mut BytecodeCursor<'_>,
) -> Result<ClipComponent, InterpretError> {
    if mask & bit == 0 {
        Ok(ClipComponent::Auto)
    } else {
        Ok(ClipComponent::Set(next_length(cursor)?))
    }
}

fn decode_clip(mask: u16, cursor: &mut BytecodeCursor<'_>) -> Result<ClipValue, InterpretError> {
    let top = clip_side(mask, 0b0001, cursor)?;
    let right = clip_side(mask, 0b0010, cursor)?;
    let bottom = clip_side(mask, 0b0100, cursor)?;
    let left = clip_side(mask, 0b1000, cursor)?;
    Ok(ClipValue {
        top,
        right,
        bottom,
        left,
    })
}

fn bg_position_component(
    set: bool,
    cursor: &mut BytecodeCursor<'_>,
) -> Result<BgPosComponent, InterpretError> {
    if set {
        Ok(BgPosComponent::Set(next_length(cursor)?))
    } else {
        Ok(BgPosComponent::Keyword(match next_word(cursor)? {
            0 => BgPosKeyword::Top,
            1 => BgPosKeyword::Bottom,
            2 => BgPosKeyword::Left,
            3 => BgPosKeyword::Right,
            4 => BgPosKeyword::Center,
            _ => return Err(InterpretError::MalformedOperand),
        }))
    }
}

fn decode_bg_position(
    mode_bits: u16,
    cursor: &mut BytecodeCursor<'_>,
) -> Result<BackgroundPositionValue, InterpretError> {
    let horizontal = bg_position_component(mode_bits & 0b01 != 0, cursor)?;
    let vertical = bg_position_component(mode_bits & 0b10 != 0, cursor)?;
    Ok(BackgroundPositionValue {
        horizontal,
        vertical,
    })
}

/// Run §4.7 over one rule's bytecode blob: decode every OPV word, check
/// `outranks_existing`, and apply winners into `style`/`state`.
pub fn run_cascade(
    cursor: &mut BytecodeCursor<'_>,
    origin: Origin,
    specificity: style_selectors::Specificity,
    state: &mut CascadeState,
    style: &mut ComputedStyle,
) -> Result<(), InterpretError> {
    while !cursor.is_empty() {
        let opv = cursor.next_opv().ok_or(InterpretError::CursorOverrun)?;
        let id =
            from_opcode(opv.opcode).ok_or(InterpretError::UnknownOpcode(opv.opcode))?;
        let family = property_meta(id).family;
        let value = decode_value(family, opv.value, opv.inherit, cursor)?;

        let existing = state.get(id);
        if outranks_existing(&existing, origin, specificity, opv.important) {
            state.set(
                id,
                CascadeSlot {
                    set: true,
                    specificity,
                    origin,
                    important: opv.important,
                    inherit: opv.inherit,
                },
            );
            style.set(id, value);
        } else {
            log::trace!(
                "cascade: dropping losing declaration for {}",
                crate::property::static_name(id)
            );
        }
    }
    Ok(())
}

/// §4.8's presentational-hint application: the same setter path as
/// `run_cascade`, but the value arrives pre-decoded from the host rather
/// than from bytecode, always at `origin = author, specificity = 0`.
pub fn apply_hint(
    id: PropertyId,
    value: Value,
    important: bool,
    inherit: bool,
    state: &mut CascadeState,
    style: &mut ComputedStyle,
) -> bool {
    let existing = state.get(id);
    let specificity = style_selectors::Specificity(0);
    if outranks_existing(&existing, Origin::Author, specificity, important) {
        state.set(
            id,
            CascadeSlot {
                set: true,
                specificity,
                origin: Origin::Author,
                important,
                inherit,
            },
        );
        style.set(id, value);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use style_sheet::BytecodeBuilder;

    fn single_opv_blob(opcode: u16, value: u16, important: bool, inherit: bool) -> style_sheet::BytecodeBlob {
        let mut builder = BytecodeBuilder::new();
        builder.push_opv(style_sheet::Opv::new(opcode, value, important, inherit));
        builder.build()
    }

    #[test]
    fn keyword_only_property_cascades_without_operands() {
        let blob = single_opv_blob(crate::property::opcode(PropertyId::Display), 2, false, false);
        let mut cursor = blob.cursor();
        let mut state = CascadeState::new();
        let mut style = ComputedStyle::new();
        run_cascade(
            &mut cursor,
            Origin::Author,
            style_selectors::Specificity(10),
            &mut state,
            &mut style,
        )
        .expect("cascades cleanly");
        assert_eq!(style.get(PropertyId::Display), Some(&Value::Keyword(2)));
        assert!(cursor.is_empty());
    }

    #[test]
    fn lower_specificity_does_not_overwrite_winner() {
        let opcode = crate::property::opcode(PropertyId::Display);
        let mut state = CascadeState::new();
        let mut style = ComputedStyle::new();

        let first = single_opv_blob(opcode, 1, false, false);
        run_cascade(
            &mut first.cursor(),
            Origin::Author,
            style_selectors::Specificity(100),
            &mut state,
            &mut style,
        )
        .unwrap();

        let second = single_opv_blob(opcode, 2, false, false);
        run_cascade(
            &mut second.cursor(),
            Origin::Author,
            style_selectors::Specificity(10),
            &mut state,
            &mut style,
        )
        .unwrap();

        assert_eq!(style.get(PropertyId::Display), Some(&Value::Keyword(1)));
    }

    #[test]
    fn inherit_bit_produces_inherit_value() {
        let blob = single_opv_blob(crate::property::opcode(PropertyId::Color), 0, false, true);
        let mut state = CascadeState::new();
        let mut style = ComputedStyle::new();
        run_cascade(
            &mut blob.cursor(),
            Origin::Author,
            style_selectors::Specificity(0),
            &mut state,
            &mut style,
        )
        .unwrap();
        assert_eq!(style.get(PropertyId::Color), Some(&Value::Inherit));
    }

    #[test]
    fn unknown_opcode_is_an_error() {
        let mut builder = BytecodeBuilder::new();
        builder.push_word(0xFFFF_0000);
        let blob = builder.build();
        let mut state = CascadeState::new();
        let mut style = ComputedStyle::new();
        let result = run_cascade(
            &mut blob.cursor(),
            Origin::Author,
            style_selectors::Specificity(0),
            &mut state,
            &mut style,
        );
        assert!(matches!(result, Err(InterpretError::UnknownOpcode(_))));
    }

    #[test]
    fn color_family_consumes_rgba_operand() {
        let mut builder = BytecodeBuilder::new();
        builder.push_opv(style_sheet::Opv::new(
            crate::property::opcode(PropertyId::Color),
            0,
            false,
            false,
        ));
        builder.push_word(0x11223344);
        let blob = builder.build();
        let mut state = CascadeState::new();
        let mut style = ComputedStyle::new();
        run_cascade(
            &mut blob.cursor(),
            Origin::Author,
            style_selectors::Specificity(0),
            &mut state,
            &mut style,
        )
        .unwrap();
        assert_eq!(
            style.get(PropertyId::Color),
            Some(&Value::Color(Rgba {
                r: 0x11,
                g: 0x22,
                b: 0x33,
                a: 0x44
            }))
        );
    }
}
