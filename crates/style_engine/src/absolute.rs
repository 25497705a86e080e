//! §4.10: resolve the document root's computed style from relative units
//! (em/ex/%, whose meaning depends on font size) to absolute pixels, plus
//! the handful of keyword fixups that follow from that resolution.
//!
//! Grounded on the teacher's `style::used_value` pass for the general shape
//! ("walk every length-bearing property once, rewrite it in terms of an
//! already-resolved font size"); the per-unit conversion table and the
//! `UseComputedColor`/display-normalization fixups are this spec's own,
//! since the teacher resolves used values against layout, not this
//! selection-time computed-style record.
//!
//! Deliberate literal reading (DESIGN.md): §4.10 says only "`%` is relative
//! to font size," which this module takes at face value rather than
//! substituting real CSS's containing-block-relative percentage semantics
//! (out of scope here — there is no box tree to resolve against). `ex` has
//! no font-metrics backing in this engine (§1 Non-goals: "no font
//! metrics"), so it is approximated as half an `em`.

use style_fixed::Fixed;
use style_props::value::{
    BgBorderColor, ClipComponent, ClipValue, LengthOrAuto, LengthOrNone, LengthOrNormal,
    LengthValue, Unit,
};
use style_props::{keywords, ComputedStyle, PropertyId, Value, PROPERTIES};

use crate::error::StyleError;
use crate::handler::StyleHandler;

/// Physical units are converted to pixels at a fixed 96 DPI, the value every
/// modern rendering engine treats as its "CSS pixel" reference.
const PX_PER_INCH: f32 = 96.0;

fn physical_unit_to_px(value: Fixed, unit: Unit) -> Fixed {
    let factor = match unit {
        Unit::Px => return value,
        Unit::In => PX_PER_INCH,
        Unit::Cm => PX_PER_INCH / 2.54,
        Unit::Mm => PX_PER_INCH / 25.4,
        Unit::Pt => PX_PER_INCH / 72.0,
        Unit::Pc => PX_PER_INCH / 6.0,
        Unit::Em | Unit::Ex | Unit::Percent => {
            unreachable!("font-relative units are resolved by resolve_length, not here")
        }
    };
    style_fixed::f_mul(value, Fixed::from_f32(factor))
}

/// Resolve one length to an absolute pixel value given the node's already-
/// resolved absolute font size.
fn resolve_length(length: LengthValue, absolute_font_size: Fixed) -> LengthValue {
    let px = match length.unit {
        Unit::Em => style_fixed::f_mul(length.value, absolute_font_size),
        Unit::Ex => {
            let half_em = style_fixed::f_div(absolute_font_size, Fixed::from_int(2));
            style_fixed::f_mul(length.value, half_em)
        }
        Unit::Percent => {
            let fraction = style_fixed::f_div(length.value, style_fixed::constants::HUNDRED);
            style_fixed::f_mul(fraction, absolute_font_size)
        }
        other => physical_unit_to_px(length.value, other),
    };
    LengthValue { value: px, unit: Unit::Px }
}

fn resolve_clip_component(component: ClipComponent, absolute_font_size: Fixed) -> ClipComponent {
    match component {
        ClipComponent::Auto => ClipComponent::Auto,
        ClipComponent::Set(length) => ClipComponent::Set(resolve_length(length, absolute_font_size)),
    }
}

fn resolve_clip(clip: ClipValue, absolute_font_size: Fixed) -> ClipValue {
    ClipValue {
        top: resolve_clip_component(clip.top, absolute_font_size),
        right: resolve_clip_component(clip.right, absolute_font_size),
        bottom: resolve_clip_component(clip.bottom, absolute_font_size),
        left: resolve_clip_component(clip.left, absolute_font_size),
    }
}

fn resolve_bg_position_component(
    component: style_props::value::BgPosComponent,
    absolute_font_size: Fixed,
) -> style_props::value::BgPosComponent {
    match component {
        style_props::value::BgPosComponent::Keyword(keyword) => {
            style_props::value::BgPosComponent::Keyword(keyword)
        }
        style_props::value::BgPosComponent::Set(length) => {
            style_props::value::BgPosComponent::Set(resolve_length(length, absolute_font_size))
        }
    }
}

fn resolve_value(value: Value, absolute_font_size: Fixed) -> Option<Value> {
    match value {
        Value::Length(length) => Some(Value::Length(resolve_length(length, absolute_font_size))),
        Value::LengthOrAuto(LengthOrAuto::Set(length)) => Some(Value::LengthOrAuto(
            LengthOrAuto::Set(resolve_length(length, absolute_font_size)),
        )),
        Value::LengthOrNormal(LengthOrNormal::Set(length)) => Some(Value::LengthOrNormal(
            LengthOrNormal::Set(resolve_length(length, absolute_font_size)),
        )),
        Value::LengthOrNone(LengthOrNone::Set(length)) => Some(Value::LengthOrNone(
            LengthOrNone::Set(resolve_length(length, absolute_font_size)),
        )),
        Value::Clip(clip) => Some(Value::Clip(resolve_clip(clip, absolute_font_size))),
        Value::BackgroundPosition(bg) => Some(Value::BackgroundPosition(
            style_props::value::BackgroundPositionValue {
                horizontal: resolve_bg_position_component(bg.horizontal, absolute_font_size),
                vertical: resolve_bg_position_component(bg.vertical, absolute_font_size),
            },
        )),
        _ => None,
    }
}

/// `border-{side}-color`'s `UseComputedColor` sentinel resolves to the
/// node's own computed `color` (§4.10: "if `border-{side}-color` is
/// `initial`, set it to the computed `color`").
fn resolve_border_colors(style: &mut ComputedStyle) {
    let Some(&Value::Color(color)) = style.get(PropertyId::Color) else {
        return;
    };
    for id in [
        PropertyId::BorderTopColor,
        PropertyId::BorderRightColor,
        PropertyId::BorderBottomColor,
        PropertyId::BorderLeftColor,
    ] {
        if let Some(Value::BgBorderColor(BgBorderColor::UseComputedColor)) = style.get(id) {
            style.set(id, Value::BgBorderColor(BgBorderColor::Set(color)));
        }
    }
}

/// §4.10: an `inline` box that is absolutely/fixed-positioned or floated
/// computes to `block` (CSS 2.1 §9.7's table, reduced to the one
/// transition this engine tracks).
fn normalize_display_for_positioned_or_floated(style: &mut ComputedStyle) {
    let is_out_of_flow_positioned = matches!(
        style.get(PropertyId::Position),
        Some(Value::Keyword(k)) if *k == keywords::position::ABSOLUTE || *k == keywords::position::FIXED
    );
    let is_floated = matches!(
        style.get(PropertyId::Float),
        Some(Value::Keyword(k)) if *k != keywords::float::NONE
    );
    let is_inline = matches!(
        style.get(PropertyId::Display),
        Some(Value::Keyword(k)) if *k == keywords::display::INLINE
    );
    if is_inline && (is_out_of_flow_positioned || is_floated) {
        style.set(PropertyId::Display, Value::Keyword(keywords::display::BLOCK));
    }
}

/// Run §4.10 over `style`: resolve `font-size` to an absolute pixel value
/// via the host, rewrite every other length-bearing property in terms of
/// it, then apply the border-color and display fixups.
pub fn resolve_absolute<H: StyleHandler>(
    node: H::Node,
    handler: &H,
    parent_font_size: Option<Fixed>,
    style: &mut ComputedStyle,
) -> Result<(), StyleError> {
    let specified_font_size = match style.get(PropertyId::FontSize) {
        Some(Value::Length(length)) => *length,
        _ => {
            log::error!("resolve_absolute: font-size did not carry a length value");
            return Err(StyleError::Invalid);
        }
    };
    let absolute_font_size = handler.compute_font_size(node, parent_font_size, specified_font_size);
    style.set(
        PropertyId::FontSize,
        Value::Length(LengthValue { value: absolute_font_size, unit: Unit::Px }),
    );

    for id in PROPERTIES {
        if *id == PropertyId::FontSize {
            continue;
        }
        let Some(value) = style.get(*id).cloned() else {
            continue;
        };
        if let Some(resolved) = resolve_value(value, absolute_font_size) {
            style.set(*id, resolved);
        }
    }

    resolve_border_colors(style);
    normalize_display_for_positioned_or_floated(style);

    Ok(())
}
