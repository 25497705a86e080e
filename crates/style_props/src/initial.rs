//! Per-property initial values.
//!
//! Spec §4.8: "For each still-unset property ... invoke the property's
//! `initial` function. Initial functions for `color`, `font-family`, and
//! `quotes` defer to `handler.ua_default_for_property`." Represented here as
//! a single `initial_value` dispatcher over [`PropertyId`] rather than a
//! literal per-property function-pointer table — §9's Design Note offers
//! "code-generate a switch from a property spec file" as an equivalent, and
//! a `match` over a closed enum is exactly that switch.

use style_fixed::Fixed;

use crate::host::UaDefaults;
use crate::keywords;
use crate::property::PropertyId;
use crate::value::{
    BgBorderColor, LengthOrAuto, LengthOrNone, LengthOrNormal, LengthValue, Unit, Value,
};

/// CSS 2.1's initial value for `id`. `host` supplies the three
/// UA-dependent defaults (§4.8); everything else is a fixed constant.
#[must_use]
pub fn initial_value(id: PropertyId, host: &(impl UaDefaults + ?Sized)) -> Value {
    match id {
        PropertyId::Color | PropertyId::FontFamily | PropertyId::Quotes => {
            host.ua_default_for_property(id)
        }

        PropertyId::BackgroundColor => Value::BgBorderColor(BgBorderColor::Transparent),
        PropertyId::BackgroundImage => Value::UriOrNone(None),
        PropertyId::Display => Value::Keyword(keywords::display::INLINE),
        PropertyId::Position => Value::Keyword(keywords::position::STATIC),
        PropertyId::Float => Value::Keyword(keywords::float::NONE),
        PropertyId::Clear => Value::Keyword(keywords::clear::NONE),
        PropertyId::Overflow => Value::Keyword(keywords::overflow::VISIBLE),
        PropertyId::Visibility => Value::Keyword(keywords::visibility::VISIBLE),
        PropertyId::Direction => Value::Keyword(keywords::direction::LTR),
        PropertyId::WhiteSpace => Value::Keyword(keywords::white_space::NORMAL),
        PropertyId::TextAlign => Value::Keyword(keywords::text_align::LEFT),
        PropertyId::TextDecoration => Value::Keyword(keywords::text_decoration::NONE),
        PropertyId::FontStyle => Value::Keyword(keywords::font_style::NORMAL),
        PropertyId::FontVariant => Value::Keyword(keywords::font_variant::NORMAL),
        PropertyId::FontWeight => Value::Keyword(keywords::font_weight::NORMAL),

        PropertyId::FontSize => Value::Length(LengthValue {
            value: Fixed::from_int(16),
            unit: Unit::Px,
        }),
        PropertyId::LineHeight => Value::LengthOrNormal(LengthOrNormal::Normal),

        PropertyId::Width
        | PropertyId::Height
        | PropertyId::MarginTop
        | PropertyId::MarginRight
        | PropertyId::MarginBottom
        | PropertyId::MarginLeft
        | PropertyId::Top
        | PropertyId::Right
        | PropertyId::Bottom
        | PropertyId::Left => Value::LengthOrAuto(LengthOrAuto::Auto),

        PropertyId::MinWidth | PropertyId::MinHeight => Value::Length(LengthValue {
            value: Fixed::ZERO,
            unit: Unit::Px,
        }),
        PropertyId::MaxWidth | PropertyId::MaxHeight => Value::LengthOrNone(LengthOrNone::None),

        PropertyId::PaddingTop
        | PropertyId::PaddingRight
        | PropertyId::PaddingBottom
        | PropertyId::PaddingLeft => Value::Length(LengthValue {
            value: Fixed::ZERO,
            unit: Unit::Px,
        }),

        PropertyId::BorderTopWidth
        | PropertyId::BorderRightWidth
        | PropertyId::BorderBottomWidth
        | PropertyId::BorderLeftWidth => Value::Length(LengthValue {
            value: Fixed::from_int(2),
            unit: Unit::Px,
        }),
        PropertyId::BorderTopStyle
        | PropertyId::BorderRightStyle
        | PropertyId::BorderBottomStyle
        | PropertyId::BorderLeftStyle => Value::Keyword(keywords::border_style::NONE),
        PropertyId::BorderTopColor
        | PropertyId::BorderRightColor
        | PropertyId::BorderBottomColor
        | PropertyId::BorderLeftColor => Value::BgBorderColor(BgBorderColor::UseComputedColor),

        PropertyId::Cursor => Value::SymbolList(Vec::new()),
        PropertyId::Content => Value::Content(Vec::new()),
        PropertyId::CounterIncrement | PropertyId::CounterReset => {
            Value::CounterOps(Vec::new())
        }
        PropertyId::Clip => Value::Clip(crate::value::ClipValue {
            top: crate::value::ClipComponent::Auto,
            right: crate::value::ClipComponent::Auto,
            bottom: crate::value::ClipComponent::Auto,
            left: crate::value::ClipComponent::Auto,
        }),
        PropertyId::BackgroundPosition => {
            Value::BackgroundPosition(crate::value::BackgroundPositionValue {
                horizontal: crate::value::BgPosComponent::Set(LengthValue {
                    value: Fixed::ZERO,
                    unit: Unit::Percent,
                }),
                vertical: crate::value::BgPosComponent::Set(LengthValue {
                    value: Fixed::ZERO,
                    unit: Unit::Percent,
                }),
            })
        }
        PropertyId::LetterSpacing | PropertyId::WordSpacing => {
            Value::LengthOrNormal(LengthOrNormal::Normal)
        }

        #[cfg(feature = "page")]
        PropertyId::Orphans | PropertyId::Widows => Value::Number(Fixed::from_int(2)),
        #[cfg(feature = "page")]
        PropertyId::PageBreakBefore | PropertyId::PageBreakAfter => {
            Value::Keyword(keywords::page_break::AUTO)
        }
        #[cfg(feature = "page")]
        PropertyId::PageBreakInside => Value::Keyword(keywords::page_break::AUTO),

        #[cfg(feature = "aural")]
        PropertyId::Speak => Value::Keyword(keywords::speak::NORMAL),
        #[cfg(feature = "aural")]
        PropertyId::Volume => Value::Number(Fixed::from_int(50)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::PROPERTIES;

    struct FixedHost;
    impl UaDefaults for FixedHost {
        fn ua_default_for_property(&self, id: PropertyId) -> Value {
            match id {
                PropertyId::Color => Value::Color(crate::value::Rgba {
                    r: 0,
                    g: 0,
                    b: 0,
                    a: 255,
                }),
                PropertyId::FontFamily => Value::SymbolList(Vec::new()),
                PropertyId::Quotes => Value::QuotesList(Vec::new()),
                _ => unreachable!("only color/font-family/quotes defer to the host"),
            }
        }
    }

    #[test]
    fn every_property_has_an_initial_value() {
        let host = FixedHost;
        for id in PROPERTIES {
            let _ = initial_value(*id, &host);
        }
    }

    #[test]
    fn color_defers_to_host() {
        let host = FixedHost;
        assert!(matches!(
            initial_value(PropertyId::Color, &host),
            Value::Color(_)
        ));
    }

    #[test]
    fn width_initial_is_auto() {
        let host = FixedHost;
        assert_eq!(
            initial_value(PropertyId::Width, &host),
            Value::LengthOrAuto(LengthOrAuto::Auto)
        );
    }
}
