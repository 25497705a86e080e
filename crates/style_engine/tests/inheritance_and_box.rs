//! Inherited vs. non-inherited initial-value fallback, inline-style
//! font-size driving the root's absolute-value resolution (§4.10), and the
//! `UseComputedColor`/positioned-inline fixups that fall out of it.

#[path = "support/mod.rs"]
mod support;

use style_engine::{select_style, MediaMask, SelectionContext};
use style_props::value::{LengthValue, Unit};
use style_props::{keywords, PropertyId, Value};
use style_sheet::{BytecodeBuilder, Opv, Parent, Rule, RuleData, Stylesheet};
use support::MockTree;

fn inline_font_size(value: i32, unit: Unit) -> Stylesheet {
    let mut builder = BytecodeBuilder::new();
    builder
        .push_opv(Opv::new(style_props::property::opcode(PropertyId::FontSize), 0, false, false))
        .push_word(style_fixed::Fixed::from_int(value).to_bits() as u32);
    let unit_word = match unit {
        Unit::Px => 0,
        Unit::Em => 1,
        Unit::Ex => 2,
        Unit::Percent => 3,
        _ => unreachable!("test only exercises font-relative units"),
    };
    builder.push_word(unit_word);
    Stylesheet::inline(Rule::new(
        0,
        0,
        Parent::Stylesheet,
        RuleData::Selector { chains: Vec::new(), bytecode: builder.build() },
    ))
}

#[test]
fn root_with_no_font_size_declared_resolves_to_sixteen_px() {
    let tree = MockTree::new();
    let html = tree.add_node(None, "html");
    let ctx = SelectionContext::create();

    let style = select_style(&ctx, html, None, MediaMask::ALL, None, &tree).unwrap();
    assert_eq!(
        style.get(PropertyId::FontSize),
        Some(&Value::Length(LengthValue { value: style_fixed::Fixed::from_int(16), unit: Unit::Px }))
    );
}

#[test]
fn root_em_font_size_resolves_against_the_sixteen_px_default() {
    let tree = MockTree::new();
    let html = tree.add_node(None, "html");
    let ctx = SelectionContext::create();
    let inline = inline_font_size(2, Unit::Em);

    let style = select_style(&ctx, html, None, MediaMask::ALL, Some(&inline), &tree).unwrap();
    assert_eq!(
        style.get(PropertyId::FontSize),
        Some(&Value::Length(LengthValue { value: style_fixed::Fixed::from_int(32), unit: Unit::Px }))
    );
}

#[test]
fn root_length_properties_are_converted_to_absolute_px() {
    let tree = MockTree::new();
    let html = tree.add_node(None, "html");
    let ctx = SelectionContext::create();

    // padding-top defaults to a fixed 0px, already absolute; assert the
    // resolver leaves a plain px length alone rather than double-converting.
    let style = select_style(&ctx, html, None, MediaMask::ALL, None, &tree).unwrap();
    assert_eq!(
        style.get(PropertyId::PaddingTop),
        Some(&Value::Length(LengthValue { value: style_fixed::Fixed::ZERO, unit: Unit::Px }))
    );
}

#[test]
fn non_inheriting_property_falls_back_to_its_fixed_initial_value_at_root() {
    let tree = MockTree::new();
    let html = tree.add_node(None, "html");
    let ctx = SelectionContext::create();

    let style = select_style(&ctx, html, None, MediaMask::ALL, None, &tree).unwrap();
    assert_eq!(style.get(PropertyId::Display), Some(&Value::Keyword(keywords::display::INLINE)));
}

#[test]
fn inheriting_property_on_a_child_becomes_an_explicit_inherit_marker() {
    let tree = MockTree::new();
    let html = tree.add_node(None, "html");
    let p = tree.add_node(Some(html), "p");
    let ctx = SelectionContext::create();

    let style = select_style(&ctx, p, None, MediaMask::ALL, None, &tree).unwrap();
    assert_eq!(style.get(PropertyId::FontWeight), Some(&Value::Inherit));
}

#[test]
fn border_color_defaults_to_the_computed_color_at_root() {
    let tree = MockTree::new();
    let html = tree.add_node(None, "html");
    let ctx = SelectionContext::create();

    let style = select_style(&ctx, html, None, MediaMask::ALL, None, &tree).unwrap();
    let Some(Value::Color(text_color)) = style.get(PropertyId::Color) else {
        panic!("color should have resolved to the UA default");
    };
    assert_eq!(
        style.get(PropertyId::BorderTopColor),
        Some(&Value::BgBorderColor(style_props::value::BgBorderColor::Set(*text_color)))
    );
}

#[test]
fn floated_inline_root_normalizes_to_block() {
    let tree = MockTree::new();
    let span = tree.add_node(None, "span");

    let mut builder = BytecodeBuilder::new();
    builder.push_opv(Opv::new(style_props::property::opcode(PropertyId::Float), keywords::float::LEFT, false, false));
    let rule = Rule::new(
        0,
        0,
        Parent::Stylesheet,
        RuleData::Selector {
            chains: vec![style_selectors::parse_chain("span", &tree.interner).unwrap()],
            bytecode: builder.build(),
        },
    );
    let mut ctx = SelectionContext::create();
    ctx.append_sheet(
        style_sheet::Stylesheet::new(vec![rule]),
        style_engine::Origin::Author,
        MediaMask::ALL,
    )
    .unwrap();

    let style = select_style(&ctx, span, None, MediaMask::ALL, None, &tree).unwrap();
    // `span`'s initial display is inline; floating it should normalize to block.
    assert_eq!(style.get(PropertyId::Display), Some(&Value::Keyword(keywords::display::BLOCK)));
}
