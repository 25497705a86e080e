//! `select_style`: the engine's one real entry point. Walks every registered
//! sheet plus an optional inline style, applies presentational hints, fills
//! in initial/inherited fallbacks, and — at the document root only —
//! resolves absolute values.
//!
//! Spec §4.2's 5-step contract: (1) zero state, find parent; (2) walk sheets
//! in registration order, applying §4.5 matching + §4.7 cascade; (3) apply
//! an inline style as an author-origin, maximum-specificity declaration
//! block; (4) presentational hints (§4.8), then the initial/inherit
//! fallback for whatever is still unset; (5) root absolute-value resolution
//! (§4.10) when there is no parent. Grounded on the teacher's
//! `StyleEngine::style_for_node` for the overall "walk sheets, then resolve"
//! shape; the per-step breakdown and the root-only absolute pass are this
//! spec's own addition, since the teacher composes+resolves unconditionally
//! for every node rather than stopping short at non-root nodes.

use style_intern::Symbol;
use style_props::{
    apply_hint, initial_value, property_meta, run_cascade, CascadeState, ComputedStyle, Origin,
    PropertyId, Value, PROPERTIES,
};
use style_selectors::matches_chain;
use style_sheet::{MediaMask, RuleData, Stylesheet};

use crate::context::SelectionContext;
use crate::error::StyleError;
use crate::handler::StyleHandler;

/// §4.4: "@import recursion bounded at 256 levels else fatal INVALID."
const MAX_IMPORT_DEPTH: u32 = 256;

/// Run the full §4.2 contract for one node.
pub fn select_style<H: StyleHandler>(
    ctx: &SelectionContext,
    node: H::Node,
    pseudo: Option<Symbol>,
    media: MediaMask,
    inline_style: Option<&Stylesheet>,
    handler: &H,
) -> Result<ComputedStyle, StyleError> {
    if let Some(pseudo) = pseudo {
        // §4.6a: matching a pseudo-element requires the host to already know
        // which pseudo is being queried — `MatchHandler::matches_pseudo_element`
        // has no query-pseudo parameter of its own, so this is logged for
        // diagnostics only; a host that supports pseudo-element queries must
        // scope `handler`/`node` to that pseudo before calling in.
        log::trace!("select_style: querying pseudo-element {pseudo:?}");
    }

    // Step 1: zero state, find parent.
    let mut state = CascadeState::new();
    let mut style = ComputedStyle::new();
    let parent = handler.parent(node);

    let name = Some(handler.node_name(node));
    let id = handler.node_id(node);
    let classes = handler.node_classes(node);

    // Step 2: walk sheets in registration order.
    for registered in ctx.sheets() {
        if !registered.media_mask.intersects(media) {
            log::trace!("select_style: skipping sheet, media mask does not intersect query");
            continue;
        }
        traverse_sheet(
            &registered.sheet,
            registered.origin,
            media,
            name,
            id,
            &classes,
            handler,
            node,
            &mut state,
            &mut style,
            0,
        )?;
    }

    // Step 3: inline style, author-origin at maximum specificity.
    if let Some(inline) = inline_style {
        apply_inline_style(inline, &mut state, &mut style)?;
    }

    // Step 4a: presentational hints.
    apply_presentational_hints(node, handler, &mut state, &mut style);

    // Step 4b: initial/inherit fallback.
    apply_fallback(parent.is_some(), handler, &mut style);

    // Step 5: root absolute-value resolution.
    if parent.is_none() {
        crate::absolute::resolve_absolute(node, handler, None, &mut style)?;
    }

    Ok(style)
}

/// Recursively contribute one sheet's matching declarations, descending
/// into `@import`ed children first (document order: imports must precede
/// the rules that follow them) and bounding the recursion per §4.4.
#[allow(clippy::too_many_arguments)]
fn traverse_sheet<H: StyleHandler>(
    sheet: &Stylesheet,
    origin: Origin,
    media: MediaMask,
    name: Option<Symbol>,
    id: Option<Symbol>,
    classes: &[Symbol],
    handler: &H,
    node: H::Node,
    state: &mut CascadeState,
    style: &mut ComputedStyle,
    import_depth: u32,
) -> Result<(), StyleError> {
    if import_depth > MAX_IMPORT_DEPTH {
        log::error!("traverse_sheet: @import recursion exceeded {MAX_IMPORT_DEPTH} levels");
        return Err(StyleError::Invalid);
    }

    for rule in sheet.rules() {
        if let RuleData::Import { child: Some(child), mask } = &rule.data {
            if mask.intersects(media) {
                traverse_sheet(
                    child,
                    origin,
                    media,
                    name,
                    id,
                    classes,
                    handler,
                    node,
                    state,
                    style,
                    import_depth + 1,
                )?;
            }
        }
    }

    let candidates = sheet.selector_hash().matching_candidates(name, id, classes);
    for candidate in candidates {
        let Some(rule) = sheet.rule(candidate.rule_index) else {
            continue;
        };
        if !sheet.media_applies(candidate.rule_index, media) {
            continue;
        }
        let RuleData::Selector { chains, bytecode } = &rule.data else {
            continue;
        };
        let Some(chain) = chains.get(candidate.chain_index) else {
            continue;
        };
        if !matches_chain(handler, node, chain) {
            continue;
        }
        run_cascade(&mut bytecode.cursor(), origin, chain.specificity, state, style)?;
    }

    Ok(())
}

/// §4.2 step 3: an inline style is a synthetic one-rule sheet with a single,
/// selector-less declaration block, applied unconditionally at author
/// origin and maximum specificity (§8 scenario 6).
fn apply_inline_style(
    inline: &Stylesheet,
    state: &mut CascadeState,
    style: &mut ComputedStyle,
) -> Result<(), StyleError> {
    if inline.rules().len() != 1 {
        log::error!("apply_inline_style: expected exactly one rule, found {}", inline.rules().len());
        return Err(StyleError::Invalid);
    }
    let RuleData::Selector { chains, bytecode } = &inline.rules()[0].data else {
        log::error!("apply_inline_style: inline sheet's only rule is not a selector rule");
        return Err(StyleError::Invalid);
    };
    if !chains.is_empty() {
        log::error!("apply_inline_style: inline sheet's rule carries selector chains");
        return Err(StyleError::Invalid);
    }
    run_cascade(
        &mut bytecode.cursor(),
        Origin::Author,
        style_selectors::Specificity(u32::MAX),
        state,
        style,
    )?;
    Ok(())
}

/// §4.8: "if no declaration has set it, OR the setter did not originate
/// from author and is not `!important`, query the host for a
/// presentational hint." Applied via the same winner-tracking path hints
/// always use: author origin, zero specificity.
fn apply_presentational_hints<H: StyleHandler>(
    node: H::Node,
    handler: &H,
    state: &mut CascadeState,
    style: &mut ComputedStyle,
) {
    for id in PROPERTIES {
        let slot = state.get(*id);
        let eligible = !slot.set || (slot.origin != Origin::Author && !slot.important);
        if !eligible {
            continue;
        }
        let Some(hint) = handler.node_presentational_hint(node, *id) else {
            continue;
        };
        let value = if hint.inherit { Value::Inherit } else { hint.value };
        apply_hint(*id, value, false, hint.inherit, state, style);
    }
}

/// §4.8's tail: for each property still untouched after the cascade and
/// hints pass, either mark it `inherit` (a parent exists and the property
/// is CSS-inheriting) or set its fixed/UA initial value. A root node has no
/// parent to inherit from, so a property left as the literal `inherit`
/// marker there — whether because nothing set it, or because some rule
/// explicitly declared `inherit` on the root — falls back to its initial
/// value too (§4.2 step 4's "still-inherit at the root" clause).
fn apply_fallback<H: StyleHandler>(has_parent: bool, handler: &H, style: &mut ComputedStyle) {
    for id in PROPERTIES {
        let needs_initial = match style.get(*id) {
            None => true,
            Some(value) => !has_parent && value.is_inherit(),
        };
        if !needs_initial {
            continue;
        }
        if has_parent && property_meta(*id).inherited {
            style.set(*id, Value::Inherit);
        } else {
            style.set(*id, initial_value(*id, handler));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::SelectionContext;
    use crate::handler::PresentationalHint;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use style_intern::Interner;
    use style_props::value::Rgba;
    use style_selectors::{parse_chain, MatchHandler};
    use style_sheet::{BytecodeBuilder, Opv, Parent, Rule};

    /// A minimal one-level tree (root + one child) sufficient to exercise
    /// the cascade, inline-style, and fallback passes.
    struct TestTree {
        interner: Interner,
        parent_of: RefCell<HashMap<usize, Option<usize>>>,
        names: RefCell<HashMap<usize, Symbol>>,
        ids: RefCell<HashMap<usize, Option<Symbol>>>,
        classes: RefCell<HashMap<usize, Vec<Symbol>>>,
    }

    impl TestTree {
        fn new() -> Self {
            Self {
                interner: Interner::new(),
                parent_of: RefCell::new(HashMap::new()),
                names: RefCell::new(HashMap::new()),
                ids: RefCell::new(HashMap::new()),
                classes: RefCell::new(HashMap::new()),
            }
        }

        fn add_node(&self, id: usize, parent: Option<usize>, name: &str) {
            let symbol = self.interner.intern(name);
            self.parent_of.borrow_mut().insert(id, parent);
            self.names.borrow_mut().insert(id, symbol);
            self.ids.borrow_mut().insert(id, None);
            self.classes.borrow_mut().insert(id, Vec::new());
        }
    }

    impl MatchHandler for TestTree {
        type Node = usize;

        fn node_has_name(&self, node: usize, name: Symbol) -> bool {
            self.names.borrow()[&node] == name
        }
        fn node_has_id(&self, node: usize, id: Symbol) -> bool {
            self.ids.borrow()[&node] == Some(id)
        }
        fn node_has_class(&self, node: usize, class: Symbol) -> bool {
            self.classes.borrow()[&node].contains(&class)
        }
        fn node_has_attribute(&self, _node: usize, _name: Symbol) -> bool {
            false
        }
        fn node_has_attribute_equals(&self, _node: usize, _name: Symbol, _value: Symbol) -> bool {
            false
        }
        fn node_has_attribute_dashmatch(&self, _node: usize, _name: Symbol, _value: Symbol) -> bool {
            false
        }
        fn node_has_attribute_includes(&self, _node: usize, _name: Symbol, _value: Symbol) -> bool {
            false
        }
        fn matches_pseudo_class(&self, _node: usize, _name: Symbol) -> bool {
            false
        }
        fn matches_pseudo_element(&self, _node: usize, _name: Symbol) -> bool {
            false
        }
        fn parent(&self, node: usize) -> Option<usize> {
            self.parent_of.borrow()[&node]
        }
        fn previous_sibling(&self, _node: usize) -> Option<usize> {
            None
        }
    }

    impl style_props::UaDefaults for TestTree {
        fn ua_default_for_property(&self, id: PropertyId) -> Value {
            match id {
                PropertyId::Color => Value::Color(Rgba { r: 0, g: 0, b: 0, a: 255 }),
                PropertyId::FontFamily => Value::SymbolList(Vec::new()),
                PropertyId::Quotes => Value::QuotesList(Vec::new()),
                _ => unreachable!(),
            }
        }
    }

    impl StyleHandler for TestTree {
        fn node_name(&self, node: usize) -> Symbol {
            self.names.borrow()[&node]
        }
        fn node_id(&self, node: usize) -> Option<Symbol> {
            self.ids.borrow()[&node]
        }
        fn node_classes(&self, node: usize) -> Vec<Symbol> {
            self.classes.borrow()[&node].clone()
        }
        fn node_presentational_hint(&self, _node: usize, _property: PropertyId) -> Option<PresentationalHint> {
            None
        }
        fn compute_font_size(
            &self,
            _node: usize,
            parent_font_size: Option<style_fixed::Fixed>,
            _specified: style_props::value::LengthValue,
        ) -> style_fixed::Fixed {
            parent_font_size.unwrap_or(style_fixed::Fixed::from_int(16))
        }
    }

    fn color_rule(selector: &str, interner: &Interner, rgba: Rgba) -> Rule {
        let chain = parse_chain(selector, interner).expect("valid selector");
        let mut builder = BytecodeBuilder::new();
        builder
            .push_opv(Opv::new(style_props::property::opcode(PropertyId::Color), 0, false, false))
            .push_word(u32::from_be_bytes([rgba.r, rgba.g, rgba.b, rgba.a]));
        Rule::new(
            0,
            0,
            Parent::Stylesheet,
            RuleData::Selector {
                chains: vec![chain],
                bytecode: builder.build(),
            },
        )
    }

    #[test]
    fn root_with_no_rules_gets_full_initial_fallback() {
        let tree = TestTree::new();
        tree.add_node(0, None, "html");
        let ctx = SelectionContext::create();

        let style = select_style(&ctx, 0, None, MediaMask::ALL, None, &tree).unwrap();
        assert_eq!(style.get(PropertyId::Display), Some(&Value::Keyword(style_props::keywords::display::INLINE)));
    }

    #[test]
    fn matching_author_rule_wins_over_initial() {
        let tree = TestTree::new();
        tree.add_node(0, None, "p");
        let rule = color_rule("p", &tree.interner, Rgba { r: 10, g: 20, b: 30, a: 255 });
        let sheet = Stylesheet::new(vec![rule]);

        let mut ctx = SelectionContext::create();
        ctx.append_sheet(sheet, Origin::Author, MediaMask::ALL).unwrap();

        let style = select_style(&ctx, 0, None, MediaMask::ALL, None, &tree).unwrap();
        assert_eq!(
            style.get(PropertyId::Color),
            Some(&Value::Color(Rgba { r: 10, g: 20, b: 30, a: 255 }))
        );
    }

    #[test]
    fn inline_style_outranks_author_sheet_regardless_of_specificity() {
        let tree = TestTree::new();
        tree.add_node(0, None, "p");
        let sheet_rule = color_rule("p", &tree.interner, Rgba { r: 1, g: 1, b: 1, a: 255 });
        let sheet = Stylesheet::new(vec![sheet_rule]);
        let mut ctx = SelectionContext::create();
        ctx.append_sheet(sheet, Origin::Author, MediaMask::ALL).unwrap();

        let mut builder = BytecodeBuilder::new();
        builder
            .push_opv(Opv::new(style_props::property::opcode(PropertyId::Color), 0, false, false))
            .push_word(u32::from_be_bytes([9, 9, 9, 255]));
        let inline = Stylesheet::inline(Rule::new(
            0,
            0,
            Parent::Stylesheet,
            RuleData::Selector {
                chains: Vec::new(),
                bytecode: builder.build(),
            },
        ));

        let style = select_style(&ctx, 0, None, MediaMask::ALL, Some(&inline), &tree).unwrap();
        assert_eq!(
            style.get(PropertyId::Color),
            Some(&Value::Color(Rgba { r: 9, g: 9, b: 9, a: 255 }))
        );
    }

    #[test]
    fn non_root_inheriting_property_falls_back_to_inherit_marker() {
        let tree = TestTree::new();
        tree.add_node(0, None, "html");
        tree.add_node(1, Some(0), "p");
        let ctx = SelectionContext::create();

        let style = select_style(&ctx, 1, None, MediaMask::ALL, None, &tree).unwrap();
        assert_eq!(style.get(PropertyId::Color), Some(&Value::Inherit));
    }

    #[test]
    fn root_inherit_declaration_falls_back_to_initial_since_there_is_no_parent() {
        let tree = TestTree::new();
        tree.add_node(0, None, "html");
        let chain = parse_chain("html", &tree.interner).expect("valid selector");
        let mut builder = BytecodeBuilder::new();
        builder.push_opv(Opv::new(style_props::property::opcode(PropertyId::Color), 0, false, true));
        let rule = Rule::new(
            0,
            0,
            Parent::Stylesheet,
            RuleData::Selector { chains: vec![chain], bytecode: builder.build() },
        );
        let mut ctx = SelectionContext::create();
        ctx.append_sheet(Stylesheet::new(vec![rule]), Origin::Author, MediaMask::ALL).unwrap();

        let style = select_style(&ctx, 0, None, MediaMask::ALL, None, &tree).unwrap();
        assert_eq!(style.get(PropertyId::Color), Some(&Value::Color(Rgba { r: 0, g: 0, b: 0, a: 255 })));
    }

    #[test]
    fn sheet_outside_active_media_does_not_apply() {
        let tree = TestTree::new();
        tree.add_node(0, None, "p");
        let rule = color_rule("p", &tree.interner, Rgba { r: 1, g: 2, b: 3, a: 255 });
        let sheet = Stylesheet::new(vec![rule]);
        let mut ctx = SelectionContext::create();
        ctx.append_sheet(sheet, Origin::Author, MediaMask::single(style_sheet::MediaType::Print))
            .unwrap();

        let style = select_style(&ctx, 0, None, MediaMask::single(style_sheet::MediaType::Screen), None, &tree).unwrap();
        assert_ne!(style.get(PropertyId::Color), Some(&Value::Color(Rgba { r: 1, g: 2, b: 3, a: 255 })));
    }
}
