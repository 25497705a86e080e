//! Shared mock node tree for `style_engine`'s integration tests. Not a
//! `#[cfg(test)]` module since `tests/*.rs` files are each their own crate;
//! included via `#[path = "support/mod.rs"] mod support;` the way a
//! multi-file integration-test suite conventionally shares a harness.

use std::cell::RefCell;
use std::collections::HashMap;

use style_engine::handler::PresentationalHint;
use style_engine::{MatchHandler, StyleHandler};
use style_fixed::Fixed;
use style_intern::{Interner, Symbol};
use style_props::value::{LengthValue, Rgba};
use style_props::{PropertyId, UaDefaults, Value};

struct NodeData {
    parent: Option<usize>,
    name: Symbol,
    id: Option<Symbol>,
    classes: Vec<Symbol>,
    attributes: HashMap<Symbol, Symbol>,
}

/// A tiny in-memory element tree: each node has a name, an optional id, a
/// class list, and a flat attribute map. Siblings are tracked by document
/// order within their parent's child list.
pub struct MockTree {
    pub interner: Interner,
    nodes: RefCell<Vec<NodeData>>,
    children: RefCell<HashMap<usize, Vec<usize>>>,
    hints: RefCell<HashMap<(usize, &'static str), PresentationalHint>>,
}

impl MockTree {
    pub fn new() -> Self {
        Self {
            interner: Interner::new(),
            nodes: RefCell::new(Vec::new()),
            children: RefCell::new(HashMap::new()),
            hints: RefCell::new(HashMap::new()),
        }
    }

    pub fn add_node(&self, parent: Option<usize>, name: &str) -> usize {
        let mut nodes = self.nodes.borrow_mut();
        let index = nodes.len();
        nodes.push(NodeData {
            parent,
            name: self.interner.intern(name),
            id: None,
            classes: Vec::new(),
            attributes: HashMap::new(),
        });
        drop(nodes);
        if let Some(parent) = parent {
            self.children.borrow_mut().entry(parent).or_default().push(index);
        }
        index
    }

    pub fn set_id(&self, node: usize, id: &str) {
        self.nodes.borrow_mut()[node].id = Some(self.interner.intern(id));
    }

    pub fn add_class(&self, node: usize, class: &str) {
        let symbol = self.interner.intern(class);
        self.nodes.borrow_mut()[node].classes.push(symbol);
    }

    pub fn set_attribute(&self, node: usize, name: &str, value: &str) {
        let name = self.interner.intern(name);
        let value = self.interner.intern(value);
        self.nodes.borrow_mut()[node].attributes.insert(name, value);
    }

    pub fn set_hint(&self, node: usize, property: &'static str, hint: PresentationalHint) {
        self.hints.borrow_mut().insert((node, property), hint);
    }
}

impl MatchHandler for MockTree {
    type Node = usize;

    fn node_has_name(&self, node: usize, name: Symbol) -> bool {
        self.nodes.borrow()[node].name == name
    }

    fn node_has_id(&self, node: usize, id: Symbol) -> bool {
        self.nodes.borrow()[node].id == Some(id)
    }

    fn node_has_class(&self, node: usize, class: Symbol) -> bool {
        self.nodes.borrow()[node].classes.contains(&class)
    }

    fn node_has_attribute(&self, node: usize, name: Symbol) -> bool {
        self.nodes.borrow()[node].attributes.contains_key(&name)
    }

    fn node_has_attribute_equals(&self, node: usize, name: Symbol, value: Symbol) -> bool {
        self.nodes.borrow()[node].attributes.get(&name) == Some(&value)
    }

    fn node_has_attribute_dashmatch(&self, node: usize, name: Symbol, value: Symbol) -> bool {
        let nodes = self.nodes.borrow();
        let Some(&attr_value) = nodes[node].attributes.get(&name) else {
            return false;
        };
        if attr_value == value {
            return true;
        }
        let value_text = self.interner.resolve(value);
        let attr_text = self.interner.resolve(attr_value);
        attr_text.starts_with(&format!("{value_text}-"))
    }

    fn node_has_attribute_includes(&self, node: usize, name: Symbol, value: Symbol) -> bool {
        let nodes = self.nodes.borrow();
        let Some(&attr_value) = nodes[node].attributes.get(&name) else {
            return false;
        };
        let value_text = self.interner.resolve(value);
        self.interner.resolve(attr_value).split_whitespace().any(|token| token == value_text)
    }

    fn matches_pseudo_class(&self, _node: usize, _name: Symbol) -> bool {
        false
    }

    fn matches_pseudo_element(&self, _node: usize, _name: Symbol) -> bool {
        false
    }

    fn parent(&self, node: usize) -> Option<usize> {
        self.nodes.borrow()[node].parent
    }

    fn previous_sibling(&self, node: usize) -> Option<usize> {
        let parent = self.nodes.borrow()[node].parent?;
        let children = self.children.borrow();
        let siblings = children.get(&parent)?;
        let position = siblings.iter().position(|&candidate| candidate == node)?;
        position.checked_sub(1).map(|prev| siblings[prev])
    }
}

impl UaDefaults for MockTree {
    fn ua_default_for_property(&self, id: PropertyId) -> Value {
        match id {
            PropertyId::Color => Value::Color(Rgba { r: 0, g: 0, b: 0, a: 255 }),
            PropertyId::FontFamily => Value::SymbolList(Vec::new()),
            PropertyId::Quotes => Value::QuotesList(Vec::new()),
            _ => unreachable!("only color/font-family/quotes defer to the host"),
        }
    }
}

impl StyleHandler for MockTree {
    fn node_name(&self, node: usize) -> Symbol {
        self.nodes.borrow()[node].name
    }

    fn node_id(&self, node: usize) -> Option<Symbol> {
        self.nodes.borrow()[node].id
    }

    fn node_classes(&self, node: usize) -> Vec<Symbol> {
        self.nodes.borrow()[node].classes.clone()
    }

    fn node_presentational_hint(&self, node: usize, property: PropertyId) -> Option<PresentationalHint> {
        self.hints.borrow().get(&(node, style_props::property::static_name(property))).cloned()
    }

    fn compute_font_size(&self, _node: usize, parent_font_size: Option<Fixed>, specified: LengthValue) -> Fixed {
        // No real font-metrics host in these tests: relative units resolve
        // against the parent's already-resolved size (or the spec's 16px
        // default at the root); physical units are assumed already-px since
        // this harness has no DPI table of its own.
        let parent = parent_font_size.unwrap_or_else(|| Fixed::from_int(16));
        match specified.unit {
            style_props::value::Unit::Em => style_fixed::f_mul(specified.value, parent),
            style_props::value::Unit::Ex => {
                style_fixed::f_mul(specified.value, style_fixed::f_div(parent, Fixed::from_int(2)))
            }
            style_props::value::Unit::Percent => {
                let fraction = style_fixed::f_div(specified.value, style_fixed::constants::HUNDRED);
                style_fixed::f_mul(fraction, parent)
            }
            _ => specified.value,
        }
    }
}
