//! Named keyword codes for `Value::Keyword`-family properties.
//!
//! The bytecode value bits for a keyword-only property are an opaque index
//! assigned by whatever produced the blob (out of scope per §1 — that's the
//! parser's job); what matters inside this engine is that `cascade`,
//! `initial`, and any test fixture agree on the same numbering. These
//! constants are that shared vocabulary, grouped by property.

pub mod display {
    pub const BLOCK: u16 = 0;
    pub const INLINE: u16 = 1;
    pub const NONE: u16 = 2;
    pub const INLINE_BLOCK: u16 = 3;
    pub const LIST_ITEM: u16 = 4;
    pub const TABLE: u16 = 5;
}

pub mod position {
    pub const STATIC: u16 = 0;
    pub const RELATIVE: u16 = 1;
    pub const ABSOLUTE: u16 = 2;
    pub const FIXED: u16 = 3;
}

pub mod float {
    pub const NONE: u16 = 0;
    pub const LEFT: u16 = 1;
    pub const RIGHT: u16 = 2;
}

pub mod clear {
    pub const NONE: u16 = 0;
    pub const LEFT: u16 = 1;
    pub const RIGHT: u16 = 2;
    pub const BOTH: u16 = 3;
}

pub mod overflow {
    pub const VISIBLE: u16 = 0;
    pub const HIDDEN: u16 = 1;
    pub const SCROLL: u16 = 2;
    pub const AUTO: u16 = 3;
}

pub mod visibility {
    pub const VISIBLE: u16 = 0;
    pub const HIDDEN: u16 = 1;
    pub const COLLAPSE: u16 = 2;
}

pub mod direction {
    pub const LTR: u16 = 0;
    pub const RTL: u16 = 1;
}

pub mod white_space {
    pub const NORMAL: u16 = 0;
    pub const PRE: u16 = 1;
    pub const NOWRAP: u16 = 2;
}

pub mod text_align {
    pub const LEFT: u16 = 0;
    pub const RIGHT: u16 = 1;
    pub const CENTER: u16 = 2;
    pub const JUSTIFY: u16 = 3;
}

pub mod text_decoration {
    pub const NONE: u16 = 0;
    pub const UNDERLINE: u16 = 1;
    pub const OVERLINE: u16 = 2;
    pub const LINE_THROUGH: u16 = 3;
}

pub mod font_style {
    pub const NORMAL: u16 = 0;
    pub const ITALIC: u16 = 1;
    pub const OBLIQUE: u16 = 2;
}

pub mod font_variant {
    pub const NORMAL: u16 = 0;
    pub const SMALL_CAPS: u16 = 1;
}

pub mod font_weight {
    pub const NORMAL: u16 = 0;
    pub const BOLD: u16 = 1;
}

pub mod border_style {
    pub const NONE: u16 = 0;
    pub const HIDDEN: u16 = 1;
    pub const DOTTED: u16 = 2;
    pub const DASHED: u16 = 3;
    pub const SOLID: u16 = 4;
    pub const DOUBLE: u16 = 5;
    pub const GROOVE: u16 = 6;
    pub const RIDGE: u16 = 7;
    pub const INSET: u16 = 8;
    pub const OUTSET: u16 = 9;
}

pub mod page_break {
    pub const AUTO: u16 = 0;
    pub const ALWAYS: u16 = 1;
    pub const AVOID: u16 = 2;
    pub const LEFT: u16 = 3;
    pub const RIGHT: u16 = 4;
}

pub mod speak {
    pub const NORMAL: u16 = 0;
    pub const NONE: u16 = 1;
    pub const SPELL_OUT: u16 = 2;
}
