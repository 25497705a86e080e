//! Selection context: an ordered collection of (sheet, origin, media-mask)
//! triples a query runs against.
//!
//! Spec §4.2: `create`, `insert_sheet`, `append_sheet`, `remove_sheet`,
//! `count_sheets`, `get_sheet`. Grounded on the teacher's
//! `StyleEngine::replace_stylesheet`/`ua_stylesheet`/`author_stylesheet`
//! split — same "registered sheets feed a merged traversal" shape,
//! generalized from the teacher's fixed two-sheet (UA + author) model to
//! an arbitrarily long ordered list carrying its own origin per entry.

use style_props::Origin;
use style_sheet::{MediaMask, Stylesheet};

use crate::error::StyleError;

/// One registered sheet: the parsed stylesheet itself, the origin it was
/// registered under, and the media mask it applies to (§6: "ANDed with the
/// query mask; non-zero means applicable").
#[derive(Clone, Debug)]
pub struct RegisteredSheet {
    pub sheet: Stylesheet,
    pub origin: Origin,
    pub media_mask: MediaMask,
}

/// §3: "Selection contexts reference-not-own sheets" in the original
/// allocator model; in this Rust rendition the context owns its sheet list
/// outright (ordinary `Vec` ownership), since there is no separate
/// allocator-lifetime story to preserve.
#[derive(Clone, Debug, Default)]
pub struct SelectionContext {
    sheets: Vec<RegisteredSheet>,
}

impl SelectionContext {
    /// §4.2: `create(allocator) -> ctx` — empty sheet list.
    #[must_use]
    pub fn create() -> Self {
        Self::default()
    }

    /// §4.2: "fails with BADPARM if args null, INVALID if
    /// `sheet.inline_style` is true or `index > n`. Maintains insertion
    /// order." There is no null-pointer case in safe Rust, so only the two
    /// structural checks remain.
    pub fn insert_sheet(
        &mut self,
        sheet: Stylesheet,
        index: usize,
        origin: Origin,
        media_mask: MediaMask,
    ) -> Result<(), StyleError> {
        if sheet.inline_style {
            log::error!("insert_sheet: refusing to register an inline-style sheet");
            return Err(StyleError::Invalid);
        }
        if index > self.sheets.len() {
            log::error!(
                "insert_sheet: index {index} out of range for {} registered sheets",
                self.sheets.len()
            );
            return Err(StyleError::BadParam);
        }
        log::debug!("insert_sheet: registering sheet at index {index}, origin {origin:?}");
        self.sheets.insert(
            index,
            RegisteredSheet {
                sheet,
                origin,
                media_mask,
            },
        );
        Ok(())
    }

    /// Insert at the end — mechanical (§4.2).
    pub fn append_sheet(
        &mut self,
        sheet: Stylesheet,
        origin: Origin,
        media_mask: MediaMask,
    ) -> Result<(), StyleError> {
        let index = self.sheets.len();
        self.insert_sheet(sheet, index, origin, media_mask)
    }

    /// Remove the sheet at `index`, returning it. `BadParam` if out of
    /// range.
    pub fn remove_sheet(&mut self, index: usize) -> Result<RegisteredSheet, StyleError> {
        if index >= self.sheets.len() {
            return Err(StyleError::BadParam);
        }
        log::debug!("remove_sheet: removing sheet at index {index}");
        Ok(self.sheets.remove(index))
    }

    #[must_use]
    pub fn count_sheets(&self) -> usize {
        self.sheets.len()
    }

    #[must_use]
    pub fn get_sheet(&self, index: usize) -> Option<&RegisteredSheet> {
        self.sheets.get(index)
    }

    /// Registered sheets in registration order (§5: "sheets in registration
    /// order" is the first tier of the ordering guarantee `select_style`
    /// walks).
    pub(crate) fn sheets(&self) -> &[RegisteredSheet] {
        &self.sheets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_sheet() -> Stylesheet {
        Stylesheet::new(Vec::new())
    }

    #[test]
    fn new_context_has_no_sheets() {
        let ctx = SelectionContext::create();
        assert_eq!(ctx.count_sheets(), 0);
    }

    #[test]
    fn append_then_get_round_trips() {
        let mut ctx = SelectionContext::create();
        ctx.append_sheet(empty_sheet(), Origin::Author, MediaMask::ALL)
            .unwrap();
        assert_eq!(ctx.count_sheets(), 1);
        assert_eq!(ctx.get_sheet(0).unwrap().origin, Origin::Author);
    }

    #[test]
    fn insert_sheet_out_of_range_is_bad_param() {
        let mut ctx = SelectionContext::create();
        let err = ctx
            .insert_sheet(empty_sheet(), 5, Origin::Author, MediaMask::ALL)
            .unwrap_err();
        assert_eq!(err, StyleError::BadParam);
    }

    #[test]
    fn insert_inline_sheet_is_invalid() {
        use style_sheet::{Parent, Rule, RuleData};
        let inline = Stylesheet::inline(Rule::new(
            0,
            0,
            Parent::Stylesheet,
            RuleData::Selector {
                chains: Vec::new(),
                bytecode: style_sheet::BytecodeBlob::empty(),
            },
        ));
        let mut ctx = SelectionContext::create();
        let err = ctx
            .insert_sheet(inline, 0, Origin::Author, MediaMask::ALL)
            .unwrap_err();
        assert_eq!(err, StyleError::Invalid);
    }

    #[test]
    fn remove_sheet_maintains_order() {
        let mut ctx = SelectionContext::create();
        ctx.append_sheet(empty_sheet(), Origin::Ua, MediaMask::ALL)
            .unwrap();
        ctx.append_sheet(empty_sheet(), Origin::User, MediaMask::ALL)
            .unwrap();
        ctx.remove_sheet(0).unwrap();
        assert_eq!(ctx.count_sheets(), 1);
        assert_eq!(ctx.get_sheet(0).unwrap().origin, Origin::User);
    }
}
