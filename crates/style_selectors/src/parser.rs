//! A small hand-rolled reader that turns selector text into a
//! [`SelectorChain`]. This is not the CSS value/declaration parser (out of
//! scope, per spec §1); it's the convenience surface for turning source text
//! like `div.hero > p#intro` into the typed chain the matcher and the
//! stylesheet hash both operate on. Grounded on the teacher's hand-written
//! char-by-char selector reader (no external parser combinator crate).

use std::iter::Peekable;
use std::str::Chars;

use style_intern::Interner;

use crate::chain::{CompoundSelector, SelectorChain};
use crate::detail::{Combinator, Detail, DetailKind};

/// Parse one selector (no commas — a selector *list* is the caller's
/// concern, same as the teacher's `parse_selector_list` over
/// `parse_single_selector`) into a [`SelectorChain`], interning every name
/// it encounters through `interner`.
///
/// Returns `None` for empty or malformed input — a trailing dangling
/// combinator, an empty compound, or an unterminated `[...]`/`"..."`.
#[must_use]
pub fn parse_chain(text: &str, interner: &Interner) -> Option<SelectorChain> {
    let mut chars = text.trim().chars().peekable();
    // Left-to-right parts: each compound paired with the combinator joining
    // it to the *next* part (mirrors the teacher's `SelectorPart`: `sel` +
    // `combinator_to_next`). The last part's combinator is always `None`.
    let mut parts: Vec<(CompoundSelector, Option<Combinator>)> = Vec::new();
    let mut current = CompoundSelector::new();
    let mut pending_combinator: Option<Combinator> = None;

    loop {
        let mut saw_whitespace = false;
        while chars.peek().is_some_and(|c| c.is_ascii_whitespace()) {
            saw_whitespace = true;
            chars.next();
        }
        if saw_whitespace && !current.details.is_empty() {
            pending_combinator = Some(Combinator::Descendant);
        }

        match chars.peek().copied() {
            None => break,
            Some('>') => {
                chars.next();
                close_part(&mut parts, &mut current, Combinator::Child)?;
                pending_combinator = None;
                skip_whitespace(&mut chars);
            }
            Some('+') => {
                chars.next();
                close_part(&mut parts, &mut current, Combinator::AdjacentSibling)?;
                pending_combinator = None;
                skip_whitespace(&mut chars);
            }
            Some('*') => {
                chars.next();
                start_part_if_pending(&mut parts, &mut current, &mut pending_combinator)?;
                current.push(Detail::universal(interner.intern("*")));
            }
            Some('.') => {
                chars.next();
                let name = consume_ident(&mut chars)?;
                start_part_if_pending(&mut parts, &mut current, &mut pending_combinator)?;
                current.push(Detail::new(DetailKind::Class, interner.intern(&name)));
            }
            Some('#') => {
                chars.next();
                let name = consume_ident(&mut chars)?;
                start_part_if_pending(&mut parts, &mut current, &mut pending_combinator)?;
                current.push(Detail::new(DetailKind::Id, interner.intern(&name)));
            }
            Some(':') => {
                chars.next();
                let mut is_element = false;
                if chars.peek() == Some(&':') {
                    chars.next();
                    is_element = true;
                }
                let name = consume_ident(&mut chars)?;
                start_part_if_pending(&mut parts, &mut current, &mut pending_combinator)?;
                let kind = if is_element {
                    DetailKind::PseudoElement
                } else {
                    DetailKind::PseudoClass
                };
                current.push(Detail::new(kind, interner.intern(&name)));
            }
            Some('[') => {
                chars.next();
                let detail = parse_attribute(&mut chars, interner)?;
                start_part_if_pending(&mut parts, &mut current, &mut pending_combinator)?;
                current.push(detail);
            }
            Some(character) if is_ident_start(character) => {
                let name = consume_ident(&mut chars)?;
                start_part_if_pending(&mut parts, &mut current, &mut pending_combinator)?;
                current.push(Detail::new(DetailKind::Element, interner.intern(&name)));
            }
            Some(_) => return None,
        }
    }

    // A trailing combinator with nothing after it is malformed.
    if pending_combinator.is_some() {
        return None;
    }
    if current.details.is_empty() {
        return None;
    }
    parts.push((current, None));

    build_chain(parts)
}

/// If a combinator is pending, the compound built so far belongs to the
/// *previous* part — close it out before starting a new one. Returns `None`
/// (propagated as a parse failure) only when called with an empty current
/// compound and no pending combinator, which the caller never does, but is
/// kept `Option` to compose with `?` alongside the other helpers.
fn start_part_if_pending(
    parts: &mut Vec<(CompoundSelector, Option<Combinator>)>,
    current: &mut CompoundSelector,
    pending_combinator: &mut Option<Combinator>,
) -> Option<()> {
    if let Some(combinator) = pending_combinator.take() {
        if current.details.is_empty() {
            return None;
        }
        parts.push((std::mem::take(current), Some(combinator)));
    }
    Some(())
}

fn close_part(
    parts: &mut Vec<(CompoundSelector, Option<Combinator>)>,
    current: &mut CompoundSelector,
    combinator: Combinator,
) -> Option<()> {
    if current.details.is_empty() {
        return None;
    }
    parts.push((std::mem::take(current), Some(combinator)));
    Some(())
}

fn build_chain(parts: Vec<(CompoundSelector, Option<Combinator>)>) -> Option<SelectorChain> {
    let mut parts = parts;
    let (rightmost, trailing) = parts.pop()?;
    debug_assert!(trailing.is_none());

    let ancestors = parts
        .into_iter()
        .rev()
        .map(|(compound, combinator)| (combinator.expect("non-final part always has a combinator"), compound))
        .collect();

    Some(SelectorChain::new(rightmost, ancestors))
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.peek().is_some_and(|c| c.is_ascii_whitespace()) {
        chars.next();
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '-'
}

fn consume_ident(chars: &mut Peekable<Chars<'_>>) -> Option<String> {
    let mut out = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_alphanumeric() || c == '-' || c == '_' {
            out.push(c);
            chars.next();
        } else {
            break;
        }
    }
    if out.is_empty() { None } else { Some(out) }
}

fn consume_quoted_or_bare(chars: &mut Peekable<Chars<'_>>) -> Option<String> {
    if chars.peek() == Some(&'"') || chars.peek() == Some(&'\'') {
        let quote = chars.next()?;
        let mut out = String::new();
        loop {
            match chars.next()? {
                c if c == quote => break,
                c => out.push(c),
            }
        }
        Some(out)
    } else {
        consume_ident(chars)
    }
}

fn parse_attribute(chars: &mut Peekable<Chars<'_>>, interner: &Interner) -> Option<Detail> {
    skip_whitespace(chars);
    let name = consume_ident(chars)?;
    skip_whitespace(chars);
    let name_symbol = interner.intern(&name);

    match chars.peek().copied() {
        Some(']') => {
            chars.next();
            Some(Detail::new(DetailKind::Attribute, name_symbol))
        }
        Some('=') => {
            chars.next();
            skip_whitespace(chars);
            let value = consume_quoted_or_bare(chars)?;
            skip_whitespace(chars);
            if chars.next() != Some(']') {
                return None;
            }
            Some(Detail::with_value(
                DetailKind::AttributeEquals,
                name_symbol,
                interner.intern(&value),
            ))
        }
        Some('|') => {
            chars.next();
            if chars.next() != Some('=') {
                return None;
            }
            skip_whitespace(chars);
            let value = consume_quoted_or_bare(chars)?;
            skip_whitespace(chars);
            if chars.next() != Some(']') {
                return None;
            }
            Some(Detail::with_value(
                DetailKind::AttributeDashmatch,
                name_symbol,
                interner.intern(&value),
            ))
        }
        Some('~') => {
            chars.next();
            if chars.next() != Some('=') {
                return None;
            }
            skip_whitespace(chars);
            let value = consume_quoted_or_bare(chars)?;
            skip_whitespace(chars);
            if chars.next() != Some(']') {
                return None;
            }
            Some(Detail::with_value(
                DetailKind::AttributeIncludes,
                name_symbol,
                interner.intern(&value),
            ))
        }
        _ => None,
    }
}
