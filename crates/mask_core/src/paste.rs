//! Paste reconciliation.
//!
//! A pasted string is laid over the mask one editable slot at a time. Source
//! chars are consumed only when they fit; a char that does not fit leaves a
//! blank and is retried against the next editable slot. Literal slots never
//! consume source chars, so a paste that already contains the literals
//! (`"12-34"` into `"99-99"`) does not line up by index unless it matches
//! the whole mask outright.

use crate::compile::{BLANK, CompiledMask, MaskSlot};

/// Outcome of laying pasted text over a mask.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasteResult {
    /// New buffer, one char per slot.
    pub value: String,
    /// First position left blank, or the end of the buffer if none.
    pub cursor: usize,
    /// Number of source chars that were placed.
    pub consumed: usize,
}

/// Reconcile `pasted` against `mask` char by char.
///
/// ```
/// use mask_core::{compile, reconcile_paste};
///
/// let res = reconcile_paste(&compile("99/99"), "1234");
/// assert_eq!(res.value, "12/34");
/// assert_eq!(res.cursor, 5);
/// ```
pub fn reconcile_paste(mask: &CompiledMask, pasted: &str) -> PasteResult {
    let source: Vec<char> = pasted.chars().collect();
    let mut value = String::with_capacity(mask.source().len());
    let mut source_index = 0usize;
    let mut first_blank: Option<usize> = None;

    for (pos, slot) in mask.slots().iter().enumerate() {
        if let MaskSlot::Literal(ch) = *slot {
            value.push(ch);
            continue;
        }
        match source.get(source_index) {
            Some(&ch) if slot.accepts(ch) => {
                value.push(ch);
                source_index += 1;
            }
            _ => {
                value.push(BLANK);
                first_blank.get_or_insert(pos);
            }
        }
    }

    log::trace!(
        target: "mask.paste",
        "reconciled {} of {} pasted chars into {value:?}, first blank {first_blank:?}",
        source_index,
        source.len()
    );

    PasteResult {
        value,
        cursor: first_blank.unwrap_or(mask.len()),
        consumed: source_index,
    }
}
