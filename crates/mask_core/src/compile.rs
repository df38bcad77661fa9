//! Mask compilation.
//!
//! A mask string is turned into one [`MaskSlot`] per char. All positions in
//! this module are char offsets, not byte offsets: masks and buffers may hold
//! multi-byte chars (in `*` slots, or as unclassified mask chars) and every
//! slot must still line up with exactly one buffer char.

use crate::class::{CharClass, char_matches_class};
use crate::error::MaskError;
use regex::Regex;

/// Marker rendered in unfilled editable positions.
pub const BLANK: char = '_';

/// Mask chars that are copied verbatim and can never be edited.
pub const LITERAL_CHARS: [char; 7] = [' ', '/', '(', ')', '+', '-', '.'];

/// Returns `true` if `ch` is a literal mask char.
#[inline]
pub fn is_literal_char(ch: char) -> bool {
    LITERAL_CHARS.contains(&ch)
}

/// One compiled position of a mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaskSlot {
    /// Fixed char, always present in the buffer at this position.
    Literal(char),
    /// Editable position accepting one char of the given class.
    Placeholder(CharClass),
    /// A mask char outside both the literal and designator sets.
    ///
    /// The position is editable (the cursor stops on it and it renders as a
    /// blank) but no char satisfies it, and it contributes nothing to the
    /// match expression.
    Unclassified(char),
}

impl MaskSlot {
    /// Classify a single mask char.
    #[inline]
    pub fn classify(ch: char) -> Self {
        if is_literal_char(ch) {
            Self::Literal(ch)
        } else if let Some(class) = CharClass::from_designator(ch) {
            Self::Placeholder(class)
        } else {
            Self::Unclassified(ch)
        }
    }

    #[inline]
    pub fn is_literal(self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// Editable positions are everything that is not a literal.
    #[inline]
    pub fn is_editable(self) -> bool {
        !self.is_literal()
    }

    /// The class required here, if this is a placeholder.
    #[inline]
    pub fn class(self) -> Option<CharClass> {
        match self {
            Self::Placeholder(class) => Some(class),
            Self::Literal(_) | Self::Unclassified(_) => None,
        }
    }

    /// Returns `true` if typing or pasting `ch` into this slot is allowed.
    ///
    /// Literal slots accept nothing: their content is structural.
    #[inline]
    pub fn accepts(self, ch: char) -> bool {
        self.class()
            .is_some_and(|class| char_matches_class(ch, class))
    }

    /// The char this slot renders as in an empty field.
    #[inline]
    pub fn placeholder_char(self) -> char {
        match self {
            Self::Literal(ch) => ch,
            Self::Placeholder(_) | Self::Unclassified(_) => BLANK,
        }
    }
}

/// An immutable, compiled mask.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledMask {
    source: String,
    slots: Vec<MaskSlot>,
}

impl CompiledMask {
    /// The mask string this was compiled from.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[inline]
    pub fn slots(&self) -> &[MaskSlot] {
        &self.slots
    }

    /// Number of slots, which is also the char length of a non-empty buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn slot(&self, pos: usize) -> Option<MaskSlot> {
        self.slots.get(pos).copied()
    }

    #[inline]
    pub fn is_editable(&self, pos: usize) -> bool {
        self.slot(pos).is_some_and(MaskSlot::is_editable)
    }

    /// Returns `true` if `ch` may be written at `pos`.
    #[inline]
    pub fn accepts(&self, pos: usize, ch: char) -> bool {
        self.slot(pos).is_some_and(|slot| slot.accepts(ch))
    }

    /// First editable position, if the mask has any.
    pub fn first_editable(&self) -> Option<usize> {
        self.slots.iter().position(|slot| slot.is_editable())
    }

    /// Nearest editable position strictly before `pos`.
    pub fn previous_editable(&self, pos: usize) -> Option<usize> {
        let end = pos.min(self.slots.len());
        self.slots[..end].iter().rposition(|slot| slot.is_editable())
    }

    /// Nearest editable position strictly after `pos`.
    pub fn next_editable(&self, pos: usize) -> Option<usize> {
        let start = pos.saturating_add(1);
        if start >= self.slots.len() {
            return None;
        }
        self.slots[start..]
            .iter()
            .position(|slot| slot.is_editable())
            .map(|offset| start + offset)
    }

    /// Render the all-blank value: literals in place, `_` elsewhere.
    pub fn placeholder(&self) -> String {
        self.slots.iter().map(|slot| slot.placeholder_char()).collect()
    }

    /// Anchored regex source that whole-matches a completely filled value.
    pub fn match_expression(&self) -> String {
        let mut out = String::with_capacity(self.slots.len() * 5 + 8);
        out.push_str("^(?:");
        for slot in &self.slots {
            match *slot {
                MaskSlot::Literal(ch) => {
                    let mut buf = [0u8; 4];
                    out.push_str(&regex::escape(ch.encode_utf8(&mut buf)));
                }
                MaskSlot::Placeholder(class) => out.push_str(class.pattern()),
                MaskSlot::Unclassified(_) => {}
            }
        }
        out.push_str(")$");
        out
    }

    /// Compile [`match_expression`](Self::match_expression) into a regex.
    pub fn matcher(&self) -> Result<Regex, MaskError> {
        Regex::new(&self.match_expression()).map_err(MaskError::match_expression)
    }

    /// Returns `true` if the mask contains chars outside both known sets.
    pub fn has_unclassified(&self) -> bool {
        self.slots
            .iter()
            .any(|slot| matches!(slot, MaskSlot::Unclassified(_)))
    }
}

/// Compile a mask string. Never fails: unknown chars become
/// [`MaskSlot::Unclassified`].
///
/// ```
/// use mask_core::{CharClass, MaskSlot, compile};
///
/// let mask = compile("(99)");
/// assert_eq!(mask.len(), 4);
/// assert_eq!(mask.slots()[0], MaskSlot::Literal('('));
/// assert_eq!(mask.slots()[1], MaskSlot::Placeholder(CharClass::Digit));
/// ```
pub fn compile(mask: &str) -> CompiledMask {
    CompiledMask {
        source: mask.to_string(),
        slots: mask.chars().map(MaskSlot::classify).collect(),
    }
}

/// Compile a mask, rejecting chars that are neither literals nor designators.
pub fn compile_strict(mask: &str) -> Result<CompiledMask, MaskError> {
    let compiled = compile(mask);
    if let Some((position, ch)) = compiled
        .slots
        .iter()
        .enumerate()
        .find_map(|(i, slot)| match slot {
            MaskSlot::Unclassified(ch) => Some((i, *ch)),
            _ => None,
        })
    {
        return Err(MaskError::unclassified(ch, position));
    }
    Ok(compiled)
}

/// Placeholder rendering of `mask` without keeping the compiled form.
///
/// ```
/// use mask_core::build_placeholder;
///
/// assert_eq!(build_placeholder("(999) 999-9999"), "(___) ___-____");
/// ```
pub fn build_placeholder(mask: &str) -> String {
    mask.chars()
        .map(|ch| MaskSlot::classify(ch).placeholder_char())
        .collect()
}

/// Match expression source for `mask` without keeping the compiled form.
pub fn to_match_expression(mask: &str) -> String {
    compile(mask).match_expression()
}
