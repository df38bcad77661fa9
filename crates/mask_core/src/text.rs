//! Char-offset text utilities.
//!
//! The engine addresses the buffer by char offset so that each offset lines
//! up with exactly one mask slot. Hosts that track carets as UTF-8 byte
//! offsets convert at the boundary with [`byte_to_char_offset`] and
//! [`char_to_byte_offset`].

use crate::compile::BLANK;

/// Clamp an arbitrary byte index to a valid UTF-8 character boundary.
///
/// Indices past the end clamp to `s.len()`; indices inside a multi-byte
/// char move back to its start.
///
/// ```
/// use mask_core::clamp_to_char_boundary;
///
/// let s = "a€b"; // '€' is 3 bytes
/// assert_eq!(clamp_to_char_boundary(s, 2), 1);
/// assert_eq!(clamp_to_char_boundary(s, 100), 5);
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Number of chars in `s`.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Convert a byte offset into a char offset, clamping first.
///
/// ```
/// use mask_core::byte_to_char_offset;
///
/// assert_eq!(byte_to_char_offset("a€b", 4), 2);
/// assert_eq!(byte_to_char_offset("a€b", 2), 1); // mid '€'
/// ```
pub fn byte_to_char_offset(s: &str, byte: usize) -> usize {
    let byte = clamp_to_char_boundary(s, byte);
    s[..byte].chars().count()
}

/// Convert a char offset into a byte offset. Offsets past the end map to
/// `s.len()`.
///
/// ```
/// use mask_core::char_to_byte_offset;
///
/// assert_eq!(char_to_byte_offset("a€b", 2), 4);
/// assert_eq!(char_to_byte_offset("a€b", 9), 5);
/// ```
pub fn char_to_byte_offset(s: &str, pos: usize) -> usize {
    s.char_indices()
        .nth(pos)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len())
}

/// Replace the char at char offset `pos` with `ch`.
///
/// Returns `false` (leaving `value` untouched) when `pos` is out of range.
///
/// ```
/// use mask_core::overwrite_char_at;
///
/// let mut v = String::from("1_3");
/// assert!(overwrite_char_at(&mut v, 1, '€'));
/// assert_eq!(v, "1€3");
/// assert!(!overwrite_char_at(&mut v, 3, 'x'));
/// ```
pub fn overwrite_char_at(value: &mut String, pos: usize, ch: char) -> bool {
    let Some((start, old)) = value.char_indices().nth(pos) else {
        return false;
    };
    let mut buf = [0u8; 4];
    value.replace_range(start..start + old.len_utf8(), ch.encode_utf8(&mut buf));
    true
}

/// Char offset of the first blank marker in `value`.
#[inline]
pub fn first_blank(value: &str) -> Option<usize> {
    value.chars().position(|ch| ch == BLANK)
}

/// Returns `true` if `value` still contains a blank marker.
#[inline]
pub fn has_blank(value: &str) -> bool {
    value.contains(BLANK)
}
