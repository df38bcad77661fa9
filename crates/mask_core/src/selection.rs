//! Text selection representation.

/// A selection on the host surface as a char range.
///
/// The range is always normalized such that `start <= end`. A collapsed
/// range (`start == end`) is a plain cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionRange {
    /// Start char offset (inclusive).
    pub start: usize,
    /// End char offset (exclusive).
    pub end: usize,
}

impl SelectionRange {
    /// Create a new selection range, normalized so `start <= end`.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// A zero-width range at `pos`.
    #[inline]
    pub fn collapsed(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if this range spans a whole value of `len` chars.
    ///
    /// An empty value is never considered fully selected.
    #[inline]
    pub fn covers_all(&self, len: usize) -> bool {
        len > 0 && self.start == 0 && self.end == len
    }
}
