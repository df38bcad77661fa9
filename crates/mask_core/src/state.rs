//! Per-field editing state.
//!
//! This is the value a host owns for one masked field and hands to the
//! [`MaskEngine`](crate::MaskEngine) on every event.

use crate::selection::SelectionRange;
use crate::text::{char_len, has_blank};

/// Editing state of a single masked field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    /// The current text. Either empty, or exactly one char per mask slot.
    pub value: String,

    /// Cursor as a char offset into `value`.
    pub cursor: usize,

    /// Set when the host reports a selection spanning the whole value.
    ///
    /// The next keystroke starts over from the placeholder.
    pub whole_field_selected: bool,
}

/// Where a field is in its editing lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Nothing entered (never focused, or discarded on blur).
    Empty,
    /// At least one blank remains.
    Editing,
    /// Every editable position is filled.
    Complete,
}

impl SessionPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Editing => "editing",
            Self::Complete => "complete",
        }
    }
}

impl FieldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing value, cursor at its end.
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = char_len(&value);
        Self {
            value,
            cursor,
            whole_field_selected: false,
        }
    }

    /// Char length of the current value.
    #[inline]
    pub fn len(&self) -> usize {
        char_len(&self.value)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.value.is_empty() {
            SessionPhase::Empty
        } else if has_blank(&self.value) {
            SessionPhase::Editing
        } else {
            SessionPhase::Complete
        }
    }

    /// The cursor as a collapsed selection, for hosts that set ranges.
    #[inline]
    pub fn cursor_range(&self) -> SelectionRange {
        SelectionRange::collapsed(self.cursor)
    }

    pub(crate) fn reset(&mut self) {
        self.value.clear();
        self.cursor = 0;
        self.whole_field_selected = false;
    }
}
