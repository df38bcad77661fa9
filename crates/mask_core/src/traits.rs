//! Host-facing trait for masked fields.
//!
//! A UI adapter drives any implementor with the six platform events and
//! reads back the value and cursor to write onto its surface. Keeping this
//! a trait lets adapters and tests swap in alternative field
//! implementations.
//!
//! # Integration Pattern
//!
//! ```ignore
//! fn on_key_down(field: &mut impl MaskInput, ev: &PlatformKeyEvent) {
//!     let input = translate(ev);
//!     if field.key(&input, Some(ev.caret)) == KeyDisposition::Suppress {
//!         ev.prevent_default();
//!     }
//!     surface.set_value(field.value());
//!     surface.set_caret(field.cursor());
//! }
//! ```

use crate::event::FieldEvent;
use crate::key::{KeyDisposition, KeyInput};
use crate::selection::SelectionRange;
use crate::state::SessionPhase;

pub trait MaskInput {
    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// The field gained focus.
    fn focus(&mut self);

    /// The field lost focus. Incomplete values are discarded.
    fn blur(&mut self);

    // =========================================================================
    // Input
    // =========================================================================

    /// The host's selection changed.
    fn select(&mut self, range: SelectionRange);

    /// A keystroke. `at` is the host's cursor; `None` uses the field's own.
    fn key(&mut self, input: &KeyInput, at: Option<usize>) -> KeyDisposition;

    /// Clipboard plain text was pasted.
    fn paste(&mut self, text: &str) -> KeyDisposition;

    // =========================================================================
    // Read-Only Getters
    // =========================================================================

    fn value(&self) -> &str;

    /// Cursor as a char offset into [`value`](Self::value).
    fn cursor(&self) -> usize;

    fn phase(&self) -> SessionPhase;

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Route a [`FieldEvent`] to the matching handler.
    ///
    /// Focus, blur and selection changes never suppress anything; a `Type`
    /// run suppresses if any of its keys did.
    fn apply(&mut self, event: &FieldEvent) -> KeyDisposition {
        match event {
            FieldEvent::Focus => {
                self.focus();
                KeyDisposition::PassThrough
            }
            FieldEvent::Blur => {
                self.blur();
                KeyDisposition::PassThrough
            }
            FieldEvent::Select(range) => {
                self.select(*range);
                KeyDisposition::PassThrough
            }
            FieldEvent::Key { input, at } => self.key(input, *at),
            FieldEvent::Paste(text) => self.paste(text),
            FieldEvent::Type(text) => {
                let mut disposition = KeyDisposition::PassThrough;
                for ch in text.chars() {
                    if self.key(&KeyInput::from(ch), None) == KeyDisposition::Suppress {
                        disposition = KeyDisposition::Suppress;
                    }
                }
                disposition
            }
        }
    }
}

// =============================================================================
// Implementation for MaskSession
// =============================================================================

impl MaskInput for crate::session::MaskSession {
    #[inline]
    fn focus(&mut self) {
        crate::session::MaskSession::focus(self)
    }

    #[inline]
    fn blur(&mut self) {
        crate::session::MaskSession::blur(self)
    }

    #[inline]
    fn select(&mut self, range: SelectionRange) {
        crate::session::MaskSession::select(self, range)
    }

    #[inline]
    fn key(&mut self, input: &KeyInput, at: Option<usize>) -> KeyDisposition {
        crate::session::MaskSession::key(self, input, at)
    }

    #[inline]
    fn paste(&mut self, text: &str) -> KeyDisposition {
        crate::session::MaskSession::paste(self, text)
    }

    #[inline]
    fn value(&self) -> &str {
        crate::session::MaskSession::value(self)
    }

    #[inline]
    fn cursor(&self) -> usize {
        crate::session::MaskSession::cursor(self)
    }

    #[inline]
    fn phase(&self) -> SessionPhase {
        crate::session::MaskSession::phase(self)
    }
}
