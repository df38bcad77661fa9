//! A masked field: one engine plus the state it edits.

use crate::engine::MaskEngine;
use crate::error::MaskError;
use crate::key::{KeyDisposition, KeyInput};
use crate::selection::SelectionRange;
use crate::state::{FieldState, SessionPhase};

/// Owns an engine and one field's state.
///
/// # Example
///
/// ```
/// use mask_core::MaskSession;
///
/// let mut field = MaskSession::new("99/99/9999").unwrap();
/// field.focus();
/// for ch in "01201999".chars() {
///     field.key(&ch.into(), None);
/// }
/// assert_eq!(field.value(), "01/20/1999");
/// ```
#[derive(Clone, Debug)]
pub struct MaskSession {
    engine: MaskEngine,
    state: FieldState,
}

impl MaskSession {
    pub fn new(mask: &str) -> Result<Self, MaskError> {
        Ok(Self::with_engine(MaskEngine::new(mask)?))
    }

    pub fn with_engine(engine: MaskEngine) -> Self {
        Self {
            engine,
            state: FieldState::new(),
        }
    }

    #[inline]
    pub fn engine(&self) -> &MaskEngine {
        &self.engine
    }

    #[inline]
    pub fn state(&self) -> &FieldState {
        &self.state
    }

    pub fn focus(&mut self) {
        self.engine.focus(&mut self.state);
    }

    pub fn blur(&mut self) {
        self.engine.blur(&mut self.state);
    }

    pub fn select(&mut self, range: SelectionRange) {
        self.engine.selection_changed(&mut self.state, range);
    }

    pub fn key(&mut self, input: &KeyInput, at: Option<usize>) -> KeyDisposition {
        let cursor = at.unwrap_or(self.state.cursor);
        self.engine.key(&mut self.state, input, cursor)
    }

    pub fn paste(&mut self, text: &str) -> KeyDisposition {
        self.engine.paste(&mut self.state, text)
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.state.value
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.state.cursor
    }

    #[inline]
    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }
}
