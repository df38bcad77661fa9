//! The mask edit engine.
//!
//! [`MaskEngine`] holds everything derived from the mask (slots and the
//! whole-value matcher) and is immutable after construction. Each field
//! keeps its own [`FieldState`]; the engine mutates it in place for every
//! host event. All cursor positions are char offsets.

use crate::compile::{BLANK, CompiledMask, compile, compile_strict};
use crate::error::MaskError;
use crate::key::{Key, KeyDisposition, KeyInput};
use crate::paste::reconcile_paste;
use crate::selection::SelectionRange;
use crate::state::FieldState;
use crate::text::{char_len, first_blank, overwrite_char_at};
use regex::Regex;

/// Mask-driven editing rules shared by every field using the same mask.
#[derive(Clone, Debug)]
pub struct MaskEngine {
    mask: CompiledMask,
    matcher: Regex,
}

impl MaskEngine {
    /// Build an engine for `mask`. Unclassified mask chars are accepted and
    /// become slots that nothing can fill.
    pub fn new(mask: &str) -> Result<Self, MaskError> {
        Self::from_compiled(compile(mask))
    }

    /// Like [`new`](Self::new), but rejects unclassified mask chars.
    pub fn new_strict(mask: &str) -> Result<Self, MaskError> {
        Self::from_compiled(compile_strict(mask)?)
    }

    pub fn from_compiled(mask: CompiledMask) -> Result<Self, MaskError> {
        let matcher = mask.matcher()?;
        Ok(Self { mask, matcher })
    }

    #[inline]
    pub fn mask(&self) -> &CompiledMask {
        &self.mask
    }

    /// Returns `true` if `text` is a complete value for this mask.
    pub fn is_complete_value(&self, text: &str) -> bool {
        char_len(text) == self.mask.len() && self.matcher.is_match(text)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Focus: an empty field becomes the placeholder with the cursor on the
    /// first editable slot. A non-empty field is left as it is.
    pub fn focus(&self, st: &mut FieldState) {
        if !st.value.is_empty() {
            return;
        }
        st.value = self.mask.placeholder();
        st.cursor = self.first_editable_or_end();
    }

    /// Blur: an incomplete value is discarded.
    pub fn blur(&self, st: &mut FieldState) {
        if st.value.contains(BLANK) {
            log::trace!(
                target: "mask.engine",
                "blur discards incomplete value {:?}",
                st.value
            );
            st.reset();
        }
    }

    /// Record the host's current selection.
    pub fn selection_changed(&self, st: &mut FieldState, range: SelectionRange) {
        st.whole_field_selected = range.covers_all(st.len());
    }

    // =========================================================================
    // Keystrokes
    // =========================================================================

    /// Handle a keystroke with the host's cursor at `cursor`.
    ///
    /// Returns whether the host must suppress its default handling.
    pub fn key(&self, st: &mut FieldState, input: &KeyInput, cursor: usize) -> KeyDisposition {
        if input.modifiers.is_shortcut() || input.key == Key::Tab {
            return KeyDisposition::PassThrough;
        }

        let mut cursor = cursor.min(st.len());
        if st.value.is_empty() {
            self.focus(st);
            cursor = st.cursor;
        }
        if st.whole_field_selected {
            st.value = self.mask.placeholder();
            st.cursor = first_blank(&st.value).unwrap_or(self.mask.len());
            st.whole_field_selected = false;
            cursor = st.cursor;
        }

        log::trace!(target: "mask.engine", "key {:?} at {cursor}", input.key);

        match &input.key {
            Key::ArrowLeft => self.move_to_previous_editable(st, cursor),
            Key::ArrowRight => self.move_to_next_editable(st, cursor),
            Key::Backspace => self.clear_previous_editable(st, cursor),
            Key::Delete => self.clear_next_editable(st, cursor),
            Key::Char(ch) => {
                self.insert_char(st, *ch, cursor);
            }
            Key::Tab | Key::Named(_) => {}
        }
        KeyDisposition::Suppress
    }

    /// Write `ch` at `cursor` if the slot there accepts it, then advance.
    ///
    /// Returns `false` if the char was rejected.
    pub fn insert_char(&self, st: &mut FieldState, ch: char, cursor: usize) -> bool {
        if !self.mask.accepts(cursor, ch) || !overwrite_char_at(&mut st.value, cursor, ch) {
            log::trace!(target: "mask.engine", "rejected {ch:?} at {cursor}");
            return false;
        }
        st.cursor = self.mask.next_editable(cursor).unwrap_or(st.len());
        true
    }

    /// Arrow-left: move to the nearest editable slot before `pos`.
    pub fn move_to_previous_editable(&self, st: &mut FieldState, pos: usize) {
        if let Some(prev) = self.mask.previous_editable(pos) {
            st.cursor = prev;
        }
    }

    /// Arrow-right: move to the nearest editable slot after `pos`.
    pub fn move_to_next_editable(&self, st: &mut FieldState, pos: usize) {
        if let Some(next) = self.mask.next_editable(pos) {
            st.cursor = next;
        }
    }

    /// Backspace: blank the nearest editable slot before `pos` and move there.
    pub fn clear_previous_editable(&self, st: &mut FieldState, pos: usize) {
        if let Some(prev) = self.mask.previous_editable(pos)
            && overwrite_char_at(&mut st.value, prev, BLANK)
        {
            st.cursor = prev;
        }
    }

    /// Delete: blank the nearest editable slot after `pos`; the cursor stays.
    pub fn clear_next_editable(&self, st: &mut FieldState, pos: usize) {
        if let Some(next) = self.mask.next_editable(pos)
            && overwrite_char_at(&mut st.value, next, BLANK)
        {
            st.cursor = pos;
        }
    }

    // =========================================================================
    // Paste
    // =========================================================================

    /// Replace the value with pasted text.
    ///
    /// Text that already is a complete value is taken verbatim; anything
    /// else is reconciled slot by slot (see [`reconcile_paste`]).
    pub fn paste(&self, st: &mut FieldState, text: &str) -> KeyDisposition {
        st.whole_field_selected = false;
        if self.is_complete_value(text) {
            log::trace!(target: "mask.paste", "paste {text:?} matches the mask as-is");
            st.value = text.to_string();
            st.cursor = first_blank(&st.value).unwrap_or(self.mask.len());
            return KeyDisposition::Suppress;
        }
        let res = reconcile_paste(&self.mask, text);
        st.value = res.value;
        st.cursor = res.cursor;
        KeyDisposition::Suppress
    }

    fn first_editable_or_end(&self) -> usize {
        self.mask.first_editable().unwrap_or(self.mask.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Modifiers;
    use crate::state::SessionPhase;

    fn engine(mask: &str) -> MaskEngine {
        MaskEngine::new(mask).unwrap()
    }

    fn focused(engine: &MaskEngine) -> FieldState {
        let mut st = FieldState::new();
        engine.focus(&mut st);
        st
    }

    fn press(engine: &MaskEngine, st: &mut FieldState, key: Key) -> KeyDisposition {
        let cursor = st.cursor;
        engine.key(st, &KeyInput::new(key), cursor)
    }

    fn type_str(engine: &MaskEngine, st: &mut FieldState, text: &str) {
        for ch in text.chars() {
            press(engine, st, Key::Char(ch));
        }
    }

    #[test]
    fn focus_on_empty_field_shows_placeholder() {
        let e = engine("(999) 999-9999");
        let st = focused(&e);
        assert_eq!(st.value, "(___) ___-____");
        assert_eq!(st.cursor, 1);
    }

    #[test]
    fn focus_on_filled_field_changes_nothing() {
        let e = engine("99/99");
        let mut st = FieldState::with_value("1_/34");
        st.cursor = 1;
        let before = st.clone();
        e.focus(&mut st);
        assert_eq!(st, before);
    }

    #[test]
    fn focus_without_editable_slots_puts_cursor_at_end() {
        let e = engine("--");
        let st = focused(&e);
        assert_eq!(st.value, "--");
        assert_eq!(st.cursor, 2);
    }

    #[test]
    fn typing_a_date_skips_separators() {
        let e = engine("99/99/9999");
        let mut st = focused(&e);
        type_str(&e, &mut st, "01201999");
        assert_eq!(st.value, "01/20/1999");
        assert_eq!(st.cursor, 10);
        assert_eq!(st.phase(), SessionPhase::Complete);
    }

    #[test]
    fn typing_into_a_blank_moves_to_the_next_editable_slot() {
        let e = engine("999");
        let mut st = FieldState::with_value("1_3");
        e.key(&mut st, &KeyInput::from('5'), 1);
        assert_eq!(st.value, "153");
        assert_eq!(st.cursor, 2);
    }

    #[test]
    fn typing_into_the_last_slot_moves_to_the_end() {
        let e = engine("999");
        let mut st = FieldState::with_value("15_");
        e.key(&mut st, &KeyInput::from('3'), 2);
        assert_eq!(st.value, "153");
        assert_eq!(st.cursor, 3);
    }

    #[test]
    fn rejected_chars_change_nothing() {
        let e = engine("AA-999");
        let mut st = focused(&e);
        let before = st.clone();
        assert_eq!(press(&e, &mut st, Key::Char('x')), KeyDisposition::Suppress);
        assert_eq!(st, before);
    }

    #[test]
    fn accepted_chars_are_suppressed_after_the_write() {
        let e = engine("A9");
        let mut st = focused(&e);
        assert_eq!(press(&e, &mut st, Key::Char('Q')), KeyDisposition::Suppress);
        assert_eq!(st.value, "Q_");
        assert_eq!(st.cursor, 1);
        assert!(e.insert_char(&mut st, '7', 1));
        assert!(!e.insert_char(&mut st, 'z', 0));
        assert_eq!(st.value, "Q7");
    }

    #[test]
    fn typing_on_a_literal_or_past_the_end_is_ignored() {
        let e = engine("9-9");
        let mut st = FieldState::with_value("1-2");
        e.key(&mut st, &KeyInput::from('5'), 1);
        assert_eq!(st.value, "1-2");
        e.key(&mut st, &KeyInput::from('5'), 3);
        assert_eq!(st.value, "1-2");
        e.key(&mut st, &KeyInput::from('5'), 99);
        assert_eq!(st.value, "1-2");
    }

    #[test]
    fn arrows_skip_literals_and_stop_at_the_edges() {
        let e = engine("(99) 9");
        let mut st = FieldState::with_value("(12) 3");
        e.key(&mut st, &KeyInput::new(Key::ArrowLeft), 6);
        assert_eq!(st.cursor, 5);
        e.key(&mut st, &KeyInput::new(Key::ArrowLeft), 5);
        assert_eq!(st.cursor, 2);
        e.key(&mut st, &KeyInput::new(Key::ArrowLeft), 2);
        assert_eq!(st.cursor, 1);
        e.key(&mut st, &KeyInput::new(Key::ArrowLeft), 1);
        assert_eq!(st.cursor, 1);

        e.key(&mut st, &KeyInput::new(Key::ArrowRight), 2);
        assert_eq!(st.cursor, 5);
        e.key(&mut st, &KeyInput::new(Key::ArrowRight), 5);
        assert_eq!(st.cursor, 5);
        assert_eq!(st.value, "(12) 3");
    }

    #[test]
    fn backspace_blanks_previous_editable_and_moves_there() {
        let e = engine("99/99");
        let mut st = FieldState::with_value("12/34");
        e.key(&mut st, &KeyInput::new(Key::Backspace), 3);
        assert_eq!(st.value, "1_/34");
        assert_eq!(st.cursor, 1);
        assert_eq!(st.phase(), SessionPhase::Editing);
    }

    #[test]
    fn backspace_at_the_first_slot_is_a_no_op() {
        let e = engine("(99)");
        let mut st = FieldState::with_value("(12)");
        st.cursor = 1;
        e.key(&mut st, &KeyInput::new(Key::Backspace), 1);
        assert_eq!(st.value, "(12)");
        assert_eq!(st.cursor, 1);
    }

    #[test]
    fn backspace_then_retype_restores_the_value() {
        let e = engine("(999) 999-9999");
        let original = "(555) 123-4567";
        for p in 0..=original.len() {
            let mut st = FieldState::with_value(original);
            e.key(&mut st, &KeyInput::new(Key::Backspace), p);
            if st.value == original {
                continue;
            }
            let removed = original.chars().nth(st.cursor).unwrap();
            let at = st.cursor;
            e.key(&mut st, &KeyInput::from(removed), at);
            assert_eq!(st.value, original, "backspace at {p}");
        }
    }

    #[test]
    fn delete_blanks_next_editable_and_keeps_the_cursor() {
        let e = engine("99/99");
        let mut st = FieldState::with_value("12/34");
        e.key(&mut st, &KeyInput::new(Key::Delete), 1);
        assert_eq!(st.value, "12/_4");
        assert_eq!(st.cursor, 1);
    }

    #[test]
    fn delete_with_nothing_after_is_a_no_op() {
        let e = engine("99");
        let mut st = FieldState::with_value("12");
        e.key(&mut st, &KeyInput::new(Key::Delete), 1);
        assert_eq!(st.value, "12");
    }

    #[test]
    fn shortcuts_and_tab_pass_through_untouched() {
        let e = engine("99");
        let mut st = FieldState::with_value("12");
        st.whole_field_selected = true;
        let ctrl_a = KeyInput::with_modifiers(
            Key::Char('a'),
            Modifiers {
                ctrl: true,
                ..Modifiers::NONE
            },
        );
        assert_eq!(e.key(&mut st, &ctrl_a, 0), KeyDisposition::PassThrough);
        let meta_c = KeyInput::with_modifiers(
            Key::Char('c'),
            Modifiers {
                meta: true,
                ..Modifiers::NONE
            },
        );
        assert_eq!(e.key(&mut st, &meta_c, 0), KeyDisposition::PassThrough);
        assert_eq!(
            e.key(&mut st, &KeyInput::new(Key::Tab), 0),
            KeyDisposition::PassThrough
        );
        assert_eq!(st.value, "12");
        assert!(st.whole_field_selected);
    }

    #[test]
    fn shift_does_not_bypass_the_mask() {
        let e = engine("A");
        let mut st = focused(&e);
        let shifted = KeyInput::with_modifiers(
            Key::Char('Q'),
            Modifiers {
                shift: true,
                ..Modifiers::NONE
            },
        );
        assert_eq!(e.key(&mut st, &shifted, 0), KeyDisposition::Suppress);
        assert_eq!(st.value, "Q");
    }

    #[test]
    fn named_keys_are_swallowed() {
        let e = engine("99");
        let mut st = focused(&e);
        let before = st.clone();
        assert_eq!(
            press(&e, &mut st, Key::Named("Enter".into())),
            KeyDisposition::Suppress
        );
        assert_eq!(st, before);
    }

    #[test]
    fn whole_field_selection_resets_then_types_at_first_blank() {
        let e = engine("(999) 999-9999");
        let mut st = FieldState::with_value("(555) 123-4567");
        e.selection_changed(&mut st, SelectionRange::new(0, 14));
        assert!(st.whole_field_selected);

        // Host cursor is at the end of the selection.
        e.key(&mut st, &KeyInput::from('8'), 14);
        assert_eq!(st.value, "(8__) ___-____");
        assert_eq!(st.cursor, 2);
        assert!(!st.whole_field_selected);
    }

    #[test]
    fn whole_field_selection_then_backspace_leaves_the_placeholder() {
        let e = engine("99/99");
        let mut st = FieldState::with_value("12/34");
        e.selection_changed(&mut st, SelectionRange::new(5, 0));
        e.key(&mut st, &KeyInput::new(Key::Backspace), 5);
        assert_eq!(st.value, "__/__");
        assert_eq!(st.cursor, 0);
    }

    #[test]
    fn partial_selection_does_not_reset() {
        let e = engine("99/99");
        let mut st = FieldState::with_value("12/34");
        e.selection_changed(&mut st, SelectionRange::new(1, 5));
        assert!(!st.whole_field_selected);
        e.key(&mut st, &KeyInput::from('9'), 0);
        assert_eq!(st.value, "92/34");
    }

    #[test]
    fn keys_before_focus_materialize_the_placeholder() {
        let e = engine("99-99");
        let mut st = FieldState::new();
        e.key(&mut st, &KeyInput::from('4'), 0);
        assert_eq!(st.value, "4_-__");
        assert_eq!(st.cursor, 1);
    }

    #[test]
    fn blur_discards_incomplete_and_keeps_complete_values() {
        let e = engine("99");
        let mut st = FieldState::with_value("1_");
        e.blur(&mut st);
        assert_eq!(st.value, "");
        assert_eq!(st.phase(), SessionPhase::Empty);

        let mut st = FieldState::with_value("12");
        e.blur(&mut st);
        assert_eq!(st.value, "12");
    }

    #[test]
    fn paste_of_a_complete_value_is_taken_verbatim() {
        let e = engine("(999) 999-9999");
        let mut st = focused(&e);
        e.paste(&mut st, "(555) 123-4567");
        assert_eq!(st.value, "(555) 123-4567");
        assert_eq!(st.cursor, 14);
    }

    #[test]
    fn paste_reconciles_partial_text() {
        let e = engine("AA-999");
        let mut st = focused(&e);
        e.paste(&mut st, "xy-12");
        assert_eq!(st.value, "__-___");
        assert_eq!(st.cursor, 0);
    }

    #[test]
    fn paste_with_unclassified_mask_chars_keeps_the_buffer_length() {
        // The expression omits 'x', so "12" matches it but is one char short.
        let e = engine("9x9");
        let mut st = focused(&e);
        e.paste(&mut st, "12");
        assert_eq!(st.value, "1_2");
        assert_eq!(st.len(), 3);
        assert_eq!(st.cursor, 1);
    }

    #[test]
    fn paste_clears_the_whole_field_flag() {
        let e = engine("99");
        let mut st = FieldState::with_value("12");
        st.whole_field_selected = true;
        e.paste(&mut st, "34");
        assert_eq!(st.value, "34");
        assert!(!st.whole_field_selected);
    }

    #[test]
    fn strict_engine_rejects_unclassified_masks() {
        assert!(MaskEngine::new_strict("99?").is_err());
        assert!(MaskEngine::new("99?").is_ok());
    }
}
