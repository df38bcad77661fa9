//! # mask_core
//!
//! UI-agnostic masked text entry.
//!
//! A mask such as `(999) 999-9999` turns a plain text input into a
//! fill-in-the-blanks field:
//! - [`compile`] turns the mask into [`MaskSlot`]s, a placeholder rendering
//!   and a whole-value match expression
//! - [`MaskEngine`] applies focus, blur, keystrokes, paste and selection
//!   changes to a [`FieldState`] (value + cursor)
//! - [`MaskSession`] bundles the two and implements [`MaskInput`], the
//!   trait host adapters drive
//!
//! ## Mask syntax
//!
//! | Char                         | Meaning                         |
//! |------------------------------|---------------------------------|
//! | `9`                          | ASCII digit                     |
//! | `a`                          | ASCII lowercase letter          |
//! | `A`                          | ASCII uppercase letter          |
//! | `*`                          | any char                        |
//! | space `/` `(` `)` `+` `-` `.` | literal, never editable        |
//!
//! Any other mask char occupies a position that nothing can fill.
//!
//! ## Design Principles
//!
//! This crate does not depend on any UI toolkit or platform API. Every
//! operation runs synchronously in time linear in the mask length. Cursor
//! positions are char offsets; see [`byte_to_char_offset`] for hosts that
//! track UTF-8 byte carets.

mod class;
mod compile;
mod engine;
mod error;
mod event;
mod key;
mod paste;
mod selection;
mod session;
mod state;
mod text;
mod traits;

pub use class::{CharClass, char_matches_class};
pub use compile::{
    BLANK, CompiledMask, LITERAL_CHARS, MaskSlot, build_placeholder, compile, compile_strict,
    is_literal_char, to_match_expression,
};
pub use engine::MaskEngine;
pub use error::{MaskError, MaskErrorCode};
pub use event::{EventParseError, FieldEvent};
pub use key::{Key, KeyDisposition, KeyInput, Modifiers};
pub use paste::{PasteResult, reconcile_paste};
pub use selection::SelectionRange;
pub use session::MaskSession;
pub use state::{FieldState, SessionPhase};
pub use traits::MaskInput;

// Re-export text utilities for integration layers that track carets as
// UTF-8 byte offsets.
pub use text::{
    byte_to_char_offset, char_len, char_to_byte_offset, clamp_to_char_boundary, first_blank,
    overwrite_char_at,
};
