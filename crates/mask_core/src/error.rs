//! Errors for the fallible edges of mask handling.
//!
//! Editing itself never fails: rejected keystrokes and unmatched paste
//! characters are absorbed as no-ops or blanks. Only building a mask in
//! strict mode and compiling its match expression can report an error.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaskErrorCode {
    /// A mask char that is neither a literal nor a class designator.
    UnclassifiedCharacter,
    /// The whole-value match expression could not be compiled.
    MatchExpression,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskError {
    pub code: MaskErrorCode,
    /// Char offset into the mask the error refers to.
    pub position: usize,
    pub detail: String,
}

impl MaskError {
    pub(crate) fn unclassified(ch: char, position: usize) -> Self {
        Self {
            code: MaskErrorCode::UnclassifiedCharacter,
            position,
            detail: format!("'{ch}' is not a literal or class designator"),
        }
    }

    pub(crate) fn match_expression(err: regex::Error) -> Self {
        Self {
            code: MaskErrorCode::MatchExpression,
            position: 0,
            detail: err.to_string(),
        }
    }
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            MaskErrorCode::UnclassifiedCharacter => write!(
                f,
                "unclassified mask character at {}: {}",
                self.position, self.detail
            ),
            MaskErrorCode::MatchExpression => {
                write!(f, "invalid mask match expression: {}", self.detail)
            }
        }
    }
}

impl std::error::Error for MaskError {}
