//! Character classes accepted by placeholder slots.

/// The kind of character a placeholder slot accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `9` in a mask: an ASCII digit.
    Digit,
    /// `a` in a mask: an ASCII lowercase letter.
    LowercaseLetter,
    /// `A` in a mask: an ASCII uppercase letter.
    UppercaseLetter,
    /// `*` in a mask: any single character.
    AnyCharacter,
}

impl CharClass {
    /// Map a mask designator char to its class.
    ///
    /// ```
    /// use mask_core::CharClass;
    ///
    /// assert_eq!(CharClass::from_designator('9'), Some(CharClass::Digit));
    /// assert_eq!(CharClass::from_designator('A'), Some(CharClass::UppercaseLetter));
    /// assert_eq!(CharClass::from_designator('x'), None);
    /// ```
    #[inline]
    pub const fn from_designator(ch: char) -> Option<Self> {
        match ch {
            '9' => Some(Self::Digit),
            'a' => Some(Self::LowercaseLetter),
            'A' => Some(Self::UppercaseLetter),
            '*' => Some(Self::AnyCharacter),
            _ => None,
        }
    }

    /// The mask char that designates this class.
    #[inline]
    pub const fn designator(self) -> char {
        match self {
            Self::Digit => '9',
            Self::LowercaseLetter => 'a',
            Self::UppercaseLetter => 'A',
            Self::AnyCharacter => '*',
        }
    }

    /// Regex fragment matching exactly one char of this class.
    ///
    /// `AnyCharacter` uses `(?s:.)` so line breaks are accepted too, in
    /// agreement with [`char_matches_class`].
    #[inline]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Digit => "[0-9]",
            Self::LowercaseLetter => "[a-z]",
            Self::UppercaseLetter => "[A-Z]",
            Self::AnyCharacter => "(?s:.)",
        }
    }
}

/// Returns `true` if `ch` satisfies `class`.
///
/// ```
/// use mask_core::{CharClass, char_matches_class};
///
/// assert!(char_matches_class('7', CharClass::Digit));
/// assert!(!char_matches_class('x', CharClass::UppercaseLetter));
/// assert!(char_matches_class('€', CharClass::AnyCharacter));
/// ```
#[inline]
pub fn char_matches_class(ch: char, class: CharClass) -> bool {
    match class {
        CharClass::Digit => ch.is_ascii_digit(),
        CharClass::LowercaseLetter => ch.is_ascii_lowercase(),
        CharClass::UppercaseLetter => ch.is_ascii_uppercase(),
        CharClass::AnyCharacter => true,
    }
}
