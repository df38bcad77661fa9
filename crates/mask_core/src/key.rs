//! Keystrokes as the engine sees them.

/// Key identity, already decoded by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// A printable char.
    Char(char),
    ArrowLeft,
    ArrowRight,
    Backspace,
    Delete,
    /// Focus traversal; always passed through to the host.
    Tab,
    /// Any other named key (Enter, Home, F5, ...). Intercepted and ignored.
    Named(String),
}

/// Modifier keys held during a keystroke.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    /// Command on macOS, the Windows/Super key elsewhere.
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        meta: false,
        alt: false,
        shift: false,
    };

    /// Ctrl or Meta: the combinations reserved for native shortcuts.
    #[inline]
    pub fn is_shortcut(self) -> bool {
        self.ctrl || self.meta
    }
}

/// A key plus the modifiers held with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyInput {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

impl From<Key> for KeyInput {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

impl From<char> for KeyInput {
    fn from(ch: char) -> Self {
        Self::new(Key::Char(ch))
    }
}

/// What the host should do with its own default handling of an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyDisposition {
    /// The engine owns this event; the host must prevent default insertion.
    Suppress,
    /// Let the platform handle it (shortcuts, focus traversal).
    PassThrough,
}

impl KeyDisposition {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Suppress => "suppress",
            Self::PassThrough => "pass-through",
        }
    }
}
