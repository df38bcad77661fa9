//! Host events as messages.
//!
//! [`FieldEvent`] is the complete set of things a host can tell a masked
//! field. Events also have a one-line text form, used by scenario fixtures
//! and the `maskedit` replay tool:
//!
//! ```text
//! focus
//! select 0 14
//! key ctrl+a
//! key 5 @1
//! type 01201999
//! paste (555) 123-4567
//! blur
//! ```

use crate::key::{Key, KeyInput, Modifiers};
use crate::selection::SelectionRange;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldEvent {
    Focus,
    Blur,
    /// Selection reported by the host, as char offsets.
    Select(SelectionRange),
    /// A keystroke. `at` overrides the cursor; `None` uses the field's own.
    Key { input: KeyInput, at: Option<usize> },
    /// Clipboard plain text.
    Paste(String),
    /// A run of unmodified char keys, each at the field's cursor.
    Type(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventParseError {
    pub line: String,
    pub reason: &'static str,
}

impl fmt::Display for EventParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?}", self.reason, self.line)
    }
}

impl std::error::Error for EventParseError {}

impl FieldEvent {
    /// Parse a script, skipping blank lines and `#` comments.
    pub fn parse_script(script: &str) -> Result<Vec<FieldEvent>, EventParseError> {
        script
            .lines()
            .filter(|line| {
                let t = line.trim();
                !t.is_empty() && !t.starts_with('#')
            })
            .map(str::parse::<FieldEvent>)
            .collect()
    }
}

impl FromStr for FieldEvent {
    type Err = EventParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']);
        let err = |reason: &'static str| EventParseError {
            line: line.to_string(),
            reason,
        };
        let trimmed = line.trim_start();
        let (command, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));

        match command {
            "focus" => Ok(Self::Focus),
            "blur" => Ok(Self::Blur),
            "paste" => Ok(Self::Paste(rest.to_string())),
            "type" => Ok(Self::Type(rest.to_string())),
            "select" => {
                let mut parts = rest.split_whitespace().map(str::parse::<usize>);
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(Ok(start)), Some(Ok(end)), None) => {
                        Ok(Self::Select(SelectionRange::new(start, end)))
                    }
                    _ => Err(err("select expects two offsets")),
                }
            }
            "key" => {
                let mut parts = rest.split_whitespace();
                let spec = parts.next().ok_or_else(|| err("key expects a key name"))?;
                let at = match parts.next() {
                    None => None,
                    Some(tok) => {
                        let pos = tok
                            .strip_prefix('@')
                            .and_then(|p| p.parse::<usize>().ok())
                            .ok_or_else(|| err("key position must look like @N"))?;
                        Some(pos)
                    }
                };
                if parts.next().is_some() {
                    return Err(err("unexpected trailing input after key"));
                }
                let input = parse_key_spec(spec).ok_or_else(|| err("unknown modifier"))?;
                Ok(Self::Key { input, at })
            }
            _ => Err(err("unknown event")),
        }
    }
}

fn parse_key_spec(spec: &str) -> Option<KeyInput> {
    let mut modifiers = Modifiers::NONE;
    let mut name = spec;
    while let Some((prefix, remainder)) = name.split_once('+') {
        if remainder.is_empty() {
            break;
        }
        match prefix.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers.ctrl = true,
            "meta" | "cmd" | "super" => modifiers.meta = true,
            "alt" | "option" => modifiers.alt = true,
            "shift" => modifiers.shift = true,
            _ => return None,
        }
        name = remainder;
    }
    Some(KeyInput::with_modifiers(key_from_name(name), modifiers))
}

fn key_from_name(name: &str) -> Key {
    let mut chars = name.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return Key::Char(ch);
    }
    match name.to_ascii_lowercase().as_str() {
        "space" => Key::Char(' '),
        "left" | "arrowleft" => Key::ArrowLeft,
        "right" | "arrowright" => Key::ArrowRight,
        "backspace" => Key::Backspace,
        "delete" | "del" => Key::Delete,
        "tab" => Key::Tab,
        _ => Key::Named(name.to_string()),
    }
}

impl fmt::Display for FieldEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Focus => f.write_str("focus"),
            Self::Blur => f.write_str("blur"),
            Self::Select(range) => write!(f, "select {} {}", range.start, range.end),
            Self::Paste(text) => write!(f, "paste {text}"),
            Self::Type(text) => write!(f, "type {text}"),
            Self::Key { input, at } => {
                f.write_str("key ")?;
                let m = input.modifiers;
                for (held, label) in [
                    (m.ctrl, "ctrl+"),
                    (m.meta, "meta+"),
                    (m.alt, "alt+"),
                    (m.shift, "shift+"),
                ] {
                    if held {
                        f.write_str(label)?;
                    }
                }
                match &input.key {
                    Key::Char(' ') => f.write_str("space")?,
                    Key::Char(ch) => write!(f, "{ch}")?,
                    Key::ArrowLeft => f.write_str("left")?,
                    Key::ArrowRight => f.write_str("right")?,
                    Key::Backspace => f.write_str("backspace")?,
                    Key::Delete => f.write_str("delete")?,
                    Key::Tab => f.write_str("tab")?,
                    Key::Named(name) => f.write_str(name)?,
                }
                if let Some(pos) = at {
                    write!(f, " @{pos}")?;
                }
                Ok(())
            }
        }
    }
}
