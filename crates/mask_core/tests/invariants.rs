use mask_core::{
    BLANK, CharClass, FieldEvent, FieldState, Key, KeyInput, MaskEngine, MaskInput, MaskSession,
    MaskSlot, Modifiers, SelectionRange, build_placeholder, compile, is_literal_char,
};

const MASKS: &[&str] = &[
    "",
    "9",
    "--",
    "999",
    "AA-999",
    "99/99/9999",
    "(999) 999-9999",
    "+9 (999) 999.99.99",
    "aa-AA-**",
    "9x9",
    "€*-9",
    "  ((99))  ",
];

/// Small deterministic generator so failures reproduce.
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next() % n as u64) as usize
    }

    fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.below(items.len())]
    }
}

fn sample_char(class: CharClass, i: usize) -> char {
    match class {
        CharClass::Digit => char::from(b'0' + (i % 10) as u8),
        CharClass::LowercaseLetter => char::from(b'a' + (i % 26) as u8),
        CharClass::UppercaseLetter => char::from(b'A' + (i % 26) as u8),
        CharClass::AnyCharacter => ['x', '€', '7', '_'][i % 4],
    }
}

/// A complete value for masks without unclassified chars.
fn filled_value(mask: &str) -> Option<String> {
    let compiled = compile(mask);
    compiled
        .slots()
        .iter()
        .enumerate()
        .map(|(i, slot)| match *slot {
            MaskSlot::Literal(ch) => Some(ch),
            MaskSlot::Placeholder(CharClass::AnyCharacter) => Some('x'),
            MaskSlot::Placeholder(class) => Some(sample_char(class, i)),
            MaskSlot::Unclassified(_) => None,
        })
        .collect()
}

fn assert_buffer_shape(mask: &str, st: &FieldState, context: &str) {
    if st.value.is_empty() {
        return;
    }
    let slots = compile(mask);
    let chars: Vec<char> = st.value.chars().collect();
    assert_eq!(chars.len(), slots.len(), "{context}: length drifted");
    for (pos, slot) in slots.slots().iter().enumerate() {
        match *slot {
            MaskSlot::Literal(ch) => assert_eq!(chars[pos], ch, "{context}: literal at {pos}"),
            MaskSlot::Placeholder(_) => assert!(
                chars[pos] == BLANK || slot.accepts(chars[pos]),
                "{context}: {:?} does not fit slot {pos}",
                chars[pos]
            ),
            MaskSlot::Unclassified(_) => assert_eq!(chars[pos], BLANK, "{context}: slot {pos}"),
        }
    }
    assert!(st.cursor <= chars.len(), "{context}: cursor out of range");
}

#[test]
fn compiled_slots_follow_the_mask_chars() {
    for mask in MASKS {
        let compiled = compile(mask);
        assert_eq!(compiled.len(), mask.chars().count());
        for (slot, ch) in compiled.slots().iter().zip(mask.chars()) {
            assert_eq!(slot.is_literal(), is_literal_char(ch), "mask {mask:?}");
            assert_eq!(slot.class(), CharClass::from_designator(ch), "mask {mask:?}");
        }
    }
}

#[test]
fn placeholder_has_mask_length() {
    for mask in MASKS {
        assert_eq!(
            build_placeholder(mask).chars().count(),
            mask.chars().count(),
            "mask {mask:?}"
        );
    }
}

#[test]
fn focus_is_idempotent_on_non_empty_buffers() {
    for mask in MASKS {
        let engine = MaskEngine::new(mask).unwrap();
        let mut st = FieldState::new();
        engine.focus(&mut st);
        st.cursor = st.len();
        let once = st.clone();
        engine.focus(&mut st);
        assert_eq!(st, once, "mask {mask:?}");
    }
}

#[test]
fn pasting_a_complete_value_round_trips() {
    for mask in MASKS {
        let Some(value) = filled_value(mask) else {
            continue;
        };
        let mut field = MaskSession::new(mask).unwrap();
        field.focus();
        field.paste(&value);
        assert_eq!(field.value(), value, "mask {mask:?}");
        assert_eq!(field.cursor(), value.chars().count(), "mask {mask:?}");
    }
}

#[test]
fn backspace_then_retype_restores_every_position() {
    for mask in MASKS {
        let Some(value) = filled_value(mask) else {
            continue;
        };
        let engine = MaskEngine::new(mask).unwrap();
        for p in 0..=value.chars().count() {
            let mut st = FieldState::with_value(value.clone());
            engine.key(&mut st, &KeyInput::new(Key::Backspace), p);
            if st.value == value {
                continue;
            }
            let original = value.chars().nth(st.cursor).unwrap();
            let at = st.cursor;
            engine.key(&mut st, &KeyInput::from(original), at);
            assert_eq!(st.value, value, "mask {mask:?}, backspace at {p}");
        }
    }
}

#[test]
fn random_event_streams_keep_the_buffer_shape() {
    let keys = [
        Key::ArrowLeft,
        Key::ArrowRight,
        Key::Backspace,
        Key::Delete,
        Key::Tab,
        Key::Named("Enter".to_string()),
    ];
    let chars = ['0', '5', '9', 'a', 'z', 'A', 'Q', '-', '(', ' ', '_', '€', 'x'];
    let pastes = ["", "123", "(555) 123-4567", "xy-12", "ab-CD-€!", "9999999999999"];

    for (seed, mask) in MASKS.iter().enumerate() {
        let mut rng = XorShift(0x9E37_79B9_7F4A_7C15 ^ (seed as u64 + 1));
        let mut field = MaskSession::new(mask).unwrap();
        let len = mask.chars().count();

        for step in 0..400 {
            let event = match rng.below(10) {
                0 => FieldEvent::Focus,
                1 => FieldEvent::Blur,
                2 => FieldEvent::Select(SelectionRange::new(rng.below(len + 2), rng.below(len + 2))),
                3 => FieldEvent::Paste(rng.pick(&pastes).to_string()),
                4 => FieldEvent::Key {
                    input: KeyInput::new(keys[rng.below(keys.len())].clone()),
                    at: Some(rng.below(len + 3)),
                },
                5 => FieldEvent::Key {
                    input: KeyInput::with_modifiers(
                        Key::Char(rng.pick(&chars)),
                        Modifiers {
                            ctrl: true,
                            ..Modifiers::NONE
                        },
                    ),
                    at: None,
                },
                _ => FieldEvent::Key {
                    input: KeyInput::from(rng.pick(&chars)),
                    at: None,
                },
            };
            field.apply(&event);
            assert_buffer_shape(mask, field.state(), &format!("mask {mask:?} step {step} ({event})"));
        }
    }
}

#[test]
fn blur_only_ever_leaves_empty_or_complete_values() {
    for mask in MASKS {
        for script in ["focus\nblur", "focus\ntype 1\nblur", "paste 1234567890\nblur"] {
            let mut field = MaskSession::new(mask).unwrap();
            for event in FieldEvent::parse_script(script).unwrap() {
                field.apply(&event);
            }
            assert!(
                !field.value().contains(BLANK),
                "mask {mask:?} script {script:?} left {:?}",
                field.value()
            );
        }
    }
}
