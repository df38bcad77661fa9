#![no_main]

use libfuzzer_sys::fuzz_target;
use mask_core::{FieldEvent, MaskInput, MaskSession};

// Input layout: mask on the first line, one event script line per line after.
fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let mut lines = input.lines();
    let Some(mask) = lines.next() else {
        return;
    };
    let Ok(mut field) = MaskSession::new(mask) else {
        return;
    };
    let compiled = field.engine().mask().clone();

    for line in lines.take(256) {
        let Ok(event) = line.parse::<FieldEvent>() else {
            continue;
        };
        field.apply(&event);

        let value = field.value();
        let len = value.chars().count();
        assert!(len == 0 || len == compiled.len());
        assert!(field.cursor() <= len.max(compiled.len()));
        if len > 0 {
            for (ch, slot) in value.chars().zip(compiled.slots()) {
                if let mask_core::MaskSlot::Literal(lit) = *slot {
                    assert_eq!(ch, lit);
                }
            }
        }
    }
});
