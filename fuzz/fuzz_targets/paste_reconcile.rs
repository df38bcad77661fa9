#![no_main]

use libfuzzer_sys::fuzz_target;
use mask_core::{BLANK, MaskEngine, MaskSlot, compile, reconcile_paste};

// Input layout: mask, a NUL separator, then the pasted text.
fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let (mask, pasted) = input.split_once('\0').unwrap_or((input, ""));
    let compiled = compile(mask);

    let res = reconcile_paste(&compiled, pasted);
    let chars: Vec<char> = res.value.chars().collect();
    assert_eq!(chars.len(), compiled.len());
    assert!(res.cursor <= compiled.len());
    assert!(res.consumed <= pasted.chars().count());
    for (pos, slot) in compiled.slots().iter().enumerate() {
        match *slot {
            MaskSlot::Literal(ch) => assert_eq!(chars[pos], ch),
            MaskSlot::Unclassified(_) => assert_eq!(chars[pos], BLANK),
            MaskSlot::Placeholder(_) => {
                assert!(chars[pos] == BLANK || slot.accepts(chars[pos]));
            }
        }
    }
    if res.cursor < compiled.len() {
        assert_eq!(chars[res.cursor], BLANK);
    }

    // The engine's paste path must keep the same buffer length.
    if let Ok(engine) = MaskEngine::new(mask) {
        let mut st = mask_core::FieldState::new();
        engine.paste(&mut st, pasted);
        assert_eq!(st.value.chars().count(), compiled.len());
    }
});
