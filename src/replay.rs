//! Replays an event script against a masked field.

use crate::config::OutputFormat;
use crate::error::CliError;
use mask_core::{FieldEvent, MaskInput};
use serde::Serialize;
use std::io::{BufRead, Write};

/// Field state after one event, as printed in JSON mode.
#[derive(Debug, Serialize)]
pub struct EventReport<'a> {
    pub event: String,
    pub value: &'a str,
    pub cursor: usize,
    pub phase: &'static str,
    pub disposition: &'static str,
}

/// Read script lines from `input`, apply each to `field`, write one report
/// line per event to `out`.
///
/// Blank lines and `#` comments are skipped. Returns the number of events.
pub fn replay<F: MaskInput, R: BufRead, W: Write>(
    field: &mut F,
    input: R,
    out: &mut W,
    format: OutputFormat,
) -> Result<usize, CliError> {
    let mut applied = 0usize;
    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let event: FieldEvent = line.parse().map_err(|source| CliError::Script {
            line: idx + 1,
            source,
        })?;
        let disposition = field.apply(&event);
        applied += 1;

        match format {
            OutputFormat::Text => writeln!(out, "{}|{}", field.value(), field.cursor())?,
            OutputFormat::Json => {
                let report = EventReport {
                    event: event.to_string(),
                    value: field.value(),
                    cursor: field.cursor(),
                    phase: field.phase().as_str(),
                    disposition: disposition.as_str(),
                };
                serde_json::to_writer(&mut *out, &report)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(applied)
}
