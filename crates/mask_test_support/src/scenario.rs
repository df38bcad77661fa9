//! TOML scenario fixtures for masked fields.
//!
//! A fixture file holds any number of `[[scenario]]` tables:
//!
//! ```toml
//! [[scenario]]
//! name = "phone focus"
//! mask = "(999) 999-9999"
//! steps = ["focus", "type 555"]
//! value = "(555) ___-____"
//! cursor = 6
//! phase = "editing"
//! transcript = ["(___) ___-____|1", "(555) ___-____|6"]
//! ```
//!
//! `steps` use the event script form understood by `FieldEvent`. `value`,
//! `cursor`, `phase` and `transcript` are all optional; a scenario checks
//! only what it names. Each transcript line is `value|cursor` after a step.

use mask_core::{FieldEvent, MaskInput, MaskSession};
use serde::Deserialize;
use std::fmt::Write;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioFile {
    #[serde(default, rename = "scenario")]
    pub scenarios: Vec<Scenario>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub name: String,
    pub mask: String,
    pub steps: Vec<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub cursor: Option<usize>,
    #[serde(default)]
    pub phase: Option<String>,
    #[serde(default)]
    pub transcript: Option<Vec<String>>,
}

/// What a scenario produced.
#[derive(Clone, Debug)]
pub struct ScenarioRun {
    pub value: String,
    pub cursor: usize,
    pub phase: &'static str,
    /// `value|cursor` after every step.
    pub transcript: Vec<String>,
}

/// One transcript entry: `value|cursor`.
///
/// Control chars, `\` and `|` inside the value are escaped so the cursor
/// suffix stays unambiguous.
pub fn transcript_line(value: &str, cursor: usize) -> String {
    let mut line = String::with_capacity(value.len() + 4);
    for ch in value.chars() {
        match ch {
            '|' => line.push_str("\\|"),
            '\\' => line.push_str("\\\\"),
            ch if ch.is_control() => line.extend(ch.escape_default()),
            ch => line.push(ch),
        }
    }
    let _ = write!(line, "|{cursor}");
    line
}

/// Step-by-step listing of two transcripts, marking every differing step.
fn transcript_diff(expected: &[String], actual: &[String]) -> String {
    let mut out = String::new();
    let steps = expected.len().max(actual.len());
    for step in 0..steps {
        let want = expected.get(step).map_or("<none>", String::as_str);
        let got = actual.get(step).map_or("<none>", String::as_str);
        if want == got {
            let _ = writeln!(out, "    step {:>3}: {got}", step + 1);
        } else {
            let _ = writeln!(out, "  ! step {:>3}: want {want}, got {got}", step + 1);
        }
    }
    out
}

pub fn load_scenarios(path: &Path) -> Vec<Scenario> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read scenario file {path:?}: {err}"));
    let file: ScenarioFile = toml::from_str(&content)
        .unwrap_or_else(|err| panic!("failed to parse scenario file {path:?}: {err}"));
    assert!(
        !file.scenarios.is_empty(),
        "scenario file {path:?} defines no scenarios"
    );
    file.scenarios
}

pub fn run_scenario(scenario: &Scenario) -> ScenarioRun {
    let mut field = MaskSession::new(&scenario.mask).unwrap_or_else(|err| {
        panic!(
            "scenario '{}': invalid mask {:?}: {err}",
            scenario.name, scenario.mask
        )
    });
    let mut transcript = Vec::with_capacity(scenario.steps.len());
    for step in &scenario.steps {
        let event: FieldEvent = step
            .parse()
            .unwrap_or_else(|err| panic!("scenario '{}': {err}", scenario.name));
        field.apply(&event);
        transcript.push(transcript_line(field.value(), field.cursor()));
    }
    ScenarioRun {
        value: field.value().to_string(),
        cursor: field.cursor(),
        phase: field.phase().as_str(),
        transcript,
    }
}

/// Run a scenario and compare against every expectation it names.
///
/// Returns a readable report on mismatch.
pub fn check_scenario(scenario: &Scenario) -> Result<ScenarioRun, String> {
    let run = run_scenario(scenario);
    let mut problems = Vec::new();

    if let Some(value) = &scenario.value
        && *value != run.value
    {
        problems.push(format!(
            "value: expected {value:?}, actual {:?}",
            run.value
        ));
    }
    if let Some(cursor) = scenario.cursor
        && cursor != run.cursor
    {
        problems.push(format!("cursor: expected {cursor}, actual {}", run.cursor));
    }
    if let Some(phase) = &scenario.phase
        && phase != run.phase
    {
        problems.push(format!("phase: expected {phase}, actual {}", run.phase));
    }
    if let Some(expected) = &scenario.transcript
        && *expected != run.transcript
    {
        problems.push(format!(
            "transcript differs:\n{}",
            transcript_diff(expected, &run.transcript)
        ));
    }

    if problems.is_empty() {
        Ok(run)
    } else {
        Err(format!(
            "scenario '{}' (mask {:?}):\n  {}",
            scenario.name,
            scenario.mask,
            problems.join("\n  ")
        ))
    }
}
