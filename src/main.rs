mod config;
mod error;
mod replay;

use clap::Parser;
use config::Args;
use error::CliError;
use mask_core::{MaskEngine, MaskSession};
use mimalloc::MiMalloc;
use std::io;
use std::process::ExitCode;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("maskedit: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    let settings = Args::parse().resolve()?;

    let engine = if settings.strict {
        MaskEngine::new_strict(&settings.mask)?
    } else {
        MaskEngine::new(&settings.mask)?
    };
    let mut field = MaskSession::with_engine(engine);
    if let Some(note) = unclassified_note(&field) {
        eprintln!("maskedit: {note}");
    }

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    replay::replay(&mut field, stdin, &mut stdout, settings.output)?;
    Ok(())
}

/// Warning for lenient masks whose unclassified slots can never be filled.
fn unclassified_note(field: &MaskSession) -> Option<String> {
    let mask = field.engine().mask();
    mask.has_unclassified().then(|| {
        format!(
            "mask {:?} has chars outside every class; those slots accept nothing",
            mask.source()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_masks_with_unknown_chars_get_a_note() {
        let field = MaskSession::new("99?").unwrap();
        let note = unclassified_note(&field).unwrap();
        assert!(note.contains("\"99?\""));
        assert!(unclassified_note(&MaskSession::new("(999)").unwrap()).is_none());
    }
}
