//! Normalize command implementation.

use anyhow::Result;

use crate::ConfigArgs;

/// Run the normalize command.
pub fn run(input: &str, config: &ConfigArgs, show_unknown: bool) -> Result<()> {
    let text = super::read_input(input)?;
    let pipeline = super::build_pipeline(config)?;

    let (spoken, _, diag) = pipeline.process_with_report(&text);
    println!("{spoken}");

    if show_unknown {
        for line in diag.unknown_word_report() {
            eprintln!("{line}");
        }
    }

    Ok(())
}
