/// strand/mod.rs — Orchestration for the sequence processor
///
/// One straight-line pipeline:
///
///   load → complement → weigh strand → weigh complement → report
///
/// Every mass is computed before the output file is opened, so a bad
/// base never leaves a truncated or half-written report behind.
mod complement;
mod loader;
mod mass;
mod nucleotide;
mod report;

use std::path::Path;

use crate::error::Result;
use complement::complement;
use loader::load_sequence;
use mass::calculate_weight;
use report::{write_report, MassReport};

/// Weigh the sequence in `input`, print the report and write it to `output`.
pub fn process(input: &Path, output: &Path) -> Result<MassReport> {
    let sequence = load_sequence(input)?;
    log::info!("Loaded {} bases from {}", sequence.len(), input.display());

    let report = compute(&sequence)?;

    print!("{report}");

    write_report(output, &report)?;
    log::info!("Written report to {}", output.display());

    Ok(report)
}

/// Complement `sequence` and weigh both strands.
pub fn compute(sequence: &str) -> Result<MassReport> {
    let complementary = complement(sequence)?;
    log::debug!("Complementary strand: {complementary}");

    let m_seq = calculate_weight(sequence)?;
    let m_cseq = calculate_weight(&complementary)?;

    Ok(MassReport::new(m_seq, m_cseq))
}
