/// cli.rs — dnamass command-line interface
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "data/standard_fragment_sequence.txt";
pub const DEFAULT_OUTPUT: &str = "data/dsDNA_molmass.txt";

/// dnamass — molecular mass of a DNA strand, its complement and the duplex
///
/// Reads a nucleotide sequence (A/T/G/C, possibly split across lines),
/// builds the complementary strand and reports M(seq), M(cseq) and
/// M(dsDNA) in Daltons.
///
/// Examples:
///   dnamass
///   dnamass --input fragment.txt --output fragment_molmass.txt
#[derive(Parser, Debug)]
#[command(name = "dnamass", author, version, long_about = None)]
pub struct Cli {
    /// Sequence file to read
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Report file to write (overwritten if it exists)
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    #[command(flatten)]
    pub verbose: Verbosity,
}
