/// strand/nucleotide.rs — The four DNA bases and their fixed properties
///
/// Every lookup the processor performs (pairing partner, monomer mass)
/// goes through `Nucleotide::from_byte`, so an unknown symbol fails in
/// exactly one place with its position in the sequence.
use crate::error::{DnaMassError, Result};

/// Molar mass of deoxyadenosine monophosphate (Da).
pub const M_DAMP: f64 = 331.2;
/// Molar mass of deoxythymidine monophosphate (Da).
pub const M_DTMP: f64 = 322.2;
/// Molar mass of deoxyguanosine monophosphate (Da).
pub const M_DGMP: f64 = 347.2;
/// Molar mass of deoxycytidine monophosphate (Da).
pub const M_DCMP: f64 = 307.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nucleotide {
    A,
    T,
    G,
    C,
}

impl Nucleotide {
    /// Parse an uppercase A/T/G/C byte. `position` is only used for the error.
    pub fn from_byte(b: u8, position: usize) -> Result<Self> {
        match b {
            b'A' => Ok(Nucleotide::A),
            b'T' => Ok(Nucleotide::T),
            b'G' => Ok(Nucleotide::G),
            b'C' => Ok(Nucleotide::C),
            other => Err(DnaMassError::InvalidSymbol {
                symbol: other as char,
                position,
            }),
        }
    }

    /// Watson-Crick partner.
    pub fn complement(self) -> Self {
        match self {
            Nucleotide::A => Nucleotide::T,
            Nucleotide::T => Nucleotide::A,
            Nucleotide::G => Nucleotide::C,
            Nucleotide::C => Nucleotide::G,
        }
    }

    pub fn monomer_mass(self) -> f64 {
        match self {
            Nucleotide::A => M_DAMP,
            Nucleotide::T => M_DTMP,
            Nucleotide::G => M_DGMP,
            Nucleotide::C => M_DCMP,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::T => 'T',
            Nucleotide::G => 'G',
            Nucleotide::C => 'C',
        }
    }
}

/// Walk `seq` and parse every base, stopping at the first bad symbol.
///
/// Non-ASCII input is reported by its `char`, with the position counted
/// in chars rather than bytes.
pub fn parse_bases(seq: &str) -> impl Iterator<Item = Result<Nucleotide>> + '_ {
    seq.chars().enumerate().map(|(position, ch)| {
        if ch.is_ascii() {
            Nucleotide::from_byte(ch as u8, position)
        } else {
            Err(DnaMassError::InvalidSymbol {
                symbol: ch,
                position,
            })
        }
    })
}
