/// strand/complement.rs — Complementary strand
///
/// Pairing is A ↔ T and G ↔ C, applied base by base in the same order.
/// The result is NOT reversed: position i of the output pairs with
/// position i of the input.
use super::nucleotide::parse_bases;
use crate::error::Result;

/// Build the complementary strand of `seq`.
///
/// Fails with `InvalidSymbol` on the first base outside A/T/G/C; nothing
/// is returned for the bases already processed.
pub fn complement(seq: &str) -> Result<String> {
    let mut out = String::with_capacity(seq.len());
    for base in parse_bases(seq) {
        out.push(base?.complement().as_char());
    }
    Ok(out)
}
