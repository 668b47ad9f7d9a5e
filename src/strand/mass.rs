/// strand/mass.rs — Single-strand molecular mass
///
/// A strand of n bases is the sum of its monomer masses minus one
/// condensation loss per phosphodiester bond, i.e. (n - 1) × M_H.
use super::nucleotide::parse_bases;
use crate::error::{DnaMassError, Result};

/// Mass removed per phosphodiester bond formed (Da).
pub const M_H: f64 = 1.0;

/// Molecular mass of `seq` in Daltons.
///
/// Monomer masses are summed left to right from 0.0 before the bond
/// losses are subtracted, so the float result is reproducible across runs.
pub fn calculate_weight(seq: &str) -> Result<f64> {
    let mut total = 0.0_f64;
    let mut n = 0usize;
    for base in parse_bases(seq) {
        total += base?.monomer_mass();
        n += 1;
    }

    if n == 0 {
        return Err(DnaMassError::EmptySequence);
    }

    Ok(total - (n - 1) as f64 * M_H)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strand::nucleotide::{M_DAMP, M_DCMP, M_DGMP, M_DTMP};

    #[test]
    fn test_dinucleotide() {
        // 331.2 + 322.2 - 1 bond
        assert_eq!(calculate_weight("AT").unwrap(), 652.4);
        assert_eq!(calculate_weight("TA").unwrap(), 652.4);
    }

    #[test]
    fn test_single_base_has_no_bond_loss() {
        assert_eq!(calculate_weight("G").unwrap(), 347.2);
        assert_eq!(calculate_weight("C").unwrap(), 307.2);
    }

    #[test]
    fn test_matches_additive_formula() {
        let seq = "ATGCGATC";
        let expected = M_DAMP + M_DTMP + M_DGMP + M_DCMP + M_DGMP + M_DAMP + M_DTMP + M_DCMP
            - 7.0 * M_H;
        let got = calculate_weight(seq).unwrap();
        assert!((got - expected).abs() < 1e-9, "{got} != {expected}");
        assert_eq!(got, 2608.6);
    }

    #[test]
    fn test_empty_sequence_is_error() {
        assert!(matches!(
            calculate_weight(""),
            Err(DnaMassError::EmptySequence)
        ));
    }

    #[test]
    fn test_invalid_symbol_rejected() {
        match calculate_weight("ATX").unwrap_err() {
            DnaMassError::InvalidSymbol { symbol, position } => {
                assert_eq!(symbol, 'X');
                assert_eq!(position, 2);
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
