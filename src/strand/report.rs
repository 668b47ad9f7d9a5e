/// strand/report.rs — Mass report formatting and output
///
/// REPORT FORMAT
/// ───────────────────────────────────────────────────────────────────────
///  M(seq) = 652.4 Da
///  M(cseq) = 652.4 Da
///  M(dsDNA) = 1304.8 Da
///
/// Always three lines, always in this order, each terminated by `\n`.
/// Values are the shortest decimal that round-trips the f64, with a
/// trailing `.0` for whole numbers.
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{DnaMassError, Result};

/// Masses of one strand, its complement and the duplex, in Daltons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassReport {
    pub seq: f64,
    pub cseq: f64,
    pub dsdna: f64,
}

impl MassReport {
    /// The duplex mass is always the sum of the two strands.
    pub fn new(seq: f64, cseq: f64) -> Self {
        Self {
            seq,
            cseq,
            dsdna: seq + cseq,
        }
    }

    /// Report lines in output order, each with its trailing newline.
    pub fn lines(&self) -> [String; 3] {
        [
            format_line("seq", self.seq),
            format_line("cseq", self.cseq),
            format_line("dsDNA", self.dsdna),
        ]
    }
}

impl fmt::Display for MassReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            f.write_str(&line)?;
        }
        Ok(())
    }
}

fn format_line(label: &str, mass: f64) -> String {
    format!("M({}) = {} Da\n", label, format_mass(mass))
}

/// Render a mass as its shortest round-trip decimal, keeping a fractional
/// part so whole values read as `654.0` rather than `654`.
pub fn format_mass(mass: f64) -> String {
    // Display never switches to exponent form, so masses >= 1e16 print in full.
    let s = mass.to_string();
    if mass.is_finite() && !s.contains('.') {
        format!("{s}.0")
    } else {
        s
    }
}

/// Write the report to `path`, replacing any existing file.
pub fn write_report(path: &Path, report: &MassReport) -> Result<()> {
    let file = File::create(path).map_err(DnaMassError::Io)?;
    let mut w = BufWriter::new(file);

    for line in report.lines() {
        w.write_all(line.as_bytes()).map_err(DnaMassError::Io)?;
    }
    w.flush().map_err(DnaMassError::Io)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_duplex_is_sum() {
        let r = MassReport::new(347.2, 307.2);
        assert_eq!(r.dsdna, 654.4);
    }

    #[test]
    fn test_lines_order_and_format() {
        let r = MassReport::new(652.4, 652.4);
        assert_eq!(
            r.lines(),
            [
                "M(seq) = 652.4 Da\n".to_string(),
                "M(cseq) = 652.4 Da\n".to_string(),
                "M(dsDNA) = 1304.8 Da\n".to_string(),
            ]
        );
    }

    #[test]
    fn test_whole_number_keeps_fraction() {
        assert_eq!(format_mass(654.0), "654.0");
        assert_eq!(format_mass(2608.6), "2608.6");
    }

    #[test]
    fn test_display_matches_lines() {
        let r = MassReport::new(347.2, 307.2);
        assert_eq!(
            r.to_string(),
            "M(seq) = 347.2 Da\nM(cseq) = 307.2 Da\nM(dsDNA) = 654.4 Da\n"
        );
    }

    #[test]
    fn test_written_file_reads_back_identically() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("molmass.txt");
        let r = MassReport::new(2648.6, 2568.6);
        write_report(&path, &r).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), r.to_string());
    }

    #[test]
    fn test_existing_file_overwritten() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("molmass.txt");
        fs::write(&path, "stale content that is longer than the report\n".repeat(10)).unwrap();
        let r = MassReport::new(652.4, 652.4);
        write_report(&path, &r).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), r.to_string());
    }
}
