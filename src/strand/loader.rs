/// strand/loader.rs — Read a sequence file into one flat string
///
/// Lines may end in `\n`, `\r\n` or a bare `\r`. Each line is trimmed of
/// surrounding whitespace and the lines are joined in file order.
/// The alphabet is NOT checked here; unknown symbols surface later when
/// the complement or mass is computed.
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::error::{DnaMassError, Result};

pub fn load_sequence(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DnaMassError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => DnaMassError::Io(e),
    })?;
    let mut raw = String::new();
    file.read_to_string(&mut raw).map_err(DnaMassError::Io)?;

    let mut sequence = String::with_capacity(raw.len());
    for line in raw.split(['\r', '\n']) {
        sequence.push_str(line.trim());
    }

    log::debug!("Read {} bases from {}", sequence.len(), path.display());

    Ok(sequence)
}
