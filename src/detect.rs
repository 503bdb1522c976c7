use crate::error::{GxfGrepError, Result};
use crate::gxf::Dialect;
use std::path::Path;

/// Compression of the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
}

impl Compression {
    /// Returns true when the input is compressed.
    pub fn is_compressed(self) -> bool {
        !matches!(self, Compression::None)
    }
}

/// Describes the detected input kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputKind {
    /// Attribute dialect (GTF or GFF3).
    pub dialect: Dialect,
    /// Compression format.
    pub compression: Compression,
}

/// Detects attribute dialect and compression from the file name.
///
/// Recognizes `.gtf`, `.gff` and `.gff3`, each optionally with a trailing
/// `.gz`/`.gzip` (e.g. `annotations.gff3.gz`). Matching is
/// case-insensitive. Anything else is an unsupported extension.
pub fn detect_input_kind(path: &Path) -> Result<InputKind> {
    let unsupported = || GxfGrepError::UnsupportedExtension(path.display().to_string());

    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(unsupported)?
        .to_ascii_lowercase();

    let (stem, compression) = match name.strip_suffix(".gz").or(name.strip_suffix(".gzip")) {
        Some(stem) => (stem, Compression::Gzip),
        None => (name.as_str(), Compression::None),
    };

    let dialect = if stem.ends_with(".gtf") {
        Dialect::Gtf
    } else if stem.ends_with(".gff") || stem.ends_with(".gff3") {
        Dialect::Gff
    } else {
        return Err(unsupported());
    };

    Ok(InputKind {
        dialect,
        compression,
    })
}
