//! Streaming record filter for GTF/GFF annotation files

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Parser, Debug)]
#[clap(
    name = "gxfgrep",
    version = env!("CARGO_PKG_VERSION"),
    about = "streaming record filter for GTF/GFF annotation files"
)]
pub struct Args {
    /// Filters GTF/GFF3 records the way grep filters lines.
    ///
    /// Start by providing the path to the annotation file with
    /// -i/--input file.gff3 (or file.gtf, optionally gzipped), then add
    /// any combination of type, strand and attribute filters. Records that
    /// survive every filter are written back out.
    #[clap(
        short = 'i',
        long = "input",
        help = "Path to GTF/GFF file",
        value_name = "GXF",
        required = true
    )]
    pub input: PathBuf,

    /// Output filepath; non-required argument, defaults to stdout.
    #[clap(
        short = 'o',
        long = "output",
        help = "Path to output file",
        value_name = "OUT"
    )]
    pub output: Option<PathBuf>,

    /// Feature type to keep; default is no type filtering.
    #[clap(
        short = 't',
        long = "type",
        help = "Keep records with this feature type (column 3)",
        value_name = "TYPE"
    )]
    pub feature_type: Option<String>,

    /// Strand to keep; default is no strand filtering.
    #[clap(
        short = 's',
        long = "strand",
        help = "Keep records on this strand (+, -, . or ?)",
        value_name = "STRAND"
    )]
    pub strand: Option<String>,

    /// Attribute filters; repeatable.
    #[clap(
        short = 'a',
        long = "attribute",
        help = "Keep records whose attribute KEY has VALUE among its values",
        value_name = "KEY=VALUE"
    )]
    pub attributes: Vec<String>,

    /// What to do with a malformed line.
    #[clap(
        short = 'm',
        long = "mode",
        help = "Abort on the first malformed line, or skip and keep reading",
        value_enum,
        default_value = "strict"
    )]
    pub mode: Mode,
}

/// Handling of malformed lines during a run.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Abort the whole run on the first malformed line.
    Strict,
    /// Log the offending line and keep reading.
    Lenient,
}

impl Args {
    /// Checks all the arguments for validity using validate_args()
    pub fn check(&self) -> Result<(), ArgError> {
        self.validate_args()
    }

    /// Checks the input file for validity. The file must exist and be
    /// non-empty; dialect and compression are detected later from the
    /// extension.
    fn check_input(&self) -> Result<(), ArgError> {
        if !self.input.exists() {
            let err = format!("file {:?} does not exist", self.input);
            Err(ArgError::InvalidInput(err))
        } else if std::fs::metadata(&self.input)
            .map(|meta| meta.len() == 0)
            .unwrap_or(true)
        {
            let err = format!("file {:?} is empty", self.input);
            Err(ArgError::InvalidInput(err))
        } else {
            Ok(())
        }
    }

    /// Checks that every attribute filter is of the form KEY=VALUE.
    fn check_attributes(&self) -> Result<(), ArgError> {
        for spec in &self.attributes {
            match spec.split_once('=') {
                Some((key, _)) if !key.is_empty() => {}
                _ => {
                    let err = format!("attribute filter {:?} is not of the form KEY=VALUE", spec);
                    return Err(ArgError::InvalidAttribute(err));
                }
            }
        }
        Ok(())
    }

    /// Validates all the arguments
    fn validate_args(&self) -> Result<(), ArgError> {
        self.check_input()?;
        self.check_attributes()?;
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ArgError {
    /// The input file does not exist or is empty.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An attribute filter is not of the form KEY=VALUE.
    #[error("Invalid attribute filter: {0}")]
    InvalidAttribute(String),
}
