use crate::cli::{Args, Mode};
use std::path::PathBuf;

/// Normalized configuration for a filtering run.
#[derive(Clone, Debug)]
pub struct Config {
    /// Input GTF/GFF path.
    pub input: PathBuf,
    /// Output path; stdout when absent.
    pub output: Option<PathBuf>,
    /// Feature type filter (column 3).
    pub feature_type: Option<String>,
    /// Strand filter.
    pub strand: Option<String>,
    /// Attribute filters as (key, expected value) pairs.
    pub attributes: Vec<(String, String)>,
    /// Malformed-line handling.
    pub mode: Mode,
}

impl Config {
    /// Builds a run config from CLI arguments.
    ///
    /// Attribute specs are split on the first `=`; `Args::check()` has
    /// already rejected separator-less specs, so the split only skips
    /// specs for callers that bypassed validation.
    pub fn from_args(args: &Args) -> Self {
        let attributes = args
            .attributes
            .iter()
            .filter_map(|spec| spec.split_once('='))
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        Self {
            input: args.input.clone(),
            output: args.output.clone(),
            feature_type: args.feature_type.clone(),
            strand: args.strand.clone(),
            attributes,
            mode: args.mode,
        }
    }
}
