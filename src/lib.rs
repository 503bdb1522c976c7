//! # gxfgrep
//!
//! Streaming record filter for GTF/GFF annotation files.
//!
//! This library parses GFF3/GTF genomic annotation lines into structured
//! records and filters them with chainable equality predicates over record
//! fields and attributes. The reader pulls one line at a time, skips
//! comment and blank lines, and reports malformed lines as typed errors
//! carrying the line number and raw text, so one bad line never destroys
//! the rest of the stream.
//!
//! ## Usage
//!
//! ```rust, ignore
//! use gxfgrep::{Dialect, Reader};
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! let file = BufReader::new(File::open("annotations.gff3")?);
//! let mut reader = Reader::new(file, Dialect::Gff);
//!
//! while let Some(result) = reader.read() {
//!     let record = result?
//!         .filter_by_field("type", "gene")?
//!         .filter_by_attribute("gene_type", "protein_coding");
//!     if record.is_complete() {
//!         println!("{}:{}-{}", record.seqid, record.start, record.end);
//!     }
//! }
//! ```
//!
//! ### Branching filter chains
//!
//! Filters consume and return the record, accumulating pass/fail history
//! in its `complete` flag. To test one parsed record against independent
//! chains, clone it first:
//!
//! ```rust, ignore
//! let genes = record.clone().filter_by_field("type", "gene")?;
//! let exons = record.filter_by_field("type", "exon")?;
//! ```
//!
//! ### Running the CLI driver
//!
//! ```rust, ignore
//! use gxfgrep::{run, Config, Mode};
//! use std::path::PathBuf;
//!
//! let config = Config {
//!     input: PathBuf::from("annotations.gtf.gz"),
//!     output: None,
//!     feature_type: Some("exon".to_string()),
//!     strand: Some("+".to_string()),
//!     attributes: vec![("gene_biotype".to_string(), "protein_coding".to_string())],
//!     mode: Mode::Lenient,
//! };
//!
//! let stats = run(&config)?;
//! println!("{} of {} records matched", stats.matched, stats.records);
//! ```

pub mod cli;
pub mod config;
pub mod detect;
pub mod error;
pub mod gxf;
pub mod process;
pub mod reader;

pub use cli::{Args, Mode};
pub use config::Config;
pub use detect::{detect_input_kind, Compression, InputKind};
pub use error::{GxfGrepError, MalformedKind, Result};
pub use gxf::{Check, Dialect, GxfRecord, Strand};
pub use process::{run, RunStats};
pub use reader::Reader;
