//! # gxfgrep
//!
//! Streaming record filter for GTF/GFF annotation files.
//!
//! ## Usage
//!
//! ```bash
//! gxfgrep -i <INPUT> [OPTIONS]
//!
//! Required arguments:
//!   -i, --input <GXF>          Path to GTF/GFF file (optionally .gz)
//!
//! Optional arguments:
//!   -o, --output <OUT>         Path to output file (default: stdout)
//!   -t, --type <TYPE>          Keep records with this feature type
//!   -s, --strand <STRAND>      Keep records on this strand (+, -, . or ?)
//!   -a, --attribute <KEY=VALUE>  Keep records whose attribute KEY has VALUE
//!                              among its comma-separated values; repeatable
//!   -m, --mode <MODE>          strict aborts on the first malformed line,
//!                              lenient logs and skips it [default: strict]
//!   -h, --help                 Print help
//!   -V, --version              Print version
//! ```
//!
//! ## Examples
//!
//! ### Keep protein-coding genes
//!
//! ```bash
//! gxfgrep -i annotations.gff3 -t gene -a gene_type=protein_coding
//! ```
//!
//! ### Forward-strand exons from a gzipped GTF, skipping bad lines
//!
//! ```bash
//! gxfgrep -i annotations.gtf.gz -t exon -s + -m lenient -o exons.gtf
//! ```
use clap::Parser;
use gxfgrep::{run, Args, Config};
use log::Level;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    simple_logger::init_with_level(Level::Info).unwrap();

    let args = Args::parse();
    args.check()?;
    log::info!("{:?}", args);

    let config = Config::from_args(&args);
    let stats = run(&config)?;

    log::info!(
        "{} records read, {} matched, {} skipped",
        stats.records,
        stats.matched,
        stats.skipped
    );
    log::info!("Elapsed: {:.4?} secs", stats.elapsed.as_secs_f32());
    log::info!("Memory: {:.2} MB", stats.mem_delta_mb);

    Ok(())
}
