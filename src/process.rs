use crate::cli::Mode;
use crate::config::Config;
use crate::detect::{detect_input_kind, Compression};
use crate::error::Result;
use crate::gxf::{Dialect, GxfRecord};
use crate::reader::Reader;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

/// Summary statistics for a filtering run.
#[derive(Debug, Clone, Copy)]
pub struct RunStats {
    /// Wall clock time spent in the run.
    pub elapsed: Duration,
    /// Data records parsed.
    pub records: u64,
    /// Records that survived every filter.
    pub matched: u64,
    /// Malformed lines skipped in lenient mode.
    pub skipped: u64,
    /// Delta in maximum RSS memory usage, in MB.
    pub mem_delta_mb: f64,
}

/// Runs a filtering pass with the provided configuration.
///
/// Detects the input kind from the file name, streams records through the
/// configured filter chain and writes the survivors to the output in
/// source column order. In strict mode the first malformed line aborts the
/// run; in lenient mode it is logged with its line number and raw text,
/// counted, and skipped.
pub fn run(config: &Config) -> Result<RunStats> {
    let start = Instant::now();
    let start_mem = max_mem_usage_mb();

    let kind = detect_input_kind(&config.input)?;
    let mut reader = Reader::new(open_input(&config.input, kind.compression)?, kind.dialect);

    let mut out: BufWriter<Box<dyn Write>> = match &config.output {
        Some(path) => BufWriter::with_capacity(256 * 1024, Box::new(File::create(path)?)),
        None => BufWriter::new(Box::new(io::stdout())),
    };

    let mut records = 0;
    let mut matched = 0;
    let mut skipped = 0;

    while let Some(result) = reader.read() {
        let record = match result {
            Ok(record) => record,
            Err(err) => match config.mode {
                Mode::Strict => return Err(err),
                Mode::Lenient => {
                    log::warn!("skipping {err}");
                    skipped += 1;
                    continue;
                }
            },
        };

        records += 1;
        let record = apply_filters(record, config)?;
        if record.is_complete() {
            matched += 1;
            write_record(&record, &mut out, kind.dialect)?;
        }
    }
    out.flush()?;

    Ok(RunStats {
        elapsed: start.elapsed(),
        records,
        matched,
        skipped,
        mem_delta_mb: (max_mem_usage_mb() - start_mem).max(0.0),
    })
}

/// Opens the input with buffered plain or gzip-decoded reading.
fn open_input(path: &Path, compression: Compression) -> Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    if compression.is_compressed() {
        Ok(Box::new(BufReader::with_capacity(
            128 * 1024,
            MultiGzDecoder::new(file),
        )))
    } else {
        Ok(Box::new(BufReader::with_capacity(128 * 1024, file)))
    }
}

/// Applies the configured filter chain to one record.
fn apply_filters(record: GxfRecord, config: &Config) -> Result<GxfRecord> {
    let mut record = record;
    if let Some(feature_type) = &config.feature_type {
        record = record.filter_by_field("type", feature_type)?;
    }
    if let Some(strand) = &config.strand {
        record = record.filter_by_field("strand", strand)?;
    }
    for (key, value) in &config.attributes {
        record = record.filter_by_attribute(key, value);
    }
    Ok(record)
}

/// Writes one record in source column order.
///
/// Absent score and phase render as `.`. Attributes come out of an
/// unordered map, so they are emitted in sorted key order to keep the
/// output deterministic.
fn write_record<W: Write>(record: &GxfRecord, writer: &mut W, dialect: Dialect) -> Result<()> {
    let score = record
        .score
        .map_or_else(|| ".".to_string(), |score| score.to_string());
    let phase = record
        .phase
        .map_or_else(|| ".".to_string(), |phase| phase.to_string());

    let mut pairs: Vec<_> = record.attributes.iter().collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));
    let attributes = match dialect {
        Dialect::Gff => pairs
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join(";"),
        Dialect::Gtf => pairs
            .iter()
            .map(|(key, value)| format!("{key} \"{value}\";"))
            .collect::<Vec<_>>()
            .join(" "),
    };

    writeln!(
        writer,
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
        record.seqid,
        record.source,
        record.feature,
        record.start,
        record.end,
        score,
        record.strand,
        phase,
        attributes,
    )?;
    Ok(())
}

/// Maximum RSS of the current process in MB, via getrusage. ru_maxrss is
/// kilobytes on Linux and bytes on macOS.
fn max_mem_usage_mb() -> f64 {
    let rusage = unsafe {
        let mut rusage = std::mem::MaybeUninit::uninit();
        libc::getrusage(libc::RUSAGE_SELF, rusage.as_mut_ptr());
        rusage.assume_init()
    };
    let maxrss = rusage.ru_maxrss as f64;
    if cfg!(target_os = "macos") {
        maxrss / 1024.0 / 1024.0
    } else {
        maxrss / 1024.0
    }
}
