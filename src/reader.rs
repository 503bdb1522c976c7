use crate::error::{GxfGrepError, Result};
use crate::gxf::{Check, Dialect, GxfRecord};
use std::io::BufRead;

/// Streaming reader over GFF3/GTF data lines.
///
/// Pulls one line at a time from the underlying source, skipping blank and
/// `#` lines, and yields one [`GxfRecord`] per well-formed data line. A
/// malformed line comes back as a typed error carrying its line number and
/// raw text; the reader stays usable afterward, so the caller decides
/// whether to abort or keep going.
pub struct Reader<R> {
    src: R,
    dialect: Dialect,
    line: usize,
    buf: String,
    checks: Vec<Check>,
}

impl<R: BufRead> Reader<R> {
    /// Returns a new reader over `src`, parsing attributes per `dialect`.
    pub fn new(src: R, dialect: Dialect) -> Self {
        Self {
            src,
            dialect,
            line: 0,
            buf: String::new(),
            checks: Vec::new(),
        }
    }

    /// Adds a semantic check applied to every parsed record. A record
    /// failing any check is yielded with `complete` cleared. No checks are
    /// installed by default.
    pub fn with_check(mut self, check: Check) -> Self {
        self.checks.push(check);
        self
    }

    /// 1-based number of the last line read.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Reads the next data record.
    ///
    /// Returns `None` on clean end of input. Comment and blank lines
    /// consume a line number but never produce a result on their own; the
    /// loop transparently retries. Trailing `\r`/`\n` are trimmed, so CRLF
    /// input parses identically.
    pub fn read(&mut self) -> Option<Result<GxfRecord>> {
        loop {
            self.line += 1;
            self.buf.clear();
            match self.src.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(err) => return Some(Err(err.into())),
            }

            let line = self.buf.trim_end_matches(['\n', '\r']);
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            return Some(match GxfRecord::parse(line, self.dialect) {
                Ok(mut record) => {
                    record.complete = self.checks.iter().all(|check| check(&record));
                    Ok(record)
                }
                Err(kind) => Err(GxfGrepError::MalformedRecord {
                    line: self.line,
                    kind,
                    text: line.to_string(),
                }),
            });
        }
    }
}

impl<R: BufRead> Iterator for Reader<R> {
    type Item = Result<GxfRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read()
    }
}
