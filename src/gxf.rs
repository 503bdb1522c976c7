mod attr;
pub use attr::*;

use crate::error::{GxfGrepError, MalformedKind, Result};
use hashbrown::HashMap;

/// Orientation of a feature relative to the reference sequence.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Strand {
    Forward,
    Reverse,
    Unknown,
    Uncertain,
}

impl Strand {
    /// Parses the strand column; anything outside `+ - . ?` is rejected.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Strand::Forward),
            "-" => Some(Strand::Reverse),
            "." => Some(Strand::Unknown),
            "?" => Some(Strand::Uncertain),
            _ => None,
        }
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Strand::Forward => write!(f, "+"),
            Strand::Reverse => write!(f, "-"),
            Strand::Unknown => write!(f, "."),
            Strand::Uncertain => write!(f, "?"),
        }
    }
}

/// Semantic check applied to a freshly parsed record, e.g. `start <= end`.
///
/// Parsing itself is purely lexical; checks are the extension point for
/// anything beyond that. A failing check clears the record's `complete`
/// flag without raising an error.
pub type Check = fn(&GxfRecord) -> bool;

/// A single annotation row: the nine GFF3/GTF columns plus the `complete`
/// flag that accumulates filter outcomes.
///
/// `complete` starts `true` on a successful parse and only ever moves to
/// `false`; no filter resurrects a failed record. Filters consume and
/// return the record, so testing one parsed record against independent
/// filter chains requires an explicit `clone()` first.
#[derive(Debug, Clone, PartialEq)]
pub struct GxfRecord {
    pub seqid: String,
    pub source: String,
    /// Feature type, column 3 (e.g. "gene", "exon").
    pub feature: String,
    /// 1-based inclusive coordinates, kept as written.
    pub start: u64,
    pub end: u64,
    /// `None` when the column is `.`; distinct from a literal score of 0.
    pub score: Option<f64>,
    pub strand: Strand,
    /// `None` when the column is `.`; distinct from phase 0.
    pub phase: Option<u8>,
    /// Raw attribute values; multi-valued attributes keep their commas.
    pub attributes: HashMap<String, String>,
    pub(crate) complete: bool,
}

impl GxfRecord {
    /// Parses one data line into a record.
    ///
    /// The line must have exactly 9 tab-separated fields; numeric, strand
    /// and phase failures are reported as typed errors, never coerced to
    /// zero. On success the record is marked complete.
    pub fn parse(line: &str, dialect: Dialect) -> std::result::Result<Self, MalformedKind> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 9 {
            return Err(MalformedKind::FieldCount(fields.len()));
        }

        let start = fields[3]
            .parse::<u64>()
            .map_err(|_| MalformedKind::Start(fields[3].to_string()))?;
        let end = fields[4]
            .parse::<u64>()
            .map_err(|_| MalformedKind::End(fields[4].to_string()))?;

        let score = match fields[5] {
            "." => None,
            raw => Some(
                raw.parse::<f64>()
                    .map_err(|_| MalformedKind::Score(raw.to_string()))?,
            ),
        };

        let strand = Strand::from_symbol(fields[6])
            .ok_or_else(|| MalformedKind::Strand(fields[6].to_string()))?;

        let phase = match fields[7] {
            "." => None,
            raw => Some(
                raw.parse::<u8>()
                    .map_err(|_| MalformedKind::Phase(raw.to_string()))?,
            ),
        };

        let attributes = parse_attributes(fields[8], dialect)?;

        Ok(Self {
            seqid: fields[0].to_string(),
            source: fields[1].to_string(),
            feature: fields[2].to_string(),
            start,
            end,
            score,
            strand,
            phase,
            attributes,
            complete: true,
        })
    }

    /// Whether the record has survived parsing and every filter applied so far.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Filters on a named record field with an exact, case-sensitive value
    /// comparison. Recognized names (case-insensitive): `type`/`typefield`/
    /// `feature` and `strand`/`strandfield`.
    ///
    /// An already-incomplete record passes through untouched, before the
    /// field name is even inspected.
    pub fn filter_by_field(mut self, field: &str, value: &str) -> Result<Self> {
        if !self.complete {
            return Ok(self);
        }
        match field.to_ascii_lowercase().as_str() {
            "type" | "typefield" | "feature" => {
                if self.feature != value {
                    self.complete = false;
                }
                Ok(self)
            }
            "strand" | "strandfield" => {
                if Strand::from_symbol(value) != Some(self.strand) {
                    self.complete = false;
                }
                Ok(self)
            }
            _ => Err(GxfGrepError::UnsupportedFilterField(field.to_string())),
        }
    }

    /// Filters on an attribute. The stored value is split on `,`, so any
    /// one token of a multi-valued attribute like `tag=appris,basic,CCDS`
    /// may match. A missing key or no matching token clears `complete`.
    pub fn filter_by_attribute(mut self, key: &str, value: &str) -> Self {
        if !self.complete {
            return self;
        }
        match self.attributes.get(key) {
            Some(raw) if raw.split(',').any(|token| token == value) => self,
            _ => {
                self.complete = false;
                self
            }
        }
    }
}
