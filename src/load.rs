//! Load-test results: lookup time of every algorithm for a range of table sizes.
//!
//! The input is a comma-separated file whose first two lines are a preamble. Every following
//! line is `size,mph_time,sh_time,eh_time,fh_time`, optionally with more columns that are
//! ignored.

use std::{fs, path::Path};

use csv::{ReaderBuilder, StringRecord, Terminator, Trim};
use log::debug;

use crate::{Algorithm, Error, Result};

/// The number of leading lines dropped before any row is read.
pub const HEADER_LINES: usize = 2;

/// The number of leading fields read from every row.
pub const FIELDS: usize = 1 + Algorithm::COUNT;

/// Lookup times of every algorithm, indexed by load size.
///
/// All sequences always have the same length: position `i` of [`sizes`](LoadSeries::sizes) and
/// of every [`times`](LoadSeries::times) describe the same measurement.
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadSeries {
    sizes: Vec<u64>,
    mph_times: Vec<u64>,
    sh_times: Vec<u64>,
    eh_times: Vec<u64>,
    fh_times: Vec<u64>,
}

impl LoadSeries {
    /// Creates an empty series.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one measurement; `times` are in the fixed [`Algorithm`] order.
    ///
    /// # Examples
    ///
    /// ```
    /// use hashviz::{Algorithm, LoadSeries};
    ///
    /// let mut series = LoadSeries::new();
    /// series.push(1000, [5, 10, 3, 7]);
    /// assert_eq!(series.sizes(), [1000]);
    /// assert_eq!(series.times(Algorithm::ElasticHash), [3]);
    /// ```
    pub fn push(&mut self, size: u64, times: [u64; Algorithm::COUNT]) {
        let [mph, sh, eh, fh] = times;
        self.sizes.push(size);
        self.mph_times.push(mph);
        self.sh_times.push(sh);
        self.eh_times.push(eh);
        self.fh_times.push(fh);
    }

    /// The load sizes, in input order.
    #[inline]
    pub fn sizes(&self) -> &[u64] {
        &self.sizes
    }

    /// The lookup times of `algorithm`, aligned with [`sizes`](LoadSeries::sizes).
    pub fn times(&self, algorithm: Algorithm) -> &[u64] {
        match algorithm {
            Algorithm::MinimalPerfectHash => &self.mph_times,
            Algorithm::SimpleHash => &self.sh_times,
            Algorithm::ElasticHash => &self.eh_times,
            Algorithm::FunnelHash => &self.fh_times,
        }
    }

    /// Iterates over `(size, lookup time)` points of `algorithm`.
    pub fn points(&self, algorithm: Algorithm) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.sizes
            .iter()
            .copied()
            .zip(self.times(algorithm).iter().copied())
    }

    /// The number of measurements.
    #[inline]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Returns `true` if no measurement was recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

/// Why a row was left out of the series.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SkipReason {
    /// The row has fewer than [`FIELDS`] fields.
    TooFewFields,
    /// One of the first [`FIELDS`] fields is not a non-negative integer.
    NotAnInteger,
}

/// A non-blank row that was left out of the series.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SkippedRow {
    /// The 1-based line number in the whole file.
    pub line: usize,
    /// The trimmed text of the line.
    pub text: String,
    /// Why the row was skipped.
    pub reason: SkipReason,
}

/// The outcome of reading a load-test file.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct LoadParse {
    /// The measurements that parsed.
    pub series: LoadSeries,
    /// Non-blank rows that were dropped, in input order.
    pub skipped: Vec<SkippedRow>,
}

/// Parses load-test results from `text`.
///
/// The first [`HEADER_LINES`] lines are dropped whatever they contain. Blank lines are ignored.
/// Every other row must start with [`FIELDS`] non-negative integers; rows that don't are left out
/// of all sequences and reported in [`LoadParse::skipped`].
///
/// # Examples
///
/// ```
/// use hashviz::load::parse_load_csv;
///
/// let parsed = parse_load_csv("header\nheader\n100,1,2,3,4\nbad,1,2,3,4\n")?;
/// assert_eq!(parsed.series.sizes(), [100]);
/// assert_eq!(parsed.skipped[0].line, 4);
/// # Ok::<(), hashviz::Error>(())
/// ```
pub fn parse_load_csv(text: &str) -> Result<LoadParse> {
    let body_start: usize = text
        .split_inclusive('\n')
        .take(HEADER_LINES)
        .map(str::len)
        .sum();
    let body = &text[body_start..];

    // One record per line: no quoting, and `\r` stays inside the last field where trimming
    // removes it. Empty lines produce no record, so they are dropped from `lines` too.
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .terminator(Terminator::Any(b'\n'))
        .trim(Trim::All)
        .from_reader(body.as_bytes());
    let lines = body
        .split_terminator('\n')
        .enumerate()
        .filter(|(_, line)| !line.is_empty());

    let mut parsed = LoadParse::default();
    for ((index, line), record) in lines.zip(reader.records()) {
        let record = record?;
        if line.trim().is_empty() {
            continue;
        }
        let reason = if record.len() < FIELDS {
            SkipReason::TooFewFields
        } else if let Some((size, times)) = parse_row(&record) {
            parsed.series.push(size, times);
            continue;
        } else {
            SkipReason::NotAnInteger
        };
        let skipped = SkippedRow {
            line: HEADER_LINES + index + 1,
            text: line.trim().to_owned(),
            reason,
        };
        debug!("skipping line {} ({:?}): {}", skipped.line, reason, skipped.text);
        parsed.skipped.push(skipped);
    }

    debug!(
        "parsed {} load measurements, skipped {} rows",
        parsed.series.len(),
        parsed.skipped.len()
    );
    Ok(parsed)
}

/// Reads the load-test file at `path`.
pub fn read_load_csv<P>(path: P) -> Result<LoadParse>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
    parse_load_csv(&text)
}

fn parse_row(record: &StringRecord) -> Option<(u64, [u64; Algorithm::COUNT])> {
    let mut values = [0u64; FIELDS];
    for (value, field) in values.iter_mut().zip(record.iter()) {
        *value = field.parse().ok()?;
    }
    let [size, mph, sh, eh, fh] = values;
    Some((size, [mph, sh, eh, fh]))
}
