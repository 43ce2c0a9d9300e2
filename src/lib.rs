//! Charts comparing hash table benchmark results.
//!
//! Two independent pipelines read benchmark output and write a PNG chart:
//!
//! - a report log holding a build/lookup time table for every [`Algorithm`] is read by
//!   [`ReportParser`] and drawn as two bar charts by [`chart::render_comparison`];
//! - a load-test CSV holding lookup times per table size is read by [`load::read_load_csv`] and
//!   drawn as one line per algorithm by [`chart::render_load`].
//!
//! # Examples
//!
//! ```no_run
//! use hashviz::{chart, load};
//!
//! let parsed = load::read_load_csv("load_results.csv")?;
//! if !parsed.series.is_empty() {
//!     chart::render_load(&parsed.series)?;
//! }
//! # Ok::<(), hashviz::Error>(())
//! ```

mod algorithm;
pub mod chart;
mod error;
pub mod load;
mod report;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use error::{Error, Result};
pub use load::{LoadParse, LoadSeries, SkipReason, SkippedRow};
pub use report::{parse_report, read_report, ComparisonResult, ReportLayout, ReportParser, Timing};
