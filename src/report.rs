//! Extraction of the performance comparison table from a free-text benchmark report.
//!
//! The benchmark driver prints a table of the form
//!
//! ```text
//! 性能比较结果
//! 算法                构建时间    查询时间
//! MinimalPerfectHash  120         35
//! SimpleHash          80          42
//! ElasticHash         95          38
//! FunnelHash          101         40
//! ```
//!
//! somewhere in its output. The rows may be separated by arbitrary text, including blank lines and
//! log noise. Values are taken positionally: the first pair of integers after each algorithm name
//! is its build time then its lookup time, in the fixed [`Algorithm`] order. Nothing is inferred
//! from column positions, so a report that swaps the two metric columns is read with the values
//! swapped.
//!
//! The textual layout is pinned by [`ReportLayout`]. A driver that changes its header wording
//! needs a new layout rather than a looser pattern.

use std::{fmt, fs, path::Path, str::FromStr};

use log::{debug, trace};
use regex::Regex;

use crate::{Algorithm, Error, Result};

/// ASCII whitespace, as printed between table cells.
const SPACE: &str = r"[ \t\r\n\x0B\x0C]+";

/// ASCII decimal integer.
const INTEGER: &str = "([0-9]+)";

/// Build and lookup time of one algorithm, in milliseconds.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timing {
    /// Time to build the table.
    pub build_ms: u64,
    /// Time to run the lookup workload.
    pub lookup_ms: u64,
}

/// Build and lookup times of every algorithm, as read from one report.
///
/// There is always exactly one [`Timing`] per [`Algorithm`].
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonResult {
    timings: [Timing; Algorithm::COUNT],
}

impl ComparisonResult {
    /// Creates a result from timings given in the fixed [`Algorithm`] order.
    pub const fn new(timings: [Timing; Algorithm::COUNT]) -> Self {
        Self { timings }
    }

    /// Returns the timing of `algorithm`.
    #[inline]
    pub fn get(&self, algorithm: Algorithm) -> Timing {
        self.timings[algorithm.index()]
    }

    /// Iterates over all algorithms with their timing, in the fixed order.
    pub fn iter(&self) -> impl Iterator<Item = (Algorithm, Timing)> + '_ {
        Algorithm::variants()
            .iter()
            .copied()
            .zip(self.timings.iter().copied())
    }

    /// Build times in the fixed order.
    pub fn build_times(&self) -> [u64; Algorithm::COUNT] {
        self.timings.map(|timing| timing.build_ms)
    }

    /// Lookup times in the fixed order.
    pub fn lookup_times(&self) -> [u64; Algorithm::COUNT] {
        self.timings.map(|timing| timing.lookup_ms)
    }
}

/// The header wording of a report table.
///
/// Each layout is a versioned contract with the program writing the report: the title line, then
/// a header row naming the algorithm column and the two metric columns.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ReportLayout {
    name: &'static str,
    title: &'static str,
    algorithm_header: &'static str,
    build_header: &'static str,
    lookup_header: &'static str,
}

impl ReportLayout {
    /// The layout written by the benchmark driver.
    pub const V1: Self = Self {
        name: "v1",
        title: "性能比较结果",
        algorithm_header: "算法",
        build_header: "构建时间",
        lookup_header: "查询时间",
    };

    /// The same table with English headers.
    pub const V1_EN: Self = Self {
        name: "v1-en",
        title: "Performance Comparison Results",
        algorithm_header: "Algorithm",
        build_header: "Build Time",
        lookup_header: "Lookup Time",
    };

    /// Returns all known layouts.
    pub const fn variants() -> &'static [ReportLayout] {
        &[Self::V1, Self::V1_EN]
    }

    /// Looks up a layout by its version name.
    ///
    /// # Examples
    ///
    /// ```
    /// use hashviz::ReportLayout;
    ///
    /// assert_eq!(ReportLayout::by_name("v1-en").unwrap(), ReportLayout::V1_EN);
    /// assert!(ReportLayout::by_name("v2").is_err());
    /// ```
    pub fn by_name(name: &str) -> Result<Self> {
        Self::variants()
            .iter()
            .copied()
            .find(|layout| layout.name == name)
            .ok_or_else(|| Error::UnknownLayout(name.to_owned()))
    }

    /// The version name of the layout.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The title phrase introducing the table.
    pub fn title(&self) -> &'static str {
        self.title
    }

    fn pattern(&self) -> String {
        let mut pattern = format!(
            "(?s){}.*?{}{SPACE}{}{SPACE}{}",
            regex::escape(self.title),
            regex::escape(self.algorithm_header),
            regex::escape(self.build_header),
            regex::escape(self.lookup_header),
        );
        for algorithm in Algorithm::variants() {
            pattern.push_str(&format!(
                ".*?{}{SPACE}{INTEGER}{SPACE}{INTEGER}",
                regex::escape(algorithm.name())
            ));
        }
        pattern
    }
}

impl Default for ReportLayout {
    #[inline]
    fn default() -> Self {
        Self::V1
    }
}

impl fmt::Display for ReportLayout {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl FromStr for ReportLayout {
    type Err = Error;

    #[inline]
    fn from_str(src: &str) -> Result<Self> {
        Self::by_name(src)
    }
}

/// Finds the comparison table of one [`ReportLayout`] in report text.
#[derive(Clone, Debug)]
pub struct ReportParser {
    layout: ReportLayout,
    regex: Regex,
}

impl ReportParser {
    /// Compiles the table pattern for `layout`.
    pub fn new(layout: ReportLayout) -> Result<Self> {
        let regex = Regex::new(&layout.pattern())?;
        Ok(Self { layout, regex })
    }

    /// The layout this parser matches.
    pub fn layout(&self) -> ReportLayout {
        self.layout
    }

    /// Extracts the table from `text`.
    ///
    /// Returns `None` when the table is missing, or when one of its values does not fit in a
    /// `u64`. Either way no partial result is produced.
    ///
    /// The table pattern accepts digit runs of any length, so a table that is present can still
    /// yield `None`: a single value above `u64::MAX` discards all eight values rather than
    /// failing with an error or clamping.
    ///
    /// # Examples
    ///
    /// ```
    /// use hashviz::{Algorithm, ReportLayout, ReportParser};
    ///
    /// let text = "Performance Comparison Results\n\
    ///             Algorithm Build Time Lookup Time\n\
    ///             MinimalPerfectHash 10 1\n\
    ///             SimpleHash 20 2\n\
    ///             ElasticHash 30 3\n\
    ///             FunnelHash 40 4\n";
    /// let parser = ReportParser::new(ReportLayout::V1_EN)?;
    /// let result = parser.parse(text).unwrap();
    /// assert_eq!(result.get(Algorithm::ElasticHash).build_ms, 30);
    /// assert!(parser.parse("no table here").is_none());
    /// # Ok::<(), hashviz::Error>(())
    /// ```
    pub fn parse(&self, text: &str) -> Option<ComparisonResult> {
        let Some(captures) = self.regex.captures(text) else {
            debug!("no `{}` table found ({} bytes searched)", self.layout, text.len());
            return None;
        };

        let mut timings = [Timing::default(); Algorithm::COUNT];
        for (i, timing) in timings.iter_mut().enumerate() {
            let build = &captures[2 * i + 1];
            let lookup = &captures[2 * i + 2];
            match (build.parse(), lookup.parse()) {
                (Ok(build_ms), Ok(lookup_ms)) => {
                    *timing = Timing {
                        build_ms,
                        lookup_ms,
                    }
                }
                _ => {
                    debug!("value out of range in row {i}: {build} {lookup}");
                    return None;
                }
            }
        }

        trace!("parsed `{}` table: {timings:?}", self.layout);
        Some(ComparisonResult::new(timings))
    }
}

/// Extracts the comparison table from `text` using `layout`.
pub fn parse_report(text: &str, layout: ReportLayout) -> Result<Option<ComparisonResult>> {
    Ok(ReportParser::new(layout)?.parse(text))
}

/// Reads the report at `path` and extracts the comparison table using `layout`.
pub fn read_report<P>(path: P, layout: ReportLayout) -> Result<Option<ComparisonResult>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
    parse_report(&text, layout)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(layout: ReportLayout, values: [u64; 8]) -> String {
        format!(
            "Randomly generated keys (first 10):\nabc def\n\n\
             {}\n\
             ==========================\n\
             {}    {}    {}\n\
             MinimalPerfectHash    {}    {}\n\
             SimpleHash            {}    {}\n\
             ElasticHash           {}    {}\n\
             FunnelHash            {}    {}\n\
             done\n",
            layout.title,
            layout.algorithm_header,
            layout.build_header,
            layout.lookup_header,
            values[0],
            values[1],
            values[2],
            values[3],
            values[4],
            values[5],
            values[6],
            values[7],
        )
    }

    #[test]
    fn recovers_values_in_fixed_order() {
        let values = [120, 35, 80, 42, 95, 38, 101, 40];
        for layout in ReportLayout::variants().iter().copied() {
            let result = parse_report(&report(layout, values), layout).unwrap().unwrap();
            assert_eq!(result.build_times(), [120, 80, 95, 101]);
            assert_eq!(result.lookup_times(), [35, 42, 38, 40]);
            assert_eq!(
                result.get(Algorithm::SimpleHash),
                Timing {
                    build_ms: 80,
                    lookup_ms: 42
                }
            );
        }
    }

    #[test]
    fn tolerates_text_between_rows() {
        let text = "性能比较结果\n\n算法\t构建时间\t查询时间\n\
                    MinimalPerfectHash\n 1\n 2\n\
                    [log] rehashing...\n\
                    SimpleHash 3 4\n\n\n\
                    some noise ElasticHash 5\r\n6 FunnelHash 7 8";
        let result = parse_report(text, ReportLayout::V1).unwrap().unwrap();
        let pairs: Vec<_> = result
            .iter()
            .map(|(_, timing)| (timing.build_ms, timing.lookup_ms))
            .collect();
        assert_eq!(pairs, [(1, 2), (3, 4), (5, 6), (7, 8)]);
    }

    #[test]
    fn skips_names_without_values() {
        // The first mention of each name after the header carries no numbers.
        let text = "性能比较结果\n算法 构建时间 查询时间\n\
                    Testing MinimalPerfectHash (static)\n\
                    MinimalPerfectHash 11 12\nSimpleHash: resized\nSimpleHash 13 14\n\
                    ElasticHash 15 16\nFunnelHash 17 18\n";
        let result = parse_report(text, ReportLayout::V1).unwrap().unwrap();
        assert_eq!(result.build_times(), [11, 13, 15, 17]);
        assert_eq!(result.lookup_times(), [12, 14, 16, 18]);
    }

    #[test]
    fn missing_table() {
        assert_eq!(parse_report("", ReportLayout::V1).unwrap(), None);

        // Header present, last row missing.
        let text = "性能比较结果\n算法 构建时间 查询时间\n\
                    MinimalPerfectHash 1 2\nSimpleHash 3 4\nElasticHash 5 6\n";
        assert_eq!(parse_report(text, ReportLayout::V1).unwrap(), None);

        // Wrong layout.
        let text = report(ReportLayout::V1, [1; 8]);
        assert_eq!(parse_report(&text, ReportLayout::V1_EN).unwrap(), None);
    }

    #[test]
    fn rejects_non_integer_values() {
        let text = "性能比较结果\n算法 构建时间 查询时间\n\
                    MinimalPerfectHash 1.5 2\nSimpleHash 3 4\n\
                    ElasticHash 5 6\nFunnelHash 7 8\n";
        assert_eq!(parse_report(text, ReportLayout::V1).unwrap(), None);
    }

    #[test]
    fn overflow_is_no_data() {
        let text = "性能比较结果\n算法 构建时间 查询时间\n\
                    MinimalPerfectHash 1 2\nSimpleHash 3 4\n\
                    ElasticHash 5 6\nFunnelHash 7 99999999999999999999999\n";
        assert_eq!(parse_report(text, ReportLayout::V1).unwrap(), None);
    }

    #[test]
    fn layout_names() {
        for layout in ReportLayout::variants().iter().copied() {
            assert_eq!(layout.name().parse::<ReportLayout>().unwrap(), layout);
        }
        assert!(matches!(
            "v0".parse::<ReportLayout>(),
            Err(Error::UnknownLayout(name)) if name == "v0"
        ));
        assert_eq!(ReportLayout::default(), ReportLayout::V1);
    }
}
