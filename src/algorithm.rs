//! The hash table implementations being compared.

use std::{fmt, str::FromStr};

/// One of the four benchmarked hash table implementations.
///
/// The declaration order is the order used everywhere else: report table rows, CSV columns,
/// chart ticks, colors and markers are all assigned by [`index`](Algorithm::index).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Algorithm {
    /// Static minimal perfect hash.
    MinimalPerfectHash,
    /// Plain dynamic hash table.
    SimpleHash,
    /// Elastic hashing.
    ElasticHash,
    /// Funnel hashing.
    FunnelHash,
}

impl Algorithm {
    /// The number of algorithms.
    pub const COUNT: usize = 4;

    /// Returns the algorithms in their fixed order.
    ///
    /// # Examples
    ///
    /// ```
    /// use hashviz::Algorithm;
    ///
    /// assert_eq!(Algorithm::variants()[0], Algorithm::MinimalPerfectHash);
    /// assert_eq!(Algorithm::variants().len(), Algorithm::COUNT);
    /// ```
    pub const fn variants() -> &'static [Algorithm; Self::COUNT] {
        &[
            Algorithm::MinimalPerfectHash,
            Algorithm::SimpleHash,
            Algorithm::ElasticHash,
            Algorithm::FunnelHash,
        ]
    }

    /// Returns the position of the algorithm in the fixed order.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the algorithm at the given position, if any.
    pub const fn from_index(index: usize) -> Option<Algorithm> {
        match index {
            0 => Some(Algorithm::MinimalPerfectHash),
            1 => Some(Algorithm::SimpleHash),
            2 => Some(Algorithm::ElasticHash),
            3 => Some(Algorithm::FunnelHash),
            _ => None,
        }
    }

    /// Returns the label used in reports and charts.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::MinimalPerfectHash => "MinimalPerfectHash",
            Algorithm::SimpleHash => "SimpleHash",
            Algorithm::ElasticHash => "ElasticHash",
            Algorithm::FunnelHash => "FunnelHash",
        }
    }

    /// Returns the short alias, as used in CSV column names.
    pub const fn alias(self) -> &'static str {
        match self {
            Algorithm::MinimalPerfectHash => "mph",
            Algorithm::SimpleHash => "sh",
            Algorithm::ElasticHash => "eh",
            Algorithm::FunnelHash => "fh",
        }
    }
}

impl fmt::Display for Algorithm {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Parses a full label or a short alias, ignoring ASCII case.
    ///
    /// # Examples
    ///
    /// ```
    /// use hashviz::Algorithm;
    ///
    /// assert_eq!("ElasticHash".parse(), Ok(Algorithm::ElasticHash));
    /// assert_eq!("FH".parse(), Ok(Algorithm::FunnelHash));
    /// assert!("CuckooHash".parse::<Algorithm>().is_err());
    /// ```
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::variants()
            .iter()
            .copied()
            .find(|algorithm| {
                src.eq_ignore_ascii_case(algorithm.name()) || src.eq_ignore_ascii_case(algorithm.alias())
            })
            .ok_or_else(|| ParseAlgorithmError {
                input: src.to_owned(),
            })
    }
}

/// An error which can be returned when parsing an [`Algorithm`].
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ParseAlgorithmError {
    input: String,
}

impl ParseAlgorithmError {
    /// The string that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown hash algorithm `{}`", self.input)
    }
}

impl ::std::error::Error for ParseAlgorithmError {}
