// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types shared by histograms, encodings and measures.

use thiserror::Error;

/// Error variants for histogram, encoding and measure operations.
///
/// Precondition failures (shapes, empty input, history length, binning
/// arguments) are raised before any observation is accumulated. The
/// `Encoding`, `Memory` and `CountOverflow` variants surface while a measure
/// accumulates its histograms.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A histogram was requested with an empty support.
    #[error("invalid support: {0}")]
    InvalidSupport(&'static str),

    /// An event index lies outside the histogram support.
    #[error("event {event} is out of range for a support of size {size}")]
    OutOfRange { event: usize, size: usize },

    /// A probability was requested from a histogram without observations.
    #[error("invalid distribution: no observations have been made")]
    InvalidDistribution,

    /// An empty state cannot be encoded.
    #[error("cannot encode an empty state")]
    EmptyState,

    /// A symbol is negative or not smaller than the base.
    #[error("symbol {symbol} is not a base-{base} digit")]
    BaseOverflow { symbol: i32, base: u32 },

    /// Bases below 2 cannot encode anything.
    #[error("invalid base {0}, the base must be at least 2")]
    InvalidBase(u32),

    /// The requested fixed width cannot hold the value.
    #[error("{value} needs more than {width} base-{base} digits")]
    WidthTooSmall { value: usize, base: u32, width: usize },

    /// The encoded state does not fit the integer representation.
    #[error("encoded state does not fit into {} bits", usize::BITS)]
    EncodingOverflow,

    /// The input series holds no observations.
    #[error("empty timeseries")]
    EmptySeries,

    /// The input has more dimensions than the operation accepts.
    #[error("input has {got} dimensions, at most {max} are supported")]
    DimensionError { got: usize, max: usize },

    /// Two inputs that must share a shape do not.
    #[error("shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch { expected: Vec<usize>, got: Vec<usize> },

    /// A zero-length history carries no conditioning information.
    #[error("history length must be positive")]
    ZeroHistory,

    /// The history length leaves no complete window in the series.
    #[error("history length {k} leaves no window in a series of length {len}")]
    HistoryTooLong { k: usize, len: usize },

    /// Not exactly one of bin count, step size and bounds was given.
    #[error("exactly one of bin count, step size or bin bounds must be provided")]
    AmbiguousBinningSpec,

    /// A binning argument is unusable (zero bins, non-positive step, unsorted bounds).
    #[error("invalid binning: {0}")]
    InvalidBinning(&'static str),

    /// A symbol could not be encoded while accumulating a measure.
    #[error("{func}: {source}")]
    Encoding {
        func: &'static str,
        #[source]
        source: Box<Error>,
    },

    /// An event count would exceed `u32::MAX`.
    #[error("count of event {event} overflows")]
    CountOverflow { event: usize },

    /// The joint support of a measure cannot be addressed or allocated.
    #[error("{func}: cannot allocate a histogram over {events} events")]
    Memory { func: &'static str, events: u128 },
}

impl Error {
    /// Stable numeric code of the error, independent of its message.
    pub fn code(&self) -> i32 {
        match self {
            Error::InvalidSupport(_) => 1,
            Error::OutOfRange { .. } => 2,
            Error::InvalidDistribution => 3,
            Error::EmptyState => 4,
            Error::BaseOverflow { .. } => 5,
            Error::InvalidBase(_) => 6,
            Error::WidthTooSmall { .. } => 7,
            Error::EncodingOverflow => 8,
            Error::EmptySeries => 9,
            Error::DimensionError { .. } => 10,
            Error::ShapeMismatch { .. } => 11,
            Error::ZeroHistory => 12,
            Error::HistoryTooLong { .. } => 13,
            Error::AmbiguousBinningSpec => 14,
            Error::InvalidBinning(_) => 15,
            Error::Encoding { .. } => 16,
            Error::Memory { .. } => 17,
            Error::CountOverflow { .. } => 18,
        }
    }

    /// Whether the error was raised before any observation was accumulated.
    pub fn is_precondition(&self) -> bool {
        !matches!(
            self,
            Error::Encoding { .. }
                | Error::Memory { .. }
                | Error::CountOverflow { .. }
                | Error::InvalidDistribution
        )
    }

    pub(crate) fn in_measure(self, func: &'static str) -> Error {
        match self {
            Error::Memory { events, .. } => Error::Memory { func, events },
            e @ (Error::Encoding { .. } | Error::CountOverflow { .. }) => e,
            other => Error::Encoding {
                func,
                source: Box::new(other),
            },
        }
    }
}

/// A specialized Result type for information measure operations.
pub type Result<T> = std::result::Result<T, Error>;
