use crate::error::Result;
use crate::estimators::data::SymbolData;
use crate::estimators::series::{SeriesConditionalEntropy, SeriesRelativeEntropy};
use crate::estimators::windowed::{BlockEntropy, EntropyRate};
pub use crate::estimators::traits::{GlobalValue, LocalValues};

/// Entropy estimation methods for symbol series
///
/// This struct provides static methods for creating the entropy-type
/// estimators. All of them accept a single series or an ensemble.
pub struct Entropy;

impl Entropy {
    /// Creates a Shannon entropy estimator over the symbols of `data`
    ///
    /// Equivalent to a block entropy with blocks of a single symbol, so the
    /// series needs at least two timesteps.
    ///
    /// # Arguments
    ///
    /// * `data` - Symbol series or ensemble
    /// * `base` - Alphabet size, inferred when `None`
    pub fn new_discrete(data: impl Into<SymbolData>, base: Option<u32>) -> Result<BlockEntropy> {
        BlockEntropy::new(data, 1, base)
    }

    /// Creates a block entropy estimator over blocks of length `k`
    ///
    /// # Arguments
    ///
    /// * `data` - Symbol series or ensemble
    /// * `k` - Block length
    /// * `base` - Alphabet size, inferred when `None`
    pub fn new_block(
        data: impl Into<SymbolData>,
        k: usize,
        base: Option<u32>,
    ) -> Result<BlockEntropy> {
        BlockEntropy::new(data, k, base)
    }

    /// Creates an entropy rate estimator with history length `k`
    pub fn new_rate(
        data: impl Into<SymbolData>,
        k: usize,
        base: Option<u32>,
    ) -> Result<EntropyRate> {
        EntropyRate::new(data, k, base)
    }

    /// Creates a conditional entropy estimator `H(Y | X)`
    ///
    /// # Arguments
    ///
    /// * `xs` - Conditioning series
    /// * `ys` - Series whose uncertainty is measured
    /// * `bx`, `by` - Alphabet sizes, each inferred from its series when `None`
    /// * `log_base` - Logarithmic base of the result
    pub fn new_conditional(
        xs: impl Into<SymbolData>,
        ys: impl Into<SymbolData>,
        bx: Option<u32>,
        by: Option<u32>,
        log_base: f64,
    ) -> Result<SeriesConditionalEntropy> {
        SeriesConditionalEntropy::new(xs, ys, bx, by, log_base)
    }

    /// Creates a relative entropy estimator of the symbol distribution of
    /// `xs` with respect to that of `ys`
    pub fn new_relative(
        xs: impl Into<SymbolData>,
        ys: impl Into<SymbolData>,
        base: Option<u32>,
        log_base: f64,
    ) -> Result<SeriesRelativeEntropy> {
        SeriesRelativeEntropy::new(xs, ys, base, log_base)
    }
}
