use crate::error::Result;
use crate::estimators::data::SymbolData;
use crate::estimators::series::SeriesMutualInformation;
use crate::estimators::windowed::ActiveInformation;

/// Mutual information estimation methods for symbol series
pub struct MutualInformation;

impl MutualInformation {
    /// Creates a mutual information estimator between two series
    ///
    /// # Arguments
    ///
    /// * `xs`, `ys` - Equally shaped symbol series or ensembles
    /// * `bx`, `by` - Alphabet sizes, each inferred from its series when `None`
    /// * `log_base` - Logarithmic base of the result
    pub fn new_discrete(
        xs: impl Into<SymbolData>,
        ys: impl Into<SymbolData>,
        bx: Option<u32>,
        by: Option<u32>,
        log_base: f64,
    ) -> Result<SeriesMutualInformation> {
        SeriesMutualInformation::new(xs, ys, bx, by, log_base)
    }

    /// Creates an active information estimator: the mutual information
    /// between the `k`-history of a series and its next symbol
    pub fn new_active_info(
        data: impl Into<SymbolData>,
        k: usize,
        base: Option<u32>,
    ) -> Result<ActiveInformation> {
        ActiveInformation::new(data, k, base)
    }
}
