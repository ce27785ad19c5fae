use crate::error::Result;
use crate::estimators::data::{ConditionData, SymbolData};
use crate::estimators::windowed::DiscreteTransferEntropy;

/// Transfer entropy estimation methods for symbol series
pub struct TransferEntropy;

impl TransferEntropy {
    /// Creates a transfer entropy estimator from `source` to `target`
    ///
    /// # Arguments
    ///
    /// * `source` - Source series or ensemble
    /// * `target` - Target series or ensemble, same shape as `source`
    /// * `k` - Target history length
    /// * `base` - Alphabet size, inferred over both series when `None`
    pub fn new_discrete(
        source: impl Into<SymbolData>,
        target: impl Into<SymbolData>,
        k: usize,
        base: Option<u32>,
    ) -> Result<DiscreteTransferEntropy> {
        DiscreteTransferEntropy::new(source, target, k, None, base)
    }

    /// Creates a conditional transfer entropy estimator
    ///
    /// The background processes in `condition` extend the target history in
    /// the conditioning key. A 1-D target takes a 1-D condition (one
    /// process) or an `(l, m)` array; a 2-D target an `(n, m)` or
    /// `(l, n, m)` array.
    pub fn new_conditional(
        source: impl Into<SymbolData>,
        target: impl Into<SymbolData>,
        k: usize,
        condition: impl Into<ConditionData>,
        base: Option<u32>,
    ) -> Result<DiscreteTransferEntropy> {
        DiscreteTransferEntropy::new(source, target, k, Some(condition.into()), base)
    }
}
