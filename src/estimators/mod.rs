pub mod data;
pub mod entropy;
pub mod mutual_information;
pub mod series;
pub mod traits;
pub mod transfer_entropy;
pub mod utils;
pub mod windowed;

pub use data::{ConditionData, Ensemble, SymbolData, infer_base};
pub use traits::{GlobalValue, LocalValues};
