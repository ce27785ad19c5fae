// Preprocessing utilities: state encoding, binning of continuous series and
// coalescing of sparse alphabets.

pub mod binning;
pub mod coalesce;
pub mod encoding;

pub use binning::{BinSpec, Binned, Binning, bin_series, series_range};
pub use coalesce::coalesce_series;
pub use encoding::{decode, encode};
