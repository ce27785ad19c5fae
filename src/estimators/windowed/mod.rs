// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Measures over sliding `k`-histories of symbol series.
//!
//! All four estimators follow the same lifecycle. Construction validates the
//! input, resolves the alphabet `b` and accumulates every window of every
//! ensemble member into one set of histograms. The values are derived from
//! those counts on request and reported in bits, whatever the alphabet:
//!
//! | Measure | Local value at `t` |
//! |---------|--------------------|
//! | [`ActiveInformation`] | `log2 p(h, f) / (p(h) p(f))` |
//! | [`BlockEntropy`] | `-log2 p(block)` |
//! | [`EntropyRate`] | `-log2 p(f \| h)` |
//! | [`DiscreteTransferEntropy`] | `log2 p(f, s \| h, w) / (p(f \| h, w) p(s \| h, w))` |
//!
//! The average of each measure equals the mean of its local values.

pub mod active_info;
pub mod block_entropy;
pub mod entropy_rate;
pub mod transfer_entropy;

pub use active_info::ActiveInformation;
pub use block_entropy::BlockEntropy;
pub use entropy_rate::EntropyRate;
pub use transfer_entropy::DiscreteTransferEntropy;

