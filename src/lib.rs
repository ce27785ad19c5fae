// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # infodynamics
//!
//! Information dynamics of discrete time series: entropy, mutual information
//! and their time-windowed variants over symbol series and ensembles.
//!
//! ## Quick Start
//!
//! ```rust
//! use infodynamics::estimators::entropy::Entropy;
//! use infodynamics::estimators::transfer_entropy::TransferEntropy;
//! use infodynamics::estimators::traits::{GlobalValue, LocalValues};
//! use ndarray::array;
//!
//! let target = array![0, 0, 1, 1, 1, 1, 0, 0, 0];
//! let source = array![0, 1, 1, 1, 1, 0, 0, 0, 0];
//!
//! let rate = Entropy::new_rate(target.clone(), 2, None).unwrap();
//! assert!((rate.global_value() - 0.679270).abs() < 1e-6);
//!
//! let te = TransferEntropy::new_discrete(source, target, 2, None).unwrap();
//! assert_eq!(te.local_values().shape(), &[1, 7]);
//! ```
//!
//! ## Measures
//!
//! | Measure | Estimator | History |
//! |---------|-----------|---------|
//! | Active information | [`estimators::windowed::ActiveInformation`] | `k` |
//! | Block entropy | [`estimators::windowed::BlockEntropy`] | `k` |
//! | Entropy rate | [`estimators::windowed::EntropyRate`] | `k` |
//! | Transfer entropy | [`estimators::windowed::DiscreteTransferEntropy`] | `k`, optional background |
//! | Mutual information | [`estimators::series::SeriesMutualInformation`] | none |
//! | Conditional entropy | [`estimators::series::SeriesConditionalEntropy`] | none |
//! | Relative entropy | [`estimators::series::SeriesRelativeEntropy`] | none |
//!
//! Every estimator exposes its average through [`GlobalValue`]; the
//! time-resolved ones also expose per-timestep values through
//! [`LocalValues`], one row per ensemble member.
//!
//! ## Architecture
//!
//! 1. **Public API Layer**: Factory types (`Entropy`, `MutualInformation`, `TransferEntropy`)
//! 2. **Estimators**: windowed and series measures accumulating shared histograms
//! 3. **Core Infrastructure**: histograms ([`dist::Dist`]), Shannon algebra
//!    ([`shannon`]), state encoding, binning and coalescing ([`utils`])
//!
//! Continuous data is discretised first with [`utils::bin_series`]; sparse
//! alphabets are compacted with [`utils::coalesce_series`].
//!
//! ## Logging
//!
//! The crate logs through the `log` facade and never installs a logger.

pub mod dist;
pub mod error;
pub mod estimators;
pub mod shannon;
pub mod utils;

pub use dist::Dist;
pub use error::{Error, Result};
pub use estimators::traits::{GlobalValue, LocalValues};
