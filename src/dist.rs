// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Empirical probability distributions over a finite integer support.
//!
//! A [`Dist`] is a histogram: it stores how many times each event
//! `0..len()` has been observed and exposes maximum-likelihood
//! probabilities `counts[event] / total`. The information measures build
//! one or more of these per call and derive their values from them.
//!
//! ```rust
//! use infodynamics::dist::Dist;
//!
//! let mut d = Dist::new(3).unwrap();
//! assert!(!d.valid());
//! d.tick(0).unwrap();
//! d.tick(2).unwrap();
//! d.tick(2).unwrap();
//! assert_eq!(d.counts(), 3);
//! assert!((d.probability(2).unwrap() - 2.0 / 3.0).abs() < 1e-12);
//! ```

use crate::error::{Error, Result};
use ndarray::{Array1, ArrayD};

/// Histogram of observation counts over the support `{0, …, n-1}`.
///
/// Cloning produces an independent histogram with identical counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dist {
    histogram: Vec<u32>,
    counts: u64,
}

impl Dist {
    /// Creates a zeroed histogram over `n` events.
    ///
    /// Fails with `InvalidSupport` when `n == 0` and with `Memory` when the
    /// support cannot be allocated.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidSupport("support is zero"));
        }
        let mut histogram = Vec::new();
        histogram
            .try_reserve_exact(n)
            .map_err(|_| Error::Memory {
                func: "Dist::new",
                events: n as u128,
            })?;
        histogram.resize(n, 0);
        Ok(Self {
            histogram,
            counts: 0,
        })
    }

    /// Creates a histogram from initial counts, copying them.
    pub fn from_counts(counts: &[u32]) -> Result<Self> {
        if counts.is_empty() {
            return Err(Error::InvalidSupport("support is empty"));
        }
        Ok(Self {
            histogram: counts.to_vec(),
            counts: counts.iter().map(|&c| c as u64).sum(),
        })
    }

    /// Changes the size of the support in place.
    ///
    /// Counts in the shared prefix are kept; growth is zero filled and
    /// shrinking discards the trailing events together with their counts.
    pub fn resize(&mut self, n: usize) -> Result<()> {
        if n == 0 {
            return Err(Error::InvalidSupport("support is zero"));
        }
        if n < self.histogram.len() {
            let dropped: u64 = self.histogram[n..].iter().map(|&c| c as u64).sum();
            self.histogram.truncate(n);
            self.counts -= dropped;
        } else if n > self.histogram.len() {
            let extra = n - self.histogram.len();
            self.histogram
                .try_reserve_exact(extra)
                .map_err(|_| Error::Memory {
                    func: "Dist::resize",
                    events: n as u128,
                })?;
            self.histogram.resize(n, 0);
        }
        Ok(())
    }

    /// Size of the support.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.histogram.len()
    }

    /// Total number of observations made so far.
    pub fn counts(&self) -> u64 {
        self.counts
    }

    /// A distribution is valid once at least one observation was made.
    pub fn valid(&self) -> bool {
        !self.histogram.is_empty() && self.counts > 0
    }

    /// Number of observations of `event`.
    pub fn get(&self, event: usize) -> Result<u32> {
        self.check(event)?;
        Ok(self.histogram[event])
    }

    /// Sets the number of observations of `event`.
    ///
    /// Negative values are stored as zero, so a caller can decrement a count
    /// back to its baseline without tracking the floor itself.
    pub fn set(&mut self, event: usize, value: i64) -> Result<u32> {
        self.check(event)?;
        let value = value.clamp(0, u32::MAX as i64) as u32;
        let old = self.histogram[event];
        self.counts = self.counts - old as u64 + value as u64;
        self.histogram[event] = value;
        Ok(value)
    }

    /// Records one observation of `event` and returns its new count.
    ///
    /// Fails with `CountOverflow` once the event already holds `u32::MAX`
    /// observations; the histogram is left unchanged.
    pub fn tick(&mut self, event: usize) -> Result<u32> {
        self.check(event)?;
        let slot = &mut self.histogram[event];
        *slot = slot.checked_add(1).ok_or(Error::CountOverflow { event })?;
        self.counts += 1;
        Ok(*slot)
    }

    /// Empirical probability of `event`.
    pub fn probability(&self, event: usize) -> Result<f64> {
        if !self.valid() {
            return Err(Error::InvalidDistribution);
        }
        self.check(event)?;
        Ok(self.histogram[event] as f64 / self.counts as f64)
    }

    /// Empirical probability of every event of the support.
    pub fn dump(&self) -> Result<Array1<f64>> {
        if !self.valid() {
            return Err(Error::InvalidDistribution);
        }
        let total = self.counts as f64;
        Ok(self.histogram.iter().map(|&c| c as f64 / total).collect())
    }

    /// Raw counts, indexed by event.
    pub fn as_slice(&self) -> &[u32] {
        &self.histogram
    }

    fn check(&self, event: usize) -> Result<()> {
        if event >= self.histogram.len() {
            return Err(Error::OutOfRange {
                event,
                size: self.histogram.len(),
            });
        }
        Ok(())
    }
}

impl TryFrom<ArrayD<u32>> for Dist {
    type Error = Error;

    fn try_from(array: ArrayD<u32>) -> Result<Self> {
        if array.ndim() != 1 {
            return Err(Error::InvalidSupport("support is multi-dimensional"));
        }
        let counts: Vec<u32> = array.iter().copied().collect();
        Dist::from_counts(&counts)
    }
}

impl TryFrom<&[u32]> for Dist {
    type Error = Error;

    fn try_from(counts: &[u32]) -> Result<Self> {
        Dist::from_counts(counts)
    }
}
