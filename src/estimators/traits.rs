// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array2;

pub trait GlobalValue {
    /// Compute and return the average (time-averaged) value of the measure.
    fn global_value(&self) -> f64;
}

pub trait LocalValues: GlobalValue {
    /// Compute and return the local values of the measure, one row per
    /// ensemble member and one column per valid timestep.
    fn local_values(&self) -> Array2<f64>;

    /// Derive the average as the mean of the local values.
    ///
    /// Agrees with `global_value` up to floating-point summation order.
    fn global_from_local(&self) -> f64 {
        self.local_values().mean().unwrap_or(f64::NAN)
    }
}
