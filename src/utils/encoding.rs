// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Positional encoding of fixed-width symbol windows.
//!
//! A window `[s_0, …, s_{w-1}]` of base-`b` symbols maps to
//! `s_0 b^{w-1} + … + s_{w-1}`: the first symbol is the most significant
//! digit. The measures use the encoded value as a histogram index.

use crate::error::{Error, Result};

/// Encodes a base-`base` state into a single integer.
///
/// Fails with `EmptyState` for an empty slice, `BaseOverflow` when a symbol
/// is negative or `>= base`, and `EncodingOverflow` when the value does not
/// fit a `usize`.
pub fn encode(state: &[i32], base: u32) -> Result<usize> {
    if state.is_empty() {
        return Err(Error::EmptyState);
    }
    check_base(base)?;
    state.iter().try_fold(0usize, |acc, &symbol| {
        let digit = digit(symbol, base)?;
        acc.checked_mul(base as usize)
            .and_then(|v| v.checked_add(digit))
            .ok_or(Error::EncodingOverflow)
    })
}

/// Decodes `value` into its base-`base` digits.
///
/// With a `width` the result has exactly that many symbols, left padded
/// with zeros; `WidthTooSmall` is returned when the value needs more digits.
/// Without a width the shortest representation is returned and `0` decodes
/// to `[0]`. A width whose padding cannot be allocated fails with `Memory`.
pub fn decode(value: usize, base: u32, width: Option<usize>) -> Result<Vec<i32>> {
    check_base(base)?;
    let b = base as usize;
    let mut digits = Vec::new();
    let mut rest = value;
    loop {
        digits.push((rest % b) as i32);
        rest /= b;
        if rest == 0 {
            break;
        }
    }
    if let Some(width) = width {
        if digits.len() > width {
            return Err(Error::WidthTooSmall { value, base, width });
        }
        digits
            .try_reserve_exact(width - digits.len())
            .map_err(|_| Error::Memory {
                func: "decode",
                events: width as u128,
            })?;
        digits.resize(width, 0);
    }
    digits.reverse();
    Ok(digits)
}

/// Number of distinct states of a `width`-symbol window, `base^width`.
///
/// Returns `None` when the state space does not fit a `usize`.
pub fn state_count(base: u32, width: usize) -> Option<usize> {
    let width = u32::try_from(width).ok()?;
    (base as usize).checked_pow(width)
}

pub(crate) fn check_base(base: u32) -> Result<()> {
    if base < 2 {
        return Err(Error::InvalidBase(base));
    }
    Ok(())
}

/// Validates a single symbol against `base` and returns it as a digit.
pub(crate) fn digit(symbol: i32, base: u32) -> Result<usize> {
    if symbol < 0 || symbol as i64 >= base as i64 {
        return Err(Error::BaseOverflow { symbol, base });
    }
    Ok(symbol as usize)
}
