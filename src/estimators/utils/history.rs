//! Sliding-window observations shared by the windowed measures.
//!
//! Every helper returns an `(n, count)` array of encoded states: row `i`
//! holds the observations of ensemble member `i`, column `t` the window
//! starting at timestep `t`.

use crate::dist::Dist;
use crate::error::{Error, Result};
use crate::estimators::data::Ensemble;
use crate::utils::encoding::{digit, encode, state_count};
use ndarray::Array2;

/// Checks the history length against the series length.
///
/// `k == 0` fails with `ZeroHistory`, `m <= k` with `HistoryTooLong`.
pub fn check_history(k: usize, m: usize) -> Result<()> {
    if k == 0 {
        return Err(Error::ZeroHistory);
    }
    if m <= k {
        return Err(Error::HistoryTooLong { k, len: m });
    }
    Ok(())
}

/// Encodes the `width`-symbol window starting at each of the first `count`
/// timesteps of every member.
pub fn window_states(
    ensemble: &Ensemble,
    width: usize,
    count: usize,
    base: u32,
) -> Result<Array2<usize>> {
    let data = ensemble.view();
    let mut states = Array2::zeros((ensemble.members(), count));
    for (i, row) in data.outer_iter().enumerate() {
        let row: Vec<i32> = row.to_vec();
        for t in 0..count {
            states[(i, t)] = encode(&row[t..t + width], base)?;
        }
    }
    Ok(states)
}

/// Symbols at timestep `t + offset` for the first `count` timesteps, as
/// histogram events.
pub fn symbols_at(
    ensemble: &Ensemble,
    offset: usize,
    count: usize,
    base: u32,
) -> Result<Array2<usize>> {
    let data = ensemble.view();
    let mut symbols = Array2::zeros((ensemble.members(), count));
    for ((i, t), s) in symbols.indexed_iter_mut() {
        *s = digit(data[(i, t + offset)], base)?;
    }
    Ok(symbols)
}

/// Combines two state arrays into one, `hi * lo_states + lo`.
///
/// The caller guarantees the combined support was sized with [`support`].
pub fn combine(hi: &Array2<usize>, lo: &Array2<usize>, lo_states: usize) -> Array2<usize> {
    let mut out = hi * lo_states;
    out += lo;
    out
}

/// Size of the support of a `width`-symbol window, `base^width`.
///
/// Fails with `Memory` when the support cannot be addressed.
pub fn support(base: u32, width: usize, func: &'static str) -> Result<usize> {
    state_count(base, width).ok_or(Error::Memory {
        func,
        events: u32::try_from(width)
            .ok()
            .and_then(|w| (base as u128).checked_pow(w))
            .unwrap_or(u128::MAX),
    })
}

/// Allocates a histogram over `size` events and ticks every state of
/// `states` into it.
pub fn accumulate(states: &Array2<usize>, size: usize, func: &'static str) -> Result<Dist> {
    let mut dist = Dist::new(size).map_err(|e| e.in_measure(func))?;
    for &s in states.iter() {
        dist.tick(s).map_err(|e| e.in_measure(func))?;
    }
    Ok(dist)
}
