// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shannon information measures evaluated directly on histograms.
//!
//! Every function takes the logarithmic base explicitly. Invalid
//! distributions (no observations), a base `<= 0`, or supports of
//! incompatible size produce `NaN` rather than an error, so the functions
//! compose freely inside larger expressions.
//!
//! ```rust
//! use infodynamics::dist::Dist;
//! use infodynamics::shannon;
//!
//! let joint = Dist::from_counts(&[10, 70, 15, 5]).unwrap();
//! let x = Dist::from_counts(&[80, 20]).unwrap();
//! let y = Dist::from_counts(&[25, 75]).unwrap();
//! let mi = shannon::mutual_info(&joint, &x, &y, 2.0);
//! assert!((mi - 0.214171).abs() < 1e-6);
//! ```

use crate::dist::Dist;

/// Logarithmic base used when none is given.
pub const DEFAULT_LOG_BASE: f64 = 2.0;

/// Shannon entropy `H(p) = -Σ p(x) log_b p(x)`, with `0 log 0 = 0`.
pub fn entropy(p: &Dist, base: f64) -> f64 {
    if !p.valid() || !(base > 0.0) {
        return f64::NAN;
    }
    entropy_bits(p) / base.log2()
}

/// Mutual information `I(X;Y)` from a joint and both marginals.
///
/// The joint is laid out row-major: event `x * len(p_y) + y`.
pub fn mutual_info(p_xy: &Dist, p_x: &Dist, p_y: &Dist, base: f64) -> f64 {
    if !(p_xy.valid() && p_x.valid() && p_y.valid()) || !(base > 0.0) {
        return f64::NAN;
    }
    let (nx, ny) = (p_x.len(), p_y.len());
    if nx.checked_mul(ny) != Some(p_xy.len()) {
        return f64::NAN;
    }

    let n_xy = p_xy.counts() as f64;
    let n_x = p_x.counts() as f64;
    let n_y = p_y.counts() as f64;
    let joint = p_xy.as_slice();
    let (xs, ys) = (p_x.as_slice(), p_y.as_slice());

    let mut mi = 0.0;
    for x in 0..nx {
        for y in 0..ny {
            let c = joint[x * ny + y];
            if c == 0 {
                continue;
            }
            let p = c as f64 / n_xy;
            let px = xs[x] as f64 / n_x;
            let py = ys[y] as f64 / n_y;
            mi += p * (p / (px * py)).log2();
        }
    }
    mi / base.log2()
}

/// Conditional entropy `H(X|Y) = H(X,Y) - H(Y)`.
///
/// Equal to `-Σ p(x,y) log_b [p(x,y)/p(y)]`; the decomposition keeps the
/// result independent of how the joint support is laid out.
pub fn conditional_entropy(p_xy: &Dist, p_y: &Dist, base: f64) -> f64 {
    if !(p_xy.valid() && p_y.valid()) || !(base > 0.0) {
        return f64::NAN;
    }
    (entropy_bits(p_xy) - entropy_bits(p_y)) / base.log2()
}

/// Conditional mutual information
/// `I(X;Y|Z) = H(X,Z) + H(Y,Z) - H(X,Y,Z) - H(Z)`.
pub fn conditional_mutual_info(
    p_xyz: &Dist,
    p_xz: &Dist,
    p_yz: &Dist,
    p_z: &Dist,
    base: f64,
) -> f64 {
    if !(p_xyz.valid() && p_xz.valid() && p_yz.valid() && p_z.valid()) || !(base > 0.0) {
        return f64::NAN;
    }
    let bits = entropy_bits(p_xz) + entropy_bits(p_yz) - entropy_bits(p_xyz) - entropy_bits(p_z);
    bits / base.log2()
}

/// Relative entropy `D(p||q) = Σ p(x) log_b [p(x)/q(x)]` of a posterior `p`
/// with respect to a prior `q` over the same support.
///
/// Events the posterior never observed contribute nothing. An event the
/// posterior observed but the prior did not makes the divergence `+inf`.
/// Invalid histograms or differing supports give `NaN`.
pub fn relative_entropy(p: &Dist, q: &Dist, base: f64) -> f64 {
    if !(p.valid() && q.valid()) || p.len() != q.len() || !(base > 0.0) {
        return f64::NAN;
    }
    let n_p = p.counts() as f64;
    let n_q = q.counts() as f64;
    let mut re = 0.0;
    for (&cp, &cq) in p.as_slice().iter().zip(q.as_slice()) {
        if cp == 0 {
            continue;
        }
        if cq == 0 {
            return f64::INFINITY;
        }
        let pp = cp as f64 / n_p;
        let pq = cq as f64 / n_q;
        re += pp * (pp / pq).log2();
    }
    re / base.log2()
}

// Entropy in bits of a valid histogram.
pub(crate) fn entropy_bits(p: &Dist) -> f64 {
    let n = p.counts() as f64;
    let mut h = 0.0;
    for &c in p.as_slice() {
        if c > 0 {
            let px = c as f64 / n;
            h -= px * px.log2();
        }
    }
    h
}
