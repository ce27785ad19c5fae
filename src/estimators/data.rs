// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Input normalisation for the measures.
//!
//! Measures accept a single series (1-D) or an ensemble of equal-length
//! realisations (2-D, rows are members, columns are time). Both are turned
//! into an [`Ensemble`] at the boundary so the accumulation code only ever
//! sees a validated `(n, m)` array.

use crate::error::{Error, Result};
use ndarray::{Array1, Array2, Array3, ArrayD, ArrayView1, ArrayView2, Axis};

/// Symbol series as handed in by the caller.
#[derive(Debug, Clone)]
pub enum SymbolData {
    /// One-dimensional data: a single series.
    OneDimensional(Array1<i32>),

    /// Two-dimensional data: rows are realisations, columns are timesteps.
    TwoDimensional(Array2<i32>),

    /// Data of runtime dimensionality; validated to at most two axes.
    Dynamic(ArrayD<i32>),

    /// Nested rows, validated for a uniform length.
    Nested(Vec<Vec<i32>>),
}

impl From<Array1<i32>> for SymbolData {
    fn from(array: Array1<i32>) -> Self {
        SymbolData::OneDimensional(array)
    }
}

impl From<Array2<i32>> for SymbolData {
    fn from(array: Array2<i32>) -> Self {
        SymbolData::TwoDimensional(array)
    }
}

impl From<ArrayD<i32>> for SymbolData {
    fn from(array: ArrayD<i32>) -> Self {
        SymbolData::Dynamic(array)
    }
}

impl From<&Array1<i32>> for SymbolData {
    fn from(array: &Array1<i32>) -> Self {
        SymbolData::OneDimensional(array.clone())
    }
}

impl From<&Array2<i32>> for SymbolData {
    fn from(array: &Array2<i32>) -> Self {
        SymbolData::TwoDimensional(array.clone())
    }
}

impl From<ArrayView1<'_, i32>> for SymbolData {
    fn from(view: ArrayView1<'_, i32>) -> Self {
        SymbolData::OneDimensional(view.to_owned())
    }
}

impl From<ArrayView2<'_, i32>> for SymbolData {
    fn from(view: ArrayView2<'_, i32>) -> Self {
        SymbolData::TwoDimensional(view.to_owned())
    }
}

impl From<Vec<i32>> for SymbolData {
    fn from(series: Vec<i32>) -> Self {
        SymbolData::OneDimensional(Array1::from(series))
    }
}

impl From<&[i32]> for SymbolData {
    fn from(series: &[i32]) -> Self {
        SymbolData::OneDimensional(Array1::from(series.to_vec()))
    }
}

impl From<Vec<Vec<i32>>> for SymbolData {
    fn from(rows: Vec<Vec<i32>>) -> Self {
        SymbolData::Nested(rows)
    }
}

/// Background processes used to condition transfer entropy.
///
/// For a 1-D target of length `m` a condition is 1-D (one process) or
/// `(l, m)`; for a 2-D target `(n, m)` it is `(n, m)` or `(l, n, m)`.
#[derive(Debug, Clone)]
pub enum ConditionData {
    OneDimensional(Array1<i32>),
    TwoDimensional(Array2<i32>),
    ThreeDimensional(Array3<i32>),
    Dynamic(ArrayD<i32>),
}

impl From<Array1<i32>> for ConditionData {
    fn from(array: Array1<i32>) -> Self {
        ConditionData::OneDimensional(array)
    }
}

impl From<Array2<i32>> for ConditionData {
    fn from(array: Array2<i32>) -> Self {
        ConditionData::TwoDimensional(array)
    }
}

impl From<Array3<i32>> for ConditionData {
    fn from(array: Array3<i32>) -> Self {
        ConditionData::ThreeDimensional(array)
    }
}

impl From<ArrayD<i32>> for ConditionData {
    fn from(array: ArrayD<i32>) -> Self {
        ConditionData::Dynamic(array)
    }
}

impl From<Vec<i32>> for ConditionData {
    fn from(series: Vec<i32>) -> Self {
        ConditionData::OneDimensional(Array1::from(series))
    }
}

impl From<&[i32]> for ConditionData {
    fn from(series: &[i32]) -> Self {
        ConditionData::OneDimensional(Array1::from(series.to_vec()))
    }
}

impl ConditionData {
    fn into_dyn(self) -> ArrayD<i32> {
        match self {
            ConditionData::OneDimensional(a) => a.into_dyn(),
            ConditionData::TwoDimensional(a) => a.into_dyn(),
            ConditionData::ThreeDimensional(a) => a.into_dyn(),
            ConditionData::Dynamic(a) => a,
        }
    }

    /// Splits the condition into one ensemble per background process, each
    /// shaped like `target`.
    pub fn into_backgrounds(self, target: &Ensemble) -> Result<Vec<Ensemble>> {
        let cond = self.into_dyn();
        if cond.ndim() > 3 {
            return Err(Error::DimensionError {
                got: cond.ndim(),
                max: 3,
            });
        }
        if cond.ndim() == 0 || cond.is_empty() {
            return Err(Error::EmptySeries);
        }

        let expected = target.shape();
        let (n, m) = (target.members(), target.timesteps());
        if cond.ndim() == expected.len() && cond.shape() == expected.as_slice() {
            return Ok(vec![Ensemble::from_processes(&cond.view(), n, m, target)?]);
        }
        if cond.ndim() == expected.len() + 1 && &cond.shape()[1..] == expected.as_slice() {
            return cond
                .axis_iter(Axis(0))
                .map(|process| Ensemble::from_processes(&process, n, m, target))
                .collect();
        }
        Err(Error::ShapeMismatch {
            expected,
            got: cond.shape().to_vec(),
        })
    }
}

/// Validated symbol ensemble of shape `(n, m)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Ensemble {
    data: Array2<i32>,
    shape: Vec<usize>,
}

impl Ensemble {
    /// Validates and normalises caller data.
    ///
    /// Fails with `EmptySeries` when there are no observations,
    /// `DimensionError` for more than two axes and `ShapeMismatch` for
    /// ragged nested rows.
    pub fn new(data: impl Into<SymbolData>) -> Result<Self> {
        match data.into() {
            SymbolData::OneDimensional(a) => Self::from_array1(a),
            SymbolData::TwoDimensional(a) => Self::from_array2(a),
            SymbolData::Dynamic(a) => match a.ndim() {
                0 => Err(Error::EmptySeries),
                1 => Self::from_array1(a.iter().copied().collect()),
                2 => {
                    let (n, m) = (a.shape()[0], a.shape()[1]);
                    let values = a.iter().copied().collect();
                    Self::from_array2(Self::reshape(values, n, m, a.shape())?)
                }
                got => Err(Error::DimensionError { got, max: 2 }),
            },
            SymbolData::Nested(rows) => {
                let n = rows.len();
                let m = rows.first().map_or(0, Vec::len);
                if let Some(bad) = rows.iter().find(|r| r.len() != m) {
                    return Err(Error::ShapeMismatch {
                        expected: vec![n, m],
                        got: vec![n, bad.len()],
                    });
                }
                let values = rows.into_iter().flatten().collect();
                Self::from_array2(Self::reshape(values, n, m, &[n, m])?)
            }
        }
    }

    fn from_array1(a: Array1<i32>) -> Result<Self> {
        if a.is_empty() {
            return Err(Error::EmptySeries);
        }
        let m = a.len();
        Ok(Self {
            data: a.insert_axis(Axis(0)),
            shape: vec![m],
        })
    }

    fn from_array2(a: Array2<i32>) -> Result<Self> {
        if a.is_empty() {
            return Err(Error::EmptySeries);
        }
        let shape = a.shape().to_vec();
        Ok(Self { data: a, shape })
    }

    fn from_processes(
        process: &ndarray::ArrayViewD<'_, i32>,
        n: usize,
        m: usize,
        target: &Ensemble,
    ) -> Result<Self> {
        let values = process.iter().copied().collect();
        Ok(Self {
            data: Self::reshape(values, n, m, process.shape())?,
            shape: target.shape.clone(),
        })
    }

    fn reshape(values: Vec<i32>, n: usize, m: usize, got: &[usize]) -> Result<Array2<i32>> {
        Array2::from_shape_vec((n, m), values).map_err(|_| Error::ShapeMismatch {
            expected: vec![n, m],
            got: got.to_vec(),
        })
    }

    /// Number of realisations, `n`.
    pub fn members(&self) -> usize {
        self.data.nrows()
    }

    /// Length of each realisation, `m`.
    pub fn timesteps(&self) -> usize {
        self.data.ncols()
    }

    /// Shape as supplied by the caller (`[m]` or `[n, m]`).
    pub fn shape(&self) -> Vec<usize> {
        self.shape.clone()
    }

    /// Total number of symbols.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn view(&self) -> ArrayView2<'_, i32> {
        self.data.view()
    }

    /// Largest symbol of the ensemble.
    pub fn max_symbol(&self) -> i32 {
        self.data.iter().copied().max().unwrap_or(0)
    }

    /// Fails with `ShapeMismatch` unless both inputs have the same shape.
    pub fn ensure_same_shape(&self, other: &Ensemble) -> Result<()> {
        if self.shape != other.shape {
            return Err(Error::ShapeMismatch {
                expected: self.shape.clone(),
                got: other.shape.clone(),
            });
        }
        Ok(())
    }
}

/// Smallest alphabet covering every symbol of `ensembles`, at least 2.
pub fn infer_base(ensembles: &[&Ensemble]) -> u32 {
    let max = ensembles
        .iter()
        .map(|e| e.max_symbol() as i64)
        .max()
        .unwrap_or(0);
    (max + 1).clamp(2, u32::MAX as i64) as u32
}

/// Resolves an optional explicit base against the inferred one.
///
/// An explicit base below 2 is rejected; symbols exceeding an explicit base
/// are only reported once they are encoded.
pub fn resolve_base(base: Option<u32>, ensembles: &[&Ensemble]) -> Result<u32> {
    match base {
        Some(b) if b < 2 => Err(Error::InvalidBase(b)),
        Some(b) => Ok(b),
        None => Ok(infer_base(ensembles)),
    }
}
