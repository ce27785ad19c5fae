// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use infodynamics::error::Error;
use infodynamics::estimators::data::{ConditionData, Ensemble, infer_base, resolve_base};
use ndarray::{Array1, Array2, Array3, ArrayD, IxDyn, array};

#[test]
fn one_dimensional_series_is_single_member() {
    let e = Ensemble::new(vec![0, 1, 1, 0]).unwrap();
    assert_eq!(e.members(), 1);
    assert_eq!(e.timesteps(), 4);
    assert_eq!(e.shape(), vec![4]);
}

#[test]
fn nested_rows_become_an_ensemble() {
    let e = Ensemble::new(vec![vec![0, 1, 2], vec![2, 1, 0]]).unwrap();
    assert_eq!(e.shape(), vec![2, 3]);
    assert_eq!(e.view(), array![[0, 1, 2], [2, 1, 0]]);
}

#[test]
fn ragged_rows_are_rejected() {
    let err = Ensemble::new(vec![vec![0, 1, 2], vec![1]]).unwrap_err();
    assert_eq!(
        err,
        Error::ShapeMismatch {
            expected: vec![2, 3],
            got: vec![2, 1]
        }
    );
}

#[test]
fn empty_inputs_are_rejected() {
    assert_eq!(Ensemble::new(Vec::<i32>::new()), Err(Error::EmptySeries));
    assert_eq!(Ensemble::new(Array2::<i32>::zeros((0, 4))), Err(Error::EmptySeries));
    assert_eq!(Ensemble::new(Vec::<Vec<i32>>::new()), Err(Error::EmptySeries));
}

#[test]
fn dynamic_input_is_limited_to_two_axes() {
    let cube = ArrayD::<i32>::zeros(IxDyn(&[2, 2, 2]));
    assert_eq!(Ensemble::new(cube), Err(Error::DimensionError { got: 3, max: 2 }));

    let flat = ArrayD::from_shape_vec(IxDyn(&[2, 3]), vec![0, 1, 0, 1, 1, 0]).unwrap();
    assert_eq!(Ensemble::new(flat).unwrap().shape(), vec![2, 3]);
}

#[test]
fn shapes_must_match_exactly() {
    let series = Ensemble::new(vec![1, 1, 1, 1]).unwrap();
    let row = Ensemble::new(array![[1, 1, 1, 1]]).unwrap();
    assert!(matches!(series.ensure_same_shape(&row), Err(Error::ShapeMismatch { .. })));
}

#[test]
fn base_inference() {
    let a = Ensemble::new(vec![0, 0, 0]).unwrap();
    let b = Ensemble::new(vec![0, 4, 1]).unwrap();
    assert_eq!(infer_base(&[&a]), 2);
    assert_eq!(infer_base(&[&a, &b]), 5);
    assert_eq!(resolve_base(Some(3), &[&b]), Ok(3));
    assert_eq!(resolve_base(Some(1), &[&b]), Err(Error::InvalidBase(1)));
}

#[test]
fn condition_shapes_for_series_target() {
    let target = Ensemble::new(vec![0, 1, 0, 1]).unwrap();

    let single = ConditionData::from(vec![1, 1, 0, 0]);
    assert_eq!(single.into_backgrounds(&target).unwrap().len(), 1);

    let several = ConditionData::from(Array2::<i32>::zeros((3, 4)));
    let backgrounds = several.into_backgrounds(&target).unwrap();
    assert_eq!(backgrounds.len(), 3);
    assert!(backgrounds.iter().all(|b| b.shape() == vec![4]));

    let wrong = ConditionData::from(Array1::<i32>::zeros(5));
    assert_eq!(
        wrong.into_backgrounds(&target).unwrap_err(),
        Error::ShapeMismatch {
            expected: vec![4],
            got: vec![5]
        }
    );
}

#[test]
fn condition_shapes_for_ensemble_target() {
    let target = Ensemble::new(Array2::<i32>::zeros((2, 5))).unwrap();

    let single = ConditionData::from(Array2::<i32>::ones((2, 5)));
    let backgrounds = single.into_backgrounds(&target).unwrap();
    assert_eq!(backgrounds.len(), 1);
    assert_eq!(backgrounds[0].view(), Array2::<i32>::ones((2, 5)));

    let several = ConditionData::from(Array3::<i32>::zeros((4, 2, 5)));
    assert_eq!(several.into_backgrounds(&target).unwrap().len(), 4);

    let flat = ConditionData::from(Array1::<i32>::zeros(5));
    assert!(matches!(flat.into_backgrounds(&target), Err(Error::ShapeMismatch { .. })));

    let too_deep = ConditionData::from(ArrayD::<i32>::zeros(IxDyn(&[1, 1, 2, 5])));
    assert_eq!(
        too_deep.into_backgrounds(&target).unwrap_err(),
        Error::DimensionError { got: 4, max: 3 }
    );
}
