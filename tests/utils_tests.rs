use ndarray::{arr2, Array, Array1, Array2, IxDyn};
use sindy_utils::{
    reorder_constraints, reorder_constraints_str, validate_control_variables, AxesArray, AxisRole,
    ConstraintOrder, UtilsError,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_reorder_constraints_1d() {
    init_logging();
    let target_order = Array1::from_iter(0..6);
    let row_order = Array1::from_vec(vec![0, 3, 1, 4, 2, 5]);
    let n_feats = 3;

    let reordered = reorder_constraints(&target_order, n_feats, ConstraintOrder::Row).unwrap();
    assert_eq!(reordered, row_order);
    assert_eq!(reorder_constraints_str(&row_order, n_feats, "target").unwrap(), target_order);
}

#[test]
fn test_reorder_constraints_2d() {
    init_logging();
    let target_order = Array2::from_shape_vec((2, 6), (0..12).collect()).unwrap();
    let row_order = arr2(&[[0, 3, 1, 4, 2, 5], [6, 9, 7, 10, 8, 11]]);
    let n_feats = 3;

    let reordered =
        reorder_constraints(&target_order, n_feats, ConstraintOrder::default()).unwrap();
    assert_eq!(reordered, row_order);

    let restored = reorder_constraints(&row_order, n_feats, ConstraintOrder::Target).unwrap();
    assert_eq!(restored, target_order);
}

#[test]
fn test_reorder_constraints_rejects_bad_input() {
    init_logging();
    let row = Array1::from_iter(0..5);
    assert_eq!(
        reorder_constraints(&row, 3, ConstraintOrder::Row),
        Err(UtilsError::NotDivisible { len: 5, n_features: 3 })
    );
    assert!(matches!(
        reorder_constraints_str(&row, 5, "columns"),
        Err(UtilsError::InvalidOrder(_))
    ));
}

#[test]
fn test_validate_controls() {
    init_logging();
    let axes = [("ax_time", 0), ("ax_coord", 1)];
    let arr = AxesArray::from_names(Array::ones(IxDyn(&[2, 2])), &axes).unwrap();

    assert!(validate_control_variables(&[], &[arr.clone()], false).is_err());

    let first_point = arr.slice_time(0..1).unwrap();
    assert!(validate_control_variables(&[arr.clone()], &[first_point], false).is_err());

    let u_mod = validate_control_variables(&[arr.clone()], &[arr.clone()], true).unwrap();
    assert_eq!(u_mod[0].n_time().unwrap(), 1);
    assert_eq!(u_mod[0].axis(AxisRole::Coord), Some(1));
}
