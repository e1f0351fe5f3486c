use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndarray::{Array, Array2, IxDyn};
use sindy_utils::{
    reorder_constraints, validate_control_variables, AxesArray, AxisRole, ConstraintOrder,
};

fn bench_reorder_constraints(c: &mut Criterion) {
    let n_features = 64;
    let n_targets = 8;
    let constraints = Array2::from_shape_fn((256, n_features * n_targets), |(r, c)| (r + c) as f64);

    c.bench_function("reorder_constraints 256x512 to row order", |b| {
        b.iter(|| reorder_constraints(black_box(&constraints), n_features, ConstraintOrder::Row))
    });
}

fn bench_validate_controls(c: &mut Criterion) {
    let make = |n_coord: usize| {
        AxesArray::new(
            Array::zeros(IxDyn(&[1000, n_coord])),
            &[(AxisRole::Time, 0), (AxisRole::Coord, 1)],
        )
        .unwrap()
    };
    let x: Vec<AxesArray> = (0..16).map(|_| make(6)).collect();
    let u: Vec<AxesArray> = (0..16).map(|_| make(2)).collect();

    c.bench_function("validate_control_variables 16 trajectories with trim", |b| {
        b.iter(|| validate_control_variables(black_box(&x), black_box(&u), true))
    });
}

criterion_group!(benches, bench_reorder_constraints, bench_validate_controls);
criterion_main!(benches);
