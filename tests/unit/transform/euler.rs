use super::*;
use crate::foundation::math::MAT3_IDENTITY;
use std::f64::consts::FRAC_PI_2;

const EPS: f64 = 1e-12;

fn apply(r: &Mat3, v: [f64; 3]) -> [f64; 3] {
    let mut out = [0.0; 3];
    for (i, o) in out.iter_mut().enumerate() {
        *o = r[i][0] * v[0] + r[i][1] * v[1] + r[i][2] * v[2];
    }
    out
}

fn assert_vec_close(a: [f64; 3], b: [f64; 3]) {
    for i in 0..3 {
        assert!((a[i] - b[i]).abs() < EPS, "{a:?} != {b:?}");
    }
}

fn rad(convention: EulerConvention) -> EulerOpts {
    EulerOpts {
        convention,
        unit: AngleUnit::Radians,
    }
}

#[test]
fn quarter_turn_about_each_axis_maps_basis_vectors() {
    let opts = EulerOpts::default();
    let rz = rotation_matrix([FRAC_PI_2, 0.0, 0.0], opts);
    assert_vec_close(apply(&rz, [1.0, 0.0, 0.0]), [0.0, 1.0, 0.0]);

    let ry = rotation_matrix([0.0, FRAC_PI_2, 0.0], opts);
    assert_vec_close(apply(&ry, [0.0, 0.0, 1.0]), [1.0, 0.0, 0.0]);

    let rx = rotation_matrix([0.0, 0.0, FRAC_PI_2], opts);
    assert_vec_close(apply(&rx, [0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]);
}

#[test]
fn zero_angles_give_identity() {
    for convention in [EulerConvention::Intrinsic, EulerConvention::Extrinsic] {
        assert_eq!(rotation_matrix([0.0; 3], rad(convention)), MAT3_IDENTITY);
    }
}

#[test]
fn intrinsic_applies_z_in_world_frame_last() {
    // Rz(90) · Ry(90): z -> x under Ry, then x -> y under Rz.
    let r = rotation_matrix([FRAC_PI_2, FRAC_PI_2, 0.0], rad(EulerConvention::Intrinsic));
    assert_vec_close(apply(&r, [0.0, 0.0, 1.0]), [0.0, 1.0, 0.0]);
}

#[test]
fn extrinsic_applies_z_in_world_frame_first() {
    // Ry(90) · Rz(90): z is fixed by Rz, then z -> x under Ry.
    let r = rotation_matrix([FRAC_PI_2, FRAC_PI_2, 0.0], rad(EulerConvention::Extrinsic));
    assert_vec_close(apply(&r, [0.0, 0.0, 1.0]), [1.0, 0.0, 0.0]);
}

#[test]
fn single_axis_rotation_is_convention_independent() {
    for zyx in [[0.3, 0.0, 0.0], [0.0, -1.1, 0.0], [0.0, 0.0, 2.5]] {
        let a = rotation_matrix(zyx, rad(EulerConvention::Intrinsic));
        let b = rotation_matrix(zyx, rad(EulerConvention::Extrinsic));
        assert_eq!(a, b);
    }
}

#[test]
fn degrees_match_radians() {
    let deg = EulerOpts {
        convention: EulerConvention::Intrinsic,
        unit: AngleUnit::Degrees,
    };
    let a = rotation_matrix([30.0, 45.0, 60.0], deg);
    let b = rotation_matrix(
        [30f64.to_radians(), 45f64.to_radians(), 60f64.to_radians()],
        rad(EulerConvention::Intrinsic),
    );
    assert_eq!(a, b);
}

#[test]
fn rotations_are_orthonormal() {
    let r = rotation_matrix([0.4, -0.7, 1.9], EulerOpts::default());
    let rt = [
        [r[0][0], r[1][0], r[2][0]],
        [r[0][1], r[1][1], r[2][1]],
        [r[0][2], r[1][2], r[2][2]],
    ];
    let p = mul3(&r, &rt);
    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert!((p[i][j] - expected).abs() < EPS);
        }
    }
}
