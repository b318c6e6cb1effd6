use approx::assert_relative_eq;
use nalgebra::{Matrix3, Vector3};
use num_complex::Complex;
use qforms::{
    AlgebraError, Quaternion, euler_to_quaternion, matrix_to_euler, quaternion_to_rotation,
    rotation_to_quaternion,
};

fn assert_matrix_eq(a: &Matrix3<f64>, b: &Matrix3<f64>, tolerance: f64) {
    for i in 0..3 {
        for j in 0..3 {
            assert_relative_eq!(a[(i, j)], b[(i, j)], epsilon = tolerance);
        }
    }
}

/// Up to global sign: q and -q encode the same rotation.
fn assert_same_rotation(a: &Quaternion, b: &Quaternion, tolerance: f64) {
    assert!(
        a.approx_eq(b, tolerance) || a.approx_eq(&-b, tolerance),
        "{a} and {b} differ as rotations"
    );
}

#[test]
fn non_unit_quaternion_is_rejected() {
    let q = Quaternion::from_complex(Complex::new(3.0, -4.0));
    assert_eq!(q.to_rotation_matrix(), Err(AlgebraError::NotUnitary));
}

#[test]
fn unit_complex_rotation_matrix() {
    let q = Quaternion::from_complex(Complex::new(3.0, -4.0))
        .unitary()
        .unwrap();
    let m = q.to_rotation_matrix().unwrap();
    let expected = Matrix3::new(
        1.0, 0.0, 0.0, //
        0.0, -0.28, 0.96, //
        0.0, -0.96, -0.28,
    );
    assert_matrix_eq(&m, &expected, 1e-12);
    assert_same_rotation(&rotation_to_quaternion(&m).unwrap(), &q, 1e-12);
}

#[test]
fn axis_angle_matches_hand_encoding() {
    let angle = 1.2f64;
    let q = Quaternion::from_axis_angle(angle, &Vector3::new(0.0, 0.0, 1.0));
    assert_relative_eq!(q.w(), (angle / 2.0).cos(), epsilon = 1e-15);
    assert_relative_eq!(q.z(), (angle / 2.0).sin(), epsilon = 1e-15);
    let m = q.to_rotation_matrix().unwrap();
    assert_relative_eq!(m[(0, 0)], angle.cos(), epsilon = 1e-12);
    assert_relative_eq!(m[(1, 0)], angle.sin(), epsilon = 1e-12);
}

#[test]
fn shepperd_round_trip_all_branches() {
    // trace > 0, then each diagonal entry dominant in turn
    let samples = [
        Quaternion::new(0.9, 0.1, -0.2, 0.3).unitary().unwrap(),
        Quaternion::new(0.05, 0.95, 0.2, -0.1).unitary().unwrap(),
        Quaternion::new(0.05, 0.1, -0.9, 0.3).unitary().unwrap(),
        Quaternion::new(0.05, -0.2, 0.1, 0.95).unitary().unwrap(),
        Quaternion::new(0.0, 1.0, 0.0, 0.0),
        Quaternion::new(0.0, 0.0, 1.0, 0.0),
        Quaternion::new(0.0, 0.0, 0.0, 1.0),
        Quaternion::new(1.0, 0.0, 0.0, 0.0),
    ];
    for q in samples {
        let m = quaternion_to_rotation(&q).unwrap();
        let back = rotation_to_quaternion(&m).unwrap();
        assert_relative_eq!(back.norm(), 1.0, epsilon = 1e-9);
        assert_same_rotation(&back, &q, 1e-9);
    }
}

#[test]
fn half_turns_pick_the_stable_branch() {
    // 180-degree turns have trace -1; each must come back through the
    // branch keyed on its own dominant diagonal entry.
    let x_turn = Matrix3::new(1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, -1.0);
    let y_turn = Matrix3::new(-1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0);
    let z_turn = Matrix3::new(-1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0);
    for (m, expected) in [
        (x_turn, Quaternion::new(0.0, 1.0, 0.0, 0.0)),
        (y_turn, Quaternion::new(0.0, 0.0, 1.0, 0.0)),
        (z_turn, Quaternion::new(0.0, 0.0, 0.0, 1.0)),
    ] {
        assert_same_rotation(&rotation_to_quaternion(&m).unwrap(), &expected, 1e-12);
    }
}

#[test]
fn shepperd_rejects_non_orthogonal_input() {
    let m = Matrix3::new(1.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 1.0);
    assert_eq!(rotation_to_quaternion(&m), Err(AlgebraError::NotOrthogonal));
    assert_eq!(matrix_to_euler(&m), Err(AlgebraError::NotOrthogonal));
}

#[test]
fn euler_round_trip() {
    let angles = [0.3, -0.4, 1.2];
    let q = euler_to_quaternion(angles);
    assert_relative_eq!(q.norm(), 1.0, epsilon = 1e-12);
    let recovered = matrix_to_euler(&q.to_rotation_matrix().unwrap()).unwrap();
    for (got, want) in recovered.into_iter().zip(angles) {
        assert_relative_eq!(got, want, epsilon = 1e-9);
    }
}

#[test]
fn construction_from_matrix_decodes_via_euler() {
    let q = euler_to_quaternion([0.7, 0.1, -0.4]);
    let m = q.to_rotation_matrix().unwrap();
    let rebuilt = Quaternion::from_rotation_matrix(&m).unwrap();
    assert_same_rotation(&rebuilt, &q, 1e-9);
}

#[test]
fn gimbal_lock_recovers_a_single_angle() {
    use core::f64::consts::FRAC_PI_2;
    for pitch in [FRAC_PI_2, -FRAC_PI_2] {
        let q = euler_to_quaternion([0.4, pitch, -0.9]);
        let m = q.to_rotation_matrix().unwrap();
        let [yaw, recovered_pitch, roll] = matrix_to_euler(&m).unwrap();
        // yaw is pinned; the combined rotation must still match
        assert_eq!(yaw, 0.0);
        assert_relative_eq!(recovered_pitch, pitch, epsilon = 1e-6);
        let rebuilt = euler_to_quaternion([yaw, recovered_pitch, roll])
            .to_rotation_matrix()
            .unwrap();
        assert_matrix_eq(&rebuilt, &m, 1e-6);
    }
}
