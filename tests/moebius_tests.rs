use qforms::{AlgebraError, ProjectivePoint, Quaternion, cross_ratio, moebius};

fn q(w: f64, x: f64, y: f64, z: f64) -> Quaternion {
    Quaternion::new(w, x, y, z)
}

fn finite(point: &ProjectivePoint) -> &Quaternion {
    point.finite().expect("expected a finite value")
}

#[test]
fn cross_ratio_of_a_harmonic_tuple() {
    let a = q(1.0, 0.0, 1.0, 0.0);
    let b = q(0.0, 1.0, 0.0, 1.0);
    let c = q(-1.0, 0.0, -1.0, 0.0);
    let d = q(0.0, -1.0, 0.0, -1.0);
    let value = cross_ratio(&a, &b, &c, &d).unwrap();
    assert!(finite(&value).approx_eq(&q(2.0, 0.0, 0.0, 0.0), 1e-12));
}

#[test]
fn cross_ratio_degenerate_tiers() {
    let a = q(1.0, 0.0, 1.0, 0.0);
    let b = q(0.0, 1.0, 0.0, 1.0);
    let d = q(0.0, -1.0, 0.0, -1.0);

    // repeated third point: (q1-q4)(q2-q3) = 0 while (q1-q3)(q2-q4) != 0
    assert_eq!(
        cross_ratio(&a, &b, &b, &d).unwrap(),
        ProjectivePoint::Infinity
    );

    // both products vanish: the multiplicative identity
    let both = cross_ratio(&a, &a, &a, &d).unwrap();
    assert!(finite(&both).approx_eq(&Quaternion::one(), 1e-12));

    // coincident pairs give zero
    let zero = cross_ratio(&a, &b, &a, &b).unwrap();
    assert!(finite(&zero).approx_eq(&Quaternion::zero(), 1e-12));
}

#[test]
fn moebius_transformation_of_a_finite_point() {
    let a = q(1.0, 1.0, 1.0, 0.0);
    let b = q(-2.0, 1.0, 0.0, 1.0);
    let c = q(1.0, 0.0, 0.0, 0.0);
    let d = q(0.0, -1.0, -3.0, -4.0);
    let z = ProjectivePoint::Finite(q(1.0, 1.0, 3.0, 4.0));
    let image = moebius(&z, &a, &b, &c, &d).unwrap();
    assert!(finite(&image).approx_eq(&q(-5.0, 7.0, 0.0, 7.0), 1e-12));
}

#[test]
fn moebius_sends_a_pole_to_infinity_and_back() {
    let a = q(1.0, 1.0, 1.0, 0.0);
    let b = q(-2.0, 1.0, 0.0, 1.0);
    let c = q(1.0, 0.0, 0.0, 0.0);
    let z = q(1.0, 1.0, 3.0, 4.0);
    // d = -z makes c·z + d vanish
    let d = -&z;
    let image = moebius(&ProjectivePoint::Finite(z), &a, &b, &c, &d).unwrap();
    assert_eq!(image, ProjectivePoint::Infinity);

    // infinity maps to a·c⁻¹ = a
    let back = moebius(&image, &a, &b, &c, &d).unwrap();
    assert!(finite(&back).approx_eq(&a, 1e-12));
}

#[test]
fn infinity_with_non_invertible_c_stays_at_infinity() {
    let a = q(1.0, 1.0, 1.0, 0.0);
    let b = q(0.0, 1.0, 0.0, 0.0);
    let c = Quaternion::zero();
    let d = q(1.0, 0.0, 0.0, 0.0);
    assert_eq!(
        moebius(&ProjectivePoint::Infinity, &a, &b, &c, &d).unwrap(),
        ProjectivePoint::Infinity
    );
}

#[test]
fn degenerate_parameters_are_rejected() {
    let a = q(1.0, 2.0, 0.0, 0.0);
    let b = q(2.0, 4.0, 0.0, 0.0);
    let c = Quaternion::one();
    let d = q(2.0, 0.0, 0.0, 0.0);
    // a·d = b·c, so this is not a Moebius transformation
    assert_eq!(
        moebius(&ProjectivePoint::Finite(q(0.0, 1.0, 0.0, 0.0)), &a, &b, &c, &d),
        Err(AlgebraError::NotAMoebiusTransform)
    );
    assert_eq!(
        cross_ratio(&a, &a, &a, &a).unwrap(),
        ProjectivePoint::Finite(Quaternion::one())
    );
}
