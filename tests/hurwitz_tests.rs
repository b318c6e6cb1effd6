use qforms::{AlgebraError, Hurwitz, Quaternion};

#[test]
fn construction_requires_integral_components() {
    let ok = Quaternion::new(1.0, -2.0, 0.0, 7.0);
    assert_eq!(
        Hurwitz::try_from_quaternion(&ok).unwrap().components(),
        [1, -2, 0, 7]
    );
    let bad = Quaternion::new(1.0, 0.5, 0.0, 0.0);
    assert_eq!(
        Hurwitz::try_from_quaternion(&bad),
        Err(AlgebraError::NonIntegralComponent(0.5))
    );
}

#[test]
fn ring_arithmetic_stays_integral() {
    let a = Hurwitz::new(1, 2, 0, 3);
    let b = Hurwitz::new(2, 1, 3, 0);
    assert_eq!(a.try_add(&b).unwrap().components(), [3, 3, 3, 3]);
    assert_eq!(a.try_sub(&b).unwrap().components(), [-1, 1, -3, 3]);

    let p = Hurwitz::new(1, 2, 3, 4);
    let q = Hurwitz::new(3, -4, 0, 0);
    assert_eq!(p.try_mul(&q).unwrap().components(), [11, 2, -7, 24]);
}

#[test]
fn accessors_are_integer_valued() {
    let q = Hurwitz::new(1, 2, 3, 4);
    assert_eq!(q.norm(), 30);
    assert_eq!(q.trace(), 2);
    assert_eq!(q.conjugate().components(), [1, -2, -3, -4]);
    assert_eq!(Hurwitz::new(1, 3, 0, -2).norm(), 14);
}

#[test]
fn modular_reduction_is_componentwise_and_non_negative() {
    let q = Hurwitz::new(10, 23, 3, 4);
    assert_eq!(q.rem(3).components(), [1, 2, 0, 1]);
    assert_eq!(Hurwitz::new(-1, -7, 5, 0).rem(3).components(), [2, 2, 2, 0]);
}

#[test]
fn modular_inverse() {
    // 13 is prime and does not divide norm = 8
    let q = Hurwitz::new(0, -2, -2, 0);
    let inv = q.inverse_mod(13).unwrap();
    assert_eq!(inv.components(), [0, 10, 10, 0]);
    let product = q.try_mul(&inv).unwrap().rem(13);
    assert_eq!(product.components(), [1, 0, 0, 0]);
}

#[test]
fn modular_inverse_over_random_primes() {
    let q = Hurwitz::new(1, 2, 3, 4); // norm 30
    for p in [7i64, 11, 13, 17, 19, 23] {
        let inv = q.inverse_mod(p).unwrap();
        assert_eq!(
            q.try_mul(&inv).unwrap().rem(p).components(),
            [1, 0, 0, 0],
            "inverse mod {p}"
        );
    }
}

#[test]
fn modulus_dividing_the_norm_is_rejected() {
    let q = Hurwitz::new(1, 2, 3, 4); // norm 30
    assert_eq!(q.inverse_mod(5), Err(AlgebraError::NotInvertible));
    assert_eq!(q.inverse_mod(3), Err(AlgebraError::NotInvertible));
    assert_eq!(Hurwitz::zero().inverse_mod(13), Err(AlgebraError::NotInvertible));
}

#[test]
fn plain_inverse_leaves_the_ring() {
    let q = Hurwitz::new(1, 0, 1, 0);
    assert_eq!(q.inverse(), Err(AlgebraError::NotSupportedForHurwitz));
}

#[test]
fn powers_with_optional_modular_reduction() {
    let q: Hurwitz = "1+1i+1k".parse().unwrap();
    assert_eq!(q.pow(2, None).unwrap().components(), [-1, 2, 0, 2]);
    assert_eq!(q.pow(2, Some(3)).unwrap().components(), [2, 2, 0, 2]);
    assert_eq!(q.pow(0, None).unwrap(), Hurwitz::one());
}

#[test]
fn literal_round_trip() {
    let q: Hurwitz = "1+1i+3j-2k".parse().unwrap();
    assert_eq!(q.components(), [1, 1, 3, -2]);
    assert_eq!(q.to_string(), "1+1i+3j-2k");
    assert!(matches!(
        "1+0.5i".parse::<Hurwitz>(),
        Err(AlgebraError::NonIntegralComponent(_))
    ));
    assert_eq!(Hurwitz::zero().to_string(), "0");
}
