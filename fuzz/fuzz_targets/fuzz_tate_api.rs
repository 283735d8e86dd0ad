#![no_main]
use crypto_bigint::rand_core::OsRng;
use libfuzzer_sys::fuzz_target;
use tate::{
    g1_curve_point_at_x, g2_curve_point_at_x, reduced_pairing, Fp, Fr, G1Affine,
    G1Projective, G2Affine, G2Projective, GroupTrait, Gt,
};

fuzz_target!(|data: &[u8]| {
    if data.len() < 96 {
        return;
    }
    let mut buf = [0u8; 96];
    buf.copy_from_slice(&data[..96]);

    // arbitrary bytes either decode to a valid point or are rejected, never panic
    if let Ok(p) = G1Affine::from_compressed(&buf) {
        assert_eq!(
            G1Affine::from_compressed(&p.to_compressed()).ok(),
            Some(p),
            "G1 compressed encoding does not round trip"
        );
    }
    if let Ok(q) = G2Affine::from_compressed(&buf) {
        assert!(bool::from(q.is_torsion_free()), "decoded G2 point outside the subgroup");
    }

    // an x-coordinate from the input
    buf[0] &= 0x01;
    if let Some(x) = Option::<Fp>::from(Fp::from_be_bytes(&buf)) {
        if let Ok(p) = g1_curve_point_at_x(x) {
            assert!(bool::from(p.is_on_curve()), "G1 point at x is not on the curve");
        }
        if let Ok(q) = g2_curve_point_at_x(x) {
            assert!(bool::from(q.is_on_curve()), "G2 point at x is not on the curve");
        }
    }

    // group laws
    let a = G1Projective::rand(&mut OsRng);
    let b = G1Projective::rand(&mut OsRng);
    assert_eq!(a + b, b + a, "G1 addition is not commutative");
    assert_eq!(a.double(), a + a, "G1 doubling failed");

    let c = G2Projective::rand(&mut OsRng);
    let d = G2Projective::rand(&mut OsRng);
    assert_eq!(c + d, d + c, "G2 addition is not commutative");
    assert_eq!(c.double(), c + c, "G2 doubling failed");

    // bilinearity
    let s = Fr::rand(&mut OsRng);
    let e = reduced_pairing(&a, &c);
    assert_eq!(e * s, reduced_pairing(&(a * s), &c), "Pairing bilinearity property failed");
    assert_eq!(e * s, reduced_pairing(&a, &(c * s)), "Pairing bilinearity property failed");
    assert_ne!(e, Gt::identity(), "Pairing result should not be identity");
    assert_eq!(e * (-Fr::ONE) + e, Gt::identity(), "Pairing inverse property failed");
});
