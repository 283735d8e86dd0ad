//! The scalar field of BW6-761, which is the order $r$ of G1, G2 and GT. This is the same prime
//! as the base field of BLS12-377, the inner curve that BW6-761 is built to verify. Scalars are
//! 377 bits and are carried in six limbs.

use crate::fields::fp::define_finite_prime_field;
use crypto_bigint::U384;

const BW6_761_ORDER_STRING: &str = "01ae3a4617c510eac63b05c06ca1493b1a22d9f300f5138f1ef3622fba094800170b5d44300000008508c00000000001";

// -5 is the smallest quadratic non-residue modulo r
define_finite_prime_field!(Fr, U384, BW6_761_ORDER_STRING, 1, 1, -Fr::from(5u64));
