//! The optimal ate pairing on BW6-761.
//!
//! For BW6-761 the optimal ate pairing of Aranha, El Housni and Guillevic,
//! <https://eprint.iacr.org/2020/351>, is a product of two Miller functions,
//! $$e(P, Q) = \left(f_{u+1,Q}(P) \cdot f_{u^3-u^2-u,Q}(P)^{q}\right)^{(q^6-1)/r}$$
//! evaluated on $P\in\mathbb{G}_1$ and $Q\in\mathbb{G}_2$, where both groups live over the base
//! field and $\mathbb{G}_2$ sits on the M-twist. The work splits in three:
//!
//! 1. the precomputation walks the two loop counts over $Q$ alone and records the coefficients
//!    of every line function, so that a fixed $Q$ can be paired with many $P$ cheaply;
//! 2. the Miller loop replays those coefficients against $P$, accumulating in
//!    $\mathbb{F}_{q^6}$ with the sparse `mul_by_014`;
//! 3. the final exponentiation maps the result into $\mathbb{G}_T$.
//!
//! Every constant the three stages need comes from a [`PairingParams`], and the precomputed
//! $\mathbb{G}_2$ data remembers which one it was built with.

use crate::fields::fp::Fp;
use crate::fields::fp6::Fp6;
use crate::groups::g1::{G1Affine, G1Projective};
use crate::groups::g2::{G2Affine, G2Config, G2Projective};
use crate::groups::group::{CurveConfig, GroupTrait};
use crate::groups::gt::Gt;
use crate::params::{PairingParams, TwistType, BW6_761};
use crypto_bigint::U768;
use num_traits::{Inv, One, Zero};
use std::marker::PhantomData;
use std::ops::{Add, AddAssign};

/// $2^{-1} \bmod q$, used to halve in the doubling step
const TWO_INV: Fp = Fp::new(U768::from_words([
    0x7a4e800000000046,
    0xf3489f3438000041,
    0x0b067c577578521b,
    0x4c508b612b33d47c,
    0x38ee69ee39f5ff97,
    0x4344e476897cfec8,
    0x81e75d7f92da1182,
    0xb83dd31c72c2748c,
    0x29413af7c043df20,
    0x5c930c3540e8a344,
    0x68c3e4a0027d7f9f,
    0x009174127dc1e705,
]));

/// Failures of the pairing engine. None of them can be triggered by valid group elements paired
/// with the built-in parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PairingError {
    #[error("precomputations built from different pairing parameters")]
    ParameterMismatch,
    #[error("line evaluation is only implemented for the M-twist")]
    UnsupportedTwist,
    #[error("zero has no image under the final exponentiation")]
    NonInvertible,
}

/// The output of the Miller loop, before the final exponentiation. As with `Gt`, the group law
/// is written additively, so that `+` multiplies the underlying field elements.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MillerLoopResult(pub(crate) Fp6);
impl Default for MillerLoopResult {
    fn default() -> Self {
        MillerLoopResult(Fp6::one())
    }
}
#[allow(clippy::suspicious_arithmetic_impl)]
impl<'a, 'b> Add<&'b MillerLoopResult> for &'a MillerLoopResult {
    type Output = MillerLoopResult;

    #[inline]
    fn add(self, rhs: &'b MillerLoopResult) -> MillerLoopResult {
        MillerLoopResult(self.0 * rhs.0)
    }
}
impl Add<MillerLoopResult> for MillerLoopResult {
    type Output = MillerLoopResult;

    #[inline]
    fn add(self, rhs: MillerLoopResult) -> MillerLoopResult {
        &self + &rhs
    }
}

impl AddAssign<MillerLoopResult> for MillerLoopResult {
    #[inline]
    fn add_assign(&mut self, rhs: MillerLoopResult) {
        *self = *self + rhs;
    }
}

impl<'b> AddAssign<&'b MillerLoopResult> for MillerLoopResult {
    #[inline]
    fn add_assign(&mut self, rhs: &'b MillerLoopResult) {
        *self = *self + *rhs;
    }
}

impl Zero for MillerLoopResult {
    fn zero() -> Self {
        MillerLoopResult(Fp6::zero())
    }
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

/// A line function of the M-twist evaluated at $P=(x_P, y_P)$ has only three nonzero
/// coefficients, $\ell_0$, $\ell_{vv} x_P$ and $\ell_{vw} y_P$. Only the parts that do not depend
/// on $P$ are stored, which is what makes the precomputation reusable.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EllCoeffs {
    pub ell_0: Fp,
    pub ell_vv: Fp,
    pub ell_vw: Fp,
}

/// The affine coordinates of $P$, or a marker that $P$ is the identity.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct G1PreComputed {
    pub x: Fp,
    pub y: Fp,
    pub infinity: bool,
}

/// Everything the Miller loop needs from $Q$: the line coefficients of both loops, in the order
/// they are consumed, the accumulators the loops ended on, and the parameters that produced them.
#[derive(Clone, Debug, PartialEq)]
pub struct G2PreComputed {
    pub q: G2Affine,
    pub infinity: bool,
    pub coeffs_1: Vec<EllCoeffs>,
    pub coeffs_2: Vec<EllCoeffs>,
    pub r_1: G2Projective,
    pub r_2: G2Projective,
    pub params: &'static PairingParams,
}

impl MillerLoopResult {
    /// The infallible form of [`final_exponentiation`], where zero maps to zero. A Miller loop
    /// over valid inputs never produces zero.
    pub fn final_exponentiation(&self) -> Gt {
        Gt(hard_part(easy_part(self.0), &BW6_761))
    }
    pub fn value(&self) -> Fp6 {
        self.0
    }
}

/// Raises to $(q^3-1)(q+1)$, which lands in the cyclotomic subgroup where inversion is
/// conjugation. This is where a zero input stays zero, since the inverse of zero is zero.
fn easy_part(f: Fp6) -> Fp6 {
    let f = f.frobenius(3) * f.inv();
    f.frobenius(1) * f
}

/// $f^u$ on the cyclotomic subgroup
fn exp_by_z(f: &Fp6, params: &PairingParams) -> Fp6 {
    let res = f.cyclotomic_exp(params.final_exponent_z.as_words());
    match params.final_exponent_z_is_neg {
        true => res.unitary_inverse(),
        false => res,
    }
}

/// The hard part of the final exponentiation, Algorithm 6 of
/// <https://eprint.iacr.org/2020/351.pdf> as implemented in libff. It raises to
/// $3(u^3-u^2+1)\cdot\Phi_6(q)/r$ rather than to $\Phi_6(q)/r$ itself: the extra factor is
/// coprime to $r$, so the resulting pairing is still bilinear and non-degenerate, and the
/// addition chain is much shorter.
fn hard_part(f: Fp6, params: &PairingParams) -> Fp6 {
    let f0 = f;
    let f0p = f0.frobenius(1);
    let f1 = exp_by_z(&f0, params);
    let f1p = f1.frobenius(1);
    let f2 = exp_by_z(&f1, params);
    let f2p = f2.frobenius(1);
    let f3 = exp_by_z(&f2, params);
    let f3p = f3.frobenius(1);
    let f4 = exp_by_z(&f3, params);
    let f4p = f4.frobenius(1);
    let f5 = exp_by_z(&f4, params);
    let f5p = f5.frobenius(1);
    let f6 = exp_by_z(&f5, params);
    let f6p = f6.frobenius(1);
    let f7 = exp_by_z(&f6, params);
    let f7p = f7.frobenius(1);
    let f8p = exp_by_z(&f7p, params);
    let f9p = exp_by_z(&f8p, params);

    let result1 = f3p * f6p * f5p.frobenius(3);
    let result2 = result1.cyclotomic_square();

    let f4_2p = f4 * f2p;
    let tmp1_p3 = (f0 * f1 * f3 * f4_2p * f8p).frobenius(3);
    let result3 = result2 * f5 * f0p * tmp1_p3;
    let result4 = result3.cyclotomic_square();

    let result5 = result4 * f9p * f7.frobenius(3);
    let result6 = result5.cyclotomic_square();

    let f2_4p = f2 * f4p;
    let f4_2p_5p = f4_2p * f5p;
    let tmp2_p3 = (f2_4p * f3 * f3p).frobenius(3);
    let result7 = result6 * f4_2p_5p * f6 * f7p * tmp2_p3;
    let result8 = result7.cyclotomic_square();

    let tmp3_p3 = (f0p * f9p).frobenius(3);
    let result9 = result8 * f0 * f7 * f1p * tmp3_p3;
    let result10 = result9.cyclotomic_square();

    let f6p_8p = f6p * f8p;
    let f5_7p = f5 * f7p;
    let tmp4_p3 = f6p_8p.frobenius(3);
    let result11 = result10 * f5_7p * f2p * tmp4_p3;
    let result12 = result11.cyclotomic_square();

    let f3_6 = f3 * f6;
    let f1_7 = f1 * f7;
    let tmp5_p3 = (f1_7 * f2).frobenius(3);
    let result13 = result12 * f3_6 * f9p * tmp5_p3;
    let result14 = result13.cyclotomic_square();

    let tmp6_p3 = (f4_2p * f5_7p * f6p_8p).frobenius(3);
    let result15 = result14 * f0 * f0p * f3p * f5p * tmp6_p3;
    let result16 = result15.cyclotomic_square();

    let tmp7_p3 = f3_6.frobenius(3);
    let result17 = result16 * f1p * tmp7_p3;
    let result18 = result17.cyclotomic_square();

    let tmp8_p3 = (f2_4p * f4_2p_5p * f9p).frobenius(3);
    result18 * f1_7 * f5_7p * f0p * tmp8_p3
}

/// Maps a Miller loop output into $\mathbb{G}_T$. Zero is the one input with no image.
pub fn final_exponentiation(f: &MillerLoopResult) -> Result<Gt, PairingError> {
    if f.is_zero() {
        tracing::debug!("final_exponentiation of zero");
        return Err(PairingError::NonInvertible);
    }
    Ok(f.final_exponentiation())
}

/// The tangent at $R$, and $R$ doubled in place. The formulas are those of
/// <https://eprint.iacr.org/2013/722.pdf>, Section 4.3, for homogeneous projective coordinates
/// on a curve with $a = 0$.
fn doubling_step(r: &mut G2Projective) -> EllCoeffs {
    let a = (r.x * r.y) * TWO_INV;
    let b = r.y.square();
    let c = r.z.square();
    let e = G2Config::b() * (c.double() + c);
    let f = e.double() + e;
    let g = (b + f) * TWO_INV;
    let h = (r.y + r.z).square() - (b + c);
    let i = e - b;
    let j = r.x.square();
    let e_sq = e.square();

    r.x = a * (b - f);
    r.y = g.square() - (e_sq.double() + e_sq);
    r.z = b * h;

    EllCoeffs {
        ell_0: i,
        ell_vv: j.double() + j,
        ell_vw: -h,
    }
}

/// The chord through $R$ and the affine $Q$, and $R + Q$ in place.
fn addition_step(r: &mut G2Projective, q: &G2Affine) -> EllCoeffs {
    let theta = r.y - q.y * r.z;
    let lambda = r.x - q.x * r.z;
    let c = theta.square();
    let d = lambda.square();
    let e = lambda * d;
    let f = r.z * c;
    let g = r.x * d;
    let h = e + f - g.double();

    r.x = lambda * h;
    r.y = theta * (g - h) - e * r.y;
    r.z *= e;

    EllCoeffs {
        ell_0: theta * q.x - lambda * q.y,
        ell_vv: -theta,
        ell_vw: lambda,
    }
}

/// Walks one loop count from its most significant digit down, skipping the top digit, and
/// records a tangent per digit and a chord per nonzero digit.
fn precompute_loop(q: &G2Affine, digits: &[i8]) -> (Vec<EllCoeffs>, G2Projective) {
    let neg_q = -*q;
    let mut r = G2Projective {
        x: q.x,
        y: q.y,
        z: Fp::ONE,
        _config: PhantomData,
    };
    let nonzero = digits.iter().filter(|d| **d != 0).count();
    let mut coeffs = Vec::with_capacity(digits.len() + nonzero);
    for digit in digits.iter().rev().skip(1) {
        coeffs.push(doubling_step(&mut r));
        match digit {
            1 => coeffs.push(addition_step(&mut r, q)),
            -1 => coeffs.push(addition_step(&mut r, &neg_q)),
            _ => {}
        }
    }
    (coeffs, r)
}

pub fn precompute_g1(p: &G1Projective) -> G1PreComputed {
    let affine = G1Affine::from(p);
    let res = G1PreComputed {
        x: affine.x(),
        y: affine.y(),
        infinity: affine.is_zero(),
    };
    tracing::debug!(?res.infinity, "precompute_g1");
    res
}

/// Records the line coefficients of both Miller loops for a fixed $Q$. The identity is
/// precomputed as the generator with the identity marker set, so that the number of
/// coefficients never depends on the input.
pub fn precompute_g2(
    q: &G2Projective,
    params: &'static PairingParams,
) -> Result<G2PreComputed, PairingError> {
    if params.twist_type != TwistType::M {
        tracing::debug!(?params.twist_type, "precompute_g2");
        return Err(PairingError::UnsupportedTwist);
    }
    Ok(precompute_m_twist(q, params))
}

/// The body of [`precompute_g2`], for parameters already known to use the M-twist.
fn precompute_m_twist(q: &G2Projective, params: &'static PairingParams) -> G2PreComputed {
    let affine = G2Affine::from(q);
    let infinity = affine.is_zero();
    let base = match infinity {
        true => G2Affine::generator(),
        false => affine,
    };
    let digits = params.loop_digits();
    let (coeffs_1, r_1) = precompute_loop(&base, &digits.loop_1);
    let (coeffs_2, r_2) = precompute_loop(&base, &digits.loop_2);
    tracing::debug!(
        infinity,
        coeffs_1 = coeffs_1.len(),
        coeffs_2 = coeffs_2.len(),
        "precompute_g2"
    );
    G2PreComputed {
        q: affine,
        infinity,
        coeffs_1,
        coeffs_2,
        r_1,
        r_2,
        params,
    }
}

/// One loop over any number of pairs, sharing the squarings of the accumulator.
fn run_loop(
    pairs: &[(&G1PreComputed, &[EllCoeffs])],
    digits: &[i8],
    is_neg: bool,
) -> Fp6 {
    let mut f = Fp6::one();
    let mut idx = 0;
    for digit in digits.iter().rev().skip(1) {
        f = f.square();
        for (p, coeffs) in pairs {
            let c = &coeffs[idx];
            f = f.mul_by_014(c.ell_0, c.ell_vv * p.x, c.ell_vw * p.y);
        }
        idx += 1;
        if *digit != 0 {
            for (p, coeffs) in pairs {
                let c = &coeffs[idx];
                f = f.mul_by_014(c.ell_0, c.ell_vv * p.x, c.ell_vw * p.y);
            }
            idx += 1;
        }
    }
    tracing::trace!(lines = idx, pairs = pairs.len(), "run_loop");
    match is_neg {
        true => f.unitary_inverse(),
        false => f,
    }
}

/// The shared body of every Miller loop. Pairs with an identity on either side contribute $1$
/// and are dropped up front.
fn multi_miller_loop(
    pairs: &[(&G1PreComputed, &G2PreComputed)],
    params: &PairingParams,
) -> MillerLoopResult {
    let live: Vec<_> = pairs
        .iter()
        .filter(|(p, q)| !p.infinity && !q.infinity)
        .collect();
    if live.is_empty() {
        return MillerLoopResult::default();
    }
    let digits = params.loop_digits();
    let first: Vec<_> = live.iter().map(|(p, q)| (*p, q.coeffs_1.as_slice())).collect();
    let second: Vec<_> = live.iter().map(|(p, q)| (*p, q.coeffs_2.as_slice())).collect();
    let f1 = run_loop(&first, &digits.loop_1, params.ate_loop_count_1_is_neg);
    let f2 = run_loop(&second, &digits.loop_2, params.ate_loop_count_2_is_neg);
    MillerLoopResult(f1 * f2.frobenius(1))
}

/// $f_{u+1,Q}(P)\cdot f_{u^3-u^2-u,Q}(P)^q$, unexponentiated
pub fn miller_loop(p: &G1PreComputed, q: &G2PreComputed) -> MillerLoopResult {
    multi_miller_loop(&[(p, q)], q.params)
}

/// The product of two Miller loops computed in one pass. Both precomputations must come from
/// the same parameters.
pub fn double_miller_loop(
    p1: &G1PreComputed,
    q1: &G2PreComputed,
    p2: &G1PreComputed,
    q2: &G2PreComputed,
) -> Result<MillerLoopResult, PairingError> {
    if q1.params != q2.params {
        tracing::debug!(?q1.params, ?q2.params, "double_miller_loop");
        return Err(PairingError::ParameterMismatch);
    }
    Ok(multi_miller_loop(&[(p1, q1), (p2, q2)], q1.params))
}

/// The product of any number of Miller loops computed in one pass, which is the way to check a
/// product of pairings against the identity with a single final exponentiation.
///
/// ```
/// use tate::*;
/// let p = G1Projective::generator();
/// let q = G2Projective::generator();
/// let pairs = [
///     (precompute_g1(&p), precompute_g2(&q, &BW6_761).unwrap()),
///     (precompute_g1(&-p), precompute_g2(&q, &BW6_761).unwrap()),
/// ];
/// let f = glued_miller_loop(&pairs).unwrap();
/// assert!(f.final_exponentiation().is_identity());
/// ```
pub fn glued_miller_loop(
    pairs: &[(G1PreComputed, G2PreComputed)],
) -> Result<MillerLoopResult, PairingError> {
    let Some((_, first)) = pairs.first() else {
        return Ok(MillerLoopResult::default());
    };
    if pairs.iter().any(|(_, q)| q.params != first.params) {
        return Err(PairingError::ParameterMismatch);
    }
    let refs: Vec<_> = pairs.iter().map(|(p, q)| (p, q)).collect();
    Ok(multi_miller_loop(&refs, first.params))
}

/// The Miller loop of $P$ and $Q$ under the BW6-761 parameters, without the final
/// exponentiation.
pub fn pairing(p: &G1Projective, q: &G2Projective) -> MillerLoopResult {
    // BW6_761 is an M-twist, which the params tests pin down
    miller_loop(&precompute_g1(p), &precompute_m_twist(q, &BW6_761))
}

/// The full pairing $e(P, Q)\in\mathbb{G}_T$.
/// ```
/// use tate::*;
/// let p = G1Projective::generator();
/// let q = G2Projective::generator();
/// assert_eq!(reduced_pairing(&p, &q), Gt::generator());
/// ```
pub fn reduced_pairing(p: &G1Projective, q: &G2Projective) -> Gt {
    pairing(p, q).final_exponentiation()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::fp3::Fp3;
    use crate::fields::fr::Fr;
    use crypto_bigint::rand_core::OsRng;
    use crypto_bigint::U256;
    use lazy_static::lazy_static;
    use serde::{Deserialize, Serialize};
    use std::fs;

    const FNAME: &str = "./src/bw6_761_reference.json";

    #[derive(Serialize, Deserialize, Clone, Debug)]
    struct _Point {
        x: String,
        y: String,
        z: String,
    }
    #[derive(Serialize, Deserialize, Clone, Debug)]
    struct _PairingData {
        p: Vec<_Point>,
        q: Vec<_Point>,
        e: Vec<Vec<String>>,
    }
    #[derive(Serialize, Deserialize, Clone, Debug)]
    struct _Reference {
        pairing: _PairingData,
    }
    struct PairingCase {
        p: G1Projective,
        q: G2Projective,
        e: Gt,
    }

    fn fp(s: &str) -> Fp {
        Fp::new_from_str(s).expect("cannot parse reference value")
    }
    fn fp6(v: &[String]) -> Fp6 {
        Fp6::new(&[
            Fp3::new(&[fp(&v[0]), fp(&v[1]), fp(&v[2])]),
            Fp3::new(&[fp(&v[3]), fp(&v[4]), fp(&v[5])]),
        ])
    }
    fn load_cases() -> Vec<PairingCase> {
        let data = fs::read_to_string(FNAME).expect("Unable to read file");
        let reference: _Reference = serde_json::from_str(&data).expect("Unable to parse JSON");
        let d = reference.pairing;
        d.p.iter()
            .zip(d.q.iter())
            .zip(d.e.iter())
            .map(|((p, q), e)| PairingCase {
                p: G1Projective::new_subgroup_checked([fp(&p.x), fp(&p.y), fp(&p.z)])
                    .expect("reference point is not in G1"),
                q: G2Projective::new([fp(&q.x), fp(&q.y), fp(&q.z)])
                    .expect("reference point is not in G2"),
                e: Gt(fp6(e)),
            })
            .collect()
    }
    lazy_static! {
        static ref CASES: Vec<PairingCase> = load_cases();
    }

    static OTHER_LOOP: PairingParams = PairingParams {
        ate_loop_count_1: U256::from_words([0x8508c00000000003, 0, 0, 0]),
        ..BW6_761
    };
    static D_TWIST: PairingParams = PairingParams {
        twist_type: TwistType::D,
        ..BW6_761
    };

    mod precomputation {
        use super::*;
        #[test]
        fn test_coefficient_counts() {
            let q = precompute_g2(&G2Projective::generator(), &BW6_761).expect("precompute");
            assert_eq!(q.coeffs_1.len(), 69, "wrong number of lines in the first loop");
            assert_eq!(q.coeffs_2.len(), 219, "wrong number of lines in the second loop");
            let r = precompute_g2(&G2Projective::rand(&mut OsRng), &BW6_761).expect("precompute");
            assert_eq!(r.coeffs_1.len(), 69, "coefficient count depends on the input");
            assert_eq!(r.coeffs_2.len(), 219, "coefficient count depends on the input");
            let z = precompute_g2(&G2Projective::zero(), &BW6_761).expect("precompute");
            assert!(z.infinity, "identity marker not set");
            assert_eq!(z.coeffs_1.len(), 69, "coefficient count depends on the input");
        }
        #[test]
        fn test_accumulators() {
            // the loops end on [u + 1]Q and [u^3 - u^2 - u]Q
            let g = G2Projective::generator();
            let pre = precompute_g2(&g, &BW6_761).expect("precompute");
            let u = Fr::from(0x8508c00000000001u64);
            assert_eq!(pre.r_1, g * (u + Fr::ONE), "first accumulator");
            assert_eq!(pre.r_2, g * (u * u * u - u * u - u), "second accumulator");
        }
        #[test]
        fn test_g1() {
            let p = precompute_g1(&G1Projective::generator());
            let g = G1Affine::generator();
            assert!(!p.infinity);
            assert_eq!((p.x, p.y), (g.x(), g.y()), "affine coordinates not stored");
            assert!(precompute_g1(&G1Projective::zero()).infinity);
        }
        #[test]
        fn test_unsupported_twist() {
            assert_eq!(
                precompute_g2(&G2Projective::generator(), &D_TWIST).err(),
                Some(PairingError::UnsupportedTwist)
            );
        }
        #[test]
        fn test_pairing_matches_checked_precompute() {
            assert_eq!(BW6_761.twist_type, TwistType::M, "built-in params must be an M-twist");
            let p = G1Projective::rand(&mut OsRng);
            let q = G2Projective::rand(&mut OsRng);
            let checked = precompute_g2(&q, &BW6_761).expect("M-twist");
            assert_eq!(
                pairing(&p, &q),
                miller_loop(&precompute_g1(&p), &checked),
                "pairing and the checked precomputation disagree"
            );
        }
    }
    mod miller_tests {
        use super::*;
        #[test]
        fn test_identities() {
            let g1 = G1Projective::generator();
            let g2 = G2Projective::generator();
            assert_eq!(pairing(&G1Projective::zero(), &g2), MillerLoopResult::default());
            assert_eq!(pairing(&g1, &G2Projective::zero()), MillerLoopResult::default());
            assert!(reduced_pairing(&G1Projective::zero(), &g2).is_identity());
            assert!(reduced_pairing(&g1, &G2Projective::zero()).is_identity());
            assert_ne!(reduced_pairing(&g1, &g2), reduced_pairing(&-g1, &g2));
        }
        #[test]
        fn test_generators() {
            let f = pairing(&G1Projective::generator(), &G2Projective::generator());
            let expected = fp6(&[
                "866027160279387118920572819798679083693299855359331435785922891715553299371432439372949779000489299280036622256688573325978562835071896424325991223216656277433901723663148535293868697408070518056208766677126688816005526540820252".to_string(),
                "68318803773597440396123410773213834856941839369774736518497758170466933822979974532755540201954681619099493010227141400740540661291230729968711602034611903300359322907516998750211649077877059548690020123420169337447924734099853".to_string(),
                "1867975923262877311211045907902685708125621091491234733721592529863638131154895810578524844381968340512891449320143843416493027032911238495053828621726264389819812159136946297147859157716313292020371069111037655816807036783253746".to_string(),
                "2866605945126183194482749399919039957278767541685106755550486730954042489252637128741370848312492933207192916290393170405811310608444802332128291122970655968225989284017592417501976501550815380967611508401109177065579052570922868".to_string(),
                "5571466428613556643306047434107198200804055693648188813525897091454169768444845799950359135669621078804113195955321469526101927418853669424881436400731676334083341861813438109357468803230475394361411933289294133018051478167053236".to_string(),
                "6827195470403999275653470411154227931426557637263895978622119545267390390018585199254576538246258759987764911095693470878248020625140379709643401718586996769692990125322720380888400082245859030098165873685097385773584948770230651".to_string(),
            ]);
            assert_eq!(f.value(), expected, "Miller loop of the generators");
            assert_eq!(
                f.final_exponentiation(),
                Gt::generator(),
                "reduced pairing of the generators"
            );
            assert_eq!(
                Gt::generator().value().0[0].0[0],
                fp("4510359315642227161300715766397545556060182605403241648801789370353477309462521350998880238958915684804523297488248625719737311381543440214724826547416498637008922626849943405027704710434689744648710017398435350900380351408493227"),
                "first coordinate of the pairing of the generators"
            );
        }
        #[test]
        fn test_reference_vectors() {
            for case in CASES.iter() {
                assert_eq!(reduced_pairing(&case.p, &case.q), case.e, "reference pairing");
            }
        }
        #[test]
        fn test_bilinearity() {
            for _ in 0..2 {
                let p = G1Projective::rand(&mut OsRng);
                let q = G2Projective::rand(&mut OsRng);
                let s = Fr::rand(&mut OsRng);

                let a = reduced_pairing(&p, &q) * s;
                let b = reduced_pairing(&(p * s), &q);
                let c = reduced_pairing(&p, &(q * s));

                assert_eq!(a, b, "not linear in the first argument");
                assert_eq!(a, c, "not linear in the second argument");
                assert!(!a.is_identity(), "degenerate pairing");
                assert!(bool::from(a.is_torsion_free()), "pairing is not in GT");
            }
        }
        #[test]
        fn test_small_scalars() {
            use rand::Rng;
            let mut rng = rand::thread_rng();
            let p = G1Projective::generator();
            let q = G2Projective::generator();
            let e = reduced_pairing(&p, &q);
            let k = Fr::from(rng.gen_range(2u64..1000));
            assert_eq!(reduced_pairing(&(p * k), &q), e * k, "e(kP, Q) != e(P, Q)^k");
            assert_eq!(reduced_pairing(&p, &(q * k)), e * k, "e(P, kQ) != e(P, Q)^k");
        }
        #[test]
        fn test_additivity() {
            let p1 = G1Projective::rand(&mut OsRng);
            let p2 = G1Projective::rand(&mut OsRng);
            let q = G2Projective::rand(&mut OsRng);
            assert_eq!(
                reduced_pairing(&(p1 + p2), &q),
                reduced_pairing(&p1, &q) + reduced_pairing(&p2, &q),
                "e(P1 + P2, Q) != e(P1, Q) e(P2, Q)"
            );
        }
        #[test]
        fn test_double_miller_loop() {
            let (p1, q1) = (G1Projective::rand(&mut OsRng), G2Projective::rand(&mut OsRng));
            let (p2, q2) = (G1Projective::rand(&mut OsRng), G2Projective::rand(&mut OsRng));
            let pre_q1 = precompute_g2(&q1, &BW6_761).expect("precompute");
            let pre_q2 = precompute_g2(&q2, &BW6_761).expect("precompute");
            let f = double_miller_loop(&precompute_g1(&p1), &pre_q1, &precompute_g1(&p2), &pre_q2)
                .expect("same params");
            assert_eq!(f, pairing(&p1, &q1) + pairing(&p2, &q2), "lockstep loop mismatch");

            // an identity pair drops out
            let f = double_miller_loop(
                &precompute_g1(&p1),
                &pre_q1,
                &precompute_g1(&G1Projective::zero()),
                &pre_q2,
            )
            .expect("same params");
            assert_eq!(f, pairing(&p1, &q1), "identity pair contributed");
        }
        #[test]
        fn test_parameter_mismatch() {
            let q = G2Projective::generator();
            let p = precompute_g1(&G1Projective::generator());
            let a = precompute_g2(&q, &BW6_761).expect("precompute");
            let b = precompute_g2(&q, &OTHER_LOOP).expect("precompute");
            assert_eq!(
                double_miller_loop(&p, &a, &p, &b).err(),
                Some(PairingError::ParameterMismatch)
            );
            assert_eq!(
                glued_miller_loop(&[(p, a), (p, b)]).err(),
                Some(PairingError::ParameterMismatch)
            );
        }
        #[test]
        fn test_glued() {
            assert_eq!(
                glued_miller_loop(&[]).expect("empty product"),
                MillerLoopResult::default()
            );
            // e(aP, Q) e(-P, aQ) = 1
            let a = Fr::rand(&mut OsRng);
            let p = G1Projective::generator();
            let q = G2Projective::generator();
            let pairs = [
                (
                    precompute_g1(&(p * a)),
                    precompute_g2(&q, &BW6_761).expect("precompute"),
                ),
                (
                    precompute_g1(&-p),
                    precompute_g2(&(q * a), &BW6_761).expect("precompute"),
                ),
            ];
            let f = glued_miller_loop(&pairs).expect("same params");
            assert!(f.final_exponentiation().is_identity(), "product of pairings is not 1");
        }
    }
    mod final_exponentiation_tests {
        use super::*;
        #[test]
        fn test_zero() {
            assert_eq!(
                final_exponentiation(&MillerLoopResult::zero()),
                Err(PairingError::NonInvertible)
            );
            assert_eq!(
                MillerLoopResult::zero().final_exponentiation(),
                Gt(Fp6::zero()),
                "zero should map to zero"
            );
        }
        #[test]
        fn test_one() {
            assert!(
                final_exponentiation(&MillerLoopResult::default())
                    .expect("one is invertible")
                    .is_identity(),
                "one should map to one"
            );
        }
        #[test]
        fn test_lands_in_gt() {
            let f = MillerLoopResult(<Fp6 as crate::fields::fp::FieldExtensionTrait<6, 2>>::rand(
                &mut OsRng,
            ));
            let g = final_exponentiation(&f).expect("random element is invertible");
            assert!(bool::from(g.is_on_curve()), "output is not cyclotomic");
            assert!(bool::from(g.is_torsion_free()), "output is not in GT");
        }
        #[test]
        fn test_on_gt() {
            // exponentiating an element of GT again is a fixed power map, so it commutes with
            // scalar multiplication and keeps equal elements equal
            let g = Gt::generator();
            let s = Fr::rand(&mut OsRng);
            let once = MillerLoopResult(g.0).final_exponentiation();
            let scaled = MillerLoopResult((g * s).0).final_exponentiation();
            assert_eq!(scaled, once * s, "not a homomorphism on GT");
            assert_eq!(once, MillerLoopResult(g.0).final_exponentiation());
            assert!(bool::from(once.is_torsion_free()), "left GT");
        }
    }
}
