//! We likewise define the specifics of the sextic extension of the BW6-761 base field here,
//! defined by the tower $\mathbb{F}_{q^6} = \mathbb{F}_{q^3}(v) / (v^2 - u)$. This is the
//! "2-over-3" representation, in which an element is $g + hv$ for $g, h \in \mathbb{F}_{q^3}$.
//! The target group of the pairing is the order $r$ subgroup of the multiplicative group of
//! this field, which is why it carries the cyclotomic arithmetic and the sparse multiplication
//! by line functions in addition to the usual field operations.
//!
//! Flattened over the base field, $f = g_0 + g_1u + g_2u^2 + (h_0 + h_1u + h_2u^2)v$, and since
//! $v^2 = u$ this is a polynomial in $v$ with coefficients in $\mathbb{F}_q$:
//!
//! $f = g_0 + h_0v + g_1v^2 + h_1v^3 + g_2v^4 + h_2v^5$
//!
//! which is the view the cyclotomic squaring below is written in.

use crate::fields::extensions::FieldExtension;
use crate::fields::fp::{FieldExtensionTrait, Fp};
use crate::fields::fp3::{mul_by_xi, Fp3};
use crypto_bigint::{rand_core::CryptoRngCore, U768};
use num_traits::{Inv, One, Zero};
use std::ops::{Div, DivAssign, Mul, MulAssign};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

// xi^((q^k - 1) / 6) for k = 0, ..., 5
const FROBENIUS_COEFF_FP6_C1: &[Fp; 6] = &[
    Fp::ONE,
    Fp::new(U768::from_words([
        0x5e7bc00000000061,
        0x214983de30000053,
        0x5fe3f89c11811c1e,
        0xa5b093ed79b1c57b,
        0xab8579e02ed3cddc,
        0xf87fa59308c07a8f,
        0x5870636cb60d217f,
        0x823132b971cdefc6,
        0x256ab7ae14297a1a,
        0x4d06e68545f7e64c,
        0x27035cdf02acb274,
        0x00cfca638f1500e3,
    ])),
    Fp::new(U768::from_words([
        0x5e7bc00000000060,
        0x214983de30000053,
        0x5fe3f89c11811c1e,
        0xa5b093ed79b1c57b,
        0xab8579e02ed3cddc,
        0xf87fa59308c07a8f,
        0x5870636cb60d217f,
        0x823132b971cdefc6,
        0x256ab7ae14297a1a,
        0x4d06e68545f7e64c,
        0x27035cdf02acb274,
        0x00cfca638f1500e3,
    ])),
    // q - 1
    Fp::new(U768::from_words([
        0xf49d00000000008a,
        0xe6913e6870000082,
        0x160cf8aeeaf0a437,
        0x98a116c25667a8f8,
        0x71dcd3dc73ebff2e,
        0x8689c8ed12f9fd90,
        0x03cebaff25b42304,
        0x707ba638e584e919,
        0x528275ef8087be41,
        0xb926186a81d14688,
        0xd187c94004faff3e,
        0x0122e824fb83ce0a,
    ])),
    Fp::new(U768::from_words([
        0x962140000000002a,
        0xc547ba8a4000002f,
        0xb6290012d96f8819,
        0xf2f082d4dcb5e37c,
        0xc65759fc45183151,
        0x8e0a235a0a398300,
        0xab5e57926fa70184,
        0xee4a737f73b6f952,
        0x2d17be416c5e4426,
        0x6c1f31e53bd9603c,
        0xaa846c61024e4cca,
        0x00531dc16c6ecd27,
    ])),
    Fp::new(U768::from_words([
        0x962140000000002b,
        0xc547ba8a4000002f,
        0xb6290012d96f8819,
        0xf2f082d4dcb5e37c,
        0xc65759fc45183151,
        0x8e0a235a0a398300,
        0xab5e57926fa70184,
        0xee4a737f73b6f952,
        0x2d17be416c5e4426,
        0x6c1f31e53bd9603c,
        0xaa846c61024e4cca,
        0x00531dc16c6ecd27,
    ])),
];

pub type Fp6 = FieldExtension<6, 2, Fp3>;

impl FieldExtensionTrait<6, 2> for Fp6 {
    fn non_residue() -> Self {
        Self::new(&[Fp3::zero(), Fp3::one()])
    }
    fn frobenius(&self, exponent: usize) -> Self {
        Fp6::frobenius(self, exponent)
    }
    fn sqrt(&self) -> CtOption<Self> {
        Fp6::sqrt(self)
    }
    fn square(&self) -> Self {
        Fp6::square(self)
    }
    fn rand<R: CryptoRngCore>(rng: &mut R) -> Self {
        Self::rand_coefficients(rng)
    }
    fn is_square(&self) -> Choice {
        Fp6::is_square(self)
    }
    fn sgn0(&self) -> Choice {
        self.sgn0_coefficients()
    }
}

impl<'a, 'b> Mul<&'b Fp6> for &'a Fp6 {
    type Output = Fp6;
    fn mul(self, other: &'b Fp6) -> Self::Output {
        // this is again simple Karatsuba multiplication, with v^2 = u
        let t0 = self.0[0] * other.0[0];
        let t1 = self.0[1] * other.0[1];

        Self::Output::new(&[
            t1.residue_mul() + t0,
            (self.0[0] + self.0[1]) * (other.0[0] + other.0[1]) - t0 - t1,
        ])
    }
}
impl Mul for Fp6 {
    type Output = Self;
    fn mul(self, other: Self) -> Self::Output {
        (&self).mul(&other)
    }
}
impl MulAssign for Fp6 {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}
impl Inv for Fp6 {
    type Output = Self;
    fn inv(self) -> Self::Output {
        let tmp = (self.0[0].square() - self.0[1].square().residue_mul()).inv();
        Self([self.0[0] * tmp, -(self.0[1] * tmp)])
    }
}
impl One for Fp6 {
    fn one() -> Self {
        Self::new(&[Fp3::one(), Fp3::zero()])
    }
    fn is_one(&self) -> bool {
        self.0[0].is_one() && self.0[1].is_zero()
    }
}
#[allow(clippy::suspicious_arithmetic_impl)]
impl Div for Fp6 {
    type Output = Self;
    fn div(self, other: Self) -> Self::Output {
        self * other.inv()
    }
}
impl DivAssign for Fp6 {
    fn div_assign(&mut self, other: Self) {
        *self = *self / other;
    }
}

/// Below are additional functions needed on Fp6 for the pairing operations
impl Fp6 {
    pub fn frobenius(&self, exponent: usize) -> Self {
        Self::new(&[
            self.0[0].frobenius(exponent),
            self.0[1]
                .frobenius(exponent)
                .scale(FROBENIUS_COEFF_FP6_C1[exponent % 6]),
        ])
    }
    pub fn square(&self) -> Self {
        // For F_{q^6} = F_{q^3}(v)/(v^2-u), and A=a_0 + a_1*v \in F_{q^6},
        // we determine C=c_0+c_1*v = A^2\in F_{q^6}
        // Alg 22 from <https://eprint.iacr.org/2010/354.pdf>
        let c0 = self.0[0] - self.0[1];
        let c3 = self.0[0] - self.0[1].residue_mul();
        let c2 = self.0[0] * self.0[1];
        let c0 = c0 * c3 + c2;
        let c1 = c2 + c2;
        let c2 = c2.residue_mul();
        let c0 = c0 + c2;
        Self::new(&[c0, c1])
    }
    /// The conjugate $a_0 - a_1v$, which equals $a^{q^3}$. On the cyclotomic subgroup, where
    /// $a^{q^3+1} = 1$, this is the inverse.
    pub fn unitary_inverse(&self) -> Self {
        Self::new(&[self.0[0], -self.0[1]])
    }
    pub fn pow(&self, exponent: &[u64]) -> Self {
        let mut res = Self::one();
        for e in exponent.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if ((*e >> i) & 1) == 1 {
                    res *= *self;
                }
            }
        }
        res
    }
    /// Squaring of an element of the cyclotomic subgroup, that is one with
    /// $a^{\Phi_6(q)} = 1$, after Granger and Scott, <https://eprint.iacr.org/2009/565.pdf>.
    /// The six base field coefficients are paired up as three elements of
    /// $\mathbb{F}_q[w]/(w^2 - \xi)$ with $w = v^3$, each of which is squared on its own.
    ///
    /// The result is only meaningful for inputs in the cyclotomic subgroup.
    pub fn cyclotomic_square(&self) -> Self {
        // squaring in F_q[w]/(w^2 - xi), returned as (constant, linear) coefficients
        fn fq2_square(a: Fp, b: Fp) -> (Fp, Fp) {
            let tmp = a * b;
            let t0 = (a + b) * (mul_by_xi(b) + a) - tmp - mul_by_xi(tmp);
            (t0, tmp.double())
        }
        let z0 = self.0[0].0[0];
        let z4 = self.0[0].0[1];
        let z3 = self.0[0].0[2];
        let z2 = self.0[1].0[0];
        let z1 = self.0[1].0[1];
        let z5 = self.0[1].0[2];

        let (t0, t1) = fq2_square(z0, z1);
        let (t2, t3) = fq2_square(z2, z3);
        let (t4, t5) = fq2_square(z4, z5);

        // z0 = 3 * t0 - 2 * z0, and so on
        let z0 = (t0 - z0).double() + t0;
        let z1 = (t1 + z1).double() + t1;
        let tmp = mul_by_xi(t5);
        let z2 = (tmp + z2).double() + tmp;
        let z3 = (t4 - z3).double() + t4;
        let z4 = (t2 - z4).double() + t2;
        let z5 = (t3 + z5).double() + t3;

        Self::new(&[Fp3::new(&[z0, z4, z3]), Fp3::new(&[z2, z1, z5])])
    }
    /// Exponentiation of a cyclotomic element by a little-endian list of words, most
    /// significant bit first, squaring with `cyclotomic_square`.
    pub fn cyclotomic_exp(&self, exponent: &[u64]) -> Self {
        let mut res = Self::one();
        let mut found_one = false;
        for e in exponent.iter().rev() {
            for i in (0..64).rev() {
                if found_one {
                    res = res.cyclotomic_square();
                }
                if ((*e >> i) & 1) == 1 {
                    found_one = true;
                    res *= *self;
                }
            }
        }
        res
    }
    /// Line functions of the M-twist only populate three of the six base field coefficients,
    /// namely $c_0 + c_1u + c_4uv$, or in the flattened view those of $1$, $v^2$ and $v^3$.
    /// Knowing where the zeros are saves a good share of the multiplications of a full product
    /// in the Miller loop. The name follows `zcash`, `bn` and `arkworks`, whose indices refer
    /// to the positions of the nonzero coefficients.
    pub fn mul_by_014(&self, c0: Fp, c1: Fp, c4: Fp) -> Self {
        let aa = self.0[0].mul_by_01(c0, c1);
        let bb = self.0[1].mul_by_1(c4);
        let o = c1 + c4;
        let c1 = (self.0[1] + self.0[0]).mul_by_01(c0, o) - aa - bb;
        let c0 = bb.residue_mul() + aa;
        Self::new(&[c0, c1])
    }
    /// Quadratic extensions take roots with the "complex method" of
    /// <https://eprint.iacr.org/2012/685.pdf>, Algorithm 8, reducing to two roots in
    /// $\mathbb{F}_{q^3}$.
    pub fn sqrt(&self) -> CtOption<Self> {
        let (a0, a1) = (self.0[0], self.0[1]);
        let candidate = if a1.is_zero() {
            // a0 either has a root in the cubic field, or a0/u does and the root is a multiple of v
            let direct = a0.sqrt();
            let scaled = (a0 * <Fp3 as FieldExtensionTrait<3, 3>>::non_residue().inv()).sqrt();
            let direct_root = Self::new(&[direct.unwrap_or(Fp3::zero()), Fp3::zero()]);
            let scaled_root = Self::new(&[Fp3::zero(), scaled.unwrap_or(Fp3::zero())]);
            Self::conditional_select(&scaled_root, &direct_root, direct.is_some())
        } else {
            let alpha = a0.square() - a1.square().residue_mul();
            let two_inv = Fp3::from(2u64).inv();
            let alpha_root = alpha.sqrt().unwrap_or(Fp3::zero());
            let delta = (a0 + alpha_root) * two_inv;
            let delta = Fp3::conditional_select(
                &((a0 - alpha_root) * two_inv),
                &delta,
                delta.is_square(),
            );
            let x0 = delta.sqrt().unwrap_or(Fp3::zero());
            let x1 = a1 * (x0 + x0).inv();
            Self::new(&[x0, x1])
        };
        CtOption::new(candidate, candidate.square().ct_eq(self))
    }
    /// a square exactly when the norm $a_0^2 - ua_1^2$ to the cubic field is
    pub fn is_square(&self) -> Choice {
        (self.0[0].square() - self.0[1].square().residue_mul()).is_square()
    }
}
