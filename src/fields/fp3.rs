//! This module contains the cubic extension of the BW6-761 base field, defined by the tower
//! $\mathbb{F}_{q^3} = \mathbb{F}_q(u) / (u^3 - \xi)$ with $\xi = -4$. An element is
//! $a_0 + a_1u + a_2u^2$, stored as the triple of its coefficients.
//!
//! Unlike the BN254 tower, there is no quadratic level between the base field and this one, so
//! the Frobenius coefficients below are all elements of the base field itself, and the twist
//! G2 of BW6-761 is defined over $\mathbb{F}_q$ as well.

use crate::fields::extensions::FieldExtension;
use crate::fields::fp::{FieldExtensionTrait, Fp};
use crypto_bigint::{rand_core::CryptoRngCore, U768};
use num_traits::{Inv, One, Zero};
use std::ops::{Div, DivAssign, Mul, MulAssign};
use subtle::{Choice, ConstantTimeEq, CtOption};

// xi^((q^k - 1) / 3) for k = 0, 1, 2
pub(crate) const FROBENIUS_COEFF_FP3_C1: &[Fp; 3] = &[
    Fp::ONE,
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
];
// xi^(2(q^k - 1) / 3) for k = 0, 1, 2, which is the table above with the last two swapped
pub(crate) const FROBENIUS_COEFF_FP3_C2: &[Fp; 3] = &[
    Fp::ONE,
    FROBENIUS_COEFF_FP3_C1[2],
    FROBENIUS_COEFF_FP3_C1[1],
];

pub type Fp3 = FieldExtension<3, 3, Fp>;

// multiplication by xi = -4, which is cheaper as two doublings
#[inline(always)]
pub(crate) fn mul_by_xi(a: Fp) -> Fp {
    -a.double().double()
}

impl Fp3 {
    /// multiplication by $u$, the element adjoined at this level, which cycles the coefficients
    /// as $u^3 = \xi$
    pub(crate) fn residue_mul(&self) -> Self {
        Self([mul_by_xi(self.0[2]), self.0[0], self.0[1]])
    }
    /// multiplication by $c_1u$
    pub(crate) fn mul_by_1(&self, c1: Fp) -> Self {
        Self::new(&[
            mul_by_xi(self.0[2] * c1),
            self.0[0] * c1,
            self.0[1] * c1,
        ])
    }
    /// multiplication by $c_0 + c_1u$
    pub(crate) fn mul_by_01(&self, c0: Fp, c1: Fp) -> Self {
        Self::new(&[
            self.0[0] * c0 + mul_by_xi(self.0[2] * c1),
            self.0[0] * c1 + self.0[1] * c0,
            self.0[1] * c1 + self.0[2] * c0,
        ])
    }
    /// The norm down to the base field, $a \cdot a^q \cdot a^{q^2}$, which only has a constant
    /// coefficient.
    pub fn norm(&self) -> Fp {
        let conjugates = self.frobenius(1) * self.frobenius(2);
        (*self * conjugates).0[0]
    }
    /// exponentiation by a little-endian list of 64-bit words, most significant bit first
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
    pub fn frobenius(&self, exponent: usize) -> Self {
        Self::new(&[
            self.0[0],
            self.0[1] * FROBENIUS_COEFF_FP3_C1[exponent % 3],
            self.0[2] * FROBENIUS_COEFF_FP3_C2[exponent % 3],
        ])
    }
    // this is simply the same as the multiplication below
    // however, there are some simple algebraic reductions
    // you can do with squaring. this is CH-SQR2 of
    // <https://eprint.iacr.org/2006/471.pdf>
    pub fn square(&self) -> Self {
        let s0 = self.0[0].square();
        let ab = self.0[0] * self.0[1];
        let s1 = ab.double();
        let s2 = (self.0[0] - self.0[1] + self.0[2]).square();
        let bc = self.0[1] * self.0[2];
        let s3 = bc.double();
        let s4 = self.0[2].square();
        Self([
            s0 + mul_by_xi(s3),
            s1 + mul_by_xi(s4),
            s1 + s2 + s3 - s0 - s4,
        ])
    }
    /// Since $q^3 \equiv 3 \mod 4$, a root is $a^{(q^3+1)/4}$. The exponent factors as
    /// $\frac{q+1}{4}(q^2-q+1)$, so with $b = a^{(q+1)/4}$ the root is
    /// $b^{q^2} \cdot b \cdot (b^q)^{-1}$, which only needs a base field sized exponentiation
    /// and two Frobenius maps.
    pub fn sqrt(&self) -> CtOption<Self> {
        let exponent: U768 = Fp::characteristic().wrapping_add(&U768::ONE) >> 2;
        let b = self.pow(exponent.as_words());
        let root = b.frobenius(2) * b * b.frobenius(1).inv();
        CtOption::new(root, root.square().ct_eq(self))
    }
    /// an element of an odd degree extension is a square exactly when its norm is
    pub fn is_square(&self) -> Choice {
        self.norm().is_square()
    }
}

impl FieldExtensionTrait<3, 3> for Fp3 {
    fn non_residue() -> Self {
        Self::new(&[Fp::ZERO, Fp::ONE, Fp::ZERO])
    }
    fn frobenius(&self, exponent: usize) -> Self {
        Fp3::frobenius(self, exponent)
    }
    fn sqrt(&self) -> CtOption<Self> {
        Fp3::sqrt(self)
    }
    fn square(&self) -> Self {
        Fp3::square(self)
    }
    fn rand<R: CryptoRngCore>(rng: &mut R) -> Self {
        Self::rand_coefficients(rng)
    }
    fn is_square(&self) -> Choice {
        Fp3::is_square(self)
    }
    fn sgn0(&self) -> Choice {
        self.sgn0_coefficients()
    }
}

// Karatsuba multiplication for a cubic extension, the addition chain is
// eq. 15 of <https://eprint.iacr.org/2006/471.pdf> with the reduction u^3 = xi folded in
impl<'a, 'b> Mul<&'b Fp3> for &'a Fp3 {
    type Output = Fp3;
    fn mul(self, other: &'b Fp3) -> Self::Output {
        let t0 = self.0[0] * other.0[0];
        let t1 = self.0[1] * other.0[1];
        let t2 = self.0[2] * other.0[2];

        let c0 = mul_by_xi((self.0[1] + self.0[2]) * (other.0[1] + other.0[2]) - t1 - t2) + t0;
        let c1 = (self.0[0] + self.0[1]) * (other.0[0] + other.0[1]) - t0 - t1 + mul_by_xi(t2);
        let c2 = (self.0[0] + self.0[2]) * (other.0[0] + other.0[2]) - t0 + t1 - t2;

        Self::Output::new(&[c0, c1, c2])
    }
}
impl Mul for Fp3 {
    type Output = Self;
    fn mul(self, other: Self) -> Self::Output {
        (&self).mul(&other)
    }
}
impl MulAssign for Fp3 {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}
impl Inv for Fp3 {
    type Output = Self;
    // Algorithm 17 of <https://eprint.iacr.org/2010/354.pdf>, which maps zero to zero
    fn inv(self) -> Self::Output {
        let t0 = self.0[0].square() - mul_by_xi(self.0[1] * self.0[2]);
        let t1 = mul_by_xi(self.0[2].square()) - self.0[0] * self.0[1];
        let t2 = self.0[1].square() - self.0[0] * self.0[2];

        let det = self.0[0] * t0 + mul_by_xi(self.0[2] * t1 + self.0[1] * t2);
        let det_inv = det.inv();
        Self([t0 * det_inv, t1 * det_inv, t2 * det_inv])
    }
}
impl One for Fp3 {
    fn one() -> Self {
        Self::new(&[Fp::ONE, Fp::ZERO, Fp::ZERO])
    }
    fn is_one(&self) -> bool {
        self.0[0].is_one() && self.0[1].is_zero() && self.0[2].is_zero()
    }
}
#[allow(clippy::suspicious_arithmetic_impl)]
impl Div for Fp3 {
    type Output = Self;
    fn div(self, other: Self) -> Self::Output {
        self * other.inv()
    }
}
impl DivAssign for Fp3 {
    fn div_assign(&mut self, other: Self) {
        *self = *self / other;
    }
}

/// Makes the cubic extension visible to the sextic extension built on top of it, in the same
/// way the base field is made visible to this one.
impl FieldExtensionTrait<6, 2> for Fp3 {
    fn non_residue() -> Self {
        <Fp3 as FieldExtensionTrait<3, 3>>::non_residue()
    }
    fn frobenius(&self, exponent: usize) -> Self {
        Fp3::frobenius(self, exponent)
    }
    fn sqrt(&self) -> CtOption<Self> {
        Fp3::sqrt(self)
    }
    fn square(&self) -> Self {
        Fp3::square(self)
    }
    fn rand<R: CryptoRngCore>(rng: &mut R) -> Self {
        Self::rand_coefficients(rng)
    }
    fn is_square(&self) -> Choice {
        Fp3::is_square(self)
    }
    fn sgn0(&self) -> Choice {
        self.sgn0_coefficients()
    }
}
