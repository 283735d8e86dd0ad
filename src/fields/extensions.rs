//! This file dictates the implementation of the field extension struct that implements
//! the appropriate traits. These are not a total list of the mathematical properties
//! that are satisfied by an extension, but is a MWE of the functionality needed herein.
//! Because of the quotienting on the finite field ring, the functional forms of
//! multiplication and division will be specific to the base field, and the
//! form of the extension. Therefore, the only common functionality we can guarantee
//! is addition, subtraction, equality, negation, selection, default, and the zero element.
//!
//! The BW6-761 tower only has two levels above the base field, the cubic $\mathbb{F}_{q^3}$ and
//! the sextic $\mathbb{F}_{q^6}$ built as a quadratic extension of the former. Both are
//! instances of the struct below, and their multiplicative structure lives in `fp3.rs` and
//! `fp6.rs` respectively.

use crate::fields::fp::FieldExtensionTrait;
use crypto_bigint::rand_core::CryptoRngCore;
use crypto_bigint::subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use num_traits::Zero;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

// the following struct can unfortunately not have much that is const,
// since the underlying Mul, Add, etc., are not, and const traits are in the works
// https://github.com/rust-lang/rust/issues/67792
#[derive(Copy, Clone, Debug)]
pub struct FieldExtension<const D: usize, const N: usize, F: FieldExtensionTrait<D, N>>(
    pub(crate) [F; N],
);

impl<const D: usize, const N: usize, F: FieldExtensionTrait<D, N>> From<u64>
    for FieldExtension<D, N, F>
{
    fn from(value: u64) -> Self {
        let mut retval = [F::zero(); N];
        retval[0] = F::from(value);
        Self::new(&retval)
    }
}

impl<const D: usize, const N: usize, F: FieldExtensionTrait<D, N>> FieldExtension<D, N, F> {
    // the construction is const so that the frobenius tables and the
    // generators can be written down as constants
    pub const fn new(c: &[F; N]) -> Self {
        Self(*c)
    }
    /// multiply every coefficient by an element of the level below
    pub fn scale(&self, factor: F) -> Self {
        let mut retval = [F::zero(); N];
        for (r, c) in retval.iter_mut().zip(self.0.iter()) {
            *r = *c * factor;
        }
        Self::new(&retval)
    }
    pub(crate) fn rand_coefficients<R: CryptoRngCore>(rng: &mut R) -> Self {
        let mut retval = [F::zero(); N];
        for r in retval.iter_mut() {
            *r = F::rand(rng);
        }
        Self::new(&retval)
    }
    /// The sign of an extension element, following section 4.1 of RFC 9380: the sign of the
    /// lowest nonzero coefficient, and zero for the zero element.
    pub(crate) fn sgn0_coefficients(&self) -> Choice {
        let mut sign = Choice::from(0u8);
        let mut zero = Choice::from(1u8);
        for c in self.0.iter() {
            sign |= zero & c.sgn0();
            zero &= c.ct_eq(&F::zero());
        }
        sign
    }
}
impl<const D: usize, const N: usize, F: FieldExtensionTrait<D, N>> ConstantTimeEq
    for FieldExtension<D, N, F>
{
    #[inline(always)]
    fn ct_eq(&self, other: &Self) -> Choice {
        let mut retval = Choice::from(1u8);
        for (a, b) in self.0.iter().zip(other.0.iter()) {
            retval &= a.ct_eq(b);
        }
        retval
    }
}
impl<const D: usize, const N: usize, F: FieldExtensionTrait<D, N>> ConditionallySelectable
    for FieldExtension<D, N, F>
{
    #[inline(always)]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut retval = [F::zero(); N];
        for (i, r) in retval.iter_mut().enumerate() {
            *r = F::conditional_select(&a.0[i], &b.0[i], choice);
        }
        Self::new(&retval)
    }
}
impl<const D: usize, const N: usize, F: FieldExtensionTrait<D, N>> Add for FieldExtension<D, N, F> {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        let mut retval = [F::zero(); N];
        for (i, r) in retval.iter_mut().enumerate() {
            *r = self.0[i] + other.0[i];
        }
        Self::new(&retval)
    }
}
impl<const D: usize, const N: usize, F: FieldExtensionTrait<D, N>> AddAssign
    for FieldExtension<D, N, F>
{
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}
impl<const D: usize, const N: usize, F: FieldExtensionTrait<D, N>> Sub for FieldExtension<D, N, F> {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        let mut retval = [F::zero(); N];
        for (i, r) in retval.iter_mut().enumerate() {
            *r = self.0[i] - other.0[i];
        }
        Self::new(&retval)
    }
}
impl<const D: usize, const N: usize, F: FieldExtensionTrait<D, N>> SubAssign
    for FieldExtension<D, N, F>
{
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}
impl<const D: usize, const N: usize, F: FieldExtensionTrait<D, N>> Default
    for FieldExtension<D, N, F>
{
    fn default() -> Self {
        Self::new(&[F::default(); N])
    }
}
impl<const D: usize, const N: usize, F: FieldExtensionTrait<D, N>> PartialEq
    for FieldExtension<D, N, F>
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}
impl<const D: usize, const N: usize, F: FieldExtensionTrait<D, N>> Eq for FieldExtension<D, N, F> {}
impl<const D: usize, const N: usize, F: FieldExtensionTrait<D, N>> Neg for FieldExtension<D, N, F> {
    type Output = Self;
    fn neg(self) -> Self {
        let mut retval = [F::zero(); N];
        for (r, c) in retval.iter_mut().zip(self.0.iter()) {
            *r = -*c;
        }
        Self::new(&retval)
    }
}
impl<const D: usize, const N: usize, F: FieldExtensionTrait<D, N>> Zero
    for FieldExtension<D, N, F>
{
    fn zero() -> Self {
        Self::new(&[F::zero(); N])
    }
    fn is_zero(&self) -> bool {
        self.0.iter().all(|c| c.is_zero())
    }
}
