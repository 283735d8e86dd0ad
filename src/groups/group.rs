//! This module contains the machinery common to both source groups of BW6-761. Both
//! $\mathbb{G}_1$ and $\mathbb{G}_2$ are prime order subgroups of short Weierstrass curves
//! $y^2 = x^3 + b$ defined over the base field $\mathbb{F}_q$, which differ only in their
//! coefficient $b$, their generator, and their cofactor. These three facts are captured by the
//! `CurveConfig` trait, and everything else is generic over it.
//!
//! The point at infinity has no unique representation in affine coordinates, so the arithmetic
//! is performed in projective coordinates with the complete formulas of Renes, Costello and
//! Batina, <https://eprint.iacr.org/2015/1060.pdf>, Algorithms 7 and 9 for $a = 0$. Completeness
//! means the same code path handles doubling, the identity, and inverse points, with no
//! branching on the inputs. Affine coordinates are used for the pairing precomputation and for
//! the byte encodings.

use crate::fields::fp::Fp;
use crate::fields::fr::Fr;
use crypto_bigint::rand_core::CryptoRngCore;
use crypto_bigint::{Encoding, U384};
use num_traits::{Inv, Zero};
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Failures in constructing or decoding group elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GroupError {
    #[error("point is not on the curve")]
    NotOnCurve,
    #[error("point is not in the prime order subgroup")]
    NotInSubgroup,
    #[error("no point on the curve has this x-coordinate")]
    NoSolution,
    #[error("malformed point encoding")]
    DecompressionError,
}

/// The constants that single out one curve $y^2 = x^3 + b$ over the base field.
pub trait CurveConfig: Copy + Clone + std::fmt::Debug + Send + Sync + 'static {
    const NAME: &'static str;
    /// affine coordinates of the generator of the prime order subgroup
    const GENERATOR: [Fp; 2];
    /// the index of the prime order subgroup in the group of rational points
    const COFACTOR: U384;
    fn b() -> Fp;
    // the complete formulas only ever need 3b
    fn b3() -> Fp {
        Self::b() * Fp::THREE
    }
}

/// The properties every group in the pairing, including the target group, satisfies.
pub trait GroupTrait:
    Sized + Copy + Clone + std::fmt::Debug + Neg + ConstantTimeEq + ConditionallySelectable + PartialEq
{
    fn generator() -> Self;
    fn rand<R: CryptoRngCore>(rng: &mut R) -> Self;
    /// membership of the ambient group, the curve for $\mathbb{G}_1$ and $\mathbb{G}_2$
    fn is_on_curve(&self) -> Choice;
    /// membership of the order $r$ subgroup
    fn is_torsion_free(&self) -> Choice;
}

// flag bits in the most significant byte of an encoding, the top 7 bits of a 761-bit integer
// stored in 96 bytes are always free
const COMPRESSION_FLAG: u8 = 0x80;
const INFINITY_FLAG: u8 = 0x40;
const SIGN_FLAG: u8 = 0x20;
const FLAG_MASK: u8 = COMPRESSION_FLAG | INFINITY_FLAG | SIGN_FLAG;

/// Length of the byte encoding of a base field element.
pub const FP_BYTES: usize = 96;

#[derive(Copy, Clone, Debug)]
pub struct GroupAffine<C: CurveConfig> {
    pub(crate) x: Fp,
    pub(crate) y: Fp,
    pub(crate) infinity: Choice,
    pub(crate) _config: PhantomData<C>,
}

#[derive(Copy, Clone, Debug)]
pub struct GroupProjective<C: CurveConfig> {
    pub(crate) x: Fp,
    pub(crate) y: Fp,
    pub(crate) z: Fp,
    pub(crate) _config: PhantomData<C>,
}

impl<C: CurveConfig> GroupAffine<C> {
    /// the point at infinity, which is stored as $(0, 1)$ with the infinity flag set
    pub fn zero() -> Self {
        Self {
            x: Fp::ZERO,
            y: Fp::ONE,
            infinity: Choice::from(1u8),
            _config: PhantomData,
        }
    }
    pub fn is_zero(&self) -> bool {
        bool::from(self.infinity)
    }
    pub fn x(&self) -> Fp {
        self.x
    }
    pub fn y(&self) -> Fp {
        self.y
    }
    /// Builds a point from its coordinates with only the curve check, which is what the
    /// curve-specific constructors and the decoders build on.
    pub(crate) fn new_on_curve(v: [Fp; 2]) -> Result<Self, GroupError> {
        let candidate = Self {
            x: v[0],
            y: v[1],
            infinity: Choice::from(0u8),
            _config: PhantomData,
        };
        let is_on_curve = candidate.curve_equation_holds();
        tracing::debug!(?is_on_curve, curve = C::NAME, "GroupAffine::new_on_curve");
        match bool::from(is_on_curve) {
            true => Ok(candidate),
            false => Err(GroupError::NotOnCurve),
        }
    }
    /// as above, followed by the subgroup check
    pub(crate) fn new_in_subgroup(v: [Fp; 2]) -> Result<Self, GroupError> {
        let candidate = Self::new_on_curve(v)?;
        let is_torsion_free = GroupProjective::from(candidate).is_torsion_free();
        tracing::debug!(?is_torsion_free, curve = C::NAME, "GroupAffine::new_in_subgroup");
        match bool::from(is_torsion_free) {
            true => Ok(candidate),
            false => Err(GroupError::NotInSubgroup),
        }
    }
    fn curve_equation_holds(&self) -> Choice {
        let lhs = self.y.square();
        let rhs = self.x.square() * self.x + C::b();
        lhs.ct_eq(&rhs)
    }

    /// The uncompressed encoding is the big-endian $x$ followed by the big-endian $y$, with the
    /// infinity flag in the top bits of the first byte. The identity is the flag followed by
    /// zeros.
    pub fn to_uncompressed(&self) -> [u8; 2 * FP_BYTES] {
        let mut res = [0u8; 2 * FP_BYTES];
        let x = Fp::conditional_select(&self.x, &Fp::ZERO, self.infinity);
        let y = Fp::conditional_select(&self.y, &Fp::ZERO, self.infinity);
        res[..FP_BYTES].copy_from_slice(&x.to_be_bytes());
        res[FP_BYTES..].copy_from_slice(&y.to_be_bytes());
        res[0] |= u8::conditional_select(&0u8, &INFINITY_FLAG, self.infinity);
        res
    }
    /// Decodes the uncompressed encoding, rejecting anything that is not a canonical encoding of
    /// a point in the prime order subgroup.
    pub fn from_uncompressed(bytes: &[u8; 2 * FP_BYTES]) -> Result<Self, GroupError> {
        let flags = bytes[0] & FLAG_MASK;
        if flags & (COMPRESSION_FLAG | SIGN_FLAG) != 0 {
            return Err(GroupError::DecompressionError);
        }
        let mut x_bytes = [0u8; FP_BYTES];
        let mut y_bytes = [0u8; FP_BYTES];
        x_bytes.copy_from_slice(&bytes[..FP_BYTES]);
        y_bytes.copy_from_slice(&bytes[FP_BYTES..]);
        x_bytes[0] &= !FLAG_MASK;

        if flags & INFINITY_FLAG != 0 {
            return match x_bytes.iter().chain(y_bytes.iter()).all(|b| *b == 0) {
                true => Ok(Self::zero()),
                false => Err(GroupError::DecompressionError),
            };
        }
        let x = Option::<Fp>::from(Fp::from_be_bytes(&x_bytes.into()))
            .ok_or(GroupError::DecompressionError)?;
        let y = Option::<Fp>::from(Fp::from_be_bytes(&y_bytes.into()))
            .ok_or(GroupError::DecompressionError)?;
        Self::new_in_subgroup([x, y])
    }
    /// The compressed encoding is the big-endian $x$ with the compression flag set, and the
    /// sign flag carrying the parity of $y$.
    pub fn to_compressed(&self) -> [u8; FP_BYTES] {
        let x = Fp::conditional_select(&self.x, &Fp::ZERO, self.infinity);
        let mut res: [u8; FP_BYTES] = x.to_be_bytes().into();
        res[0] |= COMPRESSION_FLAG;
        res[0] |= u8::conditional_select(&0u8, &INFINITY_FLAG, self.infinity);
        res[0] |= u8::conditional_select(&0u8, &SIGN_FLAG, self.y.sgn0() & !self.infinity);
        res
    }
    /// Recovers $y$ from $x$ as the root of $x^3 + b$ with the encoded parity, and then runs the
    /// subgroup check.
    pub fn from_compressed(bytes: &[u8; FP_BYTES]) -> Result<Self, GroupError> {
        let flags = bytes[0] & FLAG_MASK;
        if flags & COMPRESSION_FLAG == 0 {
            return Err(GroupError::DecompressionError);
        }
        let mut x_bytes = *bytes;
        x_bytes[0] &= !FLAG_MASK;
        if flags & INFINITY_FLAG != 0 {
            return match flags & SIGN_FLAG == 0 && x_bytes.iter().all(|b| *b == 0) {
                true => Ok(Self::zero()),
                false => Err(GroupError::DecompressionError),
            };
        }
        let x = Option::<Fp>::from(Fp::from_be_bytes(&x_bytes.into()))
            .ok_or(GroupError::DecompressionError)?;
        let y = crate::curve_utils::curve_point_y_at_x(x, Fp::ZERO, C::b())
            .map_err(|_| GroupError::DecompressionError)?;
        let wants_odd = Choice::from(((flags & SIGN_FLAG) != 0) as u8);
        let y = Fp::conditional_select(&y, &-y, y.sgn0() ^ wants_odd);
        if y.sgn0().unwrap_u8() != wants_odd.unwrap_u8() {
            // only y = 0 has no root of the other parity
            return Err(GroupError::DecompressionError);
        }
        Self::new_in_subgroup([x, y])
    }
}

impl<C: CurveConfig> GroupTrait for GroupAffine<C> {
    fn generator() -> Self {
        Self {
            x: C::GENERATOR[0],
            y: C::GENERATOR[1],
            infinity: Choice::from(0u8),
            _config: PhantomData,
        }
    }
    fn rand<R: CryptoRngCore>(rng: &mut R) -> Self {
        Self::from(GroupProjective::<C>::rand(rng))
    }
    fn is_on_curve(&self) -> Choice {
        self.curve_equation_holds() | self.infinity
    }
    fn is_torsion_free(&self) -> Choice {
        GroupProjective::from(*self).is_torsion_free()
    }
}

impl<C: CurveConfig> Neg for GroupAffine<C> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: self.x,
            y: Fp::conditional_select(&-self.y, &Fp::ONE, self.infinity),
            infinity: self.infinity,
            _config: PhantomData,
        }
    }
}
impl<C: CurveConfig> ConstantTimeEq for GroupAffine<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        // either they're both infinity, or neither are and the coords match
        (self.infinity & other.infinity)
            | ((!self.infinity)
                & (!other.infinity)
                & self.x.ct_eq(&other.x)
                & self.y.ct_eq(&other.y))
    }
}
impl<C: CurveConfig> ConditionallySelectable for GroupAffine<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: Fp::conditional_select(&a.x, &b.x, choice),
            y: Fp::conditional_select(&a.y, &b.y, choice),
            infinity: Choice::conditional_select(&a.infinity, &b.infinity, choice),
            _config: PhantomData,
        }
    }
}
impl<C: CurveConfig> PartialEq for GroupAffine<C> {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}
impl<C: CurveConfig> Eq for GroupAffine<C> {}

impl<'a, C: CurveConfig> From<&'a GroupProjective<C>> for GroupAffine<C> {
    fn from(arg: &'a GroupProjective<C>) -> Self {
        // the inverse of zero is zero, which sends the identity to (0, 0) before the select
        let z_inv = arg.z.inv();
        let x = arg.x * z_inv;
        let y = arg.y * z_inv;
        let infinity = arg.z.ct_eq(&Fp::ZERO);
        Self::conditional_select(
            &Self {
                x,
                y,
                infinity: Choice::from(0u8),
                _config: PhantomData,
            },
            &Self::zero(),
            infinity,
        )
    }
}
impl<C: CurveConfig> From<GroupProjective<C>> for GroupAffine<C> {
    fn from(arg: GroupProjective<C>) -> Self {
        Self::from(&arg)
    }
}

impl<C: CurveConfig> GroupProjective<C> {
    /// The identity is $(0 : 1 : 0)$. Any point with $Z = 0$ is treated as the identity.
    pub fn zero() -> Self {
        Self {
            x: Fp::ZERO,
            y: Fp::ONE,
            z: Fp::ZERO,
            _config: PhantomData,
        }
    }
    pub fn is_zero(&self) -> bool {
        self.z.is_zero()
    }
    /// Builds a point from projective coordinates with only the curve check
    /// $Y^2Z = X^3 + bZ^3$.
    pub(crate) fn new_on_curve(v: [Fp; 3]) -> Result<Self, GroupError> {
        let candidate = Self {
            x: v[0],
            y: v[1],
            z: v[2],
            _config: PhantomData,
        };
        let is_on_curve = candidate.is_on_curve();
        tracing::debug!(?is_on_curve, curve = C::NAME, "GroupProjective::new_on_curve");
        match bool::from(is_on_curve) {
            true => Ok(candidate),
            false => Err(GroupError::NotOnCurve),
        }
    }
    pub(crate) fn new_in_subgroup(v: [Fp; 3]) -> Result<Self, GroupError> {
        let candidate = Self::new_on_curve(v)?;
        let is_torsion_free = candidate.is_torsion_free();
        tracing::debug!(?is_torsion_free, curve = C::NAME, "GroupProjective::new_in_subgroup");
        match bool::from(is_torsion_free) {
            true => Ok(candidate),
            false => Err(GroupError::NotInSubgroup),
        }
    }
    /// Algorithm 9 of <https://eprint.iacr.org/2015/1060.pdf>
    pub fn double(&self) -> Self {
        let b3 = C::b3();
        let t0 = self.y.square();
        let z3 = t0.double().double().double();
        let t1 = self.y * self.z;
        let t2 = b3 * self.z.square();
        let x3 = t2 * z3;
        let y3 = t0 + t2;
        let z3 = t1 * z3;
        let t1 = t2.double();
        let t2 = t1 + t2;
        let t0 = t0 - t2;
        let y3 = x3 + t0 * y3;
        let t1 = self.x * self.y;
        let x3 = (t0 * t1).double();
        let res = Self {
            x: x3,
            y: y3,
            z: z3,
            _config: PhantomData,
        };
        // a point of order 2 doubles to (0 : 0 : 0)
        Self::conditional_select(&res, &Self::zero(), res.is_degenerate())
    }
    /// $(0 : 0 : 0)$ satisfies the curve equation but is not a point. The complete formulas
    /// return it exactly when $P - Q$ has order 2. Only G1 has such points, its cofactor being
    /// even, and none of them lie in the prime order subgroup.
    fn is_degenerate(&self) -> Choice {
        self.x.ct_eq(&Fp::ZERO) & self.y.ct_eq(&Fp::ZERO) & self.z.ct_eq(&Fp::ZERO)
    }
    /// Affine addition with every special case written out, for the pairs the complete formulas
    /// cannot handle.
    fn add_exceptional(&self, other: &Self) -> Self {
        let a = GroupAffine::from(self);
        let b = GroupAffine::from(other);
        if a.is_zero() {
            return *other;
        }
        if b.is_zero() {
            return *self;
        }
        let lambda = match a.x == b.x {
            true => {
                if a.y != b.y || a.y.is_zero() {
                    return Self::zero();
                }
                Fp::THREE * a.x.square() / a.y.double()
            }
            false => (b.y - a.y) / (b.x - a.x),
        };
        let x = lambda.square() - a.x - b.x;
        let y = lambda * (a.x - x) - a.y;
        tracing::trace!(curve = C::NAME, "GroupProjective::add_exceptional");
        Self {
            x,
            y,
            z: Fp::ONE,
            _config: PhantomData,
        }
    }
    /// Double-and-add over a little-endian byte string, with the addition selected rather than
    /// branched on.
    pub(crate) fn mul_le_bytes(&self, bytes: &[u8]) -> Self {
        let mut res = Self::zero();
        for byte in bytes.iter().rev() {
            for i in (0..8).rev() {
                res = res.double();
                let sum = &res + self;
                res = Self::conditional_select(&res, &sum, Choice::from((byte >> i) & 1));
            }
        }
        res
    }
    /// Clears the cofactor, landing any curve point in the prime order subgroup.
    pub fn mul_by_cofactor(&self) -> Self {
        self.mul_le_bytes(&C::COFACTOR.to_le_bytes())
    }
}

impl<C: CurveConfig> GroupTrait for GroupProjective<C> {
    fn generator() -> Self {
        Self {
            x: C::GENERATOR[0],
            y: C::GENERATOR[1],
            z: Fp::ONE,
            _config: PhantomData,
        }
    }
    fn rand<R: CryptoRngCore>(rng: &mut R) -> Self {
        Self::generator() * Fr::rand(rng)
    }
    fn is_on_curve(&self) -> Choice {
        let lhs = self.y.square() * self.z;
        let rhs = self.x.square() * self.x + C::b() * self.z.square() * self.z;
        // the only solutions with Z = 0 are (0 : Y : 0), and Y = 0 is not a point
        lhs.ct_eq(&rhs) & !self.is_degenerate()
    }
    fn is_torsion_free(&self) -> Choice {
        let order = Fr::characteristic().to_le_bytes();
        Choice::from(self.mul_le_bytes(&order).is_zero() as u8)
    }
}

impl<C: CurveConfig> Neg for GroupProjective<C> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            x: self.x,
            y: -self.y,
            z: self.z,
            _config: PhantomData,
        }
    }
}
impl<'a, C: CurveConfig> Neg for &'a GroupProjective<C> {
    type Output = GroupProjective<C>;

    fn neg(self) -> Self::Output {
        -*self
    }
}
impl<C: CurveConfig> ConstantTimeEq for GroupProjective<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        // are the points the same when converted to affine
        let x0 = self.x * other.z;
        let x1 = other.x * self.z;

        let y0 = self.y * other.z;
        let y1 = other.y * self.z;

        let i_am_zero = self.z.ct_eq(&Fp::ZERO);
        let you_are_zero = other.z.ct_eq(&Fp::ZERO);

        (i_am_zero & you_are_zero) // Both point at infinity
            | ((!i_am_zero) & (!you_are_zero) & x0.ct_eq(&x1) & y0.ct_eq(&y1))
    }
}
impl<C: CurveConfig> ConditionallySelectable for GroupProjective<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: Fp::conditional_select(&a.x, &b.x, choice),
            y: Fp::conditional_select(&a.y, &b.y, choice),
            z: Fp::conditional_select(&a.z, &b.z, choice),
            _config: PhantomData,
        }
    }
}
impl<C: CurveConfig> PartialEq for GroupProjective<C> {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}
impl<C: CurveConfig> Eq for GroupProjective<C> {}

impl<'a, C: CurveConfig> From<&'a GroupAffine<C>> for GroupProjective<C> {
    fn from(value: &'a GroupAffine<C>) -> Self {
        Self::conditional_select(
            &Self {
                x: value.x,
                y: value.y,
                z: Fp::ONE,
                _config: PhantomData,
            },
            &Self::zero(),
            value.infinity,
        )
    }
}
impl<C: CurveConfig> From<GroupAffine<C>> for GroupProjective<C> {
    fn from(value: GroupAffine<C>) -> Self {
        Self::from(&value)
    }
}

/// Algorithm 7 of <https://eprint.iacr.org/2015/1060.pdf>. The formulas are complete only on
/// curves of odd order, and $y^2 = x^3 - 1$ has points of order 2, so a degenerate output
/// falls back to affine addition. Inputs in the prime order subgroup never take that branch.
impl<'a, 'b, C: CurveConfig> Add<&'b GroupProjective<C>> for &'a GroupProjective<C> {
    type Output = GroupProjective<C>;

    fn add(self, other: &'b GroupProjective<C>) -> Self::Output {
        let b3 = C::b3();
        let t0 = self.x * other.x;
        let t1 = self.y * other.y;
        let t2 = self.z * other.z;
        let t3 = (self.x + self.y) * (other.x + other.y) - (t0 + t1);
        let t4 = (self.y + self.z) * (other.y + other.z) - (t1 + t2);
        let y3 = (self.x + self.z) * (other.x + other.z) - (t0 + t2);
        let t0 = t0.double() + t0;
        let t2 = b3 * t2;
        let z3 = t1 + t2;
        let t1 = t1 - t2;
        let y3 = b3 * y3;
        let x3 = t3 * t1 - t4 * y3;
        let y3 = t1 * z3 + y3 * t0;
        let z3 = z3 * t4 + t0 * t3;
        let res = GroupProjective {
            x: x3,
            y: y3,
            z: z3,
            _config: PhantomData,
        };
        match bool::from(res.is_degenerate()) {
            true => self.add_exceptional(other),
            false => res,
        }
    }
}
impl<C: CurveConfig> Add for GroupProjective<C> {
    type Output = Self;
    fn add(self, other: Self) -> Self::Output {
        &self + &other
    }
}
impl<C: CurveConfig> AddAssign for GroupProjective<C> {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}
impl<'a, 'b, C: CurveConfig> Sub<&'b GroupProjective<C>> for &'a GroupProjective<C> {
    type Output = GroupProjective<C>;
    fn sub(self, other: &'b GroupProjective<C>) -> Self::Output {
        self + &(-other)
    }
}
impl<C: CurveConfig> Sub for GroupProjective<C> {
    type Output = Self;
    fn sub(self, other: Self) -> Self::Output {
        &self - &other
    }
}
impl<C: CurveConfig> SubAssign for GroupProjective<C> {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}
impl<'a, 'b, C: CurveConfig> Mul<&'b Fr> for &'a GroupProjective<C> {
    /// This is simply the `double-and-add` algorithm for multiplication, which is the ECC
    /// equivalent of the `square-and-multiply` algorithm used in modular exponentiation.
    ///
    /// <https://en.wikipedia.org/wiki/Elliptic_curve_point_multiplication#Double-and-add>
    type Output = GroupProjective<C>;
    fn mul(self, other: &'b Fr) -> Self::Output {
        self.mul_le_bytes(&other.to_le_bytes())
    }
}
impl<C: CurveConfig> Mul<Fr> for GroupProjective<C> {
    type Output = Self;
    fn mul(self, other: Fr) -> Self::Output {
        &self * &other
    }
}
impl<C: CurveConfig> std::iter::Sum for GroupProjective<C> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, p| acc + p)
    }
}
