//! This module implements the prime fields underneath the BW6-761 tower. The modulus of each
//! field is assumed to be prime (and therefore odd). The basic idea is that we use the
//! modulus to generate a struct, instances of which can be added, multiplied, etc.
//! all while conforming to the rules dictated by closed cyclic abelian groups.
//! The generated struct is flexible enough to handle massively large multiprecision
//! moduli and values, and performs all such modular arithmetic internally. The only
//! requirements of the user are to provide the modulus, and the desired bit precision.
//! Due to efficiency considerations, we do not simply "do modular arithmetic" on numbers.
//! There are two levels of performance that we implement.
//!
//! 1. Montgomery arithmetic:
//!     this is a special type of modular arithmetic that
//!     allows for quick execution of binary operations
//!     for a given modulus. This relies on the generation
//!     of additional constants. For more information, see Ref 1.
//! 2. Constant-time operations:
//!     all arithmetic on field elements runs on the `ConstMontyForm` struct of
//!     `crypto_bigint`, whose operations do not branch on the values involved.
//!     The square root is the one exception, see the notes on `sqrt` below.
//!
//! BW6-761 needs two of these fields. The base field $\mathbb{F}_q$ has a 761-bit modulus and
//! lives in a `U768`. The scalar field $\mathbb{F}_r$ (see `fr.rs`) is the 377-bit base field of
//! BLS12-377, and lives in a `U384`.
//!
//! References
//! ----------
//! 1. <https://cacr.uwaterloo.ca/hac/about/chap14.pdf>

use crypto_bigint::subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use crypto_bigint::{rand_core::CryptoRngCore, U768};
use num_traits::{Inv, One, Zero};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use subtle::CtOption;

/// This defines the key properties of a field extension. Now, mathematically,
/// a finite field satisfies many rigorous mathematical properties. The
/// (non-exhaustive) list below simply suffices to illustrate those properties
/// that are purely relevant to the task at hand here.
///
/// The const parameters are the absolute degree `D` of the field over the prime field, and the
/// number `N` of coefficients an element carries over the level immediately below it.
pub trait FieldExtensionTrait<const D: usize, const N: usize>:
    Sized
    + Copy
    + Clone
    + std::fmt::Debug
    + Default
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Mul<Output = Self>
    + MulAssign
    + Div<Output = Self>
    + DivAssign
    + Neg<Output = Self>
    + PartialEq
    + ConstantTimeEq
    + ConditionallySelectable
    + Zero
    + One
    + Inv<Output = Self>
    + From<u64>
{
    /// the element adjoined to build the next level of the tower, namely $\xi=-4$ for the base
    /// field and $u$ for the cubic extension
    fn non_residue() -> Self;
    // this endomorphism is key for the Miller loop and the final exponentiation
    fn frobenius(&self, exponent: usize) -> Self;
    fn sqrt(&self) -> CtOption<Self>;
    fn square(&self) -> Self;
    fn rand<R: CryptoRngCore>(rng: &mut R) -> Self;
    fn is_square(&self) -> Choice;
    fn sgn0(&self) -> Choice;
}

/// Due to the fact that we use `crypto_bigint` to handle the multiprecision arithmetic
/// we must accept (for now) the fact that it requires the usage of a macro,
/// `impl_modulus!`, which generates and contains all the need information.
/// This means that we roll our implementation into a macro that
/// provides all the needed functionality.
///
/// Every path inside the macro is absolute, so it can be invoked from any module (including
/// test modules defining toy fields) without a particular set of imports at the call site.
/// The generated `ModulusStruct` and `Output` items mean one invocation per module.
macro_rules! define_finite_prime_field {
    ($wrapper_name:ident, $uint_type:ty, $modulus:expr, $degree:expr, $nreps:expr, $non_residue:expr) => {
        ::crypto_bigint::impl_modulus!(ModulusStruct, $uint_type, $modulus);

        //special struct for const-time arithmetic on montgomery form integers mod p
        type Output = ::crypto_bigint::modular::ConstMontyForm<ModulusStruct, { <$uint_type>::LIMBS }>;
        #[derive(Clone, Debug, Copy)] //to be used in const contexts
        pub struct $wrapper_name(ModulusStruct, Output);

        #[allow(dead_code)]
        impl $wrapper_name {
            // builder structure to create elements in the base field of a given value
            pub const fn new(value: $uint_type) -> Self {
                Self(ModulusStruct, Output::new(&value))
            }
            /// parse a decimal string, returning `None` on anything that is not a digit
            pub fn new_from_str(value: &str) -> Option<Self> {
                let ten = Self::from(10u64);
                let mut res = Self::ZERO;
                for c in value.chars() {
                    let d = c.to_digit(10)?;
                    res = res * ten + Self::from(d as u64);
                }
                Some(res)
            }
            // take the element and convert it to "normal" form from montgomery form
            pub const fn value(&self) -> $uint_type {
                self.1.retrieve()
            }
            pub fn characteristic() -> $uint_type {
                <ModulusStruct as ::crypto_bigint::modular::ConstMontyParams<
                    { <$uint_type>::LIMBS },
                >>::MODULUS
                    .as_nz_ref()
                    .get()
            }
            pub const ZERO: Self = Self::new(<$uint_type>::ZERO);
            pub const ONE: Self = Self::new(<$uint_type>::ONE);
            pub const TWO: Self = Self::new(<$uint_type>::from_u64(2));
            pub const THREE: Self = Self::new(<$uint_type>::from_u64(3));
            pub const FOUR: Self = Self::new(<$uint_type>::from_u64(4));

            pub fn square(&self) -> Self {
                Self(ModulusStruct, self.1.square())
            }
            pub fn double(&self) -> Self {
                *self + *self
            }
            /// Square roots are found with Tonelli-Shanks. When $p\equiv 3 \mod 4$, which is the
            /// case for the BW6-761 base field, the algorithm collapses to the single
            /// exponentiation $n^{(p+1)/4}$, and this is the root returned. For other moduli the
            /// general loop runs, which is variable time in the 2-adicity of $p-1$.
            ///
            /// The result is `None` exactly when the input is not a quadratic residue.
            pub fn sqrt(&self) -> ::subtle::CtOption<Self> {
                use ::num_traits::Pow;
                use ::subtle::ConstantTimeEq;
                let one = <$uint_type>::ONE;
                let p_minus_one = Self::characteristic().wrapping_sub(&one);
                let mut t = p_minus_one;
                let mut s = 0u32;
                while t.as_words()[0] & 1 == 0 {
                    t = t >> 1;
                    s += 1;
                }
                let root = if s == 1 {
                    self.pow(Self::characteristic().wrapping_add(&one) >> 2)
                } else {
                    let mut z = Self::TWO;
                    while bool::from(z.is_square()) {
                        z += Self::ONE;
                    }
                    let mut m = s;
                    let mut c = z.pow(t);
                    let mut tt = self.pow(t);
                    let mut r = self.pow(t.wrapping_add(&one) >> 1);
                    while tt != Self::ONE && tt != Self::ZERO {
                        let mut i = 0u32;
                        let mut tmp = tt;
                        while tmp != Self::ONE {
                            tmp = tmp.square();
                            i += 1;
                            if i == m {
                                return ::subtle::CtOption::new(
                                    Self::ZERO,
                                    ::subtle::Choice::from(0u8),
                                );
                            }
                        }
                        let mut b = c;
                        for _ in 0..(m - i - 1) {
                            b = b.square();
                        }
                        m = i;
                        c = b.square();
                        tt *= c;
                        r *= b;
                    }
                    r
                };
                ::subtle::CtOption::new(root, root.square().ct_eq(self))
            }
            /// Euler's criterion, zero counts as a square
            pub fn is_square(&self) -> ::subtle::Choice {
                use ::num_traits::Pow;
                use ::subtle::ConstantTimeEq;
                let p_minus_1_div_2 =
                    Self::characteristic().wrapping_sub(&<$uint_type>::ONE) >> 1;
                let legendre = self.pow(p_minus_1_div_2);
                legendre.ct_eq(&Self::ZERO) | legendre.ct_eq(&Self::ONE)
            }
            /// the parity of the canonical representative
            pub fn sgn0(&self) -> ::subtle::Choice {
                ::subtle::Choice::from((self.value().as_words()[0] & 1) as u8)
            }
            pub fn rand<R: ::crypto_bigint::rand_core::CryptoRngCore>(rng: &mut R) -> Self {
                use ::crypto_bigint::RandomMod;
                Self::new(<$uint_type>::random_mod(
                    rng,
                    <ModulusStruct as ::crypto_bigint::modular::ConstMontyParams<
                        { <$uint_type>::LIMBS },
                    >>::MODULUS
                        .as_nz_ref(),
                ))
            }
            pub fn to_be_bytes(&self) -> <$uint_type as ::crypto_bigint::Encoding>::Repr {
                use ::crypto_bigint::Encoding;
                self.value().to_be_bytes()
            }
            // scalar multiplication walks the bits from the least significant byte
            pub fn to_le_bytes(&self) -> <$uint_type as ::crypto_bigint::Encoding>::Repr {
                use ::crypto_bigint::Encoding;
                self.value().to_le_bytes()
            }
            /// big-endian decoding, which fails for encodings of integers at or above the modulus
            pub fn from_be_bytes(
                bytes: &<$uint_type as ::crypto_bigint::Encoding>::Repr,
            ) -> ::subtle::CtOption<Self> {
                use ::crypto_bigint::Encoding;
                use ::subtle::ConstantTimeLess;
                let value = <$uint_type>::from_be_bytes(*bytes);
                let in_range = value.ct_lt(&Self::characteristic());
                ::subtle::CtOption::new(Self::new(value), in_range)
            }
        }
        impl $crate::fields::fp::FieldExtensionTrait<$degree, $nreps> for $wrapper_name {
            fn non_residue() -> Self {
                $non_residue
            }
            // the Frobenius endomorphism fixes the prime field
            fn frobenius(&self, _exponent: usize) -> Self {
                *self
            }
            fn sqrt(&self) -> ::subtle::CtOption<Self> {
                $wrapper_name::sqrt(self)
            }
            fn square(&self) -> Self {
                $wrapper_name::square(self)
            }
            fn rand<R: ::crypto_bigint::rand_core::CryptoRngCore>(rng: &mut R) -> Self {
                $wrapper_name::rand(rng)
            }
            fn is_square(&self) -> ::subtle::Choice {
                $wrapper_name::is_square(self)
            }
            fn sgn0(&self) -> ::subtle::Choice {
                $wrapper_name::sgn0(self)
            }
        }
        impl From<u64> for $wrapper_name {
            fn from(value: u64) -> Self {
                Self::new(<$uint_type>::from_u64(value))
            }
        }
        /// We now implement binary operations on the base field. This more or less
        /// just wraps the same operations on the underlying montgomery representations
        /// of the field element. All binops with assignment equivalents are given
        impl ::std::ops::Add for $wrapper_name {
            type Output = Self;
            fn add(self, other: Self) -> Self {
                Self(ModulusStruct, self.1 + other.1)
            }
        }
        impl ::std::ops::AddAssign for $wrapper_name {
            fn add_assign(&mut self, other: Self) {
                *self = *self + other;
            }
        }
        impl ::num_traits::Zero for $wrapper_name {
            fn zero() -> Self {
                Self::ZERO
            }
            fn is_zero(&self) -> bool {
                use ::subtle::ConstantTimeEq;
                bool::from(self.ct_eq(&Self::ZERO))
            }
        }
        impl ::num_traits::One for $wrapper_name {
            fn one() -> Self {
                Self::ONE
            }
        }
        impl Default for $wrapper_name {
            fn default() -> Self {
                Self::ZERO
            }
        }
        impl ::std::ops::Sub for $wrapper_name {
            type Output = Self;
            fn sub(self, other: Self) -> Self {
                Self(ModulusStruct, self.1 - other.1)
            }
        }
        impl ::std::ops::SubAssign for $wrapper_name {
            fn sub_assign(&mut self, other: Self) {
                *self = *self - other;
            }
        }
        /// Equality is decided in constant time with `subtle::ConstantTimeEq`, which returns a
        /// `Choice` that `PartialEq` unwraps.
        impl ::subtle::ConstantTimeEq for $wrapper_name {
            fn ct_eq(&self, other: &Self) -> ::subtle::Choice {
                ::subtle::ConstantTimeEq::ct_eq(&self.1, &other.1)
            }
        }
        impl PartialEq for $wrapper_name {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                use ::subtle::ConstantTimeEq;
                bool::from(self.ct_eq(other))
            }
        }
        impl Eq for $wrapper_name {}
        impl ::subtle::ConditionallySelectable for $wrapper_name {
            fn conditional_select(a: &Self, b: &Self, choice: ::subtle::Choice) -> Self {
                Self(
                    ModulusStruct,
                    <Output as ::subtle::ConditionallySelectable>::conditional_select(
                        &a.1, &b.1, choice,
                    ),
                )
            }
        }
        impl ::std::ops::Mul for $wrapper_name {
            type Output = Self;
            fn mul(self, other: Self) -> Self {
                Self(ModulusStruct, self.1 * other.1)
            }
        }
        impl ::std::ops::MulAssign for $wrapper_name {
            fn mul_assign(&mut self, other: Self) {
                *self = *self * other;
            }
        }
        /// Inversion uses the Bernstein-Yang algorithm of `crypto_bigint`,
        /// <https://eprint.iacr.org/2019/266.pdf>, which returns a constant-time option that is
        /// empty for zero. Zero is mapped to zero here, so callers that need to tell the two
        /// apart must check for zero themselves.
        impl ::num_traits::Inv for $wrapper_name {
            type Output = Self;
            fn inv(self) -> Self {
                let inverse: ::subtle::CtOption<Output> = self.1.inv().into();
                Self(ModulusStruct, inverse.unwrap_or(Self::ZERO.1))
            }
        }
        #[allow(clippy::suspicious_arithmetic_impl)]
        impl ::std::ops::Div for $wrapper_name {
            type Output = Self;
            fn div(self, other: Self) -> Self {
                use ::num_traits::Inv;
                self * other.inv()
            }
        }
        impl ::std::ops::DivAssign for $wrapper_name {
            fn div_assign(&mut self, other: Self) {
                *self = *self / other;
            }
        }
        impl ::std::ops::Neg for $wrapper_name {
            type Output = Self;
            fn neg(self) -> Self {
                Self(ModulusStruct, -self.1)
            }
        }
        impl ::num_traits::Pow<$uint_type> for $wrapper_name {
            type Output = Self;
            fn pow(self, rhs: $uint_type) -> Self::Output {
                Self(ModulusStruct, self.1.pow(&rhs))
            }
        }
    };
}
pub(crate) use define_finite_prime_field;

const BW6_761_MOD_STRING: &str = "0122e824fb83ce0ad187c94004faff3eb926186a81d14688528275ef8087be41707ba638e584e91903cebaff25b423048689c8ed12f9fd9071dcd3dc73ebff2e98a116c25667a8f8160cf8aeeaf0a437e6913e6870000082f49d00000000008b";

// the cubic non-residue $\xi = -4$ that defines $\mathbb{F}_{q^3}$, which is also neither a
// square nor a cube, so it serves the sextic extension as well
define_finite_prime_field!(Fp, U768, BW6_761_MOD_STRING, 1, 1, -Fp::FOUR);

/// the code below makes the base field "visible" to higher
/// order extensions. The issue is really the fact that generic
/// traits cannot enforce arithmetic relations, such as the
/// statement "the child finite field of an extension must have
/// a degree strictly less than the current degree". In order to get around this
/// we make the extension explicitly usable by the higher order extension
/// by manually specifying the traits D, N. This enforces the logic
/// by means of manual input.
impl FieldExtensionTrait<3, 3> for Fp {
    fn non_residue() -> Self {
        <Fp as FieldExtensionTrait<1, 1>>::non_residue()
    }
    fn frobenius(&self, exponent: usize) -> Self {
        <Fp as FieldExtensionTrait<1, 1>>::frobenius(self, exponent)
    }
    fn sqrt(&self) -> CtOption<Self> {
        Fp::sqrt(self)
    }
    fn square(&self) -> Self {
        Fp::square(self)
    }
    fn rand<R: CryptoRngCore>(rng: &mut R) -> Self {
        Fp::rand(rng)
    }
    fn is_square(&self) -> Choice {
        Fp::is_square(self)
    }
    fn sgn0(&self) -> Choice {
        Fp::sgn0(self)
    }
}
