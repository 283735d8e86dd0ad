//! The target group $\mathbb{G}_T$ of the pairing, which is the order $r$ subgroup of the
//! multiplicative group of $\mathbb{F}_{q^6}$. Its elements all lie in the cyclotomic subgroup
//! of order $\Phi_6(q) = q^2 - q + 1$, where inversion is conjugation and squaring has a
//! compressed form.
//!
//! To line up with the source groups the group law is written additively, so `+` is field
//! multiplication, `-` is conjugation, and scalar multiplication by `Fr` is exponentiation.

use crate::fields::fp::Fp;
use crate::fields::fp3::Fp3;
use crate::fields::fp6::Fp6;
use crate::fields::fr::Fr;
use crate::groups::group::GroupTrait;
use crate::pairing::MillerLoopResult;
use crypto_bigint::rand_core::CryptoRngCore;
use crypto_bigint::U768;
use num_traits::{One, Zero};
use std::ops::{Add, AddAssign, Mul, Neg, Sub};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Do you have vertigo? Then you may want to close your eyes when you scroll by this massive
/// wall of text ...
/// this magic number is `reduced_pairing(&G1Projective::generator(), &G2Projective::generator())`
const GT: Fp6 = Fp6::new(&[
    Fp3::new(&[
            Fp::new(U768::from_words([
                1866917392333525675,
                9019017979917842912,
                12729564351059588165,
                14754485367097807490,
                9034581475657872961,
                4130567157403392347,
                14283232727542885771,
                5274231786518368377,
                18406468691386683182,
                490401018958178334,
                8001210085466483821,
                53591287849551542,
            ])),
            Fp::new(U768::from_words([
                13508005019770789855,
                11883572595126204384,
                7557619583323673461,
                6426276033826780060,
                5538116037409678227,
                7211005398244167750,
                12034887508624842125,
                18170249513177673511,
                4027128699949356351,
                12844925553804018180,
                4460711566834267812,
                31812647999005236,
            ])),
            Fp::new(U768::from_words([
                15783398902554939187,
                3196775497794500353,
                187200569449997737,
                9567539927025452081,
                17176612040171372672,
                15887600961111720209,
                6107151047594194603,
                14887029105314095329,
                1470263120220750747,
                13181137112055296507,
                15703908678170591417,
                47251227977889554,
            ])),
    ]),
    Fp3::new(&[
            Fp::new(U768::from_words([
                1088279181259282057,
                17284901277986235001,
                8778601955663811269,
                13498294655590578327,
                7767959405495006744,
                18294788899730661112,
                10608032752328740228,
                14905513562376094387,
                10903791011586557293,
                8424030639423449033,
                14521226669841043587,
                44073100290886106,
            ])),
            Fp::new(U768::from_words([
                14079858909592960144,
                17980870880831975208,
                9996843911213186624,
                17554388952537096962,
                8275063143889821991,
                11324802691382075592,
                17891087755719153040,
                14973155306985674337,
                10061933853027133613,
                12351207990124895758,
                6207915826021302144,
                41205037514468460,
            ])),
            Fp::new(U768::from_words([
                16733634723003935089,
                2969816874180648833,
                4542129079164923410,
                12954418293006521660,
                5952849870789656781,
                15375832920750913306,
                13301535056147080599,
                829869610864073572,
                2868361965623072392,
                10316733295315427980,
                16092354682006370503,
                20122681984714033,
            ])),
    ]),
]);

#[derive(Copy, Clone, Debug)]
pub struct Gt(pub(crate) Fp6);

impl<'a> Neg for &'a Gt {
    type Output = Gt;

    #[inline]
    fn neg(self) -> Gt {
        // The element is unitary, so we just conjugate.
        Gt(self.0.unitary_inverse())
    }
}
impl Neg for Gt {
    type Output = Gt;

    #[inline]
    fn neg(self) -> Gt {
        -&self
    }
}

impl ConstantTimeEq for Gt {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConditionallySelectable for Gt {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Gt(Fp6::conditional_select(&a.0, &b.0, choice))
    }
}

impl PartialEq for Gt {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}
impl Eq for Gt {}
#[allow(clippy::suspicious_arithmetic_impl)]
impl<'a, 'b> Add<&'b Gt> for &'a Gt {
    type Output = Gt;

    #[inline]
    fn add(self, rhs: &'b Gt) -> Gt {
        Gt(self.0 * rhs.0)
    }
}
impl Add for Gt {
    type Output = Gt;
    fn add(self, rhs: Gt) -> Gt {
        &self + &rhs
    }
}
impl AddAssign for Gt {
    fn add_assign(&mut self, rhs: Gt) {
        *self = *self + rhs;
    }
}

impl<'a, 'b> Sub<&'b Gt> for &'a Gt {
    type Output = Gt;

    #[inline]
    fn sub(self, rhs: &'b Gt) -> Gt {
        self + &(-rhs)
    }
}
impl Sub for Gt {
    type Output = Gt;
    fn sub(self, rhs: Gt) -> Gt {
        &self - &rhs
    }
}
#[allow(clippy::suspicious_arithmetic_impl)]
impl<'a, 'b> Mul<&'b Fr> for &'a Gt {
    /// This is simply the `double-and-add` algorithm for multiplication, which is the ECC
    /// equivalent of the `square-and-multiply` algorithm used in modular exponentiation.
    ///
    /// <https://en.wikipedia.org/wiki/Elliptic_curve_point_multiplication#Double-and-add>
    type Output = Gt;
    fn mul(self, other: &'b Fr) -> Self::Output {
        let bits = other.to_le_bytes();
        let mut res = Self::Output::identity();
        for bit in bits.iter().rev() {
            for i in (0..8).rev() {
                res = res.double();
                let sum = &res + self;
                res = Gt::conditional_select(&res, &sum, Choice::from((bit >> i) & 1));
            }
        }
        res
    }
}

impl Mul<Fr> for Gt {
    type Output = Self;
    fn mul(self, rhs: Fr) -> Self::Output {
        &self * &rhs
    }
}
impl GroupTrait for Gt {
    fn generator() -> Self {
        Self(GT)
    }

    fn rand<R: CryptoRngCore>(rng: &mut R) -> Self {
        loop {
            let inner = <Fp6 as crate::fields::fp::FieldExtensionTrait<6, 2>>::rand(rng);
            if !inner.is_zero() {
                return MillerLoopResult(inner).final_exponentiation();
            }
        }
    }

    /// membership of the cyclotomic subgroup, $f^{q^2} \cdot f = f^q$
    fn is_on_curve(&self) -> Choice {
        (self.0.frobenius(2) * self.0).ct_eq(&self.0.frobenius(1)) & !self.0.ct_eq(&Fp6::zero())
    }

    fn is_torsion_free(&self) -> Choice {
        let order = Fr::characteristic();
        self.is_on_curve() & self.0.cyclotomic_exp(order.as_words()).ct_eq(&Fp6::one())
    }
}
impl Gt {
    /// Returns the group identity, which is $1$.
    pub fn identity() -> Gt {
        Gt(Fp6::one())
    }

    pub fn is_identity(&self) -> bool {
        self.0.is_one()
    }

    /// Doubles this group element.
    pub fn double(&self) -> Gt {
        Gt(self.0.cyclotomic_square())
    }

    /// The underlying element of $\mathbb{F}_{q^6}$.
    pub fn value(&self) -> Fp6 {
        self.0
    }
}
