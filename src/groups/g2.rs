//! This creates the specific instance of G2 for BW6-761. Since the embedding degree is 6 and the
//! curve admits a sextic twist, the twist $E': y^2 = x^3 + 4$ is defined over the base field
//! itself, and $\mathbb{G}_2 = E'(\mathbb{F}_q)[r]$. This is the main computational advantage of
//! BW6-761: both source groups live over $\mathbb{F}_q$ and share all of their arithmetic.
//!
//! The twist is an M-twist, in the sense that the map into $E(\mathbb{F}_{q^6})$ is
//! $(x', y') \mapsto (x' v^{-2}, y' v^{-3})$ with $v^6 = -4$. The pairing module never
//! materialises that map; the line functions are evaluated in sparse form instead.
//!
//! All public facing constructors here implement the subgroup check to ensure that the user
//! cannot input a value in $E'(\mathbb{F}_q)$ that is not in the r-torsion.

use crate::fields::fp::Fp;
use crate::groups::group::{CurveConfig, GroupAffine, GroupError, GroupProjective};
use crypto_bigint::{U384, U768};

#[derive(Copy, Clone, Debug)]
pub struct G2Config;

impl CurveConfig for G2Config {
    const NAME: &'static str = "G2";
    const GENERATOR: [Fp; 2] = [
        Fp::new(U768::from_words([
            0xa830c194cd025f1c,
            0x6410cf4fe1bf995b,
            0x00e96efbc2ad54b0,
            0xce6948cb3cd208d7,
            0x963317a300e1b6ba,
            0xc5bbcae9ac70e7c7,
            0x734ec3f1f09feb58,
            0x26b41c5dab3da268,
            0x4c06201013890f6d,
            0xd61053aac5a7115f,
            0xc852a82e69d660f9,
            0x0110133241d9b816,
        ])),
        Fp::new(U768::from_words([
            0xeb70a16728c73b61,
            0x91ec0594f9eac689,
            0x58aa2d3a3c5a02a5,
            0x3ea96fcd504affc7,
            0x8906c170ffa82300,
            0x64f293dbd2c712b8,
            0x94c97eb733293fef,
            0x0a1d86c80b95a59c,
            0x81a78e2753ffe316,
            0x26b7cf9acec2181c,
            0x8179eb10e4b6d2dc,
            0x0017c3357761369f,
        ])),
    ];
    // h_2 = h_1 - 7, the two curves having traces t and -t up to the twist
    const COFACTOR: U384 = U384::from_words([
        0x3de5800000000075,
        0x832ba4061000003b,
        0xc61c554757551c0c,
        0xc856a0853c9db94c,
        0x2c77d5ac34cb12ef,
        0xad1972339049ce76,
    ]);
    fn b() -> Fp {
        Fp::FOUR
    }
}

pub type G2Affine = GroupAffine<G2Config>;
pub type G2Projective = GroupProjective<G2Config>;

impl G2Affine {
    /// Instantiate a new element in affine coordinates in G2, with the curve and subgroup checks.
    /// ```
    /// use tate::*;
    /// let g = G2Affine::generator();
    /// assert!(G2Affine::new([g.x(), g.y()]).is_ok());
    /// ```
    pub fn new(v: [Fp; 2]) -> Result<Self, GroupError> {
        Self::new_in_subgroup(v)
    }
}
impl G2Projective {
    pub fn new(v: [Fp; 3]) -> Result<Self, GroupError> {
        Self::new_in_subgroup(v)
    }
}
impl<'a> TryFrom<&'a [Fp; 2]> for G2Projective {
    type Error = GroupError;
    fn try_from(value: &'a [Fp; 2]) -> Result<Self, Self::Error> {
        Ok(G2Affine::new(*value)?.into())
    }
}
impl TryFrom<[Fp; 2]> for G2Projective {
    type Error = GroupError;
    fn try_from(value: [Fp; 2]) -> Result<Self, Self::Error> {
        G2Projective::try_from(&value)
    }
}
