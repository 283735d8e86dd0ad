//! This creates the specific instance of G1 for BW6-761. Namely,
//! $\mathbb{G}_1=E(\mathbb{F}_q)[r]$ for $E: y^2 = x^3 - 1$. Unlike BN254, the curve over the
//! base field has a large cofactor $h_1$ (384 bits), so a point on the curve is not automatically
//! in the group. The plain constructors only check the curve equation, while the byte decoders
//! and the `TryFrom` conversions also perform the subgroup check.
//!
//! The generator is the one fixed by libff and arkworks for this curve. Notice that there is not
//! much here left to specialise to G1, and that G2 differs only in its constants.

use crate::fields::fp::Fp;
use crate::groups::group::{CurveConfig, GroupAffine, GroupError, GroupProjective};
use crypto_bigint::{U384, U768};

#[derive(Copy, Clone, Debug)]
pub struct G1Config;

impl CurveConfig for G1Config {
    const NAME: &'static str = "G1";
    const GENERATOR: [Fp; 2] = [
        Fp::new(U768::from_words([
            0x4088f3af66e5b43d,
            0x055928aca6af603f,
            0x6750dd0356133e82,
            0x03758f9a280ca27f,
            0x5bd71fa0c9ea0971,
            0xa17a54ce47729b90,
            0x11dbfcd294c2e746,
            0x79017ffac15520ac,
            0xee05c54b85f56fc7,
            0xe6a0cfb7551b27f0,
            0xb277ce98a477beae,
            0x01075b020ea190c8,
        ])),
        Fp::new(U768::from_words([
            0xbafc8f2db4e95363,
            0xad1cb2be0b20d2a1,
            0xb2b08119cad0fb93,
            0x9f9df141b3053253,
            0xbe3fb90b6fc2cdd4,
            0xcc685d31717a4c55,
            0xc5b8fa1771b5b806,
            0x265909f1af7e0dba,
            0x1a7348d2a2e573a3,
            0x0f952589884c9ec6,
            0xe6fd637b45cc2a42,
            0x0058b84e0a6fc574,
        ])),
    ];
    const COFACTOR: U384 = U384::from_words([
        0x3de580000000007c,
        0x832ba4061000003b,
        0xc61c554757551c0c,
        0xc856a0853c9db94c,
        0x2c77d5ac34cb12ef,
        0xad1972339049ce76,
    ]);
    fn b() -> Fp {
        -Fp::ONE
    }
}

/// type alias for affine representation on base field
pub type G1Affine = GroupAffine<G1Config>;
/// type alias for projective representation on base field
pub type G1Projective = GroupProjective<G1Config>;

impl G1Affine {
    /// Instantiate a new element in affine coordinates on $E(\mathbb{F}_q)$. Only the curve check
    /// is performed; see `new_subgroup_checked` for inputs that must lie in G1.
    /// # Arguments
    /// * `v` - a tuple of field elements that represent the x and y coordinates of the point
    /// ```
    /// use tate::*;
    /// let g = G1Affine::generator();
    /// assert!(G1Affine::new([g.x(), g.y()]).is_ok());
    /// assert!(G1Affine::new([Fp::ONE, Fp::ONE]).is_err());
    /// ```
    pub fn new(v: [Fp; 2]) -> Result<Self, GroupError> {
        Self::new_on_curve(v)
    }
    /// Instantiate a new element of G1. Since $h_1 \neq 1$, a point on the curve is not
    /// automatically in the group, and this additionally runs the subgroup check.
    pub fn new_subgroup_checked(v: [Fp; 2]) -> Result<Self, GroupError> {
        Self::new_in_subgroup(v)
    }
}

impl G1Projective {
    /// Instantiate a new element in projective coordinates, with the curve check only.
    /// # Arguments
    /// * `v` - a tuple of field elements that represent the x, y, and z coordinates of the point
    pub fn new(v: [Fp; 3]) -> Result<Self, GroupError> {
        Self::new_on_curve(v)
    }
    pub fn new_subgroup_checked(v: [Fp; 3]) -> Result<Self, GroupError> {
        Self::new_in_subgroup(v)
    }
}
impl<'a> TryFrom<&'a [Fp; 2]> for G1Projective {
    type Error = GroupError;
    fn try_from(value: &'a [Fp; 2]) -> Result<Self, Self::Error> {
        Ok(G1Affine::new_subgroup_checked(*value)?.into())
    }
}
impl TryFrom<[Fp; 2]> for G1Projective {
    type Error = GroupError;
    fn try_from(value: [Fp; 2]) -> Result<Self, Self::Error> {
        G1Projective::try_from(&value)
    }
}
