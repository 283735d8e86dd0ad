//! Recovering curve points from an $x$-coordinate.
//!
//! For a short Weierstrass curve $y^2 = x^3 + ax + b$ the candidate $y$ is a square root of the
//! right hand side, which exists for roughly half of all $x$. Nothing here loops or retries: an
//! $x$ with no solution is reported as such, and it is up to the caller to choose another.

use crate::fields::fp::{FieldExtensionTrait, Fp};
use crate::groups::g1::{G1Affine, G1Projective};
use crate::groups::g2::{G2Affine, G2Projective};
use crate::groups::group::GroupError;

/// Solves $y^2 = x^3 + ax + b$ for $y$.
///
/// The root returned is whatever the field's `sqrt` produces, which for the BW6-761 base field
/// is $(x^3+ax+b)^{(q+1)/4}$. Its negation is the only other solution.
pub fn curve_point_y_at_x<F: FieldExtensionTrait<1, 1>>(x: F, a: F, b: F) -> Result<F, GroupError> {
    let rhs = x.square() * x + a * x + b;
    let y: Option<F> = rhs.sqrt().into();
    tracing::debug!(found = y.is_some(), "curve_point_y_at_x");
    y.ok_or(GroupError::NoSolution)
}

/// A point on $E: y^2 = x^3 - 1$ with the given $x$. It is a point of $E(\mathbb{F}_q)$ but in
/// general not of $\mathbb{G}_1$.
pub fn g1_curve_point_at_x(x: Fp) -> Result<G1Projective, GroupError> {
    let y = curve_point_y_at_x(x, Fp::ZERO, -Fp::ONE)?;
    Ok(G1Projective::from(G1Affine::new_on_curve([x, y])?))
}

/// A point on the twist $E': y^2 = x^3 + 4$ with the given $x$, again not necessarily of
/// $\mathbb{G}_2$.
pub fn g2_curve_point_at_x(x: Fp) -> Result<G2Projective, GroupError> {
    let y = curve_point_y_at_x(x, Fp::ZERO, Fp::FOUR)?;
    Ok(G2Projective::from(G2Affine::new_on_curve([x, y])?))
}

/// The point at $x$ with the cofactor cleared, which lands it in $\mathbb{G}_1$. The result may
/// be the identity.
pub fn g1_subgroup_point_at_x(x: Fp) -> Result<G1Projective, GroupError> {
    Ok(g1_curve_point_at_x(x)?.mul_by_cofactor())
}

pub fn g2_subgroup_point_at_x(x: Fp) -> Result<G2Projective, GroupError> {
    Ok(g2_curve_point_at_x(x)?.mul_by_cofactor())
}
