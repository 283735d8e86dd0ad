//! # Tate: the optimal ate pairing on BW6-761
//!
//! Tate is a Rust library implementing the optimal ate pairing on the BW6-761 curve, the outer
//! curve of the BLS12-377 / BW6-761 two-cycle used to verify recursive zk-SNARKs. It provides the
//! finite fields of the curve, the groups $\mathbb{G}_1$, $\mathbb{G}_2$ and $\mathbb{G}_T$, and a
//! pairing engine split into reusable stages, so that a verifier can run several Miller loops
//! and share a single final exponentiation.
//!
//! ## Quick Start
//!
//! Add Tate to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! tate = "0.1.0"
//! ```
//!
//! ## Key Features
//!
//! - Finite field arithmetic (𝔽_q, 𝔽_q³, 𝔽_q⁶ and the scalar field 𝔽_r)
//! - Elliptic curve group operations (𝔾₁, 𝔾₂, 𝔾ₜ) with complete formulas
//! - Optimal ate pairing with reusable 𝔾₂ precomputation
//! - Double and n-way Miller loops sharing one final exponentiation
//! - Recovering curve points from an x-coordinate
//!
//! ## Basic Usage
//!
//! Bilinearity in one line, $e(aP, Q) = e(P, aQ)$:
//!
//! ```rust
//! use tate::*;
//! use crypto_bigint::rand_core::OsRng;
//!
//! let a = Fr::rand(&mut OsRng);
//! let p = G1Projective::generator();
//! let q = G2Projective::generator();
//! assert_eq!(reduced_pairing(&(p * a), &q), reduced_pairing(&p, &(q * a)));
//! ```
//!
//! A verifier checking $e(P_1, Q_1) = e(P_2, Q_2)$ runs both loops at once and exponentiates
//! once:
//!
//! ```rust
//! use tate::*;
//!
//! let p = G1Projective::generator();
//! let q = G2Projective::generator();
//! let f = double_miller_loop(
//!     &precompute_g1(&p),
//!     &precompute_g2(&q, &BW6_761).expect("M-twist"),
//!     &precompute_g1(&-p),
//!     &precompute_g2(&q, &BW6_761).expect("M-twist"),
//! )
//! .expect("same parameters");
//! assert!(final_exponentiation(&f).expect("nonzero").is_identity());
//! ```
//!
//! ## Core Components
//!
//! - [`Fp`], [`Fp3`], [`Fp6`], [`Fr`]: Finite field implementations
//! - [`G1Projective`], [`G2Projective`], [`Gt`]: Group elements
//! - [`PairingParams`], [`BW6_761`]: the constants driving the pairing
//! - [`precompute_g2`], [`miller_loop`], [`final_exponentiation`]: the pairing stages
//! - [`pairing()`], [`reduced_pairing`]: the composed entrypoints
//! - [`curve_point_y_at_x`]: points from x-coordinates
//!
//! ## Performance and Security
//!
//! Field and group arithmetic is constant time in the secret inputs, built on `crypto-bigint`
//! and `subtle`. The Miller loop branches only on the public loop counts and on whether an input
//! is the identity.

mod curve_utils;
mod fields;
mod groups;
mod pairing;
mod params;

pub use crate::fields::fp::{FieldExtensionTrait, Fp};
pub use crate::fields::fp3::Fp3;
pub use crate::fields::fp6::Fp6;
pub use crate::fields::fr::Fr;
pub use crate::groups::g1::{G1Affine, G1Config, G1Projective};
pub use crate::groups::g2::{G2Affine, G2Config, G2Projective};
pub use crate::groups::group::{CurveConfig, GroupAffine, GroupError, GroupProjective, GroupTrait};
pub use crate::groups::gt::Gt;

pub use crate::curve_utils::{
    curve_point_y_at_x, g1_curve_point_at_x, g1_subgroup_point_at_x, g2_curve_point_at_x,
    g2_subgroup_point_at_x,
};
pub use crate::pairing::{
    double_miller_loop, final_exponentiation, glued_miller_loop, miller_loop, pairing,
    precompute_g1, precompute_g2, reduced_pairing, EllCoeffs, G1PreComputed, G2PreComputed,
    MillerLoopResult, PairingError,
};
pub use crate::params::{naf, CurveId, LoopDigits, PairingParams, TwistType, BW6_761};
