//! The constants that drive the optimal ate pairing, gathered into one value.
//!
//! The pairing of BW6-761 is built from two Miller loops, of lengths $u+1$ and $u^3-u^2-u$ for
//! the curve seed $u$, followed by a final exponentiation whose hard part is a chain of
//! exponentiations by $u$. Rather than scattering these over the pairing code as free constants,
//! everything the precomputation, the loops, and the exponentiation need is carried by a
//! `PairingParams`, and the precomputed $\mathbb{G}_2$ data remembers which parameters produced
//! it. Mixing precomputations from different parameters is then a detectable error instead of a
//! silently wrong answer.

use crypto_bigint::{U256, U64};

/// The curves this crate knows how to pair on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CurveId {
    Bw6_761,
}

/// Which way the sextic twist $E'$ maps into $E(\mathbb{F}_{q^6})$. The line evaluation in the
/// Miller loop is only written out for the M-twist.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TwistType {
    M,
    D,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PairingParams {
    pub curve: CurveId,
    /// first Miller loop, $u + 1$
    pub ate_loop_count_1: U256,
    pub ate_loop_count_1_is_neg: bool,
    /// second Miller loop, $u^3 - u^2 - u$
    pub ate_loop_count_2: U256,
    pub ate_loop_count_2_is_neg: bool,
    /// the seed $u$ used by `exp_by_z` in the hard part of the final exponentiation
    pub final_exponent_z: U64,
    pub final_exponent_z_is_neg: bool,
    pub twist_type: TwistType,
}

/// The BW6-761 parameters, with the BLS12-377 seed $u = \mathtt{0x8508c00000000001}$.
pub const BW6_761: PairingParams = PairingParams {
    curve: CurveId::Bw6_761,
    ate_loop_count_1: U256::from_words([0x8508c00000000002, 0, 0, 0]),
    ate_loop_count_1_is_neg: false,
    ate_loop_count_2: U256::from_words([
        0xffffffffffffffff,
        0x8a442f991fffffff,
        0x23ed1347970dec00,
        0,
    ]),
    ate_loop_count_2_is_neg: false,
    final_exponent_z: U64::from_u64(0x8508c00000000001),
    final_exponent_z_is_neg: false,
    twist_type: TwistType::M,
};

/// The signed digit encodings of both loop counts, least significant digit first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoopDigits {
    pub loop_1: Vec<i8>,
    pub loop_2: Vec<i8>,
}

impl PairingParams {
    pub fn loop_digits(&self) -> LoopDigits {
        LoopDigits {
            loop_1: naf(&self.ate_loop_count_1),
            loop_2: naf(&self.ate_loop_count_2),
        }
    }
}

/// The non-adjacent form of `n`, least significant digit first, with digits in $\{-1, 0, 1\}$.
/// An odd remainder picks the digit that leaves the rest divisible by 4, which is what keeps two
/// nonzero digits from ever sitting next to each other.
///
/// ```
/// use crypto_bigint::U256;
/// use tate::naf;
/// assert_eq!(naf(&U256::from_u64(7)), vec![-1, 0, 0, 1]);
/// ```
pub fn naf(n: &U256) -> Vec<i8> {
    // one extra word absorbs the carry of rounding up near the top
    let mut words = [0u64; 5];
    words[..4].copy_from_slice(n.as_words());
    let mut digits = Vec::with_capacity(257);
    while words.iter().any(|w| *w != 0) {
        let digit: i8 = match words[0] & 3 {
            1 => 1,
            3 => -1,
            _ => 0,
        };
        match digit {
            1 => words[0] -= 1,
            -1 => {
                // add one, propagating the carry
                for w in words.iter_mut() {
                    let (sum, carry) = w.overflowing_add(1);
                    *w = sum;
                    if !carry {
                        break;
                    }
                }
            }
            _ => {}
        }
        digits.push(digit);
        for i in 0..words.len() {
            let high = match i + 1 < words.len() {
                true => words[i + 1] << 63,
                false => 0,
            };
            words[i] = (words[i] >> 1) | high;
        }
    }
    tracing::debug!(len = digits.len(), "naf");
    digits
}
