//! # Batch pairing check
//!
//! A verifier often needs to know whether $\prod_i e(P_i, Q_i) = 1$. Every pairing shares the
//! same final exponentiation, so the check is one glued Miller loop over all pairs followed by a
//! single exponentiation. This demo builds pairs that cancel, $e(a_i G_1, G_2)\cdot
//! e(-G_1, a_i G_2)$, checks the product is the identity, and then breaks one pair and checks the
//! product is not.
//!
//! Settings are read from `batch_verify.toml`, which is created with defaults on first run.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tate::{
    final_exponentiation, glued_miller_loop, precompute_g1, precompute_g2, Fr, G1PreComputed,
    G1Projective, G2PreComputed, G2Projective, GroupTrait, PairingError, BW6_761,
};
use tracing::{debug, error, info, Level};

#[derive(Debug, Serialize, Deserialize)]
struct BatchConfig {
    /// number of cancelling pairs of pairings
    pairs: usize,
    verbose: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            pairs: 4,
            verbose: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error("config: {0}")]
    Config(#[from] confy::ConfyError),
    #[error("pairing: {0}")]
    Pairing(#[from] PairingError),
}

fn precompute(
    p: &G1Projective,
    q: &G2Projective,
) -> Result<(G1PreComputed, G2PreComputed), PairingError> {
    Ok((precompute_g1(p), precompute_g2(q, &BW6_761)?))
}

fn main() -> Result<(), DemoError> {
    let cfg: BatchConfig = confy::load_path(PathBuf::from("batch_verify.toml"))?;
    let level = match cfg.verbose {
        true => Level::DEBUG,
        false => Level::INFO,
    };
    tracing_subscriber::fmt().with_max_level(level).init();
    info!("Loaded config: {:?}", cfg);

    let g1 = G1Projective::generator();
    let g2 = G2Projective::generator();
    let mut rng = rand::thread_rng();
    let mut terms = Vec::with_capacity(2 * cfg.pairs);
    for i in 0..cfg.pairs {
        let a = Fr::rand(&mut rng);
        terms.push(precompute(&(g1 * a), &g2)?);
        terms.push(precompute(&-g1, &(g2 * a))?);
        debug!(pair = i, "precomputed");
    }

    let f = glued_miller_loop(&terms)?;
    let valid = final_exponentiation(&f)?.is_identity();
    info!(terms = terms.len(), valid, "batch verification");
    if !valid {
        error!("a cancelling batch did not verify");
    }

    // tamper with one G1 input
    if !terms.is_empty() {
        let victim = rng.gen_range(0..terms.len());
        terms[victim].0 = precompute_g1(&(g1 * Fr::rand(&mut rng)));
        debug!(victim, "tampered");
    }
    let tampered = final_exponentiation(&glued_miller_loop(&terms)?)?.is_identity();
    info!(valid = tampered, "batch verification after tampering");
    if tampered {
        error!("a tampered batch verified");
    }
    Ok(())
}
