//! Groth16 verification of vote proofs over BN254 via the alt_bn128 syscalls.

use anchor_lang::prelude::*;
use ark_bn254::Fq;
use ark_ff::{BigInteger, PrimeField};
use groth16_solana::groth16::{Groth16Verifier, Groth16Verifyingkey};
use sha3::{Digest, Keccak256};

use crate::{
    constants::{PUBLIC_INPUTS, VK_IC_LEN},
    error::PollError,
};

/// Verifying key of the voting circuit, points in EIP-197 big-endian encoding.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerifyingKey {
    pub alpha_g1: [u8; 64],
    pub beta_g2: [u8; 128],
    pub gamma_g2: [u8; 128],
    pub delta_g2: [u8; 128],
    pub ic: [[u8; 64]; VK_IC_LEN],
}

impl VerifyingKey {
    /// Rejects keys containing a point at infinity or a non-canonical coordinate.
    pub fn validate(&self) -> Result<()> {
        let g1_points = std::iter::once(&self.alpha_g1).chain(self.ic.iter());
        for point in g1_points {
            require!(is_valid_encoding(point), PollError::InvalidVerifyingKey);
        }
        for point in [&self.beta_g2, &self.gamma_g2, &self.delta_g2] {
            require!(is_valid_encoding(point), PollError::InvalidVerifyingKey);
        }
        Ok(())
    }
}

/// The signals a vote proof commits to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicSignals {
    pub merkle_root: [u8; 32],
    pub nullifier_hash: [u8; 32],
    pub poll_id: u64,
    pub vote_value: [u8; 32],
}

impl PublicSignals {
    /// Public inputs in circuit order:
    /// `[root, nullifierHash, signalHash, externalNullifier]`.
    pub fn to_public_inputs(&self) -> [[u8; 32]; PUBLIC_INPUTS] {
        [
            self.merkle_root,
            self.nullifier_hash,
            signal_hash(&self.vote_value),
            external_nullifier(self.poll_id),
        ]
    }
}

/// Groth16 proof with `a` as produced by the prover (not yet negated).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VoteProof {
    pub a: [u8; 64],
    pub b: [u8; 128],
    pub c: [u8; 64],
}

impl VoteProof {
    /// Unpacks the Solidity layout
    /// `[a.x, a.y, b.x.c1, b.x.c0, b.y.c1, b.y.c0, c.x, c.y]`.
    pub fn from_packed(words: &[[u8; 32]; 8]) -> Self {
        let mut a = [0u8; 64];
        let mut b = [0u8; 128];
        let mut c = [0u8; 64];
        a.copy_from_slice(&words[..2].concat());
        b.copy_from_slice(&words[2..6].concat());
        c.copy_from_slice(&words[6..].concat());
        Self { a, b, c }
    }
}

/// Stateless checker bound to one verifying key.
pub struct ProofVerifier<'a> {
    key: Groth16Verifyingkey<'a>,
}

impl<'a> ProofVerifier<'a> {
    pub fn new(key: &'a VerifyingKey) -> Self {
        Self {
            key: Groth16Verifyingkey {
                nr_pubinputs: PUBLIC_INPUTS,
                vk_alpha_g1: key.alpha_g1,
                vk_beta_g2: key.beta_g2,
                vk_gamme_g2: key.gamma_g2,
                vk_delta_g2: key.delta_g2,
                vk_ic: &key.ic,
            },
        }
    }

    /// Returns false on any mismatch, malformed point, or out-of-field input.
    pub fn verify(&self, signals: &PublicSignals, proof: &VoteProof) -> bool {
        let Some(proof_a) = negate_g1(&proof.a) else {
            return false;
        };
        let public_inputs = signals.to_public_inputs();

        let Ok(mut verifier) = Groth16Verifier::<PUBLIC_INPUTS>::new(
            &proof_a,
            &proof.b,
            &proof.c,
            &public_inputs,
            &self.key,
        ) else {
            return false;
        };

        verifier.verify().is_ok()
    }
}

/// `keccak256(vote_value) >> 8`, keeping the hash inside the scalar field.
pub fn signal_hash(vote_value: &[u8; 32]) -> [u8; 32] {
    let digest = Keccak256::digest(vote_value);
    let mut out = [0u8; 32];
    out[1..].copy_from_slice(&digest[..31]);
    out
}

/// The poll id as a 256-bit big-endian integer.
pub fn external_nullifier(poll_id: u64) -> [u8; 32] {
    let mut out = [0u8; 32];
    out[24..].copy_from_slice(&poll_id.to_be_bytes());
    out
}

fn is_base_field_element(value: &[u8]) -> bool {
    value < Fq::MODULUS.to_bytes_be().as_slice()
}

fn is_valid_encoding(point: &[u8]) -> bool {
    point.iter().any(|byte| *byte != 0) && point.chunks(32).all(is_base_field_element)
}

/// Negates a G1 point by mapping `y` to `q - y`.
fn negate_g1(point: &[u8; 64]) -> Option<[u8; 64]> {
    let (x, y) = point.split_at(32);
    if !is_base_field_element(x) || !is_base_field_element(y) {
        return None;
    }

    let neg_y = -Fq::from_be_bytes_mod_order(y);
    let mut out = [0u8; 64];
    out[..32].copy_from_slice(x);
    out[32..].copy_from_slice(&neg_y.into_bigint().to_bytes_be());
    Some(out)
}
