use anchor_lang::prelude::*;
use bytemuck::{Pod, Zeroable};

use crate::{constants::VOTE_PAYLOAD_LEN, error::PollError};

/// Vote carried in a comment's action data.
///
/// Laid out as the static ABI tuple `(uint256 nullifierHash, bytes32 voteValue,
/// uint256[8] proof)` the proving toolchain packs, every word big-endian.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct VotePayload {
    pub nullifier_hash: [u8; 32],
    pub vote_value: [u8; 32],
    pub proof: [[u8; 32]; 8],
}

const _: () = assert!(std::mem::size_of::<VotePayload>() == VOTE_PAYLOAD_LEN);

impl VotePayload {
    pub fn decode(data: &[u8]) -> Result<Self> {
        bytemuck::try_from_bytes::<VotePayload>(data)
            .copied()
            .map_err(|_| error!(PollError::MalformedActionData))
    }

    pub fn encode(&self) -> Vec<u8> {
        bytemuck::bytes_of(self).to_vec()
    }
}

/// Nullifier bytes used to derive the record PDA before the payload is decoded.
/// Short input yields an empty seed; decoding then fails with `MalformedActionData`.
pub fn nullifier_seed(action_data: &[u8]) -> &[u8] {
    action_data.get(..32).unwrap_or_default()
}
