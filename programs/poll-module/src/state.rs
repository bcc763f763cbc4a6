use anchor_lang::prelude::*;

use crate::{
    constants::FIRST_POLL_ID,
    error::PollError,
    merkle::IdentityGroup,
    verifier::VerifyingKey,
};

// ============================================================================
// MODULE CONFIG - Fixed at deployment
// ============================================================================

#[account]
#[derive(InitSpace, Debug)]
pub struct ModuleConfig {
    /// Host program authority allowed to invoke the publication hooks
    pub hub: Pubkey,

    /// Sole party allowed to admit identities and close polls
    pub relay: Pubkey,

    /// Id the next poll will receive
    pub next_poll_id: u64,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl ModuleConfig {
    /// Only the program's upgrade authority may run `initialize`; a frozen program
    /// has none.
    pub fn may_initialize(upgrade_authority: Option<Pubkey>, signer: &Pubkey) -> bool {
        upgrade_authority == Some(*signer)
    }

    pub fn new(hub: Pubkey, relay: Pubkey, bump: u8) -> Self {
        Self {
            hub,
            relay,
            next_poll_id: FIRST_POLL_ID,
            bump,
        }
    }

    pub fn is_hub(&self, key: &Pubkey) -> bool {
        self.hub == *key
    }

    pub fn ensure_relay(&self, key: &Pubkey) -> Result<()> {
        require_keys_eq!(self.relay, *key, PollError::Unauthorized);
        Ok(())
    }

    /// Hands out the next poll id.
    pub fn allocate_poll_id(&mut self) -> Result<u64> {
        let poll_id = self.next_poll_id;
        self.next_poll_id = poll_id
            .checked_add(1)
            .ok_or(PollError::ArithmeticOverflow)?;
        Ok(poll_id)
    }
}

#[account]
#[derive(InitSpace)]
pub struct VerifyingKeyAccount {
    pub key: VerifyingKey,
    pub bump: u8,
}

// ============================================================================
// POLL - One per poll-bearing publication (zero-copy, holds the identity group)
// ============================================================================

#[account(zero_copy)]
pub struct Poll {
    pub id: u64,

    /// Host profile that published the poll
    pub creator_profile_id: u64,

    /// Eligible voters
    pub group: IdentityGroup,

    /// 1 once the poll stops accepting identities and votes
    pub closed: u8,

    pub bump: u8,

    pub _padding: [u8; 6],
}

impl Poll {
    /// Account size including the discriminator.
    pub const LEN: usize = 8 + std::mem::size_of::<Poll>();

    pub fn open(&mut self, id: u64, creator_profile_id: u64, depth: u8, bump: u8) -> Result<()> {
        self.group.create(depth)?;
        self.id = id;
        self.creator_profile_id = creator_profile_id;
        self.closed = 0;
        self.bump = bump;
        Ok(())
    }

    pub fn root(&self) -> [u8; 32] {
        self.group.root
    }

    pub fn is_closed(&self) -> bool {
        self.closed != 0
    }

    pub fn ensure_open(&self) -> Result<()> {
        require!(!self.is_closed(), PollError::PollClosed);
        Ok(())
    }

    pub fn close(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.closed = 1;
        Ok(())
    }
}

// ============================================================================
// PUBLICATION LINK - Binds a host publication to its poll
// ============================================================================

#[account]
#[derive(InitSpace, Default, Debug)]
pub struct PublicationPoll {
    pub publication_id: u64,
    pub creator_profile_id: u64,

    /// 0 until a poll has been bound
    pub poll_id: u64,

    pub bump: u8,
}

impl PublicationPoll {
    pub fn is_bound(&self) -> bool {
        self.poll_id != 0
    }

    /// Write-once: a publication carries at most one poll.
    pub fn bind(
        &mut self,
        publication_id: u64,
        creator_profile_id: u64,
        poll_id: u64,
        bump: u8,
    ) -> Result<()> {
        require!(!self.is_bound(), PollError::PublicationAlreadyHasPoll);
        self.publication_id = publication_id;
        self.creator_profile_id = creator_profile_id;
        self.poll_id = poll_id;
        self.bump = bump;
        Ok(())
    }
}

// ============================================================================
// NULLIFIER - Tracks spent nullifiers to prevent double voting
// ============================================================================

#[account]
#[derive(InitSpace, Default, Debug)]
pub struct NullifierRecord {
    pub poll_id: u64,

    /// The nullifier hash (32 bytes from Poseidon)
    pub nullifier_hash: [u8; 32],

    /// Write-once
    pub spent: bool,

    pub bump: u8,
}

impl NullifierRecord {
    pub fn spend(&mut self, poll_id: u64, nullifier_hash: [u8; 32]) -> Result<()> {
        require!(!self.spent, PollError::NullifierAlreadyUsed);
        self.poll_id = poll_id;
        self.nullifier_hash = nullifier_hash;
        self.spent = true;
        Ok(())
    }
}

// ============================================================================
// EVENTS - Emitted for off-chain indexing
// ============================================================================

#[event]
pub struct PollCreated {
    pub poll_id: u64,
    pub creator_profile_id: u64,
}

#[event]
pub struct MemberAdded {
    pub poll_id: u64,
    pub commitment: [u8; 32],
    pub leaf_index: u64,
    pub root: [u8; 32],
}

#[event]
pub struct VoteAdded {
    pub poll_id: u64,
    pub vote_value: [u8; 32],
}

#[event]
pub struct PollClosed {
    pub poll_id: u64,
}
