pub mod constants;
pub mod contexts;
pub mod error;
pub mod hooks;
pub mod instructions;
pub mod merkle;
pub mod payload;
pub mod registry;
pub mod state;
pub mod verifier;

use anchor_lang::prelude::*;

pub use contexts::*;
pub use error::*;
pub use hooks::{PollHooks, PublicationActionModule};
pub use state::*;
pub use verifier::VerifyingKey;

declare_id!("74kigxzhVxtFBW8M8km7ahrrdP4pJGWMHXVC5oCFrc8H");

/// Poll Module: anonymous, double-vote-resistant polls for a publishing platform
///
/// A creator's post becomes a poll; comments pointing at it carry a ballot backed
/// by a Semaphore-style zero-knowledge proof:
/// - Membership: Poseidon incremental Merkle tree of identity commitments per poll
/// - Sybil resistance: only the configured relay admits identities
/// - One vote per identity: nullifier PDA per (poll, nullifier_hash)
///
/// The host pipeline reaches the module through the two publication hooks; any
/// error returned from them vetoes the host's publish or comment.
#[program]
pub mod poll_module {
    use super::*;

    /// Store the host authority, the relay and the circuit's verifying key
    pub fn initialize(
        ctx: Context<Initialize>,
        hub: Pubkey,
        relay: Pubkey,
        verifying_key: VerifyingKey,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, hub, relay, verifying_key)
    }

    /// Host hook: create the poll for a newly published post
    pub fn initialize_publication_action<'info>(
        ctx: Context<'_, '_, '_, 'info, InitializePublicationAction<'info>>,
        creator_profile_id: u64,
        publication_id: u64,
        init_data: Vec<u8>,
    ) -> Result<()> {
        PollHooks::initialize_publication_action(
            ctx,
            creator_profile_id,
            publication_id,
            init_data,
        )
    }

    /// Host hook: cast the vote carried by a comment
    pub fn process_publication_action<'info>(
        ctx: Context<'_, '_, '_, 'info, ProcessPublicationAction<'info>>,
        acting_profile_id: u64,
        publication_id: u64,
        pointed_publication_id: u64,
        action_data: Vec<u8>,
    ) -> Result<()> {
        PollHooks::process_publication_action(
            ctx,
            acting_profile_id,
            publication_id,
            pointed_publication_id,
            action_data,
        )
    }

    /// Admit an identity commitment into a poll's group (relay-only)
    pub fn register_identity(
        ctx: Context<RegisterIdentity>,
        poll_id: u64,
        commitment: [u8; 32],
    ) -> Result<()> {
        instructions::register_identity::handler(ctx, poll_id, commitment)
    }

    /// Close a poll for good (relay-only)
    pub fn close_poll(ctx: Context<ClosePoll>, poll_id: u64) -> Result<()> {
        instructions::close_poll::handler(ctx, poll_id)
    }
}
