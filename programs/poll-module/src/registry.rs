//! Poll registry and nullifier store.
//!
//! Every operation here works on already-resolved account state and returns the
//! event to emit, so instruction handlers stay a thin layer of account plumbing.

use std::cell::{Ref, RefMut};

use anchor_lang::{prelude::*, Discriminator};

use crate::{
    constants::{POLL_SEED, TREE_DEPTH},
    error::PollError,
    payload::VotePayload,
    state::{
        MemberAdded, ModuleConfig, NullifierRecord, Poll, PollClosed, PollCreated,
        PublicationPoll, VoteAdded,
    },
    verifier::{ProofVerifier, PublicSignals, VoteProof},
};

pub fn poll_address(poll_id: u64) -> Pubkey {
    Pubkey::find_program_address(&[POLL_SEED, &poll_id.to_le_bytes()], &crate::ID).0
}

fn ensure_poll_account(info: &AccountInfo, poll_id: u64) -> Result<()> {
    require_keys_eq!(*info.key, poll_address(poll_id), PollError::PollNotFound);
    require!(
        info.owner == &crate::ID && info.data_len() >= Poll::LEN,
        PollError::PollNotFound
    );
    Ok(())
}

/// Borrows the poll stored at the PDA for `poll_id`.
pub fn load_poll<'a>(info: &'a AccountInfo, poll_id: u64) -> Result<Ref<'a, Poll>> {
    ensure_poll_account(info, poll_id)?;

    let data = info.try_borrow_data()?;
    require!(data.starts_with(Poll::DISCRIMINATOR), PollError::PollNotFound);

    let offset = Poll::DISCRIMINATOR.len();
    Ok(Ref::map(data, |data| {
        bytemuck::from_bytes(&data[offset..offset + std::mem::size_of::<Poll>()])
    }))
}

pub fn load_poll_mut<'a>(info: &'a AccountInfo, poll_id: u64) -> Result<RefMut<'a, Poll>> {
    ensure_poll_account(info, poll_id)?;
    require!(info.is_writable, PollError::PollNotFound);

    let data = info.try_borrow_mut_data()?;
    require!(data.starts_with(Poll::DISCRIMINATOR), PollError::PollNotFound);

    let offset = Poll::DISCRIMINATOR.len();
    Ok(RefMut::map(data, |data| {
        bytemuck::from_bytes_mut(&mut data[offset..offset + std::mem::size_of::<Poll>()])
    }))
}

/// Reads the poll link of a publication; a publication without one has no poll.
pub fn load_publication(info: &AccountInfo) -> Result<PublicationPoll> {
    require!(
        info.owner == &crate::ID && !info.data_is_empty(),
        PollError::PollNotFound
    );

    let data = info.try_borrow_data()?;
    let link = PublicationPoll::try_deserialize(&mut &data[..])?;
    require!(link.is_bound(), PollError::PollNotFound);
    Ok(link)
}

/// Allocates a poll id and opens an empty identity group for it.
pub fn create_poll(
    config: &mut ModuleConfig,
    poll: &mut Poll,
    creator_profile_id: u64,
    bump: u8,
) -> Result<PollCreated> {
    let poll_id = config.allocate_poll_id()?;
    poll.open(poll_id, creator_profile_id, TREE_DEPTH, bump)?;

    Ok(PollCreated {
        poll_id,
        creator_profile_id,
    })
}

/// Opens the poll for a newly published post and binds the publication to it.
///
/// Checks run before the poll id is allocated, so a rejected call leaves the
/// counter and the link untouched.
#[allow(clippy::too_many_arguments)]
pub fn attach_poll(
    config: &mut ModuleConfig,
    link: &mut PublicationPoll,
    poll: &mut Poll,
    publication_id: u64,
    creator_profile_id: u64,
    init_data: &[u8],
    poll_bump: u8,
    link_bump: u8,
) -> Result<PollCreated> {
    // The tree depth is fixed module-wide, so there is nothing to configure per poll
    require!(init_data.is_empty(), PollError::MalformedActionData);
    require!(!link.is_bound(), PollError::PublicationAlreadyHasPoll);

    let event = create_poll(config, poll, creator_profile_id, poll_bump)?;
    link.bind(publication_id, creator_profile_id, event.poll_id, link_bump)?;

    Ok(event)
}

/// Admits one identity commitment. Relay authorization happens before this.
pub fn register_identity(poll: &mut Poll, commitment: [u8; 32]) -> Result<MemberAdded> {
    poll.ensure_open()?;

    let leaf_index = poll.group.next_leaf_index;
    let root = poll.group.add_member(commitment)?;

    Ok(MemberAdded {
        poll_id: poll.id,
        commitment,
        leaf_index,
        root,
    })
}

pub fn close_poll(poll: &mut Poll) -> Result<PollClosed> {
    poll.close()?;
    Ok(PollClosed { poll_id: poll.id })
}

/// Accepts a vote if its nullifier is fresh and the proof verifies against the
/// poll's current root. The nullifier is only marked spent on acceptance.
pub fn cast_vote(
    poll: &Poll,
    record: &mut NullifierRecord,
    verifier: &ProofVerifier,
    payload: &VotePayload,
) -> Result<VoteAdded> {
    poll.ensure_open()?;
    require!(!record.spent, PollError::NullifierAlreadyUsed);

    let signals = PublicSignals {
        merkle_root: poll.root(),
        nullifier_hash: payload.nullifier_hash,
        poll_id: poll.id,
        vote_value: payload.vote_value,
    };
    let proof = VoteProof::from_packed(&payload.proof);
    require!(verifier.verify(&signals, &proof), PollError::InvalidProof);

    record.spend(poll.id, payload.nullifier_hash)?;

    Ok(VoteAdded {
        poll_id: poll.id,
        vote_value: payload.vote_value,
    })
}
