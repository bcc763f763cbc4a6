use anchor_lang::prelude::*;

use crate::{constants::*, error::PollError, payload::nullifier_seed, state::*};

/// Deploy-time configuration: host authority, relay and verifying key
#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        constraint = program.programdata_address()? == Some(program_data.key()) @ PollError::Unauthorized
    )]
    pub program: Program<'info, crate::program::PollModule>,

    #[account(
        constraint = ModuleConfig::may_initialize(
            program_data.upgrade_authority_address,
            &authority.key()
        ) @ PollError::Unauthorized
    )]
    pub program_data: Account<'info, ProgramData>,

    #[account(
        init,
        payer = authority,
        space = 8 + ModuleConfig::INIT_SPACE,
        seeds = [MODULE_CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, ModuleConfig>,

    #[account(
        init,
        payer = authority,
        space = 8 + VerifyingKeyAccount::INIT_SPACE,
        seeds = [VERIFYING_KEY_SEED],
        bump
    )]
    pub verifying_key: Box<Account<'info, VerifyingKeyAccount>>,

    pub system_program: Program<'info, System>,
}

/// Host hook: a publication referencing this module was created
#[derive(Accounts)]
#[instruction(creator_profile_id: u64, publication_id: u64)]
pub struct InitializePublicationAction<'info> {
    /// Host program authority
    pub hub: Signer<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [MODULE_CONFIG_SEED],
        bump = config.bump,
        constraint = config.is_hub(&hub.key()) @ PollError::Unauthorized
    )]
    pub config: Account<'info, ModuleConfig>,

    /// Link from the publication to its poll, bound once
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + PublicationPoll::INIT_SPACE,
        seeds = [PUBLICATION_SEED, publication_id.to_le_bytes().as_ref()],
        bump
    )]
    pub publication: Account<'info, PublicationPoll>,

    #[account(
        init,
        payer = payer,
        space = Poll::LEN,
        seeds = [POLL_SEED, config.next_poll_id.to_le_bytes().as_ref()],
        bump
    )]
    pub poll: AccountLoader<'info, Poll>,

    pub system_program: Program<'info, System>,
}

/// Host hook: a comment pointing at a poll publication carries a vote
#[derive(Accounts)]
#[instruction(
    acting_profile_id: u64,
    publication_id: u64,
    pointed_publication_id: u64,
    action_data: Vec<u8>
)]
pub struct ProcessPublicationAction<'info> {
    /// Host program authority
    pub hub: Signer<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        seeds = [MODULE_CONFIG_SEED],
        bump = config.bump,
        constraint = config.is_hub(&hub.key()) @ PollError::Unauthorized
    )]
    pub config: Account<'info, ModuleConfig>,

    #[account(
        seeds = [VERIFYING_KEY_SEED],
        bump = verifying_key.bump
    )]
    pub verifying_key: Box<Account<'info, VerifyingKeyAccount>>,

    /// CHECK: deserialized by `registry::load_publication`, which reports a
    /// publication without a poll as `PollNotFound`
    #[account(
        seeds = [PUBLICATION_SEED, pointed_publication_id.to_le_bytes().as_ref()],
        bump
    )]
    pub publication: UncheckedAccount<'info>,

    /// CHECK: address and contents checked by `registry::load_poll`
    pub poll: UncheckedAccount<'info>,

    /// Nullifier PDA for (poll, nullifier_hash); spent flag guards double voting
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + NullifierRecord::INIT_SPACE,
        seeds = [NULLIFIER_SEED, poll.key().as_ref(), nullifier_seed(&action_data)],
        bump
    )]
    pub nullifier: Account<'info, NullifierRecord>,

    pub system_program: Program<'info, System>,
}

/// Admit an identity commitment (relay-only)
#[derive(Accounts)]
pub struct RegisterIdentity<'info> {
    pub relay: Signer<'info>,

    #[account(
        seeds = [MODULE_CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, ModuleConfig>,

    /// CHECK: address and contents checked by `registry::load_poll_mut`
    #[account(mut)]
    pub poll: UncheckedAccount<'info>,
}

/// Stop a poll from accepting identities and votes (relay-only)
#[derive(Accounts)]
pub struct ClosePoll<'info> {
    pub relay: Signer<'info>,

    #[account(
        seeds = [MODULE_CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, ModuleConfig>,

    /// CHECK: address and contents checked by `registry::load_poll_mut`
    #[account(mut)]
    pub poll: UncheckedAccount<'info>,
}
