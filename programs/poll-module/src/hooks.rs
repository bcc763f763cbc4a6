use anchor_lang::{prelude::*, Bumps};

use crate::{
    contexts::{InitializePublicationAction, ProcessPublicationAction},
    instructions,
};

/// Entry points a host publishing pipeline calls on an action module.
///
/// `initialize_publication_action` runs once when a publication referencing the
/// module is created, `process_publication_action` whenever another publication
/// points at it. Returning an error vetoes the host's enclosing instruction.
pub trait PublicationActionModule {
    type Initialize<'info>: Bumps;
    type Process<'info>: Bumps;

    fn initialize_publication_action<'info>(
        ctx: Context<'_, '_, '_, 'info, Self::Initialize<'info>>,
        creator_profile_id: u64,
        publication_id: u64,
        init_data: Vec<u8>,
    ) -> Result<()>;

    fn process_publication_action<'info>(
        ctx: Context<'_, '_, '_, 'info, Self::Process<'info>>,
        acting_profile_id: u64,
        publication_id: u64,
        pointed_publication_id: u64,
        action_data: Vec<u8>,
    ) -> Result<()>;
}

/// Turns a publication into an anonymous poll and comments into ballots.
pub struct PollHooks;

impl PublicationActionModule for PollHooks {
    type Initialize<'info> = InitializePublicationAction<'info>;
    type Process<'info> = ProcessPublicationAction<'info>;

    fn initialize_publication_action<'info>(
        ctx: Context<'_, '_, '_, 'info, Self::Initialize<'info>>,
        creator_profile_id: u64,
        publication_id: u64,
        init_data: Vec<u8>,
    ) -> Result<()> {
        instructions::initialize_publication_action::handler(
            ctx,
            creator_profile_id,
            publication_id,
            init_data,
        )
    }

    fn process_publication_action<'info>(
        ctx: Context<'_, '_, '_, 'info, Self::Process<'info>>,
        acting_profile_id: u64,
        publication_id: u64,
        pointed_publication_id: u64,
        action_data: Vec<u8>,
    ) -> Result<()> {
        instructions::process_publication_action::handler(
            ctx,
            acting_profile_id,
            publication_id,
            pointed_publication_id,
            action_data,
        )
    }
}
