use anchor_lang::prelude::*;
use crate::{contexts::InitializePublicationAction, registry};

pub fn handler(
    ctx: Context<InitializePublicationAction>,
    creator_profile_id: u64,
    publication_id: u64,
    init_data: Vec<u8>,
) -> Result<()> {
    let mut poll = ctx.accounts.poll.load_init()?;
    let event = registry::attach_poll(
        &mut ctx.accounts.config,
        &mut ctx.accounts.publication,
        &mut poll,
        publication_id,
        creator_profile_id,
        &init_data,
        ctx.bumps.poll,
        ctx.bumps.publication,
    )?;

    msg!("🗳️ Poll {} created for publication {}", event.poll_id, publication_id);
    msg!("   Creator profile: {}", creator_profile_id);

    emit!(event);

    Ok(())
}
