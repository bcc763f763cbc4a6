use anchor_lang::prelude::*;
use crate::{contexts::RegisterIdentity, registry};

pub fn handler(ctx: Context<RegisterIdentity>, poll_id: u64, commitment: [u8; 32]) -> Result<()> {
    ctx.accounts.config.ensure_relay(&ctx.accounts.relay.key())?;

    let mut poll = registry::load_poll_mut(&ctx.accounts.poll, poll_id)?;
    let event = registry::register_identity(&mut poll, commitment)?;

    msg!("✅ Identity registered to poll {}!", event.poll_id);
    msg!("   Leaf index: {}", event.leaf_index);

    emit!(event);

    Ok(())
}
