use anchor_lang::prelude::*;
use crate::{contexts::ClosePoll, registry};

pub fn handler(ctx: Context<ClosePoll>, poll_id: u64) -> Result<()> {
    ctx.accounts.config.ensure_relay(&ctx.accounts.relay.key())?;

    let mut poll = registry::load_poll_mut(&ctx.accounts.poll, poll_id)?;
    let event = registry::close_poll(&mut poll)?;

    msg!(
        "🔒 Poll {} closed ({} identities registered)",
        event.poll_id,
        poll.group.next_leaf_index
    );

    emit!(event);

    Ok(())
}
