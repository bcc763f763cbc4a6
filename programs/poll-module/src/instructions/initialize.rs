use anchor_lang::prelude::*;
use crate::{contexts::Initialize, state::ModuleConfig, verifier::VerifyingKey};

pub fn handler(
    ctx: Context<Initialize>,
    hub: Pubkey,
    relay: Pubkey,
    verifying_key: VerifyingKey,
) -> Result<()> {
    verifying_key.validate()?;

    let config = &mut ctx.accounts.config;
    **config = ModuleConfig::new(hub, relay, ctx.bumps.config);

    let key_account = &mut ctx.accounts.verifying_key;
    key_account.key = verifying_key;
    key_account.bump = ctx.bumps.verifying_key;

    msg!("✅ Poll module initialized!");
    msg!("   Hub: {}", hub);
    msg!("   Relay: {}", relay);

    Ok(())
}
