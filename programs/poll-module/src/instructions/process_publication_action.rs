use anchor_lang::prelude::*;
use crate::{
    contexts::ProcessPublicationAction, payload::VotePayload, registry, verifier::ProofVerifier,
};

pub fn handler(
    ctx: Context<ProcessPublicationAction>,
    acting_profile_id: u64,
    publication_id: u64,
    pointed_publication_id: u64,
    action_data: Vec<u8>,
) -> Result<()> {
    msg!("📝 Processing vote...");

    let payload = VotePayload::decode(&action_data)?;

    let link = registry::load_publication(&ctx.accounts.publication)?;
    let poll = registry::load_poll(&ctx.accounts.poll, link.poll_id)?;

    let verifier = ProofVerifier::new(&ctx.accounts.verifying_key.key);
    let nullifier = &mut ctx.accounts.nullifier;
    let event = registry::cast_vote(&poll, nullifier, &verifier, &payload)?;
    nullifier.bump = ctx.bumps.nullifier;

    msg!(
        "✅ Vote recorded on poll {} (publication {} via comment {} by profile {})",
        event.poll_id,
        pointed_publication_id,
        publication_id,
        acting_profile_id
    );

    emit!(event);

    Ok(())
}
