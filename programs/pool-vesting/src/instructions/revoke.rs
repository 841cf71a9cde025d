use anchor_lang::prelude::*;

use crate::auth::require_admin;
use crate::constants::{ALLOCATION_SEED, CONFIG_SEED, POOL_SEED};
use crate::error::VestingError;
use crate::state::{self, Allocation, Config, VestingPool};
use crate::utils::schedule;

/// Freezes an allocation at its currently vested amount. Vested but unclaimed
/// tokens stay claimable; the rest is forfeited.
pub fn revoke(ctx: Context<Revoke>, pool_id: u64, beneficiary: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.config;
    require_admin(config, &ctx.accounts.admin.key())?;

    let pool: VestingPool = state::load(&ctx.accounts.pool, VestingError::PoolNotFound)?;
    require!(pool.revocable, VestingError::NotRevocable);

    let allocation_ai = ctx.accounts.allocation.to_account_info();
    let mut allocation: Allocation = state::load(&allocation_ai, VestingError::NotWhitelisted)?;

    let now = Clock::get()?.unix_timestamp;
    let vested = schedule::vested_amount(&pool, &allocation, now)?;
    let forfeited = allocation.revoke(vested)?;
    state::store(&allocation_ai, &allocation)?;
    config.record_forfeit(forfeited)?;

    emit!(AllocationRevoked {
        pool_id,
        beneficiary,
        frozen_vested: allocation.frozen_vested,
        forfeited,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(pool_id: u64, beneficiary: Pubkey)]
pub struct Revoke<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,

    /// CHECK: Pool PDA, deserialized in-handler.
    #[account(seeds = [POOL_SEED, pool_id.to_le_bytes().as_ref()], bump)]
    pub pool: UncheckedAccount<'info>,

    /// CHECK: Allocation PDA, deserialized in-handler.
    #[account(
        mut,
        seeds = [ALLOCATION_SEED, pool.key().as_ref(), beneficiary.as_ref()],
        bump
    )]
    pub allocation: UncheckedAccount<'info>,

    pub admin: Signer<'info>,
}

#[event]
pub struct AllocationRevoked {
    pub pool_id: u64,
    pub beneficiary: Pubkey,
    pub frozen_vested: u64,
    pub forfeited: u64,
}
