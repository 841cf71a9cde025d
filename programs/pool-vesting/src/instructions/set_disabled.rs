use anchor_lang::prelude::*;

use crate::auth::require_admin;
use crate::constants::{ALLOCATION_SEED, CONFIG_SEED, POOL_SEED};
use crate::error::VestingError;
use crate::state::{self, Allocation, Config, VestingPool};

pub fn set_disabled(
    ctx: Context<SetDisabled>,
    pool_id: u64,
    beneficiary: Pubkey,
    disabled: bool,
) -> Result<()> {
    require_admin(&ctx.accounts.config, &ctx.accounts.admin.key())?;

    let _pool: VestingPool = state::load(&ctx.accounts.pool, VestingError::PoolNotFound)?;
    let allocation_ai = ctx.accounts.allocation.to_account_info();
    let mut allocation: Allocation = state::load(&allocation_ai, VestingError::NotWhitelisted)?;
    allocation.set_disabled(disabled);
    state::store(&allocation_ai, &allocation)?;

    emit!(AllocationDisabledSet {
        pool_id,
        beneficiary,
        disabled,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(pool_id: u64, beneficiary: Pubkey)]
pub struct SetDisabled<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,

    /// CHECK: Pool PDA, deserialized in-handler.
    #[account(seeds = [POOL_SEED, pool_id.to_le_bytes().as_ref()], bump)]
    pub pool: UncheckedAccount<'info>,

    /// CHECK: Allocation PDA, deserialized in-handler so a missing entry reports `NotWhitelisted`.
    #[account(
        mut,
        seeds = [ALLOCATION_SEED, pool.key().as_ref(), beneficiary.as_ref()],
        bump
    )]
    pub allocation: UncheckedAccount<'info>,

    pub admin: Signer<'info>,
}

#[event]
pub struct AllocationDisabledSet {
    pub pool_id: u64,
    pub beneficiary: Pubkey,
    pub disabled: bool,
}
