use anchor_lang::prelude::*;

use crate::auth::require_admin;
use crate::constants::{ALLOCATION_SEED, CONFIG_SEED, POOL_SEED};
use crate::error::VestingError;
use crate::state::{self, Allocation, Config, VestingPool};

/// Whitelists `beneficiary` in `pool_id` for `total_amount`. One entry per key;
/// no top-ups.
pub fn allocate(
    ctx: Context<Allocate>,
    pool_id: u64,
    beneficiary: Pubkey,
    total_amount: u64,
) -> Result<()> {
    let config = &mut ctx.accounts.config;
    require_admin(config, &ctx.accounts.admin.key())?;

    let pool_ai = ctx.accounts.pool.to_account_info();
    let mut pool: VestingPool = state::load(&pool_ai, VestingError::InvalidPool)?;

    let allocation = &mut ctx.accounts.allocation;
    allocation.initialize(pool_id, beneficiary, total_amount, ctx.bumps.allocation)?;

    pool.record_allocation(total_amount)?;
    state::store(&pool_ai, &pool)?;
    config.record_allocation(total_amount)?;

    emit!(AllocationAdded {
        pool_id,
        beneficiary,
        total_amount,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(pool_id: u64, beneficiary: Pubkey)]
pub struct Allocate<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,

    /// CHECK: Pool PDA, deserialized in-handler so a missing pool reports `InvalidPool`.
    #[account(mut, seeds = [POOL_SEED, pool_id.to_le_bytes().as_ref()], bump)]
    pub pool: UncheckedAccount<'info>,

    // init_if_needed so an existing entry reaches the handler and is rejected
    // as a duplicate instead of failing account creation.
    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + Allocation::SIZE,
        seeds = [ALLOCATION_SEED, pool.key().as_ref(), beneficiary.as_ref()],
        bump
    )]
    pub allocation: Account<'info, Allocation>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct AllocationAdded {
    pub pool_id: u64,
    pub beneficiary: Pubkey,
    pub total_amount: u64,
}
