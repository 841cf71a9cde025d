use anchor_lang::prelude::*;

use crate::auth::require_admin;
use crate::constants::{CONFIG_SEED, POOL_SEED};
use crate::state::{Config, PoolParams, VestingPool};
use crate::utils::fingerprint::schedule_fingerprint;

pub fn add_pool(ctx: Context<AddPool>, params: PoolParams) -> Result<u64> {
    let config = &mut ctx.accounts.config;
    require_admin(config, &ctx.accounts.admin.key())?;

    let pool_id = config.next_pool_id()?;
    let pool = &mut ctx.accounts.pool;
    pool.pool_id = pool_id;
    pool.total_allocated = 0;
    pool.beneficiary_count = 0;
    pool.bump = ctx.bumps.pool;
    pool.configure(&params)?;

    emit!(PoolAdded {
        pool_id,
        name: pool.name.clone(),
        cliff: pool.cliff,
        start: pool.start,
        duration: pool.duration,
        initial_unlock_ratio: pool.initial_unlock_ratio,
        revocable: pool.revocable,
        fingerprint: schedule_fingerprint(pool),
    });

    Ok(pool_id)
}

#[derive(Accounts)]
pub struct AddPool<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = admin,
        space = 8 + VestingPool::SIZE,
        seeds = [POOL_SEED, config.pool_count.to_le_bytes().as_ref()],
        bump
    )]
    pub pool: Account<'info, VestingPool>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct PoolAdded {
    pub pool_id: u64,
    pub name: String,
    pub cliff: i64,
    pub start: i64,
    pub duration: u64,
    pub initial_unlock_ratio: u16,
    pub revocable: bool,
    pub fingerprint: [u8; 32],
}
