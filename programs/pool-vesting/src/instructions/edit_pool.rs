use anchor_lang::prelude::*;

use crate::auth::require_admin;
use crate::constants::{CONFIG_SEED, POOL_SEED};
use crate::error::VestingError;
use crate::state::{self, Config, PoolParams, VestingPool};
use crate::utils::fingerprint::schedule_fingerprint;

/// Rewrites a pool's schedule in place. Takes effect for every amount not yet
/// claimed from the pool.
pub fn edit_pool(ctx: Context<EditPool>, pool_id: u64, params: PoolParams) -> Result<()> {
    let config = &ctx.accounts.config;
    require_admin(config, &ctx.accounts.admin.key())?;
    require!(pool_id < config.pool_count, VestingError::PoolNotFound);

    let pool_ai = ctx.accounts.pool.to_account_info();
    let mut pool: VestingPool = state::load(&pool_ai, VestingError::PoolNotFound)?;
    let previous_fingerprint = schedule_fingerprint(&pool);
    pool.configure(&params)?;
    state::store(&pool_ai, &pool)?;

    emit!(PoolEdited {
        pool_id,
        name: pool.name.clone(),
        cliff: pool.cliff,
        start: pool.start,
        duration: pool.duration,
        initial_unlock_ratio: pool.initial_unlock_ratio,
        revocable: pool.revocable,
        previous_fingerprint,
        fingerprint: schedule_fingerprint(&pool),
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct EditPool<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,

    /// CHECK: Pool PDA, deserialized in-handler so a missing pool reports `PoolNotFound`.
    #[account(mut, seeds = [POOL_SEED, pool_id.to_le_bytes().as_ref()], bump)]
    pub pool: UncheckedAccount<'info>,

    pub admin: Signer<'info>,
}

#[event]
pub struct PoolEdited {
    pub pool_id: u64,
    pub name: String,
    pub cliff: i64,
    pub start: i64,
    pub duration: u64,
    pub initial_unlock_ratio: u16,
    pub revocable: bool,
    pub previous_fingerprint: [u8; 32],
    pub fingerprint: [u8; 32],
}
