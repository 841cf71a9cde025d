//! Read-only instructions. Results are returned through Anchor return data.

use anchor_lang::prelude::*;

use crate::constants::{
    ALLOCATION_SEED, CONFIG_SEED, MAX_ALLOCATIONS_PER_QUERY, MAX_POOLS_PER_QUERY, POOL_SEED,
};
use crate::distribution;
use crate::error::VestingError;
use crate::state::{self, Allocation, Config, TransferCap, VestingPool};
use crate::utils::schedule;

pub fn get_pool(ctx: Context<GetPool>, _pool_id: u64) -> Result<VestingPool> {
    state::load(&ctx.accounts.pool, VestingError::PoolNotFound)
}

/// Returns pools `first_pool_id..` passed, in order, as remaining accounts.
pub fn get_all_pools(ctx: Context<GetAllPools>, first_pool_id: u64) -> Result<Vec<VestingPool>> {
    let config = &ctx.accounts.config;
    require!(
        ctx.remaining_accounts.len() <= MAX_POOLS_PER_QUERY,
        VestingError::PoolQueryTooLarge
    );

    let mut pools = Vec::with_capacity(ctx.remaining_accounts.len());
    for (offset, info) in ctx.remaining_accounts.iter().enumerate() {
        let pool_id = first_pool_id
            .checked_add(offset as u64)
            .ok_or(VestingError::MathOverflow)?;
        require!(pool_id < config.pool_count, VestingError::PoolNotFound);
        let (expected, _) =
            Pubkey::find_program_address(&[POOL_SEED, pool_id.to_le_bytes().as_ref()], &crate::ID);
        require_keys_eq!(info.key(), expected, VestingError::PoolNotFound);
        pools.push(state::load::<VestingPool>(info, VestingError::PoolNotFound)?);
    }
    Ok(pools)
}

/// Returns the allocations of `pool_id` passed as remaining accounts. Each
/// account must be the allocation PDA of that pool.
pub fn get_pool_allocations(
    ctx: Context<GetPoolAllocations>,
    pool_id: u64,
) -> Result<Vec<Allocation>> {
    require!(
        ctx.remaining_accounts.len() <= MAX_ALLOCATIONS_PER_QUERY,
        VestingError::AllocationQueryTooLarge
    );
    let _pool: VestingPool = state::load(&ctx.accounts.pool, VestingError::PoolNotFound)?;
    let pool_key = ctx.accounts.pool.key();

    let mut allocations = Vec::with_capacity(ctx.remaining_accounts.len());
    for info in ctx.remaining_accounts.iter() {
        let allocation: Allocation = state::load(info, VestingError::NotWhitelisted)?;
        require!(allocation.pool_id == pool_id, VestingError::NotWhitelisted);
        require_keys_eq!(
            info.key(),
            allocation.address(&pool_key)?,
            VestingError::NotWhitelisted
        );
        allocations.push(allocation);
    }
    Ok(allocations)
}

pub fn get_allocation(
    ctx: Context<GetAllocation>,
    _pool_id: u64,
    _beneficiary: Pubkey,
) -> Result<Allocation> {
    let (_, allocation) = ctx.accounts.load()?;
    Ok(allocation)
}

pub fn get_vested_amount(
    ctx: Context<GetAllocation>,
    _pool_id: u64,
    _beneficiary: Pubkey,
) -> Result<u64> {
    let (pool, allocation) = ctx.accounts.load()?;
    let now = Clock::get()?.unix_timestamp;
    schedule::vested_amount(&pool, &allocation, now)
}

pub fn get_releasable_amount(
    ctx: Context<GetAllocation>,
    _pool_id: u64,
    _beneficiary: Pubkey,
) -> Result<u64> {
    let (pool, allocation) = ctx.accounts.load()?;
    let now = Clock::get()?.unix_timestamp;
    distribution::releasable_amount(&pool, &allocation, now)
}

pub fn get_transfer_cap(ctx: Context<GetConfig>) -> Result<TransferCap> {
    Ok(ctx.accounts.config.transfer_cap)
}

/// Mint of the token claims currently pay out.
pub fn get_token(ctx: Context<GetConfig>) -> Result<Pubkey> {
    Ok(ctx.accounts.config.mint)
}

#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct GetPool<'info> {
    /// CHECK: Pool PDA, deserialized in-handler.
    #[account(seeds = [POOL_SEED, pool_id.to_le_bytes().as_ref()], bump)]
    pub pool: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct GetAllPools<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,
}

#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct GetPoolAllocations<'info> {
    /// CHECK: Pool PDA, deserialized in-handler.
    #[account(seeds = [POOL_SEED, pool_id.to_le_bytes().as_ref()], bump)]
    pub pool: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(pool_id: u64, beneficiary: Pubkey)]
pub struct GetAllocation<'info> {
    /// CHECK: Pool PDA, deserialized in-handler.
    #[account(seeds = [POOL_SEED, pool_id.to_le_bytes().as_ref()], bump)]
    pub pool: UncheckedAccount<'info>,

    /// CHECK: Allocation PDA, deserialized in-handler.
    #[account(seeds = [ALLOCATION_SEED, pool.key().as_ref(), beneficiary.as_ref()], bump)]
    pub allocation: UncheckedAccount<'info>,
}

impl GetAllocation<'_> {
    fn load(&self) -> Result<(VestingPool, Allocation)> {
        let pool = state::load(&self.pool, VestingError::PoolNotFound)?;
        let allocation = state::load(&self.allocation, VestingError::NotWhitelisted)?;
        Ok((pool, allocation))
    }
}

#[derive(Accounts)]
pub struct GetConfig<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,
}
