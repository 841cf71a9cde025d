use anchor_lang::prelude::*;

pub mod auth;
pub mod constants;
pub mod distribution;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;
use state::{Allocation, PoolParams, TransferCap, VestingPool};

declare_id!("DDy4hAiMUQxo4dYxcYrSnRwpEivWY6QVL4dzMXoN3iTn");

#[program]
pub mod pool_vesting {
    use super::*;

    /// Creates the config PDA (caller becomes administrator) and the vault for `mint`.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::initialize(ctx)
    }

    /// Appends a vesting pool. Returns its index.
    pub fn add_pool(ctx: Context<AddPool>, params: PoolParams) -> Result<u64> {
        instructions::add_pool::add_pool(ctx, params)
    }

    /// Overwrites an existing pool's schedule in place.
    pub fn edit_pool(ctx: Context<EditPool>, pool_id: u64, params: PoolParams) -> Result<()> {
        instructions::edit_pool::edit_pool(ctx, pool_id, params)
    }

    /// Whitelists a beneficiary in a pool.
    pub fn allocate(
        ctx: Context<Allocate>,
        pool_id: u64,
        beneficiary: Pubkey,
        total_amount: u64,
    ) -> Result<()> {
        instructions::allocate::allocate(ctx, pool_id, beneficiary, total_amount)
    }

    /// Pauses or resumes claims for one allocation.
    pub fn set_disabled(
        ctx: Context<SetDisabled>,
        pool_id: u64,
        beneficiary: Pubkey,
        disabled: bool,
    ) -> Result<()> {
        instructions::set_disabled::set_disabled(ctx, pool_id, beneficiary, disabled)
    }

    /// Irreversibly freezes an allocation in a revocable pool.
    pub fn revoke(ctx: Context<Revoke>, pool_id: u64, beneficiary: Pubkey) -> Result<()> {
        instructions::revoke::revoke(ctx, pool_id, beneficiary)
    }

    pub fn set_transfer_cap(ctx: Context<SetTransferCap>, limit: u64, active: bool) -> Result<()> {
        instructions::set_transfer_cap::set_transfer_cap(ctx, limit, active)
    }

    pub fn transfer_admin(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
        instructions::transfer_admin::transfer_admin(ctx, new_admin)
    }

    /// Switches the payout token to the passed mint.
    pub fn set_token(ctx: Context<SetToken>) -> Result<()> {
        instructions::set_token::set_token(ctx)
    }

    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit_tokens::deposit_tokens(ctx, amount)
    }

    /// Withdraws vault tokens not owed to any beneficiary.
    pub fn withdraw_surplus(ctx: Context<WithdrawSurplus>, amount: u64) -> Result<()> {
        instructions::withdraw_surplus::withdraw_surplus(ctx, amount)
    }

    /// Transfers the releasable amount to the beneficiary. Returns the amount sent.
    pub fn claim(ctx: Context<Claim>, pool_id: u64, beneficiary: Pubkey) -> Result<u64> {
        instructions::claim::claim(ctx, pool_id, beneficiary)
    }

    pub fn get_pool(ctx: Context<GetPool>, pool_id: u64) -> Result<VestingPool> {
        instructions::views::get_pool(ctx, pool_id)
    }

    /// Pools are passed as remaining accounts starting at `first_pool_id`.
    pub fn get_all_pools(ctx: Context<GetAllPools>, first_pool_id: u64) -> Result<Vec<VestingPool>> {
        instructions::views::get_all_pools(ctx, first_pool_id)
    }

    /// Allocations of `pool_id` are passed as remaining accounts.
    pub fn get_pool_allocations(
        ctx: Context<GetPoolAllocations>,
        pool_id: u64,
    ) -> Result<Vec<Allocation>> {
        instructions::views::get_pool_allocations(ctx, pool_id)
    }

    pub fn get_allocation(
        ctx: Context<GetAllocation>,
        pool_id: u64,
        beneficiary: Pubkey,
    ) -> Result<Allocation> {
        instructions::views::get_allocation(ctx, pool_id, beneficiary)
    }

    pub fn get_vested_amount(
        ctx: Context<GetAllocation>,
        pool_id: u64,
        beneficiary: Pubkey,
    ) -> Result<u64> {
        instructions::views::get_vested_amount(ctx, pool_id, beneficiary)
    }

    pub fn get_releasable_amount(
        ctx: Context<GetAllocation>,
        pool_id: u64,
        beneficiary: Pubkey,
    ) -> Result<u64> {
        instructions::views::get_releasable_amount(ctx, pool_id, beneficiary)
    }

    pub fn get_transfer_cap(ctx: Context<GetConfig>) -> Result<TransferCap> {
        instructions::views::get_transfer_cap(ctx)
    }

    pub fn get_token(ctx: Context<GetConfig>) -> Result<Pubkey> {
        instructions::views::get_token(ctx)
    }
}
