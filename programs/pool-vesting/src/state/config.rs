use anchor_lang::prelude::*;

use crate::error::VestingError;

/// Ceiling applied to the amount moved by a single claim.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransferCap {
    pub limit: u64,
    pub active: bool,
}

impl TransferCap {
    pub const SIZE: usize = 8 + 1;

    /// Clips `amount` to the limit while the cap is active.
    pub fn clip(&self, amount: u64) -> u64 {
        if self.active {
            amount.min(self.limit)
        } else {
            amount
        }
    }
}

/// Singleton configuration PDA; sole owner of admin and cap state.
#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Administrator authority.
    pub admin: Pubkey,
    /// Token paid out by claims.
    pub mint: Pubkey,
    /// Number of pools created; also the index of the next pool.
    pub pool_count: u64,
    pub transfer_cap: TransferCap,
    /// Sum of every allocation's total amount.
    pub total_allocated: u64,
    /// Sum of every allocation's distributed amount.
    pub total_distributed: u64,
    /// Unvested amounts released from obligation by revocations.
    pub total_forfeited: u64,
    pub bump: u8,
}

impl Config {
    pub const SIZE: usize =
        32 + // admin
        32 + // mint
        8 +  // pool_count
        TransferCap::SIZE +
        8 +  // total_allocated
        8 +  // total_distributed
        8 +  // total_forfeited
        1;   // bump

    pub fn is_administrator(&self, caller: &Pubkey) -> bool {
        self.admin == *caller
    }

    /// Reserves the next pool index.
    pub fn next_pool_id(&mut self) -> Result<u64> {
        let id = self.pool_count;
        self.pool_count = id.checked_add(1).ok_or(VestingError::MathOverflow)?;
        Ok(id)
    }

    /// Tokens the vault still owes to beneficiaries.
    pub fn outstanding(&self) -> Result<u64> {
        self.total_allocated
            .checked_sub(self.total_distributed)
            .and_then(|v| v.checked_sub(self.total_forfeited))
            .ok_or(VestingError::MathOverflow)
            .map_err(Into::into)
    }

    pub fn record_allocation(&mut self, amount: u64) -> Result<()> {
        self.total_allocated = self
            .total_allocated
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        Ok(())
    }

    pub fn record_distribution(&mut self, amount: u64) -> Result<()> {
        self.total_distributed = self
            .total_distributed
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        Ok(())
    }

    pub fn record_forfeit(&mut self, amount: u64) -> Result<()> {
        self.total_forfeited = self
            .total_forfeited
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        Ok(())
    }
}
