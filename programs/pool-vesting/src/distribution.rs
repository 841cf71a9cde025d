//! Claim state machine: releasable amount, transfer cap, transfer, ledger.

use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::{Allocation, TransferCap, VestingPool};
use crate::utils::schedule;

/// Token holdings the program pays claims from.
pub trait TokenVault {
    fn balance(&self) -> u64;

    /// Moves `amount` to `to`. All-or-nothing.
    ///
    /// On-chain, a failing SPL token CPI aborts the whole transaction, so an
    /// `Err` here only comes from checks made before the CPI (e.g. a
    /// destination not owned by `to`). `claim` maps it to `TransferFailed`.
    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()>;
}

/// Vested minus already distributed, floored at zero.
pub fn releasable_amount(pool: &VestingPool, allocation: &Allocation, now: i64) -> Result<u64> {
    let vested = schedule::vested_amount(pool, allocation, now)?;
    Ok(vested
        .min(allocation.total_amount)
        .saturating_sub(allocation.distributed_amount))
}

/// Pays out what is releasable (clipped by `cap`) and records it. Returns the
/// amount sent. The ledger is only touched after the transfer succeeded.
pub fn claim<V: TokenVault>(
    pool: &VestingPool,
    allocation: &mut Allocation,
    cap: &TransferCap,
    now: i64,
    vault: &mut V,
) -> Result<u64> {
    require!(!allocation.disabled, VestingError::Disabled);

    let releasable = releasable_amount(pool, allocation, now)?;
    require!(releasable > 0, VestingError::ZeroClaimable);

    let to_send = cap.clip(releasable);
    require!(to_send > 0, VestingError::ZeroClaimable);

    if vault.balance() < to_send {
        msg!("vault holds {} but claim needs {}", vault.balance(), to_send);
        return err!(VestingError::TransferFailed);
    }
    vault
        .transfer(&allocation.beneficiary, to_send)
        .map_err(|e| {
            msg!("transfer to {} failed: {}", allocation.beneficiary, e);
            error!(VestingError::TransferFailed)
        })?;

    allocation.record_distribution(to_send)?;
    Ok(to_send)
}
