use anchor_lang::prelude::*;

use crate::constants::{MAX_POOL_NAME_LEN, UNLOCK_RATIO_DENOMINATOR};
use crate::error::VestingError;

/// Schedule parameters accepted by `add_pool` and `edit_pool`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct PoolParams {
    pub name: String,
    /// Seconds after `start` at which the cliff sits.
    pub cliff_duration: i64,
    /// Unix seconds.
    pub start: i64,
    /// Seconds of linear vesting; 0 vests everything at `start`.
    pub duration: u64,
    /// Thousandths of the allocation unlocked at `start`.
    pub initial_unlock_ratio: u16,
    pub revocable: bool,
}

/// A named vesting schedule shared by many beneficiaries.
#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct VestingPool {
    pub pool_id: u64,
    pub name: String,
    /// Absolute cliff timestamp (`start + cliff_duration`). Stored for
    /// clients; the vesting formula does not consult it.
    pub cliff: i64,
    pub start: i64,
    pub duration: u64,
    pub initial_unlock_ratio: u16,
    pub revocable: bool,
    /// Sum of allocation totals in this pool.
    pub total_allocated: u64,
    pub beneficiary_count: u64,
    pub bump: u8,
}

impl VestingPool {
    pub const SIZE: usize =
        8 +                         // pool_id
        4 + MAX_POOL_NAME_LEN +     // name
        8 +                         // cliff
        8 +                         // start
        8 +                         // duration
        2 +                         // initial_unlock_ratio
        1 +                         // revocable
        8 +                         // total_allocated
        8 +                         // beneficiary_count
        1;                          // bump

    /// Validates `params` and overwrites every schedule field in place.
    pub fn configure(&mut self, params: &PoolParams) -> Result<()> {
        require!(
            params.name.len() <= MAX_POOL_NAME_LEN,
            VestingError::PoolNameTooLong
        );
        require!(
            params.initial_unlock_ratio <= UNLOCK_RATIO_DENOMINATOR,
            VestingError::InvalidUnlockRatio
        );
        require!(params.cliff_duration >= 0, VestingError::InvalidConfig);
        let cliff = params
            .start
            .checked_add(params.cliff_duration)
            .ok_or(VestingError::MathOverflow)?;

        self.name = params.name.clone();
        self.cliff = cliff;
        self.start = params.start;
        self.duration = params.duration;
        self.initial_unlock_ratio = params.initial_unlock_ratio;
        self.revocable = params.revocable;
        Ok(())
    }

    pub fn record_allocation(&mut self, amount: u64) -> Result<()> {
        self.total_allocated = self
            .total_allocated
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        self.beneficiary_count = self
            .beneficiary_count
            .checked_add(1)
            .ok_or(VestingError::MathOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> PoolParams {
        PoolParams {
            name: "Added Strategy".to_string(),
            cliff_duration: 9_327_600,
            start: 1_700_000_000,
            duration: 600,
            initial_unlock_ratio: 1000,
            revocable: false,
        }
    }

    #[test]
    fn cliff_is_derived_from_start() {
        let mut pool = VestingPool::default();
        pool.configure(&params()).unwrap();
        assert_eq!(pool.name, "Added Strategy");
        assert_eq!(pool.cliff, 1_700_000_000 + 9_327_600);
        assert_eq!(pool.start, 1_700_000_000);
        assert_eq!(pool.duration, 600);
        assert_eq!(pool.initial_unlock_ratio, 1000);
        assert!(!pool.revocable);
    }

    #[test]
    fn rejects_ratio_above_one_thousand() {
        let mut pool = VestingPool::default();
        let err = pool
            .configure(&PoolParams { initial_unlock_ratio: 1001, ..params() })
            .unwrap_err();
        assert_eq!(err, VestingError::InvalidUnlockRatio.into());
        assert_eq!(pool, VestingPool::default());
    }

    #[test]
    fn rejects_negative_cliff_and_long_names() {
        let mut pool = VestingPool::default();
        let err = pool
            .configure(&PoolParams { cliff_duration: -1, ..params() })
            .unwrap_err();
        assert_eq!(err, VestingError::InvalidConfig.into());

        let err = pool
            .configure(&PoolParams { name: "x".repeat(MAX_POOL_NAME_LEN + 1), ..params() })
            .unwrap_err();
        assert_eq!(err, VestingError::PoolNameTooLong.into());
    }

    #[test]
    fn reconfigure_keeps_identity_and_totals() {
        let mut pool = VestingPool { pool_id: 3, bump: 254, ..Default::default() };
        pool.configure(&params()).unwrap();
        pool.record_allocation(100).unwrap();

        pool.configure(&PoolParams { name: String::new(), duration: 0, ..params() }).unwrap();
        assert_eq!(pool.pool_id, 3);
        assert_eq!(pool.bump, 254);
        assert_eq!(pool.total_allocated, 100);
        assert_eq!(pool.beneficiary_count, 1);
        assert_eq!(pool.duration, 0);
    }
}
