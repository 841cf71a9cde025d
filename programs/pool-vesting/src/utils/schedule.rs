//! Vested-amount formula.
//!
//! - before `start`: nothing
//! - `duration == 0` or `now >= start + duration`: the whole allocation
//! - otherwise: `initial + (total - initial) * (now - start) / duration`,
//!   where `initial = total * initial_unlock_ratio / 1000`
//!
//! Everything is recomputed from the current pool fields on every call, so a
//! pool edit applies to amounts not yet claimed. The cliff is not consulted:
//! unlike cliff-gated schedules (ramp starting at the cliff, ending at
//! `cliff + duration`), the ramp always runs from `start` to `start + duration`.

use anchor_lang::prelude::*;

use crate::constants::UNLOCK_RATIO_DENOMINATOR;
use crate::error::VestingError;
use crate::state::{Allocation, VestingPool};

/// Amount of `allocation` vested at `now` under `pool`.
pub fn vested_amount(pool: &VestingPool, allocation: &Allocation, now: i64) -> Result<u64> {
    if allocation.revoked {
        return Ok(allocation.frozen_vested);
    }
    linear_vested(
        allocation.total_amount,
        pool.start,
        pool.duration,
        pool.initial_unlock_ratio,
        now,
    )
    .map_err(Into::into)
}

pub fn linear_vested(
    total: u64,
    start: i64,
    duration: u64,
    initial_unlock_ratio: u16,
    now: i64,
) -> std::result::Result<u64, VestingError> {
    if now < start {
        return Ok(0);
    }
    // now >= start, so the difference fits in u128 without wrapping.
    let elapsed = (now as i128 - start as i128) as u128;
    let duration = duration as u128;
    if duration == 0 || elapsed >= duration {
        return Ok(total);
    }

    let total = total as u128;
    let initial = total
        .checked_mul(initial_unlock_ratio as u128)
        .ok_or(VestingError::MathOverflow)?
        / UNLOCK_RATIO_DENOMINATOR as u128;
    let linear = total
        .checked_sub(initial)
        .ok_or(VestingError::MathOverflow)?
        .checked_mul(elapsed)
        .ok_or(VestingError::MathOverflow)?
        / duration;
    let vested = initial
        .checked_add(linear)
        .ok_or(VestingError::MathOverflow)?;
    u64::try_from(vested).map_err(|_| VestingError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: i64 = 1_700_000_000;

    fn pool(start: i64, duration: u64, ratio: u16) -> VestingPool {
        VestingPool {
            start,
            cliff: start,
            duration,
            initial_unlock_ratio: ratio,
            ..Default::default()
        }
    }

    fn allocation(total: u64) -> Allocation {
        Allocation {
            beneficiary: Pubkey::new_from_array([1u8; 32]),
            total_amount: total,
            ..Default::default()
        }
    }

    #[test]
    fn zero_duration_vests_everything_at_start() {
        let p = pool(T, 0, 100);
        let a = allocation(1_000_000);
        assert_eq!(vested_amount(&p, &a, T - 1).unwrap(), 0);
        assert_eq!(vested_amount(&p, &a, T).unwrap(), 1_000_000);
        assert_eq!(vested_amount(&p, &a, T + 86_400).unwrap(), 1_000_000);
    }

    #[test]
    fn initial_unlock_then_linear_then_full() {
        let start = T + 100;
        let p = pool(start, 3600, 100);
        let a = allocation(1_000_000);

        assert_eq!(vested_amount(&p, &a, T).unwrap(), 0);
        assert_eq!(vested_amount(&p, &a, start).unwrap(), 100_000);
        // 900_000 * 1 / 3600 on top of the initial unlock.
        assert_eq!(vested_amount(&p, &a, T + 101).unwrap(), 100_250);
        assert_eq!(vested_amount(&p, &a, start + 1800).unwrap(), 550_000);
        assert_eq!(vested_amount(&p, &a, start + 3599).unwrap(), 999_750);
        assert_eq!(vested_amount(&p, &a, start + 3600).unwrap(), 1_000_000);
        assert_eq!(vested_amount(&p, &a, start + 3600 + 604_800).unwrap(), 1_000_000);
    }

    #[test]
    fn full_initial_unlock_vests_at_start_regardless_of_cliff() {
        let mut p = pool(T, 600, 1000);
        p.cliff = T + 9_327_600;
        let a = allocation(100);
        assert_eq!(vested_amount(&p, &a, T).unwrap(), 100);
    }

    #[test]
    fn cliff_does_not_gate_linear_vesting() {
        let mut p = pool(T, 1000, 0);
        p.cliff = T + 10_000;
        let a = allocation(1_000);
        assert_eq!(vested_amount(&p, &a, T + 500).unwrap(), 500);
    }

    #[test]
    fn ramp_ends_at_start_plus_duration_even_with_later_cliff() {
        let mut p = pool(T, 1000, 100);
        p.cliff = T + 100;
        let a = allocation(1_000_000);
        assert_eq!(vested_amount(&p, &a, T + 50).unwrap(), 145_000);
        assert_eq!(vested_amount(&p, &a, T + 1050).unwrap(), 1_000_000);
    }

    #[test]
    fn truncates_toward_zero() {
        let p = pool(T, 3, 0);
        let a = allocation(10);
        assert_eq!(vested_amount(&p, &a, T + 1).unwrap(), 3);
        assert_eq!(vested_amount(&p, &a, T + 2).unwrap(), 6);
    }

    #[test]
    fn monotonic_over_the_whole_schedule() {
        for &(duration, ratio, total) in &[
            (3600u64, 100u16, 1_000_000u64),
            (7, 0, 13),
            (1_000, 999, u64::MAX),
            (86_400 * 365, 250, 123_456_789),
        ] {
            let p = pool(T, duration, ratio);
            let a = allocation(total);
            let step = (duration / 97).max(1) as i64;
            let mut prev = 0;
            let mut now = T - 5;
            while now <= T + duration as i64 + 5 {
                let v = vested_amount(&p, &a, now).unwrap();
                assert!(v >= prev, "vested went down at {now}: {v} < {prev}");
                assert!(v <= total);
                prev = v;
                now += step;
            }
            assert_eq!(vested_amount(&p, &a, T + duration as i64).unwrap(), total);
        }
    }

    #[test]
    fn revoked_allocation_is_frozen() {
        let p = pool(T, 1000, 0);
        let mut a = allocation(1_000);
        a.revoked = true;
        a.frozen_vested = 250;
        assert_eq!(vested_amount(&p, &a, T + 500).unwrap(), 250);
        assert_eq!(vested_amount(&p, &a, T + 5_000).unwrap(), 250);
    }

    #[test]
    fn pure_for_identical_inputs() {
        let p = pool(T, 3600, 100);
        let a = allocation(1_000_000);
        let first = vested_amount(&p, &a, T + 42).unwrap();
        assert_eq!(vested_amount(&p, &a, T + 42).unwrap(), first);
    }

    #[test]
    fn handles_extreme_timestamps() {
        assert_eq!(linear_vested(10, i64::MIN, 10, 0, i64::MAX).unwrap(), 10);
        assert_eq!(linear_vested(10, i64::MAX, 10, 0, i64::MIN).unwrap(), 0);
    }
}
