use anchor_lang::prelude::*;

use crate::constants::ALLOCATION_SEED;
use crate::error::VestingError;

/// One beneficiary's entitlement and payout history within one pool.
#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Allocation {
    pub pool_id: u64,
    pub beneficiary: Pubkey,
    /// Total entitlement; fixed at creation.
    pub total_amount: u64,
    /// Cumulative amount transferred; never decreases.
    pub distributed_amount: u64,
    /// Terminal. Vesting is frozen at `frozen_vested`.
    pub revoked: bool,
    /// Reversible claim pause.
    pub disabled: bool,
    /// Vested amount snapshotted at revocation.
    pub frozen_vested: u64,
    pub bump: u8,
}

impl Allocation {
    pub const SIZE: usize =
        8 +  // pool_id
        32 + // beneficiary
        8 +  // total_amount
        8 +  // distributed_amount
        1 +  // revoked
        1 +  // disabled
        8 +  // frozen_vested
        1;   // bump

    /// PDA of this entry under `pool`, rebuilt from the stored bump.
    pub fn address(&self, pool: &Pubkey) -> Result<Pubkey> {
        Pubkey::create_program_address(
            &[
                ALLOCATION_SEED,
                pool.as_ref(),
                self.beneficiary.as_ref(),
                &[self.bump],
            ],
            &crate::ID,
        )
        .map_err(|_| error!(VestingError::NotWhitelisted))
    }

    pub fn is_initialized(&self) -> bool {
        self.beneficiary != Pubkey::default()
    }

    /// Fills a freshly created entry. An entry that already names a
    /// beneficiary cannot be re-initialized.
    pub fn initialize(
        &mut self,
        pool_id: u64,
        beneficiary: Pubkey,
        total_amount: u64,
        bump: u8,
    ) -> Result<()> {
        require!(!self.is_initialized(), VestingError::DuplicateAllocation);
        require!(beneficiary != Pubkey::default(), VestingError::InvalidPubkey);
        require!(total_amount > 0, VestingError::InvalidAllocation);

        *self = Allocation {
            pool_id,
            beneficiary,
            total_amount,
            distributed_amount: 0,
            revoked: false,
            disabled: false,
            frozen_vested: 0,
            bump,
        };
        Ok(())
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Freezes vesting at `vested_now` and returns the forfeited remainder.
    pub fn revoke(&mut self, vested_now: u64) -> Result<u64> {
        require!(!self.revoked, VestingError::AlreadyRevoked);
        let frozen = vested_now
            .max(self.distributed_amount)
            .min(self.total_amount);
        let forfeited = self
            .total_amount
            .checked_sub(frozen)
            .ok_or(VestingError::MathOverflow)?;
        self.frozen_vested = frozen;
        self.revoked = true;
        Ok(forfeited)
    }

    /// Credits a confirmed transfer. Fails closed if the ledger would exceed
    /// the entitlement.
    pub fn record_distribution(&mut self, amount: u64) -> Result<()> {
        let next = self
            .distributed_amount
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        if next > self.total_amount {
            msg!(
                "ledger overrun: distributed {} + {} > total {}",
                self.distributed_amount,
                amount,
                self.total_amount
            );
            return err!(VestingError::LedgerOverrun);
        }
        self.distributed_amount = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallet() -> Pubkey {
        Pubkey::new_from_array([7u8; 32])
    }

    fn entry(total: u64) -> Allocation {
        let mut a = Allocation::default();
        a.initialize(0, wallet(), total, 255).unwrap();
        a
    }

    #[test]
    fn initialize_starts_with_clean_ledger() {
        let a = entry(1_000_000);
        assert_eq!(a.beneficiary, wallet());
        assert_eq!(a.total_amount, 1_000_000);
        assert_eq!(a.distributed_amount, 0);
        assert!(!a.revoked);
        assert!(!a.disabled);
    }

    #[test]
    fn address_matches_the_derived_pda() {
        let pool = Pubkey::new_from_array([4u8; 32]);
        let (expected, bump) = Pubkey::find_program_address(
            &[ALLOCATION_SEED, pool.as_ref(), wallet().as_ref()],
            &crate::ID,
        );
        let mut a = Allocation::default();
        a.initialize(0, wallet(), 10, bump).unwrap();
        assert_eq!(a.address(&pool).unwrap(), expected);

        let other_pool = Pubkey::new_from_array([6u8; 32]);
        assert_ne!(a.address(&other_pool).ok(), Some(expected));
    }

    #[test]
    fn second_initialize_is_a_duplicate() {
        let mut a = entry(100);
        let err = a.initialize(0, wallet(), 50, 255).unwrap_err();
        assert_eq!(err, VestingError::DuplicateAllocation.into());
        assert_eq!(a.total_amount, 100);
    }

    #[test]
    fn initialize_rejects_default_key_and_zero_amount() {
        let mut a = Allocation::default();
        let err = a.initialize(0, Pubkey::default(), 10, 255).unwrap_err();
        assert_eq!(err, VestingError::InvalidPubkey.into());
        let err = a.initialize(0, wallet(), 0, 255).unwrap_err();
        assert_eq!(err, VestingError::InvalidAllocation.into());
    }

    #[test]
    fn set_disabled_is_idempotent_and_leaves_amounts() {
        let mut a = entry(100);
        a.record_distribution(40).unwrap();
        a.set_disabled(true);
        a.set_disabled(true);
        assert!(a.disabled);
        a.set_disabled(false);
        assert!(!a.disabled);
        assert_eq!(a.total_amount, 100);
        assert_eq!(a.distributed_amount, 40);
    }

    #[test]
    fn record_distribution_fails_closed_on_overrun() {
        let mut a = entry(100);
        a.record_distribution(60).unwrap();
        let err = a.record_distribution(41).unwrap_err();
        assert_eq!(err, VestingError::LedgerOverrun.into());
        assert_eq!(a.distributed_amount, 60);
        a.record_distribution(40).unwrap();
        assert_eq!(a.distributed_amount, 100);
    }

    #[test]
    fn revoke_snapshots_and_reports_forfeit() {
        let mut a = entry(1_000);
        a.record_distribution(100).unwrap();
        assert_eq!(a.revoke(400).unwrap(), 600);
        assert!(a.revoked);
        assert_eq!(a.frozen_vested, 400);

        let err = a.revoke(900).unwrap_err();
        assert_eq!(err, VestingError::AlreadyRevoked.into());
        assert_eq!(a.frozen_vested, 400);
    }

    #[test]
    fn revoke_never_freezes_below_paid_out() {
        let mut a = entry(1_000);
        a.record_distribution(500).unwrap();
        // A schedule edit can push the live vested amount under what was paid.
        assert_eq!(a.revoke(200).unwrap(), 500);
        assert_eq!(a.frozen_vested, 500);
    }
}
