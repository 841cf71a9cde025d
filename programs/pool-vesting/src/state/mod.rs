pub mod allocation;
pub mod config;
pub mod pool;

pub use allocation::*;
pub use config::*;
pub use pool::*;

use anchor_lang::prelude::*;
use anchor_lang::{AccountDeserialize, AccountSerialize, Owner};

use crate::error::VestingError;

/// Deserializes a program-owned account, reporting `missing` when the PDA has
/// not been created yet.
pub fn load<T: AccountDeserialize + Owner>(info: &AccountInfo, missing: VestingError) -> Result<T> {
    if info.owner != &T::owner() || info.data_is_empty() {
        return Err(missing.into());
    }
    let data = info.try_borrow_data()?;
    T::try_deserialize(&mut &data[..])
}

/// Writes `value` (discriminator included) back into a program-owned account.
pub fn store<T: AccountSerialize>(info: &AccountInfo, value: &T) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    value.try_serialize(&mut writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_account<R>(owner: Pubkey, data: &mut [u8], f: impl FnOnce(&AccountInfo) -> R) -> R {
        let key = Pubkey::new_from_array([3u8; 32]);
        let mut lamports = 1_000_000u64;
        let info = AccountInfo::new(&key, false, true, &mut lamports, data, &owner, false, 0);
        f(&info)
    }

    fn allocation() -> Allocation {
        let mut a = Allocation::default();
        a.initialize(2, Pubkey::new_from_array([5u8; 32]), 1_000_000, 253)
            .unwrap();
        a
    }

    fn serialized(a: &Allocation) -> Vec<u8> {
        let mut buf = Vec::new();
        a.try_serialize(&mut buf).unwrap();
        buf
    }

    #[test]
    fn empty_account_reports_the_missing_error() {
        let mut data: Vec<u8> = Vec::new();
        with_account(crate::ID, &mut data, |info| {
            let err = load::<Allocation>(info, VestingError::NotWhitelisted).unwrap_err();
            assert_eq!(err, VestingError::NotWhitelisted.into());
            let err = load::<VestingPool>(info, VestingError::PoolNotFound).unwrap_err();
            assert_eq!(err, VestingError::PoolNotFound.into());
        });
    }

    #[test]
    fn foreign_owner_is_treated_as_missing() {
        let mut data = serialized(&allocation());
        let system_program = Pubkey::default();
        with_account(system_program, &mut data, |info| {
            let err = load::<Allocation>(info, VestingError::InvalidPool).unwrap_err();
            assert_eq!(err, VestingError::InvalidPool.into());
        });
    }

    #[test]
    fn loads_a_serialized_allocation() {
        let expected = allocation();
        let mut data = serialized(&expected);
        with_account(crate::ID, &mut data, |info| {
            let loaded: Allocation = load(info, VestingError::NotWhitelisted).unwrap();
            assert_eq!(loaded, expected);
        });
    }

    #[test]
    fn store_then_load_round_trips() {
        let mut data = vec![0u8; 8 + Allocation::SIZE];
        with_account(crate::ID, &mut data, |info| {
            let mut a = allocation();
            store(info, &a).unwrap();
            assert_eq!(load::<Allocation>(info, VestingError::NotWhitelisted).unwrap(), a);

            a.record_distribution(250).unwrap();
            a.set_disabled(true);
            store(info, &a).unwrap();
            let loaded: Allocation = load(info, VestingError::NotWhitelisted).unwrap();
            assert_eq!(loaded.distributed_amount, 250);
            assert!(loaded.disabled);
        });
    }

    #[test]
    fn wrong_account_type_does_not_deserialize() {
        let mut data = serialized(&allocation());
        with_account(crate::ID, &mut data, |info| {
            assert!(load::<VestingPool>(info, VestingError::PoolNotFound).is_err());
        });
    }
}
