//! Program-wide constants.

/// PDA seed of the singleton configuration account.
pub const CONFIG_SEED: &[u8] = b"config";

/// PDA seed prefix of a vesting pool (followed by the little-endian pool id).
pub const POOL_SEED: &[u8] = b"pool";

/// PDA seed prefix of an allocation (followed by pool PDA and beneficiary).
pub const ALLOCATION_SEED: &[u8] = b"allocation";

/// PDA seed prefix of the token vault (followed by config PDA and mint).
pub const VAULT_SEED: &[u8] = b"vault";

/// `initial_unlock_ratio` is expressed in thousandths.
pub const UNLOCK_RATIO_DENOMINATOR: u16 = 1000;

/// Max bytes of a pool display name.
pub const MAX_POOL_NAME_LEN: usize = 64;

/// Max pools returned by a single `get_all_pools` call (return data is capped at 1 KiB).
pub const MAX_POOLS_PER_QUERY: usize = 6;

/// Max allocations returned by a single `get_pool_allocations` call.
pub const MAX_ALLOCATIONS_PER_QUERY: usize = 12;
