use anchor_lang::prelude::*;

/// Custom error codes for the pool vesting program.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: administrator signature required")]
    Unauthorized,

    #[msg("Vesting pool not found")]
    PoolNotFound,

    #[msg("Allocation references an unknown pool")]
    InvalidPool,

    #[msg("User is not in whitelist")]
    NotWhitelisted,

    #[msg("Allocation already exists for this pool and beneficiary")]
    DuplicateAllocation,

    #[msg("User is disabled from claiming token")]
    Disabled,

    #[msg("Zero amount to claim")]
    ZeroClaimable,

    #[msg("Distributed amount would exceed allocation")]
    LedgerOverrun,

    #[msg("Token transfer failed")]
    TransferFailed,

    #[msg("Invalid allocation (must be > 0)")]
    InvalidAllocation,

    #[msg("Too many pools requested in one query")]
    PoolQueryTooLarge,

    #[msg("Too many allocations requested in one query")]
    AllocationQueryTooLarge,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Initial unlock ratio must be at most 1000")]
    InvalidUnlockRatio,

    #[msg("Pool name too long")]
    PoolNameTooLong,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Active transfer cap must have a positive limit")]
    InvalidTransferCap,

    #[msg("Pool is not revocable")]
    NotRevocable,

    #[msg("Allocation is already revoked")]
    AlreadyRevoked,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Withdrawal would leave the vault unable to cover outstanding allocations")]
    WithdrawExceedsSurplus,

    #[msg("Math overflow")]
    MathOverflow,
}
