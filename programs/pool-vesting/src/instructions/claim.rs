use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{ALLOCATION_SEED, CONFIG_SEED, POOL_SEED, VAULT_SEED};
use crate::distribution::{self, TokenVault};
use crate::error::VestingError;
use crate::state::{self, Allocation, Config, VestingPool};

/// Pays `beneficiary` everything currently releasable in `pool_id`, clipped by
/// the transfer cap. Anyone may submit; tokens only go to the beneficiary.
pub fn claim(ctx: Context<Claim>, pool_id: u64, beneficiary: Pubkey) -> Result<u64> {
    // Capture AccountInfos before taking the mutable config borrow.
    let config_ai = ctx.accounts.config.to_account_info();
    let config_bump = ctx.accounts.config.bump;

    let pool: VestingPool = state::load(&ctx.accounts.pool, VestingError::PoolNotFound)?;
    let allocation_ai = ctx.accounts.allocation.to_account_info();
    let mut allocation: Allocation = state::load(&allocation_ai, VestingError::NotWhitelisted)?;

    let now = Clock::get()?.unix_timestamp;
    let cap = ctx.accounts.config.transfer_cap;
    let mut vault = SplVault {
        vault: &ctx.accounts.vault,
        destination: &ctx.accounts.beneficiary_token_account,
        authority: config_ai,
        authority_bump: config_bump,
        token_program: ctx.accounts.token_program.to_account_info(),
    };
    let amount = distribution::claim(&pool, &mut allocation, &cap, now, &mut vault)?;

    state::store(&allocation_ai, &allocation)?;
    ctx.accounts.config.record_distribution(amount)?;

    emit!(DistributionClaimed {
        pool_id,
        beneficiary,
        amount,
    });

    Ok(amount)
}

/// The program vault, paying out under the config PDA's signature.
struct SplVault<'a, 'info> {
    vault: &'a Account<'info, TokenAccount>,
    destination: &'a Account<'info, TokenAccount>,
    authority: AccountInfo<'info>,
    authority_bump: u8,
    token_program: AccountInfo<'info>,
}

impl TokenVault for SplVault<'_, '_> {
    fn balance(&self) -> u64 {
        self.vault.amount
    }

    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(self.destination.owner, *to, VestingError::InvalidTokenAccount);

        let signer_seeds: &[&[&[u8]]] = &[&[CONFIG_SEED, &[self.authority_bump]]];
        token::transfer(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                Transfer {
                    from: self.vault.to_account_info(),
                    to: self.destination.to_account_info(),
                    authority: self.authority.clone(),
                },
                signer_seeds,
            ),
            amount,
        )
    }
}

#[derive(Accounts)]
#[instruction(pool_id: u64, beneficiary: Pubkey)]
pub struct Claim<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,

    /// CHECK: Pool PDA, deserialized in-handler so a missing pool reports `PoolNotFound`.
    #[account(seeds = [POOL_SEED, pool_id.to_le_bytes().as_ref()], bump)]
    pub pool: UncheckedAccount<'info>,

    /// CHECK: Allocation PDA, deserialized in-handler so a missing entry reports `NotWhitelisted`.
    /// Writable, so the runtime serializes claims per (pool, beneficiary).
    #[account(
        mut,
        seeds = [ALLOCATION_SEED, pool.key().as_ref(), beneficiary.as_ref()],
        bump
    )]
    pub allocation: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, config.key().as_ref(), config.mint.as_ref()],
        bump,
        constraint = vault.mint == config.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = beneficiary_token_account.mint == config.mint @ VestingError::InvalidTokenMint,
        constraint = beneficiary_token_account.owner == beneficiary @ VestingError::InvalidTokenAccount,
    )]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct DistributionClaimed {
    pub pool_id: u64,
    pub beneficiary: Pubkey,
    pub amount: u64,
}
