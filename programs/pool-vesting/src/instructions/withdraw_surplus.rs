use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::auth::require_admin;
use crate::constants::{CONFIG_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::Config;

/// Withdraws vault tokens that no allocation can still claim.
pub fn withdraw_surplus(ctx: Context<WithdrawSurplus>, amount: u64) -> Result<()> {
    require!(amount > 0, VestingError::InvalidConfig);

    let config = &ctx.accounts.config;
    require_admin(config, &ctx.accounts.admin.key())?;

    require_keys_eq!(
        ctx.accounts.admin_destination.mint,
        config.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.admin_destination.owner,
        ctx.accounts.admin.key(),
        VestingError::InvalidTokenAccount
    );

    let balance = ctx.accounts.vault.amount;
    require!(balance >= amount, VestingError::InsufficientVaultBalance);
    require!(
        balance - amount >= config.outstanding()?,
        VestingError::WithdrawExceedsSurplus
    );

    let signer_seeds: &[&[&[u8]]] = &[&[CONFIG_SEED, &[config.bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.admin_destination.to_account_info(),
                authority: ctx.accounts.config.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(SurplusWithdrawn {
        admin: ctx.accounts.admin.key(),
        amount,
        vault_balance: balance - amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawSurplus<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [VAULT_SEED, config.key().as_ref(), config.mint.as_ref()],
        bump,
        constraint = vault.mint == config.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin_destination: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct SurplusWithdrawn {
    pub admin: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
