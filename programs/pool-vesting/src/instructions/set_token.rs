use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::auth::require_admin;
use crate::constants::{CONFIG_SEED, VAULT_SEED};
use crate::state::Config;

/// Switches the token subsequent claims pay out. The vault for the new mint is
/// created on first use.
pub fn set_token(ctx: Context<SetToken>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    require_admin(config, &ctx.accounts.admin.key())?;

    let old_mint = config.mint;
    config.mint = ctx.accounts.mint.key();

    emit!(TokenChanged {
        old_mint,
        new_mint: config.mint,
        vault: ctx.accounts.vault.key(),
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetToken<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,

    #[account(
        init_if_needed,
        payer = admin,
        token::mint = mint,
        token::authority = config,
        seeds = [VAULT_SEED, config.key().as_ref(), mint.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct TokenChanged {
    pub old_mint: Pubkey,
    pub new_mint: Pubkey,
    pub vault: Pubkey,
}
