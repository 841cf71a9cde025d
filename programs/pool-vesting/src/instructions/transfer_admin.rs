use anchor_lang::prelude::*;

use crate::auth::require_admin;
use crate::constants::CONFIG_SEED;
use crate::error::VestingError;
use crate::state::Config;

pub fn transfer_admin(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
    require!(new_admin != Pubkey::default(), VestingError::InvalidPubkey);

    let config = &mut ctx.accounts.config;
    require_admin(config, &ctx.accounts.admin.key())?;

    let old_admin = config.admin;
    config.admin = new_admin;

    emit!(AdminTransferred {
        old_admin,
        new_admin,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct TransferAdmin<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,

    pub admin: Signer<'info>,
}

#[event]
pub struct AdminTransferred {
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
}
