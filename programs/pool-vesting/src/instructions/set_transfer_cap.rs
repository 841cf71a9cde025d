use anchor_lang::prelude::*;

use crate::auth::require_admin;
use crate::constants::CONFIG_SEED;
use crate::error::VestingError;
use crate::state::{Config, TransferCap};

pub fn set_transfer_cap(ctx: Context<SetTransferCap>, limit: u64, active: bool) -> Result<()> {
    let config = &mut ctx.accounts.config;
    require_admin(config, &ctx.accounts.admin.key())?;
    require!(!active || limit > 0, VestingError::InvalidTransferCap);

    config.transfer_cap = TransferCap { limit, active };

    emit!(TransferCapSet {
        admin: config.admin,
        limit,
        active,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetTransferCap<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,

    pub admin: Signer<'info>,
}

#[event]
pub struct TransferCapSet {
    pub admin: Pubkey,
    pub limit: u64,
    pub active: bool,
}
