use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::Config;

/// Single capability gate for every administrative mutator.
pub fn require_admin(config: &Config, caller: &Pubkey) -> Result<()> {
    require!(config.is_administrator(caller), VestingError::Unauthorized);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_configured_admin_passes() {
        let admin = Pubkey::new_from_array([1u8; 32]);
        let other = Pubkey::new_from_array([2u8; 32]);
        let config = Config { admin, ..Default::default() };

        assert!(require_admin(&config, &admin).is_ok());
        assert_eq!(
            require_admin(&config, &other).unwrap_err(),
            VestingError::Unauthorized.into()
        );
    }
}
