pub mod initialize;
pub mod add_pool;
pub mod edit_pool;
pub mod allocate;
pub mod set_disabled;
pub mod revoke;
pub mod set_transfer_cap;
pub mod transfer_admin;
pub mod set_token;
pub mod deposit_tokens;
pub mod withdraw_surplus;
pub mod claim;
pub mod views;

pub use initialize::*;
pub use add_pool::*;
pub use edit_pool::*;
pub use allocate::*;
pub use set_disabled::*;
pub use revoke::*;
pub use set_transfer_cap::*;
pub use transfer_admin::*;
pub use set_token::*;
pub use deposit_tokens::*;
pub use withdraw_surplus::*;
pub use claim::*;
pub use views::*;
