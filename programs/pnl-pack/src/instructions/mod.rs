pub mod claim_from_pack;
pub mod create_pack;
pub mod deposit;
pub mod fund_pack;
pub mod init_vault;
pub mod initialize_pool;
pub mod provision_vault;
pub mod transfer_to_vault;

pub use claim_from_pack::*;
pub use create_pack::*;
pub use deposit::*;
pub use fund_pack::*;
pub use init_vault::*;
pub use initialize_pool::*;
pub use provision_vault::*;
pub use transfer_to_vault::*;
