use anchor_lang::prelude::*;

/// PDA seeds. These bytes are part of every derived address, so changing any
/// of them orphans all existing accounts.
#[constant]
pub const POOL_SEED: &[u8] = b"global_pack_pool";
#[constant]
pub const VAULT_SEED: &[u8] = b"kol_vault";
#[constant]
pub const TOKEN_VAULT_SEED: &[u8] = b"token_vault";
#[constant]
pub const PACK_SEED: &[u8] = b"pack";

/// Tickers double as PDA seeds, which the runtime caps at 32 bytes each.
pub const MAX_TICKER_LEN: usize = 32;

/// A pack always groups exactly this many tickers.
pub const PACK_SIZE: usize = 4;

/// The only key allowed to create the global pack pool. Every later
/// admin-gated instruction checks against the authority stored in the pool.
#[constant]
pub const ADMIN_KEY: Pubkey = pubkey!("5A9ZVwudmr6aHnQ7oMtakoifj1rWaZ7Hi87BE68q9qd7");
