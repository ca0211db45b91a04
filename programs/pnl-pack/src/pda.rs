//! Address derivation shared by the program and its clients.
//!
//! Every account the program touches is either a PDA of this program or an
//! associated token account of one. Clients must derive with exactly these
//! seeds; on-chain `seeds = [...]` constraints use the same constants.

use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address_with_program_id;

use crate::constants::{POOL_SEED, TOKEN_VAULT_SEED, VAULT_SEED};
use crate::error::PackError;
use crate::state::PackTickers;

/// Canonical (highest valid) bump search over `seeds`.
///
/// Fails when a seed exceeds 32 bytes or no bump yields an off-curve
/// address. Either case is a misconfiguration and must not be retried.
pub fn derive(seeds: &[&[u8]], program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(seeds, program_id)
        .ok_or_else(|| error!(PackError::AddressDerivationFailed))
}

pub fn pool_address(program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    derive(&[POOL_SEED], program_id)
}

/// The `KolVault` record for `ticker`.
pub fn vault_address(program_id: &Pubkey, ticker: &str, pool: &Pubkey) -> Result<(Pubkey, u8)> {
    derive(&[VAULT_SEED, ticker.as_bytes(), pool.as_ref()], program_id)
}

/// The token account holding `ticker`'s vault balance.
pub fn token_vault_address(
    program_id: &Pubkey,
    ticker: &str,
    pool: &Pubkey,
) -> Result<(Pubkey, u8)> {
    derive(&[TOKEN_VAULT_SEED, ticker.as_bytes(), pool.as_ref()], program_id)
}

/// Pack address for the tickers in the order given.
pub fn pack_address(program_id: &Pubkey, tickers: &PackTickers) -> Result<(Pubkey, u8)> {
    derive(&tickers.seeds(), program_id)
}

/// Associated token account of `owner` for `mint`.
pub fn holding_address(owner: &Pubkey, mint: &Pubkey, token_program: &Pubkey) -> Pubkey {
    get_associated_token_address_with_program_id(owner, mint, token_program)
}
