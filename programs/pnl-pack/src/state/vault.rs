use anchor_lang::prelude::*;

use crate::constants::MAX_TICKER_LEN;
use crate::error::PackError;

/// Per-ticker vault record, at `[VAULT_SEED, ticker, pool]`.
///
/// The tokens themselves sit in `token_vault`, a token account at
/// `[TOKEN_VAULT_SEED, ticker, pool]` whose authority is the pool PDA.
#[account]
#[derive(InitSpace)]
pub struct KolVault {
    #[max_len(32)]
    pub ticker: String,
    pub mint: Pubkey,
    pub token_vault: Pubkey,
    pub bump: u8,
    pub token_vault_bump: u8,
}

impl KolVault {
    pub const LEN: usize = 8 + KolVault::INIT_SPACE;

    pub fn initialize(
        &mut self,
        ticker: String,
        mint: Pubkey,
        token_vault: Pubkey,
        bump: u8,
        token_vault_bump: u8,
    ) -> Result<()> {
        validate_ticker(&ticker)?;
        self.ticker = ticker;
        self.mint = mint;
        self.token_vault = token_vault;
        self.bump = bump;
        self.token_vault_bump = token_vault_bump;
        Ok(())
    }
}

/// Tickers are used verbatim as seeds; an empty or oversized one cannot
/// produce a stable address.
pub fn validate_ticker(ticker: &str) -> Result<()> {
    require!(
        !ticker.is_empty() && ticker.len() <= MAX_TICKER_LEN,
        PackError::InvalidTickerLength
    );
    Ok(())
}
