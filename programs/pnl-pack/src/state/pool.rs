use anchor_lang::prelude::*;

use crate::error::PackError;

/// The global pack pool: one per deployment, found at `[POOL_SEED]`.
///
/// Lamports deposited during the raise live directly on this account. The
/// pool PDA is also the token authority of every ticker vault.
#[account]
#[derive(InitSpace)]
pub struct GlobalPackPool {
    /// Admin recorded at initialization; gates every vault and pack instruction.
    pub authority: Pubkey,
    /// Number of tickers the raise is registered for.
    pub total_kols: u8,
    pub vault_count: u16,
    pub pack_count: u32,
    pub bump: u8,
}

impl GlobalPackPool {
    pub const LEN: usize = 8 + GlobalPackPool::INIT_SPACE;

    pub fn record_vault(&mut self) -> Result<()> {
        self.vault_count = self
            .vault_count
            .checked_add(1)
            .ok_or(PackError::Overflow)?;
        Ok(())
    }

    pub fn record_pack(&mut self) -> Result<()> {
        self.pack_count = self
            .pack_count
            .checked_add(1)
            .ok_or(PackError::Overflow)?;
        Ok(())
    }
}
