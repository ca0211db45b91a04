use anchor_lang::prelude::*;

use crate::constants::{PACK_SEED, PACK_SIZE};
use crate::error::PackError;
use crate::state::validate_ticker;

/// Escrow grouping four tickers, at `[PACK_SEED, kol_a, kol_b, kol_c, kol_d]`.
///
/// Holds no tokens itself: each mint has an associated token account whose
/// authority is this PDA.
#[account]
#[derive(InitSpace)]
pub struct Pack {
    #[max_len(32)]
    pub kol_a: String,
    #[max_len(32)]
    pub kol_b: String,
    #[max_len(32)]
    pub kol_c: String,
    #[max_len(32)]
    pub kol_d: String,
    pub mint_a: Pubkey,
    pub mint_b: Pubkey,
    pub mint_c: Pubkey,
    pub mint_d: Pubkey,
    pub bump: u8,
}

impl Pack {
    pub const LEN: usize = 8 + Pack::INIT_SPACE;

    pub fn tickers(&self) -> PackTickers {
        PackTickers::new(
            self.kol_a.clone(),
            self.kol_b.clone(),
            self.kol_c.clone(),
            self.kol_d.clone(),
        )
    }

    pub fn mints(&self) -> [Pubkey; PACK_SIZE] {
        [self.mint_a, self.mint_b, self.mint_c, self.mint_d]
    }

    /// Mint held for `ticker`, if the ticker belongs to this pack.
    pub fn mint_for(&self, ticker: &str) -> Option<Pubkey> {
        self.tickers()
            .position(ticker)
            .map(|index| self.mints()[index])
    }
}

/// The ordered four-ticker key of a pack.
///
/// Order is significant: `[A, B, C, D]` and `[B, A, C, D]` derive different
/// pack addresses. Never sort or dedupe this before deriving.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackTickers([String; PACK_SIZE]);

impl PackTickers {
    pub fn new(kol_a: String, kol_b: String, kol_c: String, kol_d: String) -> Self {
        Self([kol_a, kol_b, kol_c, kol_d])
    }

    pub fn as_array(&self) -> &[String; PACK_SIZE] {
        &self.0
    }

    /// Every ticker must be a usable seed and no ticker may repeat.
    pub fn validate(&self) -> Result<()> {
        for ticker in &self.0 {
            validate_ticker(ticker)?;
        }
        for (i, ticker) in self.0.iter().enumerate() {
            require!(
                !self.0[i + 1..].contains(ticker),
                PackError::InvalidComposition
            );
        }
        Ok(())
    }

    pub fn position(&self, ticker: &str) -> Option<usize> {
        self.0.iter().position(|t| t == ticker)
    }

    pub fn contains(&self, ticker: &str) -> bool {
        self.position(ticker).is_some()
    }

    /// Seeds in derivation order, without the bump.
    pub fn seeds(&self) -> [&[u8]; PACK_SIZE + 1] {
        [
            PACK_SEED,
            self.0[0].as_bytes(),
            self.0[1].as_bytes(),
            self.0[2].as_bytes(),
            self.0[3].as_bytes(),
        ]
    }
}

/// Four distinct mints; one holding account per mint.
pub fn validate_mints(mints: &[Pubkey; PACK_SIZE]) -> Result<()> {
    for (i, mint) in mints.iter().enumerate() {
        require!(
            !mints[i + 1..].contains(mint),
            PackError::InvalidComposition
        );
    }
    Ok(())
}
