//! Custody program for per-ticker token vaults and four-ticker claimable packs.
//!
//! Failures are reported as `error::PackError` codes (6000 and up). Two cases
//! from the custody error taxonomy surface as framework codes instead:
//!
//! - **Address mismatch on a seeded account.** A pack, pool or vault whose
//!   address does not match the seeds derived from the instruction arguments
//!   fails Anchor's seeds check with `ErrorCode::ConstraintSeeds` (2006). The
//!   typical case is a claim that lists the pack tickers in a different order
//!   than `create_pack` did. Addresses checked with `address =`/`has_one`
//!   report `PackError::AddressMismatch`.
//! - **Already initialized.** Re-creating the pool, a vault or a pack fails
//!   in `init` with the system program's `AccountAlreadyInUse`, which is
//!   `InstructionError::Custom(0)`.

use anchor_lang::prelude::*;

declare_id!("EcTMUbWsEArPhfJi3HnSkVaQzoLbZ6Ye61ayRW58XjmN");

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod state;
pub mod utils;

pub use constants::*;
pub use instructions::*;
pub use state::*;

#[program]
pub mod pnl_pack {
    use super::*;

    /// Create the singleton pack pool. Only `ADMIN_KEY` may call this, once.
    pub fn initialize_pool(ctx: Context<InitializePool>, total_kols: u8) -> Result<()> {
        instructions::initialize_pool(ctx, total_kols)
    }

    /// Contribute lamports to the pool. Open to anyone.
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit(ctx, amount)
    }

    /// Create the vault for a ticker whose mint already exists.
    pub fn init_vault(ctx: Context<InitVault>, ticker: String) -> Result<()> {
        instructions::init_vault(ctx, ticker)
    }

    pub fn transfer_to_vault(
        ctx: Context<TransferToVault>,
        ticker: String,
        amount: u64,
    ) -> Result<()> {
        instructions::transfer_to_vault(ctx, ticker, amount)
    }

    /// Create a mint, mint the full supply to the authority, create the
    /// ticker's vault and fund it with `vault_allocation`, atomically.
    pub fn mint_and_init_vault_and_transfer(
        ctx: Context<MintAndInitVaultAndTransfer>,
        ticker: String,
        decimals: u8,
        total_supply: u64,
        vault_allocation: u64,
    ) -> Result<()> {
        instructions::mint_and_init_vault_and_transfer(
            ctx,
            ticker,
            decimals,
            total_supply,
            vault_allocation,
        )
    }

    /// Create a pack for four distinct tickers, in the order given.
    pub fn create_pack(
        ctx: Context<CreatePack>,
        kol_a: String,
        kol_b: String,
        kol_c: String,
        kol_d: String,
    ) -> Result<()> {
        instructions::create_pack(ctx, kol_a, kol_b, kol_c, kol_d)
    }

    pub fn fund_pack(ctx: Context<FundPack>, ticker: String, amount: u64) -> Result<()> {
        instructions::fund_pack(ctx, ticker, amount)
    }

    /// Withdraw an equal amount of all four pack tokens to the caller.
    pub fn claim_from_pack(
        ctx: Context<ClaimFromPack>,
        kol_a: String,
        kol_b: String,
        kol_c: String,
        kol_d: String,
        amount_per_kol: u64,
    ) -> Result<()> {
        instructions::claim_from_pack(ctx, kol_a, kol_b, kol_c, kol_d, amount_per_kol)
    }
}
