use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::{POOL_SEED, TOKEN_VAULT_SEED, VAULT_SEED};
use crate::error::PackError;
use crate::events::VaultInitialized;
use crate::state::{GlobalPackPool, KolVault};

/// Create the vault record and token holding account for `ticker`.
///
/// The holding account's authority is the pool PDA, so only this program
/// can move tokens out of it. Both accounts use `init`: a ticker that
/// already has a vault is rejected rather than overwritten.
pub fn init_vault(ctx: Context<InitVault>, ticker: String) -> Result<()> {
    let token_vault = ctx.accounts.token_vault.key();
    let mint = ctx.accounts.mint.key();

    ctx.accounts.vault.initialize(
        ticker.clone(),
        mint,
        token_vault,
        ctx.bumps.vault,
        ctx.bumps.token_vault,
    )?;
    ctx.accounts.pool.record_vault()?;

    msg!("Token vault initialized for KOL: {} with mint: {}", ticker, mint);
    msg!("Vault record: {}, holding account: {}", ctx.accounts.vault.key(), token_vault);

    emit!(VaultInitialized {
        vault: ctx.accounts.vault.key(),
        token_vault,
        ticker,
        mint,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(ticker: String)]
pub struct InitVault<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED],
        bump = pool.bump,
        has_one = authority @ PackError::Unauthorized
    )]
    pub pool: Account<'info, GlobalPackPool>,

    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(mint::token_program = token_program)]
    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        init,
        payer = authority,
        space = KolVault::LEN,
        seeds = [VAULT_SEED, ticker.as_bytes(), pool.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, KolVault>,

    #[account(
        init,
        payer = authority,
        seeds = [TOKEN_VAULT_SEED, ticker.as_bytes(), pool.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = pool,
        token::token_program = token_program
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Interface<'info, TokenInterface>,
}
