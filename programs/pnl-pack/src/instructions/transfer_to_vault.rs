use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::{POOL_SEED, VAULT_SEED};
use crate::error::PackError;
use crate::events::VaultFunded;
use crate::state::{GlobalPackPool, KolVault};
use crate::utils::{transfer_tokens, TransferPlan};

/// Top up `ticker`'s vault from a token account the authority controls.
pub fn transfer_to_vault(ctx: Context<TransferToVault>, ticker: String, amount: u64) -> Result<()> {
    let plan = TransferPlan::new(
        amount,
        ctx.accounts.source.amount,
        ctx.accounts.token_vault.amount,
    )?;

    msg!("Transferring {} tokens for KOL {} from authority to vault", amount, ticker);

    transfer_tokens(
        &ctx.accounts.token_program,
        &ctx.accounts.source,
        &ctx.accounts.mint,
        &ctx.accounts.token_vault,
        ctx.accounts.authority.to_account_info(),
        &[],
        plan.amount,
    )?;

    msg!("Vault balance for {}: {}", ticker, plan.destination_after);

    emit!(VaultFunded {
        vault: ctx.accounts.vault.key(),
        ticker,
        amount,
        vault_balance: plan.destination_after,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(ticker: String)]
pub struct TransferToVault<'info> {
    #[account(
        seeds = [POOL_SEED],
        bump = pool.bump,
        has_one = authority @ PackError::Unauthorized
    )]
    pub pool: Account<'info, GlobalPackPool>,

    pub authority: Signer<'info>,

    #[account(
        seeds = [VAULT_SEED, ticker.as_bytes(), pool.key().as_ref()],
        bump = vault.bump,
        has_one = mint @ PackError::AddressMismatch,
        has_one = token_vault @ PackError::AddressMismatch
    )]
    pub vault: Account<'info, KolVault>,

    #[account(mint::token_program = token_program)]
    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = authority,
        token::token_program = token_program
    )]
    pub source: InterfaceAccount<'info, TokenAccount>,

    #[account(mut)]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}
