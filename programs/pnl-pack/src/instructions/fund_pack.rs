use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::{PACK_SEED, POOL_SEED, VAULT_SEED};
use crate::error::PackError;
use crate::events::PackFunded;
use crate::state::{GlobalPackPool, KolVault, Pack};
use crate::utils::{transfer_tokens, TransferPlan};

/// Move `amount` of `ticker`'s tokens from its vault into the pack.
///
/// The pool PDA signs for the vault. Each call funds one ticker; a pack can be
/// funded partially, and a drained pack can be funded again.
pub fn fund_pack(ctx: Context<FundPack>, ticker: String, amount: u64) -> Result<()> {
    let plan = TransferPlan::new(
        amount,
        ctx.accounts.token_vault.amount,
        ctx.accounts.pack_token_account.amount,
    )?;

    msg!("Transferring {} {} tokens from vault to pack {}", amount, ticker, ctx.accounts.pack.key());

    let signer_seeds: &[&[&[u8]]] = &[&[POOL_SEED, &[ctx.accounts.pool.bump]]];
    transfer_tokens(
        &ctx.accounts.token_program,
        &ctx.accounts.token_vault,
        &ctx.accounts.mint,
        &ctx.accounts.pack_token_account,
        ctx.accounts.pool.to_account_info(),
        signer_seeds,
        plan.amount,
    )?;

    msg!(
        "Pack holds {} {}, vault keeps {}",
        plan.destination_after,
        ticker,
        plan.source_after
    );

    emit!(PackFunded {
        pack: ctx.accounts.pack.key(),
        ticker,
        amount,
        pack_balance: plan.destination_after,
        vault_balance: plan.source_after,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(ticker: String)]
pub struct FundPack<'info> {
    #[account(
        seeds = [POOL_SEED],
        bump = pool.bump,
        has_one = authority @ PackError::Unauthorized
    )]
    pub pool: Box<Account<'info, GlobalPackPool>>,

    pub authority: Signer<'info>,

    #[account(
        seeds = [
            PACK_SEED,
            pack.kol_a.as_bytes(),
            pack.kol_b.as_bytes(),
            pack.kol_c.as_bytes(),
            pack.kol_d.as_bytes(),
        ],
        bump = pack.bump,
        constraint = pack.tickers().contains(&ticker) @ PackError::TickerNotInPack
    )]
    pub pack: Box<Account<'info, Pack>>,

    #[account(
        seeds = [VAULT_SEED, ticker.as_bytes(), pool.key().as_ref()],
        bump = vault.bump,
        has_one = mint @ PackError::AddressMismatch,
        has_one = token_vault @ PackError::AddressMismatch
    )]
    pub vault: Box<Account<'info, KolVault>>,

    #[account(
        mint::token_program = token_program,
        constraint = pack.mint_for(&ticker) == Some(mint.key()) @ PackError::AddressMismatch
    )]
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(mut)]
    pub token_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = pack,
        associated_token::token_program = token_program
    )]
    pub pack_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}
