use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::{POOL_SEED, TOKEN_VAULT_SEED, VAULT_SEED};
use crate::error::PackError;
use crate::events::VaultProvisioned;
use crate::state::{GlobalPackPool, KolVault};
use crate::utils::{mint_tokens, transfer_tokens, ProvisionPlan};

/// Provision a ticker in one instruction:
///
/// 1. create a new mint with the authority as mint authority
/// 2. mint `total_supply` into the authority's associated token account
/// 3. create the ticker's vault record and holding account
/// 4. move `vault_allocation` from the authority into the vault
///
/// The mint, the authority's token account and both vault accounts are
/// created by `init` during account validation, before the handler runs.
/// `ProvisionPlan` is the handler's first step, and an oversized allocation
/// fails there. The transaction then rolls the created accounts back, so
/// nobody can observe a mint without its vault, or a vault without its
/// allocation.
pub fn mint_and_init_vault_and_transfer(
    ctx: Context<MintAndInitVaultAndTransfer>,
    ticker: String,
    decimals: u8,
    total_supply: u64,
    vault_allocation: u64,
) -> Result<()> {
    let plan = ProvisionPlan::new(
        total_supply,
        vault_allocation,
        ctx.accounts.authority_token_account.amount,
    )?;
    let mint = ctx.accounts.mint.key();
    let token_vault = ctx.accounts.token_vault.key();

    msg!(
        "Minting {} tokens ({} decimals) to authority for KOL: {}",
        total_supply,
        decimals,
        ticker
    );
    mint_tokens(
        &ctx.accounts.token_program,
        &ctx.accounts.mint,
        &ctx.accounts.authority_token_account,
        ctx.accounts.authority.to_account_info(),
        plan.total_supply,
    )?;

    ctx.accounts.vault.initialize(
        ticker.clone(),
        mint,
        token_vault,
        ctx.bumps.vault,
        ctx.bumps.token_vault,
    )?;
    ctx.accounts.pool.record_vault()?;
    msg!("Token vault initialized for KOL: {} with mint: {}", ticker, mint);

    if plan.vault_allocation > 0 {
        msg!("Transferring {} tokens from authority to vault", plan.vault_allocation);
        transfer_tokens(
            &ctx.accounts.token_program,
            &ctx.accounts.authority_token_account,
            &ctx.accounts.mint,
            &ctx.accounts.token_vault,
            ctx.accounts.authority.to_account_info(),
            &[],
            plan.vault_allocation,
        )?;
    }

    msg!(
        "Provisioned {}: vault holds {}, authority keeps {}",
        ticker,
        plan.vault_allocation,
        plan.admin_after
    );

    emit!(VaultProvisioned {
        vault: ctx.accounts.vault.key(),
        ticker,
        mint,
        total_supply,
        vault_allocation,
        admin_balance: plan.admin_after,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(ticker: String, decimals: u8)]
pub struct MintAndInitVaultAndTransfer<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED],
        bump = pool.bump,
        has_one = authority @ PackError::Unauthorized
    )]
    pub pool: Box<Account<'info, GlobalPackPool>>,

    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        mint::decimals = decimals,
        mint::authority = authority,
        mint::token_program = token_program
    )]
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = authority,
        associated_token::mint = mint,
        associated_token::authority = authority,
        associated_token::token_program = token_program
    )]
    pub authority_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init,
        payer = authority,
        space = KolVault::LEN,
        seeds = [VAULT_SEED, ticker.as_bytes(), pool.key().as_ref()],
        bump
    )]
    pub vault: Box<Account<'info, KolVault>>,

    #[account(
        init,
        payer = authority,
        seeds = [TOKEN_VAULT_SEED, ticker.as_bytes(), pool.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = pool,
        token::token_program = token_program
    )]
    pub token_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    pub system_program: Program<'info, System>,
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}
