use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenInterface};

use crate::constants::{PACK_SEED, POOL_SEED};
use crate::events::PackCreated;
use crate::error::PackError;
use crate::state::{validate_mints, GlobalPackPool, Pack, PackTickers};
use crate::utils::create_holding;

/// Create a pack for four tickers and one holding account per mint.
///
/// The pack address comes from the tickers in exactly the order supplied;
/// `[A, B, C, D]` and `[B, A, C, D]` are different packs. No tokens move here,
/// see `fund_pack`.
///
/// The holding accounts are created here rather than with `init`: Anchor
/// runs every `init` before any constraint, so a repeated mint would surface
/// as "account already in use" instead of `InvalidComposition`.
pub fn create_pack(
    ctx: Context<CreatePack>,
    kol_a: String,
    kol_b: String,
    kol_c: String,
    kol_d: String,
) -> Result<()> {
    let tickers = PackTickers::new(kol_a, kol_b, kol_c, kol_d);
    tickers.validate()?;

    let accounts = &ctx.accounts;
    let mints = [
        accounts.mint_a.key(),
        accounts.mint_b.key(),
        accounts.mint_c.key(),
        accounts.mint_d.key(),
    ];
    validate_mints(&mints)?;

    let pack_key = accounts.pack.key();
    let legs = [
        (&accounts.mint_a, &accounts.pack_token_a),
        (&accounts.mint_b, &accounts.pack_token_b),
        (&accounts.mint_c, &accounts.pack_token_c),
        (&accounts.mint_d, &accounts.pack_token_d),
    ];
    for (mint, holding) in legs {
        create_holding(
            &accounts.associated_token_program,
            &accounts.token_program,
            &accounts.system_program,
            accounts.authority.to_account_info(),
            accounts.pack.to_account_info(),
            mint,
            holding.to_account_info(),
        )?;
    }

    let [kol_a, kol_b, kol_c, kol_d] = tickers.as_array().clone();
    let bump = ctx.bumps.pack;

    ctx.accounts.pack.set_inner(Pack {
        kol_a: kol_a.clone(),
        kol_b: kol_b.clone(),
        kol_c: kol_c.clone(),
        kol_d: kol_d.clone(),
        mint_a: mints[0],
        mint_b: mints[1],
        mint_c: mints[2],
        mint_d: mints[3],
        bump,
    });
    ctx.accounts.pool.record_pack()?;

    msg!("Pack created: {}", pack_key);
    msg!("Seeds used: pack + {} + {} + {} + {}", kol_a, kol_b, kol_c, kol_d);

    emit!(PackCreated {
        pack: pack_key,
        kol_a,
        kol_b,
        kol_c,
        kol_d,
        bump,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(kol_a: String, kol_b: String, kol_c: String, kol_d: String)]
pub struct CreatePack<'info> {
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
        space = Pack::LEN,
        seeds = [PACK_SEED, kol_a.as_bytes(), kol_b.as_bytes(), kol_c.as_bytes(), kol_d.as_bytes()],
        bump
    )]
    pub pack: Box<Account<'info, Pack>>,

    #[account(mint::token_program = token_program)]
    pub mint_a: Box<InterfaceAccount<'info, Mint>>,
    #[account(mint::token_program = token_program)]
    pub mint_b: Box<InterfaceAccount<'info, Mint>>,
    #[account(mint::token_program = token_program)]
    pub mint_c: Box<InterfaceAccount<'info, Mint>>,
    #[account(mint::token_program = token_program)]
    pub mint_d: Box<InterfaceAccount<'info, Mint>>,

    /// CHECK: created by the handler as the pack's associated token account for `mint_a`
    #[account(mut)]
    pub pack_token_a: UncheckedAccount<'info>,
    /// CHECK: created by the handler as the pack's associated token account for `mint_b`
    #[account(mut)]
    pub pack_token_b: UncheckedAccount<'info>,
    /// CHECK: created by the handler as the pack's associated token account for `mint_c`
    #[account(mut)]
    pub pack_token_c: UncheckedAccount<'info>,
    /// CHECK: created by the handler as the pack's associated token account for `mint_d`
    #[account(mut)]
    pub pack_token_d: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}
