use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::PACK_SEED;
use crate::error::PackError;
use crate::events::PackClaimed;
use crate::state::Pack;
use crate::utils::{transfer_tokens, ClaimPlan};

/// Withdraw `amount_per_kol` of each of the pack's four tokens to the
/// claimant. Open to any signer; the pack PDA signs the transfers.
///
/// All four balances are checked before the first transfer. If one holding
/// is short, nothing moves. Two claimants racing on the same pack are
/// serialized by the runtime and the second sees the first's debit.
pub fn claim_from_pack(
    ctx: Context<ClaimFromPack>,
    kol_a: String,
    kol_b: String,
    kol_c: String,
    kol_d: String,
    amount_per_kol: u64,
) -> Result<()> {
    let accounts = &ctx.accounts;
    let plan = ClaimPlan::new(
        amount_per_kol,
        [
            accounts.pack_token_a.amount,
            accounts.pack_token_b.amount,
            accounts.pack_token_c.amount,
            accounts.pack_token_d.amount,
        ],
        [
            accounts.claimant_token_a.amount,
            accounts.claimant_token_b.amount,
            accounts.claimant_token_c.amount,
            accounts.claimant_token_d.amount,
        ],
    )?;

    msg!(
        "Claiming {} per KOL from pack {} for {}",
        amount_per_kol,
        accounts.pack.key(),
        accounts.claimant.key()
    );

    let bump = [accounts.pack.bump];
    let seeds: &[&[u8]] = &[
        PACK_SEED,
        kol_a.as_bytes(),
        kol_b.as_bytes(),
        kol_c.as_bytes(),
        kol_d.as_bytes(),
        &bump,
    ];
    let signer_seeds: &[&[&[u8]]] = &[seeds];

    let legs = [
        (&accounts.mint_a, &accounts.pack_token_a, &accounts.claimant_token_a),
        (&accounts.mint_b, &accounts.pack_token_b, &accounts.claimant_token_b),
        (&accounts.mint_c, &accounts.pack_token_c, &accounts.claimant_token_c),
        (&accounts.mint_d, &accounts.pack_token_d, &accounts.claimant_token_d),
    ];
    for (mint, from, to) in legs {
        transfer_tokens(
            &accounts.token_program,
            from,
            mint,
            to,
            accounts.pack.to_account_info(),
            signer_seeds,
            plan.amount_per_kol,
        )?;
    }

    if plan.is_drained() {
        msg!("Pack {} drained", accounts.pack.key());
    } else {
        msg!("Pack remaining: {:?}", plan.pack_after);
    }

    emit!(PackClaimed {
        pack: accounts.pack.key(),
        claimant: accounts.claimant.key(),
        amount_per_kol,
        remaining: plan.pack_after,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(kol_a: String, kol_b: String, kol_c: String, kol_d: String)]
pub struct ClaimFromPack<'info> {
    #[account(
        seeds = [PACK_SEED, kol_a.as_bytes(), kol_b.as_bytes(), kol_c.as_bytes(), kol_d.as_bytes()],
        bump = pack.bump
    )]
    pub pack: Box<Account<'info, Pack>>,

    #[account(mut)]
    pub claimant: Signer<'info>,

    #[account(address = pack.mint_a @ PackError::AddressMismatch)]
    pub mint_a: Box<InterfaceAccount<'info, Mint>>,
    #[account(address = pack.mint_b @ PackError::AddressMismatch)]
    pub mint_b: Box<InterfaceAccount<'info, Mint>>,
    #[account(address = pack.mint_c @ PackError::AddressMismatch)]
    pub mint_c: Box<InterfaceAccount<'info, Mint>>,
    #[account(address = pack.mint_d @ PackError::AddressMismatch)]
    pub mint_d: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = mint_a,
        associated_token::authority = pack,
        associated_token::token_program = token_program
    )]
    pub pack_token_a: Box<InterfaceAccount<'info, TokenAccount>>,
    #[account(
        mut,
        associated_token::mint = mint_b,
        associated_token::authority = pack,
        associated_token::token_program = token_program
    )]
    pub pack_token_b: Box<InterfaceAccount<'info, TokenAccount>>,
    #[account(
        mut,
        associated_token::mint = mint_c,
        associated_token::authority = pack,
        associated_token::token_program = token_program
    )]
    pub pack_token_c: Box<InterfaceAccount<'info, TokenAccount>>,
    #[account(
        mut,
        associated_token::mint = mint_d,
        associated_token::authority = pack,
        associated_token::token_program = token_program
    )]
    pub pack_token_d: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = claimant,
        associated_token::mint = mint_a,
        associated_token::authority = claimant,
        associated_token::token_program = token_program
    )]
    pub claimant_token_a: Box<InterfaceAccount<'info, TokenAccount>>,
    #[account(
        init_if_needed,
        payer = claimant,
        associated_token::mint = mint_b,
        associated_token::authority = claimant,
        associated_token::token_program = token_program
    )]
    pub claimant_token_b: Box<InterfaceAccount<'info, TokenAccount>>,
    #[account(
        init_if_needed,
        payer = claimant,
        associated_token::mint = mint_c,
        associated_token::authority = claimant,
        associated_token::token_program = token_program
    )]
    pub claimant_token_c: Box<InterfaceAccount<'info, TokenAccount>>,
    #[account(
        init_if_needed,
        payer = claimant,
        associated_token::mint = mint_d,
        associated_token::authority = claimant,
        associated_token::token_program = token_program
    )]
    pub claimant_token_d: Box<InterfaceAccount<'info, TokenAccount>>,

    pub system_program: Program<'info, System>,
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}
