use anchor_lang::prelude::*;
use anchor_spl::associated_token::{self, AssociatedToken, Create};
use anchor_spl::token_interface::{
    mint_to, transfer_checked, Mint, MintTo, TokenAccount, TokenInterface, TransferChecked,
};

use crate::error::PackError;
use crate::pda::holding_address;

/// `transfer_checked` CPI. Pass empty `signer_seeds` when `authority` signed
/// the transaction; pass the PDA's seeds when the program signs for it.
pub fn transfer_tokens<'info>(
    token_program: &Interface<'info, TokenInterface>,
    from: &InterfaceAccount<'info, TokenAccount>,
    mint: &InterfaceAccount<'info, Mint>,
    to: &InterfaceAccount<'info, TokenAccount>,
    authority: AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
    amount: u64,
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from: from.to_account_info(),
        mint: mint.to_account_info(),
        to: to.to_account_info(),
        authority,
    };
    let cpi_ctx = CpiContext::new_with_signer(
        token_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    );
    transfer_checked(cpi_ctx, amount, mint.decimals)
}

/// Create `owner`'s associated token account for `mint` at `holding`.
///
/// The address is checked against the derivation first. Creation is
/// idempotent because anyone may open an ATA for any owner; an existing
/// account is accepted only if it already has the right mint and owner.
pub fn create_holding<'info>(
    associated_token_program: &Program<'info, AssociatedToken>,
    token_program: &Interface<'info, TokenInterface>,
    system_program: &Program<'info, System>,
    payer: AccountInfo<'info>,
    owner: AccountInfo<'info>,
    mint: &InterfaceAccount<'info, Mint>,
    holding: AccountInfo<'info>,
) -> Result<()> {
    let expected = holding_address(owner.key, &mint.key(), &token_program.key());
    require_keys_eq!(*holding.key, expected, PackError::AddressMismatch);

    let cpi_ctx = CpiContext::new(
        associated_token_program.to_account_info(),
        Create {
            payer,
            associated_token: holding,
            authority: owner,
            mint: mint.to_account_info(),
            system_program: system_program.to_account_info(),
            token_program: token_program.to_account_info(),
        },
    );
    associated_token::create_idempotent(cpi_ctx)
}

pub fn mint_tokens<'info>(
    token_program: &Interface<'info, TokenInterface>,
    mint: &InterfaceAccount<'info, Mint>,
    to: &InterfaceAccount<'info, TokenAccount>,
    mint_authority: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let cpi_accounts = MintTo {
        mint: mint.to_account_info(),
        to: to.to_account_info(),
        authority: mint_authority,
    };
    let cpi_ctx = CpiContext::new(token_program.to_account_info(), cpi_accounts);
    mint_to(cpi_ctx, amount)
}
