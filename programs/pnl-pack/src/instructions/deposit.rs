use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::constants::POOL_SEED;
use crate::events::PoolDeposit;
use crate::state::GlobalPackPool;
use crate::utils::TransferPlan;

/// Send lamports to the pool during the raise. Open to any signer.
pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let plan = TransferPlan::new(
        amount,
        ctx.accounts.depositor.lamports(),
        ctx.accounts.pool.to_account_info().lamports(),
    )?;

    msg!(
        "Depositing {} lamports from {} into pack pool",
        amount,
        ctx.accounts.depositor.key()
    );

    let cpi_ctx = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.depositor.to_account_info(),
            to: ctx.accounts.pool.to_account_info(),
        },
    );
    system_program::transfer(cpi_ctx, plan.amount)?;

    let pool_lamports = ctx.accounts.pool.to_account_info().lamports();
    msg!("Pool balance: {} lamports", pool_lamports);

    emit!(PoolDeposit {
        pool: ctx.accounts.pool.key(),
        depositor: ctx.accounts.depositor.key(),
        amount,
        pool_lamports,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED],
        bump = pool.bump
    )]
    pub pool: Account<'info, GlobalPackPool>,

    #[account(mut)]
    pub depositor: Signer<'info>,

    pub system_program: Program<'info, System>,
}
