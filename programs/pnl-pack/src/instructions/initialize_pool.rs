use anchor_lang::prelude::*;

use crate::constants::{ADMIN_KEY, POOL_SEED};
use crate::error::PackError;
use crate::events::PoolInitialized;
use crate::state::GlobalPackPool;

/// Create the global pack pool.
///
/// `init` refuses an account that already exists, so a second call fails
/// before the handler runs and the stored authority can never be replaced.
pub fn initialize_pool(ctx: Context<InitializePool>, total_kols: u8) -> Result<()> {
    let pool = &mut ctx.accounts.pool;

    pool.authority = ctx.accounts.authority.key();
    pool.total_kols = total_kols;
    pool.vault_count = 0;
    pool.pack_count = 0;
    pool.bump = ctx.bumps.pool;

    msg!("Global pack pool initialized: {}", pool.key());
    msg!("Authority: {}, registered KOLs: {}", pool.authority, total_kols);

    emit!(PoolInitialized {
        pool: pool.key(),
        authority: pool.authority,
        total_kols,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(
        init,
        payer = authority,
        space = GlobalPackPool::LEN,
        seeds = [POOL_SEED],
        bump
    )]
    pub pool: Account<'info, GlobalPackPool>,

    #[account(
        mut,
        address = ADMIN_KEY @ PackError::Unauthorized
    )]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}
