use anchor_lang::prelude::*;

#[event]
pub struct PoolInitialized {
    pub pool: Pubkey,
    pub authority: Pubkey,
    pub total_kols: u8,
}

#[event]
pub struct PoolDeposit {
    pub pool: Pubkey,
    pub depositor: Pubkey,
    pub amount: u64,
    pub pool_lamports: u64,
}

#[event]
pub struct VaultInitialized {
    pub vault: Pubkey,
    pub token_vault: Pubkey,
    pub ticker: String,
    pub mint: Pubkey,
}

#[event]
pub struct VaultFunded {
    pub vault: Pubkey,
    pub ticker: String,
    pub amount: u64,
    pub vault_balance: u64,
}

#[event]
pub struct VaultProvisioned {
    pub vault: Pubkey,
    pub ticker: String,
    pub mint: Pubkey,
    pub total_supply: u64,
    pub vault_allocation: u64,
    pub admin_balance: u64,
}

#[event]
pub struct PackCreated {
    pub pack: Pubkey,
    pub kol_a: String,
    pub kol_b: String,
    pub kol_c: String,
    pub kol_d: String,
    pub bump: u8,
}

#[event]
pub struct PackFunded {
    pub pack: Pubkey,
    pub ticker: String,
    pub amount: u64,
    pub pack_balance: u64,
    pub vault_balance: u64,
}

#[event]
pub struct PackClaimed {
    pub pack: Pubkey,
    pub claimant: Pubkey,
    pub amount_per_kol: u64,
    /// Pack holding balances after the claim, in pack ticker order.
    pub remaining: [u64; 4],
}
