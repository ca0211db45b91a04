//! Settlement plans.
//!
//! Instructions that move tokens build a plan from the balances they were
//! handed before issuing any CPI. A plan only exists if every precondition
//! holds, so a failing instruction returns before the first transfer and the
//! transaction leaves nothing behind. The plan also carries the balances the
//! accounts must end with, which the handlers log and emit.

use anchor_lang::prelude::*;

use crate::constants::PACK_SIZE;
use crate::error::PackError;

pub fn checked_debit(balance: u64, amount: u64) -> Result<u64> {
    balance
        .checked_sub(amount)
        .ok_or_else(|| error!(PackError::InsufficientBalance))
}

pub fn checked_credit(balance: u64, amount: u64) -> Result<u64> {
    balance
        .checked_add(amount)
        .ok_or_else(|| error!(PackError::Overflow))
}

/// A single holding-to-holding move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransferPlan {
    pub amount: u64,
    pub source_after: u64,
    pub destination_after: u64,
}

impl TransferPlan {
    pub fn new(amount: u64, source_balance: u64, destination_balance: u64) -> Result<Self> {
        require!(amount > 0, PackError::InvalidAmount);
        Ok(Self {
            amount,
            source_after: checked_debit(source_balance, amount)?,
            destination_after: checked_credit(destination_balance, amount)?,
        })
    }
}

/// Mint `total_supply` to the admin, then move `vault_allocation` of it into
/// the new vault.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProvisionPlan {
    pub total_supply: u64,
    pub vault_allocation: u64,
    pub admin_after: u64,
}

impl ProvisionPlan {
    /// `admin_balance` is what the admin's holding account holds before the
    /// mint; zero for a freshly created mint.
    pub fn new(total_supply: u64, vault_allocation: u64, admin_balance: u64) -> Result<Self> {
        require!(total_supply > 0, PackError::InvalidAmount);
        require!(
            vault_allocation <= total_supply,
            PackError::AllocationExceedsSupply
        );
        let minted = checked_credit(admin_balance, total_supply)?;
        Ok(Self {
            total_supply,
            vault_allocation,
            admin_after: checked_debit(minted, vault_allocation)?,
        })
    }
}

/// Equal withdrawal from each of a pack's four holdings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimPlan {
    pub amount_per_kol: u64,
    pub pack_after: [u64; PACK_SIZE],
    pub claimant_after: [u64; PACK_SIZE],
}

impl ClaimPlan {
    /// Fails unless every pack holding covers `amount_per_kol`. All four
    /// are checked before anything is returned, so no partial claim exists.
    pub fn new(
        amount_per_kol: u64,
        pack_balances: [u64; PACK_SIZE],
        claimant_balances: [u64; PACK_SIZE],
    ) -> Result<Self> {
        require!(amount_per_kol > 0, PackError::InvalidAmount);

        let mut pack_after = [0u64; PACK_SIZE];
        let mut claimant_after = [0u64; PACK_SIZE];
        for i in 0..PACK_SIZE {
            pack_after[i] = checked_debit(pack_balances[i], amount_per_kol)?;
            claimant_after[i] = checked_credit(claimant_balances[i], amount_per_kol)?;
        }

        Ok(Self {
            amount_per_kol,
            pack_after,
            claimant_after,
        })
    }

    pub fn is_drained(&self) -> bool {
        self.pack_after.iter().all(|balance| *balance == 0)
    }
}
