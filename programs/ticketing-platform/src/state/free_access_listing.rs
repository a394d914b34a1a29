//! Batch listing of fungible (free-access) tickets

use anchor_lang::prelude::*;

use crate::constants::FREE_LISTING_SEED;
use crate::error::ErrorCode;
use crate::state::{require_positive_price, require_positive_quantity};

/// Keyed by (mint, owner, nonce) so a seller can run several batches of
/// the same ticket at different prices.
#[account]
pub struct FreeAccessListing {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub nonce: u64,
    /// Tickets still in the vault for this batch, in base units
    pub quantity: u64,
    /// Lamports per base unit
    pub unitary_price: u64,
    pub bump: u8,
}

impl FreeAccessListing {
    pub const INIT_SPACE: usize = 32 + 32 + 8 + 8 + 8 + 1;

    /// Client-side helper: derives the account address for instruction building.
    pub fn address(mint: &Pubkey, owner: &Pubkey, nonce: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[
                FREE_LISTING_SEED,
                mint.as_ref(),
                owner.as_ref(),
                &nonce.to_le_bytes(),
            ],
            &crate::ID,
        )
    }

    pub fn rent_deposit(rent: &Rent) -> u64 {
        rent.minimum_balance(Self::DISCRIMINATOR.len() + Self::INIT_SPACE)
    }

    pub fn reprice(&mut self, new_price: u64) -> Result<u64> {
        require_positive_price(new_price)?;
        let old_price = self.unitary_price;
        self.unitary_price = new_price;
        Ok(old_price)
    }

    /// Total price for `quantity` tickets of this batch.
    pub fn amount_due(&self, quantity: u64) -> Result<u64> {
        quantity
            .checked_mul(self.unitary_price)
            .ok_or(error!(ErrorCode::ArithmeticOverflow))
    }

    /// Purchases must pay the exact amount.
    pub fn check_payment(&self, quantity: u64, payment: u64) -> Result<()> {
        let due = self.amount_due(quantity)?;
        require_eq!(payment, due, ErrorCode::IncorrectPayment);
        Ok(())
    }

    /// Adds inventory, returning the new quantity.
    pub fn restock(&mut self, quantity: u64) -> Result<u64> {
        require_positive_quantity(quantity)?;
        self.quantity = self
            .quantity
            .checked_add(quantity)
            .ok_or(error!(ErrorCode::ArithmeticOverflow))?;
        Ok(self.quantity)
    }

    /// Removes inventory, returning what is left.
    pub fn take(&mut self, quantity: u64) -> Result<u64> {
        require_positive_quantity(quantity)?;
        require!(quantity <= self.quantity, ErrorCode::InsufficientInventory);
        self.quantity -= quantity;
        Ok(self.quantity)
    }

    pub fn is_exhausted(&self) -> bool {
        self.quantity == 0
    }
}
