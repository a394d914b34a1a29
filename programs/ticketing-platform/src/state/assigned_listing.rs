//! Listing of a unique ticket (zero decimals, supply 1) held in escrow

use anchor_lang::prelude::*;

use crate::constants::LISTING_SEED;
use crate::error::ErrorCode;
use crate::state::require_positive_price;

/// One per mint. The account exists only while the ticket is for sale.
#[account]
pub struct AssignedListing {
    /// The listed ticket
    pub mint: Pubkey,
    /// Seller, receives the payment and the rent deposit back
    pub owner: Pubkey,
    /// Ask price in lamports
    pub unitary_price: u64,
    /// PDA bump
    pub bump: u8,
}

impl AssignedListing {
    pub const INIT_SPACE: usize = 32 + 32 + 8 + 1;

    /// Client-side helper: derives the account address for instruction building.
    pub fn address(mint: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[LISTING_SEED, mint.as_ref()], &crate::ID)
    }

    /// Lamports locked in the listing account while it is open.
    pub fn rent_deposit(rent: &Rent) -> u64 {
        rent.minimum_balance(Self::DISCRIMINATOR.len() + Self::INIT_SPACE)
    }

    /// Replaces the ask price, returning the previous one.
    pub fn reprice(&mut self, new_price: u64) -> Result<u64> {
        require_positive_price(new_price)?;
        let old_price = self.unitary_price;
        self.unitary_price = new_price;
        Ok(old_price)
    }

    /// Checks an offered payment against the ask price and returns the
    /// change owed back to the buyer.
    pub fn settle(&self, payment: u64) -> Result<u64> {
        payment
            .checked_sub(self.unitary_price)
            .ok_or(error!(ErrorCode::InsufficientPayment))
    }
}
