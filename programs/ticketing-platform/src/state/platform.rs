//! Platform account: custodian of every vault

use anchor_lang::prelude::*;

use crate::constants::PLATFORM_SEED;
use crate::error::ErrorCode;

#[account]
pub struct Platform {
    /// Account that initialized the marketplace
    pub authority: Pubkey,
    /// Live listings of both kinds
    pub listings_open: u64,
    /// PDA bump
    pub bump: u8,
}

impl Platform {
    pub const INIT_SPACE: usize = 32 + 8 + 1;

    /// Client-side helper: derives the account address for instruction building.
    pub fn address() -> (Pubkey, u8) {
        Pubkey::find_program_address(&[PLATFORM_SEED], &crate::ID)
    }

    pub fn listing_opened(&mut self) -> Result<()> {
        self.listings_open = self
            .listings_open
            .checked_add(1)
            .ok_or(error!(ErrorCode::ArithmeticOverflow))?;
        Ok(())
    }

    pub fn listing_closed(&mut self) -> Result<()> {
        self.listings_open = self
            .listings_open
            .checked_sub(1)
            .ok_or(error!(ErrorCode::ArithmeticOverflow))?;
        Ok(())
    }
}
