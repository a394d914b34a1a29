pub mod assigned_listing;
pub mod free_access_listing;
pub mod platform;
pub mod ticket_info;

pub use assigned_listing::*;
pub use free_access_listing::*;
pub use platform::*;
pub use ticket_info::*;

use anchor_lang::prelude::*;

use crate::error::ErrorCode;

/// Listing prices are quoted in lamports and can never be zero.
pub fn require_positive_price(price: u64) -> Result<()> {
    require!(price > 0, ErrorCode::InvalidPrice);
    Ok(())
}

pub fn require_positive_quantity(quantity: u64) -> Result<()> {
    require!(quantity > 0, ErrorCode::InvalidQuantity);
    Ok(())
}
