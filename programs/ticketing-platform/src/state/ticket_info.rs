//! Metadata recorded for tickets minted through the platform

use anchor_lang::prelude::*;

use crate::constants::{MAX_TICKET_LINK_LEN, MAX_TICKET_NAME_LEN, TICKET_SEED};
use crate::error::ErrorCode;

#[account]
pub struct TicketInfo {
    /// Account that minted the ticket
    pub issuer: Pubkey,
    pub mint: Pubkey,
    pub name: String,
    /// Off-chain ticket reference (URL)
    pub ticket_link: String,
    pub bump: u8,
}

impl TicketInfo {
    pub const INIT_SPACE: usize =
        32 + 32 + 4 + MAX_TICKET_NAME_LEN as usize + 4 + MAX_TICKET_LINK_LEN as usize + 1;

    /// Client-side helper: derives the account address for instruction building.
    pub fn address(mint: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[TICKET_SEED, mint.as_ref()], &crate::ID)
    }

    pub fn validate(name: &str, ticket_link: &str) -> Result<()> {
        require!(name.len() <= MAX_TICKET_NAME_LEN as usize, ErrorCode::NameTooLong);
        require!(
            ticket_link.len() <= MAX_TICKET_LINK_LEN as usize,
            ErrorCode::TicketLinkTooLong
        );
        Ok(())
    }
}
