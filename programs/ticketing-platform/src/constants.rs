use anchor_lang::prelude::*;

/// Seed for the platform PDA, authority of every vault.
#[constant]
pub const PLATFORM_SEED: &[u8] = b"platform";

/// Seed for an assigned-ticket listing: `[LISTING_SEED, mint]`.
#[constant]
pub const LISTING_SEED: &[u8] = b"listing";

/// Seed for a free-access listing: `[FREE_LISTING_SEED, mint, owner, nonce]`.
#[constant]
pub const FREE_LISTING_SEED: &[u8] = b"free_listing";

/// Seed for the metadata record written when a ticket is minted.
#[constant]
pub const TICKET_SEED: &[u8] = b"ticket";

/// Unique tickets are indivisible.
#[constant]
pub const UNIQUE_TICKET_DECIMALS: u8 = 0;

/// Unique tickets have a total supply of exactly one token.
#[constant]
pub const UNIQUE_TICKET_SUPPLY: u64 = 1;

/// Upper bound on `TicketInfo::name`, in bytes.
#[constant]
pub const MAX_TICKET_NAME_LEN: u32 = 32;

/// Upper bound on `TicketInfo::ticket_link`, in bytes.
#[constant]
pub const MAX_TICKET_LINK_LEN: u32 = 200;
