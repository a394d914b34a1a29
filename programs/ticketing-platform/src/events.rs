//! Events emitted for off-chain indexers following the marketplace.

use anchor_lang::prelude::*;

#[event]
pub struct PlatformInitialized {
    pub platform: Pubkey,
    pub authority: Pubkey,
}

#[event]
pub struct AssetOptedIn {
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub payer: Pubkey,
}

#[event]
pub struct TicketMinted {
    pub mint: Pubkey,
    pub issuer: Pubkey,
    pub name: String,
    pub ticket_link: String,
}

#[event]
pub struct ListingCreated {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub unitary_price: u64,
    /// Rent deposit locked in the listing account, refunded on close
    pub deposit: u64,
}

#[event]
pub struct ListingPriceChanged {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub old_price: u64,
    pub new_price: u64,
}

#[event]
pub struct TicketPurchased {
    pub mint: Pubkey,
    pub seller: Pubkey,
    pub buyer: Pubkey,
    pub price: u64,
    /// Part of the offered payment not charged to the buyer
    pub change: u64,
}

#[event]
pub struct ListingWithdrawn {
    pub mint: Pubkey,
    pub owner: Pubkey,
}

#[event]
pub struct FreeAccessListingCreated {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub nonce: u64,
    pub quantity: u64,
    pub unitary_price: u64,
    pub deposit: u64,
}

#[event]
pub struct FreeAccessPriceChanged {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub nonce: u64,
    pub old_price: u64,
    pub new_price: u64,
}

#[event]
pub struct FreeAccessDeposited {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub nonce: u64,
    pub added: u64,
    pub quantity: u64,
}

#[event]
pub struct FreeAccessPurchased {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub buyer: Pubkey,
    pub nonce: u64,
    pub quantity: u64,
    pub paid: u64,
    pub remaining: u64,
}

#[event]
pub struct FreeAccessWithdrawn {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub nonce: u64,
    pub quantity: u64,
    pub remaining: u64,
}
