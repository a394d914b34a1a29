#![allow(unexpected_cfgs)]
// See https://solana.stackexchange.com/questions/17777/unexpected-cfg-condition-value-solana)

pub mod constants;
pub mod error;
pub mod events;
pub mod handlers;
pub mod state;

use anchor_lang::prelude::*;
pub use handlers::*;

declare_id!("7pHx3Jt9ZDBh5g4eN1qW2cVYmS8uKLr6aTfoQdXbC9vE");

#[program]
pub mod ticketing_platform {
    use super::*;

    /// Create the platform account that owns every vault.
    pub fn initialize(context: Context<InitializeAccountConstraints>) -> Result<()> {
        handlers::platform::initialize(context)
    }

    /// Lamports held by the platform account.
    pub fn balance(context: Context<BalanceAccountConstraints>) -> Result<u64> {
        handlers::platform::balance(context)
    }

    /// Open a vault so the platform can hold tickets of a mint.
    pub fn opt_in_to_asset(context: Context<OptInToAssetAccountConstraints>) -> Result<()> {
        handlers::platform::opt_in_to_asset(context)
    }

    pub fn is_opted_in_to(context: Context<IsOptedInToAccountConstraints>) -> Result<bool> {
        handlers::platform::is_opted_in_to(context)
    }

    /// Mint a unique ticket to the caller.
    pub fn mint_ticket(
        context: Context<MintTicketAccountConstraints>,
        name: String,
        ticket_link: String,
    ) -> Result<Pubkey> {
        handlers::mint_ticket::mint_ticket(context, name, ticket_link)
    }

    /// List a unique ticket for sale.
    pub fn new_listing(context: Context<NewListingAccountConstraints>, unitary_price: u64) -> Result<()> {
        handlers::assigned_listing::new_listing(context, unitary_price)
    }

    pub fn change_price(context: Context<ChangePriceAccountConstraints>, new_price: u64) -> Result<()> {
        handlers::assigned_listing::change_price(context, new_price)
    }

    /// Buy a listed unique ticket.
    pub fn buy(context: Context<BuyAccountConstraints>, payment: u64) -> Result<()> {
        handlers::assigned_listing::buy(context, payment)
    }

    /// Take a unique ticket off the market.
    pub fn withdraw_asset(context: Context<WithdrawAssetAccountConstraints>) -> Result<()> {
        handlers::assigned_listing::withdraw_asset(context)
    }

    /// List a batch of free-access tickets.
    pub fn new_listing_free_access(
        context: Context<NewListingFreeAccessAccountConstraints>,
        quantity: u64,
        unitary_price: u64,
        nonce: u64,
    ) -> Result<()> {
        handlers::free_access_listing::new_listing_free_access(context, quantity, unitary_price, nonce)
    }

    pub fn change_price_free_access(
        context: Context<ChangePriceFreeAccessAccountConstraints>,
        nonce: u64,
        new_price: u64,
    ) -> Result<()> {
        handlers::free_access_listing::change_price_free_access(context, nonce, new_price)
    }

    /// Add tickets to an existing free-access batch.
    pub fn deposit(context: Context<DepositAccountConstraints>, nonce: u64, quantity: u64) -> Result<()> {
        handlers::free_access_listing::deposit(context, nonce, quantity)
    }

    pub fn buy_free_access_ticket(
        context: Context<BuyFreeAccessTicketAccountConstraints>,
        nonce: u64,
        quantity: u64,
        payment: u64,
    ) -> Result<()> {
        handlers::free_access_listing::buy_free_access_ticket(context, nonce, quantity, payment)
    }

    pub fn withdraw_free_access_tickets(
        context: Context<WithdrawFreeAccessTicketsAccountConstraints>,
        nonce: u64,
        quantity: u64,
    ) -> Result<()> {
        handlers::free_access_listing::withdraw_free_access_tickets(context, nonce, quantity)
    }
}
