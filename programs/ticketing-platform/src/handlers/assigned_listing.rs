//! Assigned (unique) ticket listing handlers

use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::{LISTING_SEED, PLATFORM_SEED, UNIQUE_TICKET_DECIMALS, UNIQUE_TICKET_SUPPLY};
use crate::error::ErrorCode;
use crate::events::{ListingCreated, ListingPriceChanged, ListingWithdrawn, TicketPurchased};
use crate::handlers::shared::{deposit_into_vault, pay_seller, release_from_vault};
use crate::state::{require_positive_price, AssignedListing, Platform};

#[derive(Accounts)]
pub struct NewListingAccountConstraints<'info> {
    #[account(mut)]
    pub seller: Signer<'info>,
    #[account(mut, seeds = [PLATFORM_SEED], bump = platform.bump)]
    pub platform: Account<'info, Platform>,
    #[account(
        mint::token_program = token_program,
        constraint = mint.decimals == UNIQUE_TICKET_DECIMALS @ ErrorCode::AssetNotUnique,
        constraint = mint.supply == UNIQUE_TICKET_SUPPLY @ ErrorCode::AssetNotUnique
    )]
    pub mint: InterfaceAccount<'info, Mint>,
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = seller,
        associated_token::token_program = token_program
    )]
    pub seller_token_account: InterfaceAccount<'info, TokenAccount>,
    /// Must already exist: the platform has to be opted in to the mint
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = platform,
        associated_token::token_program = token_program
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,
    #[account(
        init,
        payer = seller,
        space = AssignedListing::DISCRIMINATOR.len() + AssignedListing::INIT_SPACE,
        seeds = [LISTING_SEED, mint.key().as_ref()],
        bump
    )]
    pub listing: Account<'info, AssignedListing>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn new_listing(mut context: Context<NewListingAccountConstraints>, unitary_price: u64) -> Result<()> {
    require_positive_price(unitary_price)?;
    let accounts = &mut context.accounts;

    deposit_into_vault(
        &accounts.seller_token_account,
        &accounts.vault,
        &accounts.seller,
        &accounts.mint,
        &accounts.token_program,
        UNIQUE_TICKET_SUPPLY,
    )?;

    let listing = &mut accounts.listing;
    listing.mint = accounts.mint.key();
    listing.owner = accounts.seller.key();
    listing.unitary_price = unitary_price;
    listing.bump = context.bumps.listing;
    accounts.platform.listing_opened()?;

    let deposit = AssignedListing::rent_deposit(&Rent::get()?);
    msg!(
        "Listed {} at {} lamports (deposit {})",
        listing.mint,
        unitary_price,
        deposit
    );
    emit!(ListingCreated {
        mint: listing.mint,
        owner: listing.owner,
        unitary_price,
        deposit,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ChangePriceAccountConstraints<'info> {
    pub owner: Signer<'info>,
    pub mint: InterfaceAccount<'info, Mint>,
    #[account(
        mut,
        seeds = [LISTING_SEED, mint.key().as_ref()],
        bump = listing.bump,
        has_one = owner @ ErrorCode::NotListingOwner
    )]
    pub listing: Account<'info, AssignedListing>,
}

pub fn change_price(context: Context<ChangePriceAccountConstraints>, new_price: u64) -> Result<()> {
    let listing = &mut context.accounts.listing;
    let old_price = listing.reprice(new_price)?;

    msg!("Repriced {} from {} to {}", listing.mint, old_price, new_price);
    emit!(ListingPriceChanged {
        mint: listing.mint,
        owner: listing.owner,
        old_price,
        new_price,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct BuyAccountConstraints<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,
    #[account(mint::token_program = token_program)]
    pub mint: InterfaceAccount<'info, Mint>,
    /// Closed on purchase, the rent deposit goes back to the seller
    #[account(
        mut,
        seeds = [LISTING_SEED, mint.key().as_ref()],
        bump = listing.bump,
        has_one = mint,
        close = seller
    )]
    pub listing: Account<'info, AssignedListing>,
    #[account(mut, address = listing.owner @ ErrorCode::PaymentReceiverNotOwner)]
    pub seller: SystemAccount<'info>,
    #[account(mut, seeds = [PLATFORM_SEED], bump = platform.bump)]
    pub platform: Account<'info, Platform>,
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = platform,
        associated_token::token_program = token_program
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,
    #[account(
        init_if_needed,
        payer = buyer,
        associated_token::mint = mint,
        associated_token::authority = buyer,
        associated_token::token_program = token_program
    )]
    pub buyer_token_account: InterfaceAccount<'info, TokenAccount>,
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// `payment` is the most the buyer is willing to pay. Only the ask price is
/// charged; the difference is reported as change.
pub fn buy(mut context: Context<BuyAccountConstraints>, payment: u64) -> Result<()> {
    let accounts = &mut context.accounts;
    let change = accounts.listing.settle(payment)?;
    let price = accounts.listing.unitary_price;

    pay_seller(&accounts.buyer, &accounts.seller, &accounts.system_program, price)?;
    release_from_vault(
        &accounts.vault,
        &accounts.buyer_token_account,
        &accounts.platform,
        &accounts.mint,
        &accounts.token_program,
        UNIQUE_TICKET_SUPPLY,
    )?;
    accounts.platform.listing_closed()?;

    msg!(
        "Sold {} to {} for {} lamports (change {})",
        accounts.mint.key(),
        accounts.buyer.key(),
        price,
        change
    );
    emit!(TicketPurchased {
        mint: accounts.mint.key(),
        seller: accounts.seller.key(),
        buyer: accounts.buyer.key(),
        price,
        change,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawAssetAccountConstraints<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,
    #[account(mint::token_program = token_program)]
    pub mint: InterfaceAccount<'info, Mint>,
    #[account(
        mut,
        seeds = [LISTING_SEED, mint.key().as_ref()],
        bump = listing.bump,
        has_one = owner @ ErrorCode::NotListingOwner,
        close = owner
    )]
    pub listing: Account<'info, AssignedListing>,
    #[account(mut, seeds = [PLATFORM_SEED], bump = platform.bump)]
    pub platform: Account<'info, Platform>,
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = platform,
        associated_token::token_program = token_program
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,
    #[account(
        init_if_needed,
        payer = owner,
        associated_token::mint = mint,
        associated_token::authority = owner,
        associated_token::token_program = token_program
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn withdraw_asset(mut context: Context<WithdrawAssetAccountConstraints>) -> Result<()> {
    let accounts = &mut context.accounts;

    release_from_vault(
        &accounts.vault,
        &accounts.owner_token_account,
        &accounts.platform,
        &accounts.mint,
        &accounts.token_program,
        UNIQUE_TICKET_SUPPLY,
    )?;
    accounts.platform.listing_closed()?;

    msg!("Withdrew {} back to {}", accounts.mint.key(), accounts.owner.key());
    emit!(ListingWithdrawn {
        mint: accounts.mint.key(),
        owner: accounts.owner.key(),
    });
    Ok(())
}
