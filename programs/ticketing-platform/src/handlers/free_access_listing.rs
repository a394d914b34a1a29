//! Free-access (fungible) ticket listing handlers

use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::{FREE_LISTING_SEED, PLATFORM_SEED};
use crate::events::{
    FreeAccessDeposited, FreeAccessListingCreated, FreeAccessPriceChanged, FreeAccessPurchased,
    FreeAccessWithdrawn,
};
use crate::handlers::shared::{deposit_into_vault, pay_seller, release_from_vault};
use crate::state::{
    require_positive_price, require_positive_quantity, FreeAccessListing, Platform,
};

#[derive(Accounts)]
#[instruction(quantity: u64, unitary_price: u64, nonce: u64)]
pub struct NewListingFreeAccessAccountConstraints<'info> {
    #[account(mut)]
    pub seller: Signer<'info>,
    #[account(mut, seeds = [PLATFORM_SEED], bump = platform.bump)]
    pub platform: Account<'info, Platform>,
    #[account(mint::token_program = token_program)]
    pub mint: InterfaceAccount<'info, Mint>,
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = seller,
        associated_token::token_program = token_program
    )]
    pub seller_token_account: InterfaceAccount<'info, TokenAccount>,
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
        space = FreeAccessListing::DISCRIMINATOR.len() + FreeAccessListing::INIT_SPACE,
        seeds = [
            FREE_LISTING_SEED,
            mint.key().as_ref(),
            seller.key().as_ref(),
            nonce.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub listing: Account<'info, FreeAccessListing>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn new_listing_free_access(
    mut context: Context<NewListingFreeAccessAccountConstraints>,
    quantity: u64,
    unitary_price: u64,
    nonce: u64,
) -> Result<()> {
    require_positive_price(unitary_price)?;
    require_positive_quantity(quantity)?;
    let accounts = &mut context.accounts;

    deposit_into_vault(
        &accounts.seller_token_account,
        &accounts.vault,
        &accounts.seller,
        &accounts.mint,
        &accounts.token_program,
        quantity,
    )?;

    let listing = &mut accounts.listing;
    listing.mint = accounts.mint.key();
    listing.owner = accounts.seller.key();
    listing.nonce = nonce;
    listing.quantity = quantity;
    listing.unitary_price = unitary_price;
    listing.bump = context.bumps.listing;
    accounts.platform.listing_opened()?;

    let deposit = FreeAccessListing::rent_deposit(&Rent::get()?);
    msg!(
        "Listed {} x {} (nonce {}) at {} lamports each",
        quantity,
        listing.mint,
        nonce,
        unitary_price
    );
    emit!(FreeAccessListingCreated {
        mint: listing.mint,
        owner: listing.owner,
        nonce,
        quantity,
        unitary_price,
        deposit,
    });
    Ok(())
}

/// The seeds include the signer, so only the owner can resolve the listing.
#[derive(Accounts)]
#[instruction(nonce: u64)]
pub struct ChangePriceFreeAccessAccountConstraints<'info> {
    pub owner: Signer<'info>,
    pub mint: InterfaceAccount<'info, Mint>,
    #[account(
        mut,
        seeds = [
            FREE_LISTING_SEED,
            mint.key().as_ref(),
            owner.key().as_ref(),
            nonce.to_le_bytes().as_ref()
        ],
        bump = listing.bump
    )]
    pub listing: Account<'info, FreeAccessListing>,
}

pub fn change_price_free_access(
    context: Context<ChangePriceFreeAccessAccountConstraints>,
    nonce: u64,
    new_price: u64,
) -> Result<()> {
    let listing = &mut context.accounts.listing;
    let old_price = listing.reprice(new_price)?;

    msg!("Repriced {} (nonce {}) from {} to {}", listing.mint, nonce, old_price, new_price);
    emit!(FreeAccessPriceChanged {
        mint: listing.mint,
        owner: listing.owner,
        nonce,
        old_price,
        new_price,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(nonce: u64)]
pub struct DepositAccountConstraints<'info> {
    pub owner: Signer<'info>,
    #[account(seeds = [PLATFORM_SEED], bump = platform.bump)]
    pub platform: Account<'info, Platform>,
    #[account(mint::token_program = token_program)]
    pub mint: InterfaceAccount<'info, Mint>,
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = owner,
        associated_token::token_program = token_program
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = platform,
        associated_token::token_program = token_program
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,
    #[account(
        mut,
        seeds = [
            FREE_LISTING_SEED,
            mint.key().as_ref(),
            owner.key().as_ref(),
            nonce.to_le_bytes().as_ref()
        ],
        bump = listing.bump
    )]
    pub listing: Account<'info, FreeAccessListing>,
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn deposit(mut context: Context<DepositAccountConstraints>, nonce: u64, quantity: u64) -> Result<()> {
    let accounts = &mut context.accounts;
    let new_quantity = accounts.listing.restock(quantity)?;

    deposit_into_vault(
        &accounts.owner_token_account,
        &accounts.vault,
        &accounts.owner,
        &accounts.mint,
        &accounts.token_program,
        quantity,
    )?;

    msg!("Restocked {} (nonce {}) to {}", accounts.mint.key(), nonce, new_quantity);
    emit!(FreeAccessDeposited {
        mint: accounts.mint.key(),
        owner: accounts.owner.key(),
        nonce,
        added: quantity,
        quantity: new_quantity,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(nonce: u64)]
pub struct BuyFreeAccessTicketAccountConstraints<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,
    /// Listing owner, receives the payment
    #[account(mut)]
    pub seller: SystemAccount<'info>,
    #[account(mint::token_program = token_program)]
    pub mint: InterfaceAccount<'info, Mint>,
    #[account(
        mut,
        seeds = [
            FREE_LISTING_SEED,
            mint.key().as_ref(),
            seller.key().as_ref(),
            nonce.to_le_bytes().as_ref()
        ],
        bump = listing.bump
    )]
    pub listing: Account<'info, FreeAccessListing>,
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

/// `payment` must equal `quantity * unitary_price`. The listing is closed
/// once its inventory runs out.
pub fn buy_free_access_ticket(
    mut context: Context<BuyFreeAccessTicketAccountConstraints>,
    nonce: u64,
    quantity: u64,
    payment: u64,
) -> Result<()> {
    let accounts = &mut context.accounts;
    accounts.listing.check_payment(quantity, payment)?;
    let remaining = accounts.listing.take(quantity)?;

    pay_seller(&accounts.buyer, &accounts.seller, &accounts.system_program, payment)?;
    release_from_vault(
        &accounts.vault,
        &accounts.buyer_token_account,
        &accounts.platform,
        &accounts.mint,
        &accounts.token_program,
        quantity,
    )?;

    if accounts.listing.is_exhausted() {
        accounts.listing.close(accounts.seller.to_account_info())?;
        accounts.platform.listing_closed()?;
        msg!("Listing {} (nonce {}) sold out", accounts.mint.key(), nonce);
    }

    emit!(FreeAccessPurchased {
        mint: accounts.mint.key(),
        owner: accounts.seller.key(),
        buyer: accounts.buyer.key(),
        nonce,
        quantity,
        paid: payment,
        remaining,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(nonce: u64)]
pub struct WithdrawFreeAccessTicketsAccountConstraints<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,
    #[account(mint::token_program = token_program)]
    pub mint: InterfaceAccount<'info, Mint>,
    #[account(
        mut,
        seeds = [
            FREE_LISTING_SEED,
            mint.key().as_ref(),
            owner.key().as_ref(),
            nonce.to_le_bytes().as_ref()
        ],
        bump = listing.bump
    )]
    pub listing: Account<'info, FreeAccessListing>,
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

pub fn withdraw_free_access_tickets(
    mut context: Context<WithdrawFreeAccessTicketsAccountConstraints>,
    nonce: u64,
    quantity: u64,
) -> Result<()> {
    let accounts = &mut context.accounts;
    let remaining = accounts.listing.take(quantity)?;

    release_from_vault(
        &accounts.vault,
        &accounts.owner_token_account,
        &accounts.platform,
        &accounts.mint,
        &accounts.token_program,
        quantity,
    )?;

    if accounts.listing.is_exhausted() {
        accounts.listing.close(accounts.owner.to_account_info())?;
        accounts.platform.listing_closed()?;
    }

    msg!(
        "Withdrew {} x {} (nonce {}), {} left",
        quantity,
        accounts.mint.key(),
        nonce,
        remaining
    );
    emit!(FreeAccessWithdrawn {
        mint: accounts.mint.key(),
        owner: accounts.owner.key(),
        nonce,
        quantity,
        remaining,
    });
    Ok(())
}
