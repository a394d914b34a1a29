//! Platform setup and vault (asset opt-in) handlers

use anchor_lang::prelude::*;
use anchor_spl::associated_token::{get_associated_token_address_with_program_id, AssociatedToken};
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::PLATFORM_SEED;
use crate::error::ErrorCode;
use crate::events::{AssetOptedIn, PlatformInitialized};
use crate::state::Platform;

#[derive(Accounts)]
pub struct InitializeAccountConstraints<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,
    #[account(
        init,
        payer = authority,
        space = Platform::DISCRIMINATOR.len() + Platform::INIT_SPACE,
        seeds = [PLATFORM_SEED],
        bump
    )]
    pub platform: Account<'info, Platform>,
    pub system_program: Program<'info, System>,
}

pub fn initialize(context: Context<InitializeAccountConstraints>) -> Result<()> {
    let platform = &mut context.accounts.platform;
    platform.authority = context.accounts.authority.key();
    platform.listings_open = 0;
    platform.bump = context.bumps.platform;

    msg!("Platform initialized by {}", platform.authority);
    emit!(PlatformInitialized {
        platform: platform.key(),
        authority: platform.authority,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct BalanceAccountConstraints<'info> {
    #[account(seeds = [PLATFORM_SEED], bump = platform.bump)]
    pub platform: Account<'info, Platform>,
}

pub fn balance(context: Context<BalanceAccountConstraints>) -> Result<u64> {
    Ok(context.accounts.platform.to_account_info().lamports())
}

/// Creating the vault is what lets the platform hold a given ticket mint.
/// `init` rejects a second opt-in for the same mint.
#[derive(Accounts)]
pub struct OptInToAssetAccountConstraints<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    #[account(seeds = [PLATFORM_SEED], bump = platform.bump)]
    pub platform: Account<'info, Platform>,
    #[account(mint::token_program = token_program)]
    pub mint: InterfaceAccount<'info, Mint>,
    #[account(
        init,
        payer = payer,
        associated_token::mint = mint,
        associated_token::authority = platform,
        associated_token::token_program = token_program
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn opt_in_to_asset(context: Context<OptInToAssetAccountConstraints>) -> Result<()> {
    let accounts = &context.accounts;
    msg!(
        "Platform opted in to {} (vault {})",
        accounts.mint.key(),
        accounts.vault.key()
    );
    emit!(AssetOptedIn {
        mint: accounts.mint.key(),
        vault: accounts.vault.key(),
        payer: accounts.payer.key(),
    });
    Ok(())
}

#[derive(Accounts)]
pub struct IsOptedInToAccountConstraints<'info> {
    #[account(seeds = [PLATFORM_SEED], bump = platform.bump)]
    pub platform: Account<'info, Platform>,
    #[account(mint::token_program = token_program)]
    pub mint: InterfaceAccount<'info, Mint>,
    /// CHECK: may not exist yet; its address is checked in the handler
    pub vault: UncheckedAccount<'info>,
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn is_opted_in_to(context: Context<IsOptedInToAccountConstraints>) -> Result<bool> {
    let accounts = &context.accounts;
    let expected = get_associated_token_address_with_program_id(
        &accounts.platform.key(),
        &accounts.mint.key(),
        &accounts.token_program.key(),
    );
    require_keys_eq!(accounts.vault.key(), expected, ErrorCode::InvalidVault);

    let vault = accounts.vault.to_account_info();
    Ok(*vault.owner == accounts.token_program.key() && !vault.data_is_empty())
}
