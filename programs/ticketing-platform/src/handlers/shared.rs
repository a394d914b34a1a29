//! CPI helpers shared by the listing handlers

use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::constants::PLATFORM_SEED;
use crate::state::Platform;

/// Moves tickets from a seller-controlled token account into the vault.
pub fn deposit_into_vault<'info>(
    from: &InterfaceAccount<'info, TokenAccount>,
    vault: &InterfaceAccount<'info, TokenAccount>,
    authority: &Signer<'info>,
    mint: &InterfaceAccount<'info, Mint>,
    token_program: &Interface<'info, TokenInterface>,
    amount: u64,
) -> Result<()> {
    let accounts = TransferChecked {
        from: from.to_account_info(),
        mint: mint.to_account_info(),
        to: vault.to_account_info(),
        authority: authority.to_account_info(),
    };
    let cpi_context = CpiContext::new(token_program.to_account_info(), accounts);
    transfer_checked(cpi_context, amount, mint.decimals)
}

/// Moves tickets out of the vault, signed by the platform PDA.
pub fn release_from_vault<'info>(
    vault: &InterfaceAccount<'info, TokenAccount>,
    to: &InterfaceAccount<'info, TokenAccount>,
    platform: &Account<'info, Platform>,
    mint: &InterfaceAccount<'info, Mint>,
    token_program: &Interface<'info, TokenInterface>,
    amount: u64,
) -> Result<()> {
    let bump = [platform.bump];
    let platform_seeds: &[&[u8]] = &[PLATFORM_SEED, &bump];
    let signer_seeds = &[platform_seeds];

    let accounts = TransferChecked {
        from: vault.to_account_info(),
        mint: mint.to_account_info(),
        to: to.to_account_info(),
        authority: platform.to_account_info(),
    };
    let cpi_context =
        CpiContext::new_with_signer(token_program.to_account_info(), accounts, signer_seeds);
    transfer_checked(cpi_context, amount, mint.decimals)
}

/// Pays a seller in lamports straight from the buyer's wallet.
pub fn pay_seller<'info>(
    buyer: &Signer<'info>,
    seller: &SystemAccount<'info>,
    system_program: &Program<'info, System>,
    lamports: u64,
) -> Result<()> {
    let accounts = Transfer {
        from: buyer.to_account_info(),
        to: seller.to_account_info(),
    };
    transfer(
        CpiContext::new(system_program.to_account_info(), accounts),
        lamports,
    )
}
