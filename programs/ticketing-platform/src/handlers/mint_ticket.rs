//! Minting of unique tickets

use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_2022::spl_token_2022::instruction::AuthorityType;
use anchor_spl::token_interface::{
    mint_to, set_authority, Mint, MintTo, SetAuthority, TokenAccount, TokenInterface,
};

use crate::constants::{TICKET_SEED, UNIQUE_TICKET_DECIMALS, UNIQUE_TICKET_SUPPLY};
use crate::events::TicketMinted;
use crate::state::TicketInfo;

/// The mint is a fresh keypair signed by the client.
#[derive(Accounts)]
pub struct MintTicketAccountConstraints<'info> {
    #[account(mut)]
    pub issuer: Signer<'info>,
    #[account(
        init,
        payer = issuer,
        mint::decimals = UNIQUE_TICKET_DECIMALS,
        mint::authority = issuer,
        mint::freeze_authority = issuer,
        mint::token_program = token_program
    )]
    pub mint: InterfaceAccount<'info, Mint>,
    #[account(
        init,
        payer = issuer,
        associated_token::mint = mint,
        associated_token::authority = issuer,
        associated_token::token_program = token_program
    )]
    pub issuer_token_account: InterfaceAccount<'info, TokenAccount>,
    #[account(
        init,
        payer = issuer,
        space = TicketInfo::DISCRIMINATOR.len() + TicketInfo::INIT_SPACE,
        seeds = [TICKET_SEED, mint.key().as_ref()],
        bump
    )]
    pub ticket_info: Account<'info, TicketInfo>,
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Mints a single token and drops the mint authority so the supply stays
/// at one. Returns the new mint.
pub fn mint_ticket(
    mut context: Context<MintTicketAccountConstraints>,
    name: String,
    ticket_link: String,
) -> Result<Pubkey> {
    TicketInfo::validate(&name, &ticket_link)?;
    let accounts = &mut context.accounts;

    let mint_accounts = MintTo {
        mint: accounts.mint.to_account_info(),
        to: accounts.issuer_token_account.to_account_info(),
        authority: accounts.issuer.to_account_info(),
    };
    mint_to(
        CpiContext::new(accounts.token_program.to_account_info(), mint_accounts),
        UNIQUE_TICKET_SUPPLY,
    )?;

    let authority_accounts = SetAuthority {
        current_authority: accounts.issuer.to_account_info(),
        account_or_mint: accounts.mint.to_account_info(),
    };
    set_authority(
        CpiContext::new(accounts.token_program.to_account_info(), authority_accounts),
        AuthorityType::MintTokens,
        None,
    )?;

    let ticket_info = &mut accounts.ticket_info;
    ticket_info.issuer = accounts.issuer.key();
    ticket_info.mint = accounts.mint.key();
    ticket_info.name = name;
    ticket_info.ticket_link = ticket_link;
    ticket_info.bump = context.bumps.ticket_info;

    msg!("Minted ticket {} for {}", ticket_info.mint, ticket_info.issuer);
    emit!(TicketMinted {
        mint: ticket_info.mint,
        issuer: ticket_info.issuer,
        name: ticket_info.name.clone(),
        ticket_link: ticket_info.ticket_link.clone(),
    });
    Ok(ticket_info.mint)
}
