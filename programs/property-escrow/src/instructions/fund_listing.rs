use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::error::EscrowError;
use crate::events::ListingFunded;
use crate::helpers::transfer_to_vault;
use crate::state::*;

/// Funding-party top-up toward a listing's purchase price.
#[derive(Accounts)]
pub struct FundListing<'info> {
    pub funding_party: Signer<'info>,

    #[account(
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
    )]
    pub ledger: Account<'info, LedgerConfig>,

    #[account(
        mut,
        seeds = [LISTING_SEED, listing.title_mint.as_ref()],
        bump = listing.bump,
    )]
    pub listing: Account<'info, Listing>,

    #[account(constraint = payment_mint.key() == ledger.payment_mint @ EscrowError::MintMismatch)]
    pub payment_mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        associated_token::mint = payment_mint,
        associated_token::authority = ledger,
        associated_token::token_program = token_program,
    )]
    pub treasury: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        constraint = funding_party_payment_account.owner == funding_party.key() @ EscrowError::OwnerMismatch,
        token::mint = payment_mint,
        token::token_program = token_program,
    )]
    pub funding_party_payment_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handler(ctx: Context<FundListing>, amount: u64) -> Result<()> {
    let funding_party = ctx.accounts.funding_party.key();
    ctx.accounts.ledger.require_funding_party(&funding_party)?;

    let listing = &mut ctx.accounts.listing;
    let funded_amount = listing.record_funding(amount)?;
    require!(
        ctx.accounts.funding_party_payment_account.amount >= amount,
        EscrowError::InsufficientBalance
    );

    transfer_to_vault(
        &ctx.accounts.funding_party_payment_account, &ctx.accounts.payment_mint,
        &ctx.accounts.treasury,
        ctx.accounts.funding_party.to_account_info(), &ctx.accounts.token_program,
        amount, ctx.accounts.payment_mint.decimals,
    )?;

    emit!(ListingFunded {
        title_mint: listing.title_mint,
        funding_party,
        amount,
        funded_amount,
    });

    Ok(())
}
