use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::error::EscrowError;
use crate::events::ListingCreated;
use crate::helpers::take_title_custody;
use crate::state::*;

#[derive(Accounts)]
pub struct List<'info> {
    #[account(mut)]
    pub seller: Signer<'info>,

    #[account(
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
    )]
    pub ledger: Account<'info, LedgerConfig>,

    /// CHECK: The buyer is just stored as a pubkey reference; no signing required at listing.
    pub buyer: UncheckedAccount<'info>,

    pub title_mint: InterfaceAccount<'info, Mint>,

    // init_if_needed so an existing record reports AlreadyListed/ListingClosed
    // instead of failing allocation.
    #[account(
        init_if_needed,
        payer = seller,
        space = 8 + Listing::INIT_SPACE,
        seeds = [LISTING_SEED, title_mint.key().as_ref()],
        bump,
    )]
    pub listing: Account<'info, Listing>,

    #[account(
        init_if_needed,
        payer = seller,
        associated_token::mint = title_mint,
        associated_token::authority = ledger,
        associated_token::token_program = token_program,
    )]
    pub title_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = title_mint,
        token::token_program = token_program,
    )]
    pub seller_title_account: InterfaceAccount<'info, TokenAccount>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<List>, purchase_price: u64, escrow_amount: u64) -> Result<()> {
    let seller = ctx.accounts.seller.key();
    ctx.accounts.ledger.require_seller(&seller)?;
    ctx.accounts.listing.require_listable()?;

    let buyer = ctx.accounts.buyer.key();
    ctx.accounts.ledger.validate_buyer(&buyer)?;

    let title_mint = &ctx.accounts.title_mint;
    require!(
        *title_mint.to_account_info().owner == anchor_spl::token::ID,
        EscrowError::ExtendedMintNotSupported
    );
    validate_title_mint(title_mint.decimals, title_mint.supply)?;

    let seller_title = &ctx.accounts.seller_title_account;
    require_title_holder(&seller_title.owner, seller_title.amount, &seller)?;

    let clock = Clock::get()?;
    let listing = &mut ctx.accounts.listing;
    listing.open(
        title_mint.key(),
        buyer,
        purchase_price,
        escrow_amount,
        clock.unix_timestamp,
        ctx.bumps.listing,
    )?;

    take_title_custody(
        &ctx.accounts.seller_title_account,
        &ctx.accounts.title_mint,
        &ctx.accounts.title_vault,
        ctx.accounts.seller.to_account_info(),
        &ctx.accounts.token_program,
    )?;

    msg!(
        "Listed title {} to buyer {} at {}",
        listing.title_mint,
        listing.buyer,
        listing.purchase_price
    );

    emit!(ListingCreated {
        title_mint: listing.title_mint,
        seller,
        buyer,
        purchase_price,
        escrow_amount,
        listed_at: listing.listed_at,
    });

    Ok(())
}
