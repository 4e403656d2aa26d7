use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::error::EscrowError;
use crate::events::SaleFinalized;
use crate::helpers::{ledger_seeds, release_title, transfer_from_vault};
use crate::state::*;

#[derive(Accounts)]
pub struct FinalizeSale<'info> {
    #[account(mut)]
    pub seller: Signer<'info>,

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

    /// CHECK: Only used as the authority of the buyer's title account.
    #[account(constraint = buyer.key() == listing.buyer @ EscrowError::OwnerMismatch)]
    pub buyer: UncheckedAccount<'info>,

    #[account(constraint = title_mint.key() == listing.title_mint @ EscrowError::MintMismatch)]
    pub title_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = title_mint,
        associated_token::authority = ledger,
        associated_token::token_program = token_program,
    )]
    pub title_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = seller,
        associated_token::mint = title_mint,
        associated_token::authority = buyer,
        associated_token::token_program = token_program,
    )]
    pub buyer_title_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(constraint = payment_mint.key() == ledger.payment_mint @ EscrowError::MintMismatch)]
    pub payment_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = payment_mint,
        associated_token::authority = ledger,
        associated_token::token_program = token_program,
    )]
    pub treasury: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = seller_payment_account.owner == ledger.seller @ EscrowError::OwnerMismatch,
        token::mint = payment_mint,
        token::token_program = token_program,
    )]
    pub seller_payment_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<FinalizeSale>) -> Result<()> {
    let seller = ctx.accounts.seller.key();
    ctx.accounts.ledger.require_seller(&seller)?;

    // Update state BEFORE CPI (checks-effects-interactions)
    let clock = Clock::get()?;
    let listing = &mut ctx.accounts.listing;
    let settlement = listing.settle_sale(clock.unix_timestamp)?;

    let bump = [ctx.accounts.ledger.bump];
    let inner = ledger_seeds(&bump);
    let signer_seeds: &[&[&[u8]]] = &[&inner];

    transfer_from_vault(
        &ctx.accounts.treasury, &ctx.accounts.payment_mint,
        &ctx.accounts.seller_payment_account,
        ctx.accounts.ledger.to_account_info(), &ctx.accounts.token_program,
        signer_seeds, settlement.to_seller, ctx.accounts.payment_mint.decimals,
    )?;

    release_title(
        &ctx.accounts.title_vault, &ctx.accounts.title_mint,
        &ctx.accounts.buyer_title_account,
        ctx.accounts.ledger.to_account_info(),
        &ctx.accounts.token_program, signer_seeds,
    )?;

    msg!("Sale finalized: title {} to buyer {}", listing.title_mint, listing.buyer);

    emit!(SaleFinalized {
        title_mint: listing.title_mint,
        seller,
        buyer: listing.buyer,
        seller_proceeds: settlement.to_seller,
        closed_at: listing.closed_at,
    });

    Ok(())
}
