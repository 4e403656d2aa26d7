use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::error::EscrowError;
use crate::events::EarnestDeposited;
use crate::helpers::transfer_to_vault;
use crate::state::*;

#[derive(Accounts)]
pub struct DepositEarnest<'info> {
    pub buyer: Signer<'info>,

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
        constraint = buyer_payment_account.owner == buyer.key() @ EscrowError::OwnerMismatch,
        token::mint = payment_mint,
        token::token_program = token_program,
    )]
    pub buyer_payment_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handler(ctx: Context<DepositEarnest>, amount: u64) -> Result<()> {
    let buyer = ctx.accounts.buyer.key();
    let listing = &mut ctx.accounts.listing;

    listing.require_buyer(&buyer)?;
    let deposited_amount = listing.record_deposit(amount)?;
    require!(
        ctx.accounts.buyer_payment_account.amount >= amount,
        EscrowError::InsufficientBalance
    );

    transfer_to_vault(
        &ctx.accounts.buyer_payment_account, &ctx.accounts.payment_mint,
        &ctx.accounts.treasury,
        ctx.accounts.buyer.to_account_info(), &ctx.accounts.token_program,
        amount, ctx.accounts.payment_mint.decimals,
    )?;

    emit!(EarnestDeposited {
        title_mint: listing.title_mint,
        buyer,
        amount,
        deposited_amount,
    });

    Ok(())
}
