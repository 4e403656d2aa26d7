use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::error::EscrowError;
use crate::events::LedgerInitialized;
use crate::state::{LedgerConfig, LEDGER_SEED};

#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + LedgerConfig::INIT_SPACE,
        seeds = [LEDGER_SEED],
        bump,
    )]
    pub ledger: Account<'info, LedgerConfig>,

    /// CHECK: Stored as the seller role; must sign list, finalize and cancel.
    pub seller: UncheckedAccount<'info>,

    /// CHECK: Stored as the inspector role; must sign inspection updates.
    pub inspector: UncheckedAccount<'info>,

    /// CHECK: Stored as the funding party role; must sign contributions and approvals.
    pub funding_party: UncheckedAccount<'info>,

    pub payment_mint: InterfaceAccount<'info, Mint>,

    /// Shared custody for every listing's funds.
    #[account(
        init,
        payer = authority,
        associated_token::mint = payment_mint,
        associated_token::authority = ledger,
        associated_token::token_program = token_program,
    )]
    pub treasury: InterfaceAccount<'info, TokenAccount>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeLedger>) -> Result<()> {
    let seller = ctx.accounts.seller.key();
    let inspector = ctx.accounts.inspector.key();
    let funding_party = ctx.accounts.funding_party.key();
    LedgerConfig::validate_roles(&seller, &inspector, &funding_party)?;

    // Classic SPL Token mints only; transfer fees would break custody accounting.
    require!(
        *ctx.accounts.payment_mint.to_account_info().owner == anchor_spl::token::ID,
        EscrowError::ExtendedMintNotSupported
    );
    require!(
        ctx.accounts.payment_mint.freeze_authority.is_none(),
        EscrowError::MintHasFreezeAuthority
    );

    let ledger = &mut ctx.accounts.ledger;
    ledger.seller = seller;
    ledger.inspector = inspector;
    ledger.funding_party = funding_party;
    ledger.payment_mint = ctx.accounts.payment_mint.key();
    ledger.bump = ctx.bumps.ledger;

    emit!(LedgerInitialized {
        ledger: ledger.key(),
        seller,
        inspector,
        funding_party,
        payment_mint: ledger.payment_mint,
    });

    Ok(())
}
