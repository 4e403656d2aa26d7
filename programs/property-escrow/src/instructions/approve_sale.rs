use anchor_lang::prelude::*;

use crate::error::EscrowError;
use crate::events::SaleApproved;
use crate::state::*;

#[derive(Accounts)]
pub struct ApproveSale<'info> {
    pub approver: Signer<'info>,

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
}

pub fn handler(ctx: Context<ApproveSale>) -> Result<()> {
    let approver = ctx.accounts.approver.key();
    let party = ctx
        .accounts
        .ledger
        .party_of(&ctx.accounts.listing, &approver)
        .ok_or(EscrowError::NotAListingParty)?;

    let listing = &mut ctx.accounts.listing;
    if !listing.approve(party)? {
        // Already approved: nothing changed, nothing to record.
        return Ok(());
    }

    emit!(SaleApproved {
        title_mint: listing.title_mint,
        approver,
        party,
        approvals: listing.approvals,
    });

    Ok(())
}
