use anchor_lang::prelude::*;

use crate::events::InspectionUpdated;
use crate::state::*;

#[derive(Accounts)]
pub struct UpdateInspectionStatus<'info> {
    pub inspector: Signer<'info>,

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

pub fn handler(ctx: Context<UpdateInspectionStatus>, passed: bool) -> Result<()> {
    let inspector = ctx.accounts.inspector.key();
    ctx.accounts.ledger.require_inspector(&inspector)?;

    let listing = &mut ctx.accounts.listing;
    listing.record_inspection(passed)?;

    emit!(InspectionUpdated {
        title_mint: listing.title_mint,
        inspector,
        inspection_passed: listing.inspection_passed,
    });

    Ok(())
}
