#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

declare_id!("F7adLV9RtqseGjBmksBhSeUt5HGggjgfZXs5PZd1snXu");

pub mod error;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;


use instructions::*;

#[program]
pub mod property_escrow {
    use super::*;

    pub fn initialize_ledger(ctx: Context<InitializeLedger>) -> Result<()> {
        instructions::initialize_ledger::handler(ctx)
    }

    pub fn list(
        ctx: Context<List>,
        purchase_price: u64,
        escrow_amount: u64,
    ) -> Result<()> {
        instructions::list::handler(ctx, purchase_price, escrow_amount)
    }

    pub fn deposit_earnest(ctx: Context<DepositEarnest>, amount: u64) -> Result<()> {
        instructions::deposit_earnest::handler(ctx, amount)
    }

    pub fn fund_listing(ctx: Context<FundListing>, amount: u64) -> Result<()> {
        instructions::fund_listing::handler(ctx, amount)
    }

    pub fn update_inspection_status(
        ctx: Context<UpdateInspectionStatus>,
        passed: bool,
    ) -> Result<()> {
        instructions::update_inspection_status::handler(ctx, passed)
    }

    pub fn approve_sale(ctx: Context<ApproveSale>) -> Result<()> {
        instructions::approve_sale::handler(ctx)
    }

    pub fn finalize_sale(ctx: Context<FinalizeSale>) -> Result<()> {
        instructions::finalize_sale::handler(ctx)
    }

    pub fn cancel_sale(ctx: Context<CancelSale>) -> Result<()> {
        instructions::cancel_sale::handler(ctx)
    }
}
