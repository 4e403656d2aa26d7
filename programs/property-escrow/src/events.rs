use anchor_lang::prelude::*;
use crate::state::{Approvals, ListingParty};

#[event]
pub struct LedgerInitialized {
    pub ledger: Pubkey,
    pub seller: Pubkey,
    pub inspector: Pubkey,
    pub funding_party: Pubkey,
    pub payment_mint: Pubkey,
}

#[event]
pub struct ListingCreated {
    pub title_mint: Pubkey,
    pub seller: Pubkey,
    pub buyer: Pubkey,
    pub purchase_price: u64,
    pub escrow_amount: u64,
    pub listed_at: i64,
}

#[event]
pub struct EarnestDeposited {
    pub title_mint: Pubkey,
    pub buyer: Pubkey,
    pub amount: u64,
    pub deposited_amount: u64,
}

#[event]
pub struct ListingFunded {
    pub title_mint: Pubkey,
    pub funding_party: Pubkey,
    pub amount: u64,
    pub funded_amount: u64,
}

#[event]
pub struct InspectionUpdated {
    pub title_mint: Pubkey,
    pub inspector: Pubkey,
    pub inspection_passed: bool,
}

#[event]
pub struct SaleApproved {
    pub title_mint: Pubkey,
    pub approver: Pubkey,
    pub party: ListingParty,
    pub approvals: Approvals,
}

#[event]
pub struct SaleFinalized {
    pub title_mint: Pubkey,
    pub seller: Pubkey,
    pub buyer: Pubkey,
    pub seller_proceeds: u64,
    pub closed_at: i64,
}

#[event]
pub struct SaleCancelled {
    pub title_mint: Pubkey,
    pub seller: Pubkey,
    pub inspection_passed: bool,
    pub refunded_to_buyer: u64,
    pub paid_to_seller: u64,
    pub returned_to_funding_party: u64,
    pub closed_at: i64,
}
