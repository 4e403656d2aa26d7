use anchor_lang::prelude::*;

use crate::error::EscrowError;
use crate::helpers::checked_total;

pub const LEDGER_SEED: &[u8] = b"ledger";
pub const LISTING_SEED: &[u8] = b"listing";

/// A title unit is a non-divisible mint with exactly one token in existence.
pub const TITLE_DECIMALS: u8 = 0;
pub const TITLE_SUPPLY: u64 = 1;

/// Ledger-wide configuration. The three roles are fixed when the ledger is created.
#[account]
#[derive(InitSpace)]
pub struct LedgerConfig {
    pub seller: Pubkey,
    pub inspector: Pubkey,
    pub funding_party: Pubkey,
    pub payment_mint: Pubkey,
    pub bump: u8,
}

impl LedgerConfig {
    /// Roles must be set and held by three distinct keys.
    pub fn validate_roles(seller: &Pubkey, inspector: &Pubkey, funding_party: &Pubkey) -> Result<()> {
        for role in [seller, inspector, funding_party] {
            require!(*role != Pubkey::default(), EscrowError::InvalidRole);
        }
        require!(
            seller != inspector && seller != funding_party && inspector != funding_party,
            EscrowError::DuplicateRole
        );
        Ok(())
    }

    /// The buyer of a listing must be set and must not hold any ledger role.
    pub fn validate_buyer(&self, buyer: &Pubkey) -> Result<()> {
        require!(*buyer != Pubkey::default(), EscrowError::InvalidRole);
        require_keys_neq!(*buyer, self.seller, EscrowError::SelfDealing);
        require!(
            *buyer != self.inspector && *buyer != self.funding_party,
            EscrowError::DuplicateRole
        );
        Ok(())
    }

    pub fn require_seller(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.seller, EscrowError::NotSeller);
        Ok(())
    }

    pub fn require_inspector(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.inspector, EscrowError::NotInspector);
        Ok(())
    }

    pub fn require_funding_party(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.funding_party, EscrowError::NotFundingParty);
        Ok(())
    }

    /// Resolves which sign-off slot `caller` holds on `listing`, if any.
    pub fn party_of(&self, listing: &Listing, caller: &Pubkey) -> Option<ListingParty> {
        if *caller == self.seller {
            Some(ListingParty::Seller)
        } else if *caller == listing.buyer {
            Some(ListingParty::Buyer)
        } else if *caller == self.funding_party {
            Some(ListingParty::FundingParty)
        } else {
            None
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Debug)]
pub enum ListingStatus {
    /// Record allocated but never listed.
    Unlisted,
    Open,
    Sold,
    Cancelled,
}

/// A title mint carries exactly one indivisible unit.
pub fn validate_title_mint(decimals: u8, supply: u64) -> Result<()> {
    require!(
        decimals == TITLE_DECIMALS && supply == TITLE_SUPPLY,
        EscrowError::InvalidTitleMint
    );
    Ok(())
}

/// The registry only moves a unit its current holder controls.
pub fn require_title_holder(holder: &Pubkey, held: u64, seller: &Pubkey) -> Result<()> {
    require!(
        holder == seller && held == TITLE_SUPPLY,
        EscrowError::TransferFailed
    );
    Ok(())
}

impl Default for ListingStatus {
    fn default() -> Self {
        ListingStatus::Unlisted
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ListingParty {
    Buyer,
    Seller,
    FundingParty,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Debug, Default)]
pub struct Approvals {
    pub buyer: bool,
    pub seller: bool,
    pub funding_party: bool,
}

impl Approvals {
    /// Records a sign-off. Returns false when the party had already approved.
    pub fn set(&mut self, party: ListingParty) -> bool {
        let slot = match party {
            ListingParty::Buyer => &mut self.buyer,
            ListingParty::Seller => &mut self.seller,
            ListingParty::FundingParty => &mut self.funding_party,
        };
        let newly_set = !*slot;
        *slot = true;
        newly_set
    }

    pub fn is_complete(&self) -> bool {
        self.buyer && self.seller && self.funding_party
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TitleRecipient {
    Buyer,
    Seller,
}

/// Where a closing listing's custody goes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Settlement {
    pub to_seller: u64,
    pub to_buyer: u64,
    pub to_funding_party: u64,
    pub title_to: TitleRecipient,
}

impl Settlement {
    pub fn total(&self) -> Result<u64> {
        checked_total(&[self.to_seller, self.to_buyer, self.to_funding_party])
    }
}

/// One record per title unit, keyed by the title mint.
#[account]
#[derive(InitSpace, Default)]
pub struct Listing {
    pub title_mint: Pubkey,
    pub buyer: Pubkey,
    pub purchase_price: u64,
    pub escrow_amount: u64,
    /// Buyer-originated deposits.
    pub deposited_amount: u64,
    /// Funding-party contributions.
    pub funded_amount: u64,
    pub inspection_passed: bool,
    pub approvals: Approvals,
    pub status: ListingStatus,
    pub listed_at: i64,
    pub closed_at: i64,
    pub bump: u8,
}

impl Listing {
    pub fn is_open(&self) -> bool {
        self.status == ListingStatus::Open
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.status, ListingStatus::Sold | ListingStatus::Cancelled)
    }

    pub fn require_open(&self) -> Result<()> {
        require!(self.is_open(), EscrowError::NotListed);
        Ok(())
    }

    /// Only a never-listed record can be opened. Closed ids stay closed.
    pub fn require_listable(&self) -> Result<()> {
        require!(!self.is_closed(), EscrowError::ListingClosed);
        require!(!self.is_open(), EscrowError::AlreadyListed);
        Ok(())
    }

    pub fn require_buyer(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.buyer, EscrowError::NotBuyer);
        Ok(())
    }

    pub fn open(
        &mut self,
        title_mint: Pubkey,
        buyer: Pubkey,
        purchase_price: u64,
        escrow_amount: u64,
        now: i64,
        bump: u8,
    ) -> Result<()> {
        self.require_listable()?;
        require!(purchase_price > 0, EscrowError::InvalidAmount);
        require!(escrow_amount <= purchase_price, EscrowError::EscrowExceedsPrice);

        self.title_mint = title_mint;
        self.buyer = buyer;
        self.purchase_price = purchase_price;
        self.escrow_amount = escrow_amount;
        self.deposited_amount = 0;
        self.funded_amount = 0;
        self.inspection_passed = false;
        self.approvals = Approvals::default();
        self.status = ListingStatus::Open;
        self.listed_at = now;
        self.closed_at = 0;
        self.bump = bump;
        Ok(())
    }

    /// Adds a buyer deposit and returns the new running total. Amounts above
    /// `escrow_amount` (or even `purchase_price`) are accepted as-is.
    pub fn record_deposit(&mut self, amount: u64) -> Result<u64> {
        self.require_open()?;
        require!(amount > 0, EscrowError::InvalidAmount);
        self.deposited_amount = checked_total(&[self.deposited_amount, amount])?;
        Ok(self.deposited_amount)
    }

    pub fn record_funding(&mut self, amount: u64) -> Result<u64> {
        self.require_open()?;
        require!(amount > 0, EscrowError::InvalidAmount);
        self.funded_amount = checked_total(&[self.funded_amount, amount])?;
        Ok(self.funded_amount)
    }

    /// Last write wins.
    pub fn record_inspection(&mut self, passed: bool) -> Result<()> {
        self.require_open()?;
        self.inspection_passed = passed;
        Ok(())
    }

    pub fn approve(&mut self, party: ListingParty) -> Result<bool> {
        self.require_open()?;
        Ok(self.approvals.set(party))
    }

    /// Funds attributed to this listing in the treasury.
    pub fn custody_total(&self) -> Result<u64> {
        checked_total(&[self.deposited_amount, self.funded_amount])
    }

    /// Gating checks for finalization, in reporting order. Returns the custody
    /// that will be paid out.
    pub fn check_finalize(&self) -> Result<u64> {
        self.require_open()?;
        require!(self.inspection_passed, EscrowError::InspectionNotPassed);
        require!(self.approvals.is_complete(), EscrowError::ApprovalsIncomplete);
        let custody = self.custody_total()?;
        require!(custody >= self.purchase_price, EscrowError::InsufficientFunds);
        Ok(custody)
    }

    /// Closes the listing as sold. All attributed custody goes to the seller and
    /// the title goes to the buyer.
    pub fn settle_sale(&mut self, now: i64) -> Result<Settlement> {
        let custody = self.check_finalize()?;
        self.status = ListingStatus::Sold;
        self.closed_at = now;
        Ok(Settlement {
            to_seller: custody,
            to_buyer: 0,
            to_funding_party: 0,
            title_to: TitleRecipient::Buyer,
        })
    }

    /// Closes the listing without a sale. A failed (or never recorded) inspection
    /// refunds the buyer's deposit; a passed inspection forfeits it to the seller.
    /// Funding-party contributions always go back to the funding party and the
    /// title always goes back to the seller.
    pub fn settle_cancellation(&mut self, now: i64) -> Result<Settlement> {
        self.require_open()?;
        let (to_buyer, to_seller) = if self.inspection_passed {
            (0, self.deposited_amount)
        } else {
            (self.deposited_amount, 0)
        };
        self.status = ListingStatus::Cancelled;
        self.closed_at = now;
        Ok(Settlement {
            to_seller,
            to_buyer,
            to_funding_party: self.funded_amount,
            title_to: TitleRecipient::Seller,
        })
    }
}
