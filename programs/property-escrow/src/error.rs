use anchor_lang::prelude::*;

#[error_code]
pub enum EscrowError {
    #[msg("Signer is not the ledger's seller")]
    NotSeller,

    #[msg("Signer is not the buyer of this listing")]
    NotBuyer,

    #[msg("Signer is not the ledger's inspector")]
    NotInspector,

    #[msg("Signer is not the ledger's funding party")]
    NotFundingParty,

    #[msg("Signer is not a party (buyer, seller, or funding party) of this listing")]
    NotAListingParty,

    #[msg("Title unit is already listed")]
    AlreadyListed,

    #[msg("Listing is not open")]
    NotListed,

    #[msg("Listing is closed and cannot be relisted")]
    ListingClosed,

    #[msg("Inspection has not passed")]
    InspectionNotPassed,

    #[msg("Buyer, seller, and funding party have not all approved")]
    ApprovalsIncomplete,

    #[msg("Funds held for this listing do not cover the purchase price")]
    InsufficientFunds,

    #[msg("Title registry refused the custody transfer")]
    TransferFailed,

    #[msg("Escrow amount must be <= purchase price")]
    EscrowExceedsPrice,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Title mint must have 0 decimals and a supply of exactly 1")]
    InvalidTitleMint,

    #[msg("Role cannot be the zero address")]
    InvalidRole,

    #[msg("Seller, inspector, and funding party must be distinct")]
    DuplicateRole,

    #[msg("Buyer and seller cannot be the same address")]
    SelfDealing,

    #[msg("Token mint does not match the ledger or listing mint")]
    MintMismatch,

    #[msg("Token account owner does not match expected owner")]
    OwnerMismatch,

    #[msg("Insufficient token balance for this transfer")]
    InsufficientBalance,

    #[msg("Arithmetic overflow")]
    Overflow,

    #[msg("Extended mints (with transfer fees) are not supported")]
    ExtendedMintNotSupported,

    #[msg("Mints with a freeze authority are not supported (vault freeze griefing risk)")]
    MintHasFreezeAuthority,
}
