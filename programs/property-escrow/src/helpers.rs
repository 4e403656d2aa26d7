use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};

use crate::error::EscrowError;
use crate::state::{LEDGER_SEED, TITLE_DECIMALS, TITLE_SUPPLY};

/// Build ledger PDA signer seeds inner array.
pub fn ledger_seeds(bump: &[u8; 1]) -> [&[u8]; 2] {
    [LEDGER_SEED, bump]
}

/// Sum of `amounts`, failing on overflow.
pub fn checked_total(amounts: &[u64]) -> Result<u64> {
    amounts.iter().try_fold(0u64, |acc, amount| {
        acc.checked_add(*amount)
            .ok_or_else(|| error!(EscrowError::Overflow))
    })
}

/// Transfer tokens from a signer-owned account into a ledger vault. Skips if amount == 0.
pub fn transfer_to_vault<'info>(
    source: &InterfaceAccount<'info, TokenAccount>,
    mint: &InterfaceAccount<'info, Mint>,
    vault: &InterfaceAccount<'info, TokenAccount>,
    authority: AccountInfo<'info>,
    token_program: &Interface<'info, TokenInterface>,
    amount: u64,
    decimals: u8,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    let transfer_accounts = TransferChecked {
        from: source.to_account_info(),
        mint: mint.to_account_info(),
        to: vault.to_account_info(),
        authority,
    };
    let cpi_ctx = CpiContext::new(token_program.to_account_info(), transfer_accounts);
    token_interface::transfer_checked(cpi_ctx, amount, decimals)
}

/// Transfer tokens from a ledger vault using the PDA signer. Skips if amount == 0.
#[allow(clippy::too_many_arguments)]
pub fn transfer_from_vault<'info>(
    vault: &InterfaceAccount<'info, TokenAccount>,
    mint: &InterfaceAccount<'info, Mint>,
    destination: &InterfaceAccount<'info, TokenAccount>,
    authority: AccountInfo<'info>,
    token_program: &Interface<'info, TokenInterface>,
    signer_seeds: &[&[&[u8]]],
    amount: u64,
    decimals: u8,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    let transfer_accounts = TransferChecked {
        from: vault.to_account_info(),
        mint: mint.to_account_info(),
        to: destination.to_account_info(),
        authority,
    };
    let cpi_ctx = CpiContext::new_with_signer(
        token_program.to_account_info(),
        transfer_accounts,
        signer_seeds,
    );
    token_interface::transfer_checked(cpi_ctx, amount, decimals)
}

/// Move the title unit from the seller into ledger custody.
pub fn take_title_custody<'info>(
    seller_title_account: &InterfaceAccount<'info, TokenAccount>,
    title_mint: &InterfaceAccount<'info, Mint>,
    title_vault: &InterfaceAccount<'info, TokenAccount>,
    seller: AccountInfo<'info>,
    token_program: &Interface<'info, TokenInterface>,
) -> Result<()> {
    transfer_to_vault(
        seller_title_account, title_mint, title_vault,
        seller, token_program, TITLE_SUPPLY, TITLE_DECIMALS,
    )
    .map_err(|_| error!(EscrowError::TransferFailed))
}

/// Move the title unit out of ledger custody. The emptied vault stays open so a
/// repeated finalize or cancel still loads its accounts and reports `NotListed`.
pub fn release_title<'info>(
    title_vault: &InterfaceAccount<'info, TokenAccount>,
    title_mint: &InterfaceAccount<'info, Mint>,
    recipient_title_account: &InterfaceAccount<'info, TokenAccount>,
    ledger: AccountInfo<'info>,
    token_program: &Interface<'info, TokenInterface>,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    transfer_from_vault(
        title_vault, title_mint, recipient_title_account,
        ledger, token_program,
        signer_seeds, TITLE_SUPPLY, TITLE_DECIMALS,
    )
    .map_err(|_| error!(EscrowError::TransferFailed))
}
