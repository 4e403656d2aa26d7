pub mod initialize_ledger;
pub mod list;
pub mod deposit_earnest;
pub mod fund_listing;
pub mod update_inspection_status;
pub mod approve_sale;
pub mod finalize_sale;
pub mod cancel_sale;

// Each module exports a `handler` fn — glob re-export causes name collision.
// Anchor's #[program] macro requires glob re-exports for generated account types.
#[allow(ambiguous_glob_reexports)]
pub use initialize_ledger::*;
pub use list::*;
pub use deposit_earnest::*;
pub use fund_listing::*;
pub use update_inspection_status::*;
pub use approve_sale::*;
pub use finalize_sale::*;
pub use cancel_sale::*;
