//! Persistence of the last-entered loan inputs.
//!
//! Inputs are kept in a plain string key/value store under four fixed keys,
//! written after every successful calculation and read back to prefill the
//! form.

mod form;
mod store;

pub use form::{
    ANNUAL_INTEREST_KEY, LOAN_AMOUNT_KEY, REPAYMENT_PERIOD_KEY, ZIPCODE_KEY, load_form, save_form,
};
pub use store::{FileStore, KeyValueStore, MemoryStore};
