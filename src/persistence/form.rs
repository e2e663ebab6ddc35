//! Saving and restoring the last-entered loan form.

use crate::error::EngineResult;
use crate::models::LoanForm;

use super::KeyValueStore;

/// Store key for the raw loan amount.
pub const LOAN_AMOUNT_KEY: &str = "loanAmount";
/// Store key for the raw annual interest rate.
pub const ANNUAL_INTEREST_KEY: &str = "annualInt";
/// Store key for the raw repayment period.
pub const REPAYMENT_PERIOD_KEY: &str = "repaymentPeriod";
/// Store key for the raw ZIP code.
pub const ZIPCODE_KEY: &str = "zipcode";

/// Writes the four raw form fields to the store as a single update.
pub fn save_form(store: &dyn KeyValueStore, form: &LoanForm) -> EngineResult<()> {
    store.set_many(&[
        (LOAN_AMOUNT_KEY, form.loan_amount.as_str()),
        (ANNUAL_INTEREST_KEY, form.annual_interest.as_str()),
        (REPAYMENT_PERIOD_KEY, form.repayment_period.as_str()),
        (ZIPCODE_KEY, form.zipcode.as_str()),
    ])
}

/// Reads the four raw form fields back from the store.
///
/// Keys that were never written leave the matching field empty.
///
/// # Example
///
/// ```
/// use loan_engine::models::LoanForm;
/// use loan_engine::persistence::{load_form, save_form, MemoryStore};
///
/// let store = MemoryStore::new();
/// assert_eq!(load_form(&store).unwrap(), LoanForm::default());
///
/// let form = LoanForm::new("100000", "6", "30", "10001");
/// save_form(&store, &form).unwrap();
/// assert_eq!(load_form(&store).unwrap(), form);
/// ```
pub fn load_form(store: &dyn KeyValueStore) -> EngineResult<LoanForm> {
    let mut values = store
        .get_many(&[
            LOAN_AMOUNT_KEY,
            ANNUAL_INTEREST_KEY,
            REPAYMENT_PERIOD_KEY,
            ZIPCODE_KEY,
        ])?
        .into_iter()
        .map(Option::unwrap_or_default);

    let mut next = || values.next().unwrap_or_default();
    Ok(LoanForm {
        loan_amount: next(),
        annual_interest: next(),
        repayment_period: next(),
        zipcode: next(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{FileStore, MemoryStore};
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_save_writes_fixed_keys() {
        let store = MemoryStore::new();
        save_form(&store, &LoanForm::new("5000", "9", "2", "02139")).unwrap();

        assert_eq!(store.get("loanAmount").unwrap().as_deref(), Some("5000"));
        assert_eq!(store.get("annualInt").unwrap().as_deref(), Some("9"));
        assert_eq!(store.get("repaymentPeriod").unwrap().as_deref(), Some("2"));
        assert_eq!(store.get("zipcode").unwrap().as_deref(), Some("02139"));
    }

    #[test]
    fn test_partial_store_prefills_present_fields_only() {
        let store = MemoryStore::new();
        store.set("annualInt", "4").unwrap();

        let form = load_form(&store).unwrap();
        assert_eq!(form.annual_interest, "4");
        assert_eq!(form.loan_amount, "");
        assert_eq!(form.zipcode, "");
    }

    #[test]
    fn test_raw_strings_are_kept_verbatim() {
        let store = MemoryStore::new();
        let form = LoanForm::new(" 100000 ", "6.5", "30yrs", "");
        save_form(&store, &form).unwrap();
        assert_eq!(load_form(&store).unwrap(), form);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inputs.json");
        let form = LoanForm::new("320000", "3", "15", "60614");

        save_form(&FileStore::open(&path).unwrap(), &form).unwrap();
        assert_eq!(load_form(&FileStore::open(&path).unwrap()).unwrap(), form);
    }

    #[test]
    fn test_concurrent_saves_store_one_whole_form() {
        let first = LoanForm::new("100000", "6", "30", "10001");
        let second = LoanForm::new("250000", "4", "15", "94103");

        for _ in 0..200 {
            let store = Arc::new(MemoryStore::new());
            let handles: Vec<_> = [first.clone(), second.clone()]
                .into_iter()
                .map(|form| {
                    let store = Arc::clone(&store);
                    thread::spawn(move || save_form(store.as_ref(), &form).unwrap())
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }

            let stored = load_form(store.as_ref()).unwrap();
            assert!(stored == first || stored == second, "mixed form {:?}", stored);
        }
    }

    #[test]
    fn test_concurrent_file_saves_store_one_whole_form() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inputs.json");
        let first = LoanForm::new("100000", "6", "30", "10001");
        let second = LoanForm::new("250000", "4", "15", "94103");

        let store = Arc::new(FileStore::open(&path).unwrap());
        let handles: Vec<_> = [first.clone(), second.clone()]
            .into_iter()
            .map(|form| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..20 {
                        save_form(store.as_ref(), &form).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let in_memory = load_form(store.as_ref()).unwrap();
        let on_disk = load_form(&FileStore::open(&path).unwrap()).unwrap();
        assert!(in_memory == first || in_memory == second);
        assert_eq!(on_disk, in_memory);
    }
}
