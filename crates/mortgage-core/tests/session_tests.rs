#![cfg(feature = "session")]

use mortgage_core::amortisation::payment;
use mortgage_core::session::{form, FormState, MemoryStore};
use rust_decimal_macros::dec;

// The full entry-to-breakdown flow: raw form fields are resolved, the
// validated parameters are persisted, and a later page load replays the
// identical calculation from the stored entry.

#[test]
fn test_form_to_stored_calculation_flow() {
    let mut store = MemoryStore::new();

    let submitted = FormState {
        loan_amount: " 300000 ".into(),
        interest_rate: "6".into(),
        term_years: "30".into(),
        term_custom: String::new(),
    };
    let loan = submitted.resolve().unwrap();
    let first_run = payment::calculate_payment(&loan).unwrap().result;

    form::save_form(&mut store, &submitted).unwrap();
    form::save_calculation(&mut store, &loan).unwrap();

    // "Next page load": everything comes back out of the store
    let replayed = form::load_calculation(&mut store).unwrap().unwrap();
    let second_run = payment::calculate_payment(&replayed).unwrap().result;

    assert_eq!(first_run.monthly_payment, second_run.monthly_payment);
    assert_eq!(form::load_form(&mut store).unwrap(), Some(submitted));
}

#[test]
fn test_custom_term_survives_persistence() {
    let mut store = MemoryStore::new();

    let submitted = FormState {
        loan_amount: "180000".into(),
        interest_rate: "4.5".into(),
        term_years: "30".into(),
        term_custom: "8.25".into(),
    };
    form::save_form(&mut store, &submitted).unwrap();

    let reloaded = form::load_form(&mut store).unwrap().unwrap();
    let loan = reloaded.resolve().unwrap();
    assert_eq!(loan.term_years, dec!(8.25));
}

#[test]
fn test_empty_store_has_no_calculation() {
    let mut store = MemoryStore::new();
    assert_eq!(form::load_calculation(&mut store).unwrap(), None);
}

#[test]
fn test_clear_forgets_everything() {
    let mut store = MemoryStore::new();
    let submitted = FormState {
        loan_amount: "300000".into(),
        interest_rate: "6".into(),
        term_years: "30".into(),
        term_custom: String::new(),
    };
    form::save_form(&mut store, &submitted).unwrap();
    form::save_calculation(&mut store, &submitted.resolve().unwrap()).unwrap();

    form::clear(&mut store).unwrap();

    assert_eq!(form::load_form(&mut store).unwrap(), None);
    assert_eq!(form::load_calculation(&mut store).unwrap(), None);
}
