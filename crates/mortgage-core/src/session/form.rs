use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::MortgageError;
use crate::session::store::KeyValueStore;
use crate::types::LoanInput;
use crate::MortgageResult;

/// Session key for the raw entry-form fields.
pub const FORM_STATE_KEY: &str = "form_state";

/// Session key for the last validated loan parameters.
pub const LAST_CALCULATION_KEY: &str = "last_calculation";

/// The entry form's raw field values, persisted verbatim so a partially
/// filled form survives a reload. `term_years` holds the selected
/// standard term, `term_custom` a free-form term in years.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    #[serde(default)]
    pub loan_amount: String,
    #[serde(default)]
    pub interest_rate: String,
    #[serde(default)]
    pub term_years: String,
    #[serde(default)]
    pub term_custom: String,
}

impl FormState {
    /// Resolve the raw fields into validated loan parameters. A non-empty
    /// custom term overrides the selected standard term.
    pub fn resolve(&self) -> MortgageResult<LoanInput> {
        let principal = parse_field(&self.loan_amount, "loan_amount", "Enter a valid loan amount")?;
        let annual_rate_pct =
            parse_field(&self.interest_rate, "interest_rate", "Enter a valid interest rate")?;

        let term_years = if !self.term_custom.trim().is_empty() {
            parse_field(&self.term_custom, "term_custom", "Enter a valid custom term in years")?
        } else {
            parse_field(
                &self.term_years,
                "term_years",
                "Select a term or enter a custom term in years",
            )?
        };

        let input = LoanInput {
            principal,
            annual_rate_pct,
            term_years,
        };
        input.validate()?;
        Ok(input)
    }
}

fn parse_field(raw: &str, field: &str, reason: &str) -> MortgageResult<Decimal> {
    Decimal::from_str(raw.trim()).map_err(|_| MortgageError::InvalidInput {
        field: field.into(),
        reason: reason.into(),
    })
}

pub fn save_form(store: &mut dyn KeyValueStore, form: &FormState) -> MortgageResult<()> {
    store.set(FORM_STATE_KEY, &serde_json::to_string(form)?)
}

pub fn load_form(store: &mut dyn KeyValueStore) -> MortgageResult<Option<FormState>> {
    load_entry(store, FORM_STATE_KEY)
}

pub fn save_calculation(store: &mut dyn KeyValueStore, loan: &LoanInput) -> MortgageResult<()> {
    store.set(LAST_CALCULATION_KEY, &serde_json::to_string(loan)?)
}

pub fn load_calculation(store: &mut dyn KeyValueStore) -> MortgageResult<Option<LoanInput>> {
    load_entry(store, LAST_CALCULATION_KEY)
}

/// Remove both session entries.
pub fn clear(store: &mut dyn KeyValueStore) -> MortgageResult<()> {
    store.remove(FORM_STATE_KEY)?;
    store.remove(LAST_CALCULATION_KEY)
}

/// A corrupt entry is removed and reported absent rather than surfaced
/// as an error.
fn load_entry<T: DeserializeOwned>(
    store: &mut dyn KeyValueStore,
    key: &str,
) -> MortgageResult<Option<T>> {
    let Some(raw) = store.get(key) else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            store.remove(key)?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::store::MemoryStore;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn filled_form() -> FormState {
        FormState {
            loan_amount: "300000".into(),
            interest_rate: "6".into(),
            term_years: "30".into(),
            term_custom: String::new(),
        }
    }

    #[test]
    fn test_resolve_standard_term() {
        let loan = filled_form().resolve().unwrap();
        assert_eq!(loan.principal, dec!(300000));
        assert_eq!(loan.annual_rate_pct, dec!(6));
        assert_eq!(loan.term_years, dec!(30));
    }

    #[test]
    fn test_custom_term_overrides_selection() {
        let mut form = filled_form();
        form.term_custom = "12.5".into();
        let loan = form.resolve().unwrap();
        assert_eq!(loan.term_years, dec!(12.5));
    }

    #[test]
    fn test_whitespace_custom_term_falls_back_to_selection() {
        let mut form = filled_form();
        form.term_custom = "   ".into();
        let loan = form.resolve().unwrap();
        assert_eq!(loan.term_years, dec!(30));
    }

    #[test]
    fn test_unparseable_fields_rejected() {
        let mut form = filled_form();
        form.loan_amount = "three hundred grand".into();
        assert!(form.resolve().is_err());

        form = filled_form();
        form.term_years = String::new();
        assert!(form.resolve().is_err());
    }

    #[test]
    fn test_resolve_applies_loan_bounds() {
        let mut form = filled_form();
        form.interest_rate = "-2".into();
        assert!(form.resolve().is_err());
    }

    #[test]
    fn test_form_round_trip_through_store() {
        let mut store = MemoryStore::new();
        let form = filled_form();

        save_form(&mut store, &form).unwrap();
        let loaded = load_form(&mut store).unwrap();
        assert_eq!(loaded, Some(form));
    }

    #[test]
    fn test_calculation_round_trip_through_store() {
        let mut store = MemoryStore::new();
        let loan = filled_form().resolve().unwrap();

        save_calculation(&mut store, &loan).unwrap();
        let loaded = load_calculation(&mut store).unwrap();
        assert_eq!(loaded, Some(loan));
    }

    #[test]
    fn test_corrupt_entry_is_cleared_and_absent() {
        let mut store = MemoryStore::new();
        store.set(FORM_STATE_KEY, "{broken").unwrap();

        assert_eq!(load_form(&mut store).unwrap(), None);
        assert_eq!(store.get(FORM_STATE_KEY), None);
    }

    #[test]
    fn test_clear_removes_both_entries() {
        let mut store = MemoryStore::new();
        save_form(&mut store, &filled_form()).unwrap();
        save_calculation(&mut store, &filled_form().resolve().unwrap()).unwrap();

        clear(&mut store).unwrap();
        assert_eq!(store.get(FORM_STATE_KEY), None);
        assert_eq!(store.get(LAST_CALCULATION_KEY), None);
    }
}
