pub mod breakdown;
pub mod clear;
pub mod payment;
pub mod schedule;

use clap::Args;
use rust_decimal::Decimal;

use mortgage_core::session::{form, FileStore};
use mortgage_core::types::LoanInput;

use crate::input;

/// Loan parameter flags shared by every calculation command.
#[derive(Args)]
pub struct LoanArgs {
    /// Loan amount in currency units
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate as quoted (6 = 6%)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Standard term in years
    #[arg(long)]
    pub term_years: Option<Decimal>,

    /// Custom term in years; overrides --term-years
    #[arg(long)]
    pub term_custom: Option<Decimal>,

    /// Path to JSON input file with loan parameters (overrides flags)
    #[arg(long)]
    pub input: Option<String>,
}

impl LoanArgs {
    fn any_flag(&self) -> bool {
        self.principal.is_some()
            || self.rate.is_some()
            || self.term_years.is_some()
            || self.term_custom.is_some()
    }
}

/// Resolve loan parameters for a fresh calculation: JSON file, then piped
/// stdin, then the flags overlaid onto the persisted form state.
pub fn resolve_new_loan(
    args: &LoanArgs,
    store: &mut FileStore,
    save: bool,
) -> Result<LoanInput, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return Ok(input::file::read_json(path)?);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }

    let mut form_state = form::load_form(store)?.unwrap_or_default();
    if let Some(principal) = args.principal {
        form_state.loan_amount = principal.to_string();
    }
    if let Some(rate) = args.rate {
        form_state.interest_rate = rate.to_string();
    }
    if let Some(term) = args.term_years {
        // Picking a standard term discards any stale custom term
        form_state.term_years = term.to_string();
        form_state.term_custom.clear();
    }
    if let Some(custom) = args.term_custom {
        form_state.term_custom = custom.to_string();
    }

    let loan = form_state.resolve()?;
    if save {
        form::save_form(store, &form_state)?;
    }
    Ok(loan)
}

/// Resolve loan parameters for a follow-up view: any explicit source wins,
/// otherwise replay the last persisted calculation.
pub fn resolve_replay_loan(
    args: &LoanArgs,
    store: &mut FileStore,
    save: bool,
) -> Result<LoanInput, Box<dyn std::error::Error>> {
    if args.input.is_some() || args.any_flag() {
        return resolve_new_loan(args, store, save);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }
    form::load_calculation(store)?.ok_or_else(|| {
        "No saved calculation found. Run `amort payment` first, or pass \
         --principal, --rate, and --term-years."
            .into()
    })
}
