use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortisation::payment::payment_amount;
use crate::types::{with_metadata, ComputationOutput, LoanInput, Money};
use crate::MortgageResult;

/// How the first monthly payment divides between principal and interest.
///
/// Invariant: `principal_portion + interest_portion == monthly_payment`,
/// exactly — the principal portion is defined as the remainder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirstPaymentSplit {
    pub monthly_payment: Money,
    pub principal_portion: Money,
    pub interest_portion: Money,
}

/// Split the first payment into its principal and interest portions.
///
/// Interest accrues on the full original balance in month one, so this is
/// the worst month of the loan for the borrower.
pub fn calculate_first_split(
    input: &LoanInput,
) -> MortgageResult<ComputationOutput<FirstPaymentSplit>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    input.validate()?;
    let total_periods = input.total_periods()?;
    if input.has_fractional_periods() {
        warnings.push(format!(
            "Term of {} years rounded to {} whole monthly periods",
            input.term_years, total_periods
        ));
    }

    let monthly_rate = input.monthly_rate();
    let monthly_payment = payment_amount(input.principal, monthly_rate, total_periods)?;

    let interest_portion = if monthly_rate.is_zero() {
        Decimal::ZERO
    } else {
        input.principal * monthly_rate
    };

    let output = FirstPaymentSplit {
        monthly_payment,
        principal_portion: monthly_payment - interest_portion,
        interest_portion,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "First Payment Principal/Interest Split",
        &serde_json::json!({
            "principal": input.principal.to_string(),
            "annual_rate_pct": input.annual_rate_pct.to_string(),
            "term_years": input.term_years.to_string(),
            "total_periods": total_periods,
        }),
        warnings,
        elapsed,
        output,
    ))
}
