use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortisation::payment::payment_amount;
use crate::types::{with_metadata, ComputationOutput, LoanInput, Money};
use crate::MortgageResult;

fn default_max_periods() -> u32 {
    12
}

/// Input for the schedule preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleInput {
    pub loan: LoanInput,
    /// Upper bound on emitted periods; the preview never exceeds the term
    #[serde(default = "default_max_periods")]
    pub max_periods: u32,
    /// Date of the first payment; later payments fall in succeeding months
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
}

/// One row of the amortisation schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulePeriod {
    /// 1-based period index
    pub period: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
    pub opening_balance: Money,
    pub payment: Money,
    pub principal: Money,
    pub interest: Money,
    /// Remaining balance after this payment, clamped at zero
    pub closing_balance: Money,
}

/// Output for the schedule preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleOutput {
    pub periods: Vec<SchedulePeriod>,
    pub total_principal_paid: Money,
    pub total_interest_paid: Money,
    pub final_balance: Money,
}

/// Build the leading `min(max_periods, n)` rows of the amortisation
/// schedule. Pure: re-invoking with the same input reproduces the same
/// rows.
pub fn build_schedule(input: &ScheduleInput) -> MortgageResult<ComputationOutput<ScheduleOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    input.loan.validate()?;
    let total_periods = input.loan.total_periods()?;
    if input.loan.has_fractional_periods() {
        warnings.push(format!(
            "Term of {} years rounded to {} whole monthly periods",
            input.loan.term_years, total_periods
        ));
    }

    let monthly_rate = input.loan.monthly_rate();
    let payment = payment_amount(input.loan.principal, monthly_rate, total_periods)?;

    let rows = input.max_periods.min(total_periods);
    let mut periods = Vec::with_capacity(rows as usize);
    let mut balance = input.loan.principal;
    let mut total_principal_paid = Decimal::ZERO;
    let mut total_interest_paid = Decimal::ZERO;

    for period in 1..=rows {
        let opening_balance = balance;
        let interest = if monthly_rate.is_zero() {
            Decimal::ZERO
        } else {
            balance * monthly_rate
        };
        let principal = payment - interest;
        balance = (balance - principal).max(Decimal::ZERO);

        total_principal_paid += principal;
        total_interest_paid += interest;

        periods.push(SchedulePeriod {
            period,
            payment_date: payment_date(input.start_date, period),
            opening_balance,
            payment,
            principal,
            interest,
            closing_balance: balance,
        });
    }

    let output = ScheduleOutput {
        periods,
        total_principal_paid,
        total_interest_paid,
        final_balance: balance,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Amortisation Schedule Preview",
        &serde_json::json!({
            "principal": input.loan.principal.to_string(),
            "annual_rate_pct": input.loan.annual_rate_pct.to_string(),
            "term_years": input.loan.term_years.to_string(),
            "total_periods": total_periods,
            "max_periods": input.max_periods,
        }),
        warnings,
        elapsed,
        output,
    ))
}

fn payment_date(start_date: Option<NaiveDate>, period: u32) -> Option<NaiveDate> {
    start_date.and_then(|d| d.checked_add_months(Months::new(period - 1)))
}
