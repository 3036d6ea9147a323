use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::MortgageError;
use crate::types::{with_metadata, ComputationOutput, LoanInput, Money, Rate};
use crate::MortgageResult;

/// Output of the monthly payment calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentOutput {
    /// Fixed monthly principal-and-interest payment
    pub monthly_payment: Money,
    /// Periodic rate applied each month
    pub monthly_rate: Rate,
    /// Whole repayment periods over the term
    pub total_periods: u32,
    /// Payment × periods
    pub total_paid: Money,
    /// Total paid less the amount borrowed
    pub total_interest: Money,
}

/// Fixed monthly payment for `principal` at `monthly_rate` over `periods`
/// months: `P × r(1+r)^n / ((1+r)^n − 1)`, or `P / n` for a zero-rate loan.
///
/// Assumes the bounds of [`LoanInput::validate`] hold; unrounded result.
pub fn payment_amount(principal: Money, monthly_rate: Rate, periods: u32) -> MortgageResult<Money> {
    if periods == 0 {
        return Err(MortgageError::DivisionByZero {
            context: "payment period count".into(),
        });
    }

    let n = Decimal::from(periods);
    if monthly_rate.is_zero() {
        return Ok(principal / n);
    }

    let growth = (Decimal::ONE + monthly_rate).powd(n);
    let annuity_factor = growth - Decimal::ONE;
    if annuity_factor.is_zero() {
        return Err(MortgageError::DivisionByZero {
            context: "payment annuity factor".into(),
        });
    }

    Ok(principal * (monthly_rate * growth) / annuity_factor)
}

/// Calculate the fixed monthly P&I payment for a loan.
pub fn calculate_payment(input: &LoanInput) -> MortgageResult<ComputationOutput<PaymentOutput>> {
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
    let total_paid = monthly_payment * Decimal::from(total_periods);

    let output = PaymentOutput {
        monthly_payment,
        monthly_rate,
        total_periods,
        total_paid,
        total_interest: total_paid - input.principal,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fixed-Rate Monthly P&I (Annuity Formula)",
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

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn standard_loan() -> LoanInput {
        LoanInput {
            principal: dec!(300_000),
            annual_rate_pct: dec!(6),
            term_years: dec!(30),
        }
    }

    #[test]
    fn test_standard_thirty_year_payment() {
        let result = calculate_payment(&standard_loan()).unwrap();
        let out = &result.result;

        // 300k at 6% over 30 years => ~1798.65/mo
        assert!((out.monthly_payment - dec!(1798.65)).abs() < dec!(0.01));
        assert_eq!(out.total_periods, 360);
        assert_eq!(out.monthly_rate, dec!(0.005));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_zero_rate_payment_is_exact_division() {
        let loan = LoanInput {
            principal: dec!(100_000),
            annual_rate_pct: Decimal::ZERO,
            term_years: dec!(10),
        };
        let result = calculate_payment(&loan).unwrap();
        let out = &result.result;

        assert_eq!(out.monthly_payment, dec!(100_000) / dec!(120));
        assert_eq!(out.total_periods, 120);
        assert!(out.total_interest.abs() < dec!(0.0000001));
    }

    #[test]
    fn test_payment_is_finite_and_positive() {
        let cases = [
            (dec!(1), dec!(0), dec!(0.5)),
            (dec!(250_000), dec!(3.25), dec!(15)),
            (dec!(1_000_000), dec!(12), dec!(40)),
        ];
        for (principal, rate, years) in cases {
            let loan = LoanInput {
                principal,
                annual_rate_pct: rate,
                term_years: years,
            };
            let payment = calculate_payment(&loan).unwrap().result.monthly_payment;
            assert!(payment > Decimal::ZERO, "payment for {principal}/{rate}/{years}");
        }
    }

    #[test]
    fn test_repeat_calls_are_bit_identical() {
        let a = calculate_payment(&standard_loan()).unwrap().result.monthly_payment;
        let b = calculate_payment(&standard_loan()).unwrap().result.monthly_payment;
        assert_eq!(a, b);
    }

    #[test]
    fn test_fractional_term_warns() {
        let mut loan = standard_loan();
        loan.term_years = dec!(12.7); // 152.4 months → 152
        let result = calculate_payment(&loan).unwrap();
        assert_eq!(result.result.total_periods, 152);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let mut loan = standard_loan();
        loan.principal = dec!(-1);
        assert!(calculate_payment(&loan).is_err());

        loan = standard_loan();
        loan.term_years = Decimal::ZERO;
        assert!(calculate_payment(&loan).is_err());
    }

    #[test]
    fn test_total_paid_consistency() {
        let result = calculate_payment(&standard_loan()).unwrap();
        let out = &result.result;
        assert_eq!(out.total_paid, out.monthly_payment * dec!(360));
        assert_eq!(out.total_interest, out.total_paid - dec!(300_000));
    }
}
