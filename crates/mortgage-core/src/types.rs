use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::MortgageError;
use crate::MortgageResult;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.005 = 0.5% per month). Never as percentages.
pub type Rate = Decimal;

/// Quoted rates as percentages (6 = 6% per year). Converted to a monthly
/// [`Rate`] exactly once, in [`LoanInput::monthly_rate`].
pub type Percent = Decimal;

/// Year fractions or counts
pub type Years = Decimal;

/// Currency code
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    GBP,
    #[default]
    USD,
    EUR,
    CHF,
    JPY,
    CAD,
    AUD,
    Other(String),
}

impl Currency {
    /// Display symbol, prefixed to formatted amounts.
    pub fn symbol(&self) -> &str {
        match self {
            Currency::GBP => "£",
            Currency::USD | Currency::CAD | Currency::AUD => "$",
            Currency::EUR => "€",
            Currency::CHF => "CHF ",
            Currency::JPY => "¥",
            Currency::Other(code) => code,
        }
    }
}

/// The parameters of a fixed-rate loan. The input record every operation
/// in this crate starts from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    /// Amount borrowed, in currency units
    pub principal: Money,
    /// Annual interest rate as quoted (6 = 6%)
    pub annual_rate_pct: Percent,
    /// Loan term in years; fractional terms are allowed
    pub term_years: Years,
}

impl LoanInput {
    /// Validate the sign bounds. Decimal has no NaN or infinity, so
    /// finiteness needs no check here.
    pub fn validate(&self) -> MortgageResult<()> {
        if self.principal <= Decimal::ZERO {
            return Err(MortgageError::InvalidInput {
                field: "principal".into(),
                reason: "Loan amount must be positive".into(),
            });
        }
        if self.annual_rate_pct < Decimal::ZERO {
            return Err(MortgageError::InvalidInput {
                field: "annual_rate_pct".into(),
                reason: "Interest rate must not be negative".into(),
            });
        }
        if self.term_years <= Decimal::ZERO {
            return Err(MortgageError::InvalidInput {
                field: "term_years".into(),
                reason: "Term must be positive".into(),
            });
        }
        Ok(())
    }

    /// Monthly periodic rate as a decimal: quoted % / 100 / 12.
    pub fn monthly_rate(&self) -> Rate {
        self.annual_rate_pct / dec!(100) / dec!(12)
    }

    /// Total repayment periods: term in years × 12, rounded to the
    /// nearest whole period (ties away from zero). Fractional custom
    /// terms therefore gain or lose up to half a month.
    pub fn total_periods(&self) -> MortgageResult<u32> {
        let periods = (self.term_years * dec!(12))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        periods
            .to_u32()
            .filter(|&n| n > 0)
            .ok_or_else(|| MortgageError::InvalidInput {
                field: "term_years".into(),
                reason: format!("Term of {} years rounds to no whole payment periods", self.term_years),
            })
    }

    /// True when `term_years × 12` is not already a whole number of periods.
    pub fn has_fractional_periods(&self) -> bool {
        !(self.term_years * dec!(12)).fract().is_zero()
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn thirty_year_loan() -> LoanInput {
        LoanInput {
            principal: dec!(300_000),
            annual_rate_pct: dec!(6),
            term_years: dec!(30),
        }
    }

    #[test]
    fn test_monthly_rate_conversion() {
        // 6% / 100 / 12 = 0.005
        assert_eq!(thirty_year_loan().monthly_rate(), dec!(0.005));
    }

    #[test]
    fn test_total_periods_whole_term() {
        assert_eq!(thirty_year_loan().total_periods().unwrap(), 360);
        assert!(!thirty_year_loan().has_fractional_periods());
    }

    #[test]
    fn test_total_periods_rounds_to_nearest() {
        let mut loan = thirty_year_loan();
        // 7.5 years = 90 months exactly; 7.54 years = 90.48 → 90
        loan.term_years = dec!(7.54);
        assert_eq!(loan.total_periods().unwrap(), 90);
        assert!(loan.has_fractional_periods());

        // 7.55 years = 90.6 → 91
        loan.term_years = dec!(7.55);
        assert_eq!(loan.total_periods().unwrap(), 91);
    }

    #[test]
    fn test_tiny_term_rounds_to_zero_periods() {
        let mut loan = thirty_year_loan();
        loan.term_years = dec!(0.02); // 0.24 months → 0 periods
        assert!(loan.total_periods().is_err());
    }

    #[test]
    fn test_validate_bounds() {
        let mut loan = thirty_year_loan();
        assert!(loan.validate().is_ok());

        loan.principal = Decimal::ZERO;
        assert!(loan.validate().is_err());

        loan = thirty_year_loan();
        loan.annual_rate_pct = dec!(-0.1);
        assert!(loan.validate().is_err());

        loan = thirty_year_loan();
        loan.term_years = dec!(-5);
        assert!(loan.validate().is_err());
    }

    #[test]
    fn test_zero_rate_is_valid() {
        let mut loan = thirty_year_loan();
        loan.annual_rate_pct = Decimal::ZERO;
        assert!(loan.validate().is_ok());
    }
}
