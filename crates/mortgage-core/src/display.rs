//! Display helpers for the surrounding UI: currency strings and the
//! donut-arc geometry of the first-payment breakdown. Nothing here feeds
//! back into the amortisation math.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::MortgageError;
use crate::types::{Currency, Money};
use crate::MortgageResult;

/// Format an amount as a currency string: two decimal places, rounded
/// half away from zero, thousands grouped (`$1,798.65`, `-$12.30`).
pub fn format_money(amount: Money, currency: &Currency) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let magnitude = format!("{:.2}", rounded.abs());
    let (units, cents) = magnitude.split_once('.').unwrap_or((magnitude.as_str(), "00"));

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{}{}.{cents}", currency.symbol(), group_thousands(units))
}

fn group_thousands(units: &str) -> String {
    let digits = units.len();
    let mut grouped = String::with_capacity(digits + digits / 3);
    for (i, ch) in units.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Arc geometry for a two-slice donut of the first-payment split.
///
/// Lengths are in the same units as `radius`; a renderer applies them as
/// stroke dash lengths on circles of that radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonutLayout {
    pub radius: Decimal,
    pub circumference: Decimal,
    pub principal_arc: Decimal,
    pub interest_arc: Decimal,
    /// Dash offset for the interest arc so it starts where principal ends
    pub interest_offset: Decimal,
    /// Whole-number percentage labels
    pub principal_pct: Decimal,
    pub interest_pct: Decimal,
}

/// Map a principal/interest split onto donut arc lengths: each slice is
/// its share of the portion total times the circumference. A zero total
/// yields zero-length arcs rather than an error.
pub fn donut_layout(
    principal_portion: Money,
    interest_portion: Money,
    radius: Decimal,
) -> MortgageResult<DonutLayout> {
    if radius <= Decimal::ZERO {
        return Err(MortgageError::InvalidInput {
            field: "radius".into(),
            reason: "Donut radius must be positive".into(),
        });
    }

    let circumference = dec!(2) * Decimal::PI * radius;
    let total = principal_portion + interest_portion;

    let (principal_share, interest_share) = if total > Decimal::ZERO {
        (principal_portion / total, interest_portion / total)
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };

    let principal_arc = principal_share * circumference;
    Ok(DonutLayout {
        radius,
        circumference,
        principal_arc,
        interest_arc: interest_share * circumference,
        interest_offset: -principal_arc,
        principal_pct: (principal_share * dec!(100))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
        interest_pct: (interest_share * dec!(100))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
    })
}
