use napi::Result as NapiResult;
use napi_derive::napi;

use rust_decimal::Decimal;
use serde::Deserialize;

use mortgage_core::amortisation::{payment, schedule, split};
use mortgage_core::display;
use mortgage_core::types::LoanInput;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Amortisation
// ---------------------------------------------------------------------------

#[napi]
pub fn monthly_payment(input_json: String) -> NapiResult<String> {
    let input: LoanInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = payment::calculate_payment(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn first_payment_split(input_json: String) -> NapiResult<String> {
    let input: LoanInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = split::calculate_first_split(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn amortisation_schedule(input_json: String) -> NapiResult<String> {
    let input: schedule::ScheduleInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = schedule::build_schedule(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

fn default_radius() -> Decimal {
    Decimal::from(62)
}

#[derive(Deserialize)]
struct DonutRequest {
    principal_portion: Decimal,
    interest_portion: Decimal,
    #[serde(default = "default_radius")]
    radius: Decimal,
}

#[napi]
pub fn donut_layout(input_json: String) -> NapiResult<String> {
    let request: DonutRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let layout = display::donut_layout(
        request.principal_portion,
        request.interest_portion,
        request.radius,
    )
    .map_err(to_napi_error)?;
    serde_json::to_string(&layout).map_err(to_napi_error)
}
