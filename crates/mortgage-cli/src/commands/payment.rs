use clap::Args;
use serde_json::Value;

use mortgage_core::amortisation::payment;
use mortgage_core::session::form;

use crate::commands::{self, LoanArgs};
use crate::session::SessionContext;

/// Arguments for the monthly payment calculation
#[derive(Args)]
pub struct PaymentArgs {
    #[command(flatten)]
    pub loan: LoanArgs,
}

pub fn run_payment(
    args: PaymentArgs,
    ctx: &SessionContext,
) -> Result<Value, Box<dyn std::error::Error>> {
    let mut store = ctx.open_store()?;
    let loan = commands::resolve_new_loan(&args.loan, &mut store, !ctx.no_save)?;

    let result = payment::calculate_payment(&loan)?;
    if !ctx.no_save {
        form::save_calculation(&mut store, &loan)?;
    }
    Ok(serde_json::to_value(result)?)
}
