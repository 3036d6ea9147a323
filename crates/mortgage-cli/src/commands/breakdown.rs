use clap::Args;
use serde_json::Value;

use mortgage_core::amortisation::split;
use mortgage_core::session::form;

use crate::commands::{self, LoanArgs};
use crate::session::SessionContext;

/// Arguments for the first-payment breakdown
#[derive(Args)]
pub struct BreakdownArgs {
    #[command(flatten)]
    pub loan: LoanArgs,
}

pub fn run_breakdown(
    args: BreakdownArgs,
    ctx: &SessionContext,
) -> Result<Value, Box<dyn std::error::Error>> {
    let mut store = ctx.open_store()?;
    let loan = commands::resolve_replay_loan(&args.loan, &mut store, !ctx.no_save)?;

    let result = split::calculate_first_split(&loan)?;
    if !ctx.no_save {
        form::save_calculation(&mut store, &loan)?;
    }
    Ok(serde_json::to_value(result)?)
}
