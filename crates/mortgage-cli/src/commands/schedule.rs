use chrono::NaiveDate;
use clap::Args;
use serde_json::Value;

use mortgage_core::amortisation::schedule::{self, ScheduleInput};
use mortgage_core::session::form;

use crate::commands::{self, LoanArgs};
use crate::session::SessionContext;

/// Arguments for the amortisation schedule preview
#[derive(Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub loan: LoanArgs,

    /// Maximum number of schedule rows to emit
    #[arg(long, default_value = "12")]
    pub periods: u32,

    /// Date of the first payment (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,
}

pub fn run_schedule(
    args: ScheduleArgs,
    ctx: &SessionContext,
) -> Result<Value, Box<dyn std::error::Error>> {
    let mut store = ctx.open_store()?;
    let loan = commands::resolve_replay_loan(&args.loan, &mut store, !ctx.no_save)?;

    let result = schedule::build_schedule(&ScheduleInput {
        loan: loan.clone(),
        max_periods: args.periods,
        start_date: args.start_date,
    })?;
    if !ctx.no_save {
        form::save_calculation(&mut store, &loan)?;
    }
    Ok(serde_json::to_value(result)?)
}
