mod commands;
mod input;
mod output;
mod session;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::breakdown::BreakdownArgs;
use commands::payment::PaymentArgs;
use commands::schedule::ScheduleArgs;
use session::SessionContext;

/// Fixed-rate mortgage amortisation calculations
#[derive(Parser)]
#[command(
    name = "amort",
    version,
    about = "Fixed-rate mortgage amortisation calculations",
    long_about = "A CLI for computing a fixed-rate mortgage's monthly \
                  principal-and-interest payment with decimal precision. \
                  Supports the first-payment breakdown, an amortisation \
                  schedule preview, and a persisted session that prefills \
                  the next invocation."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Session file path (default: $AMORT_SESSION, then ~/.amort_session.json)
    #[arg(long, global = true)]
    state_file: Option<String>,

    /// Do not persist this invocation's inputs to the session
    #[arg(long, global = true)]
    no_save: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the fixed monthly P&I payment
    Payment(PaymentArgs),
    /// Split the first payment into principal and interest portions
    Breakdown(BreakdownArgs),
    /// Preview the leading rows of the amortisation schedule
    Schedule(ScheduleArgs),
    /// Forget the persisted form state and last calculation
    Clear,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();
    let ctx = SessionContext {
        state_file: cli.state_file.clone(),
        no_save: cli.no_save,
    };

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Payment(args) => commands::payment::run_payment(args, &ctx),
        Commands::Breakdown(args) => commands::breakdown::run_breakdown(args, &ctx),
        Commands::Schedule(args) => commands::schedule::run_schedule(args, &ctx),
        Commands::Clear => commands::clear::run_clear(&ctx),
        Commands::Version => {
            println!("amort {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
