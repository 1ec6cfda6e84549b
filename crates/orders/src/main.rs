use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use serde_json::json;

use storefront_core::ExpectedStatus;
use storefront_orders::{OrderId, StatusSummary, next_possible_statuses, plan_status_change};

#[derive(Parser)]
#[command(name = "order-status")]
#[command(about = "Inspect the order status lifecycle")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a summary line (JSON) for every status
    Table,
    /// List the statuses reachable from STATUS
    Next { status: String },
    /// Describe one status: label, color, allowed actions
    Describe { status: String },
    /// Check whether FROM -> TO is a permitted change
    Check {
        from: String,
        to: String,
        /// Order the change applies to (a fresh id when omitted)
        #[arg(long)]
        order_id: Option<OrderId>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    storefront_observability::init();

    let cli = Cli::parse();
    let mut out = std::io::stdout().lock();
    run(cli, &mut out)
}

fn run(cli: Cli, out: &mut impl Write) -> anyhow::Result<ExitCode> {
    match cli.command {
        Command::Table => {
            for summary in StatusSummary::all() {
                writeln!(out, "{}", serde_json::to_string(&summary)?)?;
            }
        }
        Command::Next { status } => {
            let next = next_possible_statuses(&status);
            writeln!(out, "{}", serde_json::to_string(next)?)?;
        }
        Command::Describe { status } => {
            let summary = StatusSummary::of(&status);
            if !summary.is_recognized() {
                tracing::warn!(%status, "describing unrecognized order status");
            }
            writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
        }
        Command::Check { from, to, order_id } => {
            let order_id = order_id.unwrap_or_default();
            match plan_status_change(order_id, &from, &to, ExpectedStatus::Any, Utc::now()) {
                Ok(change) => {
                    let line = serde_json::to_string(&change).context("encoding status change")?;
                    writeln!(out, "{line}")?;
                }
                Err(err) => {
                    tracing::info!(%from, %to, error = %err, "status change refused");
                    writeln!(out, "{}", json!({ "error": err.to_string() }))?;
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
