//! table-card - drive a single table card against the POS API
//!
//! ```text
//! table-card <table-id> <number> <status> [action]
//! ```
//!
//! Mounts a card, prints it, optionally performs one action (e.g.
//! `free_table`, `print_bill`) and prints the card again.

use std::sync::Arc;

use anyhow::{Context, bail};
use table_client::logger::init_logger;
use table_client::{ActionOutcome, ClientConfig, Table, TableAction, TableCard, TableStatus};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenv::dotenv();

    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
    let json = std::env::var("LOG_JSON").is_ok_and(|v| v == "true" || v == "1");
    init_logger(&level, json)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 3 {
        bail!("usage: table-card <table-id> <number> <status> [action]");
    }
    let id: i64 = args[0].parse().context("invalid table id")?;
    let number: i32 = args[1].parse().context("invalid table number")?;
    let status = TableStatus::parse(&args[2]);
    let action = args
        .get(3)
        .map(|a| a.parse::<TableAction>())
        .transpose()
        .map_err(anyhow::Error::msg)?;

    let config = ClientConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Connecting to POS API");
    let api = Arc::new(config.build_http_client()?);

    let mut card = TableCard::mount(api, Table::new(id, number, status), |table_id| {
        tracing::info!(table_id, "Table freed");
    });
    print!("{}", card.render());

    let Some(action) = action else {
        return Ok(());
    };

    match card.perform(action).await {
        ActionOutcome::Navigate(path) => println!("-> {path}"),
        ActionOutcome::Committed(status) => tracing::info!(%status, "Status committed"),
        ActionOutcome::Abandoned => tracing::warn!(action = action.name(), "Action abandoned"),
        ActionOutcome::Unavailable => {
            bail!("'{}' is not available while the table is {}", action.name(), card.status())
        }
    }
    card.wait_bill_closed().await;
    print!("{}", card.render());

    Ok(())
}
