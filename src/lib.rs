//! Scripts that bind to a deployed game contract, send the calls that satisfy
//! its win condition, and print the final receipt.
//!
//! `win2` sets `x` and `y` on a `Game2` contract and then calls `win()`;
//! `win4` calls `win(56)` on a `Game4` contract. Every call waits for its
//! confirmation before the next one is submitted.

pub mod client;
pub mod command_options;
pub mod config;
pub mod contracts;
pub mod error;
pub mod plan;
pub mod receipt;
pub mod runner;
pub mod types;

use ethers_core::types::TransactionReceipt;
use log::error;

use crate::client::GameClient;

pub use crate::config::Config;
pub use crate::contracts::Interface;
pub use crate::error::{Error, Result};
pub use crate::plan::CallPlan;
pub use crate::runner::Runner;

/// Connects with `config` and runs `plan` against the configured contract.
pub async fn execute(config: &Config, plan: &CallPlan) -> Result<TransactionReceipt> {
    config.validate_plan(plan)?;
    let client = runner::bounded(
        config.timeout,
        format!("{} to answer", config.rpc_url),
        client::connect(config),
    )
    .await?;
    run_with(config, client, plan).await
}

/// Runs `plan` through an already connected `client`.
pub async fn run_with<C: GameClient>(
    config: &Config,
    client: C,
    plan: &CallPlan,
) -> Result<TransactionReceipt> {
    config.validate_plan(plan)?;
    Runner::new(client, config.timeout)
        .run(config.interface, plan)
        .await
}

/// Prints the outcome and returns the process exit status.
pub fn finish(result: Result<TransactionReceipt>) -> i32 {
    match result.and_then(|receipt| receipt::render(&receipt)) {
        Ok(rendered) => {
            println!("{}", rendered);
            0
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            1
        }
    }
}
