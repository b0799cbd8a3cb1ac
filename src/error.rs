use std::time::Duration;

use ethers_core::types::{Address, TxHash};
use thiserror::Error;

/// Everything that can stop a run. The entry points treat every variant the
/// same way; the variants only exist to make the printed message useful.
#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid contract address {0:?}")]
    InvalidAddress(String),

    #[error("unknown interface {0:?}, expected Game2 or Game4")]
    UnknownInterface(String),

    #[error("failed to load contract artifact {path}: {message}")]
    Artifact { path: String, message: String },

    #[error("{interface} does not expose {signature}")]
    MissingFunction { interface: String, signature: String },

    #[error("call plan is empty")]
    EmptyPlan,

    #[error("failed to bind to {address:?}: {message}")]
    Bind { address: Address, message: String },

    #[error("no contract deployed at {0:?}")]
    NotDeployed(Address),

    #[error("failed to submit {call}: {message}")]
    Submit { call: String, message: String },

    #[error("failed to confirm {tx_hash:?}: {message}")]
    Confirm { tx_hash: TxHash, message: String },

    #[error("{call} reverted in transaction {tx_hash:?}")]
    Reverted { call: String, tx_hash: TxHash },

    #[error("transaction {tx_hash:?} was dropped before confirmation")]
    Dropped { tx_hash: TxHash },

    #[error("timed out after {timeout:?} waiting for {waiting_for}")]
    Timeout { waiting_for: String, timeout: Duration },

    #[error("failed to render receipt: {0}")]
    Output(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
