use std::path::PathBuf;

use clap::{Args, Parser};
use ethers_core::types::U256;

pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";

/// Options shared by every win script.
#[derive(Args, Debug, Clone)]
pub struct CommonOptions {
    /// Address of the deployed game contract.
    #[clap(long, env = "GAME_ADDRESS")]
    pub address: Option<String>,

    /// Interface to bind to (Game2 or Game4). Defaults to the script's own.
    #[clap(long)]
    pub interface: Option<String>,

    #[clap(long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Hex-encoded signing key.
    #[clap(long, env = "PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,

    /// JSON artifact with `contractAddress` and `abi`.
    #[clap(long)]
    pub artifact: Option<PathBuf>,

    /// Upper bound on each confirmation wait.
    #[clap(long, default_value = "120")]
    pub timeout_secs: u64,

    #[clap(long, default_value = "1")]
    pub confirmations: usize,

    #[clap(long, default_value = "1000")]
    pub poll_interval_ms: u64,
}

#[derive(Parser, Debug)]
#[clap(name = "win2", about = "Set x and y on a Game2 contract, then call win()")]
pub struct Win2Opt {
    #[clap(flatten)]
    pub common: CommonOptions,

    #[clap(long, default_value = "25", parse(try_from_str = parse_uint))]
    pub x: U256,

    #[clap(long, default_value = "25", parse(try_from_str = parse_uint))]
    pub y: U256,
}

/// Decimal, or hex with a `0x` prefix.
pub fn parse_uint(s: &str) -> Result<U256, String> {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) if !hex.is_empty() => hex.parse::<U256>().map_err(|e| e.to_string()),
        Some(_) => Err(format!("{:?} is not a number", s)),
        None => U256::from_dec_str(s).map_err(|e| e.to_string()),
    }
}

#[derive(Parser, Debug)]
#[clap(name = "win4", about = "Call win(value) on a Game4 contract")]
pub struct Win4Opt {
    #[clap(flatten)]
    pub common: CommonOptions,

    #[clap(long, default_value = "56")]
    pub value: u8,
}
