use ethers_core::types::TransactionReceipt;
use log::info;

use crate::error::Result;

/// Pretty JSON for manual inspection. Whether the game was actually won is
/// left to whoever reads the logs.
pub fn render(receipt: &TransactionReceipt) -> Result<String> {
    info!(
        "transaction {:?} mined in block {} with {} log(s)",
        receipt.transaction_hash,
        receipt.block_number.unwrap_or_default(),
        receipt.logs.len()
    );
    Ok(serde_json::to_string_pretty(receipt)?)
}
