use std::future::Future;
use std::time::Duration;

use ethers_core::types::{TransactionReceipt, TxHash, U64};
use log::{debug, info};

use crate::client::GameClient;
use crate::contracts::Interface;
use crate::error::{Error, Result};
use crate::plan::{CallPlan, PlannedCall};

/// Submits a plan one call at a time, waiting for each confirmation before
/// sending the next. Nothing is retried and nothing is undone on failure.
///
/// Every remote step (bind, each submission, each confirmation) is bounded by
/// the same timeout.
pub struct Runner<C> {
    client: C,
    timeout: Duration,
}

impl<C: GameClient> Runner<C> {
    pub fn new(client: C, timeout: Duration) -> Self {
        Runner { client, timeout }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Returns the receipt of the last call in `plan`.
    pub async fn run(&self, interface: Interface, plan: &CallPlan) -> Result<TransactionReceipt> {
        plan.validate(interface.name(), interface.abi())?;
        self.bounded(format!("{} to bind", interface), self.client.bind(interface))
            .await?;

        let mut last = None;
        for (index, call) in plan.calls().iter().enumerate() {
            info!("[{}/{}] submitting {}", index + 1, plan.len(), call.signature());
            let tx_hash = self
                .bounded(
                    format!("{} to be accepted", call.signature()),
                    self.client.submit(call),
                )
                .await?;
            let receipt = self.wait_for(call, tx_hash).await?;
            info!(
                "[{}/{}] {} confirmed in block {}",
                index + 1,
                plan.len(),
                call.signature(),
                receipt.block_number.unwrap_or_default()
            );
            last = Some(receipt);
        }
        last.ok_or(Error::EmptyPlan)
    }

    async fn wait_for(&self, call: &PlannedCall, tx_hash: TxHash) -> Result<TransactionReceipt> {
        debug!("waiting up to {:?} for {:?}", self.timeout, tx_hash);
        let receipt = self
            .bounded(format!("{:?} to confirm", tx_hash), self.client.confirm(tx_hash))
            .await?
            .ok_or(Error::Dropped { tx_hash })?;

        // Receipts from before byzantium carry no status.
        if receipt.status == Some(U64::zero()) {
            return Err(Error::Reverted {
                call: call.signature().to_string(),
                tx_hash,
            });
        }
        Ok(receipt)
    }

    async fn bounded<T, F>(&self, waiting_for: String, step: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        bounded(self.timeout, waiting_for, step).await
    }
}

/// Runs `step`, failing with [`Error::Timeout`] once `timeout` elapses.
pub async fn bounded<T, F>(timeout: Duration, waiting_for: String, step: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::time::timeout(timeout, step)
        .await
        .map_err(|_| Error::Timeout {
            waiting_for,
            timeout,
        })?
}
