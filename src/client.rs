use std::sync::Arc;

use async_trait::async_trait;
use ethers::middleware::SignerMiddleware;
use ethers::prelude::Provider;
use ethers::providers::{Http, Middleware, PendingTransaction};
use ethers_core::types::{Address, TransactionReceipt, TransactionRequest, TxHash};
use ethers_signers::{LocalWallet, Signer};
use log::{debug, info};

use crate::config::Config;
use crate::contracts::Interface;
use crate::error::{Error, Result};
use crate::plan::PlannedCall;

/// The remote side of a run: a contract that accepts calls and eventually
/// confirms them.
#[async_trait]
pub trait GameClient: Send + Sync {
    /// Fails when nothing callable lives at the bound address.
    async fn bind(&self, interface: Interface) -> Result<()>;

    async fn submit(&self, call: &PlannedCall) -> Result<TxHash>;

    /// Resolves to `None` if the transaction vanished before being mined.
    async fn confirm(&self, tx_hash: TxHash) -> Result<Option<TransactionReceipt>>;
}

#[async_trait]
impl<C: GameClient + ?Sized> GameClient for Arc<C> {
    async fn bind(&self, interface: Interface) -> Result<()> {
        (**self).bind(interface).await
    }

    async fn submit(&self, call: &PlannedCall) -> Result<TxHash> {
        (**self).submit(call).await
    }

    async fn confirm(&self, tx_hash: TxHash) -> Result<Option<TransactionReceipt>> {
        (**self).confirm(tx_hash).await
    }
}

pub type SignerClient = SignerMiddleware<Provider<Http>, LocalWallet>;

/// [`GameClient`] over any ethers middleware stack.
pub struct EthersClient<M> {
    client: Arc<M>,
    address: Address,
    confirmations: usize,
}

impl<M: Middleware> EthersClient<M> {
    pub fn new(client: Arc<M>, address: Address, confirmations: usize) -> Self {
        EthersClient {
            client,
            address,
            confirmations,
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }
}

#[async_trait]
impl<M: Middleware + 'static> GameClient for EthersClient<M> {
    async fn bind(&self, interface: Interface) -> Result<()> {
        let code = self
            .client
            .get_code(self.address, None)
            .await
            .map_err(|e| Error::Bind {
                address: self.address,
                message: e.to_string(),
            })?;
        if code.is_empty() {
            return Err(Error::NotDeployed(self.address));
        }
        info!("bound {} at {:?} ({} bytes of code)", interface, self.address, code.len());
        Ok(())
    }

    async fn submit(&self, call: &PlannedCall) -> Result<TxHash> {
        let tx = TransactionRequest::new()
            .to(self.address)
            .data(call.calldata().clone());
        let pending = self
            .client
            .send_transaction(tx, None)
            .await
            .map_err(|e| Error::Submit {
                call: call.signature().to_string(),
                message: e.to_string(),
            })?;
        let tx_hash = pending.tx_hash();
        debug!("{} sent as {:?}", call.signature(), tx_hash);
        Ok(tx_hash)
    }

    async fn confirm(&self, tx_hash: TxHash) -> Result<Option<TransactionReceipt>> {
        PendingTransaction::new(tx_hash, self.client.provider())
            .confirmations(self.confirmations)
            .await
            .map_err(|e| Error::Confirm {
                tx_hash,
                message: e.to_string(),
            })
    }
}

/// Builds the signing client described by `config`.
pub async fn connect(config: &Config) -> Result<EthersClient<SignerClient>> {
    let provider = Provider::<Http>::try_from(config.rpc_url.as_str())
        .map_err(|e| Error::Config(format!("invalid rpc url {}: {}", config.rpc_url, e)))?
        .interval(config.poll_interval);

    let wallet = config
        .private_key
        .trim()
        .parse::<LocalWallet>()
        .map_err(|e| Error::Config(format!("invalid private key: {}", e)))?;

    let client = SignerMiddleware::new_with_provider_chain(provider, wallet)
        .await
        .map_err(|e| Error::Bind {
            address: config.address,
            message: e.to_string(),
        })?;
    info!(
        "connected to {} as {:?} on chain {}",
        config.rpc_url,
        client.address(),
        client.signer().chain_id()
    );

    Ok(EthersClient::new(
        Arc::new(client),
        config.address,
        config.confirmations,
    ))
}
