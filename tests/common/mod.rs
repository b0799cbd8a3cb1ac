use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use ethers_core::types::{Address, Log, TransactionReceipt, TxHash, H256, U64};
use ethers_core::utils::keccak256;
use game_win_scripts::client::GameClient;
use game_win_scripts::plan::PlannedCall;
use game_win_scripts::{Error, Interface, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Bound(Interface),
    Submitted(String),
    Rejected(String),
    Confirmed(String),
    Reverted(String),
    Dropped(String),
}

#[derive(Default)]
struct State {
    events: Vec<Event>,
    pending: HashMap<TxHash, String>,
    applied: Vec<String>,
    nonce: u64,
}

/// In-memory game contract. Records every interaction and panics if a call is
/// submitted while an earlier one is still unconfirmed.
#[derive(Default)]
pub struct MockGame {
    address: Address,
    undeployed: bool,
    rejecting: HashSet<String>,
    reverting: HashSet<String>,
    dropping: HashSet<String>,
    stalling: HashSet<String>,
    unresponsive: HashSet<String>,
    state: Mutex<State>,
}

impl MockGame {
    pub fn new() -> Self {
        MockGame {
            address: Address::repeat_byte(0x42),
            ..Default::default()
        }
    }

    pub fn undeployed(mut self) -> Self {
        self.undeployed = true;
        self
    }

    pub fn rejecting(mut self, signature: &str) -> Self {
        self.rejecting.insert(signature.to_string());
        self
    }

    pub fn reverting(mut self, signature: &str) -> Self {
        self.reverting.insert(signature.to_string());
        self
    }

    pub fn dropping(mut self, signature: &str) -> Self {
        self.dropping.insert(signature.to_string());
        self
    }

    pub fn stalling(mut self, signature: &str) -> Self {
        self.stalling.insert(signature.to_string());
        self
    }

    /// Submissions of `signature` never get an answer from the node.
    pub fn unresponsive(mut self, signature: &str) -> Self {
        self.unresponsive.insert(signature.to_string());
        self
    }

    pub fn events(&self) -> Vec<Event> {
        self.state.lock().unwrap().events.clone()
    }

    /// Calls whose effects landed on chain.
    pub fn applied(&self) -> Vec<String> {
        self.state.lock().unwrap().applied.clone()
    }

    fn winner_log(&self) -> Log {
        Log {
            address: self.address,
            topics: vec![H256::from(keccak256("Winner(address)"))],
            data: vec![0u8; 32].into(),
            ..Default::default()
        }
    }
}

#[async_trait]
impl GameClient for MockGame {
    async fn bind(&self, interface: Interface) -> Result<()> {
        if self.undeployed {
            return Err(Error::NotDeployed(self.address));
        }
        self.state.lock().unwrap().events.push(Event::Bound(interface));
        Ok(())
    }

    async fn submit(&self, call: &PlannedCall) -> Result<TxHash> {
        let signature = call.signature().to_string();
        if self.unresponsive.contains(&signature) {
            std::future::pending::<()>().await;
        }

        let mut state = self.state.lock().unwrap();
        assert!(
            state.pending.is_empty(),
            "{} submitted while {:?} is unconfirmed",
            signature,
            state.pending.values().collect::<Vec<_>>()
        );

        if self.rejecting.contains(&signature) {
            state.events.push(Event::Rejected(signature.clone()));
            return Err(Error::Submit {
                call: signature,
                message: "execution reverted".to_string(),
            });
        }

        state.nonce += 1;
        let tx_hash = H256::from_low_u64_be(state.nonce);
        state.pending.insert(tx_hash, signature.clone());
        state.events.push(Event::Submitted(signature));
        Ok(tx_hash)
    }

    async fn confirm(&self, tx_hash: TxHash) -> Result<Option<TransactionReceipt>> {
        let signature = {
            let state = self.state.lock().unwrap();
            state
                .pending
                .get(&tx_hash)
                .cloned()
                .expect("confirming a transaction that was never submitted")
        };

        if self.stalling.contains(&signature) {
            std::future::pending::<()>().await;
        }

        let mut state = self.state.lock().unwrap();
        state.pending.remove(&tx_hash);

        if self.dropping.contains(&signature) {
            state.events.push(Event::Dropped(signature));
            return Ok(None);
        }

        let reverted = self.reverting.contains(&signature);
        let logs = if !reverted && signature.starts_with("win(") {
            vec![self.winner_log()]
        } else {
            Vec::new()
        };
        if reverted {
            state.events.push(Event::Reverted(signature));
        } else {
            state.applied.push(signature.clone());
            state.events.push(Event::Confirmed(signature));
        }

        Ok(Some(TransactionReceipt {
            transaction_hash: tx_hash,
            block_number: Some(U64::from(state.nonce)),
            to: Some(self.address),
            status: Some(if reverted { U64::zero() } else { U64::one() }),
            logs,
            ..Default::default()
        }))
    }
}
