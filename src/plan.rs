use ethers::contract::EthCall;
use ethers_core::abi::{Abi, AbiEncode};
use ethers_core::types::{Bytes, Selector, U256};

use crate::contracts::{game2, game4};
use crate::error::{Error, Result};

/// One state-changing call, already ABI-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCall {
    signature: String,
    selector: Selector,
    calldata: Bytes,
}

impl PlannedCall {
    pub fn new<C: EthCall + AbiEncode>(call: C) -> Self {
        PlannedCall {
            signature: C::abi_signature().into_owned(),
            selector: C::selector(),
            calldata: Bytes::from(call.encode()),
        }
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn selector(&self) -> Selector {
        self.selector
    }

    pub fn calldata(&self) -> &Bytes {
        &self.calldata
    }
}

/// Calls to submit, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallPlan {
    calls: Vec<PlannedCall>,
}

impl CallPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then<C: EthCall + AbiEncode>(mut self, call: C) -> Self {
        self.calls.push(PlannedCall::new(call));
        self
    }

    pub fn calls(&self) -> &[PlannedCall] {
        &self.calls
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Checks every call against `abi` by selector.
    pub fn validate(&self, interface: &str, abi: &Abi) -> Result<()> {
        if self.calls.is_empty() {
            return Err(Error::EmptyPlan);
        }
        for call in &self.calls {
            if !abi.functions().any(|f| f.short_signature() == call.selector) {
                return Err(Error::MissingFunction {
                    interface: interface.to_string(),
                    signature: call.signature.clone(),
                });
            }
        }
        Ok(())
    }
}

/// `setX(x)`, `setY(y)`, then `win()`.
pub fn game2_win(x: U256, y: U256) -> CallPlan {
    CallPlan::new()
        .then(game2::SetXCall { x })
        .then(game2::SetYCall { y })
        .then(game2::WinCall)
}

pub fn game4_win(y: u8) -> CallPlan {
    CallPlan::new().then(game4::WinCall { y })
}
