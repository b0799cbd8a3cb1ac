use std::time::Duration;

use ethers_core::types::Address;

use crate::command_options::CommonOptions;
use crate::contracts::Interface;
use crate::error::{Error, Result};
use crate::plan::CallPlan;
use crate::types::contract_data::ContractData;

/// Everything a run needs, resolved from the command line and environment.
#[derive(Debug)]
pub struct Config {
    pub address: Address,
    pub interface: Interface,
    pub rpc_url: String,
    pub private_key: String,
    pub artifact: Option<ContractData>,
    pub timeout: Duration,
    pub confirmations: usize,
    pub poll_interval: Duration,
}

impl Config {
    /// An explicit `--address` wins over the artifact's address.
    pub fn from_options(opt: &CommonOptions, default_interface: Interface) -> Result<Self> {
        let interface = match &opt.interface {
            Some(name) => name.parse()?,
            None => default_interface,
        };

        let artifact = opt
            .artifact
            .as_ref()
            .map(ContractData::from_file)
            .transpose()?;

        // An empty `GAME_ADDRESS=` in `.env` counts as not given.
        let explicit = opt.address.as_deref().filter(|s| !s.trim().is_empty());
        let address = match (explicit, artifact.as_ref().and_then(|a| a.contract_address())) {
            (Some(address), _) => parse_address(address)?,
            (None, Some(address)) => check_address(address)?,
            (None, None) => return Err(Error::InvalidAddress(String::new())),
        };

        let private_key = opt
            .private_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::Config("PRIVATE_KEY must be set".to_string()))?;

        if opt.timeout_secs == 0 {
            return Err(Error::Config("timeout must be at least one second".to_string()));
        }
        if opt.confirmations == 0 {
            return Err(Error::Config("confirmations must be at least 1".to_string()));
        }

        Ok(Config {
            address,
            interface,
            rpc_url: opt.rpc_url.clone(),
            private_key,
            artifact,
            timeout: Duration::from_secs(opt.timeout_secs),
            confirmations: opt.confirmations,
            poll_interval: Duration::from_millis(opt.poll_interval_ms),
        })
    }

    /// Checks `plan` against the bound interface and, when one was loaded,
    /// the artifact's ABI. Touches nothing remote.
    pub fn validate_plan(&self, plan: &CallPlan) -> Result<()> {
        plan.validate(self.interface.name(), self.interface.abi())?;
        if let Some(artifact) = &self.artifact {
            plan.validate("contract artifact", artifact.abi())?;
        }
        Ok(())
    }
}

pub fn parse_address(s: &str) -> Result<Address> {
    let trimmed = s.trim();
    let hex = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if hex.len() != 40 {
        return Err(Error::InvalidAddress(s.to_string()));
    }
    let address = hex
        .parse::<Address>()
        .map_err(|_| Error::InvalidAddress(s.to_string()))?;
    check_address(address)
}

fn check_address(address: Address) -> Result<Address> {
    if address.is_zero() {
        return Err(Error::InvalidAddress(format!("{:?}", address)));
    }
    Ok(address)
}
