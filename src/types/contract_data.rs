use std::fs;
use std::path::Path;

use ethers::abi::{Abi, Address};
use serde::Deserialize;

use crate::error::{Error, Result};

/// Deployment artifact: where the contract lives and what it exposes.
#[derive(Deserialize, Debug)]
pub struct ContractData {
    #[serde(default, alias = "contractAddress", alias = "address")]
    pub(crate) contract_address: Option<Address>,
    pub(crate) abi: Abi,
}

impl ContractData {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let artifact_error = |message: String| Error::Artifact {
            path: path.display().to_string(),
            message,
        };
        let contents = fs::read_to_string(path).map_err(|e| artifact_error(e.to_string()))?;
        serde_json::from_str(&contents).map_err(|e| artifact_error(e.to_string()))
    }

    pub fn contract_address(&self) -> Option<Address> {
        self.contract_address
    }

    pub fn abi(&self) -> &Abi {
        &self.abi
    }
}
