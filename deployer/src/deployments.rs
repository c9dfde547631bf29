//! Registry of deployed contracts, one JSON file per contract and network.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::chain::ContractAddress;
use crate::error::{DeployError, Result};

/// A deployed contract instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    pub address: ContractAddress,
    pub module_reference: String,
    pub init_name: String,
    /// JSON schema of the module, copied to the frontend as its interface.
    pub schema: Option<PathBuf>,
}

/// Records under `<root>/<network>/<Name>.json`.
#[derive(Debug, Clone)]
pub struct Deployments {
    network: String,
    dir: PathBuf,
}

impl Deployments {
    pub fn new(root: &Path, network: &str) -> Self {
        Self {
            network: network.to_string(),
            dir: root.join(network),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }

    pub fn save(&self, name: &str, deployment: &Deployment) -> Result<()> {
        std::fs::create_dir_all(&self.dir).map_err(|source| DeployError::Write {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.path(name);
        let json = serde_json::to_string_pretty(deployment).map_err(|source| {
            DeployError::Json {
                path: path.clone(),
                source,
            }
        })?;
        std::fs::write(&path, json).map_err(|source| DeployError::Write { path, source })
    }

    /// The record of `name`, `NotDeployed` when there is none.
    pub fn get(&self, name: &str) -> Result<Deployment> {
        let path = self.path(name);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(DeployError::NotDeployed {
                    name: name.to_string(),
                    network: self.network.clone(),
                });
            }
            Err(source) => return Err(DeployError::Read { path, source }),
        };
        serde_json::from_str(&raw).map_err(|source| DeployError::Json { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deployment() -> Deployment {
        Deployment {
            address: ContractAddress {
                index: 4,
                subindex: 0,
            },
            module_reference: "ab".repeat(32),
            init_name: "NftMarketPlace".to_string(),
            schema: Some(PathBuf::from("schema.json")),
        }
    }

    #[test]
    fn save_then_get() {
        let root = tempfile::tempdir().unwrap();
        let deployments = Deployments::new(root.path(), "testnet");

        deployments.save("NftMarketPlace", &deployment()).unwrap();

        assert!(root.path().join("testnet/NftMarketPlace.json").exists());
        assert_eq!(deployments.get("NftMarketPlace").unwrap(), deployment());
    }

    #[test]
    fn missing_record_is_not_deployed() {
        let root = tempfile::tempdir().unwrap();
        let deployments = Deployments::new(root.path(), "testnet");

        let err = deployments.get("BasicNft").unwrap_err();

        assert!(matches!(
            err,
            DeployError::NotDeployed { ref name, ref network }
                if name == "BasicNft" && network == "testnet"
        ));
    }

    #[test]
    fn networks_are_separate() {
        let root = tempfile::tempdir().unwrap();
        Deployments::new(root.path(), "testnet")
            .save("NftMarketPlace", &deployment())
            .unwrap();

        assert!(Deployments::new(root.path(), "localhost")
            .get("NftMarketPlace")
            .is_err());
    }
}
