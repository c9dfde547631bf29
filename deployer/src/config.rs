//! `deploy.toml` and environment settings.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{DeployError, Result};

/// Default path of the config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "deploy.toml";

/// Enables explorer verification when set.
pub const EXPLORER_API_KEY_VAR: &str = "EXPLORER_API_KEY";

/// Enables the frontend sync step when set to a non-empty value.
pub const UPDATE_FRONT_END_VAR: &str = "UPDATE_FRONT_END";

#[derive(Debug, Clone, Deserialize)]
pub struct DeployConfig {
    /// Networks on which verification is always skipped.
    #[serde(default = "default_development_chains")]
    pub development_chains: Vec<String>,

    /// Root of the deployments registry.
    #[serde(default = "default_deployments_dir")]
    pub deployments_dir: PathBuf,

    /// The `concordium-client` executable.
    #[serde(default = "default_client_binary")]
    pub client_binary: String,

    #[serde(default)]
    pub frontend: FrontendConfig,

    #[serde(default)]
    pub networks: BTreeMap<String, NetworkConfig>,

    #[serde(default)]
    pub contracts: BTreeMap<String, ContractConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FrontendConfig {
    /// Network map of deployed marketplace addresses.
    #[serde(default = "default_contracts_file")]
    pub contracts_file: PathBuf,

    /// Directory receiving the contract interface files.
    #[serde(default = "default_abi_dir")]
    pub abi_dir: PathBuf,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            contracts_file: default_contracts_file(),
            abi_dir: default_abi_dir(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    /// Key of this network in the frontend network map.
    pub chain_id: String,
    pub grpc_ip: String,
    pub grpc_port: u16,
    #[serde(default = "default_block_confirmations")]
    pub block_confirmations: u64,
    /// Account name or address sending the deployment transactions.
    pub deployer: String,
    #[serde(default = "default_energy")]
    pub energy: u64,
    /// Base URL of the block explorer, required for verification.
    pub explorer_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContractConfig {
    /// Built `.wasm.v1` module.
    pub module: PathBuf,
    /// JSON schema exported by the build.
    pub schema: Option<PathBuf>,
    /// Contract name inside the module, the table key when unset.
    pub init_name: Option<String>,
}

impl DeployConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| DeployError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw, path)
    }

    fn parse(raw: &str, path: &Path) -> Result<Self> {
        toml::from_str(raw).map_err(|source| DeployError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn network(&self, name: &str) -> Result<&NetworkConfig> {
        self.networks
            .get(name)
            .ok_or_else(|| DeployError::UnknownNetwork(name.to_string()))
    }

    pub fn contract(&self, name: &str) -> Result<&ContractConfig> {
        self.contracts
            .get(name)
            .ok_or_else(|| DeployError::UnknownContract(name.to_string()))
    }

    pub fn is_development_chain(&self, network: &str) -> bool {
        self.development_chains.iter().any(|chain| chain == network)
    }
}

impl ContractConfig {
    pub fn init_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.init_name.as_deref().unwrap_or(name)
    }
}

/// Switches read from the environment after `.env` is loaded.
#[derive(Debug, Clone, Default)]
pub struct EnvSettings {
    pub explorer_api_key: Option<String>,
    pub update_front_end: bool,
}

impl EnvSettings {
    pub fn from_env() -> Self {
        Self {
            explorer_api_key: non_empty_var(EXPLORER_API_KEY_VAR),
            update_front_end: non_empty_var(UPDATE_FRONT_END_VAR).is_some(),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

fn default_development_chains() -> Vec<String> {
    vec!["local".to_string(), "localhost".to_string()]
}

fn default_deployments_dir() -> PathBuf {
    PathBuf::from("deployments")
}

fn default_client_binary() -> String {
    "concordium-client".to_string()
}

fn default_contracts_file() -> PathBuf {
    PathBuf::from("../nextjs-nft-marketplace-thegraph/constants/networkMapping.json")
}

fn default_abi_dir() -> PathBuf {
    PathBuf::from("../nextjs-nft-marketplace-thegraph/constants/")
}

fn default_block_confirmations() -> u64 {
    1
}

fn default_energy() -> u64 {
    30_000
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[networks.testnet]
chain_id = "1"
grpc_ip = "node.testnet.concordium.com"
grpc_port = 20000
deployer = "deployer"
explorer_url = "https://explorer.testnet.example"

[contracts.NftMarketPlace]
module = "contracts/nft-marketplace/module.wasm.v1"
"#;

    #[test]
    fn applies_defaults() {
        let config = DeployConfig::parse(MINIMAL, Path::new("deploy.toml")).unwrap();

        assert_eq!(config.development_chains, vec!["local", "localhost"]);
        assert_eq!(config.deployments_dir, PathBuf::from("deployments"));
        assert_eq!(config.client_binary, "concordium-client");
        assert_eq!(
            config.frontend.contracts_file,
            PathBuf::from("../nextjs-nft-marketplace-thegraph/constants/networkMapping.json")
        );

        let network = config.network("testnet").unwrap();
        assert_eq!(network.block_confirmations, 1);
        assert_eq!(network.energy, 30_000);
        assert_eq!(network.grpc_port, 20000);

        let contract = config.contract("NftMarketPlace").unwrap();
        assert_eq!(contract.init_name("NftMarketPlace"), "NftMarketPlace");
        assert!(contract.schema.is_none());
    }

    #[test]
    fn unknown_names_are_errors() {
        let config = DeployConfig::parse(MINIMAL, Path::new("deploy.toml")).unwrap();

        assert!(matches!(
            config.network("mainnet"),
            Err(DeployError::UnknownNetwork(name)) if name == "mainnet"
        ));
        assert!(matches!(
            config.contract("BasicNft"),
            Err(DeployError::UnknownContract(_))
        ));
    }

    #[test]
    fn development_chains() {
        let config = DeployConfig::parse(MINIMAL, Path::new("deploy.toml")).unwrap();

        assert!(config.is_development_chain("localhost"));
        assert!(!config.is_development_chain("testnet"));
    }

    #[test]
    fn invalid_toml_reports_path() {
        let err = DeployConfig::parse("networks = 3", Path::new("bad.toml")).unwrap_err();

        assert!(err.to_string().contains("bad.toml"));
    }
}
