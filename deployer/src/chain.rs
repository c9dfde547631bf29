//! Access to a Concordium node through `concordium-client`.

use std::fmt;
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tokio::process::Command;

use crate::error::{DeployError, Result};

/// Delay between two polls of the finalized height.
const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Address of a contract instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractAddress {
    pub index: u64,
    pub subindex: u64,
}

impl fmt::Display for ContractAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{},{}>", self.index, self.subindex)
    }
}

#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Deploy a module and return its reference as hex.
    async fn deploy_module(&self, module: &Path, sender: &str) -> Result<String>;

    /// Create an instance of `init_name` from a deployed module with
    /// empty constructor arguments.
    async fn init_contract(
        &self,
        module_ref: &str,
        init_name: &str,
        sender: &str,
        energy: u64,
    ) -> Result<ContractAddress>;

    /// Height of the last finalized block.
    async fn finalized_height(&self) -> Result<u64>;
}

/// Wait until `confirmations` finalized blocks, counting the one at
/// `from_height`, are on the chain.
pub async fn wait_for_confirmations(
    client: &dyn ChainClient,
    from_height: u64,
    confirmations: u64,
) -> Result<u64> {
    let target = from_height + confirmations.saturating_sub(1);
    loop {
        let height = client.finalized_height().await?;
        if height >= target {
            return Ok(height);
        }
        tracing::debug!(height, target, "Waiting for confirmations");
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

/// Drives the `concordium-client` tool against a node.
#[derive(Debug, Clone)]
pub struct ConcordiumClient {
    binary: String,
    grpc_ip: String,
    grpc_port: u16,
}

impl ConcordiumClient {
    pub fn new(binary: impl Into<String>, grpc_ip: impl Into<String>, grpc_port: u16) -> Self {
        Self {
            binary: binary.into(),
            grpc_ip: grpc_ip.into(),
            grpc_port,
        }
    }

    /// Run the tool with `args` and return its standard output.
    async fn run(&self, args: &[&str]) -> Result<String> {
        let command = format!("{} {}", self.binary, args.join(" "));
        tracing::debug!(%command, "Running");

        let port = self.grpc_port.to_string();
        let output = Command::new(&self.binary)
            .args(args)
            .args(["--grpc-ip", self.grpc_ip.as_str(), "--grpc-port", port.as_str()])
            .output()
            .await
            .map_err(|source| DeployError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(DeployError::ClientFailed {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait]
impl ChainClient for ConcordiumClient {
    async fn deploy_module(&self, module: &Path, sender: &str) -> Result<String> {
        let module = module.to_string_lossy().into_owned();
        let output = self
            .run(&["module", "deploy", module.as_str(), "--sender", sender, "--no-confirm"])
            .await?;
        parse_module_reference(&output).ok_or_else(|| DeployError::UnexpectedOutput {
            command: "module deploy".to_string(),
            expected: "module reference",
        })
    }

    async fn init_contract(
        &self,
        module_ref: &str,
        init_name: &str,
        sender: &str,
        energy: u64,
    ) -> Result<ContractAddress> {
        let energy = energy.to_string();
        let output = self
            .run(&[
                "contract",
                "init",
                module_ref,
                "--contract",
                init_name,
                "--sender",
                sender,
                "--energy",
                energy.as_str(),
                "--no-confirm",
            ])
            .await?;
        parse_contract_address(&output).ok_or_else(|| DeployError::UnexpectedOutput {
            command: "contract init".to_string(),
            expected: "contract address",
        })
    }

    async fn finalized_height(&self) -> Result<u64> {
        let output = self.run(&["consensus", "status"]).await?;
        parse_finalized_height(&output).ok_or_else(|| DeployError::UnexpectedOutput {
            command: "consensus status".to_string(),
            expected: "last finalized block height",
        })
    }
}

static MODULE_REFERENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)reference:?\s*'?([0-9a-f]{64})").expect("valid regex")
});

static CONTRACT_ADDRESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"address:?\s*<(\d+),\s*(\d+)>").expect("valid regex"));

static FINALIZED_HEIGHT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Last finalized block height:\s*(\d+)").expect("valid regex")
});

/// Module reference printed by `module deploy`, also when the module
/// already exists on chain.
pub fn parse_module_reference(output: &str) -> Option<String> {
    MODULE_REFERENCE_RE
        .captures(output)
        .map(|caps| caps[1].to_lowercase())
}

/// Instance address printed by `contract init`.
pub fn parse_contract_address(output: &str) -> Option<ContractAddress> {
    let caps = CONTRACT_ADDRESS_RE.captures(output)?;
    Some(ContractAddress {
        index: caps[1].parse().ok()?,
        subindex: caps[2].parse().ok()?,
    })
}

/// Last finalized height printed by `consensus status`.
pub fn parse_finalized_height(output: &str) -> Option<u64> {
    FINALIZED_HEIGHT_RE.captures(output)?[1].parse().ok()
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::BTreeMap;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Mutex;

    use super::*;

    /// In-memory chain: each module deploy gets a fresh reference, each
    /// init a fresh index, and every height query advances one block.
    #[derive(Default)]
    pub struct MockChain {
        height: AtomicU64,
        pub modules: Mutex<Vec<PathBuf>>,
        pub instances: Mutex<BTreeMap<u64, String>>,
    }

    #[async_trait]
    impl ChainClient for MockChain {
        async fn deploy_module(&self, module: &Path, _sender: &str) -> Result<String> {
            let mut modules = self.modules.lock().unwrap();
            modules.push(module.to_path_buf());
            Ok(format!("{:064x}", modules.len()))
        }

        async fn init_contract(
            &self,
            _module_ref: &str,
            init_name: &str,
            _sender: &str,
            _energy: u64,
        ) -> Result<ContractAddress> {
            let mut instances = self.instances.lock().unwrap();
            let index = instances.len() as u64;
            instances.insert(index, init_name.to_string());
            Ok(ContractAddress { index, subindex: 0 })
        }

        async fn finalized_height(&self) -> Result<u64> {
            Ok(self.height.fetch_add(1, Ordering::SeqCst))
        }
    }

    #[test]
    fn parses_module_reference() {
        let output = "Deploying module....\nModule successfully deployed with reference: \
                      'd121f262f3d34b9737faa5ded2135cf0b994c9c32fe90d7f11fae7cd31441e86'.";

        assert_eq!(
            parse_module_reference(output).as_deref(),
            Some("d121f262f3d34b9737faa5ded2135cf0b994c9c32fe90d7f11fae7cd31441e86")
        );
        assert_eq!(parse_module_reference("Error: no such file"), None);
    }

    #[test]
    fn parses_contract_address() {
        let output = "Contract successfully initialized with address: <7123,0>.";

        assert_eq!(
            parse_contract_address(output),
            Some(ContractAddress {
                index: 7123,
                subindex: 0
            })
        );
    }

    #[test]
    fn parses_finalized_height() {
        let output = "Best block height:            1204\n\
                      Last finalized block height:  1201\n";

        assert_eq!(parse_finalized_height(output), Some(1201));
        assert_eq!(parse_finalized_height("Best block height: 3"), None);
    }

    #[test]
    fn contract_address_display() {
        let address = ContractAddress {
            index: 12,
            subindex: 0,
        };

        assert_eq!(address.to_string(), "<12,0>");
    }

    #[tokio::test]
    async fn waits_for_enough_blocks() {
        let chain = MockChain::default();

        let height = wait_for_confirmations(&chain, 0, 3).await.unwrap();

        assert_eq!(height, 2);
    }

    #[tokio::test]
    async fn single_confirmation_returns_immediately() {
        let chain = MockChain::default();

        let height = wait_for_confirmations(&chain, 0, 1).await.unwrap();

        assert_eq!(height, 0);
        assert_eq!(chain.finalized_height().await.unwrap(), 1);
    }
}
