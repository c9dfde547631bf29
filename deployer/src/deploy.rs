//! Tagged deployment steps run in order against one network.

use crate::chain::{wait_for_confirmations, ChainClient};
use crate::config::{DeployConfig, EnvSettings, NetworkConfig};
use crate::deployments::{Deployment, Deployments};
use crate::error::Result;
use crate::frontend;
use crate::verify::ExplorerVerifier;

const SEPARATOR: &str = "--------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Deploy the named contract with empty constructor arguments.
    Contract(&'static str),
    /// Export addresses and interfaces to the frontend.
    Frontend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub name: &'static str,
    pub tags: &'static [&'static str],
    pub kind: StepKind,
}

pub const STEPS: [Step; 3] = [
    Step {
        name: "01-deploy-nft-marketplace",
        tags: &["all", "NftMarketPlace"],
        kind: StepKind::Contract("NftMarketPlace"),
    },
    Step {
        name: "02-deploy-basic-nft",
        tags: &["all", "basicNft"],
        kind: StepKind::Contract("BasicNft"),
    },
    Step {
        name: "99-update-frontend",
        tags: &["all", "frontend"],
        kind: StepKind::Frontend,
    },
];

/// Steps carrying any of `tags`, in order. No tags selects every step.
pub fn select_steps(tags: &[String]) -> Vec<Step> {
    STEPS
        .iter()
        .filter(|step| tags.is_empty() || step.tags.iter().any(|tag| tags.iter().any(|t| t == tag)))
        .copied()
        .collect()
}

pub struct Deployer<C> {
    client: C,
    config: DeployConfig,
    network_name: String,
    network: NetworkConfig,
    env: EnvSettings,
    deployments: Deployments,
}

impl<C: ChainClient> Deployer<C> {
    pub fn new(client: C, config: DeployConfig, network_name: &str, env: EnvSettings) -> Result<Self> {
        let network = config.network(network_name)?.clone();
        let deployments = Deployments::new(&config.deployments_dir, network_name);
        Ok(Self {
            client,
            config,
            network_name: network_name.to_string(),
            network,
            env,
            deployments,
        })
    }

    pub fn deployments(&self) -> &Deployments {
        &self.deployments
    }

    /// Run the steps selected by `tags`, stopping at the first failure.
    pub async fn run(&self, tags: &[String]) -> Result<()> {
        for step in select_steps(tags) {
            tracing::debug!(step = step.name, "Running step");
            match step.kind {
                StepKind::Contract(name) => {
                    self.deploy_contract(name).await?;
                }
                StepKind::Frontend => self.update_frontend()?,
            }
        }
        Ok(())
    }

    /// Verification needs a public network and an API key.
    pub fn should_verify(&self) -> bool {
        !self.config.is_development_chain(&self.network_name) && self.env.explorer_api_key.is_some()
    }

    /// Deploy `name`, wait for confirmations, record it and verify it.
    pub async fn deploy_contract(&self, name: &str) -> Result<Deployment> {
        tracing::info!("{SEPARATOR}");
        let contract = self.config.contract(name)?;
        let init_name = contract.init_name(name);
        let args: Vec<String> = Vec::new();

        let module_reference = self
            .client
            .deploy_module(&contract.module, &self.network.deployer)
            .await?;
        let address = self
            .client
            .init_contract(
                &module_reference,
                init_name,
                &self.network.deployer,
                self.network.energy,
            )
            .await?;
        tracing::info!(
            contract = name,
            %address,
            module_reference = %module_reference,
            "Deployed",
        );

        let from_height = self.client.finalized_height().await?;
        wait_for_confirmations(&self.client, from_height, self.network.block_confirmations).await?;

        let deployment = Deployment {
            address,
            module_reference,
            init_name: init_name.to_string(),
            schema: contract.schema.clone(),
        };
        self.deployments.save(name, &deployment)?;

        if self.should_verify() {
            if let (Some(explorer_url), Some(api_key)) =
                (&self.network.explorer_url, &self.env.explorer_api_key)
            {
                tracing::info!("verifying...");
                ExplorerVerifier::new(explorer_url, api_key.as_str())
                    .verify(&deployment.module_reference, address, init_name, &args)
                    .await?;
            } else {
                tracing::warn!(network = %self.network_name, "No explorer_url set, skipping verification");
            }
        }
        tracing::info!("{SEPARATOR}");
        Ok(deployment)
    }

    /// Export the marketplace address and both interfaces when enabled.
    pub fn update_frontend(&self) -> Result<()> {
        if !self.env.update_front_end {
            return Ok(());
        }
        tracing::info!("Updating front end");

        let marketplace = self.deployments.get(frontend::MARKETPLACE)?;
        frontend::update_contract_addresses(
            &self.config.frontend.contracts_file,
            &self.network.chain_id,
            &marketplace.address.to_string(),
        )?;
        frontend::update_abi(&self.config.frontend.abi_dir, &self.deployments)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use serde_json::json;

    use super::*;
    use crate::chain::tests::MockChain;

    fn config(root: &Path) -> DeployConfig {
        let raw = format!(
            r#"
deployments_dir = "{root}/deployments"

[frontend]
contracts_file = "{root}/networkMapping.json"
abi_dir = "{root}"

[networks.localhost]
chain_id = "31337"
grpc_ip = "127.0.0.1"
grpc_port = 20000
deployer = "deployer"
block_confirmations = 2

[networks.testnet]
chain_id = "1"
grpc_ip = "node.testnet.example"
grpc_port = 20000
deployer = "deployer"
explorer_url = "https://explorer.testnet.example"

[contracts.NftMarketPlace]
module = "nft_marketplace.wasm.v1"

[contracts.BasicNft]
module = "basic_nft.wasm.v1"
"#,
            root = root.display()
        );
        toml::from_str(&raw).unwrap()
    }

    fn tags(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|tag| tag.to_string()).collect()
    }

    #[test]
    fn selects_steps_by_tag() {
        let names = |tags: &[String]| -> Vec<&str> {
            select_steps(tags).iter().map(|step| step.name).collect()
        };

        assert_eq!(names(&[]).len(), 3);
        assert_eq!(names(&tags(&["all"])).len(), 3);
        assert_eq!(names(&tags(&["basicNft"])), vec!["02-deploy-basic-nft"]);
        assert_eq!(
            names(&tags(&["frontend", "NftMarketPlace"])),
            vec!["01-deploy-nft-marketplace", "99-update-frontend"]
        );
        assert!(names(&tags(&["unknown"])).is_empty());
    }

    #[test]
    fn verification_gate() {
        let root = tempfile::tempdir().unwrap();
        let with_key = EnvSettings {
            explorer_api_key: Some("key".to_string()),
            update_front_end: false,
        };

        let dev = Deployer::new(MockChain::default(), config(root.path()), "localhost", with_key.clone())
            .unwrap();
        assert!(!dev.should_verify());

        let public = Deployer::new(MockChain::default(), config(root.path()), "testnet", with_key).unwrap();
        assert!(public.should_verify());

        let no_key = Deployer::new(
            MockChain::default(),
            config(root.path()),
            "testnet",
            EnvSettings::default(),
        )
        .unwrap();
        assert!(!no_key.should_verify());
    }

    #[test]
    fn unknown_network_is_rejected() {
        let root = tempfile::tempdir().unwrap();

        let result = Deployer::new(
            MockChain::default(),
            config(root.path()),
            "mainnet",
            EnvSettings::default(),
        );

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn deploys_and_records_contract() {
        let root = tempfile::tempdir().unwrap();
        let deployer = Deployer::new(
            MockChain::default(),
            config(root.path()),
            "localhost",
            EnvSettings::default(),
        )
        .unwrap();

        let deployment = deployer.deploy_contract("NftMarketPlace").await.unwrap();

        assert_eq!(deployment.init_name, "NftMarketPlace");
        assert_eq!(deployer.deployments().get("NftMarketPlace").unwrap(), deployment);
        assert_eq!(
            deployer.client.instances.lock().unwrap().get(&0).map(String::as_str),
            Some("NftMarketPlace")
        );
    }

    #[tokio::test]
    async fn frontend_step_is_skipped_without_flag() {
        let root = tempfile::tempdir().unwrap();
        let deployer = Deployer::new(
            MockChain::default(),
            config(root.path()),
            "localhost",
            EnvSettings::default(),
        )
        .unwrap();

        deployer.run(&tags(&["all"])).await.unwrap();

        assert_eq!(deployer.client.modules.lock().unwrap().len(), 2);
        assert!(!root.path().join("networkMapping.json").exists());
    }

    #[tokio::test]
    async fn full_run_updates_frontend() {
        let root = tempfile::tempdir().unwrap();
        let env = EnvSettings {
            explorer_api_key: None,
            update_front_end: true,
        };
        let deployer = Deployer::new(MockChain::default(), config(root.path()), "localhost", env).unwrap();

        deployer.run(&[]).await.unwrap();

        let mapping: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(root.path().join("networkMapping.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(mapping, json!({ "31337": { "NftMarketPlace": ["<0,0>"] } }));
        assert!(root.path().join("NftMarketPlace.json").exists());
        assert!(root.path().join("BasicNft.json").exists());
    }

    #[tokio::test]
    async fn frontend_without_marketplace_fails() {
        let root = tempfile::tempdir().unwrap();
        let env = EnvSettings {
            explorer_api_key: None,
            update_front_end: true,
        };
        let deployer = Deployer::new(MockChain::default(), config(root.path()), "localhost", env).unwrap();

        assert!(deployer.run(&tags(&["frontend"])).await.is_err());
    }
}
