//! Sync of deployed addresses and contract interfaces into the frontend.

use std::path::Path;

use serde_json::{json, Map, Value};

use crate::deployments::{Deployment, Deployments};
use crate::error::{DeployError, Result};

/// Contract whose addresses are tracked in the network map.
pub const MARKETPLACE: &str = "NftMarketPlace";

/// Contracts whose interfaces are exported.
pub const EXPORTED_CONTRACTS: [&str; 2] = ["NftMarketPlace", "BasicNft"];

/// Record `address` under `chain_id` in the network map at `path`.
///
/// The address is appended to the chain's `NftMarketPlace` list unless it is
/// already there. Other entries of the map are kept. A missing file is an
/// empty map.
pub fn update_contract_addresses(path: &Path, chain_id: &str, address: &str) -> Result<()> {
    let mut addresses = read_network_map(path)?;

    let chain = addresses
        .entry(chain_id.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !chain.is_object() {
        *chain = Value::Object(Map::new());
    }
    let list = chain
        .as_object_mut()
        .map(|contracts| {
            contracts
                .entry(MARKETPLACE.to_string())
                .or_insert_with(|| Value::Array(Vec::new()))
        })
        .and_then(|list| {
            if !list.is_array() {
                *list = Value::Array(Vec::new());
            }
            list.as_array_mut()
        });

    if let Some(list) = list {
        if !list.iter().any(|known| known.as_str() == Some(address)) {
            list.push(Value::String(address.to_string()));
        }
    }

    let json = serde_json::to_string(&addresses).map_err(|source| DeployError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json).map_err(|source| DeployError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn read_network_map(path: &Path) -> Result<Map<String, Value>> {
    match std::fs::read_to_string(path) {
        Ok(raw) => serde_json::from_str(&raw).map_err(|source| DeployError::Json {
            path: path.to_path_buf(),
            source,
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
        Err(source) => Err(DeployError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Write `<abi_dir>/<Name>.json` for every exported contract.
pub fn update_abi(abi_dir: &Path, deployments: &Deployments) -> Result<()> {
    for name in EXPORTED_CONTRACTS {
        let interface = interface(&deployments.get(name)?)?;
        let path = abi_dir.join(format!("{name}.json"));
        let json = serde_json::to_string(&interface).map_err(|source| DeployError::Json {
            path: path.clone(),
            source,
        })?;
        std::fs::write(&path, json).map_err(|source| DeployError::Write { path, source })?;
    }
    Ok(())
}

/// Interface description of a deployed contract: its name, module and the
/// schema exported by the build, `null` when the build exported none.
fn interface(deployment: &Deployment) -> Result<Value> {
    let schema = match &deployment.schema {
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|source| DeployError::Read {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str(&raw).map_err(|source| DeployError::Json {
                path: path.clone(),
                source,
            })?
        }
        None => Value::Null,
    };

    Ok(json!({
        "contractName": deployment.init_name,
        "moduleReference": deployment.module_reference,
        "schema": schema,
    }))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::chain::ContractAddress;

    fn read_json(path: &Path) -> Value {
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn missing_file_starts_empty_map() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("networkMapping.json");

        update_contract_addresses(&path, "1", "<5,0>").unwrap();

        assert_eq!(read_json(&path), json!({ "1": { "NftMarketPlace": ["<5,0>"] } }));
    }

    #[test]
    fn appends_new_address_for_known_chain() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("networkMapping.json");
        std::fs::write(
            &path,
            r#"{"1":{"NftMarketPlace":["<5,0>"],"BasicNft":["<6,0>"]},"2":{"NftMarketPlace":["<1,0>"]}}"#,
        )
        .unwrap();

        update_contract_addresses(&path, "1", "<7,0>").unwrap();

        assert_eq!(
            read_json(&path),
            json!({
                "1": { "NftMarketPlace": ["<5,0>", "<7,0>"], "BasicNft": ["<6,0>"] },
                "2": { "NftMarketPlace": ["<1,0>"] },
            })
        );
    }

    #[test]
    fn known_address_is_not_duplicated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("networkMapping.json");

        update_contract_addresses(&path, "1", "<5,0>").unwrap();
        update_contract_addresses(&path, "1", "<5,0>").unwrap();

        assert_eq!(read_json(&path), json!({ "1": { "NftMarketPlace": ["<5,0>"] } }));
    }

    #[test]
    fn chain_without_marketplace_list_gets_one() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("networkMapping.json");
        std::fs::write(&path, r#"{"1":{"BasicNft":["<6,0>"]}}"#).unwrap();

        update_contract_addresses(&path, "1", "<5,0>").unwrap();

        assert_eq!(
            read_json(&path),
            json!({ "1": { "BasicNft": ["<6,0>"], "NftMarketPlace": ["<5,0>"] } })
        );
    }

    #[test]
    fn malformed_map_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("networkMapping.json");
        std::fs::write(&path, "not json").unwrap();

        let err = update_contract_addresses(&path, "1", "<5,0>").unwrap_err();

        assert!(matches!(err, DeployError::Json { .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "not json");
    }

    #[test]
    fn writes_interfaces_of_both_contracts() {
        let dir = tempfile::tempdir().unwrap();
        let schema = dir.path().join("schema.json");
        std::fs::write(&schema, r#"{"contracts":{"NftMarketPlace":{}}}"#).unwrap();

        let deployments = Deployments::new(&dir.path().join("deployments"), "testnet");
        for (index, (name, schema)) in [
            ("NftMarketPlace", Some(schema.clone())),
            ("BasicNft", None::<PathBuf>),
        ]
        .into_iter()
        .enumerate()
        {
            deployments
                .save(
                    name,
                    &Deployment {
                        address: ContractAddress {
                            index: index as u64,
                            subindex: 0,
                        },
                        module_reference: "cd".repeat(32),
                        init_name: name.to_string(),
                        schema,
                    },
                )
                .unwrap();
        }

        update_abi(dir.path(), &deployments).unwrap();

        let marketplace = read_json(&dir.path().join("NftMarketPlace.json"));
        assert_eq!(marketplace["contractName"], "NftMarketPlace");
        assert_eq!(marketplace["schema"], json!({ "contracts": { "NftMarketPlace": {} } }));
        let nft = read_json(&dir.path().join("BasicNft.json"));
        assert_eq!(nft["contractName"], "BasicNft");
        assert!(nft["schema"].is_null());
    }

    #[test]
    fn abi_needs_deployments() {
        let dir = tempfile::tempdir().unwrap();
        let deployments = Deployments::new(dir.path(), "testnet");

        let err = update_abi(dir.path(), &deployments).unwrap_err();

        assert!(matches!(err, DeployError::NotDeployed { .. }));
    }
}
