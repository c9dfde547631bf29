//! Deployment of the `NftMarketPlace` and `BasicNft` contracts to a
//! Concordium node, explorer verification and frontend sync.

pub mod chain;
pub mod config;
pub mod deploy;
pub mod deployments;
pub mod error;
pub mod frontend;
pub mod verify;

pub use chain::{ChainClient, ConcordiumClient, ContractAddress};
pub use config::{DeployConfig, EnvSettings};
pub use deploy::{select_steps, Deployer, Step, StepKind, STEPS};
pub use error::{DeployError, Result};
