//! Source verification on the block explorer.

use serde::Serialize;

use crate::chain::ContractAddress;
use crate::error::{DeployError, Result};

/// Path of the verification endpoint under the explorer URL.
const VERIFY_PATH: &str = "/api/v1/verify";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyRequest<'a> {
    module_reference: &'a str,
    contract_address: ContractAddress,
    init_name: &'a str,
    /// Constructor arguments, always empty for these contracts.
    args: &'a [String],
}

/// Outcome of a verification request that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verified {
    Now,
    Already,
}

pub struct ExplorerVerifier {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl ExplorerVerifier {
    pub fn new(explorer_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}{}", explorer_url.trim_end_matches('/'), VERIFY_PATH),
            api_key: api_key.into(),
        }
    }

    pub async fn verify(
        &self,
        module_reference: &str,
        address: ContractAddress,
        init_name: &str,
        args: &[String],
    ) -> Result<Verified> {
        let request = VerifyRequest {
            module_reference,
            contract_address: address,
            init_name,
            args,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        classify(status.is_success(), &body)
    }
}

/// An "already verified" rejection counts as success.
fn classify(success: bool, body: &str) -> Result<Verified> {
    if body.to_lowercase().contains("already verified") {
        tracing::info!("Already Verified!");
        return Ok(Verified::Already);
    }
    if success {
        Ok(Verified::Now)
    } else {
        Err(DeployError::Verification(body.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_verified() {
        assert_eq!(classify(true, "{\"status\":\"ok\"}").unwrap(), Verified::Now);
    }

    #[test]
    fn already_verified_is_not_an_error() {
        let body = "{\"error\":\"Contract source code Already Verified\"}";

        assert_eq!(classify(false, body).unwrap(), Verified::Already);
    }

    #[test]
    fn other_failures_propagate() {
        let err = classify(false, " invalid api key ").unwrap_err();

        assert!(matches!(err, DeployError::Verification(msg) if msg == "invalid api key"));
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let verifier = ExplorerVerifier::new("https://explorer.example/", "key");

        assert_eq!(verifier.endpoint, "https://explorer.example/api/v1/verify");
    }
}
