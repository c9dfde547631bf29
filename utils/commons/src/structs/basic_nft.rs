use super::*;

/// Parameter of the NFT contract function `approve`.
#[derive(Debug, Serialize, SchemaType, Clone, PartialEq, Eq)]
pub struct ApproveParams {
    /// Address allowed to transfer the token, `None` revokes the approval.
    pub approved: Option<Address>,
    /// Token to approve.
    pub token_id: ContractTokenId,
}
