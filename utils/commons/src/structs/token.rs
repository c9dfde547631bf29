use super::*;

/// A token, globally identified by its contract and its id in that contract.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq, Clone, Copy)]
pub struct Token {
    pub contract: ContractAddress,
    pub id: ContractTokenId,
}

impl Token {
    #[inline(always)]
    pub fn new(contract: ContractAddress, id: ContractTokenId) -> Self {
        Self { contract, id }
    }
}
