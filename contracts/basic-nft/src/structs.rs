use super::*;

/// The contract state.
#[derive(Serial, DeserialWithState)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Current owner of every minted token.
    pub owners: StateMap<ContractTokenId, Address, S>,
    /// The single address approved to transfer a token, if any.
    pub approvals: StateMap<ContractTokenId, Address, S>,
    /// Operators for each owner address.
    pub operators: StateMap<Address, StateSet<Address, S>, S>,
    /// Id of the next token to mint.
    pub token_counter: u32,
}
