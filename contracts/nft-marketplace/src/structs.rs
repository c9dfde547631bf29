use super::*;

/// The contract state.
#[derive(Serial, DeserialWithState)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Active listings keyed by token.
    pub listings: StateMap<Token, Listing, S>,
    /// Amount owed to each seller after its sales.
    pub proceeds: StateMap<AccountAddress, Amount, S>,
}
