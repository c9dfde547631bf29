use super::*;
use core::ops::DerefMut;

// Functions for creating, updating and querying the contract state.
impl<S: HasStateApi> State<S> {
    /// Creates a empty state with no tokens.
    pub fn empty(state_builder: &mut StateBuilder<S>) -> Self {
        State {
            owners: state_builder.new_map(),
            approvals: state_builder.new_map(),
            operators: state_builder.new_map(),
            token_counter: 0,
        }
    }

    /// Mint the next token of the counter to `owner`.
    /// Returns the id of the minted token.
    pub fn mint(&mut self, owner: Address) -> ContractResult<ContractTokenId> {
        let token_id = TokenIdU32(self.token_counter);
        self.token_counter = self
            .token_counter
            .checked_add(1)
            .ok_or(CustomContractError::TokenCounterOverflow)?;
        self.owners.insert(token_id, owner);
        Ok(token_id)
    }

    /// Check that the token ID currently exists in this contract.
    #[inline(always)]
    pub fn contains_token(&self, token_id: &ContractTokenId) -> bool {
        self.owners.get(token_id).is_some()
    }

    /// Current owner of the token.
    /// Results in an error if the token ID does not exist in the state.
    pub fn owner_of(&self, token_id: &ContractTokenId) -> ContractResult<Address> {
        self.owners
            .get(token_id)
            .map(|owner| *owner)
            .ok_or(ContractError::InvalidTokenId)
    }

    /// Get the current balance of a given token ID for a given address.
    /// Results in an error if the token ID does not exist in the state.
    /// Since this contract only contains NFTs, the balance will always be
    /// either 1 or 0.
    pub fn balance(
        &self,
        token_id: &ContractTokenId,
        address: &Address,
    ) -> ContractResult<ContractTokenAmount> {
        let owner = self.owner_of(token_id)?;
        Ok(if owner == *address { 1.into() } else { 0.into() })
    }

    /// Check if `address` is an operator of `owner`.
    pub fn is_operator(&self, owner: &Address, address: &Address) -> bool {
        self.operators
            .get(owner)
            .map(|operators| operators.contains(address))
            .unwrap_or(false)
    }

    /// The address approved to transfer the token, if any.
    /// Results in an error if the token ID does not exist in the state.
    pub fn approved(&self, token_id: &ContractTokenId) -> ContractResult<Option<Address>> {
        ensure!(self.contains_token(token_id), ContractError::InvalidTokenId);
        Ok(self.approvals.get(token_id).map(|approved| *approved))
    }

    /// Check if `address` is approved to transfer this particular token.
    pub fn is_approved(&self, token_id: &ContractTokenId, address: &Address) -> bool {
        self.approvals
            .get(token_id)
            .map(|approved| *approved == *address)
            .unwrap_or(false)
    }

    /// Replace the approval of a token, `None` clears it.
    pub fn approve(&mut self, token_id: ContractTokenId, approved: Option<Address>) {
        match approved {
            Some(address) => {
                self.approvals.insert(token_id, address);
            }
            None => self.approvals.remove(&token_id),
        }
    }

    /// Update the state with a transfer of some token.
    /// Results in an error if the token ID does not exist in the state or if
    /// the from address have insufficient tokens to do the transfer.
    /// A successful transfer of the token clears its approval.
    pub fn transfer(
        &mut self,
        token_id: &ContractTokenId,
        amount: ContractTokenAmount,
        from: &Address,
        to: &Address,
    ) -> ContractResult<()> {
        let owner = self.owner_of(token_id)?;

        // A zero transfer does not modify the state.
        if amount == 0.into() {
            return Ok(());
        }

        // Since this contract only contains NFTs, no one will have an amount
        // greater than 1. And since the amount cannot be the zero at this point,
        // the address must have insufficient funds for any amount other than 1.
        ensure_eq!(amount, 1.into(), ContractError::InsufficientFunds);
        ensure!(owner == *from, ContractError::InsufficientFunds);

        self.owners.insert(*token_id, *to);
        self.approvals.remove(token_id);
        Ok(())
    }

    /// Update the state adding a new operator for a given address.
    /// Succeeds even if the `operator` is already an operator for the
    /// `address`.
    pub fn add_operator(
        &mut self,
        owner: &Address,
        operator: &Address,
        state_builder: &mut StateBuilder<S>,
    ) {
        self.operators
            .entry(*owner)
            .or_insert_with(|| state_builder.new_set())
            .deref_mut()
            .insert(*operator);
    }

    /// Update the state removing an operator for a given address.
    /// Succeeds even if the `operator` is _not_ an operator for the `address`.
    pub fn remove_operator(&mut self, owner: &Address, operator: &Address) {
        self.operators
            .get_mut(owner)
            .map(|mut operators| operators.remove(operator));
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const ADDRESS_0: Address = Address::Account(AccountAddress([0u8; 32]));
    const ADDRESS_1: Address = Address::Account(AccountAddress([1u8; 32]));

    #[concordium_test]
    fn test_mint_counts_up() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = State::empty(&mut state_builder);

        claim_eq!(state.mint(ADDRESS_0), Ok(TokenIdU32(0)));
        claim_eq!(state.mint(ADDRESS_1), Ok(TokenIdU32(1)));
        claim_eq!(state.token_counter, 2);
        claim_eq!(state.owner_of(&TokenIdU32(1)), Ok(ADDRESS_1));
    }

    #[concordium_test]
    fn test_mint_counter_overflow() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = State::empty(&mut state_builder);
        state.token_counter = u32::MAX;

        claim_eq!(
            state.mint(ADDRESS_0),
            Err(CustomContractError::TokenCounterOverflow.into())
        );
    }

    #[concordium_test]
    fn test_transfer_clears_approval() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = State::empty(&mut state_builder);
        let token_id = state.mint(ADDRESS_0).expect_report("Failed to mint");
        state.approve(token_id, Some(ADDRESS_1));
        claim!(state.is_approved(&token_id, &ADDRESS_1));

        let result = state.transfer(&token_id, 1.into(), &ADDRESS_0, &ADDRESS_1);

        claim_eq!(result, Ok(()));
        claim_eq!(state.approved(&token_id), Ok(None));
        claim_eq!(state.balance(&token_id, &ADDRESS_1), Ok(1.into()));
        claim_eq!(state.balance(&token_id, &ADDRESS_0), Ok(0.into()));
    }

    #[concordium_test]
    fn test_transfer_from_non_owner() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = State::empty(&mut state_builder);
        let token_id = state.mint(ADDRESS_0).expect_report("Failed to mint");

        let result = state.transfer(&token_id, 1.into(), &ADDRESS_1, &ADDRESS_0);

        claim_eq!(result, Err(ContractError::InsufficientFunds));
        claim_eq!(state.owner_of(&token_id), Ok(ADDRESS_0));
    }

    #[concordium_test]
    fn test_approved_unknown_token() {
        let mut state_builder = TestStateBuilder::new();
        let state = State::empty(&mut state_builder);

        claim_eq!(
            state.approved(&TokenIdU32(7)),
            Err(ContractError::InvalidTokenId)
        );
    }
}
