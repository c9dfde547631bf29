use super::*;

// Functions for creating and updating the contract state.
impl<S: HasStateApi> State<S> {
    /// Creates a new state with no listings and no proceeds.
    pub fn empty(state_builder: &mut StateBuilder<S>) -> Self {
        Self {
            listings: state_builder.new_map(),
            proceeds: state_builder.new_map(),
        }
    }

    /// Fails with `AlreadyListed` if the token has a listing.
    pub fn ensure_not_listed(&self, token: &Token) -> ContractResult<()> {
        ensure!(
            self.listings.get(token).is_none(),
            CustomContractError::AlreadyListed.into()
        );
        Ok(())
    }

    /// The listing of a token, fails with `NotListed` if there is none.
    pub fn listing(&self, token: &Token) -> ContractResult<Listing> {
        self.listings
            .get(token)
            .map(|listing| *listing)
            .ok_or_else(|| CustomContractError::NotListed.into())
    }

    /// Add a new listing.
    pub fn list(&mut self, token: Token, listing: Listing) {
        self.listings.insert(token, listing);
    }

    /// Change the price of an existing listing.
    /// Returns the updated listing.
    pub fn update_price(&mut self, token: &Token, new_price: Amount) -> ContractResult<Listing> {
        let mut listing = self.listing(token)?;
        listing.price = new_price;
        self.listings.insert(*token, listing);
        Ok(listing)
    }

    /// Remove a listing and fails with `NotListed`, if token is not listed.
    /// Returns the removed listing if successful.
    pub fn unlist(&mut self, token: &Token) -> ContractResult<Listing> {
        self.listings
            .remove_and_get(token)
            .ok_or_else(|| CustomContractError::NotListed.into())
    }

    /// Proceeds owed to `seller`, zero if none.
    pub fn proceeds_of(&self, seller: &AccountAddress) -> Amount {
        self.proceeds
            .get(seller)
            .map(|amount| *amount)
            .unwrap_or_else(Amount::zero)
    }

    /// Credit `amount` to the proceeds of `seller`.
    pub fn add_proceeds(&mut self, seller: AccountAddress, amount: Amount) {
        let balance = self.proceeds_of(&seller) + amount;
        self.proceeds.insert(seller, balance);
    }

    /// Reset the proceeds of `seller` to zero.
    /// Returns the amount that was owed, fails with `NoProceeds` if nothing was.
    pub fn take_proceeds(&mut self, seller: &AccountAddress) -> ContractResult<Amount> {
        let amount = self.proceeds_of(seller);
        ensure!(
            amount > Amount::zero(),
            CustomContractError::NoProceeds.into()
        );
        self.proceeds.remove(seller);
        Ok(amount)
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const SELLER: AccountAddress = AccountAddress([0u8; 32]);
    const NFT_CONTRACT: ContractAddress = ContractAddress {
        index: 1,
        subindex: 0,
    };

    fn token() -> Token {
        Token::new(NFT_CONTRACT, TokenIdU32(0))
    }

    #[concordium_test]
    fn test_list_and_unlist() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = State::empty(&mut state_builder);
        let listing = Listing {
            price: Amount::from_ccd(1),
            seller: SELLER,
        };

        claim_eq!(state.ensure_not_listed(&token()), Ok(()));
        state.list(token(), listing);
        claim_eq!(
            state.ensure_not_listed(&token()),
            Err(CustomContractError::AlreadyListed.into())
        );
        claim_eq!(state.listing(&token()), Ok(listing));

        claim_eq!(state.unlist(&token()), Ok(listing));
        claim_eq!(
            state.unlist(&token()),
            Err(CustomContractError::NotListed.into())
        );
    }

    #[concordium_test]
    fn test_update_price_keeps_seller() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = State::empty(&mut state_builder);
        state.list(
            token(),
            Listing {
                price: Amount::from_ccd(1),
                seller: SELLER,
            },
        );

        let updated = state
            .update_price(&token(), Amount::from_ccd(2))
            .expect_report("Listing should exist");

        claim_eq!(updated.price, Amount::from_ccd(2));
        claim_eq!(updated.seller, SELLER);
        claim_eq!(state.listing(&token()), Ok(updated));
    }

    #[concordium_test]
    fn test_proceeds_accumulate_and_reset() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = State::empty(&mut state_builder);

        claim_eq!(
            state.take_proceeds(&SELLER),
            Err(CustomContractError::NoProceeds.into())
        );

        state.add_proceeds(SELLER, Amount::from_ccd(1));
        state.add_proceeds(SELLER, Amount::from_ccd(2));
        claim_eq!(state.proceeds_of(&SELLER), Amount::from_ccd(3));

        claim_eq!(state.take_proceeds(&SELLER), Ok(Amount::from_ccd(3)));
        claim_eq!(state.proceeds_of(&SELLER), Amount::zero());
    }
}
