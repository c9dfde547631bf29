//! Calls from the marketplace into the CIS-2 NFT contract of a listing.
use super::*;

/// Current owner of `token`, as reported by its NFT contract.
pub fn owner_of<T>(host: &mut impl HasHost<T>, token: &Token) -> ContractResult<Address> {
    let mut response = host
        .invoke_contract(
            &token.contract,
            &token.id,
            EntrypointName::new_unchecked(OWNER_OF_ENTRYPOINT),
            Amount::zero(),
        )
        .map_err(CustomContractError::from)?
        .1
        .ok_or(CustomContractError::Incompatible)?;

    Address::deserial(&mut response).map_err(|_| CustomContractError::Incompatible.into())
}

/// Check if `marketplace` may transfer `token` on behalf of `owner`, either
/// as the approved address of the token or as an operator of the owner.
pub fn is_marketplace_approved<T>(
    host: &mut impl HasHost<T>,
    token: &Token,
    owner: Address,
    marketplace: ContractAddress,
) -> ContractResult<bool> {
    let marketplace = Address::Contract(marketplace);
    if get_approved(host, token)? == Some(marketplace) {
        return Ok(true);
    }
    is_operator(host, token, owner, marketplace)
}

/// The address approved for `token`, if any.
pub fn get_approved<T>(
    host: &mut impl HasHost<T>,
    token: &Token,
) -> ContractResult<Option<Address>> {
    let mut response = host
        .invoke_contract(
            &token.contract,
            &token.id,
            EntrypointName::new_unchecked(GET_APPROVED_ENTRYPOINT),
            Amount::zero(),
        )
        .map_err(CustomContractError::from)?
        .1
        .ok_or(CustomContractError::Incompatible)?;

    <Option<Address>>::deserial(&mut response)
        .map_err(|_| CustomContractError::Incompatible.into())
}

/// Check if `address` is an operator of `owner` in the NFT contract of `token`.
pub fn is_operator<T>(
    host: &mut impl HasHost<T>,
    token: &Token,
    owner: Address,
    address: Address,
) -> ContractResult<bool> {
    let params = OperatorOfQueryParams {
        queries: vec![OperatorOfQuery { owner, address }],
    };
    let mut response = host
        .invoke_contract(
            &token.contract,
            &params,
            EntrypointName::new_unchecked(OPERATOR_OF_ENTRYPOINT),
            Amount::zero(),
        )
        .map_err(CustomContractError::from)?
        .1
        .ok_or(CustomContractError::Incompatible)?;

    let response = OperatorOfQueryResponse::deserial(&mut response)
        .map_err(|_| CustomContractError::Incompatible)?;
    Ok(response.0.first().copied().unwrap_or(false))
}

/// Transfer `token` from `from` to the account `to`.
pub fn transfer<T>(
    host: &mut impl HasHost<T>,
    token: &Token,
    from: Address,
    to: AccountAddress,
) -> ContractResult<()> {
    let params: TransferParameter = TransferParams::from(vec![Transfer {
        token_id: token.id,
        amount: 1.into(),
        from,
        to: Receiver::from_account(to),
        data: AdditionalData::empty(),
    }]);
    host.invoke_contract(
        &token.contract,
        &params,
        EntrypointName::new_unchecked(TRANSFER_ENTRYPOINT),
        Amount::zero(),
    )
    .map_err(CustomContractError::from)?;

    Ok(())
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use commons::test::*;
    use test_infrastructure::*;

    const NFT_CONTRACT: ContractAddress = ContractAddress {
        index: 1,
        subindex: 0,
    };
    const MARKETPLACE: ContractAddress = ContractAddress {
        index: 2,
        subindex: 0,
    };
    const OWNER: Address = Address::Account(AccountAddress([0; 32]));
    const USER_1: AccountAddress = AccountAddress([1; 32]);

    fn token() -> Token {
        Token::new(NFT_CONTRACT, TokenIdU32(0))
    }

    fn mock_approvals(
        host: &mut TestHost<()>,
        approved: Option<Address>,
        operator: bool,
    ) {
        host.setup_mock_entrypoint(
            NFT_CONTRACT,
            OwnedEntrypointName::new_unchecked(GET_APPROVED_ENTRYPOINT.into()),
            parse_and_ok_mock::<ContractTokenId, _>(approved),
        );
        host.setup_mock_entrypoint(
            NFT_CONTRACT,
            OwnedEntrypointName::new_unchecked(OPERATOR_OF_ENTRYPOINT.into()),
            parse_and_map_mock::<OperatorOfQueryParams, _, _>(move |params| {
                Some(OperatorOfQueryResponse(vec![operator; params.queries.len()]))
            }),
        );
    }

    #[concordium_test]
    fn test_owner_of() {
        let mut host = TestHost::new((), TestStateBuilder::new());
        host.setup_mock_entrypoint(
            NFT_CONTRACT,
            OwnedEntrypointName::new_unchecked(OWNER_OF_ENTRYPOINT.into()),
            parse_and_ok_mock::<ContractTokenId, _>(OWNER),
        );

        claim_eq!(owner_of(&mut host, &token()), Ok(OWNER));
    }

    #[concordium_test]
    fn test_owner_of_missing_entrypoint() {
        let mut host = TestHost::new((), TestStateBuilder::new());
        host.setup_mock_entrypoint(
            NFT_CONTRACT,
            OwnedEntrypointName::new_unchecked(OWNER_OF_ENTRYPOINT.into()),
            MockFn::new(|_, _, _, _| Err(CallContractError::<()>::MissingEntrypoint)),
        );

        claim_eq!(
            owner_of(&mut host, &token()),
            Err(CustomContractError::Incompatible.into())
        );
    }

    #[concordium_test]
    fn test_approved_address() {
        let mut host = TestHost::new((), TestStateBuilder::new());
        mock_approvals(&mut host, Some(Address::Contract(MARKETPLACE)), false);

        claim_eq!(
            is_marketplace_approved(&mut host, &token(), OWNER, MARKETPLACE),
            Ok(true)
        );
    }

    #[concordium_test]
    fn test_approved_operator() {
        let mut host = TestHost::new((), TestStateBuilder::new());
        mock_approvals(&mut host, None, true);

        claim_eq!(
            is_marketplace_approved(&mut host, &token(), OWNER, MARKETPLACE),
            Ok(true)
        );
    }

    #[concordium_test]
    fn test_not_approved() {
        let mut host = TestHost::new((), TestStateBuilder::new());
        mock_approvals(&mut host, Some(Address::Account(USER_1)), false);

        claim_eq!(
            is_marketplace_approved(&mut host, &token(), OWNER, MARKETPLACE),
            Ok(false)
        );
    }

    #[concordium_test]
    fn test_transfer() {
        let mut host = TestHost::new((), TestStateBuilder::new());
        host.setup_mock_entrypoint(
            NFT_CONTRACT,
            OwnedEntrypointName::new_unchecked(TRANSFER_ENTRYPOINT.into()),
            parse_and_check_mock::<TransferParameter, _>(
                |params| {
                    params.0.len() == 1
                        && params.0[0].from == OWNER
                        && params.0[0].to.address() == Address::Account(USER_1)
                        && params.0[0].token_id == TokenIdU32(0)
                },
                (),
            ),
        );

        claim_eq!(transfer(&mut host, &token(), OWNER, USER_1), Ok(()));
    }
}
