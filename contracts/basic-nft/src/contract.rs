use super::*;

/// Initialize contract instance with no tokens initially.
#[init(contract = "BasicNft")]
fn init<S: HasStateApi>(
    _ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    // Construct the initial contract state.
    Ok(State::empty(state_builder))
}

/// Mint the next token of the counter with the sender as its owner.
/// Logs a `Mint` and a `TokenMetadata` event and returns the new token id.
///
/// It rejects if:
/// - The token counter is exhausted.
/// - Fails to log Mint event
/// - Fails to log TokenMetadata event
#[receive(
    contract = "BasicNft",
    name = "mintNft",
    return_value = "ContractTokenId",
    mutable,
    enable_logger
)]
fn mint_nft<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<ContractTokenId> {
    let owner = ctx.sender();
    let token_id = host.state_mut().mint(owner)?;

    // Event for minted NFT.
    logger.log(&Cis2Event::Mint(MintEvent {
        token_id,
        amount: ContractTokenAmount::from(1),
        owner,
    }))?;

    // Metadata URL for the NFT.
    logger.log(&token_metadata_event(token_id))?;

    Ok(token_id)
}

/// Approve a single address to transfer one token, or clear the approval
/// when `approved` is `None`. Logs an `Approval` event.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The token does not exist.
/// - The sender is neither the owner nor an operator of the owner.
/// - Fails to log event.
#[receive(
    contract = "BasicNft",
    name = "approve",
    parameter = "ApproveParams",
    mutable,
    enable_logger
)]
fn approve<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params: ApproveParams = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();
    let state = host.state_mut();

    let owner = state.owner_of(&params.token_id)?;
    ensure!(
        owner == sender || state.is_operator(&owner, &sender),
        CustomContractError::Unauthorized.into()
    );

    state.approve(params.token_id, params.approved);

    logger.log(&CustomEvent::Approval(ApprovalEvent {
        token_id: params.token_id,
        owner,
        approved: params.approved,
    }))?;

    Ok(())
}

/// Address approved to transfer the given token, if any.
///
/// It rejects if the token does not exist.
#[receive(
    contract = "BasicNft",
    name = "getApproved",
    parameter = "ContractTokenId",
    return_value = "Option<Address>"
)]
fn get_approved<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Option<Address>> {
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    host.state().approved(&token_id)
}

/// Owner of the given token.
///
/// It rejects if the token does not exist.
#[receive(
    contract = "BasicNft",
    name = "ownerOf",
    parameter = "ContractTokenId",
    return_value = "Address"
)]
fn owner_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Address> {
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    host.state().owner_of(&token_id)
}

/// Number of tokens minted so far, which is also the id of the next token.
#[receive(contract = "BasicNft", name = "getTokenCounter", return_value = "u32")]
fn get_token_counter<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<u32> {
    Ok(host.state().token_counter)
}

/// Execute a list of token transfers, in the order of the list.
///
/// Logs a `Transfer` event for each transfer in the list.
/// Produces an action which sends a message to each contract which are the
/// receiver of a transfer.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Any of the transfers fail to be executed, which could be if:
///     - The `token_id` does not exist.
///     - The sender is not the owner of the token, an operator of the owner
///       or the address approved for this specific `token_id`.
///     - The token is not owned by the `from`.
/// - Fails to log event.
/// - Any of the messages sent to contracts receiving a transfer choose to
///   reject.
#[receive(
    contract = "BasicNft",
    name = "transfer",
    parameter = "TransferParameter",
    mutable,
    enable_logger
)]
fn transfer<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let TransferParams(transfers): TransferParameter = ctx.parameter_cursor().get()?;
    // Get the sender who invoked this contract function.
    let sender = ctx.sender();

    for transfer in transfers {
        let state = host.state_mut();
        // Authenticate the sender for this transfer
        ensure!(
            transfer.from == sender
                || state.is_operator(&transfer.from, &sender)
                || state.is_approved(&transfer.token_id, &sender),
            ContractError::Unauthorized
        );

        let to_address = transfer.to.address();
        // Update the contract state
        state.transfer(&transfer.token_id, transfer.amount, &transfer.from, &to_address)?;

        // Log transfer event
        logger.log(&Cis2Event::Transfer(TransferEvent {
            token_id: transfer.token_id,
            amount: transfer.amount,
            from: transfer.from,
            to: to_address,
        }))?;

        // If the receiver is a contract, we add sending it a message to the list of
        // actions.
        if let Receiver::Contract(address, entrypoint_name) = transfer.to {
            let parameter = OnReceivingCis2Params {
                token_id: transfer.token_id,
                amount: transfer.amount,
                from: transfer.from,
                data: transfer.data,
            };

            host.invoke_contract(
                &address,
                &parameter,
                entrypoint_name.as_entrypoint_name(),
                Amount::zero(),
            )
            .map_err(CustomContractError::from)?;
        }
    }
    Ok(())
}

/// Enable or disable addresses as operators of the sender address.
/// Logs an `UpdateOperator` event.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Fails to log event.
#[receive(
    contract = "BasicNft",
    name = "updateOperator",
    parameter = "UpdateOperatorParams",
    mutable,
    enable_logger
)]
fn update_operator<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let UpdateOperatorParams(params) = ctx.parameter_cursor().get()?;
    // Get the sender who invoked this contract function.
    let sender = ctx.sender();

    let (state, state_builder) = host.state_and_builder();
    for param in params {
        // Update the operator in the state.
        match param.update {
            OperatorUpdate::Add => state.add_operator(&sender, &param.operator, state_builder),
            OperatorUpdate::Remove => state.remove_operator(&sender, &param.operator),
        }

        // Log the appropriate event
        logger.log(
            &Cis2Event::<ContractTokenId, ContractTokenAmount>::UpdateOperator(
                UpdateOperatorEvent {
                    owner: sender,
                    operator: param.operator,
                    update: param.update,
                },
            ),
        )?;
    }

    Ok(())
}

/// Takes a list of queries. Each query is an owner address and some address to
/// check as an operator of the owner address.
///
/// It rejects if:
/// - It fails to parse the parameter.
#[receive(
    contract = "BasicNft",
    name = "operatorOf",
    parameter = "OperatorOfQueryParams",
    return_value = "OperatorOfQueryResponse"
)]
fn operator_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<OperatorOfQueryResponse> {
    // Parse the parameter.
    let params: OperatorOfQueryParams = ctx.parameter_cursor().get()?;
    // Build the response.
    let state = host.state();
    let response = params
        .queries
        .iter()
        .map(|query| state.is_operator(&query.owner, &query.address))
        .collect::<Vec<_>>();

    Ok(OperatorOfQueryResponse::from(response))
}

/// Get the balance of given token IDs and addresses.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Any of the queried `token_id` does not exist.
#[receive(
    contract = "BasicNft",
    name = "balanceOf",
    parameter = "ContractBalanceOfQueryParams",
    return_value = "ContractBalanceOfQueryResponse"
)]
fn balance_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ContractBalanceOfQueryResponse> {
    // Parse the parameter.
    let params: ContractBalanceOfQueryParams = ctx.parameter_cursor().get()?;
    // Build the response.
    let mut response = Vec::with_capacity(params.queries.len());
    let state = host.state();
    for query in params.queries {
        // Query the state for balance.
        let amount = state.balance(&query.token_id, &query.address)?;
        response.push(amount);
    }

    Ok(ContractBalanceOfQueryResponse::from(response))
}

/// Get the token metadata URLs of the given token IDs. Every token shares
/// the same metadata.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Any of the queried `token_id` does not exist.
#[receive(
    contract = "BasicNft",
    name = "tokenMetadata",
    parameter = "ContractTokenMetadataQueryParams",
    return_value = "TokenMetadataQueryResponse"
)]
fn token_metadata<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<TokenMetadataQueryResponse> {
    let params: ContractTokenMetadataQueryParams = ctx.parameter_cursor().get()?;
    let state = host.state();
    let mut response = Vec::with_capacity(params.queries.len());
    for token_id in params.queries {
        ensure!(state.contains_token(&token_id), ContractError::InvalidTokenId);
        response.push(token_metadata_url());
    }

    Ok(TokenMetadataQueryResponse::from(response))
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const ACCOUNT_0: AccountAddress = AccountAddress([0u8; 32]);
    const ADDRESS_0: Address = Address::Account(ACCOUNT_0);
    const ACCOUNT_1: AccountAddress = AccountAddress([1u8; 32]);
    const ADDRESS_1: Address = Address::Account(ACCOUNT_1);
    const MARKETPLACE: ContractAddress = ContractAddress {
        index: 1,
        subindex: 0,
    };

    fn token_0() -> ContractTokenId {
        TokenIdU32(0)
    }

    fn token_1() -> ContractTokenId {
        TokenIdU32(1)
    }

    /// Test helper function which creates a contract state with `token_0`
    /// owned by `ADDRESS_0` and `token_1` owned by `ADDRESS_1`.
    fn initial_state<S: HasStateApi>(state_builder: &mut StateBuilder<S>) -> State<S> {
        let mut state = State::empty(state_builder);
        state.mint(ADDRESS_0).expect_report("Failed to mint token_0");
        state.mint(ADDRESS_1).expect_report("Failed to mint token_1");
        state
    }

    fn transfer_params(from: Address, to: AccountAddress, token_id: ContractTokenId) -> Vec<u8> {
        to_bytes(&TransferParams::from(vec![Transfer {
            token_id,
            amount: ContractTokenAmount::from(1),
            from,
            to: Receiver::from_account(to),
            data: AdditionalData::empty(),
        }]))
    }

    /// Test initialization succeeds.
    #[concordium_test]
    fn test_init() {
        // Setup the context
        let ctx = TestInitContext::empty();
        let mut builder = TestStateBuilder::new();

        // Call the contract function.
        let result = init(&ctx, &mut builder);

        // Check the result
        let state = result.expect_report("Contract initialization failed");

        // Check the state
        claim_eq!(state.token_counter, 0, "No token should be minted");
        claim_eq!(state.owners.iter().count(), 0, "No token should be owned");
    }

    /// Test minting, ensuring the new token is owned by the sender and the
    /// appropriate events are logged.
    #[concordium_test]
    fn test_mint_nft() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = State::empty(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result = mint_nft(&ctx, &mut host, &mut logger);

        // Check the result
        claim_eq!(result, Ok(token_0()));

        // Check the state
        claim_eq!(host.state().token_counter, 1);
        claim_eq!(host.state().owner_of(&token_0()), Ok(ADDRESS_0));

        // Check the logs
        claim_eq!(logger.logs.len(), 2, "Mint and metadata events expected");
        claim_eq!(
            logger.logs[0],
            to_bytes(&Cis2Event::Mint(MintEvent {
                owner: ADDRESS_0,
                token_id: token_0(),
                amount: ContractTokenAmount::from(1),
            })),
            "Expected an event for minting token_0"
        );
        claim_eq!(logger.logs[1], to_bytes(&token_metadata_event(token_0())));

        // A second mint gets the next id.
        ctx.set_sender(ADDRESS_1);
        claim_eq!(mint_nft(&ctx, &mut host, &mut logger), Ok(token_1()));
        claim_eq!(host.state().owner_of(&token_1()), Ok(ADDRESS_1));
    }

    /// Test the owner can approve a single address and read it back.
    #[concordium_test]
    fn test_approve() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);
        let parameter_bytes = to_bytes(&ApproveParams {
            approved: Some(Address::Contract(MARKETPLACE)),
            token_id: token_0(),
        });
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        let result = approve(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));

        claim_eq!(
            logger.logs[0],
            to_bytes(&CustomEvent::Approval(ApprovalEvent {
                token_id: token_0(),
                owner: ADDRESS_0,
                approved: Some(Address::Contract(MARKETPLACE)),
            }))
        );

        let parameter_bytes = to_bytes(&token_0());
        ctx.set_parameter(&parameter_bytes);
        claim_eq!(
            get_approved(&ctx, &host),
            Ok(Some(Address::Contract(MARKETPLACE)))
        );
    }

    /// Test approving with `None` revokes the previous approval.
    #[concordium_test]
    fn test_approve_revoke() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);
        let parameter_bytes = to_bytes(&ApproveParams {
            approved: None,
            token_id: token_0(),
        });
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder);
        state.approve(token_0(), Some(Address::Contract(MARKETPLACE)));
        let mut host = TestHost::new(state, state_builder);

        claim_eq!(approve(&ctx, &mut host, &mut logger), Ok(()));
        claim_eq!(host.state().approved(&token_0()), Ok(None));
    }

    /// Test only the owner or its operators can approve.
    #[concordium_test]
    fn test_approve_not_owner() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1);
        let parameter_bytes = to_bytes(&ApproveParams {
            approved: Some(ADDRESS_1),
            token_id: token_0(),
        });
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        let result = approve(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(CustomContractError::Unauthorized.into()));
        claim_eq!(host.state().approved(&token_0()), Ok(None));

        // An operator of the owner may approve.
        let (state, state_builder) = host.state_and_builder();
        state.add_operator(&ADDRESS_0, &ADDRESS_1, state_builder);
        claim_eq!(approve(&ctx, &mut host, &mut logger), Ok(()));
        claim_eq!(host.state().approved(&token_0()), Ok(Some(ADDRESS_1)));
    }

    /// Test `ownerOf` rejects unknown tokens.
    #[concordium_test]
    fn test_owner_of() {
        let mut ctx = TestReceiveContext::empty();
        let parameter_bytes = to_bytes(&token_1());
        ctx.set_parameter(&parameter_bytes);

        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let host = TestHost::new(state, state_builder);

        claim_eq!(owner_of(&ctx, &host), Ok(ADDRESS_1));

        let parameter_bytes = to_bytes(&TokenIdU32(42));
        ctx.set_parameter(&parameter_bytes);
        claim_eq!(owner_of(&ctx, &host), Err(ContractError::InvalidTokenId));
    }

    /// Test transfer succeeds, when `from` is the sender.
    #[concordium_test]
    fn test_transfer_account() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);
        let parameter_bytes = transfer_params(ADDRESS_0, ACCOUNT_1, token_0());
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ContractResult<()> = self::transfer(&ctx, &mut host, &mut logger);
        // Check the result.
        claim!(result.is_ok(), "Results in rejection");
        claim_eq!(host.state().owner_of(&token_0()), Ok(ADDRESS_1));

        // Check the logs.
        claim_eq!(logger.logs.len(), 1, "Only one event should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(&Cis2Event::Transfer(TransferEvent {
                from: ADDRESS_0,
                to: ADDRESS_1,
                token_id: token_0(),
                amount: ContractTokenAmount::from(1),
            })),
            "Incorrect event emitted"
        )
    }

    /// Test transfer token fails, when sender is neither the owner, an
    /// operator of the owner nor approved for the token.
    #[concordium_test]
    fn test_transfer_not_authorized() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1);
        let parameter_bytes = transfer_params(ADDRESS_0, ACCOUNT_1, token_0());
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ContractResult<()> = self::transfer(&ctx, &mut host, &mut logger);
        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Unauthorized,
            "Error is expected to be Unauthorized"
        )
    }

    /// Test the address approved for a token can transfer it once, and the
    /// approval is gone afterwards.
    #[concordium_test]
    fn test_approved_transfer() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Contract(MARKETPLACE));
        let parameter_bytes = transfer_params(ADDRESS_0, ACCOUNT_1, token_0());
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder);
        state.approve(token_0(), Some(Address::Contract(MARKETPLACE)));
        let mut host = TestHost::new(state, state_builder);

        claim_eq!(self::transfer(&ctx, &mut host, &mut logger), Ok(()));
        claim_eq!(host.state().owner_of(&token_0()), Ok(ADDRESS_1));
        claim_eq!(host.state().approved(&token_0()), Ok(None));

        // The approval does not extend to other tokens.
        let parameter_bytes = transfer_params(ADDRESS_1, ACCOUNT_0, token_1());
        ctx.set_parameter(&parameter_bytes);
        claim_eq!(
            self::transfer(&ctx, &mut host, &mut logger),
            Err(ContractError::Unauthorized)
        );
    }

    /// Test transfer succeeds when sender is not the owner, but is an operator
    /// of the owner.
    #[concordium_test]
    fn test_operator_transfer() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1);
        let parameter_bytes = transfer_params(ADDRESS_0, ACCOUNT_1, token_0());
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder);
        state.add_operator(&ADDRESS_0, &ADDRESS_1, &mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ContractResult<()> = self::transfer(&ctx, &mut host, &mut logger);

        // Check the result.
        claim!(result.is_ok(), "Results in rejection");

        // Check the state.
        let balance0 = host
            .state()
            .balance(&token_0(), &ADDRESS_0)
            .expect_report("Token is expected to exist");
        let balance1 = host
            .state()
            .balance(&token_0(), &ADDRESS_1)
            .expect_report("Token is expected to exist");
        claim_eq!(
            balance0,
            ContractTokenAmount::from(0),
            "Token owner balance should be decreased by the transferred amount."
        );
        claim_eq!(
            balance1,
            ContractTokenAmount::from(1),
            "Token receiver balance should be increased by the transferred amount."
        );
    }

    /// Test adding an operator succeeds and the appropriate event is logged.
    #[concordium_test]
    fn test_add_operator() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);

        // and parameter.
        let update = UpdateOperator {
            update: OperatorUpdate::Add,
            operator: ADDRESS_1,
        };
        let parameter = UpdateOperatorParams(vec![update]);
        let parameter_bytes = to_bytes(&parameter);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = State::empty(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ContractResult<()> = update_operator(&ctx, &mut host, &mut logger);

        // Check the result.
        claim!(result.is_ok(), "Results in rejection");

        // Check the state.
        let is_operator = host.state().is_operator(&ADDRESS_0, &ADDRESS_1);
        claim!(is_operator, "Account should be an operator");

        // Check the logs.
        claim_eq!(logger.logs.len(), 1, "One event should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(
                &Cis2Event::<ContractTokenId, ContractTokenAmount>::UpdateOperator(
                    UpdateOperatorEvent {
                        owner: ADDRESS_0,
                        operator: ADDRESS_1,
                        update: OperatorUpdate::Add,
                    }
                )
            ),
            "Incorrect event emitted"
        );

        // Query it back through `operatorOf`.
        let parameter_bytes = to_bytes(&OperatorOfQueryParams {
            queries: vec![
                OperatorOfQuery {
                    owner: ADDRESS_0,
                    address: ADDRESS_1,
                },
                OperatorOfQuery {
                    owner: ADDRESS_1,
                    address: ADDRESS_0,
                },
            ],
        });
        ctx.set_parameter(&parameter_bytes);
        let response = operator_of(&ctx, &host).expect_report("Operator query failed");
        claim_eq!(response.0, vec![true, false]);
    }

    /// Test every token points at the shared metadata.
    #[concordium_test]
    fn test_token_metadata() {
        let mut ctx = TestReceiveContext::empty();
        let parameter_bytes = to_bytes(&ContractTokenMetadataQueryParams {
            queries: vec![token_0(), token_1()],
        });
        ctx.set_parameter(&parameter_bytes);

        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let host = TestHost::new(state, state_builder);

        let result = token_metadata(&ctx, &host).expect_report("Metadata query failed");
        claim_eq!(result.0.len(), 2);
        claim_eq!(result.0[0].url, String::from(TOKEN_URI));
    }
}
