use super::*;

/// Initialize a marketplace with no listings.
#[init(contract = "NftMarketPlace")]
fn init<S: HasStateApi>(
    _ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    Ok(State::empty(state_builder))
}

/// List a token for sale at a fixed price. The token stays with its owner,
/// who must have approved this contract to transfer it.
/// Logs an `ItemListed` event.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The token is already listed.
/// - The sender does not own the token or is a contract.
/// - The price is zero.
/// - The marketplace is neither approved for the token nor an operator of
/// the owner.
/// - The NFT contract does not answer as a CIS2 NFT.
/// - Fails to log event.
#[receive(
    contract = "NftMarketPlace",
    name = "listItem",
    parameter = "ListItemParams",
    mutable,
    enable_logger
)]
fn list_item<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params: ListItemParams = ctx.parameter_cursor().get()?;
    let token = params.token();
    host.state().ensure_not_listed(&token)?;

    let sender = ctx.sender();
    let owner = owner_of(host, &token)?;
    ensure_eq!(owner, sender, CustomContractError::NotOwner.into());
    // Proceeds are only paid to accounts, so contracts cannot list.
    let seller = match sender {
        Address::Account(address) => address,
        Address::Contract(_) => bail!(CustomContractError::NotOwner.into()),
    };

    ensure!(
        params.price > Amount::zero(),
        CustomContractError::PriceMustBeAboveZero.into()
    );
    ensure!(
        is_marketplace_approved(host, &token, owner, ctx.self_address())?,
        CustomContractError::NotApprovedForMarketplace.into()
    );

    host.state_mut().list(
        token,
        Listing {
            price: params.price,
            seller,
        },
    );

    logger.log(&MarketplaceEvent::ItemListed(ItemListedEvent {
        seller,
        nft_address: params.nft_address,
        token_id: params.token_id,
        price: params.price,
    }))?;

    Ok(())
}

/// Remove the listing of a token. Only the current owner of the token can
/// cancel. Logs an `ItemCanceled` event.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The sender does not own the token.
/// - The token is not listed.
/// - Fails to log event.
#[receive(
    contract = "NftMarketPlace",
    name = "cancelListing",
    parameter = "ItemParams",
    mutable,
    enable_logger
)]
fn cancel_listing<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params: ItemParams = ctx.parameter_cursor().get()?;
    let token = params.token();

    let sender = ctx.sender();
    ensure_eq!(
        owner_of(host, &token)?,
        sender,
        CustomContractError::NotOwner.into()
    );
    host.state_mut().unlist(&token)?;

    logger.log(&MarketplaceEvent::ItemCanceled(ItemCanceledEvent {
        seller: sender,
        nft_address: params.nft_address,
        token_id: params.token_id,
    }))?;

    Ok(())
}

/// Buy a listed token by attaching at least its price. The whole attached
/// amount is credited to the seller's proceeds, the listing is removed and
/// the token is transferred from the seller to the buyer.
/// Logs an `ItemBought` event.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The token is not listed.
/// - The attached amount is below the price.
/// - The sender is a contract.
/// - The NFT contract rejects the transfer.
/// - Fails to log event.
#[receive(
    contract = "NftMarketPlace",
    name = "buyItem",
    parameter = "ItemParams",
    mutable,
    payable,
    enable_logger
)]
fn buy_item<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params: ItemParams = ctx.parameter_cursor().get()?;
    let token = params.token();

    let listing = host.state().listing(&token)?;
    ensure!(
        amount >= listing.price,
        CustomContractError::PriceNotMet.into()
    );
    let buyer = match ctx.sender() {
        Address::Account(address) => address,
        Address::Contract(_) => bail!(CustomContractError::OnlyAccountAddress.into()),
    };

    // State is settled before the NFT contract is invoked.
    host.state_mut().add_proceeds(listing.seller, amount);
    host.state_mut().unlist(&token)?;
    transfer(host, &token, Address::Account(listing.seller), buyer)?;

    logger.log(&MarketplaceEvent::ItemBought(ItemBoughtEvent {
        buyer,
        nft_address: params.nft_address,
        token_id: params.token_id,
        price: listing.price,
    }))?;

    Ok(())
}

/// Change the price of a listed token. Logs an `ItemListed` event with the
/// new price.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The token is not listed.
/// - The sender does not own the token.
/// - The new price is zero.
/// - Fails to log event.
#[receive(
    contract = "NftMarketPlace",
    name = "updateListing",
    parameter = "UpdateListingParams",
    mutable,
    enable_logger
)]
fn update_listing<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params: UpdateListingParams = ctx.parameter_cursor().get()?;
    let token = params.token();

    host.state().listing(&token)?;
    ensure_eq!(
        owner_of(host, &token)?,
        ctx.sender(),
        CustomContractError::NotOwner.into()
    );
    ensure!(
        params.new_price > Amount::zero(),
        CustomContractError::PriceMustBeAboveZero.into()
    );

    let listing = host.state_mut().update_price(&token, params.new_price)?;

    logger.log(&MarketplaceEvent::ItemListed(ItemListedEvent {
        seller: listing.seller,
        nft_address: params.nft_address,
        token_id: params.token_id,
        price: listing.price,
    }))?;

    Ok(())
}

/// Pay out all proceeds of the sender. Logs a `ProceedsWithdrawn` event.
///
/// It rejects if:
/// - The sender is a contract.
/// - The sender has no proceeds.
/// - The transfer of CCD fails.
/// - Fails to log event.
#[receive(
    contract = "NftMarketPlace",
    name = "withdrawProceeds",
    mutable,
    enable_logger
)]
fn withdraw_proceeds<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let seller = match ctx.sender() {
        Address::Account(address) => address,
        Address::Contract(_) => bail!(CustomContractError::OnlyAccountAddress.into()),
    };

    // Proceeds are zeroed before the transfer.
    let amount = host.state_mut().take_proceeds(&seller)?;
    host.invoke_transfer(&seller, amount)
        .map_err(CustomContractError::from)?;

    logger.log(&MarketplaceEvent::ProceedsWithdrawn(ProceedsWithdrawnEvent {
        seller,
        amount,
    }))?;

    Ok(())
}

/// Get the listing of a token, `None` if it is not listed.
#[receive(
    contract = "NftMarketPlace",
    name = "getListing",
    parameter = "ItemParams",
    return_value = "Option<Listing>"
)]
fn get_listing<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Option<Listing>> {
    let params: ItemParams = ctx.parameter_cursor().get()?;
    Ok(host.state().listing(&params.token()).ok())
}

/// Get the proceeds owed to an account, zero if none.
#[receive(
    contract = "NftMarketPlace",
    name = "getProceeds",
    parameter = "AccountAddress",
    return_value = "Amount"
)]
fn get_proceeds<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Amount> {
    let seller: AccountAddress = ctx.parameter_cursor().get()?;
    Ok(host.state().proceeds_of(&seller))
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use commons::test::*;
    use test_infrastructure::*;

    const DEPLOYER: AccountAddress = AccountAddress([0u8; 32]);
    const DEPLOYER_ADDRESS: Address = Address::Account(DEPLOYER);
    const USER: AccountAddress = AccountAddress([1u8; 32]);
    const USER_ADDRESS: Address = Address::Account(USER);
    const NFT_CONTRACT: ContractAddress = ContractAddress {
        index: 1,
        subindex: 0,
    };
    const MARKETPLACE: ContractAddress = ContractAddress {
        index: 2,
        subindex: 0,
    };
    const PRICE: Amount = Amount {
        micro_ccd: 100_000,
    };

    type Host = TestHost<State<TestStateApi>>;

    fn token_id() -> ContractTokenId {
        TokenIdU32(0)
    }

    fn token() -> Token {
        Token::new(NFT_CONTRACT, token_id())
    }

    fn item_params() -> ItemParams {
        ItemParams {
            nft_address: NFT_CONTRACT,
            token_id: token_id(),
        }
    }

    fn list_params(price: Amount) -> ListItemParams {
        ListItemParams {
            nft_address: NFT_CONTRACT,
            token_id: token_id(),
            price,
        }
    }

    fn default_host() -> Host {
        let mut state_builder = TestStateBuilder::new();
        let state = State::empty(&mut state_builder);
        TestHost::new(state, state_builder)
    }

    /// Mocks the NFT contract where `owner` holds the token and the
    /// marketplace is the approved address when `approved` is set.
    /// Transfers only succeed from `owner` to `USER`.
    fn mock_nft(host: &mut Host, owner: Address, approved: bool) {
        host.setup_mock_entrypoint(
            NFT_CONTRACT,
            OwnedEntrypointName::new_unchecked(OWNER_OF_ENTRYPOINT.into()),
            parse_and_ok_mock::<ContractTokenId, _>(owner),
        );
        let approved_address = if approved {
            Some(Address::Contract(MARKETPLACE))
        } else {
            None
        };
        host.setup_mock_entrypoint(
            NFT_CONTRACT,
            OwnedEntrypointName::new_unchecked(GET_APPROVED_ENTRYPOINT.into()),
            parse_and_ok_mock::<ContractTokenId, _>(approved_address),
        );
        host.setup_mock_entrypoint(
            NFT_CONTRACT,
            OwnedEntrypointName::new_unchecked(OPERATOR_OF_ENTRYPOINT.into()),
            parse_and_map_mock::<OperatorOfQueryParams, _, _>(|params| {
                Some(OperatorOfQueryResponse(vec![false; params.queries.len()]))
            }),
        );
        host.setup_mock_entrypoint(
            NFT_CONTRACT,
            OwnedEntrypointName::new_unchecked(TRANSFER_ENTRYPOINT.into()),
            parse_and_check_mock::<TransferParameter, _>(
                move |params| {
                    params.0.len() == 1
                        && params.0[0].from == owner
                        && params.0[0].to.address() == USER_ADDRESS
                },
                (),
            ),
        );
    }

    /// A marketplace with the token listed by the deployer at `PRICE`.
    fn listed_host() -> Host {
        let mut host = default_host();
        mock_nft(&mut host, DEPLOYER_ADDRESS, true);

        let parameter_bytes = to_bytes(&list_params(PRICE));
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(DEPLOYER_ADDRESS);
        ctx.set_self_address(MARKETPLACE);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        list_item(&ctx, &mut host, &mut logger).expect_report("Failed to list item");
        host
    }

    #[concordium_test]
    fn test_init() {
        let ctx = TestInitContext::empty();
        let mut builder = TestStateBuilder::new();

        let state = init(&ctx, &mut builder).expect_report("Contract initialization failed");

        claim_eq!(state.listings.iter().count(), 0, "No token should be listed");
        claim_eq!(state.proceeds.iter().count(), 0);
    }

    /// Listing stores the seller and price and logs an `ItemListed` event.
    #[concordium_test]
    fn test_list_item() {
        let mut host = default_host();
        mock_nft(&mut host, DEPLOYER_ADDRESS, true);

        let parameter_bytes = to_bytes(&list_params(PRICE));
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(DEPLOYER_ADDRESS);
        ctx.set_self_address(MARKETPLACE);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        let result = list_item(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));
        claim_eq!(
            host.state().listing(&token()),
            Ok(Listing {
                price: PRICE,
                seller: DEPLOYER,
            })
        );
        claim_eq!(logger.logs.len(), 1);
        claim_eq!(
            logger.logs[0],
            to_bytes(&MarketplaceEvent::ItemListed(ItemListedEvent {
                seller: DEPLOYER,
                nft_address: NFT_CONTRACT,
                token_id: token_id(),
                price: PRICE,
            }))
        );
    }

    #[concordium_test]
    fn test_list_item_already_listed() {
        let mut host = listed_host();

        let parameter_bytes = to_bytes(&list_params(PRICE));
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(DEPLOYER_ADDRESS);
        ctx.set_self_address(MARKETPLACE);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        let result = list_item(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::AlreadyListed.into()));
        claim!(logger.logs.is_empty());
    }

    #[concordium_test]
    fn test_list_item_not_owner() {
        let mut host = default_host();
        mock_nft(&mut host, DEPLOYER_ADDRESS, true);

        let parameter_bytes = to_bytes(&list_params(PRICE));
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(USER_ADDRESS);
        ctx.set_self_address(MARKETPLACE);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        let result = list_item(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::NotOwner.into()));
        claim_eq!(
            host.state().listing(&token()),
            Err(CustomContractError::NotListed.into())
        );
    }

    /// A contract owning a token cannot list it.
    #[concordium_test]
    fn test_list_item_contract_owner() {
        let owner = Address::Contract(ContractAddress {
            index: 3,
            subindex: 0,
        });
        let mut host = default_host();
        mock_nft(&mut host, owner, true);

        let parameter_bytes = to_bytes(&list_params(PRICE));
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(owner);
        ctx.set_self_address(MARKETPLACE);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        let result = list_item(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::NotOwner.into()));
    }

    #[concordium_test]
    fn test_list_item_zero_price() {
        let mut host = default_host();
        mock_nft(&mut host, DEPLOYER_ADDRESS, true);

        let parameter_bytes = to_bytes(&list_params(Amount::zero()));
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(DEPLOYER_ADDRESS);
        ctx.set_self_address(MARKETPLACE);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        let result = list_item(&ctx, &mut host, &mut logger);

        claim_eq!(
            result,
            Err(CustomContractError::PriceMustBeAboveZero.into())
        );
    }

    #[concordium_test]
    fn test_list_item_needs_approval() {
        let mut host = default_host();
        mock_nft(&mut host, DEPLOYER_ADDRESS, false);

        let parameter_bytes = to_bytes(&list_params(PRICE));
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(DEPLOYER_ADDRESS);
        ctx.set_self_address(MARKETPLACE);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        let result = list_item(&ctx, &mut host, &mut logger);

        claim_eq!(
            result,
            Err(CustomContractError::NotApprovedForMarketplace.into())
        );
        claim!(logger.logs.is_empty());
    }

    /// Being an operator of the owner is as good as being approved.
    #[concordium_test]
    fn test_list_item_operator_approval() {
        let mut host = default_host();
        mock_nft(&mut host, DEPLOYER_ADDRESS, false);
        host.setup_mock_entrypoint(
            NFT_CONTRACT,
            OwnedEntrypointName::new_unchecked(OPERATOR_OF_ENTRYPOINT.into()),
            parse_and_map_mock::<OperatorOfQueryParams, _, _>(|params| {
                let answers = params
                    .queries
                    .iter()
                    .map(|query| {
                        query.owner == DEPLOYER_ADDRESS
                            && query.address == Address::Contract(MARKETPLACE)
                    })
                    .collect();
                Some(OperatorOfQueryResponse(answers))
            }),
        );

        let parameter_bytes = to_bytes(&list_params(PRICE));
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(DEPLOYER_ADDRESS);
        ctx.set_self_address(MARKETPLACE);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        claim_eq!(list_item(&ctx, &mut host, &mut logger), Ok(()));
    }

    #[concordium_test]
    fn test_cancel_listing_not_listed() {
        let mut host = default_host();
        mock_nft(&mut host, DEPLOYER_ADDRESS, true);

        let parameter_bytes = to_bytes(&item_params());
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(DEPLOYER_ADDRESS);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        let result = cancel_listing(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::NotListed.into()));
    }

    #[concordium_test]
    fn test_cancel_listing_not_owner() {
        let mut host = listed_host();

        let parameter_bytes = to_bytes(&item_params());
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(USER_ADDRESS);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        let result = cancel_listing(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::NotOwner.into()));
        claim!(host.state().listing(&token()).is_ok());
    }

    #[concordium_test]
    fn test_cancel_listing() {
        let mut host = listed_host();

        let parameter_bytes = to_bytes(&item_params());
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(DEPLOYER_ADDRESS);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        let result = cancel_listing(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));
        claim_eq!(
            logger.logs[0],
            to_bytes(&MarketplaceEvent::ItemCanceled(ItemCanceledEvent {
                seller: DEPLOYER_ADDRESS,
                nft_address: NFT_CONTRACT,
                token_id: token_id(),
            }))
        );
        claim_eq!(get_listing(&ctx, &host), Ok(None));
    }

    #[concordium_test]
    fn test_buy_item_not_listed() {
        let mut host = default_host();
        mock_nft(&mut host, DEPLOYER_ADDRESS, true);

        let parameter_bytes = to_bytes(&item_params());
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(USER_ADDRESS);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        let result = buy_item(&ctx, &mut host, PRICE, &mut logger);

        claim_eq!(result, Err(CustomContractError::NotListed.into()));
    }

    #[concordium_test]
    fn test_buy_item_price_not_met() {
        let mut host = listed_host();

        let parameter_bytes = to_bytes(&item_params());
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(USER_ADDRESS);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        let result = buy_item(&ctx, &mut host, Amount::zero(), &mut logger);

        claim_eq!(result, Err(CustomContractError::PriceNotMet.into()));
        claim!(host.state().listing(&token()).is_ok());
    }

    #[concordium_test]
    fn test_buy_item_from_contract() {
        let mut host = listed_host();

        let parameter_bytes = to_bytes(&item_params());
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Contract(NFT_CONTRACT));
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        let result = buy_item(&ctx, &mut host, PRICE, &mut logger);

        claim_eq!(result, Err(CustomContractError::OnlyAccountAddress.into()));
    }

    /// Buying transfers the token to the buyer, removes the listing and
    /// credits the seller.
    #[concordium_test]
    fn test_buy_item() {
        let mut host = listed_host();

        let parameter_bytes = to_bytes(&item_params());
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(USER_ADDRESS);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        let result = buy_item(&ctx, &mut host, PRICE, &mut logger);

        claim_eq!(result, Ok(()));
        claim_eq!(host.state().proceeds_of(&DEPLOYER), PRICE);
        claim_eq!(get_listing(&ctx, &host), Ok(None));
        claim_eq!(
            logger.logs[0],
            to_bytes(&MarketplaceEvent::ItemBought(ItemBoughtEvent {
                buyer: USER,
                nft_address: NFT_CONTRACT,
                token_id: token_id(),
                price: PRICE,
            }))
        );
    }

    /// Overpaying credits the whole attached amount to the seller.
    #[concordium_test]
    fn test_buy_item_overpaid() {
        let mut host = listed_host();

        let parameter_bytes = to_bytes(&item_params());
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(USER_ADDRESS);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        let paid = PRICE + PRICE;
        claim_eq!(buy_item(&ctx, &mut host, paid, &mut logger), Ok(()));

        let parameter_bytes = to_bytes(&DEPLOYER);
        ctx.set_parameter(&parameter_bytes);
        claim_eq!(get_proceeds(&ctx, &host), Ok(paid));
    }

    #[concordium_test]
    fn test_update_listing_not_listed() {
        let mut host = default_host();
        mock_nft(&mut host, DEPLOYER_ADDRESS, true);

        let parameter_bytes = to_bytes(&UpdateListingParams {
            nft_address: NFT_CONTRACT,
            token_id: token_id(),
            new_price: PRICE,
        });
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(DEPLOYER_ADDRESS);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        let result = update_listing(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::NotListed.into()));
    }

    #[concordium_test]
    fn test_update_listing_not_owner() {
        let mut host = listed_host();

        let parameter_bytes = to_bytes(&UpdateListingParams {
            nft_address: NFT_CONTRACT,
            token_id: token_id(),
            new_price: PRICE,
        });
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(USER_ADDRESS);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        let result = update_listing(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::NotOwner.into()));
    }

    #[concordium_test]
    fn test_update_listing_zero_price() {
        let mut host = listed_host();

        let parameter_bytes = to_bytes(&UpdateListingParams {
            nft_address: NFT_CONTRACT,
            token_id: token_id(),
            new_price: Amount::zero(),
        });
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(DEPLOYER_ADDRESS);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        let result = update_listing(&ctx, &mut host, &mut logger);

        claim_eq!(
            result,
            Err(CustomContractError::PriceMustBeAboveZero.into())
        );
        claim_eq!(host.state().listing(&token()).map(|l| l.price), Ok(PRICE));
    }

    #[concordium_test]
    fn test_update_listing() {
        let mut host = listed_host();
        let new_price = Amount::from_ccd(1);

        let parameter_bytes = to_bytes(&UpdateListingParams {
            nft_address: NFT_CONTRACT,
            token_id: token_id(),
            new_price,
        });
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(DEPLOYER_ADDRESS);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        let result = update_listing(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));
        let parameter_bytes = to_bytes(&item_params());
        ctx.set_parameter(&parameter_bytes);
        claim_eq!(
            get_listing(&ctx, &host),
            Ok(Some(Listing {
                price: new_price,
                seller: DEPLOYER,
            }))
        );
        claim_eq!(
            logger.logs[0],
            to_bytes(&MarketplaceEvent::ItemListed(ItemListedEvent {
                seller: DEPLOYER,
                nft_address: NFT_CONTRACT,
                token_id: token_id(),
                price: new_price,
            }))
        );
    }

    #[concordium_test]
    fn test_withdraw_no_proceeds() {
        let mut host = default_host();

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(DEPLOYER_ADDRESS);
        let mut logger = TestLogger::init();

        let result = withdraw_proceeds(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::NoProceeds.into()));
    }

    /// The seller withdraws the proceeds of a sale, leaving nothing owed.
    #[concordium_test]
    fn test_withdraw_proceeds() {
        let mut host = listed_host();

        let parameter_bytes = to_bytes(&item_params());
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(USER_ADDRESS);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        buy_item(&ctx, &mut host, PRICE, &mut logger).expect_report("Failed to buy item");
        host.set_self_balance(PRICE);

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(DEPLOYER_ADDRESS);
        let mut logger = TestLogger::init();

        let result = withdraw_proceeds(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));
        claim!(host.transfer_occurred(&DEPLOYER, PRICE));
        claim_eq!(host.state().proceeds_of(&DEPLOYER), Amount::zero());
        claim_eq!(
            logger.logs[0],
            to_bytes(&MarketplaceEvent::ProceedsWithdrawn(ProceedsWithdrawnEvent {
                seller: DEPLOYER,
                amount: PRICE,
            }))
        );
    }

    #[concordium_test]
    fn test_withdraw_from_contract() {
        let mut host = default_host();

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Contract(NFT_CONTRACT));
        let mut logger = TestLogger::init();

        let result = withdraw_proceeds(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::OnlyAccountAddress.into()));
    }
}
