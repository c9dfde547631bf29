use super::*;

/// An untagged event of a token being listed or its price updated.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct ItemListedEvent {
    /// Account receiving the proceeds of the sale.
    pub seller: AccountAddress,
    pub nft_address: ContractAddress,
    pub token_id: ContractTokenId,
    /// Asking price.
    pub price: Amount,
}

/// An untagged event of a listing being removed by the token owner.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct ItemCanceledEvent {
    /// Address that canceled the listing.
    pub seller: Address,
    pub nft_address: ContractAddress,
    pub token_id: ContractTokenId,
}

/// An untagged event of a listed token being bought.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct ItemBoughtEvent {
    pub buyer: AccountAddress,
    pub nft_address: ContractAddress,
    pub token_id: ContractTokenId,
    /// Listing price at the time of the sale.
    pub price: Amount,
}

/// An untagged event of a seller withdrawing their proceeds.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct ProceedsWithdrawnEvent {
    pub seller: AccountAddress,
    pub amount: Amount,
}

/// Tagged marketplace event to be serialized for the event log.
#[derive(Debug, PartialEq, Eq)]
pub enum MarketplaceEvent {
    ItemListed(ItemListedEvent),
    ItemCanceled(ItemCanceledEvent),
    ItemBought(ItemBoughtEvent),
    ProceedsWithdrawn(ProceedsWithdrawnEvent),
}

impl Serial for MarketplaceEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            MarketplaceEvent::ItemListed(event) => {
                out.write_u8(ITEM_LISTED_TAG)?;
                event.serial(out)
            }
            MarketplaceEvent::ItemCanceled(event) => {
                out.write_u8(ITEM_CANCELED_TAG)?;
                event.serial(out)
            }
            MarketplaceEvent::ItemBought(event) => {
                out.write_u8(ITEM_BOUGHT_TAG)?;
                event.serial(out)
            }
            MarketplaceEvent::ProceedsWithdrawn(event) => {
                out.write_u8(PROCEEDS_WITHDRAWN_TAG)?;
                event.serial(out)
            }
        }
    }
}

impl Deserial for MarketplaceEvent {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let tag = source.read_u8()?;
        match tag {
            ITEM_LISTED_TAG => ItemListedEvent::deserial(source).map(MarketplaceEvent::ItemListed),
            ITEM_CANCELED_TAG => {
                ItemCanceledEvent::deserial(source).map(MarketplaceEvent::ItemCanceled)
            }
            ITEM_BOUGHT_TAG => ItemBoughtEvent::deserial(source).map(MarketplaceEvent::ItemBought),
            PROCEEDS_WITHDRAWN_TAG => {
                ProceedsWithdrawnEvent::deserial(source).map(MarketplaceEvent::ProceedsWithdrawn)
            }
            _ => Err(ParseError::default()),
        }
    }
}
