/// Tag for the ItemListed event of the marketplace.
pub const ITEM_LISTED_TAG: u8 = u8::MAX - 5;

/// Tag for the ItemCanceled event of the marketplace.
pub const ITEM_CANCELED_TAG: u8 = u8::MAX - 6;

/// Tag for the ItemBought event of the marketplace.
pub const ITEM_BOUGHT_TAG: u8 = u8::MAX - 7;

/// Tag for the ProceedsWithdrawn event of the marketplace.
pub const PROCEEDS_WITHDRAWN_TAG: u8 = u8::MAX - 8;

/// Tag for the Approval event of the NFT contract.
pub const APPROVAL_TAG: u8 = u8::MAX - 9;

pub const TRANSFER_ENTRYPOINT: &str = "transfer";
pub const OWNER_OF_ENTRYPOINT: &str = "ownerOf";
pub const GET_APPROVED_ENTRYPOINT: &str = "getApproved";
pub const OPERATOR_OF_ENTRYPOINT: &str = "operatorOf";
