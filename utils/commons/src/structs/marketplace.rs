use super::*;

/// A marketplace record of an NFT's seller and asking price.
#[derive(Debug, Serialize, SchemaType, Clone, Copy, PartialEq, Eq)]
pub struct Listing {
    /// Asking price.
    pub price: Amount,
    /// Account that listed the token and receives the proceeds.
    pub seller: AccountAddress,
}

/// Parameter of `listItem`.
#[derive(Debug, Serialize, SchemaType, Clone, PartialEq, Eq)]
pub struct ListItemParams {
    /// NFT contract holding the token.
    pub nft_address: ContractAddress,
    /// Token to list.
    pub token_id: ContractTokenId,
    /// Asking price, must be above zero.
    pub price: Amount,
}

/// Parameter of `buyItem`, `cancelListing` and `getListing`.
#[derive(Debug, Serialize, SchemaType, Clone, PartialEq, Eq)]
pub struct ItemParams {
    pub nft_address: ContractAddress,
    pub token_id: ContractTokenId,
}

/// Parameter of `updateListing`.
#[derive(Debug, Serialize, SchemaType, Clone, PartialEq, Eq)]
pub struct UpdateListingParams {
    pub nft_address: ContractAddress,
    pub token_id: ContractTokenId,
    /// New asking price, must be above zero.
    pub new_price: Amount,
}

impl ListItemParams {
    #[inline(always)]
    pub fn token(&self) -> Token {
        Token::new(self.nft_address, self.token_id)
    }
}

impl ItemParams {
    #[inline(always)]
    pub fn token(&self) -> Token {
        Token::new(self.nft_address, self.token_id)
    }
}

impl UpdateListingParams {
    #[inline(always)]
    pub fn token(&self) -> Token {
        Token::new(self.nft_address, self.token_id)
    }
}
