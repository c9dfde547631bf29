use super::*;

/// An untagged event of a token approval being set or cleared.
#[derive(Debug, Serialize, SchemaType)]
pub struct ApprovalEvent {
    /// The ID of the token whose approval changed.
    pub token_id: ContractTokenId,
    /// The owner of the token.
    pub owner: Address,
    /// The newly approved address, `None` when the approval was cleared.
    pub approved: Option<Address>,
}

/// Tagged Custom event to be serialized for the event log.
#[derive(Debug)]
pub enum CustomEvent {
    /// Approving an address for a single token
    Approval(ApprovalEvent),
}

impl Serial for CustomEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            CustomEvent::Approval(event) => {
                out.write_u8(APPROVAL_TAG)?;
                event.serial(out)
            }
        }
    }
}

impl Deserial for CustomEvent {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let tag = source.read_u8()?;
        match tag {
            APPROVAL_TAG => ApprovalEvent::deserial(source).map(CustomEvent::Approval),
            _ => Err(ParseError::default()),
        }
    }
}

/// Metadata event pointing every token at the shared metadata.
pub fn token_metadata_event(
    token_id: ContractTokenId,
) -> Cis2Event<ContractTokenId, ContractTokenAmount> {
    Cis2Event::TokenMetadata(TokenMetadataEvent {
        token_id,
        metadata_url: token_metadata_url(),
    })
}

#[inline(always)]
pub fn token_metadata_url() -> MetadataUrl {
    MetadataUrl {
        url: String::from(TOKEN_URI),
        hash: None,
    }
}
