use super::*;

/// The custom errors the contracts can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject, SchemaType)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// Failed to invoke a contract (Error code: -4).
    InvokeContractError,
    /// Failed to invoke a transfer (Error code: -5).
    InvokeTransferError,
    /// The invoked contract does not behave like a CIS-2 NFT (Error code: -6).
    Incompatible,
    /// Only account addresses can perform this action (Error code: -7).
    OnlyAccountAddress,
    /// Sender is neither the owner nor an operator (Error code: -8).
    Unauthorized,
    /// Token is already listed on the marketplace (Error code: -9).
    AlreadyListed,
    /// Token is not listed on the marketplace (Error code: -10).
    NotListed,
    /// Sender does not own the token (Error code: -11).
    NotOwner,
    /// Listing price must be above zero (Error code: -12).
    PriceMustBeAboveZero,
    /// The marketplace is not approved to transfer the token (Error code: -13).
    NotApprovedForMarketplace,
    /// Attached amount is below the listing price (Error code: -14).
    PriceNotMet,
    /// There are no proceeds to withdraw (Error code: -15).
    NoProceeds,
    /// No more token ids can be minted (Error code: -16).
    TokenCounterOverflow,
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping errors related to contract invocations to CustomContractError.
impl<T> From<CallContractError<T>> for CustomContractError {
    fn from(cce: CallContractError<T>) -> Self {
        match cce {
            CallContractError::MissingEntrypoint | CallContractError::MessageFailed => {
                Self::Incompatible
            }
            _ => Self::InvokeContractError,
        }
    }
}

/// Mapping errors related to transfers to CustomContractError.
impl From<TransferError> for CustomContractError {
    fn from(_te: TransferError) -> Self {
        Self::InvokeTransferError
    }
}

/// Mapping CustomContractError to ContractError
impl From<CustomContractError> for ContractError {
    fn from(c: CustomContractError) -> Self {
        Cis2Error::Custom(c)
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    #[concordium_test]
    fn test_call_errors_map_to_incompatible() {
        claim_eq!(
            CustomContractError::from(CallContractError::<()>::MissingEntrypoint),
            CustomContractError::Incompatible
        );
        claim_eq!(
            CustomContractError::from(CallContractError::<()>::MessageFailed),
            CustomContractError::Incompatible
        );
        claim_eq!(
            CustomContractError::from(CallContractError::<()>::Trap),
            CustomContractError::InvokeContractError
        );
    }

    #[concordium_test]
    fn test_custom_error_wraps_into_cis2() {
        let err: ContractError = CustomContractError::NotOwner.into();
        claim_eq!(err, Cis2Error::Custom(CustomContractError::NotOwner));
    }
}
