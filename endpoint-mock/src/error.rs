use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("No endpoint registered for chain {chain_id}")]
    DestinationNotSet { chain_id: u16 },

    #[error("Destination is not a valid address")]
    InvalidDestination,

    #[error("Stored message not found: {id}")]
    StoredMessageNotFound { id: u64 },

    #[error("Unknown reply id: {id}")]
    UnknownReply { id: u64 },
}
