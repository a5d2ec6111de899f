//! Error types for the minter contract

use common::MerkleError;
use cosmwasm_std::{OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    Merkle(#[from] MerkleError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Caller is not the owner")]
    NotOwner,

    // ========================================================================
    // Claim Errors
    // ========================================================================

    #[error("Address not whitelisted.")]
    NotWhitelisted,

    #[error("Already claimed.")]
    AlreadyClaimed,

    #[error("Insufficient funds provided: required {required}, got {provided}")]
    InsufficientFunds { required: String, provided: String },

    #[error("Quantity must be greater than zero")]
    InvalidQuantity,

    #[error("Public mint has not started")]
    PublicMintNotStarted,

    #[error("Pass already used: {token_id}")]
    PassAlreadyUsed { token_id: u64 },

    // ========================================================================
    // Withdrawal Errors
    // ========================================================================

    #[error("Nothing to withdraw")]
    NothingToWithdraw,
}
