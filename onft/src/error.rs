//! Error types for the ONFT collection contract

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Forbidden: caller lacks the required role")]
    Forbidden,

    #[error("Not owner of token {token_id}")]
    NotOwner { token_id: u64 },

    // ========================================================================
    // Registry Errors
    // ========================================================================

    #[error("Nonexistent token: {token_id}")]
    NonexistentToken { token_id: u64 },

    #[error("Token already exists: {token_id}")]
    TokenAlreadyExists { token_id: u64 },

    #[error("Max supply reached: {max_supply}")]
    MaxSupplyReached { max_supply: u64 },

    #[error("Length mismatch: {token_ids} token ids, {chain_ids} chain ids")]
    LengthMismatch { token_ids: usize, chain_ids: usize },

    // ========================================================================
    // Bridge Errors
    // ========================================================================

    #[error("Sending is paused")]
    Paused,

    #[error("Invalid chain ID: {chain_id}")]
    InvalidChainId { chain_id: u16 },

    #[error("Trusted remote not set for chain {chain_id}")]
    TrustedRemoteNotSet { chain_id: u16 },

    #[error("Untrusted source for chain {chain_id}")]
    UntrustedSource { chain_id: u16 },

    #[error("Message already processed: chain {src_chain_id} nonce {nonce}")]
    MessageAlreadyProcessed { src_chain_id: u16, nonce: u64 },

    #[error("Invalid payload: {reason}")]
    InvalidPayload { reason: String },

    // ========================================================================
    // Validation Errors
    // ========================================================================

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },
}
