//! Message types for the ONFT collection contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Timestamp};

pub use common::collection::OwnerOfResponse;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Governance admin address
    pub admin: String,
    pub name: String,
    pub symbol: String,
    /// Placeholder URI before reveal; also the initial contract URI
    pub base_uri: String,
    /// Transport endpoint on this chain
    pub endpoint: String,
    pub fee_collector: String,
    /// This chain's transport chain id (0 is reserved)
    pub this_chain_id: u16,
    /// First id issued by sequential minting
    pub token_id_start: u64,
    /// Number of ids sequential minting may issue on this chain
    pub max_supply: u64,
    /// Addresses granted the minter role at instantiation
    pub minters: Vec<String>,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Registry
    // ========================================================================
    /// Issue the next sequential token to `to`
    ///
    /// Authorization: Minter role
    Mint { to: String },

    /// Transfer a token to another address on this chain
    ///
    /// Authorization: Token owner
    TransferNft { recipient: String, token_id: u64 },

    // ========================================================================
    // Cross-Chain
    // ========================================================================
    /// Burn `token_id` here and dispatch it to `dst_chain_id`
    ///
    /// Authorization: Token owner. Attached funds pay the transport fee.
    Send {
        dst_chain_id: u16,
        /// Recipient address bytes on the destination chain
        to_address: Binary,
        token_id: u64,
        refund_address: String,
        zro_payment_address: Option<String>,
        adapter_params: Binary,
    },

    /// Inbound message delivered by the transport
    ///
    /// Authorization: Configured endpoint only
    LzReceive {
        src_chain_id: u16,
        src_address: Binary,
        nonce: u64,
        payload: Binary,
    },

    // ========================================================================
    // Governance
    // ========================================================================
    /// Register the counterpart collection on a remote chain
    SetTrustedRemote { chain_id: u16, remote: Binary },

    /// Toggle the send-side circuit breaker
    PauseSendTokens { paused: bool },

    /// Replace the transport endpoint
    SetEndpoint { endpoint: String },

    GrantMinter { address: String },

    RevokeMinter { address: String },

    /// Override the origin chain recorded for a token id
    SetChainId { token_id: u64, chain_id: u16 },

    /// Bulk variant of `SetChainId`
    SetChainIds {
        token_ids: Vec<u64>,
        chain_ids: Vec<u16>,
    },

    /// Switch token URIs from the placeholder to per-token URIs
    ActivateReveal {},

    /// Explicitly set the reveal flag
    SetReveal { revealed: bool },

    SetBaseUri { base_uri: String },

    SetContractUri { contract_uri: String },

    SetFeeCollector { fee_collector: String },

    // ========================================================================
    // Admin Transfer
    // ========================================================================
    /// Takes effect immediately; the caller loses every admin capability
    TransferAdmin { new_admin: String },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(StatsResponse)]
    Stats {},

    /// Fails with "Nonexistent token" for ids not live on this chain
    #[returns(OwnerOfResponse)]
    OwnerOf { token_id: u64 },

    /// Origin chain for a token id (0 for native or unknown ids)
    #[returns(ChainIdResponse)]
    ChainId { token_id: u64 },

    #[returns(TokenUriResponse)]
    TokenUri { token_id: u64 },

    #[returns(ContractUriResponse)]
    ContractUri {},

    #[returns(NumTokensResponse)]
    NumTokens {},

    /// Tokens owned by `owner`, ascending by id
    #[returns(TokensResponse)]
    Tokens {
        owner: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    #[returns(TokensResponse)]
    AllTokens {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    #[returns(IsMinterResponse)]
    IsMinter { address: String },

    #[returns(TrustedRemoteResponse)]
    TrustedRemote { chain_id: u16 },

    #[returns(TrustedRemotesResponse)]
    TrustedRemotes {
        start_after: Option<u16>,
        limit: Option<u32>,
    },

    #[returns(Option<OutboundTransferResponse>)]
    OutboundTransfer { nonce: u64 },

    #[returns(MessageProcessedResponse)]
    IsMessageProcessed {
        src_chain_id: u16,
        src_address: Binary,
        nonce: u64,
    },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub name: String,
    pub symbol: String,
    pub base_uri: String,
    pub fee_collector: Addr,
    pub endpoint: Addr,
    pub this_chain_id: u16,
    pub token_id_start: u64,
    pub max_supply: u64,
    pub revealed: bool,
    pub paused: bool,
}

#[cw_serde]
pub struct StatsResponse {
    pub total_minted: u64,
    pub total_sent: u64,
    pub total_received: u64,
}

#[cw_serde]
pub struct ChainIdResponse {
    pub token_id: u64,
    pub chain_id: u16,
}

#[cw_serde]
pub struct TokenUriResponse {
    pub token_uri: String,
}

#[cw_serde]
pub struct ContractUriResponse {
    pub contract_uri: String,
}

#[cw_serde]
pub struct NumTokensResponse {
    /// Tokens currently live on this chain
    pub count: u64,
    /// Ids issued by sequential minting on this chain
    pub minted: u64,
}

#[cw_serde]
pub struct TokensResponse {
    pub tokens: Vec<u64>,
}

#[cw_serde]
pub struct IsMinterResponse {
    pub is_minter: bool,
}

#[cw_serde]
pub struct TrustedRemoteResponse {
    pub chain_id: u16,
    pub remote: Option<Binary>,
}

#[cw_serde]
pub struct TrustedRemotesResponse {
    pub remotes: Vec<TrustedRemoteResponse>,
}

#[cw_serde]
pub struct OutboundTransferResponse {
    pub nonce: u64,
    pub token_id: u64,
    pub dst_chain_id: u16,
    pub to_address: Binary,
    pub sender: Addr,
    pub prior_origin: u16,
    pub sent_at: Timestamp,
}

#[cw_serde]
pub struct MessageProcessedResponse {
    pub processed: bool,
}
