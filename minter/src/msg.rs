//! Message types for the minter contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, HexBinary, Uint128};

use crate::state::Policy;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct MigrateMsg {}

/// Eligibility policy as supplied at instantiation
#[cw_serde]
pub enum PolicyMsg {
    /// Hex-encoded 32-byte allowlist root
    MerkleProof { root: HexBinary },
    Allowlist {},
    PassHolder { pass_collection: String },
}

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    /// Registry that grants this contract the minter role
    pub collection: String,
    pub price: Uint128,
    pub denom: String,
    pub max_quantity: u32,
    /// Receives 2.5% of every withdrawal; fixed for the contract's lifetime
    pub dev_address: String,
    pub policy: PolicyMsg,
    #[serde(default)]
    pub public_mint_active: bool,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Evidence attached to a gated mint
#[cw_serde]
pub enum Evidence {
    /// Sibling digests from the caller's leaf to the allowlist root
    Proof { proof: Vec<HexBinary> },
    /// Pass token held by the caller
    Pass { token_id: u64 },
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Gated mint of `quantity` tokens to the caller
    ///
    /// Attach `price * quantity` of `denom`.
    Mint {
        quantity: u32,
        evidence: Option<Evidence>,
    },

    /// Open mint, available while the public phase is active
    MintPublic { quantity: u32 },

    // ========================================================================
    // Owner
    // ========================================================================
    /// Add addresses to the on-chain allowlist
    AddToWhitelist { addresses: Vec<String> },

    /// Override the allowance of one address
    SetQuantity { address: String, quantity: u32 },

    /// Open or close the public phase
    SetPublicMintStart { active: bool },

    /// Split the whole balance between the dev address and `destination`
    Withdraw { destination: String },

    TransferOwnership { new_owner: String },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(QuantityClaimedResponse)]
    QuantityClaimed { address: String },

    #[returns(IsWhitelistedResponse)]
    IsWhitelisted { address: String },

    #[returns(IsPassUsedResponse)]
    IsPassUsed { token_id: u64 },

    /// Run the on-chain proof check without minting
    #[returns(VerifyProofResponse)]
    VerifyProof {
        address: String,
        proof: Vec<HexBinary>,
    },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub collection: Addr,
    pub price: Uint128,
    pub denom: String,
    pub max_quantity: u32,
    pub dev_address: Addr,
    pub policy: Policy,
    pub public_mint_active: bool,
}

#[cw_serde]
pub struct QuantityClaimedResponse {
    pub address: Addr,
    pub claimed: u32,
}

#[cw_serde]
pub struct IsWhitelistedResponse {
    pub whitelisted: bool,
    /// Effective allowance: custom quantity if set, else `max_quantity`
    pub allowance: u32,
}

#[cw_serde]
pub struct IsPassUsedResponse {
    pub used: bool,
    pub redeemed_by: Option<Addr>,
}

#[cw_serde]
pub struct VerifyProofResponse {
    pub valid: bool,
}
