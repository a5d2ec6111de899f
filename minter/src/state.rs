//! State definitions for the minter contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, HexBinary, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Eligibility policy for gated mints
#[cw_serde]
pub enum Policy {
    /// Caller proves membership in a Merkle allowlist
    MerkleProof { root: HexBinary },
    /// Caller is in the on-chain allowlist map
    Allowlist {},
    /// Caller holds an unused pass token in `pass_collection`
    PassHolder { pass_collection: Addr },
}

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    /// Registry the minter issues tokens from
    pub collection: Addr,
    /// Price per unit in `denom`
    pub price: Uint128,
    pub denom: String,
    /// Default per-address allowance
    pub max_quantity: u32,
    /// Receives the developer share of every withdrawal
    pub dev_address: Addr,
    pub policy: Policy,
    pub public_mint_active: bool,
}

// ============================================================================
// Constants
// ============================================================================

pub const CONTRACT_NAME: &str = "crates.io:onft-minter";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Developer share of withdrawals in basis points (2.5%)
pub const DEV_SHARE_BPS: u128 = 250;
pub const BPS_DENOMINATOR: u128 = 10_000;

/// Pass-holder claims are limited to one unit per address
pub const PASS_ALLOWANCE: u32 = 1;

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

/// On-chain allowlist membership
pub const WHITELIST: Map<&Addr, bool> = Map::new("whitelist");

/// Per-address allowance overriding `max_quantity`
pub const CUSTOM_QUANTITY: Map<&Addr, u32> = Map::new("custom_quantity");

/// Pass token id => address that redeemed it
pub const USED_PASSES: Map<u64, Addr> = Map::new("used_passes");
