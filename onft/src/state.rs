//! State definitions for the ONFT collection contract
//!
//! Token ownership, per-token origin chain, minter roles and the bridge state
//! (trusted remotes, outbound transfer log, processed inbound messages).

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, StdResult, Storage, Timestamp};
use cw_storage_plus::{Index, IndexList, IndexedMap, Item, Map, MultiIndex};

use crate::error::ContractError;

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Governance admin: trusted remotes, reveal, URIs, fee collector, pause
    pub admin: Addr,
    pub name: String,
    pub symbol: String,
    /// Placeholder URI before reveal, prefix of per-token URIs after
    pub base_uri: String,
    /// Collection-level metadata URI
    pub contract_uri: String,
    pub fee_collector: Addr,
    /// Transport endpoint allowed to deliver inbound messages
    pub endpoint: Addr,
    /// Chain id of this deployment (never 0)
    pub this_chain_id: u16,
    /// First id issued by sequential minting on this chain
    pub token_id_start: u64,
    /// Maximum number of ids issued by sequential minting on this chain
    pub max_supply: u64,
    pub revealed: bool,
    /// Send-side circuit breaker
    pub paused: bool,
}

/// Record of a token that left this chain
#[cw_serde]
pub struct OutboundTransfer {
    pub token_id: u64,
    pub dst_chain_id: u16,
    /// Recipient bytes on the destination chain
    pub to_address: Binary,
    /// Owner at the time of the send
    pub sender: Addr,
    /// Origin the token carried on this chain before leaving
    pub prior_origin: u16,
    pub sent_at: Timestamp,
}

/// Collection statistics
#[cw_serde]
pub struct Stats {
    /// Tokens issued by sequential minting
    pub total_minted: u64,
    /// Tokens sent to other chains
    pub total_sent: u64,
    /// Tokens received from other chains
    pub total_received: u64,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:onft";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Origin marker for tokens minted on this chain
pub const NATIVE_ORIGIN: u16 = 0;

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

pub const STATS: Item<Stats> = Item::new("stats");

/// Addresses holding the minter role
pub const MINTERS: Map<&Addr, bool> = Map::new("minters");

/// Secondary index over live tokens by owner
pub struct OwnerIndexes<'a> {
    pub owner: MultiIndex<'a, Addr, Addr, u64>,
}

impl<'a> IndexList<Addr> for OwnerIndexes<'a> {
    fn get_indexes(&'_ self) -> Box<dyn Iterator<Item = &'_ dyn Index<Addr>> + '_> {
        let v: Vec<&dyn Index<Addr>> = vec![&self.owner];
        Box::new(v.into_iter())
    }
}

/// Live tokens on this chain
/// Key: token id, Value: owner (indexed by owner)
pub fn owners<'a>() -> IndexedMap<'a, u64, Addr, OwnerIndexes<'a>> {
    let indexes = OwnerIndexes {
        owner: MultiIndex::new(|_pk, owner: &Addr| owner.clone(), "owners", "owners__owner"),
    };
    IndexedMap::new("owners", indexes)
}

/// Origin chain per token id (absent = native)
pub const ORIGIN_CHAINS: Map<u64, u16> = Map::new("origin_chains");

/// Number of ids issued by sequential minting
pub const MINTED_COUNT: Item<u64> = Item::new("minted_count");

/// Number of tokens currently live on this chain
pub const TOKEN_COUNT: Item<u64> = Item::new("token_count");

/// Expected counterpart per remote chain
/// Key: remote chain id, Value: counterpart address bytes
pub const TRUSTED_REMOTES: Map<u16, Binary> = Map::new("trusted_remotes");

/// Outbound nonce counter
pub const OUTBOUND_NONCE: Item<u64> = Item::new("outbound_nonce");

/// Key: outbound nonce
pub const OUTBOUND_TRANSFERS: Map<u64, OutboundTransfer> = Map::new("outbound_transfers");

/// Inbound messages already applied
/// Key: (source chain id, source address bytes, transport nonce)
///
/// Transport nonces are per path, so a re-pointed trusted remote starts a
/// fresh sequence that must not collide with the previous counterpart's.
pub const RECEIVED_MESSAGES: Map<(u16, &[u8], u64), bool> = Map::new("received_messages");

// ============================================================================
// Helpers
// ============================================================================

/// Load the owner of a live token.
pub fn load_owner(storage: &dyn Storage, token_id: u64) -> Result<Addr, ContractError> {
    owners()
        .may_load(storage, token_id)?
        .ok_or(ContractError::NonexistentToken { token_id })
}

/// Origin chain of a token id, 0 when never set.
pub fn origin_chain(storage: &dyn Storage, token_id: u64) -> StdResult<u16> {
    Ok(ORIGIN_CHAINS
        .may_load(storage, token_id)?
        .unwrap_or(NATIVE_ORIGIN))
}

pub fn is_minter(storage: &dyn Storage, addr: &Addr) -> StdResult<bool> {
    Ok(MINTERS.may_load(storage, addr)?.unwrap_or(false))
}
