use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:onft-endpoint-mock";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DELIVER_REPLY_ID: u64 = 1;

/// A message waiting to be (re)delivered
#[cw_serde]
pub struct StoredMessage {
    /// Endpoint that performs the delivery
    pub endpoint: Addr,
    pub src_chain_id: u16,
    pub src_address: Binary,
    pub dst_address: String,
    pub nonce: u64,
    pub payload: Binary,
    /// Receiver error, `None` while the message is only held back
    pub reason: Option<String>,
}

pub const ADMIN: Item<Addr> = Item::new("admin");

/// Simulated chain this endpoint lives on
pub const CHAIN_ID: Item<u16> = Item::new("chain_id");

pub const DELIVERY_ENABLED: Item<bool> = Item::new("delivery_enabled");

/// dst_chain_id => endpoint on that chain
pub const DEST_ENDPOINTS: Map<u16, Addr> = Map::new("dest_endpoints");

/// (dst_chain_id, sender) => last nonce issued on that path
pub const PATH_NONCES: Map<(u16, &Addr), u64> = Map::new("path_nonces");

pub const STORED_COUNT: Item<u64> = Item::new("stored_count");

/// id => held or failed message
pub const STORED_MESSAGES: Map<u64, StoredMessage> = Map::new("stored_messages");

/// Delivery in flight, read back by the reply handler
pub const PENDING_DELIVERY: Item<StoredMessage> = Item::new("pending_delivery");
