//! ONFT Collection Contract - Omnichain NFT Registry
//!
//! A fixed-supply NFT collection whose tokens can move between chains while
//! keeping their ids. Transport is delegated to an endpoint contract.
//!
//! # Outgoing Flow (Burn)
//! 1. Owner calls `Send` with a destination chain and recipient bytes
//! 2. The token is burned and a payload `(token_id, origin_chain, to)` is sent
//!    to the endpoint, addressed to the trusted remote for that chain
//!
//! # Incoming Flow (Re-mint)
//! 1. The endpoint calls `LzReceive` with the authenticated source
//! 2. The source must be the trusted remote; each `(chain, source, nonce)` applies once
//! 3. The token is re-minted with the same id and the source chain as origin
//!
//! # Security
//! - Only the configured endpoint can deliver inbound messages
//! - Governance changes go through a single admin who can hand the role over in one step
//! - Send-side circuit breaker

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
pub use crate::execute::token_uri;
