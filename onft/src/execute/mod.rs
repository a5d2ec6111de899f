//! Execute handlers for the ONFT collection contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `registry` - Minting, transfers, origin chains and metadata
//! - `bridge` - Cross-chain send/receive, trusted remotes, pause
//! - `admin` - Minter roles, endpoint, fee collector, admin transfer

mod admin;
mod bridge;
pub(crate) mod registry;

pub use admin::*;
pub use bridge::*;
pub use registry::{
    execute_mint, execute_set_base_uri, execute_set_chain_id, execute_set_chain_ids,
    execute_set_contract_uri, execute_set_reveal, execute_transfer_nft, token_uri,
};
