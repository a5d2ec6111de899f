//! Messages exchanged between a collection and its transport endpoint
//!
//! The endpoint is an external collaborator: it authenticates the sending
//! chain and address and delivers each message to the destination collection
//! through `LzReceive`.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Binary;

/// Messages a collection sends to its local endpoint
#[cw_serde]
pub enum EndpointExecuteMsg {
    /// Dispatch `payload` to `destination` on `dst_chain_id`.
    /// Funds attached to this message pay the transport fee.
    Send {
        dst_chain_id: u16,
        /// Counterpart collection address bytes on the destination chain
        destination: Binary,
        payload: Binary,
        refund_address: String,
        zro_payment_address: Option<String>,
        /// Transport-specific execution parameters, opaque to the collection
        adapter_params: Binary,
    },
}

/// Message an endpoint delivers to the destination collection
#[cw_serde]
pub enum ReceiverExecuteMsg {
    LzReceive {
        src_chain_id: u16,
        /// Sending collection address bytes on the source chain
        src_address: Binary,
        /// Per-path sequence number assigned by the transport
        nonce: u64,
        payload: Binary,
    },
}
