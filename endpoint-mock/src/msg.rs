use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Binary;

use crate::state::StoredMessage;

#[cw_serde]
pub struct InstantiateMsg {
    /// Admin who can wire up destinations
    pub admin: String,
    /// Chain id reported as `src_chain_id` on delivery
    pub chain_id: u16,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Same shape as the collection's outbound transport message
    Send {
        dst_chain_id: u16,
        destination: Binary,
        payload: Binary,
        refund_address: String,
        zro_payment_address: Option<String>,
        adapter_params: Binary,
    },
    /// Deliver a message to a local collection. Open to anyone so tests can
    /// forge sources and replay nonces.
    Deliver {
        src_chain_id: u16,
        src_address: Binary,
        dst_address: String,
        nonce: u64,
        payload: Binary,
    },
    /// Admin: route messages for `chain_id` to `endpoint`
    SetDestEndpoint { chain_id: u16, endpoint: String },
    /// Admin: hold outbound messages instead of relaying them
    SetDeliveryEnabled { enabled: bool },
    /// Deliver a held or failed message again
    RetryStored { id: u64 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Option<StoredMessage>)]
    StoredMessage { id: u64 },
    #[returns(StoredMessagesResponse)]
    StoredMessages {},
    /// Last nonce issued for `(dst_chain_id, sender)`, 0 if none
    #[returns(u64)]
    PathNonce { dst_chain_id: u16, sender: String },
}

#[cw_serde]
pub struct StoredMessagesResponse {
    pub messages: Vec<(u64, StoredMessage)>,
}
