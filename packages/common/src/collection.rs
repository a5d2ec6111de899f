//! Collection interface used by other contracts
//!
//! These are wire-compatible subsets of the `onft` execute and query messages,
//! so the minter can issue tokens and check pass ownership without depending
//! on the `onft` crate.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, QuerierWrapper, StdResult, WasmMsg};

#[cw_serde]
pub enum CollectionExecuteMsg {
    /// Issue the next sequential token to `to` (minter role only)
    Mint { to: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum CollectionQueryMsg {
    #[returns(OwnerOfResponse)]
    OwnerOf { token_id: u64 },
}

#[cw_serde]
pub struct OwnerOfResponse {
    pub owner: Addr,
}

/// Build the sub-message issuing one token from `collection` to `to`.
pub fn mint_msg(collection: &Addr, to: &Addr) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: collection.to_string(),
        msg: to_json_binary(&CollectionExecuteMsg::Mint { to: to.to_string() })?,
        funds: vec![],
    }))
}

/// Current owner of `token_id` in `collection`.
pub fn query_owner_of(
    querier: &QuerierWrapper,
    collection: &Addr,
    token_id: u64,
) -> StdResult<Addr> {
    let res: OwnerOfResponse =
        querier.query_wasm_smart(collection, &CollectionQueryMsg::OwnerOf { token_id })?;
    Ok(res.owner)
}
