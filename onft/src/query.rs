//! Query handlers for the ONFT collection contract.

use cosmwasm_std::{Binary, Deps, Order, StdError, StdResult};
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::execute::token_uri;
use crate::msg::{
    ChainIdResponse, ConfigResponse, ContractUriResponse, IsMinterResponse,
    MessageProcessedResponse, NumTokensResponse, OutboundTransferResponse, OwnerOfResponse,
    StatsResponse, TokenUriResponse, TokensResponse, TrustedRemoteResponse, TrustedRemotesResponse,
};
use crate::state::{
    is_minter, origin_chain, owners, CONFIG, MINTED_COUNT, OUTBOUND_TRANSFERS, RECEIVED_MESSAGES,
    STATS, TOKEN_COUNT, TRUSTED_REMOTES,
};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

// ============================================================================
// Core Queries
// ============================================================================

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        name: config.name,
        symbol: config.symbol,
        base_uri: config.base_uri,
        fee_collector: config.fee_collector,
        endpoint: config.endpoint,
        this_chain_id: config.this_chain_id,
        token_id_start: config.token_id_start,
        max_supply: config.max_supply,
        revealed: config.revealed,
        paused: config.paused,
    })
}

pub fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.load(deps.storage)?;
    Ok(StatsResponse {
        total_minted: stats.total_minted,
        total_sent: stats.total_sent,
        total_received: stats.total_received,
    })
}

// ============================================================================
// Token Queries
// ============================================================================

pub fn query_owner_of(deps: Deps, token_id: u64) -> StdResult<OwnerOfResponse> {
    let owner = owners()
        .may_load(deps.storage, token_id)?
        .ok_or_else(|| {
            StdError::generic_err(ContractError::NonexistentToken { token_id }.to_string())
        })?;
    Ok(OwnerOfResponse { owner })
}

pub fn query_chain_id(deps: Deps, token_id: u64) -> StdResult<ChainIdResponse> {
    Ok(ChainIdResponse {
        token_id,
        chain_id: origin_chain(deps.storage, token_id)?,
    })
}

/// Token URIs are computed for any id, live or not.
pub fn query_token_uri(deps: Deps, token_id: u64) -> StdResult<TokenUriResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(TokenUriResponse {
        token_uri: token_uri(&config.base_uri, config.revealed, token_id),
    })
}

pub fn query_contract_uri(deps: Deps) -> StdResult<ContractUriResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ContractUriResponse {
        contract_uri: config.contract_uri,
    })
}

pub fn query_num_tokens(deps: Deps) -> StdResult<NumTokensResponse> {
    Ok(NumTokensResponse {
        count: TOKEN_COUNT.load(deps.storage)?,
        minted: MINTED_COUNT.load(deps.storage)?,
    })
}

pub fn query_tokens(
    deps: Deps,
    owner: String,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<TokensResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let tokens = owners()
        .idx
        .owner
        .prefix(owner)
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .collect::<StdResult<Vec<_>>>()?;

    Ok(TokensResponse { tokens })
}

pub fn query_all_tokens(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<TokensResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let tokens = owners()
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .collect::<StdResult<Vec<_>>>()?;

    Ok(TokensResponse { tokens })
}

pub fn query_is_minter(deps: Deps, address: String) -> StdResult<IsMinterResponse> {
    let addr = deps.api.addr_validate(&address)?;
    Ok(IsMinterResponse {
        is_minter: is_minter(deps.storage, &addr)?,
    })
}

// ============================================================================
// Bridge Queries
// ============================================================================

pub fn query_trusted_remote(deps: Deps, chain_id: u16) -> StdResult<TrustedRemoteResponse> {
    Ok(TrustedRemoteResponse {
        chain_id,
        remote: TRUSTED_REMOTES.may_load(deps.storage, chain_id)?,
    })
}

pub fn query_trusted_remotes(
    deps: Deps,
    start_after: Option<u16>,
    limit: Option<u32>,
) -> StdResult<TrustedRemotesResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let remotes = TRUSTED_REMOTES
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (chain_id, remote): (u16, Binary) = item?;
            Ok(TrustedRemoteResponse {
                chain_id,
                remote: Some(remote),
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(TrustedRemotesResponse { remotes })
}

pub fn query_outbound_transfer(
    deps: Deps,
    nonce: u64,
) -> StdResult<Option<OutboundTransferResponse>> {
    let transfer = OUTBOUND_TRANSFERS.may_load(deps.storage, nonce)?;
    Ok(transfer.map(|t| OutboundTransferResponse {
        nonce,
        token_id: t.token_id,
        dst_chain_id: t.dst_chain_id,
        to_address: t.to_address,
        sender: t.sender,
        prior_origin: t.prior_origin,
        sent_at: t.sent_at,
    }))
}

pub fn query_is_message_processed(
    deps: Deps,
    src_chain_id: u16,
    src_address: Binary,
    nonce: u64,
) -> StdResult<MessageProcessedResponse> {
    Ok(MessageProcessedResponse {
        processed: RECEIVED_MESSAGES.has(
            deps.storage,
            (src_chain_id, src_address.as_slice(), nonce),
        ),
    })
}
