//! ONFT Collection Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_grant_minter, execute_lz_receive, execute_mint, execute_pause_send_tokens,
    execute_revoke_minter, execute_send, execute_set_base_uri, execute_set_chain_id,
    execute_set_chain_ids, execute_set_contract_uri, execute_set_endpoint,
    execute_set_fee_collector, execute_set_reveal, execute_set_trusted_remote,
    execute_transfer_admin, execute_transfer_nft,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_all_tokens, query_chain_id, query_config, query_contract_uri,
    query_is_message_processed, query_is_minter, query_num_tokens, query_outbound_transfer,
    query_owner_of, query_stats, query_token_uri, query_tokens,
    query_trusted_remote, query_trusted_remotes,
};
use crate::state::{
    Config, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, MINTED_COUNT, MINTERS,
    NATIVE_ORIGIN, OUTBOUND_NONCE, STATS, TOKEN_COUNT,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = deps.api.addr_validate(&msg.admin)?;
    let endpoint = deps.api.addr_validate(&msg.endpoint)?;
    let fee_collector = deps.api.addr_validate(&msg.fee_collector)?;

    if msg.this_chain_id == NATIVE_ORIGIN {
        return Err(ContractError::InvalidChainId {
            chain_id: msg.this_chain_id,
        });
    }

    if msg.max_supply == 0 {
        return Err(ContractError::InvalidConfig {
            reason: "max_supply must be greater than zero".to_string(),
        });
    }
    if msg.token_id_start.checked_add(msg.max_supply).is_none() {
        return Err(ContractError::InvalidConfig {
            reason: "token id range overflows u64".to_string(),
        });
    }

    let config = Config {
        admin,
        name: msg.name,
        symbol: msg.symbol,
        contract_uri: msg.base_uri.clone(),
        base_uri: msg.base_uri,
        fee_collector,
        endpoint,
        this_chain_id: msg.this_chain_id,
        token_id_start: msg.token_id_start,
        max_supply: msg.max_supply,
        revealed: false,
        paused: false,
    };
    CONFIG.save(deps.storage, &config)?;

    for minter in &msg.minters {
        let minter = deps.api.addr_validate(minter)?;
        MINTERS.save(deps.storage, &minter, &true)?;
    }

    MINTED_COUNT.save(deps.storage, &0u64)?;
    TOKEN_COUNT.save(deps.storage, &0u64)?;
    OUTBOUND_NONCE.save(deps.storage, &0u64)?;
    STATS.save(
        deps.storage,
        &Stats {
            total_minted: 0,
            total_sent: 0,
            total_received: 0,
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("this_chain_id", config.this_chain_id.to_string())
        .add_attribute("token_id_start", config.token_id_start.to_string())
        .add_attribute("max_supply", config.max_supply.to_string())
        .add_attribute("minter_count", msg.minters.len().to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Registry
        ExecuteMsg::Mint { to } => execute_mint(deps, info, to),
        ExecuteMsg::TransferNft {
            recipient,
            token_id,
        } => execute_transfer_nft(deps, info, recipient, token_id),

        // Cross-chain
        ExecuteMsg::Send {
            dst_chain_id,
            to_address,
            token_id,
            refund_address,
            zro_payment_address,
            adapter_params,
        } => execute_send(
            deps,
            env,
            info,
            dst_chain_id,
            to_address,
            token_id,
            refund_address,
            zro_payment_address,
            adapter_params,
        ),
        ExecuteMsg::LzReceive {
            src_chain_id,
            src_address,
            nonce,
            payload,
        } => execute_lz_receive(deps, info, src_chain_id, src_address, nonce, payload),

        // Governance
        ExecuteMsg::SetTrustedRemote { chain_id, remote } => {
            execute_set_trusted_remote(deps, info, chain_id, remote)
        }
        ExecuteMsg::PauseSendTokens { paused } => execute_pause_send_tokens(deps, info, paused),
        ExecuteMsg::SetEndpoint { endpoint } => execute_set_endpoint(deps, info, endpoint),
        ExecuteMsg::GrantMinter { address } => execute_grant_minter(deps, info, address),
        ExecuteMsg::RevokeMinter { address } => execute_revoke_minter(deps, info, address),
        ExecuteMsg::SetChainId { token_id, chain_id } => {
            execute_set_chain_id(deps, info, token_id, chain_id)
        }
        ExecuteMsg::SetChainIds {
            token_ids,
            chain_ids,
        } => execute_set_chain_ids(deps, info, token_ids, chain_ids),
        ExecuteMsg::ActivateReveal {} => execute_set_reveal(deps, info, true),
        ExecuteMsg::SetReveal { revealed } => execute_set_reveal(deps, info, revealed),
        ExecuteMsg::SetBaseUri { base_uri } => execute_set_base_uri(deps, info, base_uri),
        ExecuteMsg::SetContractUri { contract_uri } => {
            execute_set_contract_uri(deps, info, contract_uri)
        }
        ExecuteMsg::SetFeeCollector { fee_collector } => {
            execute_set_fee_collector(deps, info, fee_collector)
        }

        // Admin transfer
        ExecuteMsg::TransferAdmin { new_admin } => execute_transfer_admin(deps, info, new_admin),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),

        // Tokens
        QueryMsg::OwnerOf { token_id } => to_json_binary(&query_owner_of(deps, token_id)?),
        QueryMsg::ChainId { token_id } => to_json_binary(&query_chain_id(deps, token_id)?),
        QueryMsg::TokenUri { token_id } => to_json_binary(&query_token_uri(deps, token_id)?),
        QueryMsg::ContractUri {} => to_json_binary(&query_contract_uri(deps)?),
        QueryMsg::NumTokens {} => to_json_binary(&query_num_tokens(deps)?),
        QueryMsg::Tokens {
            owner,
            start_after,
            limit,
        } => to_json_binary(&query_tokens(deps, owner, start_after, limit)?),
        QueryMsg::AllTokens { start_after, limit } => {
            to_json_binary(&query_all_tokens(deps, start_after, limit)?)
        }
        QueryMsg::IsMinter { address } => to_json_binary(&query_is_minter(deps, address)?),

        // Bridge
        QueryMsg::TrustedRemote { chain_id } => {
            to_json_binary(&query_trusted_remote(deps, chain_id)?)
        }
        QueryMsg::TrustedRemotes { start_after, limit } => {
            to_json_binary(&query_trusted_remotes(deps, start_after, limit)?)
        }
        QueryMsg::OutboundTransfer { nonce } => {
            to_json_binary(&query_outbound_transfer(deps, nonce)?)
        }
        QueryMsg::IsMessageProcessed {
            src_chain_id,
            src_address,
            nonce,
        } => to_json_binary(&query_is_message_processed(
            deps,
            src_chain_id,
            src_address,
            nonce,
        )?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
