//! Cross-chain send/receive handlers.
//!
//! # Outgoing Flow (Burn)
//! 1. Owner calls `Send`; the token is removed from this chain
//! 2. A transfer payload is dispatched to the endpoint, addressed to the
//!    trusted remote registered for the destination chain
//! 3. The transfer is logged under the next outbound nonce
//!
//! # Incoming Flow (Re-mint)
//! 1. The endpoint calls `LzReceive` with the authenticated source chain and
//!    source address
//! 2. The source must equal the trusted remote for that chain
//! 3. Each `(chain, source address, nonce)` is applied at most once
//! 4. The token is materialised with the same id and origin = source chain
//!
//! A token whose message is never delivered stays absent on both chains; the
//! outbound log is the only local trace of it.

use cosmwasm_std::{
    to_json_binary, Binary, CosmosMsg, DepsMut, Env, Event, MessageInfo, Response, WasmMsg,
};

use common::transport::EndpointExecuteMsg;
use common::TransferPayload;

use crate::error::ContractError;
use crate::execute::registry::{burn_for_bridge, mint_with_id};
use crate::state::{
    OutboundTransfer, Stats, CONFIG, OUTBOUND_NONCE, OUTBOUND_TRANSFERS, RECEIVED_MESSAGES,
    STATS, TRUSTED_REMOTES,
};

// ============================================================================
// Send
// ============================================================================

/// Burn a token locally and dispatch it to another chain.
#[allow(clippy::too_many_arguments)]
pub fn execute_send(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    dst_chain_id: u16,
    to_address: Binary,
    token_id: u64,
    refund_address: String,
    zro_payment_address: Option<String>,
    adapter_params: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if config.paused {
        return Err(ContractError::Paused);
    }

    let destination = TRUSTED_REMOTES
        .may_load(deps.storage, dst_chain_id)?
        .ok_or(ContractError::TrustedRemoteNotSet {
            chain_id: dst_chain_id,
        })?;

    if to_address.is_empty() {
        return Err(ContractError::InvalidPayload {
            reason: "to_address must not be empty".to_string(),
        });
    }

    let refund_address = deps.api.addr_validate(&refund_address)?;
    if let Some(zro) = &zro_payment_address {
        deps.api.addr_validate(zro)?;
    }

    let (owner, prior_origin) = burn_for_bridge(deps.storage, token_id, &info.sender)?;

    let payload = TransferPayload {
        token_id,
        origin_chain: config.this_chain_id,
        to_address: to_address.to_vec(),
    }
    .encode();

    let nonce = OUTBOUND_NONCE.load(deps.storage)?;
    OUTBOUND_NONCE.save(deps.storage, &(nonce + 1))?;
    OUTBOUND_TRANSFERS.save(
        deps.storage,
        nonce,
        &OutboundTransfer {
            token_id,
            dst_chain_id,
            to_address: to_address.clone(),
            sender: owner.clone(),
            prior_origin,
            sent_at: env.block.time,
        },
    )?;

    STATS.update(deps.storage, |mut stats| -> Result<Stats, ContractError> {
        stats.total_sent += 1;
        Ok(stats)
    })?;

    let send_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.endpoint.to_string(),
        msg: to_json_binary(&EndpointExecuteMsg::Send {
            dst_chain_id,
            destination,
            payload,
            refund_address: refund_address.to_string(),
            zro_payment_address,
            adapter_params,
        })?,
        funds: info.funds,
    });

    Ok(Response::new()
        .add_message(send_msg)
        .add_event(
            Event::new("onft_send")
                .add_attribute("token_id", token_id.to_string())
                .add_attribute("from", owner.as_str())
                .add_attribute("dst_chain_id", dst_chain_id.to_string())
                .add_attribute("to_address", hex::encode(to_address.as_slice()))
                .add_attribute("nonce", nonce.to_string()),
        )
        .add_attribute("method", "send")
        .add_attribute("token_id", token_id.to_string()))
}

// ============================================================================
// Receive
// ============================================================================

/// Apply an inbound transfer delivered by the endpoint.
pub fn execute_lz_receive(
    deps: DepsMut,
    info: MessageInfo,
    src_chain_id: u16,
    src_address: Binary,
    nonce: u64,
    payload: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if info.sender != config.endpoint {
        return Err(ContractError::Forbidden);
    }

    let trusted = TRUSTED_REMOTES.may_load(deps.storage, src_chain_id)?;
    if trusted.as_ref() != Some(&src_address) {
        return Err(ContractError::UntrustedSource {
            chain_id: src_chain_id,
        });
    }

    if RECEIVED_MESSAGES.has(deps.storage, (src_chain_id, src_address.as_slice(), nonce)) {
        return Err(ContractError::MessageAlreadyProcessed {
            src_chain_id,
            nonce,
        });
    }

    let transfer =
        TransferPayload::decode(payload.as_slice()).map_err(|e| ContractError::InvalidPayload {
            reason: e.to_string(),
        })?;

    if transfer.origin_chain != src_chain_id {
        return Err(ContractError::InvalidPayload {
            reason: format!(
                "origin chain {} does not match source chain {}",
                transfer.origin_chain, src_chain_id
            ),
        });
    }

    let recipient_str =
        String::from_utf8(transfer.to_address).map_err(|_| ContractError::InvalidPayload {
            reason: "recipient is not valid UTF-8".to_string(),
        })?;
    let recipient =
        deps.api
            .addr_validate(&recipient_str)
            .map_err(|e| ContractError::InvalidPayload {
                reason: format!("invalid recipient: {}", e),
            })?;

    mint_with_id(deps.storage, transfer.token_id, &recipient, src_chain_id)?;
    RECEIVED_MESSAGES.save(
        deps.storage,
        (src_chain_id, src_address.as_slice(), nonce),
        &true,
    )?;

    STATS.update(deps.storage, |mut stats| -> Result<Stats, ContractError> {
        stats.total_received += 1;
        Ok(stats)
    })?;

    Ok(Response::new()
        .add_event(
            Event::new("onft_receive")
                .add_attribute("token_id", transfer.token_id.to_string())
                .add_attribute("to", recipient.as_str())
                .add_attribute("src_chain_id", src_chain_id.to_string())
                .add_attribute("nonce", nonce.to_string()),
        )
        .add_attribute("method", "lz_receive")
        .add_attribute("token_id", transfer.token_id.to_string()))
}

// ============================================================================
// Bridge Configuration
// ============================================================================

/// Register the counterpart collection for a remote chain.
pub fn execute_set_trusted_remote(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u16,
    remote: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Forbidden);
    }

    if chain_id == 0 {
        return Err(ContractError::InvalidChainId { chain_id });
    }

    TRUSTED_REMOTES.save(deps.storage, chain_id, &remote)?;

    Ok(Response::new()
        .add_attribute("method", "set_trusted_remote")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("remote", hex::encode(remote.as_slice())))
}

/// Toggle the send-side circuit breaker. Receiving is never paused.
pub fn execute_pause_send_tokens(
    deps: DepsMut,
    info: MessageInfo,
    paused: bool,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Forbidden);
    }

    config.paused = paused;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "pause_send_tokens")
        .add_attribute("paused", paused.to_string()))
}
