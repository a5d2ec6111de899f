//! Token registry handlers.
//!
//! This module handles:
//! - Sequential minting (minter role)
//! - Local transfers
//! - Origin chain overrides
//! - Reveal and metadata URIs
//!
//! It also owns the two primitives the bridge builds on: `burn_for_bridge` and
//! `mint_with_id`. Neither is reachable from a public entry point directly.

use cosmwasm_std::{Addr, DepsMut, Event, MessageInfo, Response, Storage};

use crate::error::ContractError;
use crate::state::{
    is_minter, load_owner, origin_chain, owners, Stats, CONFIG, MINTED_COUNT, ORIGIN_CHAINS,
    STATS, TOKEN_COUNT,
};

// ============================================================================
// Minting
// ============================================================================

/// Issue the next sequential token id to `to`.
pub fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    to: String,
) -> Result<Response, ContractError> {
    if !is_minter(deps.storage, &info.sender)? {
        return Err(ContractError::Forbidden);
    }

    let config = CONFIG.load(deps.storage)?;
    let recipient = deps.api.addr_validate(&to)?;

    let minted = MINTED_COUNT.load(deps.storage)?;
    if minted >= config.max_supply {
        return Err(ContractError::MaxSupplyReached {
            max_supply: config.max_supply,
        });
    }
    let token_id = config.token_id_start + minted;

    // Ids below token_id_start + max_supply may already be live if they
    // arrived from another chain.
    if owners().may_load(deps.storage, token_id)?.is_some() {
        return Err(ContractError::TokenAlreadyExists { token_id });
    }

    owners().save(deps.storage, token_id, &recipient)?;
    ORIGIN_CHAINS.remove(deps.storage, token_id);
    MINTED_COUNT.save(deps.storage, &(minted + 1))?;
    increment_token_count(deps.storage)?;
    STATS.update(deps.storage, |mut stats| -> Result<Stats, ContractError> {
        stats.total_minted += 1;
        Ok(stats)
    })?;

    Ok(Response::new()
        .add_event(
            Event::new("onft_mint")
                .add_attribute("token_id", token_id.to_string())
                .add_attribute("to", recipient.as_str())
                .add_attribute("minter", info.sender.as_str()),
        )
        .add_attribute("method", "mint")
        .add_attribute("token_id", token_id.to_string()))
}

/// Transfer a token between addresses on this chain.
pub fn execute_transfer_nft(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    token_id: u64,
) -> Result<Response, ContractError> {
    let owner = load_owner(deps.storage, token_id)?;
    if owner != info.sender {
        return Err(ContractError::NotOwner { token_id });
    }

    let recipient = deps.api.addr_validate(&recipient)?;
    owners().save(deps.storage, token_id, &recipient)?;

    Ok(Response::new()
        .add_event(
            Event::new("onft_transfer")
                .add_attribute("token_id", token_id.to_string())
                .add_attribute("from", owner.as_str())
                .add_attribute("to", recipient.as_str()),
        )
        .add_attribute("method", "transfer_nft"))
}

// ============================================================================
// Bridge Primitives
// ============================================================================

/// Remove a token that is leaving this chain.
///
/// Returns the owner before the burn and the origin the token carried here.
pub(crate) fn burn_for_bridge(
    storage: &mut dyn Storage,
    token_id: u64,
    caller: &Addr,
) -> Result<(Addr, u16), ContractError> {
    let owner = load_owner(storage, token_id)?;
    if owner != *caller {
        return Err(ContractError::NotOwner { token_id });
    }
    let origin = origin_chain(storage, token_id)?;

    owners().remove(storage, token_id)?;
    ORIGIN_CHAINS.remove(storage, token_id);
    TOKEN_COUNT.update(storage, |count| -> Result<u64, ContractError> {
        Ok(count.saturating_sub(1))
    })?;

    Ok((owner, origin))
}

/// Materialise a token that arrived from `origin`, keeping its id.
pub(crate) fn mint_with_id(
    storage: &mut dyn Storage,
    token_id: u64,
    to: &Addr,
    origin: u16,
) -> Result<(), ContractError> {
    if owners().may_load(storage, token_id)?.is_some() {
        return Err(ContractError::TokenAlreadyExists { token_id });
    }
    owners().save(storage, token_id, to)?;
    ORIGIN_CHAINS.save(storage, token_id, &origin)?;
    increment_token_count(storage)
}

fn increment_token_count(storage: &mut dyn Storage) -> Result<(), ContractError> {
    TOKEN_COUNT.update(storage, |count| -> Result<u64, ContractError> {
        Ok(count + 1)
    })?;
    Ok(())
}

// ============================================================================
// Origin Chain Overrides
// ============================================================================

/// Override the origin chain of a single token id.
pub fn execute_set_chain_id(
    deps: DepsMut,
    info: MessageInfo,
    token_id: u64,
    chain_id: u16,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Forbidden);
    }

    ORIGIN_CHAINS.save(deps.storage, token_id, &chain_id)?;

    Ok(Response::new()
        .add_attribute("method", "set_chain_id")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("chain_id", chain_id.to_string()))
}

/// Back-fill origin chains for many token ids at once.
pub fn execute_set_chain_ids(
    deps: DepsMut,
    info: MessageInfo,
    token_ids: Vec<u64>,
    chain_ids: Vec<u16>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Forbidden);
    }

    if token_ids.len() != chain_ids.len() {
        return Err(ContractError::LengthMismatch {
            token_ids: token_ids.len(),
            chain_ids: chain_ids.len(),
        });
    }

    for (token_id, chain_id) in token_ids.iter().zip(chain_ids.iter()) {
        ORIGIN_CHAINS.save(deps.storage, *token_id, chain_id)?;
    }

    Ok(Response::new()
        .add_attribute("method", "set_chain_ids")
        .add_attribute("count", token_ids.len().to_string()))
}

// ============================================================================
// Metadata
// ============================================================================

/// Set the reveal flag. `ActivateReveal` is `set_reveal(true)`.
pub fn execute_set_reveal(
    deps: DepsMut,
    info: MessageInfo,
    revealed: bool,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Forbidden);
    }

    config.revealed = revealed;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_reveal")
        .add_attribute("revealed", revealed.to_string()))
}

pub fn execute_set_base_uri(
    deps: DepsMut,
    info: MessageInfo,
    base_uri: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Forbidden);
    }

    config.base_uri = base_uri.clone();
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_base_uri")
        .add_attribute("base_uri", base_uri))
}

pub fn execute_set_contract_uri(
    deps: DepsMut,
    info: MessageInfo,
    contract_uri: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Forbidden);
    }

    config.contract_uri = contract_uri.clone();
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_contract_uri")
        .add_attribute("contract_uri", contract_uri))
}

/// Token URI as a pure function of id and the reveal flag.
pub fn token_uri(base_uri: &str, revealed: bool, token_id: u64) -> String {
    if revealed {
        format!("{}{}", base_uri, token_id)
    } else {
        base_uri.to_string()
    }
}
