//! Admin operations handlers.
//!
//! This module handles:
//! - Minter role management
//! - Endpoint and fee collector configuration
//! - Admin handover

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{CONFIG, MINTERS};

// ============================================================================
// Minter Role
// ============================================================================

pub fn execute_grant_minter(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Forbidden);
    }

    let minter = deps.api.addr_validate(&address)?;
    MINTERS.save(deps.storage, &minter, &true)?;

    Ok(Response::new()
        .add_attribute("method", "grant_minter")
        .add_attribute("minter", minter))
}

pub fn execute_revoke_minter(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Forbidden);
    }

    let minter = deps.api.addr_validate(&address)?;
    MINTERS.remove(deps.storage, &minter);

    Ok(Response::new()
        .add_attribute("method", "revoke_minter")
        .add_attribute("minter", minter))
}

// ============================================================================
// Configuration
// ============================================================================

pub fn execute_set_endpoint(
    deps: DepsMut,
    info: MessageInfo,
    endpoint: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Forbidden);
    }

    config.endpoint = deps.api.addr_validate(&endpoint)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_endpoint")
        .add_attribute("endpoint", config.endpoint))
}

pub fn execute_set_fee_collector(
    deps: DepsMut,
    info: MessageInfo,
    fee_collector: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Forbidden);
    }

    config.fee_collector = deps.api.addr_validate(&fee_collector)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_fee_collector")
        .add_attribute("fee_collector", config.fee_collector))
}

// ============================================================================
// Admin Transfer
// ============================================================================

/// Hand the admin role to another address in a single step.
pub fn execute_transfer_admin(
    deps: DepsMut,
    info: MessageInfo,
    new_admin: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Forbidden);
    }

    let previous = std::mem::replace(&mut config.admin, deps.api.addr_validate(&new_admin)?);
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "transfer_admin")
        .add_attribute("previous_admin", previous)
        .add_attribute("new_admin", config.admin))
}
