//! Owner-only handlers.

use cosmwasm_std::{
    coins, BankMsg, CosmosMsg, DepsMut, Env, MessageInfo, Response, StdResult, Storage,
};

use crate::error::ContractError;
use crate::state::{
    Config, BPS_DENOMINATOR, CONFIG, CUSTOM_QUANTITY, DEV_SHARE_BPS, WHITELIST,
};

fn load_owned_config(storage: &dyn Storage, info: &MessageInfo) -> Result<Config, ContractError> {
    let config = CONFIG.load(storage)?;
    if info.sender != config.owner {
        return Err(ContractError::NotOwner);
    }
    Ok(config)
}

// ============================================================================
// Allowlist
// ============================================================================

pub fn execute_add_to_whitelist(
    deps: DepsMut,
    info: MessageInfo,
    addresses: Vec<String>,
) -> Result<Response, ContractError> {
    load_owned_config(deps.storage, &info)?;

    let validated = addresses
        .iter()
        .map(|address| deps.api.addr_validate(address))
        .collect::<StdResult<Vec<_>>>()?;
    for address in &validated {
        WHITELIST.save(deps.storage, address, &true)?;
    }

    Ok(Response::new()
        .add_attribute("method", "add_to_whitelist")
        .add_attribute("count", validated.len().to_string()))
}

pub fn execute_set_quantity(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
    quantity: u32,
) -> Result<Response, ContractError> {
    load_owned_config(deps.storage, &info)?;

    let address = deps.api.addr_validate(&address)?;
    CUSTOM_QUANTITY.save(deps.storage, &address, &quantity)?;

    Ok(Response::new()
        .add_attribute("method", "set_quantity")
        .add_attribute("address", address)
        .add_attribute("quantity", quantity.to_string()))
}

// ============================================================================
// Phases
// ============================================================================

pub fn execute_set_public_mint_start(
    deps: DepsMut,
    info: MessageInfo,
    active: bool,
) -> Result<Response, ContractError> {
    let mut config = load_owned_config(deps.storage, &info)?;

    config.public_mint_active = active;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_public_mint_start")
        .add_attribute("active", active.to_string()))
}

// ============================================================================
// Funds
// ============================================================================

/// Send the dev share of every held denom to the dev address and the rest
/// to `destination`.
pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    destination: String,
) -> Result<Response, ContractError> {
    let config = load_owned_config(deps.storage, &info)?;
    let destination = deps.api.addr_validate(&destination)?;

    let balances = deps.querier.query_all_balances(env.contract.address)?;

    let mut messages: Vec<CosmosMsg> = vec![];
    let mut res = Response::new()
        .add_attribute("method", "withdraw")
        .add_attribute("destination", destination.as_str())
        .add_attribute("dev_address", config.dev_address.as_str());

    for balance in balances.iter().filter(|coin| !coin.amount.is_zero()) {
        let dev_share = balance
            .amount
            .multiply_ratio(DEV_SHARE_BPS, BPS_DENOMINATOR);
        let remainder = balance.amount.checked_sub(dev_share)?;

        if !dev_share.is_zero() {
            messages.push(CosmosMsg::Bank(BankMsg::Send {
                to_address: config.dev_address.to_string(),
                amount: coins(dev_share.u128(), &balance.denom),
            }));
        }
        if !remainder.is_zero() {
            messages.push(CosmosMsg::Bank(BankMsg::Send {
                to_address: destination.to_string(),
                amount: coins(remainder.u128(), &balance.denom),
            }));
        }

        res = res.add_attribute(
            format!("withdrawn_{}", balance.denom),
            balance.amount.to_string(),
        );
    }

    if messages.is_empty() {
        return Err(ContractError::NothingToWithdraw);
    }

    Ok(res.add_messages(messages))
}

// ============================================================================
// Ownership
// ============================================================================

pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let mut config = load_owned_config(deps.storage, &info)?;

    config.owner = deps.api.addr_validate(&new_owner)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "transfer_ownership")
        .add_attribute("previous_owner", info.sender)
        .add_attribute("new_owner", config.owner))
}
