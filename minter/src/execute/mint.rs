//! Claim handlers.
//!
//! Both mint paths run the same sequence:
//! 1. Reject zero quantity
//! 2. Ask the eligibility policy for the caller's allowance
//! 3. Check payment against `price * quantity`
//! 4. Record the claim in the ledger (fails past the allowance)
//! 5. Issue one registry `Mint` per unit

use cosmwasm_std::{DepsMut, MessageInfo, Response, StdResult, Uint128};

use common::collection::mint_msg;

use crate::eligibility::{gate_for, Eligibility, PublicGate};
use crate::error::ContractError;
use crate::ledger::record_claim;
use crate::msg::Evidence;
use crate::state::{Config, CONFIG};

/// Gated mint under the configured policy.
pub fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    quantity: u32,
    evidence: Option<Evidence>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let gate = gate_for(&config)?;
    claim(
        deps,
        info,
        &config,
        gate.as_ref(),
        quantity,
        evidence.as_ref(),
        "mint",
    )
}

/// Open mint, gated only by the public phase flag.
pub fn execute_mint_public(
    deps: DepsMut,
    info: MessageInfo,
    quantity: u32,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let gate = PublicGate {
        active: config.public_mint_active,
        max_quantity: config.max_quantity,
    };
    claim(deps, info, &config, &gate, quantity, None, "mint_public")
}

fn claim(
    deps: DepsMut,
    info: MessageInfo,
    config: &Config,
    gate: &dyn Eligibility,
    quantity: u32,
    evidence: Option<&Evidence>,
    method: &str,
) -> Result<Response, ContractError> {
    if quantity == 0 {
        return Err(ContractError::InvalidQuantity);
    }

    let allowance = gate.allowance(deps.as_ref(), &info.sender, evidence)?;

    let required = config.price.checked_mul(Uint128::from(quantity))?;
    let paid = info
        .funds
        .iter()
        .filter(|coin| coin.denom == config.denom)
        .try_fold(Uint128::zero(), |acc, coin| acc.checked_add(coin.amount))?;
    if paid < required {
        return Err(ContractError::InsufficientFunds {
            required: format!("{}{}", required, config.denom),
            provided: format!("{}{}", paid, config.denom),
        });
    }

    let claimed_total = record_claim(
        deps.storage,
        &config.collection,
        &info.sender,
        quantity,
        allowance,
    )?;
    gate.consume(deps.storage, &info.sender, evidence)?;

    let mint_msgs = (0..quantity)
        .map(|_| mint_msg(&config.collection, &info.sender))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(Response::new()
        .add_messages(mint_msgs)
        .add_attribute("method", method)
        .add_attribute("minter", info.sender.as_str())
        .add_attribute("quantity", quantity.to_string())
        .add_attribute("paid", paid.to_string())
        .add_attribute("claimed_total", claimed_total.to_string()))
}
