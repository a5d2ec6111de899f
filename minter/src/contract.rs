//! Minter Contract - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use common::merkle::parse_digest;

use crate::error::ContractError;
use crate::execute::{
    execute_add_to_whitelist, execute_mint, execute_mint_public, execute_set_public_mint_start,
    execute_set_quantity, execute_transfer_ownership, execute_withdraw,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, PolicyMsg, QueryMsg};
use crate::query::{
    query_config, query_is_pass_used, query_is_whitelisted, query_quantity_claimed,
    query_verify_proof,
};
use crate::state::{Config, Policy, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

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

    let policy = match msg.policy {
        PolicyMsg::MerkleProof { root } => {
            // Reject malformed roots up front
            parse_digest(&root)?;
            Policy::MerkleProof { root }
        }
        PolicyMsg::Allowlist {} => Policy::Allowlist {},
        PolicyMsg::PassHolder { pass_collection } => Policy::PassHolder {
            pass_collection: deps.api.addr_validate(&pass_collection)?,
        },
    };

    let config = Config {
        owner: deps.api.addr_validate(&msg.owner)?,
        collection: deps.api.addr_validate(&msg.collection)?,
        price: msg.price,
        denom: msg.denom,
        max_quantity: msg.max_quantity,
        dev_address: deps.api.addr_validate(&msg.dev_address)?,
        policy,
        public_mint_active: msg.public_mint_active,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("collection", config.collection)
        .add_attribute("price", config.price.to_string())
        .add_attribute("denom", config.denom)
        .add_attribute("max_quantity", config.max_quantity.to_string()))
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
        ExecuteMsg::Mint { quantity, evidence } => execute_mint(deps, info, quantity, evidence),
        ExecuteMsg::MintPublic { quantity } => execute_mint_public(deps, info, quantity),

        // Owner
        ExecuteMsg::AddToWhitelist { addresses } => {
            execute_add_to_whitelist(deps, info, addresses)
        }
        ExecuteMsg::SetQuantity { address, quantity } => {
            execute_set_quantity(deps, info, address, quantity)
        }
        ExecuteMsg::SetPublicMintStart { active } => {
            execute_set_public_mint_start(deps, info, active)
        }
        ExecuteMsg::Withdraw { destination } => execute_withdraw(deps, env, info, destination),
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, new_owner)
        }
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::QuantityClaimed { address } => {
            to_json_binary(&query_quantity_claimed(deps, address)?)
        }
        QueryMsg::IsWhitelisted { address } => {
            to_json_binary(&query_is_whitelisted(deps, address)?)
        }
        QueryMsg::IsPassUsed { token_id } => to_json_binary(&query_is_pass_used(deps, token_id)?),
        QueryMsg::VerifyProof { address, proof } => {
            to_json_binary(&query_verify_proof(deps, address, proof)?)
        }
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
