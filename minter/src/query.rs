//! Query handlers for the minter contract.

use cosmwasm_std::{Deps, HexBinary, StdResult};

use common::merkle::{parse_digest, parse_proof, verify};

use crate::eligibility::{allowance_for, is_whitelisted};
use crate::ledger::quantity_claimed;
use crate::msg::{
    ConfigResponse, IsPassUsedResponse, IsWhitelistedResponse, QuantityClaimedResponse,
    VerifyProofResponse,
};
use crate::state::{Policy, CONFIG, USED_PASSES};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        collection: config.collection,
        price: config.price,
        denom: config.denom,
        max_quantity: config.max_quantity,
        dev_address: config.dev_address,
        policy: config.policy,
        public_mint_active: config.public_mint_active,
    })
}

pub fn query_quantity_claimed(deps: Deps, address: String) -> StdResult<QuantityClaimedResponse> {
    let config = CONFIG.load(deps.storage)?;
    let address = deps.api.addr_validate(&address)?;
    let claimed = quantity_claimed(deps.storage, &config.collection, &address)?;
    Ok(QuantityClaimedResponse { address, claimed })
}

pub fn query_is_whitelisted(deps: Deps, address: String) -> StdResult<IsWhitelistedResponse> {
    let config = CONFIG.load(deps.storage)?;
    let address = deps.api.addr_validate(&address)?;
    Ok(IsWhitelistedResponse {
        whitelisted: is_whitelisted(deps.storage, &address)?,
        allowance: allowance_for(deps.storage, &address, config.max_quantity)?,
    })
}

pub fn query_is_pass_used(deps: Deps, token_id: u64) -> StdResult<IsPassUsedResponse> {
    let redeemed_by = USED_PASSES.may_load(deps.storage, token_id)?;
    Ok(IsPassUsedResponse {
        used: redeemed_by.is_some(),
        redeemed_by,
    })
}

/// Malformed proofs and non-Merkle policies verify as false.
pub fn query_verify_proof(
    deps: Deps,
    address: String,
    proof: Vec<HexBinary>,
) -> StdResult<VerifyProofResponse> {
    let config = CONFIG.load(deps.storage)?;
    let valid = match &config.policy {
        Policy::MerkleProof { root } => match (parse_digest(root), parse_proof(&proof)) {
            (Ok(root), Ok(proof)) => verify(&root, &address, &proof),
            _ => false,
        },
        _ => false,
    };
    Ok(VerifyProofResponse { valid })
}
