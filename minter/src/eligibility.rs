//! Eligibility policies.
//!
//! Every minting path runs the same claim state machine and differs only in
//! who may claim and how many units. A policy answers that with an allowance
//! for the caller, or an error if the caller is not eligible.

use cosmwasm_std::{Addr, Deps, StdResult, Storage};

use common::collection::query_owner_of;
use common::merkle::{parse_digest, parse_proof, verify, Digest};

use crate::error::ContractError;
use crate::msg::Evidence;
use crate::state::{Config, Policy, CUSTOM_QUANTITY, PASS_ALLOWANCE, USED_PASSES, WHITELIST};

pub trait Eligibility {
    /// Allowance of `claimant` under this policy.
    fn allowance(
        &self,
        deps: Deps,
        claimant: &Addr,
        evidence: Option<&Evidence>,
    ) -> Result<u32, ContractError>;

    /// Spend single-use evidence once the claim has been accepted.
    fn consume(
        &self,
        _storage: &mut dyn Storage,
        _claimant: &Addr,
        _evidence: Option<&Evidence>,
    ) -> Result<(), ContractError> {
        Ok(())
    }
}

/// Gate for the configured gated-mint policy.
pub fn gate_for(config: &Config) -> Result<Box<dyn Eligibility>, ContractError> {
    Ok(match &config.policy {
        Policy::MerkleProof { root } => Box::new(MerkleProofGate {
            root: parse_digest(root)?,
            max_quantity: config.max_quantity,
        }),
        Policy::Allowlist {} => Box::new(AllowlistGate {
            max_quantity: config.max_quantity,
        }),
        Policy::PassHolder { pass_collection } => Box::new(PassHolderGate {
            pass_collection: pass_collection.clone(),
        }),
    })
}

/// Custom quantity if one was set, otherwise the global cap.
pub fn allowance_for(storage: &dyn Storage, address: &Addr, max_quantity: u32) -> StdResult<u32> {
    Ok(CUSTOM_QUANTITY
        .may_load(storage, address)?
        .unwrap_or(max_quantity))
}

pub fn is_whitelisted(storage: &dyn Storage, address: &Addr) -> StdResult<bool> {
    Ok(WHITELIST.may_load(storage, address)?.unwrap_or(false))
}

// ============================================================================
// Merkle Proof
// ============================================================================

pub struct MerkleProofGate {
    pub root: Digest,
    pub max_quantity: u32,
}

impl Eligibility for MerkleProofGate {
    fn allowance(
        &self,
        _deps: Deps,
        claimant: &Addr,
        evidence: Option<&Evidence>,
    ) -> Result<u32, ContractError> {
        let proof = match evidence {
            Some(Evidence::Proof { proof }) => {
                parse_proof(proof).map_err(|_| ContractError::NotWhitelisted)?
            }
            _ => return Err(ContractError::NotWhitelisted),
        };

        if !verify(&self.root, claimant.as_str(), &proof) {
            return Err(ContractError::NotWhitelisted);
        }
        Ok(self.max_quantity)
    }
}

// ============================================================================
// Allowlist Map
// ============================================================================

pub struct AllowlistGate {
    pub max_quantity: u32,
}

impl Eligibility for AllowlistGate {
    fn allowance(
        &self,
        deps: Deps,
        claimant: &Addr,
        evidence: Option<&Evidence>,
    ) -> Result<u32, ContractError> {
        if evidence.is_some() || !is_whitelisted(deps.storage, claimant)? {
            return Err(ContractError::NotWhitelisted);
        }
        Ok(allowance_for(deps.storage, claimant, self.max_quantity)?)
    }
}

// ============================================================================
// Pass Holder
// ============================================================================

pub struct PassHolderGate {
    pub pass_collection: Addr,
}

impl PassHolderGate {
    fn pass_id(evidence: Option<&Evidence>) -> Result<u64, ContractError> {
        match evidence {
            Some(Evidence::Pass { token_id }) => Ok(*token_id),
            _ => Err(ContractError::NotWhitelisted),
        }
    }
}

impl Eligibility for PassHolderGate {
    fn allowance(
        &self,
        deps: Deps,
        claimant: &Addr,
        evidence: Option<&Evidence>,
    ) -> Result<u32, ContractError> {
        let token_id = Self::pass_id(evidence)?;

        if USED_PASSES.has(deps.storage, token_id) {
            return Err(ContractError::PassAlreadyUsed { token_id });
        }

        // Unknown passes fail the owner query
        let owner = query_owner_of(&deps.querier, &self.pass_collection, token_id)
            .map_err(|_| ContractError::NotWhitelisted)?;
        if owner != *claimant {
            return Err(ContractError::NotWhitelisted);
        }
        Ok(PASS_ALLOWANCE)
    }

    fn consume(
        &self,
        storage: &mut dyn Storage,
        claimant: &Addr,
        evidence: Option<&Evidence>,
    ) -> Result<(), ContractError> {
        let token_id = Self::pass_id(evidence)?;
        USED_PASSES.save(storage, token_id, claimant)?;
        Ok(())
    }
}

// ============================================================================
// Public
// ============================================================================

pub struct PublicGate {
    pub active: bool,
    pub max_quantity: u32,
}

impl Eligibility for PublicGate {
    fn allowance(
        &self,
        _deps: Deps,
        _claimant: &Addr,
        _evidence: Option<&Evidence>,
    ) -> Result<u32, ContractError> {
        if !self.active {
            return Err(ContractError::PublicMintNotStarted);
        }
        Ok(self.max_quantity)
    }
}
