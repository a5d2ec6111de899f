//! Claimed-quantity bookkeeping shared by every minting path.
//!
//! Records are keyed by `(collection, address)`, created lazily, and only ever
//! grow. A claim that would push a record past its allowance is rejected
//! without touching storage.

use cosmwasm_std::{Addr, StdResult, Storage};
use cw_storage_plus::Map;

use crate::error::ContractError;

/// (collection, claimant) => quantity claimed so far
pub const CLAIMED: Map<(&Addr, &Addr), u32> = Map::new("claimed");

pub fn quantity_claimed(
    storage: &dyn Storage,
    collection: &Addr,
    address: &Addr,
) -> StdResult<u32> {
    Ok(CLAIMED
        .may_load(storage, (collection, address))?
        .unwrap_or(0))
}

/// Add `quantity` to the record if it stays within `allowance`.
///
/// Returns the new total.
pub fn record_claim(
    storage: &mut dyn Storage,
    collection: &Addr,
    address: &Addr,
    quantity: u32,
    allowance: u32,
) -> Result<u32, ContractError> {
    let claimed = quantity_claimed(storage, collection, address)?;
    let total = claimed
        .checked_add(quantity)
        .filter(|total| *total <= allowance)
        .ok_or(ContractError::AlreadyClaimed)?;

    CLAIMED.save(storage, (collection, address), &total)?;
    Ok(total)
}
