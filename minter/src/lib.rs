//! ONFT Minter Contract - Gated Minting
//!
//! Sells tokens from an `onft` collection under one eligibility policy:
//! - Merkle allowlist proof
//! - On-chain allowlist map with per-address quantities
//! - Pass holder (one claim per unused pass token)
//!
//! plus an open public phase the owner can toggle. Every path shares the same
//! claim ledger, price check and per-unit issuance. Withdrawals send 2.5% of
//! the balance to a fixed dev address and the rest to the owner's choice.

pub mod contract;
pub mod eligibility;
pub mod error;
mod execute;
pub mod ledger;
pub mod msg;
mod query;
pub mod state;

pub use crate::eligibility::Eligibility;
pub use crate::error::ContractError;
