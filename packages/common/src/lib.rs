//! Common - Shared Types and Utilities for the ONFT Contracts
//!
//! This package provides the pieces shared by the collection (`onft`), the
//! `minter` and the test transport endpoint:
//! - `merkle` - allowlist commitment, membership proofs and verification
//! - `payload` - binary codec for cross-chain transfer messages
//! - `collection` - the subset of the collection interface other contracts call
//! - `transport` - messages exchanged between a collection and its endpoint

pub mod collection;
pub mod merkle;
pub mod payload;
pub mod transport;

pub use merkle::{keccak256, verify, Digest, MerkleAllowlist, MerkleError};
pub use payload::{PayloadError, TransferPayload};
