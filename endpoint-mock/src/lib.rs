//! Test transport endpoint.
//!
//! One instance stands in for the messaging layer on one simulated chain.
//! `Send` from a collection is relayed to the endpoint registered for the
//! destination chain, which delivers it through `LzReceive`. Delivery can be
//! held back and failed deliveries are stored, so tests can replay or drop
//! messages at will.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
