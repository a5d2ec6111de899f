//! Execute handlers for the minter contract.
//!
//! - `mint` - Gated and public claims
//! - `owner` - Allowlist management, public phase, withdrawal, ownership

mod mint;
mod owner;

pub use mint::*;
pub use owner::*;
