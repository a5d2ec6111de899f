//! Cross-chain transfer payload codec
//!
//! The payload is opaque to the transport. Words are big-endian and
//! left-padded to 32 bytes so EVM counterparts can decode it with
//! `abi.decode`-style slicing.
//!
//! # Byte Layout
//! - Bytes 0-31:   token id (uint256)
//! - Bytes 32-63:  origin chain id (uint256)
//! - Bytes 64-95:  recipient length in bytes (uint256)
//! - Bytes 96-:    recipient bytes, unpadded

use cosmwasm_std::Binary;
use thiserror::Error;

/// Size of the fixed header (three 32-byte words)
pub const HEADER_LEN: usize = 96;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PayloadError {
    #[error("Payload too short: expected at least {expected} bytes, got {got}")]
    TooShort { expected: usize, got: usize },

    #[error("Payload field out of range: {field}")]
    ValueOutOfRange { field: &'static str },

    #[error("Recipient length mismatch: declared {declared}, actual {actual}")]
    LengthMismatch { declared: u64, actual: usize },

    #[error("Recipient must not be empty")]
    EmptyRecipient,
}

/// Decoded transfer message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferPayload {
    pub token_id: u64,
    /// Chain the token leaves from
    pub origin_chain: u16,
    /// Recipient address bytes on the destination chain
    pub to_address: Vec<u8>,
}

impl TransferPayload {
    pub fn encode(&self) -> Binary {
        let mut data = vec![0u8; HEADER_LEN + self.to_address.len()];
        data[24..32].copy_from_slice(&self.token_id.to_be_bytes());
        data[62..64].copy_from_slice(&self.origin_chain.to_be_bytes());
        data[88..96].copy_from_slice(&(self.to_address.len() as u64).to_be_bytes());
        data[HEADER_LEN..].copy_from_slice(&self.to_address);
        Binary::from(data)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, PayloadError> {
        if bytes.len() < HEADER_LEN {
            return Err(PayloadError::TooShort {
                expected: HEADER_LEN,
                got: bytes.len(),
            });
        }

        let token_id = read_word(&bytes[0..32], "token_id")?;
        let origin_chain = u16::try_from(read_word(&bytes[32..64], "origin_chain")?)
            .map_err(|_| PayloadError::ValueOutOfRange {
                field: "origin_chain",
            })?;
        let declared = read_word(&bytes[64..96], "to_address_len")?;

        let to_address = &bytes[HEADER_LEN..];
        if declared != to_address.len() as u64 {
            return Err(PayloadError::LengthMismatch {
                declared,
                actual: to_address.len(),
            });
        }
        if to_address.is_empty() {
            return Err(PayloadError::EmptyRecipient);
        }

        Ok(Self {
            token_id,
            origin_chain,
            to_address: to_address.to_vec(),
        })
    }
}

/// Read a uint256 word that must fit in a u64.
fn read_word(word: &[u8], field: &'static str) -> Result<u64, PayloadError> {
    if word[..24].iter().any(|b| *b != 0) {
        return Err(PayloadError::ValueOutOfRange { field });
    }
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&word[24..32]);
    Ok(u64::from_be_bytes(buf))
}
