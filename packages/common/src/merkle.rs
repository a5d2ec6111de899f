//! Merkle allowlist
//!
//! Deterministic binary keccak256 tree over a set of addresses.
//!
//! # Construction
//! - leaf = `keccak256(keccak256(address bytes))`
//! - leaves are sorted and deduplicated, so the root only depends on the set
//! - internal node = `keccak256(min(a, b) || max(a, b))` (sorted pair)
//! - a level with an odd node count promotes its last node unchanged
//!
//! Because pairs are sorted before hashing, a proof is just the list of
//! sibling digests; left/right positions never need to be transmitted. A
//! promoted node has no sibling at that level and contributes nothing to the
//! proof, so `verify` needs no knowledge of the padding rule.
//!
//! Leaves are hashed twice so that no 64-byte input can pass as a leaf whose
//! digest equals an internal node.

use cosmwasm_std::HexBinary;
use thiserror::Error;
use tiny_keccak::{Hasher, Keccak};

/// 32-byte keccak256 digest
pub type Digest = [u8; 32];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MerkleError {
    #[error("Allowlist must contain at least one address")]
    EmptyAllowlist,

    #[error("Address is not a member of the allowlist: {address}")]
    NotAMember { address: String },

    #[error("Invalid digest: expected 32 bytes, got {got}")]
    InvalidDigest { got: usize },
}

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> Digest {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Leaf digest for an address.
pub fn leaf_hash(address: impl AsRef<[u8]>) -> Digest {
    keccak256(&keccak256(address.as_ref()))
}

/// Hash two sibling nodes in sorted order.
pub fn hash_pair(a: &Digest, b: &Digest) -> Digest {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut data = [0u8; 64];
    data[..32].copy_from_slice(lo);
    data[32..].copy_from_slice(hi);
    keccak256(&data)
}

/// Verify that `address` is committed to by `root`.
pub fn verify(root: &Digest, address: &str, proof: &[Digest]) -> bool {
    verify_leaf(root, leaf_hash(address), proof)
}

/// Verify a precomputed leaf digest against `root`.
pub fn verify_leaf(root: &Digest, leaf: Digest, proof: &[Digest]) -> bool {
    let computed = proof
        .iter()
        .fold(leaf, |current, sibling| hash_pair(&current, sibling));
    computed == *root
}

/// Parse a 32-byte digest from hex-encoded bytes.
pub fn parse_digest(bytes: &HexBinary) -> Result<Digest, MerkleError> {
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| MerkleError::InvalidDigest { got: bytes.len() })
}

/// Parse a full proof, rejecting any element that is not exactly 32 bytes.
pub fn parse_proof(proof: &[HexBinary]) -> Result<Vec<Digest>, MerkleError> {
    proof.iter().map(parse_digest).collect()
}

/// Full tree, kept by whoever holds the address set (off-chain tooling,
/// tests). On-chain code only ever needs the root and `verify`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleAllowlist {
    /// `layers[0]` are the sorted leaves, the last layer holds only the root
    layers: Vec<Vec<Digest>>,
}

impl MerkleAllowlist {
    /// Build the commitment over a set of addresses (order and duplicates are
    /// irrelevant).
    pub fn build<I, S>(addresses: I) -> Result<Self, MerkleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut leaves: Vec<Digest> = addresses
            .into_iter()
            .map(|addr| leaf_hash(addr.as_ref()))
            .collect();
        if leaves.is_empty() {
            return Err(MerkleError::EmptyAllowlist);
        }
        leaves.sort_unstable();
        leaves.dedup();

        let mut layers = vec![leaves];
        loop {
            let current = &layers[layers.len() - 1];
            if current.len() == 1 {
                break;
            }
            let next: Vec<Digest> = current
                .chunks(2)
                .map(|pair| match pair.get(1) {
                    Some(right) => hash_pair(&pair[0], right),
                    None => pair[0],
                })
                .collect();
            layers.push(next);
        }

        Ok(Self { layers })
    }

    pub fn root(&self) -> Digest {
        self.layers[self.layers.len() - 1][0]
    }

    pub fn root_hex(&self) -> HexBinary {
        HexBinary::from(self.root().to_vec())
    }

    /// Number of distinct members.
    pub fn len(&self) -> usize {
        self.layers[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers[0].is_empty()
    }

    /// Sibling path from the address's leaf to the root.
    pub fn prove(&self, address: &str) -> Result<Vec<Digest>, MerkleError> {
        let leaf = leaf_hash(address);
        let mut index = self.layers[0]
            .binary_search(&leaf)
            .map_err(|_| MerkleError::NotAMember {
                address: address.to_string(),
            })?;

        let mut proof = Vec::with_capacity(self.layers.len() - 1);
        for layer in &self.layers[..self.layers.len() - 1] {
            if let Some(sibling) = layer.get(index ^ 1) {
                proof.push(*sibling);
            }
            index /= 2;
        }
        Ok(proof)
    }

    /// Same as `prove`, hex-encoded for use in contract messages.
    pub fn prove_hex(&self, address: &str) -> Result<Vec<HexBinary>, MerkleError> {
        Ok(self
            .prove(address)?
            .into_iter()
            .map(|d| HexBinary::from(d.to_vec()))
            .collect())
    }
}
