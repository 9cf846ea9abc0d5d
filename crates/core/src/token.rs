//! Token unit and metadata structures.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// The kind of value a token unit carries.
///
/// Discriminants are wire-stable; they are persisted inside serialized token
/// units and must never be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum TokenType {
    /// Divisible token with no per-unit identity.
    Fungible = 0,
    /// Unique unit identified by (token identifier, nonce).
    NonFungible = 1,
    /// Multiple interchangeable copies of one identified unit.
    SemiFungible = 2,
    /// Fungible quantity that still carries unit metadata.
    Meta = 3,
}

/// Immutable metadata attached to a token unit at creation time.
///
/// For a given (token identifier, nonce) the metadata is written exactly once
/// by the creating operation and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TokenMetadata {
    /// Creation counter scoped to (account, token identifier).
    pub nonce: u64,

    /// Display name of the unit.
    pub name: Vec<u8>,

    /// Address of the original creator. In resolved-target execution this is
    /// still the immediate caller, not the resolved account.
    pub creator: Vec<u8>,

    /// Royalties in basis points, at most 10000.
    pub royalties: u32,

    /// Content hash of the unit.
    pub hash: Vec<u8>,

    /// Free-form attribute bytes.
    pub attributes: Vec<u8>,

    /// Ordered sequence of URIs.
    pub uris: Vec<Vec<u8>>,
}

/// A typed token value held under an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUnit {
    /// The kind of token this unit belongs to.
    pub token_type: TokenType,

    /// Outstanding quantity, strictly positive for live units.
    pub value: BigUint,

    /// Unit metadata, present for non-fungible kinds.
    pub metadata: Option<TokenMetadata>,
}

impl TokenUnit {
    /// Creates a non-fungible unit with the given quantity and metadata.
    pub fn non_fungible(value: BigUint, metadata: TokenMetadata) -> Self {
        Self {
            token_type: TokenType::NonFungible,
            value,
            metadata: Some(metadata),
        }
    }
}
