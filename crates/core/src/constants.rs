//! Protocol constants for the built-in token operations.

/// Prefix of the reserved account key space. User contracts cannot write
/// under keys carrying this prefix.
pub const PROTECTED_KEY_PREFIX: &[u8] = b"AURUM";

/// Key-space identifier for per-account token unit storage.
pub const TOKEN_KEY_IDENTIFIER: &[u8] = b"token";

/// Key-space identifier for per-account creation nonce counters.
pub const NONCE_KEY_IDENTIFIER: &[u8] = b"nonce";

/// Name of the non-fungible unit creation built-in function.
pub const NFT_CREATE_FUNC_NAME: &str = "AURNFTCreate";

/// Name of the quantity addition built-in function.
pub const NFT_ADD_QUANTITY_FUNC_NAME: &str = "AURNFTAddQuantity";

/// Role required to create new non-fungible units of a token.
pub const ROLE_NFT_CREATE: &[u8] = b"AURRoleNFTCreate";

/// Role required to increase the quantity of an existing unit.
pub const ROLE_NFT_ADD_QUANTITY: &[u8] = b"AURRoleNFTAddQuantity";

/// Maximum royalty value in basis points.
pub const MAX_ROYALTIES: u32 = 10_000;

/// Maximum accepted byte length of a quantity argument when the length
/// check feature flag is enabled.
pub const MAX_QUANTITY_ARG_LEN: usize = 32;

/// Builds the reserved storage key under which a token's units are kept for
/// an account: protected prefix, token key space, token identifier.
pub fn token_key(token_id: &[u8]) -> Vec<u8> {
    let mut key = Vec::with_capacity(
        PROTECTED_KEY_PREFIX.len() + TOKEN_KEY_IDENTIFIER.len() + token_id.len(),
    );
    key.extend_from_slice(PROTECTED_KEY_PREFIX);
    key.extend_from_slice(TOKEN_KEY_IDENTIFIER);
    key.extend_from_slice(token_id);
    key
}
