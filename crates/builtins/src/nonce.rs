//! Per-account creation nonce counters.
//!
//! Each (account, token identifier) pair carries a monotonic counter in the
//! account's reserved key space. The counter starts unset (read as zero), is
//! incremented by exactly one on each successful creation and is never
//! decremented.

use aurum_core::constants::{NONCE_KEY_IDENTIFIER, PROTECTED_KEY_PREFIX};
use aurum_core::{numeric, Error, Result, UserAccount};

/// Builds the reserved storage key of the nonce counter for a token.
pub fn nonce_key(token_id: &[u8]) -> Vec<u8> {
    let mut key = Vec::with_capacity(
        PROTECTED_KEY_PREFIX.len() + NONCE_KEY_IDENTIFIER.len() + token_id.len(),
    );
    key.extend_from_slice(PROTECTED_KEY_PREFIX);
    key.extend_from_slice(NONCE_KEY_IDENTIFIER);
    key.extend_from_slice(token_id);
    key
}

/// Reads the latest creation nonce for (account, token). An unset counter
/// reads as zero.
pub fn latest_nonce(account: &dyn UserAccount, token_id: &[u8]) -> Result<u64> {
    let data = account.retrieve_value(&nonce_key(token_id))?;
    if data.is_empty() {
        return Ok(0);
    }

    numeric::decode_u64(&data)
        .ok_or_else(|| Error::Storage("stored token nonce exceeds counter range".to_string()))
}

/// Persists the latest creation nonce for (account, token).
pub fn store_latest_nonce(
    account: &mut dyn UserAccount,
    token_id: &[u8],
    nonce: u64,
) -> Result<()> {
    account.save_key_value(&nonce_key(token_id), &numeric::encode_u64(nonce))
}
