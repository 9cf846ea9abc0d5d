//! Event assembly for the token operations.

use aurum_core::{numeric, Address, CallOutput, EventLog};
use num_bigint::BigUint;

/// Appends the canonical token operation event to an output record.
///
/// Topic order is part of the wire contract consumed by indexers: token
/// identifier, big-endian nonce, big-endian quantity, caller address. The
/// payload carries the serialized unit and may be empty.
pub fn add_token_event(
    output: &mut CallOutput,
    func_name: &str,
    token_id: &[u8],
    nonce: u64,
    quantity: &BigUint,
    caller: &Address,
    data: Vec<u8>,
) {
    output.logs.push(EventLog {
        identifier: func_name.as_bytes().to_vec(),
        address: caller.clone(),
        topics: vec![
            token_id.to_vec(),
            numeric::encode_u64(nonce),
            numeric::encode_biguint(quantity),
            caller.as_bytes().to_vec(),
        ],
        data,
    });
}
