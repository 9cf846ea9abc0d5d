//! Big-endian integer encoding shared by nonce storage, return payloads and
//! event topics.
//!
//! Every independent node must produce byte-identical encodings, so the
//! canonical form is the minimal big-endian representation: no leading zero
//! bytes, and zero itself encodes to the empty byte string. Decoding uses
//! arbitrary-precision arithmetic; fixed-width parsing would silently
//! diverge on oversized inputs.

use num_bigint::BigUint;
use num_traits::Zero;

/// Encodes an unsigned integer as minimal big-endian bytes. Zero encodes to
/// an empty vector.
pub fn encode_u64(value: u64) -> Vec<u8> {
    encode_biguint(&BigUint::from(value))
}

/// Encodes an arbitrary-precision unsigned integer as minimal big-endian
/// bytes. Zero encodes to an empty vector.
pub fn encode_biguint(value: &BigUint) -> Vec<u8> {
    if value.is_zero() {
        Vec::new()
    } else {
        value.to_bytes_be()
    }
}

/// Decodes big-endian bytes into an arbitrary-precision unsigned integer.
/// The empty byte string decodes to zero.
pub fn decode_biguint(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Decodes big-endian bytes into a u64 counter, rejecting values outside
/// the counter range.
pub fn decode_u64(bytes: &[u8]) -> Option<u64> {
    u64::try_from(decode_biguint(bytes)).ok()
}
