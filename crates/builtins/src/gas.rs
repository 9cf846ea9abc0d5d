//! Gas cost tables for the built-in functions.
//!
//! The node operator can replace the cost table at runtime while calls are
//! executing. Each handler therefore keeps its own small [`GasSnapshot`]
//! behind a lock and reads it exactly once at call entry: a call either sees
//! the table from before a replacement or from after it, never a half
//! applied mix, and unrelated calls are not serialized against each other
//! for their full duration.

use serde::{Deserialize, Serialize};

/// Base cost of each built-in function, before size-dependent charges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuiltinGasCost {
    /// Base cost of the non-fungible unit creation call.
    pub nft_create: u64,

    /// Base cost of the quantity addition call.
    pub nft_add_quantity: u64,
}

impl Default for BuiltinGasCost {
    fn default() -> Self {
        Self {
            nft_create: 80_000,
            nft_add_quantity: 45_000,
        }
    }
}

/// Per-byte costs of the primitive operations built-in calls are billed
/// against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseOperationCost {
    /// Cost of persisting one byte of call data.
    pub store_per_byte: u64,

    /// Cost of copying one byte between buffers.
    pub data_copy_per_byte: u64,
}

impl Default for BaseOperationCost {
    fn default() -> Self {
        Self {
            store_per_byte: 50,
            data_copy_per_byte: 1,
        }
    }
}

/// The complete hot-swappable cost table consulted by every handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GasSchedule {
    /// Per-function base costs.
    pub builtin: BuiltinGasCost,

    /// Size-dependent operation costs.
    pub base_operation: BaseOperationCost,
}

/// The slice of the cost table one handler needs, captured atomically at
/// call entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasSnapshot {
    /// Base cost of this handler's function.
    pub func_cost: u64,

    /// Cost of persisting one byte of call data.
    pub store_per_byte: u64,
}

impl GasSnapshot {
    /// Computes the total cost of a call from the byte lengths of its
    /// arguments. Pure and deterministic: identical arguments and snapshot
    /// always yield the identical charge.
    pub fn compute_cost(&self, args: &[Vec<u8>]) -> u64 {
        let total_len: u64 = args.iter().map(|arg| arg.len() as u64).sum();
        total_len * self.store_per_byte + self.func_cost
    }
}
