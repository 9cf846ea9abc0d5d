//! Call and output records exchanged with the surrounding dispatch loop.

use crate::address::Address;
use serde::{Deserialize, Serialize};

/// How the dispatch loop routed the call to the built-in function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallType {
    /// The operation acts on the caller's own account.
    Direct,
    /// The operation acts on another account, named by a trailing argument.
    ResolvedTarget,
}

/// One protocol call as handed to a built-in function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallInput {
    /// Address of the immediate caller.
    pub caller: Address,

    /// Address the call was sent to. Built-in token operations require this
    /// to equal the caller.
    pub recipient: Address,

    /// Execution mode of the call.
    pub call_type: CallType,

    /// Ordered raw arguments.
    pub args: Vec<Vec<u8>>,

    /// Gas made available to the call.
    pub gas_provided: u64,

    /// Whether the call is re-entered as part of error return handling;
    /// forwarded verbatim to the token storage collaborator.
    pub return_on_error: bool,
}

/// Status of a completed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReturnCode {
    /// The call completed successfully.
    Ok,
    /// The call failed during execution.
    UserError,
    /// The call ran out of gas.
    OutOfGas,
}

/// A structured event recorded by a successful operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    /// Name of the operation that emitted the event.
    pub identifier: Vec<u8>,

    /// Address of the caller that triggered the operation.
    pub address: Address,

    /// Indexed event fields, in canonical order.
    pub topics: Vec<Vec<u8>>,

    /// Serialized payload; may be empty when serialization was unavailable.
    pub data: Vec<u8>,
}

/// The result record of a successful call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallOutput {
    /// Completion status.
    pub return_code: ReturnCode,

    /// Gas left over after charging the computed cost.
    pub gas_remaining: u64,

    /// Ordered return payloads.
    pub return_data: Vec<Vec<u8>>,

    /// Events emitted by the operation, in emission order.
    pub logs: Vec<EventLog>,
}

impl CallOutput {
    /// Creates a successful output with the given remaining gas and no
    /// return data or events.
    pub fn ok(gas_remaining: u64) -> Self {
        Self {
            return_code: ReturnCode::Ok,
            gas_remaining,
            return_data: Vec::new(),
            logs: Vec::new(),
        }
    }
}
