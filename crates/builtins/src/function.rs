//! The shared contract every built-in token operation implements.

use crate::gas::GasSchedule;
use aurum_core::{CallInput, CallOutput, CallType, Error, Result, UserAccount};

/// A protocol-reserved operation executed by the virtual machine outside
/// user contract bytecode.
///
/// Execution is synchronous and non-suspending; a call runs to completion on
/// whatever thread the dispatch loop assigns it. Handlers share no mutable
/// state across calls beyond their own gas snapshot, so any number of calls
/// may execute concurrently.
pub trait BuiltinFunction: Send + Sync {
    /// The call name this function is dispatched under.
    fn name(&self) -> &str;

    /// Validates and executes one call, returning the output record.
    ///
    /// `acting` is the caller's own account as resolved by the surrounding
    /// call frame; it may be absent for execution modes that resolve their
    /// target from the arguments instead.
    fn process(
        &self,
        acting: Option<&mut dyn UserAccount>,
        input: &CallInput,
    ) -> Result<CallOutput>;

    /// Replaces this function's view of the cost table. An absent schedule
    /// is a no-op.
    fn set_gas_schedule(&self, schedule: Option<&GasSchedule>);
}

impl std::fmt::Debug for dyn BuiltinFunction + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuiltinFunction")
            .field("name", &self.name())
            .finish()
    }
}

/// First-gate validation shared by the creation-family operations.
///
/// Ordering is consensus-relevant: receiver check, account presence, then
/// the base gas floor. The full size-dependent gas charge is computed later,
/// once the arguments have been counted.
pub(crate) fn check_creation_family_input(
    account: Option<&dyn UserAccount>,
    input: &CallInput,
    func_cost: u64,
) -> Result<()> {
    if input.caller != input.recipient {
        return Err(Error::InvalidReceiver);
    }
    if account.is_none() && input.call_type != CallType::ResolvedTarget {
        return Err(Error::MissingAccount);
    }
    if input.gas_provided < func_cost {
        return Err(Error::InsufficientGas);
    }
    Ok(())
}
