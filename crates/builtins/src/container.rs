//! Name-to-handler dispatch surface for the built-in functions.

use crate::function::BuiltinFunction;
use crate::gas::GasSchedule;
use aurum_core::{CallInput, CallOutput, Error, Result, UserAccount};
use std::collections::HashMap;

/// Registry of the closed set of built-in token operations, keyed by call
/// name.
///
/// The surrounding dispatch loop selects a handler by the call name decoded
/// from the transaction and invokes it through [`BuiltinContainer::process`].
#[derive(Default)]
pub struct BuiltinContainer {
    functions: HashMap<String, Box<dyn BuiltinFunction>>,
}

impl BuiltinContainer {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Registers a function under its own name, replacing any previous
    /// registration.
    pub fn register(&mut self, function: Box<dyn BuiltinFunction>) {
        self.functions.insert(function.name().to_string(), function);
    }

    /// Gets the function registered under the given name.
    pub fn get(&self, name: &str) -> Result<&dyn BuiltinFunction> {
        self.functions
            .get(name)
            .map(|function| function.as_ref())
            .ok_or_else(|| Error::FunctionNotFound(name.to_string()))
    }

    /// Dispatches one call to the function registered under `name`.
    pub fn process(
        &self,
        name: &str,
        acting: Option<&mut dyn UserAccount>,
        input: &CallInput,
    ) -> Result<CallOutput> {
        self.get(name)?.process(acting, input)
    }

    /// Replaces the cost table of every registered function. An absent
    /// schedule is a no-op end to end.
    pub fn set_gas_schedule(&self, schedule: Option<&GasSchedule>) {
        for function in self.functions.values() {
            function.set_gas_schedule(schedule);
        }
    }

    /// The names of all registered functions.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Returns true when no function is registered.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
