//! # Aurum Core
//!
//! Foundational types for the Aurum virtual machine's protocol-level token
//! operations.
//!
//! This crate defines the data model shared by every built-in function
//! implementation (token units, call records, output records, events), the
//! interfaces of the external collaborators the engine talks to (account
//! store, role authority, token storage, serializer), the protocol constants
//! (reserved key prefixes, operation and role names) and the error taxonomy.
//!
//! The crate deliberately contains no storage engine, no wire codec and no
//! dispatch loop; those live behind the traits in [`traits`].

pub mod address;
pub mod call;
pub mod constants;
pub mod error;
pub mod numeric;
pub mod token;
pub mod traits;

pub use address::Address;
pub use call::{CallInput, CallOutput, CallType, EventLog, ReturnCode};
pub use error::{Error, Result};
pub use token::{TokenMetadata, TokenType, TokenUnit};
pub use traits::{
    Account, AccountStore, FeatureFlags, GlobalSettingsProvider, Marshaller, RoleAuthority,
    TokenStorageHandler, UserAccount,
};
