//! # Aurum Built-in Functions
//!
//! Protocol-level token operations executed by the Aurum virtual machine
//! outside user contract bytecode.
//!
//! Each operation is a [`BuiltinFunction`]: the dispatch loop selects one by
//! call name through the [`BuiltinContainer`], hands it the call record and
//! the acting account, and receives an output record plus structured events.
//! Handlers validate in a fixed, consensus-critical order, charge gas from a
//! hot-swappable cost table and mutate state only through the collaborator
//! interfaces defined in `aurum-core`.
//!
//! Determinism is a hard requirement: every node executing the same call
//! against the same prior state must produce byte-identical output and state
//! mutation.

pub mod container;
pub mod event;
pub mod function;
pub mod gas;
pub mod nft_add_quantity;
pub mod nft_create;
pub mod nonce;

pub use container::BuiltinContainer;
pub use function::BuiltinFunction;
pub use gas::{BaseOperationCost, BuiltinGasCost, GasSchedule, GasSnapshot};
pub use nft_add_quantity::{NftAddQuantity, NftAddQuantityArgs};
pub use nft_create::{NftCreate, NftCreateArgs};
