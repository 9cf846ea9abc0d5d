//! Interfaces of the external collaborators the engine executes against.
//!
//! The engine owns none of the state it mutates: accounts, the state tree,
//! role grants and ledger-wide supply bookkeeping all live behind these
//! traits. Implementations must observe each call's reads and writes to a
//! given account in program order; the engine takes no locks of its own
//! over account data.

use crate::error::Result;
use crate::token::TokenUnit;
use num_bigint::BigUint;

/// An account loaded from the state tree.
///
/// Not every account kind carries per-account key-value storage; the
/// [`Account::as_user_account`] capability gate separates those that do.
pub trait Account: Send + Sync {
    /// Gets the raw address bytes of the account.
    fn address_bytes(&self) -> &[u8];

    /// Returns the user-account view of this account, or `None` when the
    /// account does not support per-account key-value storage.
    fn as_user_account(&mut self) -> Option<&mut dyn UserAccount>;
}

/// An account with per-account key-value data storage.
pub trait UserAccount: Account {
    /// Reads a value from the account's key-value store. A missing key
    /// yields an empty vector.
    fn retrieve_value(&self, key: &[u8]) -> Result<Vec<u8>>;

    /// Writes a value into the account's key-value store.
    fn save_key_value(&mut self, key: &[u8], value: &[u8]) -> Result<()>;
}

/// Loads and persists accounts in the state tree.
pub trait AccountStore: Send + Sync {
    /// Loads the account stored under the given address.
    fn load_account(&self, address: &[u8]) -> Result<Box<dyn Account>>;

    /// Persists the given account.
    fn save_account(&self, account: &dyn UserAccount) -> Result<()>;
}

/// Answers whether an account may invoke an operation on a token.
///
/// A role grant binds (account, token identifier, operation name); existence
/// of the grant is authorization and the returned error is denial.
pub trait RoleAuthority: Send + Sync {
    /// Checks that the account holds the given role for the token.
    fn check_allowed(&self, account: &dyn UserAccount, token_id: &[u8], role: &[u8])
        -> Result<()>;
}

/// Persists token units under accounts and keeps ledger-wide supply
/// bookkeeping.
pub trait TokenStorageHandler: Send + Sync {
    /// Saves a token unit under the account and returns its serialized
    /// stored form. `is_create` distinguishes first-time creation from an
    /// update of an existing unit.
    #[allow(clippy::too_many_arguments)]
    fn save_unit(
        &self,
        owner: &[u8],
        account: &mut dyn UserAccount,
        token_key: &[u8],
        nonce: u64,
        unit: &TokenUnit,
        is_create: bool,
        return_on_error: bool,
    ) -> Result<Vec<u8>>;

    /// Loads the token unit stored under the account for the given token
    /// key and nonce.
    fn load_unit(
        &self,
        account: &dyn UserAccount,
        token_key: &[u8],
        nonce: u64,
    ) -> Result<TokenUnit>;

    /// Adds the quantity to the ledger-wide outstanding supply of
    /// (token key, nonce).
    fn add_to_global_supply(&self, token_key: &[u8], nonce: u64, quantity: &BigUint)
        -> Result<()>;
}

/// Ledger-wide token settings independent of any single account.
pub trait GlobalSettingsProvider: Send + Sync {
    /// Returns true when operations on the token are suspended.
    fn is_paused(&self, token_key: &[u8]) -> bool;
}

/// Serializes token units for event payloads.
pub trait Marshaller: Send + Sync {
    /// Serializes the unit into its wire form.
    fn marshal_unit(&self, unit: &TokenUnit) -> Result<Vec<u8>>;
}

/// Protocol feature activation flags.
pub trait FeatureFlags: Send + Sync {
    /// Whether the raw byte length of quantity arguments is capped.
    fn is_quantity_length_check_enabled(&self) -> bool;
}
