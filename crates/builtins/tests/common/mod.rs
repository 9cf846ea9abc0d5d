//! In-memory collaborator doubles shared by the integration tests.

#![allow(dead_code)]

use aurum_builtins::{BaseOperationCost, NftAddQuantity, NftAddQuantityArgs, NftCreate, NftCreateArgs};
use aurum_core::{
    numeric, Account, AccountStore, Error, FeatureFlags, GlobalSettingsProvider, Marshaller,
    Result, RoleAuthority, TokenStorageHandler, TokenUnit, UserAccount,
};
use num_bigint::BigUint;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Base gas cost used by the test handlers.
pub const FUNC_GAS_COST: u64 = 100;

/// Per-byte storage cost used by the test handlers.
pub const STORE_PER_BYTE: u64 = 10;

/// An account whose key-value data writes through to shared state, the way
/// a real adapter hands out live views into the state tree.
#[derive(Clone)]
pub struct MemoryAccount {
    address: Vec<u8>,
    data: Arc<Mutex<HashMap<Vec<u8>, Vec<u8>>>>,
}

impl MemoryAccount {
    pub fn new(address: Vec<u8>) -> Self {
        Self {
            address,
            data: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn raw_value(&self, key: &[u8]) -> Vec<u8> {
        self.data.lock().get(key).cloned().unwrap_or_default()
    }
}

impl Account for MemoryAccount {
    fn address_bytes(&self) -> &[u8] {
        &self.address
    }

    fn as_user_account(&mut self) -> Option<&mut dyn UserAccount> {
        Some(self)
    }
}

impl UserAccount for MemoryAccount {
    fn retrieve_value(&self, key: &[u8]) -> Result<Vec<u8>> {
        Ok(self.data.lock().get(key).cloned().unwrap_or_default())
    }

    fn save_key_value(&mut self, key: &[u8], value: &[u8]) -> Result<()> {
        self.data.lock().insert(key.to_vec(), value.to_vec());
        Ok(())
    }
}

/// An account kind without per-account key-value storage.
pub struct OpaqueAccount {
    address: Vec<u8>,
}

impl OpaqueAccount {
    pub fn new(address: Vec<u8>) -> Self {
        Self { address }
    }
}

impl Account for OpaqueAccount {
    fn address_bytes(&self) -> &[u8] {
        &self.address
    }

    fn as_user_account(&mut self) -> Option<&mut dyn UserAccount> {
        None
    }
}

/// Account store over a shared map, recording which addresses were
/// explicitly persisted.
#[derive(Default)]
pub struct MemoryAccountStore {
    accounts: Mutex<HashMap<Vec<u8>, MemoryAccount>>,
    opaque: Mutex<HashSet<Vec<u8>>>,
    saved: Mutex<Vec<Vec<u8>>>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a user account and returns a live view of it.
    pub fn put_account(&self, address: &[u8]) -> MemoryAccount {
        let account = MemoryAccount::new(address.to_vec());
        self.accounts
            .lock()
            .insert(address.to_vec(), account.clone());
        account
    }

    /// Registers an address that loads as an account without user storage.
    pub fn put_opaque_account(&self, address: &[u8]) {
        self.opaque.lock().insert(address.to_vec());
    }

    /// Addresses passed to `save_account`, in call order.
    pub fn saved_addresses(&self) -> Vec<Vec<u8>> {
        self.saved.lock().clone()
    }
}

impl AccountStore for MemoryAccountStore {
    fn load_account(&self, address: &[u8]) -> Result<Box<dyn Account>> {
        if self.opaque.lock().contains(address) {
            return Ok(Box::new(OpaqueAccount::new(address.to_vec())));
        }

        self.accounts
            .lock()
            .get(address)
            .cloned()
            .map(|account| Box::new(account) as Box<dyn Account>)
            .ok_or_else(|| Error::Storage("account not found".to_string()))
    }

    fn save_account(&self, account: &dyn UserAccount) -> Result<()> {
        self.saved.lock().push(account.address_bytes().to_vec());
        Ok(())
    }
}

/// Role authority over an explicit grant set.
#[derive(Default)]
pub struct StubRoleAuthority {
    grants: Mutex<HashSet<(Vec<u8>, Vec<u8>, Vec<u8>)>>,
}

impl StubRoleAuthority {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant(&self, address: &[u8], token_id: &[u8], role: &[u8]) {
        self.grants
            .lock()
            .insert((address.to_vec(), token_id.to_vec(), role.to_vec()));
    }
}

impl RoleAuthority for StubRoleAuthority {
    fn check_allowed(
        &self,
        account: &dyn UserAccount,
        token_id: &[u8],
        role: &[u8],
    ) -> Result<()> {
        let key = (
            account.address_bytes().to_vec(),
            token_id.to_vec(),
            role.to_vec(),
        );
        if self.grants.lock().contains(&key) {
            Ok(())
        } else {
            Err(Error::ActionNotAllowed(
                String::from_utf8_lossy(role).into_owned(),
            ))
        }
    }
}

/// Token storage double persisting serialized units into the account's own
/// key-value space and accumulating ledger-wide supply per (key, nonce).
#[derive(Default)]
pub struct MemoryTokenStorage {
    supply: Mutex<HashMap<(Vec<u8>, u64), BigUint>>,
    fail_save: AtomicBool,
    fail_supply: AtomicBool,
}

impl MemoryTokenStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unit_key(token_key: &[u8], nonce: u64) -> Vec<u8> {
        let mut key = token_key.to_vec();
        key.extend_from_slice(&numeric::encode_u64(nonce));
        key
    }

    pub fn stored_unit(&self, account: &dyn UserAccount, token_key: &[u8], nonce: u64) -> Option<TokenUnit> {
        let data = account
            .retrieve_value(&Self::unit_key(token_key, nonce))
            .ok()?;
        if data.is_empty() {
            return None;
        }
        bincode::deserialize(&data).ok()
    }

    pub fn global_supply(&self, token_key: &[u8], nonce: u64) -> BigUint {
        self.supply
            .lock()
            .get(&(token_key.to_vec(), nonce))
            .cloned()
            .unwrap_or_default()
    }

    pub fn fail_next_save(&self) {
        self.fail_save.store(true, Ordering::SeqCst);
    }

    pub fn fail_next_supply_update(&self) {
        self.fail_supply.store(true, Ordering::SeqCst);
    }
}

impl TokenStorageHandler for MemoryTokenStorage {
    fn save_unit(
        &self,
        _owner: &[u8],
        account: &mut dyn UserAccount,
        token_key: &[u8],
        nonce: u64,
        unit: &TokenUnit,
        _is_create: bool,
        _return_on_error: bool,
    ) -> Result<Vec<u8>> {
        if self.fail_save.swap(false, Ordering::SeqCst) {
            return Err(Error::Storage("unit save failed".to_string()));
        }

        let data = bincode::serialize(unit)
            .map_err(|err| Error::Serialization(err.to_string()))?;
        account.save_key_value(&Self::unit_key(token_key, nonce), &data)?;
        Ok(data)
    }

    fn load_unit(
        &self,
        account: &dyn UserAccount,
        token_key: &[u8],
        nonce: u64,
    ) -> Result<TokenUnit> {
        let data = account.retrieve_value(&Self::unit_key(token_key, nonce))?;
        if data.is_empty() {
            return Err(Error::TokenNotFound);
        }
        bincode::deserialize(&data).map_err(|err| Error::Serialization(err.to_string()))
    }

    fn add_to_global_supply(
        &self,
        token_key: &[u8],
        nonce: u64,
        quantity: &BigUint,
    ) -> Result<()> {
        if self.fail_supply.swap(false, Ordering::SeqCst) {
            return Err(Error::Storage("supply update failed".to_string()));
        }

        let mut supply = self.supply.lock();
        let entry = supply
            .entry((token_key.to_vec(), nonce))
            .or_insert_with(BigUint::default);
        *entry += quantity;
        Ok(())
    }
}

/// Wire serializer double.
#[derive(Default)]
pub struct BincodeMarshaller;

impl Marshaller for BincodeMarshaller {
    fn marshal_unit(&self, unit: &TokenUnit) -> Result<Vec<u8>> {
        bincode::serialize(unit).map_err(|err| Error::Serialization(err.to_string()))
    }
}

/// Serializer double that always fails, for the non-fatal event payload
/// path.
pub struct FailingMarshaller;

impl Marshaller for FailingMarshaller {
    fn marshal_unit(&self, _unit: &TokenUnit) -> Result<Vec<u8>> {
        Err(Error::Serialization("marshaller unavailable".to_string()))
    }
}

/// Fixed feature flag set.
pub struct StaticFlags {
    pub quantity_length_check: bool,
}

impl FeatureFlags for StaticFlags {
    fn is_quantity_length_check_enabled(&self) -> bool {
        self.quantity_length_check
    }
}

/// Ledger-wide settings double with an explicit paused set.
#[derive(Default)]
pub struct StaticGlobalSettings {
    paused: Mutex<HashSet<Vec<u8>>>,
}

impl StaticGlobalSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pause(&self, token_key: &[u8]) {
        self.paused.lock().insert(token_key.to_vec());
    }
}

impl GlobalSettingsProvider for StaticGlobalSettings {
    fn is_paused(&self, token_key: &[u8]) -> bool {
        self.paused.lock().contains(token_key)
    }
}

/// The full collaborator set wired for one test.
pub struct TestEnv {
    pub accounts: Arc<MemoryAccountStore>,
    pub roles: Arc<StubRoleAuthority>,
    pub token_storage: Arc<MemoryTokenStorage>,
    pub settings: Arc<StaticGlobalSettings>,
    pub marshaller: Arc<BincodeMarshaller>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(MemoryAccountStore::new()),
            roles: Arc::new(StubRoleAuthority::new()),
            token_storage: Arc::new(MemoryTokenStorage::new()),
            settings: Arc::new(StaticGlobalSettings::new()),
            marshaller: Arc::new(BincodeMarshaller),
        }
    }

    /// Builds a creation handler over this environment's collaborators.
    pub fn nft_create(&self) -> NftCreate {
        self.nft_create_with(FUNC_GAS_COST, false)
    }

    pub fn nft_create_with(&self, func_gas_cost: u64, length_check: bool) -> NftCreate {
        NftCreate::new(NftCreateArgs {
            func_gas_cost,
            base_operation_cost: BaseOperationCost {
                store_per_byte: STORE_PER_BYTE,
                data_copy_per_byte: 1,
            },
            marshaller: Some(self.marshaller.clone()),
            global_settings: Some(self.settings.clone()),
            roles: Some(self.roles.clone()),
            token_storage: Some(self.token_storage.clone()),
            accounts: Some(self.accounts.clone()),
            feature_flags: Some(Arc::new(StaticFlags {
                quantity_length_check: length_check,
            })),
        })
        .expect("all collaborators are present")
    }

    /// Builds a quantity addition handler over this environment's
    /// collaborators.
    pub fn nft_add_quantity(&self) -> NftAddQuantity {
        NftAddQuantity::new(NftAddQuantityArgs {
            func_gas_cost: FUNC_GAS_COST,
            global_settings: Some(self.settings.clone()),
            roles: Some(self.roles.clone()),
            token_storage: Some(self.token_storage.clone()),
            feature_flags: Some(Arc::new(StaticFlags {
                quantity_length_check: true,
            })),
        })
        .expect("all collaborators are present")
    }
}
