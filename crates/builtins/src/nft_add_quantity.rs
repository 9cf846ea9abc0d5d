//! Quantity addition built-in function.
//!
//! Increases the outstanding quantity of an already created unit. A
//! mechanical extension of the creation contract: same first-gate
//! validation, same role model, same event shape.

use crate::event::add_token_event;
use crate::function::{check_creation_family_input, BuiltinFunction};
use crate::gas::{GasSchedule, GasSnapshot};
use aurum_core::constants::{
    token_key, MAX_QUANTITY_ARG_LEN, NFT_ADD_QUANTITY_FUNC_NAME, ROLE_NFT_ADD_QUANTITY,
};
use aurum_core::{
    CallInput, CallOutput, Error, FeatureFlags, GlobalSettingsProvider, Result, RoleAuthority,
    TokenStorageHandler, UserAccount, numeric,
};
use num_traits::Zero;
use parking_lot::RwLock;
use std::sync::Arc;

/// Construction arguments for [`NftAddQuantity`]. Every collaborator
/// reference is required; construction fails naming the first absent one.
pub struct NftAddQuantityArgs {
    /// Base gas cost of the quantity addition call.
    pub func_gas_cost: u64,
    /// Ledger-wide token settings.
    pub global_settings: Option<Arc<dyn GlobalSettingsProvider>>,
    /// Role grant authority.
    pub roles: Option<Arc<dyn RoleAuthority>>,
    /// Token unit persistence and supply bookkeeping.
    pub token_storage: Option<Arc<dyn TokenStorageHandler>>,
    /// Protocol feature activation flags.
    pub feature_flags: Option<Arc<dyn FeatureFlags>>,
}

/// The quantity addition handler.
pub struct NftAddQuantity {
    gas: RwLock<GasSnapshot>,
    global_settings: Arc<dyn GlobalSettingsProvider>,
    roles: Arc<dyn RoleAuthority>,
    token_storage: Arc<dyn TokenStorageHandler>,
    feature_flags: Arc<dyn FeatureFlags>,
}

impl std::fmt::Debug for NftAddQuantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NftAddQuantity").finish_non_exhaustive()
    }
}

impl NftAddQuantity {
    /// Creates the handler, failing when any collaborator is absent.
    pub fn new(args: NftAddQuantityArgs) -> Result<Self> {
        let global_settings = args
            .global_settings
            .ok_or(Error::MissingCollaborator("global settings provider"))?;
        let roles = args.roles.ok_or(Error::MissingCollaborator("role authority"))?;
        let token_storage = args
            .token_storage
            .ok_or(Error::MissingCollaborator("token storage handler"))?;
        let feature_flags = args
            .feature_flags
            .ok_or(Error::MissingCollaborator("feature flags"))?;

        Ok(Self {
            gas: RwLock::new(GasSnapshot {
                func_cost: args.func_gas_cost,
                store_per_byte: 0,
            }),
            global_settings,
            roles,
            token_storage,
            feature_flags,
        })
    }
}

impl BuiltinFunction for NftAddQuantity {
    fn name(&self) -> &str {
        NFT_ADD_QUANTITY_FUNC_NAME
    }

    fn set_gas_schedule(&self, schedule: Option<&GasSchedule>) {
        let Some(schedule) = schedule else {
            return;
        };

        let mut gas = self.gas.write();
        gas.func_cost = schedule.builtin.nft_add_quantity;
    }

    /// Resolves a quantity addition call.
    ///
    /// Requires exactly 3 arguments:
    /// arg0 - token identifier
    /// arg1 - unit nonce, big-endian
    /// arg2 - quantity to add, big-endian
    fn process(
        &self,
        acting: Option<&mut dyn UserAccount>,
        input: &CallInput,
    ) -> Result<CallOutput> {
        let gas = *self.gas.read();

        check_creation_family_input(acting.as_deref(), input, gas.func_cost)?;

        if input.args.len() < 3 {
            return Err(Error::InvalidArguments(
                "wrong number of arguments".to_string(),
            ));
        }

        let account = acting.ok_or(Error::MissingAccount)?;
        let token_id = input.args[0].as_slice();
        self.roles
            .check_allowed(&*account, token_id, ROLE_NFT_ADD_QUANTITY)?;

        let token_storage_key = token_key(token_id);
        if self.global_settings.is_paused(&token_storage_key) {
            return Err(Error::TokenPaused);
        }

        let nonce = numeric::decode_u64(&input.args[1])
            .ok_or_else(|| Error::InvalidArguments("invalid nonce".to_string()))?;

        if self.feature_flags.is_quantity_length_check_enabled()
            && input.args[2].len() > MAX_QUANTITY_ARG_LEN
        {
            return Err(Error::InvalidArguments(format!(
                "max length for a quantity argument is {MAX_QUANTITY_ARG_LEN}"
            )));
        }
        let quantity = numeric::decode_biguint(&input.args[2]);
        if quantity.is_zero() {
            return Err(Error::InvalidArguments("invalid quantity".to_string()));
        }

        let mut unit = self
            .token_storage
            .load_unit(&*account, &token_storage_key, nonce)?;
        if unit.metadata.is_none() {
            return Err(Error::InvalidArguments(
                "token unit carries no metadata".to_string(),
            ));
        }
        unit.value += &quantity;

        let owner = account.address_bytes().to_vec();
        self.token_storage.save_unit(
            &owner,
            account,
            &token_storage_key,
            nonce,
            &unit,
            false,
            input.return_on_error,
        )?;
        self.token_storage
            .add_to_global_supply(&token_storage_key, nonce, &quantity)?;

        let mut output = CallOutput::ok(input.gas_provided - gas.func_cost);
        add_token_event(
            &mut output,
            NFT_ADD_QUANTITY_FUNC_NAME,
            token_id,
            nonce,
            &quantity,
            &input.caller,
            Vec::new(),
        );

        Ok(output)
    }
}
