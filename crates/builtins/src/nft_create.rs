//! Non-fungible unit creation built-in function.

use crate::event::add_token_event;
use crate::function::{check_creation_family_input, BuiltinFunction};
use crate::gas::{BaseOperationCost, GasSchedule, GasSnapshot};
use crate::nonce::{latest_nonce, store_latest_nonce};
use aurum_core::constants::{
    token_key, MAX_QUANTITY_ARG_LEN, MAX_ROYALTIES, NFT_CREATE_FUNC_NAME, ROLE_NFT_ADD_QUANTITY,
    ROLE_NFT_CREATE,
};
use aurum_core::{
    Account, AccountStore, CallInput, CallOutput, CallType, Error, FeatureFlags,
    GlobalSettingsProvider, Marshaller, Result, RoleAuthority, TokenMetadata, TokenStorageHandler,
    TokenUnit, UserAccount, numeric,
};
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};
use parking_lot::RwLock;
use std::sync::Arc;

/// Construction arguments for [`NftCreate`]. Every collaborator reference is
/// required; construction fails naming the first absent one.
pub struct NftCreateArgs {
    /// Base gas cost of the creation call.
    pub func_gas_cost: u64,
    /// Size-dependent operation costs.
    pub base_operation_cost: BaseOperationCost,
    /// Serializer for event payloads.
    pub marshaller: Option<Arc<dyn Marshaller>>,
    /// Ledger-wide token settings.
    pub global_settings: Option<Arc<dyn GlobalSettingsProvider>>,
    /// Role grant authority.
    pub roles: Option<Arc<dyn RoleAuthority>>,
    /// Token unit persistence and supply bookkeeping.
    pub token_storage: Option<Arc<dyn TokenStorageHandler>>,
    /// Account state tree adapter.
    pub accounts: Option<Arc<dyn AccountStore>>,
    /// Protocol feature activation flags.
    pub feature_flags: Option<Arc<dyn FeatureFlags>>,
}

/// The non-fungible unit creation handler.
///
/// Validates a call, enforces the creation role, charges gas from the
/// current cost snapshot, mints the unit under the resolved account, bumps
/// the per-token nonce, updates the ledger-wide supply and emits one
/// structured event.
pub struct NftCreate {
    gas: RwLock<GasSnapshot>,
    marshaller: Arc<dyn Marshaller>,
    #[allow(dead_code)]
    global_settings: Arc<dyn GlobalSettingsProvider>,
    roles: Arc<dyn RoleAuthority>,
    token_storage: Arc<dyn TokenStorageHandler>,
    accounts: Arc<dyn AccountStore>,
    feature_flags: Arc<dyn FeatureFlags>,
}

impl std::fmt::Debug for NftCreate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NftCreate").finish_non_exhaustive()
    }
}

impl NftCreate {
    /// Creates the handler, failing when any collaborator is absent.
    pub fn new(args: NftCreateArgs) -> Result<Self> {
        let marshaller = args
            .marshaller
            .ok_or(Error::MissingCollaborator("marshaller"))?;
        let global_settings = args
            .global_settings
            .ok_or(Error::MissingCollaborator("global settings provider"))?;
        let roles = args.roles.ok_or(Error::MissingCollaborator("role authority"))?;
        let token_storage = args
            .token_storage
            .ok_or(Error::MissingCollaborator("token storage handler"))?;
        let accounts = args
            .accounts
            .ok_or(Error::MissingCollaborator("account store"))?;
        let feature_flags = args
            .feature_flags
            .ok_or(Error::MissingCollaborator("feature flags"))?;

        Ok(Self {
            gas: RwLock::new(GasSnapshot {
                func_cost: args.func_gas_cost,
                store_per_byte: args.base_operation_cost.store_per_byte,
            }),
            marshaller,
            global_settings,
            roles,
            token_storage,
            accounts,
            feature_flags,
        })
    }
}

impl BuiltinFunction for NftCreate {
    fn name(&self) -> &str {
        NFT_CREATE_FUNC_NAME
    }

    fn set_gas_schedule(&self, schedule: Option<&GasSchedule>) {
        let Some(schedule) = schedule else {
            return;
        };

        *self.gas.write() = GasSnapshot {
            func_cost: schedule.builtin.nft_create,
            store_per_byte: schedule.base_operation.store_per_byte,
        };
    }

    /// Resolves a non-fungible unit creation call.
    ///
    /// Requires at least 7 arguments:
    /// arg0 - token identifier
    /// arg1 - initial quantity, big-endian
    /// arg2 - unit name
    /// arg3 - royalties in basis points, big-endian, at most 10000
    /// arg4 - content hash
    /// arg5 - attributes
    /// arg6+ - URI entries
    ///
    /// In resolved-target mode an 8th trailing argument names the account
    /// the unit is created under.
    fn process(
        &self,
        acting: Option<&mut dyn UserAccount>,
        input: &CallInput,
    ) -> Result<CallOutput> {
        // One consistent view of the cost table for the whole call.
        let gas = *self.gas.read();

        check_creation_family_input(acting.as_deref(), input, gas.func_cost)?;

        let min_args = match input.call_type {
            CallType::ResolvedTarget => 8,
            CallType::Direct => 7,
        };
        if input.args.len() < min_args {
            return Err(Error::InvalidArguments(
                "wrong number of arguments".to_string(),
            ));
        }

        let mut uris: &[Vec<u8>] = &input.args[6..];
        let mut loaded: Option<Box<dyn Account>> = None;
        let account: &mut dyn UserAccount = match input.call_type {
            CallType::ResolvedTarget => {
                let target = &input.args[input.args.len() - 1];
                uris = &input.args[6..input.args.len() - 1];

                if target.len() != input.caller.len() {
                    return Err(Error::InvalidAddressLength);
                }
                if target.as_slice() == input.caller.as_bytes() {
                    return Err(Error::InvalidReceiver);
                }

                let target_account = loaded.insert(self.accounts.load_account(target)?);
                target_account
                    .as_user_account()
                    .ok_or(Error::UnsupportedAccountType)?
            }
            CallType::Direct => acting.ok_or(Error::MissingAccount)?,
        };

        let token_id = input.args[0].as_slice();
        self.roles.check_allowed(&*account, token_id, ROLE_NFT_CREATE)?;

        let nonce = latest_nonce(&*account, token_id)?;

        let gas_to_use = gas.compute_cost(&input.args);
        if input.gas_provided < gas_to_use {
            return Err(Error::InsufficientGas);
        }

        let royalties = numeric::decode_biguint(&input.args[3])
            .to_u32()
            .filter(|value| *value <= MAX_ROYALTIES)
            .ok_or_else(|| Error::InvalidArguments("invalid royalties value".to_string()))?;

        let token_storage_key = token_key(token_id);
        let quantity = numeric::decode_biguint(&input.args[1]);
        if quantity.is_zero() {
            return Err(Error::InvalidArguments("invalid quantity".to_string()));
        }
        if quantity > BigUint::one() {
            self.roles
                .check_allowed(&*account, token_id, ROLE_NFT_ADD_QUANTITY)?;
        }
        if self.feature_flags.is_quantity_length_check_enabled()
            && input.args[1].len() > MAX_QUANTITY_ARG_LEN
        {
            return Err(Error::InvalidArguments(format!(
                "max length for a quantity argument is {MAX_QUANTITY_ARG_LEN}"
            )));
        }

        let next_nonce = nonce + 1;
        let unit = TokenUnit::non_fungible(
            quantity.clone(),
            TokenMetadata {
                nonce: next_nonce,
                name: input.args[2].clone(),
                // Always the original caller, also in resolved-target mode.
                creator: input.caller.as_bytes().to_vec(),
                royalties,
                hash: input.args[4].clone(),
                attributes: input.args[5].clone(),
                uris: uris.to_vec(),
            },
        );

        let owner = account.address_bytes().to_vec();
        self.token_storage.save_unit(
            &owner,
            account,
            &token_storage_key,
            next_nonce,
            &unit,
            true,
            input.return_on_error,
        )?;
        self.token_storage
            .add_to_global_supply(&token_storage_key, next_nonce, &quantity)?;

        store_latest_nonce(account, token_id, next_nonce)?;

        if input.call_type == CallType::ResolvedTarget {
            self.accounts.save_account(&*account)?;
        }

        let mut output = CallOutput::ok(input.gas_provided - gas_to_use);
        output.return_data.push(numeric::encode_u64(next_nonce));

        let data = match self.marshaller.marshal_unit(&unit) {
            Ok(bytes) => bytes,
            Err(err) => {
                // The one non-fatal step: the call still succeeds, the event
                // just carries no payload.
                log::warn!("cannot serialize the created unit for the event payload: {err}");
                Vec::new()
            }
        };
        add_token_event(
            &mut output,
            NFT_CREATE_FUNC_NAME,
            token_id,
            next_nonce,
            &quantity,
            &input.caller,
            data,
        );

        Ok(output)
    }
}
