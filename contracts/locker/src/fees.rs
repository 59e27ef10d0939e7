//! Fee collection for deposits and share transfers.

use soroban_sdk::{panic_with_error, symbol_short, token, Address, Env, Symbol};

use crate::errors::LockerError;
use crate::interfaces::{AssetClient, FeeRegistryClient};
use crate::types::DataKey;

/// Asset-registry key for a deposit fee paid in the native token.
pub const NATIVE_FEE_KEY: Symbol = symbol_short!("LCK_NATV");
/// Asset-registry key for a deposit fee paid in the alternate fee token.
pub const ALT_FEE_KEY: Symbol = symbol_short!("LCK_ALT");
/// Fee-registry key for `transfer_share`.
pub const TRANSFER_SHARE_FEE_KEY: Symbol = symbol_short!("LCK_SHARE");

fn native_token(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::NativeToken).unwrap()
}

/// Charges the deposit fee of the asset's registry, once per registry.
///
/// A non-zero `fee` is a native-token payment and must match the registry's
/// native fee exactly. Otherwise the alternate fee, if any, is pulled through
/// the allowance `payer` granted to this locker.
pub fn collect_deposit_fee(env: &Env, payer: &Address, asset: &Address, fee: i128) {
    let paid_key = DataKey::FeePaid(asset.clone());
    if env.storage().instance().has(&paid_key) {
        if fee != 0 {
            panic_with_error!(env, LockerError::InvalidFee);
        }
        return;
    }

    let registry = AssetClient::new(env, asset);
    let native_fee = registry.fee(&NATIVE_FEE_KEY);
    let collector = registry.fee_collector();

    if fee != 0 {
        if fee < 0 || fee != native_fee {
            panic_with_error!(env, LockerError::InvalidFee);
        }
        token::Client::new(env, &native_token(env)).transfer(payer, &collector, &fee);
    } else if native_fee > 0 {
        panic_with_error!(env, LockerError::InvalidFee);
    } else {
        let alt_fee = registry.fee(&ALT_FEE_KEY);
        if alt_fee > 0 {
            let alt_token: Address = match env.storage().instance().get(&DataKey::AltFeeToken) {
                Some(a) => a,
                None => panic_with_error!(env, LockerError::AltFeeTokenNotSet),
            };
            token::Client::new(env, &alt_token).transfer_from(
                &env.current_contract_address(),
                payer,
                &collector,
                &alt_fee,
            );
        }
    }

    env.storage().instance().set(&paid_key, &true);
}

/// Charges the fee the fee registry configures for `key` on this locker.
pub fn collect_action_fee(env: &Env, payer: &Address, key: &Symbol, fee: i128) {
    let fee_registry: Address = env.storage().instance().get(&DataKey::FeeRegistry).unwrap();
    let registry = FeeRegistryClient::new(env, &fee_registry);

    let required = registry.fee(&env.current_contract_address(), key);
    if fee != required {
        panic_with_error!(env, LockerError::FeeMismatch);
    }
    if fee > 0 {
        token::Client::new(env, &native_token(env)).transfer(payer, &registry.fee_receiver(), &fee);
    }
}
