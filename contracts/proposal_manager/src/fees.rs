use soroban_sdk::{panic_with_error, symbol_short, token, Address, Env, Symbol};

use crate::errors::ProposalManagerError;
use crate::interfaces::FeeRegistryClient;
use crate::types::DataKey;

/// Fee-registry key charged on `propose` and on every vote.
pub const VOTE_FEE_KEY: Symbol = symbol_short!("PM_VOTE");

pub fn native_token(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::NativeToken).unwrap()
}

pub fn collect_vote_fee(env: &Env, payer: &Address, fee: i128) {
    let fee_registry: Address = env.storage().instance().get(&DataKey::FeeRegistry).unwrap();
    let registry = FeeRegistryClient::new(env, &fee_registry);

    if fee != registry.fee(&env.current_contract_address(), &VOTE_FEE_KEY) {
        panic_with_error!(env, ProposalManagerError::FeeMismatch);
    }
    if fee > 0 {
        token::Client::new(env, &native_token(env)).transfer(payer, &registry.fee_receiver(), &fee);
    }
}
