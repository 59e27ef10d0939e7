//! Threshold configuration: the default and per-marker overrides.

use soroban_sdk::{xdr::ToXdr, Address, BytesN, Env, Symbol};

use crate::errors::ProposalManagerError;
use crate::types::{self, DataKey, ProposalConfig};
use crate::voting::HUNDRED_PCT;

/// Key for every call to `function` on `target`, whatever its arguments.
pub fn marker(env: &Env, target: &Address, function: &Symbol) -> BytesN<32> {
    let mut payload = target.clone().to_xdr(env);
    payload.append(&function.clone().to_xdr(env));
    env.crypto().sha256(&payload).to_bytes()
}

/// Upper bound for `timeout` and `committing_timeout`, in seconds (ten years).
pub const MAX_TIMEOUT: u64 = 10 * 365 * 24 * 60 * 60;

pub fn check(config: &ProposalConfig) -> Result<(), ProposalManagerError> {
    if config.support > HUNDRED_PCT
        || config.min_accept_quorum > HUNDRED_PCT
        || config.timeout == 0
        || config.timeout > MAX_TIMEOUT
        || config.committing_timeout > MAX_TIMEOUT
    {
        return Err(ProposalManagerError::InvalidConfig);
    }
    Ok(())
}

pub fn default_config(env: &Env) -> ProposalConfig {
    env.storage().instance().get(&DataKey::DefaultConfig).unwrap()
}

pub fn set_default(env: &Env, config: &ProposalConfig) {
    env.storage().instance().set(&DataKey::DefaultConfig, config);
}

pub fn by_marker(env: &Env, marker: &BytesN<32>) -> Option<ProposalConfig> {
    env.storage()
        .persistent()
        .get(&DataKey::Config(marker.clone()))
}

pub fn set_for_marker(env: &Env, marker: &BytesN<32>, config: &ProposalConfig) {
    types::save(env, &DataKey::Config(marker.clone()), config);
}

/// The marker's own configuration when one is set, the default otherwise.
pub fn resolve(env: &Env, target: &Address, function: &Symbol) -> ProposalConfig {
    by_marker(env, &marker(env, target, function)).unwrap_or_else(|| default_config(env))
}
