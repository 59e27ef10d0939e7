use soroban_sdk::{panic_with_error, Address, Env, Vec};

use crate::errors::LockerError;
use crate::interfaces::ReputationAuthorityClient;
use crate::types::DataKey;

pub fn all(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Authorities)
        .unwrap_or(Vec::new(env))
}

pub fn register(env: &Env, authority: &Address) {
    let mut authorities = all(env);
    if authorities.contains(authority) {
        panic_with_error!(env, LockerError::AuthorityAlreadyRegistered);
    }
    authorities.push_back(authority.clone());
    env.storage().instance().set(&DataKey::Authorities, &authorities);
}

/// Removes `authority` once it reports nothing minted against this locker.
pub fn deregister(env: &Env, authority: &Address) {
    let mut authorities = all(env);
    let index = match authorities.first_index_of(authority) {
        Some(i) => i,
        None => panic_with_error!(env, LockerError::AuthorityNotRegistered),
    };

    let minted = ReputationAuthorityClient::new(env, authority)
        .minted(&env.current_contract_address());
    if minted != 0 {
        panic_with_error!(env, LockerError::ReputationNotBurned);
    }

    authorities.remove(index);
    env.storage().instance().set(&DataKey::Authorities, &authorities);
}

pub fn require_none(env: &Env) {
    if !all(env).is_empty() {
        panic_with_error!(env, LockerError::NonZeroAuthorityCount);
    }
}

/// Fails unless `owner` has no reputation minted in any registered authority.
pub fn require_owner_unminted(env: &Env, owner: &Address) {
    let locker = env.current_contract_address();
    for authority in all(env).iter() {
        let minted = ReputationAuthorityClient::new(env, &authority).owner_minted(&locker, owner);
        if minted != 0 {
            panic_with_error!(env, LockerError::OwnerReputationMinted);
        }
    }
}
