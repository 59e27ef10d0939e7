//! Share table and the reputation split derived from it.
//!
//! Every owner's reputation is `floor(value * share / total_shares)`, always
//! recomputed from the share table. The aggregate is the sum of those
//! balances, so rounding dust is never counted as reputation.

use soroban_sdk::{panic_with_error, Address, Env, Vec};

use crate::checkpoints;
use crate::errors::LockerError;
use crate::types::{self, DataKey};

pub fn owners(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Owners)
        .unwrap_or(Vec::new(env))
}

pub fn share_of(env: &Env, owner: &Address) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::Share(owner.clone()))
        .unwrap_or(0)
}

pub fn total_shares(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::TotalShares)
        .unwrap_or(0)
}

pub fn reputation_value(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::ReputationValue)
        .unwrap_or(0)
}

pub fn validate_distribution(
    env: &Env,
    owners: &Vec<Address>,
    shares: &Vec<u64>,
    total_shares: u64,
) {
    if owners.len() != shares.len() {
        panic_with_error!(env, LockerError::LengthMismatch);
    }
    if owners.is_empty() {
        panic_with_error!(env, LockerError::EmptyOwners);
    }

    let mut sum: u64 = 0;
    for i in 0..owners.len() {
        let share = shares.get_unchecked(i);
        if share == 0 {
            panic_with_error!(env, LockerError::InvalidShares);
        }
        sum = match sum.checked_add(share) {
            Some(s) => s,
            None => panic_with_error!(env, LockerError::ArithmeticOverflow),
        };

        let owner = owners.get_unchecked(i);
        for j in (i + 1)..owners.len() {
            if owner == owners.get_unchecked(j) {
                panic_with_error!(env, LockerError::DuplicateOwner);
            }
        }
    }

    if sum != total_shares {
        panic_with_error!(env, LockerError::InvalidShares);
    }
}

/// Replaces the whole share table and recomputes every balance.
pub fn assign(env: &Env, new_owners: &Vec<Address>, shares: &Vec<u64>, total_shares: u64) {
    validate_distribution(env, new_owners, shares, total_shares);

    let previous = owners(env);
    for owner in previous.iter() {
        env.storage().persistent().remove(&DataKey::Share(owner));
    }
    for i in 0..new_owners.len() {
        types::save(
            env,
            &DataKey::Share(new_owners.get_unchecked(i)),
            &shares.get_unchecked(i),
        );
    }

    env.storage().instance().set(&DataKey::Owners, new_owners);
    env.storage().instance().set(&DataKey::TotalShares, &total_shares);

    recompute(env, &previous);
}

/// Moves the entire share of `from` onto `to` and returns the moved count.
pub fn transfer_share(env: &Env, from: &Address, to: &Address) -> u64 {
    let moved = share_of(env, from);
    if moved == 0 {
        panic_with_error!(env, LockerError::NoShare);
    }
    if from == to {
        return moved;
    }

    let previous = owners(env);
    let receiving = share_of(env, to);

    env.storage().persistent().remove(&DataKey::Share(from.clone()));
    types::save(env, &DataKey::Share(to.clone()), &(receiving + moved));

    let mut current = Vec::new(env);
    for owner in previous.iter() {
        if owner != *from {
            current.push_back(owner);
        }
    }
    if receiving == 0 {
        current.push_back(to.clone());
    }
    env.storage().instance().set(&DataKey::Owners, &current);

    recompute(env, &previous);
    moved
}

/// Zeroes every balance and empties the share table.
pub fn clear(env: &Env) {
    let previous = owners(env);
    for owner in previous.iter() {
        env.storage().persistent().remove(&DataKey::Share(owner.clone()));
        checkpoints::record(env, &DataKey::ReputationHistory(owner), 0);
    }
    checkpoints::record(env, &DataKey::TotalReputationHistory, 0);

    env.storage().instance().remove(&DataKey::Owners);
    env.storage().instance().remove(&DataKey::TotalShares);
    env.storage().instance().remove(&DataKey::ReputationValue);
}

fn recompute(env: &Env, previous: &Vec<Address>) {
    let current = owners(env);
    let total = total_shares(env) as i128;
    let value = reputation_value(env);

    for owner in previous.iter() {
        if !current.contains(&owner) {
            checkpoints::record(env, &DataKey::ReputationHistory(owner), 0);
        }
    }

    let mut aggregate: i128 = 0;
    for owner in current.iter() {
        let share = share_of(env, &owner) as i128;
        let reputation = match value.checked_mul(share) {
            Some(product) => product / total,
            None => panic_with_error!(env, LockerError::ArithmeticOverflow),
        };
        aggregate += reputation;
        checkpoints::record(env, &DataKey::ReputationHistory(owner), reputation);
    }

    checkpoints::record(env, &DataKey::TotalReputationHistory, aggregate);
}
