//! Clients for the contracts a proposal manager talks to.

use soroban_sdk::{contractclient, Address, Env, Symbol};

/// The reputation source whose owners vote.
#[allow(dead_code)]
#[contractclient(name = "LockerClient")]
pub trait LockerInterface {
    fn reputation_of(env: Env, owner: Address) -> i128;
    fn total_reputation(env: Env) -> i128;
    fn share_by_owner(env: Env, owner: Address) -> u64;
}

#[allow(dead_code)]
#[contractclient(name = "FeeRegistryClient")]
pub trait FeeRegistryInterface {
    fn fee(env: Env, contract: Address, key: Symbol) -> i128;
    fn fee_receiver(env: Env) -> Address;
}
