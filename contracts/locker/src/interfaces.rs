//! Clients for the contracts a locker talks to.

use soroban_sdk::{contractclient, Address, Env, Symbol};

/// A registry of unique tokens, each carrying a declared reputation value.
#[allow(dead_code)]
#[contractclient(name = "AssetClient")]
pub trait AssetInterface {
    fn owner_of(env: Env, token_id: u64) -> Address;
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u64);
    fn transfer(env: Env, from: Address, to: Address, token_id: u64);
    fn reputation_value(env: Env, token_id: u64) -> i128;
    fn fee(env: Env, key: Symbol) -> i128;
    fn fee_collector(env: Env) -> Address;
}

#[allow(dead_code)]
#[contractclient(name = "FeeRegistryClient")]
pub trait FeeRegistryInterface {
    /// Fee charged by `contract` for the action `key`.
    fn fee(env: Env, contract: Address, key: Symbol) -> i128;
    fn fee_receiver(env: Env) -> Address;
}

/// An external program minting a derived reputation against a locker.
#[allow(dead_code)]
#[contractclient(name = "ReputationAuthorityClient")]
pub trait ReputationAuthorityInterface {
    fn mint(env: Env, locker: Address);
    fn approve_burn(env: Env, locker: Address);
    fn minted(env: Env, locker: Address) -> i128;
    fn owner_minted(env: Env, locker: Address, owner: Address) -> i128;
}
