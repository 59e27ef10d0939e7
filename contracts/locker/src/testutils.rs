//! In-memory stand-ins for the contracts a locker depends on.

use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, Symbol};

#[contracttype]
#[derive(Clone)]
pub enum MockKey {
    Owner(u64),
    Approved(u64),
    Value(u64),
    Fee(Symbol),
    ContractFee(Address, Symbol),
    Receiver,
    Minted(Address),
    OwnerMinted(Address, Address),
    MintApproved(Address),
}

/// A unique-token registry that also declares its own deposit fees and
/// collects them at its own address.
#[contract]
pub struct MockAsset;

#[contractimpl]
impl MockAsset {
    pub fn mint(env: Env, to: Address, token_id: u64, reputation_value: i128) {
        env.storage().instance().set(&MockKey::Owner(token_id), &to);
        env.storage().instance().set(&MockKey::Value(token_id), &reputation_value);
    }

    pub fn approve(env: Env, owner: Address, spender: Address, token_id: u64) {
        owner.require_auth();
        assert_eq!(Self::owner_of(env.clone(), token_id), owner, "not the token owner");
        env.storage().instance().set(&MockKey::Approved(token_id), &spender);
    }

    pub fn owner_of(env: Env, token_id: u64) -> Address {
        env.storage()
            .instance()
            .get(&MockKey::Owner(token_id))
            .expect("unknown token")
    }

    pub fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u64) {
        spender.require_auth();
        let approved: Option<Address> = env.storage().instance().get(&MockKey::Approved(token_id));
        assert_eq!(approved, Some(spender), "transfer not approved");
        assert_eq!(Self::owner_of(env.clone(), token_id), from, "not the token owner");

        env.storage().instance().remove(&MockKey::Approved(token_id));
        env.storage().instance().set(&MockKey::Owner(token_id), &to);
    }

    pub fn transfer(env: Env, from: Address, to: Address, token_id: u64) {
        from.require_auth();
        assert_eq!(Self::owner_of(env.clone(), token_id), from, "not the token owner");

        env.storage().instance().remove(&MockKey::Approved(token_id));
        env.storage().instance().set(&MockKey::Owner(token_id), &to);
    }

    pub fn reputation_value(env: Env, token_id: u64) -> i128 {
        env.storage()
            .instance()
            .get(&MockKey::Value(token_id))
            .unwrap_or(0)
    }

    pub fn set_fee(env: Env, key: Symbol, amount: i128) {
        env.storage().instance().set(&MockKey::Fee(key), &amount);
    }

    pub fn fee(env: Env, key: Symbol) -> i128 {
        env.storage().instance().get(&MockKey::Fee(key)).unwrap_or(0)
    }

    pub fn fee_collector(env: Env) -> Address {
        env.current_contract_address()
    }
}

/// Per-action fees, global or overridden for a single contract.
#[contract]
pub struct MockFeeRegistry;

#[contractimpl]
impl MockFeeRegistry {
    pub fn set_fee_receiver(env: Env, receiver: Address) {
        env.storage().instance().set(&MockKey::Receiver, &receiver);
    }

    pub fn set_fee(env: Env, key: Symbol, amount: i128) {
        env.storage().instance().set(&MockKey::Fee(key), &amount);
    }

    pub fn set_contract_fee(env: Env, contract: Address, key: Symbol, amount: i128) {
        env.storage()
            .instance()
            .set(&MockKey::ContractFee(contract, key), &amount);
    }

    pub fn fee(env: Env, contract: Address, key: Symbol) -> i128 {
        let storage = env.storage().instance();
        storage
            .get(&MockKey::ContractFee(contract, key.clone()))
            .or_else(|| storage.get(&MockKey::Fee(key)))
            .unwrap_or(0)
    }

    pub fn fee_receiver(env: Env) -> Address {
        env.storage()
            .instance()
            .get(&MockKey::Receiver)
            .expect("fee receiver not set")
    }
}

/// A reputation authority whose minted amounts are set directly by tests.
#[contract]
pub struct MockAuthority;

#[contractimpl]
impl MockAuthority {
    pub fn mint(env: Env, locker: Address) {
        env.storage().instance().set(&MockKey::MintApproved(locker), &true);
    }

    pub fn approve_burn(env: Env, locker: Address) {
        env.storage().instance().remove(&MockKey::Minted(locker.clone()));
        env.storage().instance().remove(&MockKey::MintApproved(locker));
    }

    pub fn minted(env: Env, locker: Address) -> i128 {
        env.storage()
            .instance()
            .get(&MockKey::Minted(locker))
            .unwrap_or(0)
    }

    pub fn owner_minted(env: Env, locker: Address, owner: Address) -> i128 {
        env.storage()
            .instance()
            .get(&MockKey::OwnerMinted(locker, owner))
            .unwrap_or(0)
    }

    pub fn mint_approved(env: Env, locker: Address) -> bool {
        env.storage()
            .instance()
            .get(&MockKey::MintApproved(locker))
            .unwrap_or(false)
    }

    pub fn set_minted(env: Env, locker: Address, amount: i128) {
        env.storage().instance().set(&MockKey::Minted(locker), &amount);
    }

    pub fn set_owner_minted(env: Env, locker: Address, owner: Address, amount: i128) {
        env.storage()
            .instance()
            .set(&MockKey::OwnerMinted(locker, owner), &amount);
    }
}
