use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Env, Vec};

use crate::accounting;
use crate::authorities;
use crate::checkpoints;
use crate::errors::LockerError;
use crate::events;
use crate::fees::{self, TRANSFER_SHARE_FEE_KEY};
use crate::interfaces::{AssetClient, ReputationAuthorityClient};
use crate::types::{AssetRef, DataKey, LockerInfo};

#[contract]
pub struct LockerContract;

#[contractimpl]
impl LockerContract {
    pub fn initialize(
        env: Env,
        deposit_manager: Address,
        proposal_manager: Address,
        fee_registry: Address,
        native_token: Address,
        alt_fee_token: Option<Address>,
    ) {
        if env.storage().instance().has(&DataKey::Initialized) {
            panic_with_error!(&env, LockerError::AlreadyInitialized);
        }

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::DepositManager, &deposit_manager);
        env.storage().instance().set(&DataKey::ProposalManager, &proposal_manager);
        env.storage().instance().set(&DataKey::FeeRegistry, &fee_registry);
        env.storage().instance().set(&DataKey::NativeToken, &native_token);
        if let Some(token) = alt_fee_token {
            env.storage().instance().set(&DataKey::AltFeeToken, &token);
        }
    }

    pub fn deposit(
        env: Env,
        caller: Address,
        asset: Address,
        token_id: u64,
        owners: Vec<Address>,
        shares: Vec<u64>,
        total_shares: u64,
        fee: i128,
    ) {
        Self::require_initialized(&env);
        caller.require_auth();
        Self::require_deposit_manager(&env, &caller);

        if env.storage().instance().has(&DataKey::Asset) {
            panic_with_error!(&env, LockerError::AlreadyDeposited);
        }
        accounting::validate_distribution(&env, &owners, &shares, total_shares);

        fees::collect_deposit_fee(&env, &caller, &asset, fee);

        let locker = env.current_contract_address();
        let asset_client = AssetClient::new(&env, &asset);
        asset_client.transfer_from(&locker, &caller, &locker, &token_id);
        let reputation_value = asset_client.reputation_value(&token_id);

        let asset_ref = AssetRef {
            contract: asset,
            token_id,
        };
        env.storage().instance().set(&DataKey::Asset, &asset_ref);
        env.storage().instance().set(&DataKey::ReputationValue, &reputation_value);

        accounting::assign(&env, &owners, &shares, total_shares);

        let total_reputation = checkpoints::latest(&env, &DataKey::TotalReputationHistory);
        log!(&env, "deposited token {} worth {}", token_id, reputation_value);
        events::deposited(&env, &asset_ref, &owners, total_reputation);
    }

    pub fn deposit_and_mint(
        env: Env,
        caller: Address,
        asset: Address,
        token_id: u64,
        owners: Vec<Address>,
        shares: Vec<u64>,
        total_shares: u64,
        fee: i128,
        authority: Address,
        mint_immediately: bool,
    ) {
        Self::deposit(
            env.clone(),
            caller,
            asset,
            token_id,
            owners,
            shares,
            total_shares,
            fee,
        );

        authorities::register(&env, &authority);
        events::authority_registered(&env, &authority);

        if mint_immediately {
            ReputationAuthorityClient::new(&env, &authority).mint(&env.current_contract_address());
        }
    }

    pub fn withdraw(env: Env, caller: Address, new_owner: Address, new_deposit_manager: Address) {
        Self::require_initialized(&env);
        Self::require_proposal_manager(&env, &caller);

        let asset: AssetRef = match env.storage().instance().get(&DataKey::Asset) {
            Some(a) => a,
            None => panic_with_error!(&env, LockerError::NotDeposited),
        };
        authorities::require_none(&env);

        AssetClient::new(&env, &asset.contract).transfer(
            &env.current_contract_address(),
            &new_owner,
            &asset.token_id,
        );

        accounting::clear(&env);
        env.storage().instance().remove(&DataKey::Asset);
        env.storage()
            .instance()
            .set(&DataKey::DepositManager, &new_deposit_manager);

        log!(&env, "withdrawn token {}", asset.token_id);
        events::withdrawn(&env, &asset, &new_owner, &new_deposit_manager);
    }

    pub fn transfer_share(env: Env, from: Address, to: Address, fee: i128) {
        Self::require_initialized(&env);
        from.require_auth();

        fees::collect_action_fee(&env, &from, &TRANSFER_SHARE_FEE_KEY, fee);
        authorities::require_owner_unminted(&env, &from);

        let moved = accounting::transfer_share(&env, &from, &to);
        if from != to {
            events::share_transferred(&env, &from, &to, moved);
        }
    }

    pub fn change_owners(
        env: Env,
        caller: Address,
        owners: Vec<Address>,
        shares: Vec<u64>,
        total_shares: u64,
    ) {
        Self::require_initialized(&env);
        Self::require_proposal_manager(&env, &caller);

        if !env.storage().instance().has(&DataKey::Asset) {
            panic_with_error!(&env, LockerError::NotDeposited);
        }
        authorities::require_none(&env);

        accounting::assign(&env, &owners, &shares, total_shares);
        events::owners_changed(&env, &owners, total_shares);
    }

    pub fn set_proposal_manager(env: Env, caller: Address, proposal_manager: Address) {
        Self::require_initialized(&env);
        Self::require_proposal_manager(&env, &caller);

        env.storage()
            .instance()
            .set(&DataKey::ProposalManager, &proposal_manager);
        events::proposal_manager_changed(&env, &caller, &proposal_manager);
    }

    pub fn register_authority(env: Env, caller: Address, authority: Address) {
        Self::require_initialized(&env);
        Self::require_proposal_manager(&env, &caller);

        authorities::register(&env, &authority);
        events::authority_registered(&env, &authority);
    }

    pub fn register_authority_and_mint(env: Env, caller: Address, authority: Address) {
        Self::register_authority(env.clone(), caller, authority.clone());
        ReputationAuthorityClient::new(&env, &authority).mint(&env.current_contract_address());
    }

    pub fn deregister_authority(env: Env, caller: Address, authority: Address) {
        Self::require_initialized(&env);
        Self::require_proposal_manager(&env, &caller);

        authorities::deregister(&env, &authority);
        events::authority_deregistered(&env, &authority);
    }

    pub fn deregister_authority_with_burn(env: Env, caller: Address, authority: Address) {
        Self::require_initialized(&env);
        Self::require_proposal_manager(&env, &caller);

        if !authorities::all(&env).contains(&authority) {
            panic_with_error!(&env, LockerError::AuthorityNotRegistered);
        }
        ReputationAuthorityClient::new(&env, &authority)
            .approve_burn(&env.current_contract_address());

        authorities::deregister(&env, &authority);
        events::authority_deregistered(&env, &authority);
    }

    pub fn reputation_of(env: Env, owner: Address) -> i128 {
        checkpoints::latest(&env, &DataKey::ReputationHistory(owner))
    }

    pub fn reputation_of_at(env: Env, owner: Address, sequence: u32) -> i128 {
        checkpoints::value_at(&env, &DataKey::ReputationHistory(owner), sequence)
    }

    pub fn total_reputation(env: Env) -> i128 {
        checkpoints::latest(&env, &DataKey::TotalReputationHistory)
    }

    pub fn total_reputation_at(env: Env, sequence: u32) -> i128 {
        checkpoints::value_at(&env, &DataKey::TotalReputationHistory, sequence)
    }

    pub fn share_by_owner(env: Env, owner: Address) -> u64 {
        accounting::share_of(&env, &owner)
    }

    pub fn total_shares(env: Env) -> u64 {
        accounting::total_shares(&env)
    }

    pub fn locker_info(env: Env) -> LockerInfo {
        Self::require_initialized(&env);

        let owners = accounting::owners(&env);
        let mut reputations = Vec::new(&env);
        for owner in owners.iter() {
            reputations.push_back(checkpoints::latest(&env, &DataKey::ReputationHistory(owner)));
        }

        LockerInfo {
            owners,
            reputations,
            deposit_manager: Self::deposit_manager(env.clone()),
            proposal_manager: Self::proposal_manager(env.clone()),
            total_shares: accounting::total_shares(&env),
            total_reputation: checkpoints::latest(&env, &DataKey::TotalReputationHistory),
        }
    }

    pub fn asset(env: Env) -> Option<AssetRef> {
        env.storage().instance().get(&DataKey::Asset)
    }

    pub fn is_deposited(env: Env) -> bool {
        env.storage().instance().has(&DataKey::Asset)
    }

    pub fn deposit_manager(env: Env) -> Address {
        Self::require_initialized(&env);
        env.storage().instance().get(&DataKey::DepositManager).unwrap()
    }

    pub fn proposal_manager(env: Env) -> Address {
        Self::require_initialized(&env);
        env.storage().instance().get(&DataKey::ProposalManager).unwrap()
    }

    pub fn authorities(env: Env) -> Vec<Address> {
        authorities::all(&env)
    }

    pub fn authorities_count(env: Env) -> u32 {
        authorities::all(&env).len()
    }

    fn require_initialized(env: &Env) {
        if !env.storage().instance().has(&DataKey::Initialized) {
            panic_with_error!(env, LockerError::NotInitialized);
        }
    }

    fn require_deposit_manager(env: &Env, caller: &Address) {
        let deposit_manager: Address = env.storage().instance().get(&DataKey::DepositManager).unwrap();
        if *caller != deposit_manager {
            panic_with_error!(env, LockerError::NotDepositManager);
        }
    }

    fn require_proposal_manager(env: &Env, caller: &Address) {
        caller.require_auth();
        let proposal_manager: Address = env.storage().instance().get(&DataKey::ProposalManager).unwrap();
        if *caller != proposal_manager {
            panic_with_error!(env, LockerError::NotProposalManager);
        }
    }
}
