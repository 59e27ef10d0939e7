use soroban_sdk::{contracttype, Address, Env, IntoVal, Val, Vec};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    DepositManager,
    ProposalManager,
    FeeRegistry,
    NativeToken,
    AltFeeToken,
    Asset,
    ReputationValue,
    TotalShares,
    Owners,
    Share(Address),
    ReputationHistory(Address),
    TotalReputationHistory,
    Authorities,
    FeePaid(Address),
}

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const PERSISTENT_BUMP: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_THRESHOLD: u32 = PERSISTENT_BUMP - DAY_IN_LEDGERS;

/// Writes a persistent entry and keeps it, and the contract instance, live.
pub(crate) fn save<V: IntoVal<Env, Val>>(env: &Env, key: &DataKey, value: &V) {
    env.storage().persistent().set(key, value);
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_THRESHOLD, PERSISTENT_BUMP);
    env.storage()
        .instance()
        .extend_ttl(PERSISTENT_THRESHOLD, PERSISTENT_BUMP);
}

/// The deposited unique token: its contract and id within that contract.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetRef {
    pub contract: Address,
    pub token_id: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Checkpoint {
    pub sequence: u32,
    pub value: i128,
}

/// Snapshot of the current owner set. `owners` and `reputations` are parallel.
/// The deposited asset is read separately through `asset`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LockerInfo {
    pub owners: Vec<Address>,
    pub reputations: Vec<i128>,
    pub deposit_manager: Address,
    pub proposal_manager: Address,
    pub total_shares: u64,
    pub total_reputation: i128,
}
