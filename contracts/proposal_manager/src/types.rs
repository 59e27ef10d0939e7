use soroban_sdk::{contracttype, Address, BytesN, Env, IntoVal, String, Symbol, Val, Vec};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Locker,
    FeeRegistry,
    NativeToken,
    DefaultConfig,
    Config(BytesN<32>),
    ProposalCount,
    Proposal(u64),
    Voting(u64),
    Vote(u64, Address),
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

/// Threshold parameters. `support` and `min_accept_quorum` are basis points.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalConfig {
    pub support: u32,
    pub min_accept_quorum: u32,
    pub timeout: u64,
    pub committing_timeout: u64,
}

/// The privileged call a proposal performs once approved.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalCall {
    pub target: Address,
    pub function: Symbol,
    pub args: Vec<Val>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalOptions {
    /// Record the proposer's aye at creation.
    pub cast_vote: bool,
    /// Try to execute inside `propose` when already executable.
    pub executes_if_decided: bool,
    /// Only `execute_proposal` may execute; votes never do.
    pub require_execute_call: bool,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalStatus {
    Active,
    Executed,
    Rejected,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub creator: Address,
    pub call: ProposalCall,
    pub value: i128,
    pub options: ProposalOptions,
    pub description: String,
    pub status: ProposalStatus,
    pub config: ProposalConfig,
    pub total_reputation: i128,
    pub created_at: u64,
    pub timeout_at: u64,
    pub decided_at: Option<u64>,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VoteChoice {
    Aye,
    Nay,
    Abstain,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteRecord {
    pub choice: VoteChoice,
    pub weight: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalVoting {
    pub ayes: Vec<Address>,
    pub nays: Vec<Address>,
    pub abstains: Vec<Address>,
    pub total_ayes: i128,
    pub total_nays: i128,
    pub total_abstains: i128,
}

/// Where a proposal stands against its frozen thresholds.
///
/// `current_support` is ayes over all cast weight and `current_quorum` is
/// cast weight over the reputation total at creation, both in basis points.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VotingProgress {
    pub required_support: u32,
    pub min_accept_quorum: u32,
    pub current_support: i128,
    pub current_quorum: i128,
    pub total_ayes: i128,
    pub total_nays: i128,
    pub total_abstains: i128,
    pub total_reputation: i128,
    pub timeout_at: u64,
    pub decided_at: Option<u64>,
    pub committing_timeout_at: Option<u64>,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExecutionOutcome {
    Executed,
    /// The call failed with this contract error code; nothing it did persists.
    Reverted(u32),
    /// The call failed without a contract error code.
    Aborted,
}
