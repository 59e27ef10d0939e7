use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, Address, BytesN, Env, String, Symbol,
};

use crate::config;
use crate::errors::ProposalManagerError;
use crate::events;
use crate::execution;
use crate::fees;
use crate::interfaces::LockerClient;
use crate::types::{
    self, DataKey, ExecutionOutcome, Proposal, ProposalCall, ProposalConfig, ProposalOptions,
    ProposalStatus, ProposalVoting, VoteChoice, VoteRecord, VotingProgress,
};
use crate::voting;

#[contract]
pub struct ProposalManagerContract;

#[contractimpl]
impl ProposalManagerContract {
    pub fn initialize(
        env: Env,
        locker: Address,
        fee_registry: Address,
        native_token: Address,
        default_config: ProposalConfig,
    ) {
        if env.storage().instance().has(&DataKey::Initialized) {
            panic_with_error!(&env, ProposalManagerError::AlreadyInitialized);
        }
        if let Err(e) = config::check(&default_config) {
            panic_with_error!(&env, e);
        }

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Locker, &locker);
        env.storage().instance().set(&DataKey::FeeRegistry, &fee_registry);
        env.storage().instance().set(&DataKey::NativeToken, &native_token);
        env.storage().instance().set(&DataKey::ProposalCount, &0u64);
        config::set_default(&env, &default_config);
    }

    pub fn propose(
        env: Env,
        proposer: Address,
        call: ProposalCall,
        value: i128,
        options: ProposalOptions,
        description: String,
        fee: i128,
    ) -> u64 {
        Self::require_initialized(&env);
        proposer.require_auth();

        let locker = LockerClient::new(&env, &Self::locker(env.clone()));
        if locker.share_by_owner(&proposer) == 0 {
            panic_with_error!(&env, ProposalManagerError::NotLockerOwner);
        }
        fees::collect_vote_fee(&env, &proposer, fee);

        let config = config::resolve(&env, &call.target, &call.function);
        let now = env.ledger().timestamp();

        let count: u64 = env.storage().instance().get(&DataKey::ProposalCount).unwrap();
        let id = count + 1;
        env.storage().instance().set(&DataKey::ProposalCount, &id);

        let mut proposal = Proposal {
            id,
            creator: proposer.clone(),
            call,
            value,
            options,
            description,
            status: ProposalStatus::Active,
            timeout_at: now.saturating_add(config.timeout),
            config,
            total_reputation: locker.total_reputation(),
            created_at: now,
            decided_at: None,
        };
        types::save(&env, &DataKey::Proposal(id), &proposal);
        types::save(&env, &DataKey::Voting(id), &voting::empty(&env));

        log!(&env, "proposal {} created by {}", id, proposer);
        events::proposal_created(&env, id, &proposer, &proposal.call.target);

        if proposal.options.cast_vote {
            Self::cast(&env, &mut proposal, &proposer, VoteChoice::Aye);
        }
        if proposal.options.executes_if_decided && Self::is_executable(&env, &proposal) {
            Self::execute(&env, &mut proposal);
        }

        id
    }

    pub fn aye(env: Env, voter: Address, proposal_id: u64, execute_if_decided: bool, fee: i128) {
        Self::vote(&env, &voter, proposal_id, VoteChoice::Aye, execute_if_decided, fee);
    }

    pub fn nay(env: Env, voter: Address, proposal_id: u64, fee: i128) {
        Self::vote(&env, &voter, proposal_id, VoteChoice::Nay, false, fee);
    }

    pub fn abstain(env: Env, voter: Address, proposal_id: u64, execute_if_decided: bool, fee: i128) {
        Self::vote(&env, &voter, proposal_id, VoteChoice::Abstain, execute_if_decided, fee);
    }

    /// Runs a decided proposal whose committing timeout is over. A failed call
    /// is returned as an outcome and leaves the proposal active.
    pub fn execute_proposal(env: Env, proposal_id: u64) -> ExecutionOutcome {
        Self::require_initialized(&env);

        let mut proposal = Self::load_open(&env, proposal_id);
        let decided_at = match proposal.decided_at {
            Some(at) => at,
            None => panic_with_error!(&env, ProposalManagerError::ProposalNotDecided),
        };
        let committable_at = decided_at.saturating_add(proposal.config.committing_timeout);
        if env.ledger().timestamp() < committable_at {
            panic_with_error!(&env, ProposalManagerError::CommittingTimeoutActive);
        }

        Self::execute(&env, &mut proposal)
    }

    pub fn proposal(env: Env, proposal_id: u64) -> Proposal {
        Self::require_initialized(&env);
        let mut proposal = Self::load(&env, proposal_id);
        proposal.status = Self::status_of(&env, &proposal);
        proposal
    }

    pub fn proposal_status(env: Env, proposal_id: u64) -> ProposalStatus {
        Self::require_initialized(&env);
        Self::status_of(&env, &Self::load(&env, proposal_id))
    }

    pub fn proposal_voting(env: Env, proposal_id: u64) -> ProposalVoting {
        Self::require_initialized(&env);
        Self::load(&env, proposal_id);
        Self::voting_of(&env, proposal_id)
    }

    pub fn proposal_voting_progress(env: Env, proposal_id: u64) -> VotingProgress {
        Self::require_initialized(&env);
        let proposal = Self::load(&env, proposal_id);
        voting::progress(&env, &proposal, &Self::voting_of(&env, proposal_id))
    }

    pub fn vote_of(env: Env, proposal_id: u64, voter: Address) -> Option<VoteRecord> {
        env.storage()
            .persistent()
            .get(&DataKey::Vote(proposal_id, voter))
    }

    pub fn proposal_count(env: Env) -> u64 {
        Self::require_initialized(&env);
        env.storage().instance().get(&DataKey::ProposalCount).unwrap()
    }

    pub fn threshold_marker(env: Env, target: Address, function: Symbol) -> BytesN<32> {
        config::marker(&env, &target, &function)
    }

    pub fn default_config(env: Env) -> ProposalConfig {
        Self::require_initialized(&env);
        config::default_config(&env)
    }

    pub fn proposal_config(env: Env, marker: BytesN<32>) -> Option<ProposalConfig> {
        config::by_marker(&env, &marker)
    }

    pub fn locker(env: Env) -> Address {
        Self::require_initialized(&env);
        env.storage().instance().get(&DataKey::Locker).unwrap()
    }

    fn require_initialized(env: &Env) {
        if !env.storage().instance().has(&DataKey::Initialized) {
            panic_with_error!(env, ProposalManagerError::NotInitialized);
        }
    }

    fn vote(
        env: &Env,
        voter: &Address,
        proposal_id: u64,
        choice: VoteChoice,
        execute_if_decided: bool,
        fee: i128,
    ) {
        Self::require_initialized(env);
        voter.require_auth();

        let mut proposal = Self::load_open(env, proposal_id);
        fees::collect_vote_fee(env, voter, fee);
        Self::cast(env, &mut proposal, voter, choice);

        if execute_if_decided
            && !proposal.options.require_execute_call
            && Self::is_executable(env, &proposal)
        {
            Self::execute(env, &mut proposal);
        }
    }

    /// Records `voter`'s current reputation as its weight and re-evaluates
    /// whether the proposal is decided.
    fn cast(env: &Env, proposal: &mut Proposal, voter: &Address, choice: VoteChoice) {
        let weight = LockerClient::new(env, &Self::locker(env.clone())).reputation_of(voter);
        if weight <= 0 {
            panic_with_error!(env, ProposalManagerError::ZeroReputation);
        }

        let vote_key = DataKey::Vote(proposal.id, voter.clone());
        let previous: Option<VoteRecord> = env.storage().persistent().get(&vote_key);
        let record = VoteRecord { choice, weight };

        let mut tally = Self::voting_of(env, proposal.id);
        voting::apply(env, &mut tally, voter, previous, &record);
        types::save(env, &vote_key, &record);
        types::save(env, &DataKey::Voting(proposal.id), &tally);

        if voting::is_decided(env, &proposal.config, &tally, proposal.total_reputation) {
            if proposal.decided_at.is_none() {
                proposal.decided_at = Some(env.ledger().timestamp());
            }
        } else {
            proposal.decided_at = None;
        }
        types::save(env, &DataKey::Proposal(proposal.id), proposal);

        events::voted(env, proposal.id, voter, choice, weight);
    }

    fn execute(env: &Env, proposal: &mut Proposal) -> ExecutionOutcome {
        let outcome = execution::perform(env, &proposal.call, proposal.value);

        if outcome == ExecutionOutcome::Executed {
            proposal.status = ProposalStatus::Executed;
            types::save(env, &DataKey::Proposal(proposal.id), proposal);
            log!(env, "proposal {} executed", proposal.id);
            events::executed(env, proposal.id);
        } else {
            log!(env, "proposal {} call failed", proposal.id);
            events::execution_failed(env, proposal.id, outcome);
        }
        outcome
    }

    fn is_executable(env: &Env, proposal: &Proposal) -> bool {
        match proposal.decided_at {
            Some(at) => {
                let now = env.ledger().timestamp();
                now < proposal.timeout_at
                    && now >= at.saturating_add(proposal.config.committing_timeout)
            }
            None => false,
        }
    }

    fn status_of(env: &Env, proposal: &Proposal) -> ProposalStatus {
        if proposal.status == ProposalStatus::Active
            && env.ledger().timestamp() >= proposal.timeout_at
        {
            return ProposalStatus::Rejected;
        }
        proposal.status
    }

    fn load(env: &Env, proposal_id: u64) -> Proposal {
        match env.storage().persistent().get(&DataKey::Proposal(proposal_id)) {
            Some(p) => p,
            None => panic_with_error!(env, ProposalManagerError::ProposalNotFound),
        }
    }

    /// Loads a proposal that can still be voted on or executed.
    fn load_open(env: &Env, proposal_id: u64) -> Proposal {
        let proposal = Self::load(env, proposal_id);
        if proposal.status == ProposalStatus::Executed {
            panic_with_error!(env, ProposalManagerError::ProposalAlreadyExecuted);
        }
        if env.ledger().timestamp() >= proposal.timeout_at {
            panic_with_error!(env, ProposalManagerError::ProposalExpired);
        }
        proposal
    }

    fn voting_of(env: &Env, proposal_id: u64) -> ProposalVoting {
        env.storage()
            .persistent()
            .get(&DataKey::Voting(proposal_id))
            .unwrap_or(voting::empty(env))
    }
}
