use soroban_sdk::{contractevent, Address, BytesN, Env};

use crate::types::{ExecutionOutcome, ProposalConfig, VoteChoice};

#[contractevent(topics = ["proposal"], data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalCreated {
    #[topic]
    pub id: u64,
    pub creator: Address,
    pub target: Address,
}

#[contractevent(topics = ["vote"], data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Voted {
    #[topic]
    pub id: u64,
    #[topic]
    pub voter: Address,
    pub choice: VoteChoice,
    pub weight: i128,
}

#[contractevent(topics = ["executed"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Executed {
    #[topic]
    pub id: u64,
}

#[contractevent(topics = ["exec_fail"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExecutionFailed {
    #[topic]
    pub id: u64,
    pub outcome: ExecutionOutcome,
}

/// `marker` is `None` for the default configuration.
#[contractevent(topics = ["config"], data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigChanged {
    pub marker: Option<BytesN<32>>,
    pub config: ProposalConfig,
}

pub fn proposal_created(env: &Env, id: u64, creator: &Address, target: &Address) {
    ProposalCreated {
        id,
        creator: creator.clone(),
        target: target.clone(),
    }
    .publish(env);
}

pub fn voted(env: &Env, id: u64, voter: &Address, choice: VoteChoice, weight: i128) {
    Voted {
        id,
        voter: voter.clone(),
        choice,
        weight,
    }
    .publish(env);
}

pub fn executed(env: &Env, id: u64) {
    Executed { id }.publish(env);
}

pub fn execution_failed(env: &Env, id: u64, outcome: ExecutionOutcome) {
    ExecutionFailed { id, outcome }.publish(env);
}

pub fn config_changed(env: &Env, marker: Option<BytesN<32>>, config: &ProposalConfig) {
    ConfigChanged {
        marker,
        config: config.clone(),
    }
    .publish(env);
}
