#![no_std]

mod config;
mod events;
mod execution;
mod fees;
mod voting;

pub mod errors;
pub mod interfaces;
pub mod manager;
pub mod types;


pub use crate::errors::ProposalManagerError;
pub use crate::fees::VOTE_FEE_KEY;
pub use crate::manager::{ProposalManagerContract, ProposalManagerContractClient};
pub use crate::types::{
    ExecutionOutcome, Proposal, ProposalCall, ProposalConfig, ProposalOptions, ProposalStatus,
    ProposalVoting, VoteChoice, VoteRecord, VotingProgress,
};
pub use crate::voting::HUNDRED_PCT;
