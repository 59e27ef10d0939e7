//! Vote tallies and the support/quorum decision.

use soroban_sdk::{panic_with_error, Address, Env, Vec};

use crate::errors::ProposalManagerError;
use crate::types::{Proposal, ProposalConfig, ProposalVoting, VoteChoice, VoteRecord, VotingProgress};

pub const HUNDRED_PCT: u32 = 10_000;

pub fn empty(env: &Env) -> ProposalVoting {
    ProposalVoting {
        ayes: Vec::new(env),
        nays: Vec::new(env),
        abstains: Vec::new(env),
        total_ayes: 0,
        total_nays: 0,
        total_abstains: 0,
    }
}

fn checked(env: &Env, value: Option<i128>) -> i128 {
    match value {
        Some(v) => v,
        None => panic_with_error!(env, ProposalManagerError::ArithmeticOverflow),
    }
}

pub fn total_cast(env: &Env, voting: &ProposalVoting) -> i128 {
    let ayes_and_nays = checked(env, voting.total_ayes.checked_add(voting.total_nays));
    checked(env, ayes_and_nays.checked_add(voting.total_abstains))
}

/// Replaces any earlier vote of `voter` with `current`.
pub fn apply(
    env: &Env,
    voting: &mut ProposalVoting,
    voter: &Address,
    previous: Option<VoteRecord>,
    current: &VoteRecord,
) {
    if let Some(previous) = previous {
        let (voters, total) = tally(voting, previous.choice);
        if let Some(index) = voters.first_index_of(voter) {
            voters.remove(index);
        }
        *total = checked(env, total.checked_sub(previous.weight));
    }

    let (voters, total) = tally(voting, current.choice);
    voters.push_back(voter.clone());
    *total = checked(env, total.checked_add(current.weight));
}

fn tally(voting: &mut ProposalVoting, choice: VoteChoice) -> (&mut Vec<Address>, &mut i128) {
    match choice {
        VoteChoice::Aye => (&mut voting.ayes, &mut voting.total_ayes),
        VoteChoice::Nay => (&mut voting.nays, &mut voting.total_nays),
        VoteChoice::Abstain => (&mut voting.abstains, &mut voting.total_abstains),
    }
}

fn pct(env: &Env, part: i128) -> i128 {
    checked(env, part.checked_mul(HUNDRED_PCT as i128))
}

pub fn support(env: &Env, voting: &ProposalVoting) -> i128 {
    let cast = total_cast(env, voting);
    if cast <= 0 {
        return 0;
    }
    pct(env, voting.total_ayes) / cast
}

pub fn quorum(env: &Env, voting: &ProposalVoting, total_reputation: i128) -> i128 {
    if total_reputation <= 0 {
        return 0;
    }
    pct(env, total_cast(env, voting)) / total_reputation
}

/// Abstentions count toward the cast weight of both thresholds.
pub fn is_decided(
    env: &Env,
    config: &ProposalConfig,
    voting: &ProposalVoting,
    total_reputation: i128,
) -> bool {
    let cast = total_cast(env, voting);
    if cast <= 0 {
        return false;
    }

    let required_support = checked(env, (config.support as i128).checked_mul(cast));
    let required_quorum = checked(
        env,
        (config.min_accept_quorum as i128).checked_mul(total_reputation),
    );
    pct(env, voting.total_ayes) >= required_support && pct(env, cast) >= required_quorum
}

pub fn progress(env: &Env, proposal: &Proposal, voting: &ProposalVoting) -> VotingProgress {
    VotingProgress {
        required_support: proposal.config.support,
        min_accept_quorum: proposal.config.min_accept_quorum,
        current_support: support(env, voting),
        current_quorum: quorum(env, voting, proposal.total_reputation),
        total_ayes: voting.total_ayes,
        total_nays: voting.total_nays,
        total_abstains: voting.total_abstains,
        total_reputation: proposal.total_reputation,
        timeout_at: proposal.timeout_at,
        decided_at: proposal.decided_at,
        committing_timeout_at: proposal
            .decided_at
            .map(|at| at.saturating_add(proposal.config.committing_timeout)),
    }
}
