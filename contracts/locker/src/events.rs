use soroban_sdk::{contractevent, Address, Env, Vec};

use crate::types::AssetRef;

#[contractevent(topics = ["deposit"], data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposited {
    #[topic]
    pub contract: Address,
    #[topic]
    pub token_id: u64,
    pub owners: Vec<Address>,
    pub total_reputation: i128,
}

#[contractevent(topics = ["withdraw"], data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawn {
    #[topic]
    pub contract: Address,
    #[topic]
    pub token_id: u64,
    pub new_owner: Address,
    pub new_deposit_manager: Address,
}

#[contractevent(topics = ["xfer_shr"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShareTransferred {
    #[topic]
    pub from: Address,
    #[topic]
    pub to: Address,
    pub shares: u64,
}

#[contractevent(topics = ["owners"], data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnersChanged {
    pub owners: Vec<Address>,
    pub total_shares: u64,
}

#[contractevent(topics = ["ra_add"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthorityRegistered {
    #[topic]
    pub authority: Address,
}

#[contractevent(topics = ["ra_del"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthorityDeregistered {
    #[topic]
    pub authority: Address,
}

#[contractevent(topics = ["pm_set"], data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalManagerChanged {
    pub previous: Address,
    pub current: Address,
}

pub fn deposited(env: &Env, asset: &AssetRef, owners: &Vec<Address>, total_reputation: i128) {
    Deposited {
        contract: asset.contract.clone(),
        token_id: asset.token_id,
        owners: owners.clone(),
        total_reputation,
    }
    .publish(env);
}

pub fn withdrawn(env: &Env, asset: &AssetRef, new_owner: &Address, new_deposit_manager: &Address) {
    Withdrawn {
        contract: asset.contract.clone(),
        token_id: asset.token_id,
        new_owner: new_owner.clone(),
        new_deposit_manager: new_deposit_manager.clone(),
    }
    .publish(env);
}

pub fn share_transferred(env: &Env, from: &Address, to: &Address, shares: u64) {
    ShareTransferred {
        from: from.clone(),
        to: to.clone(),
        shares,
    }
    .publish(env);
}

pub fn owners_changed(env: &Env, owners: &Vec<Address>, total_shares: u64) {
    OwnersChanged {
        owners: owners.clone(),
        total_shares,
    }
    .publish(env);
}

pub fn authority_registered(env: &Env, authority: &Address) {
    AuthorityRegistered {
        authority: authority.clone(),
    }
    .publish(env);
}

pub fn authority_deregistered(env: &Env, authority: &Address) {
    AuthorityDeregistered {
        authority: authority.clone(),
    }
    .publish(env);
}

pub fn proposal_manager_changed(env: &Env, previous: &Address, current: &Address) {
    ProposalManagerChanged {
        previous: previous.clone(),
        current: current.clone(),
    }
    .publish(env);
}
