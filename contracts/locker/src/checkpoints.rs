//! Append-only balance history keyed by ledger sequence number.

use soroban_sdk::{Env, Vec};

use crate::types::{self, Checkpoint, DataKey};

pub fn history(env: &Env, key: &DataKey) -> Vec<Checkpoint> {
    env.storage()
        .persistent()
        .get(key)
        .unwrap_or(Vec::new(env))
}

pub fn latest(env: &Env, key: &DataKey) -> i128 {
    history(env, key).last().map(|c| c.value).unwrap_or(0)
}

/// Value in effect at or before `sequence`, zero before the first checkpoint.
pub fn value_at(env: &Env, key: &DataKey, sequence: u32) -> i128 {
    let checkpoints = history(env, key);
    let len = checkpoints.len();
    if len == 0 {
        return 0;
    }

    let last = checkpoints.get_unchecked(len - 1);
    if sequence >= last.sequence {
        return last.value;
    }
    if sequence < checkpoints.get_unchecked(0).sequence {
        return 0;
    }

    // invariant: checkpoints[low].sequence <= sequence < checkpoints[high].sequence
    let mut low = 0u32;
    let mut high = len - 1;
    while high - low > 1 {
        let mid = low + (high - low) / 2;
        if checkpoints.get_unchecked(mid).sequence <= sequence {
            low = mid;
        } else {
            high = mid;
        }
    }
    checkpoints.get_unchecked(low).value
}

/// Records `value` at the current ledger sequence. Unchanged values are not
/// appended; a second write within the same ledger replaces that ledger's entry.
pub fn record(env: &Env, key: &DataKey, value: i128) {
    let mut checkpoints = history(env, key);
    let sequence = env.ledger().sequence();

    match checkpoints.last() {
        Some(last) if last.value == value => return,
        Some(last) if last.sequence == sequence => {
            checkpoints.set(checkpoints.len() - 1, Checkpoint { sequence, value });
        }
        None if value == 0 => return,
        _ => checkpoints.push_back(Checkpoint { sequence, value }),
    }

    types::save(env, key, &checkpoints);
}
