//! Performs a proposal's call and reports how it ended.
//!
//! A failed call never fails the caller: everything the callee did is rolled
//! back by the host and the failure comes back as an `ExecutionOutcome`.
//! Calls that target this contract are dispatched in place, since the host
//! does not allow a contract to re-enter itself.

use soroban_sdk::{token, BytesN, Env, InvokeError, Symbol, TryFromVal, Val};

use crate::config;
use crate::errors::ProposalManagerError;
use crate::events;
use crate::fees;
use crate::types::{ExecutionOutcome, ProposalCall, ProposalConfig};

pub fn perform(env: &Env, call: &ProposalCall, value: i128) -> ExecutionOutcome {
    let this = env.current_contract_address();
    if call.target == this {
        return match dispatch_self(env, call) {
            Ok(()) => ExecutionOutcome::Executed,
            Err(e) => ExecutionOutcome::Reverted(e as u32),
        };
    }

    let native = token::Client::new(env, &fees::native_token(env));
    if value > 0 && native.balance(&this) < value {
        return ExecutionOutcome::Reverted(ProposalManagerError::InsufficientBalance as u32);
    }

    let outcome = match env.try_invoke_contract::<Val, ProposalManagerError>(
        &call.target,
        &call.function,
        call.args.clone(),
    ) {
        Ok(_) => ExecutionOutcome::Executed,
        Err(Ok(e)) => ExecutionOutcome::Reverted(e as u32),
        Err(Err(InvokeError::Contract(code))) => ExecutionOutcome::Reverted(code),
        Err(Err(InvokeError::Abort)) => ExecutionOutcome::Aborted,
    };

    if outcome == ExecutionOutcome::Executed && value > 0 {
        native.transfer(&this, &call.target, &value);
    }
    outcome
}

fn dispatch_self(env: &Env, call: &ProposalCall) -> Result<(), ProposalManagerError> {
    if call.function == Symbol::new(env, "set_default_proposal_config") {
        if call.args.len() != 1 {
            return Err(ProposalManagerError::InvalidCallArgs);
        }
        let config = config_arg(env, call.args.get_unchecked(0))?;

        config::set_default(env, &config);
        events::config_changed(env, None, &config);
        Ok(())
    } else if call.function == Symbol::new(env, "set_proposal_config") {
        if call.args.len() != 2 {
            return Err(ProposalManagerError::InvalidCallArgs);
        }
        let marker = BytesN::<32>::try_from_val(env, &call.args.get_unchecked(0))
            .map_err(|_| ProposalManagerError::InvalidCallArgs)?;
        let config = config_arg(env, call.args.get_unchecked(1))?;

        config::set_for_marker(env, &marker, &config);
        events::config_changed(env, Some(marker), &config);
        Ok(())
    } else {
        Err(ProposalManagerError::UnknownSelfCall)
    }
}

fn config_arg(env: &Env, arg: Val) -> Result<ProposalConfig, ProposalManagerError> {
    let config = ProposalConfig::try_from_val(env, &arg)
        .map_err(|_| ProposalManagerError::InvalidCallArgs)?;
    config::check(&config)?;
    Ok(config)
}
