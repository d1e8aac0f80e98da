//! Round lifecycle and entrant admission.
//!
//! Round ids start at 1 and advance by exactly one on every draw or reset.
//! Closed rounds keep their entrant list, flags and status forever.
use soroban_sdk::{Address, Env, Vec};

use crate::draw;
use crate::error::Error;
use crate::events::{Entered, RoundReset};
use crate::storage;
use crate::types::{RoundInfo, RoundStatus};

pub const FIRST_ROUND_ID: u64 = 1;

pub fn open_first_round(env: &Env) {
    storage::set_current_round(env, FIRST_ROUND_ID);
    storage::set_status(env, FIRST_ROUND_ID, RoundStatus::Active);
}

/// Soroban has no zero address. The identities that can never be a real
/// entrant, the vault itself and its prize token, play that role.
pub fn is_null_identity(env: &Env, user: &Address) -> Result<bool, Error> {
    Ok(user == &env.current_contract_address() || user == &storage::get_token(env)?)
}

/// Admit `user` into the active round, drawing in the same invocation once
/// the entrant count reaches `min_participants`.
pub fn enter(env: &Env, user: Address) -> Result<(), Error> {
    if is_null_identity(env, &user)? {
        return Err(Error::InvalidAddress);
    }

    let round_id = storage::current_round(env)?;
    if storage::has_entered(env, round_id, &user) {
        return Err(Error::AlreadyEntered);
    }

    let mut entrants = storage::get_entrants(env, round_id);
    entrants.push_back(user.clone());
    storage::set_entrants(env, round_id, &entrants);
    storage::mark_entered(env, round_id, &user);

    Entered { user, round_id }.publish(env);

    let config = storage::get_config(env)?;
    if entrants.len() >= config.min_participants {
        draw::draw_and_advance(env)?;
    }

    Ok(())
}

/// Close the active round without a draw. The pool carries over.
pub fn reset_round(env: &Env) -> Result<u64, Error> {
    let old_round_id = storage::current_round(env)?;
    let new_round_id = advance(env, old_round_id, RoundStatus::Reset)?;

    RoundReset {
        old_round_id,
        new_round_id,
    }
    .publish(env);

    Ok(new_round_id)
}

/// Mark `closing` with `outcome` and open the next round with no entrants.
pub(crate) fn advance(env: &Env, closing: u64, outcome: RoundStatus) -> Result<u64, Error> {
    let next = closing.checked_add(1).ok_or(Error::Overflow)?;
    storage::set_status(env, closing, outcome);
    storage::set_current_round(env, next);
    storage::set_status(env, next, RoundStatus::Active);
    Ok(next)
}

pub fn current_round_info(env: &Env) -> Result<RoundInfo, Error> {
    let round_id = storage::current_round(env)?;
    Ok(RoundInfo {
        round_id,
        participant_count: storage::get_entrants(env, round_id).len(),
        prize_pool: storage::get_pool(env),
        is_active: storage::get_status(env, round_id) == Some(RoundStatus::Active),
    })
}

pub fn round_winners(env: &Env, round_id: u64) -> Vec<Address> {
    storage::get_winner_record(env, round_id)
        .map(|record| record.winners)
        .unwrap_or(Vec::new(env))
}

pub fn round_status(env: &Env, round_id: u64) -> Result<RoundStatus, Error> {
    if round_id < FIRST_ROUND_ID || round_id > storage::current_round(env)? {
        return Err(Error::RoundNotFound);
    }
    storage::get_status(env, round_id).ok_or(Error::RoundNotFound)
}
