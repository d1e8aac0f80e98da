//! Storage keys and typed accessors.
//!
//! - `instance()`: Admin, Token, Config, CurrentRound. Small fixed-size
//!   config sharing one ledger entry; TTL bumped on every write.
//! - `persistent()`: Pool counter plus per-round entries. Rounds are never
//!   rewritten once closed, so the per-round keys form an append-only log
//!   indexed by round id.
use shared::PERSISTENT_BUMP_LEDGERS;
use soroban_sdk::{contracttype, Address, Env, IntoVal, Val, Vec};

use crate::error::Error;
use crate::types::{Config, RoundStatus, WinnerRecord};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // --- instance() ---
    Admin,
    Token,
    Config,
    CurrentRound,
    // --- persistent() ---
    /// Tracked prize pool balance.
    Pool,
    /// Ordered entrant list for a round.
    RoundEntrants(u64),
    /// Admission flag for (round, address).
    Entered(u64, Address),
    Winners(u64),
    Status(u64),
}

// ---------------------------------------------------------------------------
// instance()
// ---------------------------------------------------------------------------

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn require_initialized(env: &Env) -> Result<(), Error> {
    if !is_initialized(env) {
        return Err(Error::NotInitialized);
    }
    Ok(())
}

pub fn get_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub fn set_admin(env: &Env, admin: &Address) {
    set_instance(env, DataKey::Admin, admin);
}

pub fn get_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(Error::NotInitialized)
}

pub fn set_token(env: &Env, token: &Address) {
    set_instance(env, DataKey::Token, token);
}

pub fn get_config(env: &Env) -> Result<Config, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &Config) {
    set_instance(env, DataKey::Config, config);
}

pub fn current_round(env: &Env) -> Result<u64, Error> {
    env.storage()
        .instance()
        .get(&DataKey::CurrentRound)
        .ok_or(Error::NotInitialized)
}

pub fn set_current_round(env: &Env, round_id: u64) {
    set_instance(env, DataKey::CurrentRound, &round_id);
}

// ---------------------------------------------------------------------------
// persistent()
// ---------------------------------------------------------------------------

pub fn get_pool(env: &Env) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Pool)
        .unwrap_or(0)
}

pub fn set_pool(env: &Env, amount: i128) {
    set_persistent(env, DataKey::Pool, &amount);
}

pub fn get_entrants(env: &Env, round_id: u64) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::RoundEntrants(round_id))
        .unwrap_or(Vec::new(env))
}

pub fn set_entrants(env: &Env, round_id: u64, entrants: &Vec<Address>) {
    set_persistent(env, DataKey::RoundEntrants(round_id), entrants);
}

pub fn has_entered(env: &Env, round_id: u64, user: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Entered(round_id, user.clone()))
}

/// Set once per (round, address); never cleared.
pub fn mark_entered(env: &Env, round_id: u64, user: &Address) {
    set_persistent(env, DataKey::Entered(round_id, user.clone()), &true);
}

pub fn get_winner_record(env: &Env, round_id: u64) -> Option<WinnerRecord> {
    env.storage().persistent().get(&DataKey::Winners(round_id))
}

pub fn set_winner_record(env: &Env, record: &WinnerRecord) {
    set_persistent(env, DataKey::Winners(record.round_id), record);
}

pub fn get_status(env: &Env, round_id: u64) -> Option<RoundStatus> {
    env.storage().persistent().get(&DataKey::Status(round_id))
}

pub fn set_status(env: &Env, round_id: u64, status: RoundStatus) {
    set_persistent(env, DataKey::Status(round_id), &status);
}

// ---------------------------------------------------------------------------
// TTL helpers
// ---------------------------------------------------------------------------

fn set_instance<T>(env: &Env, key: DataKey, value: &T)
where
    T: IntoVal<Env, Val>,
{
    env.storage().instance().set(&key, value);
    env.storage()
        .instance()
        .extend_ttl(PERSISTENT_BUMP_LEDGERS, PERSISTENT_BUMP_LEDGERS);
}

/// Write a persistent entry and extend its TTL in one step.
fn set_persistent<T>(env: &Env, key: DataKey, value: &T)
where
    T: IntoVal<Env, Val>,
{
    env.storage().persistent().set(&key, value);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_BUMP_LEDGERS, PERSISTENT_BUMP_LEDGERS);
}
