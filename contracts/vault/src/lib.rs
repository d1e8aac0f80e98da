//! ChainLuck Round-Based Lottery Vault
//!
//! Participants are entered into a round; once `min_participants` distinct
//! addresses have joined, up to `winners_per_draw` of them are drawn and
//! split the pooled SEP-41 tokens. The draw runs inside the same invocation
//! as the entry that triggered it, then the next round opens.
//!
//! ## Components
//! - [`access`]: single-admin guard for privileged entry points.
//! - [`config`]: validated draw parameters.
//! - [`treasury`]: pool deposits, draw payouts, emergency withdrawal.
//! - [`ledger`]: round ids, entrant admission, round history.
//! - [`draw`]: winner selection and prize computation.
//! - [`randomness`]: pluggable entropy for the draw.
//!
//! ## Atomicity
//! Every entry point either commits all of its writes, transfers and events
//! or returns an `Error` and leaves no trace. State is written before any
//! outbound token transfer.
//!
//! ## Randomness
//! Winner selection is NOT verifiable. See [`randomness`] for the threat
//! model; integrators should surface this to their users.
#![no_std]
#![allow(unexpected_cfgs)]

pub mod access;
pub mod config;
pub mod draw;
pub mod error;
pub mod events;
pub mod ledger;
pub mod randomness;
pub mod storage;
pub mod treasury;
pub mod types;

use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

pub use error::Error;
pub use shared::ShareBasis;
pub use types::{Config, EntropySource, RoundInfo, RoundStatus, WinnerRecord};

use events::Initialized;

// ---------------------------------------------------------------------------
// Contract
// ---------------------------------------------------------------------------

#[contract]
pub struct ChainLuckVault;

#[contractimpl]
impl ChainLuckVault {
    // -----------------------------------------------------------------------
    // init
    // -----------------------------------------------------------------------

    /// Initialize the vault and open round 1. May only be called once.
    ///
    /// `token` is the SEP-41 contract holding the prize pool. Draws use the
    /// configured-slots divisor and ledger-hash entropy until changed.
    pub fn init(
        env: Env,
        admin: Address,
        token: Address,
        winners_per_draw: u32,
        min_participants: u32,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        let config = Config {
            winners_per_draw: config::validate_count(winners_per_draw)?,
            min_participants: config::validate_count(min_participants)?,
            share_basis: ShareBasis::ConfiguredSlots,
            entropy: EntropySource::LedgerHash,
        };

        storage::set_admin(&env, &admin);
        storage::set_token(&env, &token);
        storage::set_config(&env, &config);
        storage::set_pool(&env, 0);
        ledger::open_first_round(&env);

        Initialized {
            admin,
            token,
            winners_per_draw,
            min_participants,
        }
        .publish(&env);

        Ok(())
    }

    // -----------------------------------------------------------------------
    // Entry and funding
    // -----------------------------------------------------------------------

    /// Enter `user` into the active round. Open to any caller; `user` does
    /// not need to sign, so integrators can enter users on their behalf.
    ///
    /// When this entry brings the round to `min_participants`, the draw,
    /// payouts and round advance all happen before this call returns.
    pub fn enter(env: Env, user: Address) -> Result<(), Error> {
        storage::require_initialized(&env)?;
        ledger::enter(&env, user)
    }

    /// Add `amount` tokens from `from` to the prize pool and return the new
    /// pool total.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<i128, Error> {
        storage::require_initialized(&env)?;
        treasury::deposit(&env, &from, amount)
    }

    // -----------------------------------------------------------------------
    // Admin operations
    // -----------------------------------------------------------------------

    /// Draw winners for the active round now. Admin only.
    pub fn manual_draw(env: Env, admin: Address) -> Result<WinnerRecord, Error> {
        storage::require_initialized(&env)?;
        access::require_admin(&env, &admin)?;
        draw::manual_draw(&env)
    }

    /// Close the active round without a draw and return the new round id.
    /// Admin only.
    pub fn reset_round(env: Env, admin: Address) -> Result<u64, Error> {
        storage::require_initialized(&env)?;
        access::require_admin(&env, &admin)?;
        ledger::reset_round(&env)
    }

    pub fn set_winners_per_draw(
        env: Env,
        admin: Address,
        winners_per_draw: u32,
    ) -> Result<(), Error> {
        storage::require_initialized(&env)?;
        access::require_admin(&env, &admin)?;
        config::set_winners_per_draw(&env, winners_per_draw)
    }

    pub fn set_min_participants(
        env: Env,
        admin: Address,
        min_participants: u32,
    ) -> Result<(), Error> {
        storage::require_initialized(&env)?;
        access::require_admin(&env, &admin)?;
        config::set_min_participants(&env, min_participants)
    }

    /// Choose how the pool is divided when fewer entrants than
    /// `winners_per_draw` are drawn. Admin only.
    pub fn set_share_basis(env: Env, admin: Address, basis: ShareBasis) -> Result<(), Error> {
        storage::require_initialized(&env)?;
        access::require_admin(&env, &admin)?;
        config::set_share_basis(&env, basis)
    }

    /// Swap the draw's randomness provider. Admin only.
    pub fn set_entropy_source(
        env: Env,
        admin: Address,
        source: EntropySource,
    ) -> Result<(), Error> {
        storage::require_initialized(&env)?;
        access::require_admin(&env, &admin)?;
        config::set_entropy_source(&env, source)
    }

    /// Move the vault's entire token balance to the admin. Recovery only.
    pub fn emergency_withdraw(env: Env, admin: Address) -> Result<i128, Error> {
        storage::require_initialized(&env)?;
        access::require_admin(&env, &admin)?;
        treasury::emergency_withdraw(&env, &admin)
    }

    // -----------------------------------------------------------------------
    // Views
    // -----------------------------------------------------------------------

    pub fn get_current_round_info(env: Env) -> Result<RoundInfo, Error> {
        storage::require_initialized(&env)?;
        ledger::current_round_info(&env)
    }

    /// Entrants of `round_id` in admission order. Empty for unknown rounds.
    pub fn get_round_participants(env: Env, round_id: u64) -> Result<Vec<Address>, Error> {
        storage::require_initialized(&env)?;
        Ok(storage::get_entrants(&env, round_id))
    }

    /// Winners of `round_id`. Empty until that round is drawn.
    pub fn get_round_winners(env: Env, round_id: u64) -> Result<Vec<Address>, Error> {
        storage::require_initialized(&env)?;
        Ok(ledger::round_winners(&env, round_id))
    }

    pub fn get_winner_record(env: Env, round_id: u64) -> Result<Option<WinnerRecord>, Error> {
        storage::require_initialized(&env)?;
        Ok(storage::get_winner_record(&env, round_id))
    }

    pub fn get_round_status(env: Env, round_id: u64) -> Result<RoundStatus, Error> {
        storage::require_initialized(&env)?;
        ledger::round_status(&env, round_id)
    }

    pub fn has_user_entered_current(env: Env, user: Address) -> Result<bool, Error> {
        storage::require_initialized(&env)?;
        let round_id = storage::current_round(&env)?;
        Ok(storage::has_entered(&env, round_id, &user))
    }

    pub fn has_user_entered(env: Env, user: Address, round_id: u64) -> Result<bool, Error> {
        storage::require_initialized(&env)?;
        Ok(storage::has_entered(&env, round_id, &user))
    }

    pub fn winners_per_draw(env: Env) -> Result<u32, Error> {
        Ok(storage::get_config(&env)?.winners_per_draw)
    }

    pub fn min_participants(env: Env) -> Result<u32, Error> {
        Ok(storage::get_config(&env)?.min_participants)
    }

    pub fn get_config(env: Env) -> Result<Config, Error> {
        storage::get_config(&env)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        storage::get_admin(&env)
    }

    pub fn current_round_id(env: Env) -> Result<u64, Error> {
        storage::current_round(&env)
    }

    /// Tracked pool balance available to the next draw.
    pub fn vault_balance(env: Env) -> Result<i128, Error> {
        storage::require_initialized(&env)?;
        Ok(storage::get_pool(&env))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
