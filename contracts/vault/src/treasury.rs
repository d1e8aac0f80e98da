//! Prize pool custody.
//!
//! ## Invariant
//! `pool == token.balance(vault)` as long as every inflow goes through
//! `deposit`. Tokens sent straight to the vault address are not part of the
//! pool until `emergency_withdraw` sweeps them.
use soroban_sdk::{token::TokenClient, Address, Env, Vec};

use crate::error::Error;
use crate::events::{Deposited, EmergencyWithdrawn};
use crate::storage;

/// Pull `amount` tokens from `from` into the pool. Returns the new pool size.
pub fn deposit(env: &Env, from: &Address, amount: i128) -> Result<i128, Error> {
    if amount == 0 {
        return Err(Error::ZeroDeposit);
    }
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }

    from.require_auth();

    let token = storage::get_token(env)?;
    let vault = env.current_contract_address();
    TokenClient::new(env, &token).transfer(from, &vault, &amount);

    let pool = storage::get_pool(env)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    storage::set_pool(env, pool);

    Deposited {
        depositor: from.clone(),
        amount,
        round_id: storage::current_round(env)?,
    }
    .publish(env);

    Ok(pool)
}

/// Pay `amount` to each recipient. Only the draw calls this.
///
/// The pool is debited before any outbound transfer. A zero share debits
/// nothing and moves no tokens.
pub(crate) fn payout(env: &Env, recipients: &Vec<Address>, amount: i128) -> Result<(), Error> {
    let total = shared::payout_total(amount, recipients.len())?;
    let pool = storage::get_pool(env);
    if total > pool {
        return Err(Error::InsufficientFunds);
    }
    if total == 0 {
        return Ok(());
    }

    storage::set_pool(env, pool.checked_sub(total).ok_or(Error::Overflow)?);

    let token = storage::get_token(env)?;
    let client = TokenClient::new(env, &token);
    let vault = env.current_contract_address();
    for recipient in recipients.iter() {
        client.transfer(&vault, &recipient, &amount);
    }

    Ok(())
}

/// Send the vault's whole token balance to `admin` and zero the pool.
///
/// Round state is untouched; entrants of the active round stay admitted.
pub fn emergency_withdraw(env: &Env, admin: &Address) -> Result<i128, Error> {
    let token = storage::get_token(env)?;
    let client = TokenClient::new(env, &token);
    let vault = env.current_contract_address();
    let balance = client.balance(&vault);

    storage::set_pool(env, 0);

    if balance > 0 {
        client.transfer(&vault, admin, &balance);
    }

    EmergencyWithdrawn {
        admin: admin.clone(),
        amount: balance,
    }
    .publish(env);

    Ok(balance)
}
