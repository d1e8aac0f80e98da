//! Tunable draw parameters. Callers must already have passed the admin guard.
use shared::ShareBasis;
use soroban_sdk::Env;

use crate::error::Error;
use crate::events::{ConfigUpdated, DrawPolicyUpdated};
use crate::storage;
use crate::types::{Config, EntropySource};

/// Both counts must stay strictly positive.
pub fn validate_count(value: u32) -> Result<u32, Error> {
    if value == 0 {
        return Err(Error::InvalidConfig);
    }
    Ok(value)
}

pub fn set_winners_per_draw(env: &Env, winners_per_draw: u32) -> Result<(), Error> {
    let mut config = storage::get_config(env)?;
    config.winners_per_draw = validate_count(winners_per_draw)?;
    storage::set_config(env, &config);
    publish_counts(env, &config);
    Ok(())
}

/// Lowering the threshold does not draw by itself; the next `enter` does.
pub fn set_min_participants(env: &Env, min_participants: u32) -> Result<(), Error> {
    let mut config = storage::get_config(env)?;
    config.min_participants = validate_count(min_participants)?;
    storage::set_config(env, &config);
    publish_counts(env, &config);
    Ok(())
}

pub fn set_share_basis(env: &Env, share_basis: ShareBasis) -> Result<(), Error> {
    let mut config = storage::get_config(env)?;
    config.share_basis = share_basis;
    storage::set_config(env, &config);
    publish_policy(env, &config);
    Ok(())
}

pub fn set_entropy_source(env: &Env, entropy: EntropySource) -> Result<(), Error> {
    let mut config = storage::get_config(env)?;
    config.entropy = entropy;
    storage::set_config(env, &config);
    publish_policy(env, &config);
    Ok(())
}

fn publish_counts(env: &Env, config: &Config) {
    ConfigUpdated {
        winners_per_draw: config.winners_per_draw,
        min_participants: config.min_participants,
    }
    .publish(env);
}

fn publish_policy(env: &Env, config: &Config) {
    DrawPolicyUpdated {
        share_basis: config.share_basis,
        entropy: config.entropy,
    }
    .publish(env);
}
