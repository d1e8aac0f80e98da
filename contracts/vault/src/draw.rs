//! Winner selection and payout.
//!
//! A draw runs start to finish inside the invocation that triggered it
//! (`enter` or `manual_draw`). Any error rolls the whole invocation back,
//! including the entry that crossed the threshold.
use shared::prize_per_winner;
use soroban_sdk::{log, Address, Env, Vec};

use crate::error::Error;
use crate::events::{PrizeDistributed, WinnersDrawn};
use crate::ledger;
use crate::randomness::{HostPrng, LedgerEntropy, RandomnessProvider};
use crate::storage;
use crate::treasury;
use crate::types::{EntropySource, RoundStatus, WinnerRecord};

/// Admin-triggered draw. Requires at least `winners_per_draw` entrants.
pub fn manual_draw(env: &Env) -> Result<WinnerRecord, Error> {
    let config = storage::get_config(env)?;
    let round_id = storage::current_round(env)?;
    if storage::get_entrants(env, round_id).len() < config.winners_per_draw {
        return Err(Error::InsufficientParticipants);
    }
    draw_and_advance(env)
}

pub(crate) fn draw_and_advance(env: &Env) -> Result<WinnerRecord, Error> {
    let config = storage::get_config(env)?;
    let round_id = storage::current_round(env)?;
    let entrants = storage::get_entrants(env, round_id);
    let winner_count = config.winners_per_draw.min(entrants.len());

    let winners = match config.entropy {
        EntropySource::LedgerHash => {
            let mut rng = LedgerEntropy::new(env, round_id, entrants.len());
            select_winners(env, &entrants, winner_count, &mut rng)
        }
        EntropySource::HostPrng => select_winners(env, &entrants, winner_count, &mut HostPrng),
    };

    let prize = prize_per_winner(
        storage::get_pool(env),
        config.share_basis,
        config.winners_per_draw,
        winners.len(),
    )?;

    treasury::payout(env, &winners, prize)?;

    let record = WinnerRecord {
        round_id,
        winners: winners.clone(),
        prize_per_winner: prize,
    };
    storage::set_winner_record(env, &record);
    let next_round_id = ledger::advance(env, round_id, RoundStatus::Drawn)?;

    log!(env, "draw closed round", round_id, winners.len(), prize, next_round_id);

    WinnersDrawn {
        round_id,
        winners: winners.clone(),
        prize_per_winner: prize,
    }
    .publish(env);
    for winner in winners.iter() {
        PrizeDistributed {
            winner,
            amount: prize,
            round_id,
        }
        .publish(env);
    }

    Ok(record)
}

/// Pick `count` distinct entrants without replacement.
///
/// Each pick takes an index in `[0, remaining)` from `rng`, moves that
/// candidate to the result and fills its slot with the last candidate.
/// Never returns more addresses than `entrants` holds.
pub fn select_winners<R: RandomnessProvider>(
    env: &Env,
    entrants: &Vec<Address>,
    count: u32,
    rng: &mut R,
) -> Vec<Address> {
    let mut candidates = entrants.clone();
    let mut winners = Vec::new(env);

    for _ in 0..count.min(entrants.len()) {
        let remaining = candidates.len();
        let index = rng.next_index(env, remaining) % remaining;
        let last = remaining - 1;

        winners.push_back(candidates.get_unchecked(index));
        if index != last {
            candidates.set(index, candidates.get_unchecked(last));
        }
        candidates.pop_back();
    }

    winners
}
