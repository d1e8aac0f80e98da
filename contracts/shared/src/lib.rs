//! Shared prize arithmetic and policy types for ChainLuck contracts.
#![no_std]
#![allow(unexpected_cfgs)]

use soroban_sdk::contracttype;

/// Persistent storage TTL in ledgers (~30 days at 5 s/ledger).
pub const PERSISTENT_BUMP_LEDGERS: u32 = 518_400;

/// Which divisor splits the pool when a draw pays out.
///
/// The two only differ when a draw runs with fewer entrants than the
/// configured winners-per-draw.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ShareBasis {
    /// Divide by the configured winners-per-draw. Unfilled slots leave their
    /// share in the pool for the next round.
    ConfiguredSlots = 0,
    /// Divide by the number of winners actually drawn.
    ActualWinners = 1,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MathError {
    DivideByZero,
    Negative,
    Overflow,
}

/// Number of shares the pool is split into under `basis`.
pub fn share_divisor(basis: ShareBasis, configured: u32, drawn: u32) -> u32 {
    match basis {
        ShareBasis::ConfiguredSlots => configured,
        ShareBasis::ActualWinners => drawn,
    }
}

/// `floor(pool / divisor)`; the remainder stays with the caller.
pub fn prize_per_winner(
    pool: i128,
    basis: ShareBasis,
    configured: u32,
    drawn: u32,
) -> Result<i128, MathError> {
    if pool < 0 {
        return Err(MathError::Negative);
    }
    let divisor = share_divisor(basis, configured, drawn);
    if divisor == 0 {
        return Err(MathError::DivideByZero);
    }
    pool.checked_div(divisor as i128).ok_or(MathError::Overflow)
}

/// Total debited when `count` recipients each receive `per_recipient`.
pub fn payout_total(per_recipient: i128, count: u32) -> Result<i128, MathError> {
    if per_recipient < 0 {
        return Err(MathError::Negative);
    }
    per_recipient
        .checked_mul(count as i128)
        .ok_or(MathError::Overflow)
}
