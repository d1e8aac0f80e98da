use shared::ShareBasis;
use soroban_sdk::{contractevent, Address, Vec};

use crate::types::EntropySource;

#[contractevent]
pub struct Initialized {
    #[topic]
    pub admin: Address,
    pub token: Address,
    pub winners_per_draw: u32,
    pub min_participants: u32,
}

#[contractevent]
pub struct Entered {
    #[topic]
    pub user: Address,
    pub round_id: u64,
}

#[contractevent]
pub struct Deposited {
    #[topic]
    pub depositor: Address,
    pub amount: i128,
    pub round_id: u64,
}

#[contractevent]
pub struct WinnersDrawn {
    #[topic]
    pub round_id: u64,
    pub winners: Vec<Address>,
    pub prize_per_winner: i128,
}

#[contractevent]
pub struct PrizeDistributed {
    #[topic]
    pub winner: Address,
    pub amount: i128,
    pub round_id: u64,
}

#[contractevent]
pub struct RoundReset {
    pub old_round_id: u64,
    pub new_round_id: u64,
}

/// Always carries the full pair, whichever value changed.
#[contractevent]
pub struct ConfigUpdated {
    pub winners_per_draw: u32,
    pub min_participants: u32,
}

#[contractevent]
pub struct DrawPolicyUpdated {
    pub share_basis: ShareBasis,
    pub entropy: EntropySource,
}

#[contractevent]
pub struct EmergencyWithdrawn {
    #[topic]
    pub admin: Address,
    pub amount: i128,
}
