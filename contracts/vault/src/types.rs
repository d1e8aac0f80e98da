use shared::ShareBasis;
use soroban_sdk::{contracttype, Address, Vec};

/// Lifecycle of a single round. Exactly one round is `Active` at a time.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RoundStatus {
    Active = 0,
    /// Closed by a draw; a `WinnerRecord` exists for it.
    Drawn = 1,
    /// Closed by the admin without a draw.
    Reset = 2,
}

/// Randomness provider used by the draw.
///
/// Neither source is verifiable: whoever orders transactions can bias or
/// predict the outcome. Integrators must treat draws as entertainment-grade.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EntropySource {
    /// SHA-256 chain over ledger network id, sequence and timestamp.
    LedgerHash = 0,
    /// The host PRNG, seeded per invocation.
    HostPrng = 1,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub winners_per_draw: u32,
    pub min_participants: u32,
    pub share_basis: ShareBasis,
    pub entropy: EntropySource,
}

/// Composite view returned by `get_current_round_info`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundInfo {
    pub round_id: u64,
    pub participant_count: u32,
    /// Live pool balance, not a snapshot taken at round open.
    pub prize_pool: i128,
    pub is_active: bool,
}

/// Immutable outcome of a completed draw.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WinnerRecord {
    pub round_id: u64,
    pub winners: Vec<Address>,
    pub prize_per_winner: i128,
}
