use shared::MathError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized       = 1,
    NotInitialized           = 2,
    /// Privileged call from an address other than the stored admin.
    Unauthorized             = 3,
    /// Entrant is the vault itself or the prize token contract.
    InvalidAddress           = 4,
    AlreadyEntered           = 5,
    ZeroDeposit              = 6,
    InvalidAmount            = 7,
    /// Manual draw with fewer entrants than `winners_per_draw`.
    InsufficientParticipants = 8,
    /// `winners_per_draw` or `min_participants` set to zero.
    InvalidConfig            = 9,
    /// A payout would exceed the tracked pool.
    InsufficientFunds        = 10,
    RoundNotFound            = 11,
    Overflow                 = 12,
}

impl From<MathError> for Error {
    fn from(err: MathError) -> Self {
        match err {
            MathError::Negative => Error::InvalidAmount,
            MathError::DivideByZero => Error::InvalidConfig,
            MathError::Overflow => Error::Overflow,
        }
    }
}
