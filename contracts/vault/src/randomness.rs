//! Randomness providers for winner selection.
//!
//! The draw only sees the `RandomnessProvider` trait, so a verifiable source
//! can replace these without touching round or treasury logic.
//!
//! ## Known limitation
//! Both providers here are predictable to anyone who can influence ledger
//! close data or transaction ordering. They are not a fairness guarantee.
use soroban_sdk::{Bytes, BytesN, Env};

pub trait RandomnessProvider {
    /// Returns an index in `[0, bound)`. Callers never pass `bound == 0`.
    fn next_index(&mut self, env: &Env, bound: u32) -> u32;
}

/// SHA-256 hash chain seeded from ledger data.
///
/// Seed preimage (56 bytes):
///   network_id (32) || sequence (4 BE) || timestamp (8 BE)
///   || round_id (8 BE) || entrant_count (4 BE)
///
/// Each pick rehashes the state and reduces its first 8 bytes modulo the
/// shrinking candidate count.
pub struct LedgerEntropy {
    state: [u8; 32],
}

impl LedgerEntropy {
    pub fn new(env: &Env, round_id: u64, entrant_count: u32) -> Self {
        let ledger = env.ledger();

        let mut preimage = [0u8; 56];
        preimage[..32].copy_from_slice(&ledger.network_id().to_array());
        preimage[32..36].copy_from_slice(&ledger.sequence().to_be_bytes());
        preimage[36..44].copy_from_slice(&ledger.timestamp().to_be_bytes());
        preimage[44..52].copy_from_slice(&round_id.to_be_bytes());
        preimage[52..].copy_from_slice(&entrant_count.to_be_bytes());

        Self {
            state: sha256(env, &preimage),
        }
    }
}

impl RandomnessProvider for LedgerEntropy {
    fn next_index(&mut self, env: &Env, bound: u32) -> u32 {
        self.state = sha256(env, &self.state);
        let s = &self.state;
        let raw = u64::from_be_bytes([s[0], s[1], s[2], s[3], s[4], s[5], s[6], s[7]]);
        (raw % u64::from(bound.max(1))) as u32
    }
}

/// The Soroban host PRNG.
pub struct HostPrng;

impl RandomnessProvider for HostPrng {
    fn next_index(&mut self, env: &Env, bound: u32) -> u32 {
        let max = u64::from(bound.saturating_sub(1));
        env.prng().gen_range::<u64>(0..=max) as u32
    }
}

fn sha256(env: &Env, data: &[u8]) -> [u8; 32] {
    let digest: BytesN<32> = env.crypto().sha256(&Bytes::from_slice(env, data)).into();
    digest.to_array()
}
