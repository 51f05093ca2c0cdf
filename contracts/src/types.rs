//! Type definitions for the raffle coordinator.

use soroban_sdk::{contracttype, Address, BytesN};

/// Block confirmations the randomness service waits before answering.
pub const REQUEST_CONFIRMATIONS: u32 = 3;
/// Random values requested per round; only the first picks the winner.
pub const NUM_WORDS: u32 = 1;

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    State,
    Players,
    LastTimestamp,
    RecentWinner,
}

/// Round phase. `Calculating` means a randomness request is outstanding.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RaffleState {
    Open = 0,
    Calculating = 1,
}

/// Parameters fixed at initialization.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RaffleConfig {
    pub entrance_fee: i128,       // Minimum payment per entry, in native stroops
    pub interval: u64,            // Seconds a round stays open before upkeep is allowed
    pub vrf_coordinator: Address, // Randomness service
    pub key_hash: BytesN<32>,     // Gas lane
    pub subscription_id: u64,
    pub callback_gas_limit: u32,
    pub native_token: Address,    // Asset entries are paid in and prizes paid out in
    pub payment_token: Address,   // Subscription funding token, not used by the raffle itself
    pub authority: Address,
}

/// Eligibility snapshot returned by `get_upkeep_status`.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct UpkeepStatus {
    pub upkeep_needed: bool,
    pub balance: i128,
    pub num_players: u32,
    pub state: RaffleState,
}
