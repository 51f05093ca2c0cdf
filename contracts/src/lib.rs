#![no_std]
//! # Raffle Coordinator
//!
//! Soroban raffle that pays its whole pool to one randomly drawn entry.
//! Players pay a fixed entrance fee to join the open round. Once the round
//! interval has passed, any keeper may start a randomness request, which
//! closes entries until the randomness service calls back with a value.
//!
//! ## Key Features
//! - Open/Calculating state flag guards the two-transaction draw
//! - Eligibility re-checked on every upkeep call
//! - Bookkeeping before payout; a failed payout rolls the whole draw back
//! - Randomness service behind an explicit client interface

mod contract;
mod errors;
mod events;
mod network;
mod randomness;
mod types;

#[cfg(any(test, feature = "testutils"))]
pub mod mock_randomness;

#[cfg(test)]
mod tests;

pub use contract::{Raffle, RaffleClient};
pub use errors::ContractError;
pub use events::{RaffleEntered, RequestedRaffleWinner, WinnerPicked};
pub use network::{NetworkResolver, LOCAL_NETWORK};
pub use randomness::{
    RandomnessConsumer, RandomnessConsumerClient, RandomnessService, RandomnessServiceClient,
};
pub use types::{
    DataKey, RaffleConfig, RaffleState, UpkeepStatus, NUM_WORDS, REQUEST_CONFIRMATIONS,
};
