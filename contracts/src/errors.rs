//! Contract error types for the raffle coordinator.

use soroban_sdk::contracterror;

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Config not set - call initialize first
    NotInitialized = 2,
    /// Payment is below the entrance fee
    NotEnoughFee = 3,
    /// Entries are closed while a winner is being calculated
    RaffleNotOpen = 4,
    /// Time, balance, players or state do not allow a new request.
    /// See `get_upkeep_status` for the values that were checked.
    UpkeepNotNeeded = 5,
    /// Prize transfer to the winner was rejected
    TransferFailed = 6,
    /// Player index is past the end of the player list
    IndexOutOfRange = 7,
    /// No configuration is known for the requested network
    UnknownNetwork = 8,
    /// Randomness delivered while no request is outstanding
    RaffleNotCalculating = 9,
    /// Randomness delivered without any values
    MissingRandomWords = 10,
    /// Entrance fee must be greater than zero
    InvalidEntranceFee = 11,
    /// Arithmetic overflow occurred
    Overflow = 12,
}
