//! Notifications published by the raffle.

use soroban_sdk::{contractevent, Address};

#[contractevent]
pub struct RaffleEntered {
    #[topic]
    pub player: Address,
}

#[contractevent]
pub struct RequestedRaffleWinner {
    #[topic]
    pub request_id: u64,
}

#[contractevent]
pub struct WinnerPicked {
    #[topic]
    pub winner: Address,
    pub prize: i128,
}
