//! Interfaces across the randomness trust boundary.
//!
//! Winner selection is split over two invocations. The raffle asks a
//! randomness service for values and receives a request id; later, in a
//! separate transaction, the service calls back into the raffle with that
//! id and the values.
//!
//! ## Service guarantees
//! The raffle does not track request ids. It relies on the service for:
//! - each request id being delivered at most once,
//! - delivery only to the consumer that made the request,
//! - delivery performed by the service itself, so the consumer can
//!   authenticate the caller by the service address it was configured with.

use soroban_sdk::{contractclient, Address, BytesN, Env, Vec, U256};

use crate::errors::ContractError;

/// Outbound half: what the raffle calls to start a request.
#[contractclient(name = "RandomnessServiceClient")]
pub trait RandomnessService {
    /// Queues a request for `num_words` values and returns its id.
    /// `consumer` must authorize and is the only contract the values
    /// will be delivered to.
    fn request_random_words(
        env: Env,
        consumer: Address,
        key_hash: BytesN<32>,
        subscription_id: u64,
        request_confirmations: u32,
        callback_gas_limit: u32,
        num_words: u32,
    ) -> u64;
}

/// Inbound half: the callback a consumer exposes to the service.
#[contractclient(name = "RandomnessConsumerClient")]
pub trait RandomnessConsumer {
    fn fulfill_random_words(
        env: Env,
        request_id: u64,
        random_words: Vec<U256>,
    ) -> Result<(), ContractError>;
}
