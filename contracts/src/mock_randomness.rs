//! Local stand-in for the randomness service.
//!
//! Keeps the service side of the contract described in `randomness`:
//! requests are tied to a subscription and a registered consumer, ids are
//! sequential, and a request is removed when delivered so it can never be
//! delivered twice. Values are `sha256(request_id || i)`, which is good
//! enough to exercise the consumer and nothing more.

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error, Address, Bytes, BytesN,
    Env, Vec, U256,
};

use crate::randomness::{RandomnessConsumerClient, RandomnessService};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MockError {
    /// Subscription id was never created
    InvalidSubscription = 1,
    /// Consumer is not registered on the subscription
    InvalidConsumer = 2,
    /// Request id is unknown or was already delivered
    NonexistentRequest = 3,
    /// Request asked for no values
    InvalidNumWords = 4,
}

#[contracttype]
#[derive(Clone)]
pub enum MockKey {
    NextSubscription,
    NextRequest,
    Consumers(u64),
    Request(u64),
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct PendingRequest {
    pub consumer: Address,
    pub subscription_id: u64,
    pub num_words: u32,
}

#[contract]
pub struct MockRandomnessService;

#[contractimpl]
impl MockRandomnessService {
    /// Creates an empty subscription and returns its id (ids start at 1)
    pub fn create_subscription(env: Env) -> u64 {
        let id: u64 = env
            .storage()
            .persistent()
            .get(&MockKey::NextSubscription)
            .unwrap_or(1);

        env.storage()
            .persistent()
            .set(&MockKey::Consumers(id), &Vec::<Address>::new(&env));
        env.storage()
            .persistent()
            .set(&MockKey::NextSubscription, &(id + 1));

        id
    }

    pub fn add_consumer(
        env: Env,
        subscription_id: u64,
        consumer: Address,
    ) -> Result<(), MockError> {
        let mut consumers = Self::_consumers(&env, subscription_id)?;

        if !consumers.contains(&consumer) {
            consumers.push_back(consumer);
            env.storage()
                .persistent()
                .set(&MockKey::Consumers(subscription_id), &consumers);
        }

        Ok(())
    }

    pub fn is_consumer(env: Env, subscription_id: u64, consumer: Address) -> bool {
        Self::_consumers(&env, subscription_id)
            .map(|consumers| consumers.contains(&consumer))
            .unwrap_or(false)
    }

    /// Returns the outstanding request with this id, if any
    pub fn get_request(env: Env, request_id: u64) -> Option<PendingRequest> {
        env.storage().persistent().get(&MockKey::Request(request_id))
    }

    /// Delivers derived values for `request_id` to its consumer
    pub fn fulfill_request(env: Env, request_id: u64) -> Result<(), MockError> {
        let request = Self::_take_request(&env, request_id)?;

        let mut words = Vec::new(&env);
        for i in 0..request.num_words {
            let mut seed = Bytes::new(&env);
            seed.extend_from_array(&request_id.to_be_bytes());
            seed.extend_from_array(&i.to_be_bytes());
            let digest: BytesN<32> = env.crypto().sha256(&seed).into();
            words.push_back(U256::from_be_bytes(&env, &digest.into()));
        }

        RandomnessConsumerClient::new(&env, &request.consumer)
            .fulfill_random_words(&request_id, &words);

        Ok(())
    }

    /// Delivers caller-chosen values for `request_id` to its consumer
    pub fn fulfill_request_with_words(
        env: Env,
        request_id: u64,
        words: Vec<U256>,
    ) -> Result<(), MockError> {
        let request = Self::_take_request(&env, request_id)?;

        RandomnessConsumerClient::new(&env, &request.consumer)
            .fulfill_random_words(&request_id, &words);

        Ok(())
    }

    fn _consumers(env: &Env, subscription_id: u64) -> Result<Vec<Address>, MockError> {
        env.storage()
            .persistent()
            .get(&MockKey::Consumers(subscription_id))
            .ok_or(MockError::InvalidSubscription)
    }

    fn _take_request(env: &Env, request_id: u64) -> Result<PendingRequest, MockError> {
        let key = MockKey::Request(request_id);
        let request: PendingRequest = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(MockError::NonexistentRequest)?;

        env.storage().persistent().remove(&key);

        Ok(request)
    }
}

#[contractimpl]
impl RandomnessService for MockRandomnessService {
    fn request_random_words(
        env: Env,
        consumer: Address,
        _key_hash: BytesN<32>,
        subscription_id: u64,
        _request_confirmations: u32,
        _callback_gas_limit: u32,
        num_words: u32,
    ) -> u64 {
        consumer.require_auth();

        let consumers = match Self::_consumers(&env, subscription_id) {
            Ok(consumers) => consumers,
            Err(err) => panic_with_error!(&env, err),
        };
        if !consumers.contains(&consumer) {
            panic_with_error!(&env, MockError::InvalidConsumer);
        }
        if num_words == 0 {
            panic_with_error!(&env, MockError::InvalidNumWords);
        }

        let request_id: u64 = env
            .storage()
            .persistent()
            .get(&MockKey::NextRequest)
            .unwrap_or(1);

        env.storage().persistent().set(
            &MockKey::Request(request_id),
            &PendingRequest {
                consumer,
                subscription_id,
                num_words,
            },
        );
        env.storage()
            .persistent()
            .set(&MockKey::NextRequest, &(request_id + 1));

        request_id
    }
}
