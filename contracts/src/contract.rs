//! Core contract implementation for the raffle coordinator.

use soroban_sdk::{contract, contractimpl, log, token, Address, Bytes, Env, Vec, U256};

use crate::errors::ContractError;
use crate::events::{RaffleEntered, RequestedRaffleWinner, WinnerPicked};
use crate::randomness::RandomnessServiceClient;
use crate::types::{
    DataKey, RaffleConfig, RaffleState, UpkeepStatus, NUM_WORDS, REQUEST_CONFIRMATIONS,
};

#[contract]
pub struct Raffle;

#[contractimpl]
impl Raffle {
    /// Stores the configuration and opens the first round (one-time only)
    pub fn initialize(env: Env, config: RaffleConfig) -> Result<(), ContractError> {
        config.authority.require_auth();

        if env.storage().persistent().has(&DataKey::Config) {
            return Err(ContractError::AlreadyInitialized);
        }

        if config.entrance_fee <= 0 {
            return Err(ContractError::InvalidEntranceFee);
        }

        env.storage().persistent().set(&DataKey::Config, &config);
        env.storage().persistent().set(&DataKey::State, &RaffleState::Open);
        env.storage().persistent().set(&DataKey::Players, &Vec::<Address>::new(&env));
        env.storage()
            .persistent()
            .set(&DataKey::LastTimestamp, &env.ledger().timestamp());

        Ok(())
    }

    /// Buys one entry into the current round.
    /// Anything paid above the entrance fee stays in the pool.
    pub fn enter_raffle(env: Env, player: Address, amount: i128) -> Result<(), ContractError> {
        player.require_auth();

        let config = Self::_config(&env)?;

        if amount < config.entrance_fee {
            return Err(ContractError::NotEnoughFee);
        }

        if Self::_state(&env) != RaffleState::Open {
            return Err(ContractError::RaffleNotOpen);
        }

        token::TokenClient::new(&env, &config.native_token).transfer(
            &player,
            &env.current_contract_address(),
            &amount,
        );

        let mut players = Self::_players(&env);
        players.push_back(player.clone());
        env.storage().persistent().set(&DataKey::Players, &players);

        RaffleEntered { player }.publish(&env);

        Ok(())
    }

    /// Returns whether `perform_upkeep` would start a request right now.
    /// The returned bytes are reserved and always empty.
    pub fn check_upkeep(env: Env, _check_data: Bytes) -> Result<(bool, Bytes), ContractError> {
        let status = Self::_upkeep_status(&env)?;
        Ok((status.upkeep_needed, Bytes::new(&env)))
    }

    /// Same evaluation as `check_upkeep`, with the values it was based on
    pub fn get_upkeep_status(env: Env) -> Result<UpkeepStatus, ContractError> {
        Self::_upkeep_status(&env)
    }

    /// Locks the round and asks the randomness service for a winner.
    /// Eligibility is re-evaluated here; earlier `check_upkeep` results are not trusted.
    pub fn perform_upkeep(env: Env, _perform_data: Bytes) -> Result<u64, ContractError> {
        let status = Self::_upkeep_status(&env)?;

        if !status.upkeep_needed {
            log!(
                &env,
                "upkeep not needed",
                status.balance,
                status.num_players,
                status.state as u32
            );
            return Err(ContractError::UpkeepNotNeeded);
        }

        let config = Self::_config(&env)?;

        env.storage()
            .persistent()
            .set(&DataKey::State, &RaffleState::Calculating);

        let request_id = RandomnessServiceClient::new(&env, &config.vrf_coordinator)
            .request_random_words(
                &env.current_contract_address(),
                &config.key_hash,
                &config.subscription_id,
                &REQUEST_CONFIRMATIONS,
                &config.callback_gas_limit,
                &NUM_WORDS,
            );

        log!(&env, "randomness requested", request_id);
        RequestedRaffleWinner { request_id }.publish(&env);

        Ok(request_id)
    }

    /// Randomness callback (randomness service only).
    /// Picks `random_words[0] % players`, resets the round, then pays the whole pool.
    /// If the payout fails nothing is kept and the round stays `Calculating`.
    pub fn fulfill_random_words(
        env: Env,
        request_id: u64,
        random_words: Vec<U256>,
    ) -> Result<(), ContractError> {
        let config = Self::_config(&env)?;

        config.vrf_coordinator.require_auth();

        // Request ids are not tracked; a delivery with nothing outstanding is refused.
        if Self::_state(&env) != RaffleState::Calculating {
            return Err(ContractError::RaffleNotCalculating);
        }

        let random_word = random_words
            .get(0)
            .ok_or(ContractError::MissingRandomWords)?;

        let players = Self::_players(&env);
        if players.is_empty() {
            return Err(ContractError::IndexOutOfRange);
        }

        let index = random_word
            .rem_euclid(&U256::from_u32(&env, players.len()))
            .to_u128()
            .ok_or(ContractError::Overflow)?;
        let index = u32::try_from(index).map_err(|_| ContractError::Overflow)?;
        let winner = players.get(index).ok_or(ContractError::IndexOutOfRange)?;

        let native_token = token::TokenClient::new(&env, &config.native_token);
        let contract_address = env.current_contract_address();
        let prize = native_token.balance(&contract_address);

        env.storage().persistent().set(&DataKey::Players, &Vec::<Address>::new(&env));
        env.storage()
            .persistent()
            .set(&DataKey::LastTimestamp, &env.ledger().timestamp());
        env.storage().persistent().set(&DataKey::State, &RaffleState::Open);
        env.storage().persistent().set(&DataKey::RecentWinner, &winner);

        let paid = native_token.try_transfer(&contract_address, &winner, &prize);
        if !matches!(paid, Ok(Ok(()))) {
            log!(&env, "prize transfer failed", request_id, winner, prize);
            return Err(ContractError::TransferFailed);
        }

        WinnerPicked { winner, prize }.publish(&env);

        Ok(())
    }

    pub fn get_raffle_state(env: Env) -> RaffleState {
        Self::_state(&env)
    }

    pub fn get_entrance_fee(env: Env) -> Result<i128, ContractError> {
        Ok(Self::_config(&env)?.entrance_fee)
    }

    pub fn get_interval(env: Env) -> Result<u64, ContractError> {
        Ok(Self::_config(&env)?.interval)
    }

    /// Returns the player holding entry slot `index` in the current round
    pub fn get_player(env: Env, index: u32) -> Result<Address, ContractError> {
        Self::_players(&env)
            .get(index)
            .ok_or(ContractError::IndexOutOfRange)
    }

    pub fn get_number_of_players(env: Env) -> u32 {
        Self::_players(&env).len()
    }

    /// Start of the current round's clock (initialization or last payout)
    pub fn get_last_timestamp(env: Env) -> u64 {
        Self::_last_timestamp(&env)
    }

    /// Returns the winner of the last completed round, if any
    pub fn get_recent_winner(env: Env) -> Option<Address> {
        env.storage().persistent().get(&DataKey::RecentWinner)
    }

    pub fn get_vrf_coordinator(env: Env) -> Result<Address, ContractError> {
        Ok(Self::_config(&env)?.vrf_coordinator)
    }

    pub fn get_num_words(_env: Env) -> u32 {
        NUM_WORDS
    }

    pub fn get_request_confirmations(_env: Env) -> u32 {
        REQUEST_CONFIRMATIONS
    }

    pub fn get_config(env: Env) -> Result<RaffleConfig, ContractError> {
        Self::_config(&env)
    }

    fn _config(env: &Env) -> Result<RaffleConfig, ContractError> {
        env.storage()
            .persistent()
            .get(&DataKey::Config)
            .ok_or(ContractError::NotInitialized)
    }

    fn _state(env: &Env) -> RaffleState {
        env.storage()
            .persistent()
            .get(&DataKey::State)
            .unwrap_or(RaffleState::Open)
    }

    fn _last_timestamp(env: &Env) -> u64 {
        env.storage()
            .persistent()
            .get(&DataKey::LastTimestamp)
            .unwrap_or(0)
    }

    fn _players(env: &Env) -> Vec<Address> {
        env.storage()
            .persistent()
            .get(&DataKey::Players)
            .unwrap_or(Vec::new(env))
    }

    /// All four conditions must hold: open, interval elapsed, players, funds
    fn _upkeep_status(env: &Env) -> Result<UpkeepStatus, ContractError> {
        let config = Self::_config(env)?;
        let state = Self::_state(env);

        let elapsed = env
            .ledger()
            .timestamp()
            .saturating_sub(Self::_last_timestamp(env));
        let time_passed = elapsed >= config.interval;

        let num_players = Self::_players(env).len();
        let balance = token::TokenClient::new(env, &config.native_token)
            .balance(&env.current_contract_address());

        let upkeep_needed = state == RaffleState::Open
            && time_passed
            && num_players > 0
            && balance > 0;

        Ok(UpkeepStatus {
            upkeep_needed,
            balance,
            num_players,
            state,
        })
    }
}
