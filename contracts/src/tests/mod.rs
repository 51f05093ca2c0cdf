//! Test modules for the raffle coordinator.


use crate::contract::{Raffle, RaffleClient};
use crate::mock_randomness::MockRandomnessServiceClient;
use crate::network::{NetworkResolver, LOCAL_NETWORK};
use crate::types::RaffleConfig;
use soroban_sdk::{
    testutils::{Address as _, Events, Ledger},
    token::{StellarAssetClient, TokenClient},
    Address, Env, Symbol, Val,
};

/// Ledger time the tests start at
pub(crate) const START_TIME: u64 = 1_700_000_000;

/// Tokens minted to every generated player, in entrance fees
pub(crate) const PLAYER_FUNDS_IN_FEES: i128 = 100;

pub(crate) fn local_config(env: &Env) -> RaffleConfig {
    NetworkResolver::new(env)
        .resolve(&Symbol::new(env, LOCAL_NETWORK))
        .unwrap()
}

/// A deployed, initialized raffle wired to the local mock service
pub(crate) struct Setup {
    pub env: Env,
    pub config: RaffleConfig,
    pub raffle: RaffleClient<'static>,
    pub vrf: MockRandomnessServiceClient<'static>,
    pub token: TokenClient<'static>,
    pub token_admin: StellarAssetClient<'static>,
}

impl Setup {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_timestamp(START_TIME);

        let config = local_config(&env);
        Self::with_config(env, config)
    }

    /// Same as `new`, with the entrance fee replaced
    pub fn with_fee(entrance_fee: i128) -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_timestamp(START_TIME);

        let mut config = local_config(&env);
        config.entrance_fee = entrance_fee;
        Self::with_config(env, config)
    }

    pub fn with_config(env: Env, config: RaffleConfig) -> Self {
        let contract_id = env.register(Raffle, ());
        let raffle = RaffleClient::new(&env, &contract_id);
        raffle.initialize(&config);

        let vrf = MockRandomnessServiceClient::new(&env, &config.vrf_coordinator);
        vrf.add_consumer(&config.subscription_id, &contract_id);

        let token = TokenClient::new(&env, &config.native_token);
        let token_admin = StellarAssetClient::new(&env, &config.native_token);

        Self {
            env,
            config,
            raffle,
            vrf,
            token,
            token_admin,
        }
    }

    /// Generates a player holding `PLAYER_FUNDS_IN_FEES` entrance fees
    pub fn funded_player(&self) -> Address {
        let player = Address::generate(&self.env);
        self.token_admin
            .mint(&player, &(self.config.entrance_fee * PLAYER_FUNDS_IN_FEES));
        player
    }

    /// Funds and enters `count` players, paying exactly the fee each
    pub fn enter_players(&self, count: u32) -> soroban_sdk::Vec<Address> {
        let mut players = soroban_sdk::Vec::new(&self.env);
        for _ in 0..count {
            let player = self.funded_player();
            self.raffle.enter_raffle(&player, &self.config.entrance_fee);
            players.push_back(player);
        }
        players
    }

    pub fn advance_time(&self, seconds: u64) {
        let now = self.env.ledger().timestamp();
        self.env.ledger().set_timestamp(now + seconds);
    }

    /// Moves past the interval so a round with players becomes eligible
    pub fn pass_interval(&self) {
        self.advance_time(self.config.interval + 1);
    }

    pub fn raffle_balance(&self) -> i128 {
        self.token.balance(&self.raffle.address)
    }

    /// Events published by the raffle contract itself, as (topics, data)
    pub fn raffle_events(&self) -> soroban_sdk::Vec<(soroban_sdk::Vec<Val>, Val)> {
        let mut events = soroban_sdk::Vec::new(&self.env);
        for (contract, topics, data) in self.env.events().all().iter() {
            if contract == self.raffle.address {
                events.push_back((topics, data));
            }
        }
        events
    }
}
