//! Per-network raffle parameters.
//!
//! Deployment registers the parameters of every network it targets. The
//! local network needs no registration when the `testutils` feature is on:
//! the first lookup deploys a mock randomness service with a fresh
//! subscription and two asset contracts, and later lookups return the
//! same values.

use soroban_sdk::{Env, Map, Symbol};

use crate::errors::ContractError;
use crate::types::RaffleConfig;

/// Identifier of the local fallback network
pub const LOCAL_NETWORK: &str = "local";
/// Entrance fee on the local network (1 XLM in stroops)
pub const LOCAL_ENTRANCE_FEE: i128 = 10_000_000;
/// Round interval on the local network, in seconds
pub const LOCAL_INTERVAL: u64 = 30;
pub const LOCAL_CALLBACK_GAS_LIMIT: u32 = 500_000;

pub struct NetworkResolver {
    networks: Map<Symbol, RaffleConfig>,
}

impl NetworkResolver {
    pub fn new(env: &Env) -> Self {
        Self {
            networks: Map::new(env),
        }
    }

    /// Records the parameters for `network`, replacing any earlier entry
    pub fn register(&mut self, network: Symbol, config: RaffleConfig) {
        self.networks.set(network, config);
    }

    /// Returns the parameters for `network`
    pub fn resolve(&mut self, network: &Symbol) -> Result<RaffleConfig, ContractError> {
        if let Some(config) = self.networks.get(network.clone()) {
            return Ok(config);
        }

        let config = self.fallback(network).ok_or(ContractError::UnknownNetwork)?;
        self.networks.set(network.clone(), config.clone());

        Ok(config)
    }

    #[cfg(any(test, feature = "testutils"))]
    fn fallback(&self, network: &Symbol) -> Option<RaffleConfig> {
        let env = self.networks.env();
        if *network == Symbol::new(env, LOCAL_NETWORK) {
            Some(provision_local(env))
        } else {
            None
        }
    }

    #[cfg(not(any(test, feature = "testutils")))]
    fn fallback(&self, _network: &Symbol) -> Option<RaffleConfig> {
        None
    }
}

#[cfg(any(test, feature = "testutils"))]
fn provision_local(env: &Env) -> RaffleConfig {
    use soroban_sdk::{testutils::Address as _, Address, BytesN};

    use crate::mock_randomness::{MockRandomnessService, MockRandomnessServiceClient};

    let authority = Address::generate(env);

    let vrf_coordinator = env.register(MockRandomnessService, ());
    let subscription_id =
        MockRandomnessServiceClient::new(env, &vrf_coordinator).create_subscription();

    let native_token = env.register_stellar_asset_contract_v2(authority.clone());
    let payment_token = env.register_stellar_asset_contract_v2(authority.clone());

    RaffleConfig {
        entrance_fee: LOCAL_ENTRANCE_FEE,
        interval: LOCAL_INTERVAL,
        vrf_coordinator,
        key_hash: BytesN::from_array(env, &[0x47; 32]),
        subscription_id,
        callback_gas_limit: LOCAL_CALLBACK_GAS_LIMIT,
        native_token: native_token.address(),
        payment_token: payment_token.address(),
        authority,
    }
}
