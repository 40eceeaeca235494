// src/frontend/config.rs
use crate::error::ConfigError;
use candid::Principal;

// --- Configuration ---
const NETWORK_VAR: &str = "DFX_NETWORK";
const CANISTER_ID_VARS: [&str; 2] = [
    "CANISTER_ID_EQUALIZING_ROUND_ROBIN",
    "EQUALIZING_ROUND_ROBIN_CANISTER_ID",
];
const SHUFFLE_VAR: &str = "ROUND_ROBIN_SHUFFLE";

const LOCAL_HOST: &str = "http://localhost:8000";
const MAINNET_HOST: &str = "https://ic0.app";

/// Deployment target. Anything that is not explicitly mainnet is local.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Network {
    #[default]
    Local,
    Production,
}

impl Network {
    fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("ic") | Some("production") => Network::Production,
            _ => Network::Local,
        }
    }

    pub fn host(self) -> &'static str {
        match self {
            Network::Local => LOCAL_HOST,
            Network::Production => MAINNET_HOST,
        }
    }

    /// Only a local replica needs its root key fetched; mainnet's is well known.
    pub fn fetch_root_key(self) -> bool {
        self == Network::Local
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub network: Network,
    pub canister_id: Principal,
    /// Passed to `getRandomizedParticipants` on every refresh.
    pub shuffle_participants: bool,
}

impl ClientConfig {
    pub fn new(network: Network, canister_id: Principal) -> Self {
        Self {
            network,
            canister_id,
            shuffle_participants: false,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingCanisterId` when no canister id variable is
    /// set, or `ConfigError::InvalidCanisterId` when it is not a principal.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let network = Network::parse(lookup(NETWORK_VAR).as_deref());

        let raw_id = CANISTER_ID_VARS
            .iter()
            .filter_map(|key| lookup(*key))
            .map(|v| v.trim().to_string())
            .find(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::MissingCanisterId(CANISTER_ID_VARS.join(", ")))?;
        let canister_id =
            Principal::from_text(&raw_id).map_err(|e| ConfigError::InvalidCanisterId {
                id: raw_id.clone(),
                reason: e.to_string(),
            })?;

        let shuffle_participants = lookup(SHUFFLE_VAR)
            .map(|v| matches!(v.trim(), "1" | "true"))
            .unwrap_or(false);

        Ok(Self {
            network,
            canister_id,
            shuffle_participants,
        })
    }

    pub fn host(&self) -> &'static str {
        self.network.host()
    }
}
