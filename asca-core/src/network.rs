//! Target chain environment shared across the page.
//!
//! Downstream modules read the selected network to pick chain endpoints;
//! this module only guarantees the value never leaves the two-value domain.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    /// All selectable networks, in display order.
    pub const ALL: [Self; 2] = [Self::Mainnet, Self::Testnet];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
        }
    }

    /// Human-facing label for the selector options.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mainnet => "Mainnet",
            Self::Testnet => "Testnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown network: {0}")]
pub struct UnknownNetwork(pub String);

impl FromStr for Network {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Self::Mainnet),
            "testnet" => Ok(Self::Testnet),
            other => Err(UnknownNetwork(other.to_string())),
        }
    }
}

/// Session-scoped holder for the chosen network.
///
/// Single mutation entry point; out-of-domain input is rejected and leaves
/// the held value untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NetworkSelection {
    current: Network,
}

impl NetworkSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn current(&self) -> Network {
        self.current
    }

    pub const fn select(&mut self, network: Network) {
        self.current = network;
    }

    /// Select from the raw `<select>` value.
    ///
    /// # Errors
    ///
    /// Returns `UnknownNetwork` for out-of-domain input; the held value is
    /// not modified in that case.
    pub fn select_str(&mut self, raw: &str) -> Result<Network, UnknownNetwork> {
        let network = raw.parse::<Network>()?;
        self.current = network;
        Ok(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_mainnet() {
        assert_eq!(NetworkSelection::new().current(), Network::Mainnet);
        assert_eq!(Network::default(), Network::Mainnet);
    }

    #[test]
    fn selects_testnet_and_reads_back() {
        let mut selection = NetworkSelection::new();
        assert_eq!(selection.select_str("testnet"), Ok(Network::Testnet));
        assert_eq!(selection.current(), Network::Testnet);
    }

    #[test]
    fn rejects_out_of_domain_values() {
        let mut selection = NetworkSelection::new();
        selection.select(Network::Testnet);
        let err = selection.select_str("devnet").unwrap_err();
        assert_eq!(err, UnknownNetwork(String::from("devnet")));
        assert_eq!(selection.current(), Network::Testnet);
    }

    #[test]
    fn round_trips_through_strings() {
        for network in Network::ALL {
            assert_eq!(network.as_str().parse::<Network>(), Ok(network));
        }
    }
}
