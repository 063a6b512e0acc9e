use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
	pub network: NetworkConfig,
	pub wallet: WalletConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
	pub default: String,
	pub devnet_rpc: String,
	pub devnet_faucet: String,
	pub testnet_rpc: String,
	pub testnet_faucet: String,
	pub localnet_rpc: String,
	pub localnet_faucet: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletConfig {
	pub secrets_path: Option<PathBuf>,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			network: NetworkConfig {
				default: "devnet".into(),
				devnet_rpc: "https://fullnode.devnet.sui.io:443".into(),
				devnet_faucet: "https://faucet.devnet.sui.io/gas".into(),
				testnet_rpc: "https://fullnode.testnet.sui.io:443".into(),
				testnet_faucet: "https://faucet.testnet.sui.io/gas".into(),
				localnet_rpc: "http://127.0.0.1:9000".into(),
				localnet_faucet: "http://127.0.0.1:9123/gas".into(),
			},
			wallet: WalletConfig { secrets_path: None },
		}
	}
}

impl Config {
	/// Directory where CLI state is stored (~/.sui-launchpad/).
	pub fn dir() -> PathBuf {
		dirs::home_dir()
			.expect("could not determine home directory")
			.join(".sui-launchpad")
	}

	/// Path to the config file.
	pub fn path() -> PathBuf {
		Self::dir().join("config.toml")
	}

	/// Load config from disk, falling back to defaults if no file exists.
	pub fn load() -> anyhow::Result<Self> {
		let path = Self::path();
		if path.exists() {
			let content = std::fs::read_to_string(&path)?;
			Ok(toml::from_str(&content)?)
		} else {
			Ok(Self::default())
		}
	}

	/// Return the fullnode RPC URL for the given network name.
	pub fn rpc_url(&self, network: &str) -> &str {
		match network {
			"testnet" => &self.network.testnet_rpc,
			"localnet" => &self.network.localnet_rpc,
			_ => &self.network.devnet_rpc,
		}
	}

	/// Return the faucet URL for the given network name.
	pub fn faucet_url(&self, network: &str) -> &str {
		match network {
			"testnet" => &self.network.testnet_faucet,
			"localnet" => &self.network.localnet_faucet,
			_ => &self.network.devnet_faucet,
		}
	}
}
