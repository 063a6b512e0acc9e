use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
	name = "sui-launchpad",
	about = "One-shot move-call CLI for the NFT launchpad on Sui devnet.",
	version
)]
pub struct Cli {
	/// Network to connect to.
	#[arg(long, default_value = "devnet", global = true)]
	pub network: Network,

	/// Override fullnode RPC endpoint URL.
	#[arg(long, global = true)]
	pub rpc_url: Option<String>,

	/// Override path to the secrets file holding the mnemonic.
	#[arg(long, global = true)]
	pub secrets: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Clone, ValueEnum)]
pub enum Network {
	Devnet,
	Testnet,
	Localnet,
}

impl Network {
	pub fn as_str(&self) -> &str {
		match self {
			Self::Devnet => "devnet",
			Self::Testnet => "testnet",
			Self::Localnet => "localnet",
		}
	}
}

#[derive(Subcommand)]
pub enum Command {
	/// Create and populate the launchpad collection.
	Collection {
		#[command(subcommand)]
		command: CollectionCommand,
	},

	/// Mint NFTs from the collection.
	Nft {
		#[command(subcommand)]
		command: NftCommand,
	},

	/// Show the Sui address derived from the secrets mnemonic.
	Address,

	/// Request devnet SUI for the derived address from the faucet.
	Faucet,
}

// -- Collection subcommands --

#[derive(Subcommand)]
pub enum CollectionCommand {
	/// Call collection::new_collection with the fixed project metadata.
	Create,

	/// Call collection::add_address_to_whitelist with the fixed whitelist batch.
	AddWhitelist,

	/// Call collection::add_address_to_airdrop with the fixed airdrop batch.
	AddAirdrop,

	/// Call collection::batch_create_artwork_to_project with the ten artworks.
	AddArtworks,
}

// -- Nft subcommands --

#[derive(Subcommand)]
pub enum NftCommand {
	/// Call nft::mint against the deployed project.
	Mint,
}
