use anyhow::Result;
use clap::Parser;

mod calls;
mod cli;
mod commands;
mod config;
mod crypto;
mod rpc;
mod secrets;
mod signer;
mod tx_builder;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();

	match &cli.command {
		Command::Collection { command } => commands::collection::run(&cli, command).await,
		Command::Nft { command } => commands::nft::run(&cli, command).await,
		Command::Address => commands::address::run(&cli),
		Command::Faucet => commands::faucet::run(&cli).await,
	}
}
