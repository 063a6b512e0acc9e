use anyhow::Result;

use crate::cli::Cli;
use crate::commands::{load_keypair, resolve_faucet};
use crate::config::Config;
use crate::rpc;

/// Request gas coins for the derived address from the network faucet.
pub async fn run(cli: &Cli) -> Result<()> {
	let config = Config::load()?;
	let keypair = load_keypair(cli, &config)?;
	let faucet_url = resolve_faucet(cli, &config);

	println!("Requesting gas from {faucet_url}...");
	let resp = rpc::request_from_faucet(&faucet_url, &keypair.address()).await?;
	println!("{}", serde_json::to_string_pretty(&resp)?);
	Ok(())
}
