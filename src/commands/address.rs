use anyhow::Result;

use crate::cli::Cli;
use crate::commands::load_keypair;
use crate::config::Config;

/// Derive the keypair from the secrets mnemonic and print its address.
/// Purely local, no network access.
pub fn run(cli: &Cli) -> Result<()> {
	let config = Config::load()?;
	load_keypair(cli, &config)?;
	Ok(())
}
