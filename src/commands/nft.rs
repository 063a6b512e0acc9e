use anyhow::Result;

use crate::cli::{Cli, NftCommand};
use crate::commands::submit_call;
use crate::tx_builder;

/// Dispatch an nft subcommand.
pub async fn run(cli: &Cli, command: &NftCommand) -> Result<()> {
	let call = match command {
		NftCommand::Mint => tx_builder::mint_nft(),
	};
	submit_call(cli, &call).await
}
