use anyhow::Result;

use crate::cli::{Cli, CollectionCommand};
use crate::commands::submit_call;
use crate::tx_builder;

/// Dispatch a collection subcommand.  Each one submits a single fixed
/// move call against the deployed launchpad package.
pub async fn run(cli: &Cli, command: &CollectionCommand) -> Result<()> {
	let call = match command {
		CollectionCommand::Create => tx_builder::new_collection(),
		CollectionCommand::AddWhitelist => tx_builder::add_whitelist(),
		CollectionCommand::AddAirdrop => tx_builder::add_airdrop(),
		CollectionCommand::AddArtworks => tx_builder::add_artworks(),
	};
	submit_call(cli, &call).await
}
