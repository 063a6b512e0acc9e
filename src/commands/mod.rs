pub mod address;
pub mod collection;
pub mod faucet;
pub mod nft;

use std::path::PathBuf;

use anyhow::Result;
use serde_json::Value;

use crate::cli::Cli;
use crate::config::Config;
use crate::crypto::{DERIVATION_PATH, SuiKeypair};
use crate::rpc::SuiRpcClient;
use crate::secrets::Secrets;
use crate::signer::Signer;
use crate::tx_builder::MoveCall;

/// Resolve the fullnode RPC URL from CLI flag or config.
pub fn resolve_rpc(cli: &Cli, config: &Config) -> String {
	cli.rpc_url
		.clone()
		.unwrap_or_else(|| config.rpc_url(cli.network.as_str()).to_owned())
}

/// Resolve the faucet URL for the selected network.
pub fn resolve_faucet(cli: &Cli, config: &Config) -> String {
	config.faucet_url(cli.network.as_str()).to_owned()
}

/// Resolve the secrets file path: CLI flag, then config, then ./secrets.json.
pub fn resolve_secrets_path(cli: &Cli, config: &Config) -> PathBuf {
	cli.secrets
		.clone()
		.or_else(|| config.wallet.secrets_path.clone())
		.unwrap_or_else(|| PathBuf::from("secrets.json"))
}

/// Load the mnemonic from the secrets file and derive the signing keypair,
/// printing the derived address.
pub fn load_keypair(cli: &Cli, config: &Config) -> Result<SuiKeypair> {
	let path = resolve_secrets_path(cli, config);
	let secrets = Secrets::load(&path)?;
	let keypair = SuiKeypair::derive(&secrets.mnemonic, DERIVATION_PATH)?;
	println!("Address: {}", keypair.address());
	Ok(keypair)
}

/// Build a signer backed by the derived keypair and the selected RPC node.
pub fn build_signer(cli: &Cli, config: &Config) -> Result<Signer> {
	let keypair = load_keypair(cli, config)?;
	let rpc = SuiRpcClient::new(&resolve_rpc(cli, config));
	Ok(Signer::new(keypair, rpc))
}

/// Shared submit path for the one-shot subcommands: derive the keypair,
/// let the node serialize the call, sign, execute, and report the outcome.
pub async fn submit_call(cli: &Cli, call: &MoveCall) -> Result<()> {
	let config = Config::load()?;
	let signer = build_signer(cli, &config)?;

	println!(
		"Submitting {} (gas budget {})...",
		call.target(),
		call.gas_budget
	);
	let resp = signer.sign_and_execute(call).await?;
	report_execution(&resp)
}

/// Print the digest and execution status when present, then the full
/// response for inspection.
pub fn report_execution(resp: &Value) -> Result<()> {
	if let Some(digest) = resp
		.pointer("/EffectsCert/certificate/transactionDigest")
		.and_then(Value::as_str)
	{
		println!("Digest: {digest}");
	}
	if let Some(status) = resp
		.pointer("/EffectsCert/effects/effects/status/status")
		.and_then(Value::as_str)
	{
		println!("Status: {status}");
	}
	println!("{}", serde_json::to_string_pretty(resp)?);
	Ok(())
}
