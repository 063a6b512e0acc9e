use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::Value;

use crate::crypto::SuiKeypair;
use crate::rpc::{SuiRpcClient, SuiSignature};
use crate::tx_builder::MoveCall;

/// Signs and submits move calls with a locally derived Ed25519 keypair.
///
/// The node does the transaction serialization: `sui_moveCall` hands back
/// Base64 transaction bytes, we sign the decoded bytes, and
/// `sui_executeTransaction` carries the signature and public key.
pub struct Signer {
	keypair: SuiKeypair,
	rpc: SuiRpcClient,
}

impl Signer {
	pub fn new(keypair: SuiKeypair, rpc: SuiRpcClient) -> Self {
		Self { keypair, rpc }
	}

	/// The Sui address this signer controls.
	pub fn address(&self) -> String {
		self.keypair.address()
	}

	pub fn rpc(&self) -> &SuiRpcClient {
		&self.rpc
	}

	/// Serialize the call on the node, sign the returned bytes, and submit,
	/// waiting for local execution effects.
	pub async fn sign_and_execute(&self, call: &MoveCall) -> Result<Value> {
		let tx = self.rpc.move_call(&self.address(), call).await?;
		let raw = BASE64
			.decode(&tx.tx_bytes)
			.context("node returned transaction bytes that are not valid Base64")?;
		let sig = SuiSignature {
			scheme: "ED25519",
			signature: self.keypair.sign_base64(&raw),
			public_key: self.keypair.public_key_base64(),
		};
		self.rpc.execute_transaction(&tx.tx_bytes, &sig).await
	}
}
