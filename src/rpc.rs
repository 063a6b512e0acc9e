use anyhow::{anyhow, Context, Result};
use serde_json::{json, Value};

use crate::tx_builder::MoveCall;

/// Thin JSON-RPC provider for a Sui fullnode.
///
/// No SDK is published for this protocol era, so the few methods the
/// launchpad flow needs are spoken directly.  Transaction serialization
/// stays on the node: `sui_moveCall` turns a payload into signable bytes,
/// which keeps this side free of any BCS encoding.
pub struct SuiRpcClient {
	http: reqwest::Client,
	url: String,
}

/// Serialized-transaction response from `sui_moveCall`.
#[derive(Debug, Clone)]
pub struct TransactionBytes {
	/// Base64-encoded BCS transaction data, ready to sign.
	pub tx_bytes: String,
}

/// A signature in the era's three-part wire form.
#[derive(Debug, Clone)]
pub struct SuiSignature {
	pub scheme: &'static str,
	pub signature: String,
	pub public_key: String,
}

impl SuiRpcClient {
	pub fn new(url: &str) -> Self {
		Self {
			http: reqwest::Client::new(),
			url: url.to_owned(),
		}
	}

	pub fn url(&self) -> &str {
		&self.url
	}

	/// Ask the node to serialize a move call into signable transaction
	/// bytes.  The gas object slot is left null so the node picks a coin
	/// owned by the signer.
	pub async fn move_call(&self, signer: &str, call: &MoveCall) -> Result<TransactionBytes> {
		let result = self
			.call("sui_moveCall", move_call_params(signer, call))
			.await?;
		let tx_bytes = result
			.get("txBytes")
			.and_then(Value::as_str)
			.ok_or_else(|| anyhow!("sui_moveCall response has no txBytes field: {result}"))?;
		Ok(TransactionBytes {
			tx_bytes: tx_bytes.to_owned(),
		})
	}

	/// Submit signed transaction bytes and wait for local execution.
	pub async fn execute_transaction(
		&self,
		tx_bytes: &str,
		sig: &SuiSignature,
	) -> Result<Value> {
		self.call(
			"sui_executeTransaction",
			json!([
				tx_bytes,
				sig.scheme,
				sig.signature,
				sig.public_key,
				"WaitForLocalExecution"
			]),
		)
		.await
	}

	/// Total transactions the node has processed.  Cheap liveness probe.
	pub async fn total_transaction_number(&self) -> Result<u64> {
		let result = self.call("sui_getTotalTransactionNumber", json!([])).await?;
		result.as_u64().ok_or_else(|| {
			anyhow!("unexpected sui_getTotalTransactionNumber response: {result}")
		})
	}

	/// Objects owned by an address.
	pub async fn objects_owned_by(&self, address: &str) -> Result<Vec<Value>> {
		let result = self
			.call("sui_getObjectsOwnedByAddress", json!([address]))
			.await?;
		result.as_array().cloned().ok_or_else(|| {
			anyhow!("unexpected sui_getObjectsOwnedByAddress response: {result}")
		})
	}

	// -- Envelope plumbing --

	async fn call(&self, method: &str, params: Value) -> Result<Value> {
		let body = rpc_request(method, params);
		let resp: Value = self
			.http
			.post(&self.url)
			.json(&body)
			.send()
			.await
			.with_context(|| format!("{method} request to {} failed", self.url))?
			.json()
			.await
			.with_context(|| format!("{method} returned a non-JSON response"))?;
		unwrap_result(resp, method)
	}
}

/// Ask a faucet to fund `address`.  The faucet is plain HTTP, not JSON-RPC.
pub async fn request_from_faucet(faucet_url: &str, address: &str) -> Result<Value> {
	let body = json!({ "FixedAmountRequest": { "recipient": address } });
	let resp = reqwest::Client::new()
		.post(faucet_url)
		.json(&body)
		.send()
		.await
		.with_context(|| format!("faucet request to {faucet_url} failed"))?;

	let status = resp.status();
	let value: Value = resp
		.json()
		.await
		.with_context(|| format!("faucet at {faucet_url} returned a non-JSON response"))?;

	if !status.is_success() {
		return Err(anyhow!("faucet returned HTTP {status}: {value}"));
	}
	if let Some(err) = value.get("error").filter(|e| !e.is_null()) {
		return Err(anyhow!("faucet error: {err}"));
	}
	Ok(value)
}

// -- Private helpers --

/// Build a JSON-RPC 2.0 request envelope.
fn rpc_request(method: &str, params: Value) -> Value {
	json!({
		"id": 1,
		"jsonrpc": "2.0",
		"method": method,
		"params": params
	})
}

/// Params for `sui_moveCall`: signer, target, type args, args, gas object
/// (null = node selects), budget.
fn move_call_params(signer: &str, call: &MoveCall) -> Value {
	json!([
		signer,
		call.package_object_id,
		call.module,
		call.function,
		call.type_arguments,
		call.arguments,
		Value::Null,
		call.gas_budget,
	])
}

/// Pull `result` out of a JSON-RPC response, surfacing `error` verbatim.
fn unwrap_result(resp: Value, method: &str) -> Result<Value> {
	if let Some(err) = resp.get("error") {
		if !err.is_null() {
			return Err(anyhow!("{method} RPC error: {err}"));
		}
	}
	resp.get("result")
		.cloned()
		.ok_or_else(|| anyhow!("{method} response has no result: {resp}"))
}
