use serde_json::{json, Value};

use crate::calls::{AIRDROP_ADDRESSES, AIRDROP_DEPLOYMENT, DEPLOYMENT, WHITELIST_ADDRESSES};

/// A move-call payload: exactly the record the node's `sui_moveCall`
/// endpoint serializes into signable transaction bytes.
///
/// Numeric Move arguments ride as decimal strings and addresses as hex
/// strings; that is the JSON argument encoding this protocol era accepts.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveCall {
	pub package_object_id: String,
	pub module: String,
	pub function: String,
	pub type_arguments: Vec<String>,
	pub arguments: Vec<Value>,
	pub gas_budget: u64,
}

impl MoveCall {
	/// `module::function` for log lines.
	pub fn target(&self) -> String {
		format!("{}::{}", self.module, self.function)
	}
}

fn call(module: &str, function: &str, arguments: Vec<Value>, gas_budget: u64) -> MoveCall {
	MoveCall {
		package_object_id: DEPLOYMENT.package_id.to_owned(),
		module: module.to_owned(),
		function: function.to_owned(),
		type_arguments: vec![],
		arguments,
		gas_budget,
	}
}

/// Payload for `collection::new_collection`: registers the collection with
/// its display metadata, supply, royalty, and public-mint flag.
pub fn new_collection() -> MoveCall {
	call(
		"collection",
		"new_collection",
		vec![
			json!(DEPLOYMENT.launchpad),
			json!(DEPLOYMENT.creator),
			json!("collection1"),
			json!("solan1"),
			json!("desc"),
			json!("icon"),
			json!("cover"),
			json!("team"),
			json!("roadmap"),
			json!("1000"),
			json!("20"),
			json!("placeholder"),
			json!(true),
		],
		1000,
	)
}

/// Payload for `collection::add_address_to_whitelist`: admits the fixed
/// recipient set with its per-address limit, price, and cap.
pub fn add_whitelist() -> MoveCall {
	call(
		"collection",
		"add_address_to_whitelist",
		vec![
			json!(DEPLOYMENT.launchpad),
			json!(DEPLOYMENT.whitelist),
			json!(WHITELIST_ADDRESSES),
			json!("10"),
			json!("1000"),
			json!("100"),
		],
		100_000,
	)
}

/// Payload for `collection::add_address_to_airdrop` on the earlier build.
pub fn add_airdrop() -> MoveCall {
	MoveCall {
		package_object_id: AIRDROP_DEPLOYMENT.package_id.to_owned(),
		module: "collection".to_owned(),
		function: "add_address_to_airdrop".to_owned(),
		type_arguments: vec![],
		arguments: vec![
			json!(AIRDROP_DEPLOYMENT.launchpad),
			json!(AIRDROP_DEPLOYMENT.project),
			json!(AIRDROP_ADDRESSES),
		],
		gas_budget: 100_000,
	}
}

/// Payload for `collection::batch_create_artwork_to_project`: attaches the
/// ten prepared artworks (photo, file, name, description per piece).
pub fn add_artworks() -> MoveCall {
	call(
		"collection",
		"batch_create_artwork_to_project",
		vec![
			json!(DEPLOYMENT.launchpad),
			json!(DEPLOYMENT.project),
			json!(numbered("photo", 10)),
			json!(numbered("file", 10)),
			json!(numbered("name", 10)),
			json!(numbered("desc", 10)),
		],
		10_000,
	)
}

/// Payload for `nft::mint`: mints one NFT from the project.
pub fn mint_nft() -> MoveCall {
	call(
		"nft",
		"mint",
		vec![
			json!(DEPLOYMENT.mint_registry),
			json!(DEPLOYMENT.project),
			json!(DEPLOYMENT.whitelist),
		],
		10_000,
	)
}

/// The artwork batches are literal numbered runs: `name1` .. `name10`.
fn numbered(prefix: &str, count: usize) -> Vec<String> {
	(1..=count).map(|i| format!("{prefix}{i}")).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn all_calls() -> Vec<MoveCall> {
		vec![
			new_collection(),
			add_whitelist(),
			add_airdrop(),
			add_artworks(),
			mint_nft(),
		]
	}

	#[test]
	fn every_call_has_empty_type_arguments() {
		for call in all_calls() {
			assert!(
				call.type_arguments.is_empty(),
				"{} should take no type arguments",
				call.target()
			);
		}
	}

	#[test]
	fn gas_budgets_are_pinned() {
		let budgets: Vec<u64> = all_calls().iter().map(|c| c.gas_budget).collect();
		assert_eq!(budgets, vec![1000, 100_000, 100_000, 10_000, 10_000]);
	}

	#[test]
	fn new_collection_payload_is_pinned() {
		let call = new_collection();
		assert_eq!(
			call.package_object_id,
			"0xa901063762dcf953ff2a0d08767903436f3fb483"
		);
		assert_eq!(call.target(), "collection::new_collection");
		assert_eq!(call.arguments.len(), 13);
		assert_eq!(
			call.arguments[0],
			json!("0x75203afe0077667cd77bb291c7fbb1b703f60afe")
		);
		assert_eq!(
			call.arguments[1],
			json!("0x33f6bdb87c2974c83a6becc9f08560f7bab98441")
		);
		assert_eq!(call.arguments[2], json!("collection1"));
		assert_eq!(call.arguments[3], json!("solan1"));
		assert_eq!(call.arguments[4], json!("desc"));
		assert_eq!(call.arguments[8], json!("roadmap"));
		// Supply and royalty ride as decimal strings, not JSON numbers.
		assert_eq!(call.arguments[9], json!("1000"));
		assert_eq!(call.arguments[10], json!("20"));
		assert_eq!(call.arguments[11], json!("placeholder"));
		assert_eq!(call.arguments[12], json!(true));
		assert_eq!(call.gas_budget, 1000);
	}

	#[test]
	fn add_whitelist_payload_is_pinned() {
		let call = add_whitelist();
		assert_eq!(call.target(), "collection::add_address_to_whitelist");
		assert_eq!(call.arguments.len(), 6);
		assert_eq!(
			call.arguments[1],
			json!("0x714e59349f22c8f639571a9651d92472545646ee")
		);
		let admitted = call.arguments[2].as_array().unwrap();
		assert_eq!(admitted.len(), 3);
		assert_eq!(
			admitted[0],
			json!("0x33f6bdb87c2974c83a6becc9f08560f7bab98441")
		);
		assert_eq!(call.arguments[3], json!("10"));
		assert_eq!(call.arguments[4], json!("1000"));
		assert_eq!(call.arguments[5], json!("100"));
	}

	#[test]
	fn add_airdrop_targets_the_earlier_build() {
		let call = add_airdrop();
		assert_eq!(
			call.package_object_id,
			"0xb3d40059ce34de8e077251b6bb98076dab663f79"
		);
		assert_eq!(call.target(), "collection::add_address_to_airdrop");
		assert_eq!(call.arguments.len(), 3);
		assert_eq!(
			call.arguments[0],
			json!("0xf1f4ce0381429f55858f976fdadc2dc87b4cf8d0")
		);
		assert_eq!(
			call.arguments[1],
			json!("0x080e1de136b9392b28e9fff72a7940009b61d50d")
		);
		assert_eq!(call.arguments[2].as_array().unwrap().len(), 7);
		assert_eq!(
			call.arguments[2][6],
			json!("0xea947cc9bda00b244154d74cc32528f4f3fcc05a")
		);
	}

	#[test]
	fn add_artworks_payload_is_pinned() {
		let call = add_artworks();
		assert_eq!(call.target(), "collection::batch_create_artwork_to_project");
		assert_eq!(call.arguments.len(), 6);
		assert_eq!(
			call.arguments[1],
			json!("0x0b752b205b2c80b7fc3c9e5d5edaf751cafcc0b6")
		);
		for (i, prefix) in ["photo", "file", "name", "desc"].iter().enumerate() {
			let batch = call.arguments[i + 2].as_array().unwrap();
			assert_eq!(batch.len(), 10);
			assert_eq!(batch[0], json!(format!("{prefix}1")));
			assert_eq!(batch[9], json!(format!("{prefix}10")));
		}
	}

	#[test]
	fn mint_payload_is_pinned() {
		let call = mint_nft();
		assert_eq!(
			call.package_object_id,
			"0xa901063762dcf953ff2a0d08767903436f3fb483"
		);
		assert_eq!(call.target(), "nft::mint");
		assert_eq!(
			call.arguments,
			vec![
				json!("0x53ee3e0aeb3918f1a950e5f7c0d20fa1c0acbef9"),
				json!("0x0b752b205b2c80b7fc3c9e5d5edaf751cafcc0b6"),
				json!("0x714e59349f22c8f639571a9651d92472545646ee"),
			]
		);
	}
}
