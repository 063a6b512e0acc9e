/// Object IDs for the current devnet build of the launchpad package.
///
/// All values are pinned to the deployment the operational calls target;
/// they are 20-byte hex IDs (this protocol era's address width).
pub struct Deployment {
	/// Package holding the `collection` and `nft` modules.
	pub package_id: &'static str,
	/// Shared launchpad registry object.
	pub launchpad: &'static str,
	/// Address that receives the collection admin capability.
	pub creator: &'static str,
	/// Whitelist object consulted by minting.
	pub whitelist: &'static str,
	/// Project object artworks are attached to.
	pub project: &'static str,
	/// Registry object passed to `nft::mint`.
	pub mint_registry: &'static str,
}

/// The earlier build the airdrop entry point still lives on.  Its launchpad
/// and project objects belong to that deployment, not the current one.
pub struct AirdropDeployment {
	pub package_id: &'static str,
	pub launchpad: &'static str,
	pub project: &'static str,
}

/// Current devnet deployment.
pub static DEPLOYMENT: Deployment = Deployment {
	package_id: "0xa901063762dcf953ff2a0d08767903436f3fb483",
	launchpad: "0x75203afe0077667cd77bb291c7fbb1b703f60afe",
	creator: "0x33f6bdb87c2974c83a6becc9f08560f7bab98441",
	whitelist: "0x714e59349f22c8f639571a9651d92472545646ee",
	project: "0x0b752b205b2c80b7fc3c9e5d5edaf751cafcc0b6",
	mint_registry: "0x53ee3e0aeb3918f1a950e5f7c0d20fa1c0acbef9",
};

/// Deployment the airdrop call targets.
pub static AIRDROP_DEPLOYMENT: AirdropDeployment = AirdropDeployment {
	package_id: "0xb3d40059ce34de8e077251b6bb98076dab663f79",
	launchpad: "0xf1f4ce0381429f55858f976fdadc2dc87b4cf8d0",
	project: "0x080e1de136b9392b28e9fff72a7940009b61d50d",
};

/// Addresses admitted by the whitelist call.
pub static WHITELIST_ADDRESSES: [&str; 3] = [
	"0x33f6bdb87c2974c83a6becc9f08560f7bab98441",
	"0xa4e034a5104cc4f61a7e3a4f83c09e7d7e65f484",
	"0x2e4cd7dfc63a9211d03c24caaa03e0a2a40191dd",
];

/// Addresses funded by the airdrop call.
pub static AIRDROP_ADDRESSES: [&str; 7] = [
	"0x33f6bdb87c2974c83a6becc9f08560f7bab98441",
	"0xa4e034a5104cc4f61a7e3a4f83c09e7d7e65f484",
	"0x2e4cd7dfc63a9211d03c24caaa03e0a2a40191dd",
	"0xc3d73e836ec22308975332081d1b64898645ed73",
	"0xd8cfc8de766060f5a699510f57d03a413fc7d196",
	"0x184c59aeabfc7c5ee2a61682727aeb7d87f6cb87",
	"0xea947cc9bda00b244154d74cc32528f4f3fcc05a",
];
