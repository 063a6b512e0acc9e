use anyhow::{anyhow, bail, Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use ed25519_dalek::{Signer as _, SigningKey, VerifyingKey};
use hmac::{Hmac, Mac};
use sha2::Sha512;
use sha3::{Digest, Sha3_256};

type HmacSha512 = Hmac<Sha512>;

/// The fixed derivation path every launchpad call signs from.
pub const DERIVATION_PATH: &str = "m/44'/784'/0'/0'/0'";

/// Sui addresses in this protocol era are 20 bytes (40 hex chars).
pub const SUI_ADDRESS_LENGTH: usize = 20;

/// Scheme flag prepended to the public key before hashing into an address.
const ED25519_FLAG: u8 = 0x00;

/// HMAC key that roots every SLIP-0010 Ed25519 tree.
const ED25519_SEED_KEY: &[u8] = b"ed25519 seed";

const HARDENED_OFFSET: u32 = 0x8000_0000;
const PURPOSE: u32 = 44 | HARDENED_OFFSET;
const SUI_COIN_TYPE: u32 = 784 | HARDENED_OFFSET;

// -- Derivation paths --

/// A fully hardened derivation path, `m/44'/784'/account'/change'/index'`.
///
/// Ed25519 only supports hardened derivation, so every component must carry
/// the `'` marker; the purpose/coin-type prefix is pinned to Sui's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivationPath(Vec<u32>);

impl DerivationPath {
	pub fn parse(s: &str) -> Result<Self> {
		let rest = s
			.strip_prefix("m/")
			.ok_or_else(|| anyhow!("derivation path must start with \"m/\": {s:?}"))?;

		let mut indexes = Vec::new();
		for part in rest.split('/') {
			let raw = part.strip_suffix('\'').ok_or_else(|| {
				anyhow!("derivation path component {part:?} is not hardened")
			})?;
			let n: u32 = raw
				.parse()
				.map_err(|_| anyhow!("invalid derivation path component {part:?}"))?;
			if n >= HARDENED_OFFSET {
				bail!("derivation path component {part:?} is out of range");
			}
			indexes.push(n | HARDENED_OFFSET);
		}

		if indexes.len() != 5 || indexes[0] != PURPOSE || indexes[1] != SUI_COIN_TYPE {
			bail!("expected a path of the form m/44'/784'/a'/c'/i', got {s:?}");
		}

		Ok(Self(indexes))
	}

	fn indexes(&self) -> &[u32] {
		&self.0
	}
}

// -- Keypairs --

/// An Ed25519 keypair derived from a mnemonic, addressed and signing the
/// way the devnet-era chain expects: 20-byte SHA3 addresses and plain
/// Ed25519 over raw transaction bytes (no intent prefix).
#[derive(Debug)]
pub struct SuiKeypair {
	signing: SigningKey,
}

impl SuiKeypair {
	/// Derive a keypair from a BIP-39 mnemonic at the given hardened path.
	/// The seed is built with an empty passphrase.
	pub fn derive(mnemonic: &str, path: &str) -> Result<Self> {
		let path = DerivationPath::parse(path)?;
		let seed = mnemonic_to_seed(mnemonic)?;
		let secret = slip10_derive(&seed, path.indexes());
		Ok(Self {
			signing: SigningKey::from_bytes(&secret),
		})
	}

	fn verifying_key(&self) -> VerifyingKey {
		self.signing.verifying_key()
	}

	/// The Sui address: `0x` + first 20 bytes of SHA3-256(flag || pubkey).
	pub fn address(&self) -> String {
		let mut h = Sha3_256::new();
		h.update([ED25519_FLAG]);
		h.update(self.verifying_key().as_bytes());
		let digest = h.finalize();
		format!("0x{}", hex::encode(&digest[..SUI_ADDRESS_LENGTH]))
	}

	/// Base64 of the 32-byte public key, as `sui_executeTransaction` expects.
	pub fn public_key_base64(&self) -> String {
		BASE64.encode(self.verifying_key().as_bytes())
	}

	/// Sign raw message bytes and return the 64-byte signature Base64-encoded.
	pub fn sign_base64(&self, msg: &[u8]) -> String {
		BASE64.encode(self.signing.sign(msg).to_bytes())
	}
}

// -- Seed and chain derivation --

/// BIP-39 mnemonic to 64-byte seed. Whitespace is normalized first so a
/// secrets file with stray spacing still decodes.
fn mnemonic_to_seed(phrase: &str) -> Result<[u8; 64]> {
	let normalized = phrase
		.split_whitespace()
		.collect::<Vec<_>>()
		.join(" ")
		.to_lowercase();
	let mnemonic = bip39::Mnemonic::parse_in_normalized(bip39::Language::English, &normalized)
		.map_err(|e| anyhow!("invalid mnemonic: {e}"))
		.context("the secrets file must hold a valid BIP-39 phrase")?;
	Ok(mnemonic.to_seed(""))
}

/// SLIP-0010 hardened Ed25519 derivation: one HMAC-SHA512 per path level.
/// `indexes` must already carry the hardened bit.
fn slip10_derive(seed: &[u8], indexes: &[u32]) -> [u8; 32] {
	let mut mac =
		HmacSha512::new_from_slice(ED25519_SEED_KEY).expect("HMAC-SHA512 accepts any key length");
	mac.update(seed);
	let digest = mac.finalize().into_bytes();

	let mut key = [0u8; 32];
	let mut chain = [0u8; 32];
	key.copy_from_slice(&digest[..32]);
	chain.copy_from_slice(&digest[32..]);

	for index in indexes {
		let mut mac =
			HmacSha512::new_from_slice(&chain).expect("HMAC-SHA512 accepts any key length");
		mac.update(&[0u8]);
		mac.update(&key);
		mac.update(&index.to_be_bytes());
		let digest = mac.finalize().into_bytes();
		key.copy_from_slice(&digest[..32]);
		chain.copy_from_slice(&digest[32..]);
	}

	key
}

#[cfg(test)]
mod tests {
	use super::*;

	const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon \
		abandon abandon abandon abandon abandon about";

	#[test]
	fn slip10_master_key_matches_published_vector() {
		// SLIP-0010 Ed25519 test vector 1, chain m.
		let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
		let key = slip10_derive(&seed, &[]);
		assert_eq!(
			hex::encode(key),
			"2b4be7f19ee27bbf30c667b642d5f4aa69fd169872f8fc3059c08ebae2eb19e7"
		);
	}

	#[test]
	fn slip10_deep_chain_matches_published_vector() {
		// Same vector set, chain m/0'/1'/2'/2'/1000000000'.
		let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
		let indexes: Vec<u32> = [0u32, 1, 2, 2, 1_000_000_000]
			.iter()
			.map(|i| i | HARDENED_OFFSET)
			.collect();
		let key = slip10_derive(&seed, &indexes);
		assert_eq!(
			hex::encode(key),
			"8f94d394a8e8fd6b1bc2f3f49f5c47e385281d5c17e65324b0f62483e37e8793"
		);
	}

	#[test]
	fn bip39_seed_matches_reference_vector() {
		let seed = mnemonic_to_seed(TEST_MNEMONIC).unwrap();
		assert_eq!(
			hex::encode(seed),
			"5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc1\
			9a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
		);
	}

	#[test]
	fn stray_whitespace_does_not_change_the_seed() {
		let messy = format!("  {}  ", TEST_MNEMONIC.replace(' ', "   "));
		assert_eq!(
			mnemonic_to_seed(TEST_MNEMONIC).unwrap(),
			mnemonic_to_seed(&messy).unwrap()
		);
	}

	#[test]
	fn same_mnemonic_and_path_derive_the_same_address() {
		let a = SuiKeypair::derive(TEST_MNEMONIC, DERIVATION_PATH).unwrap();
		let b = SuiKeypair::derive(TEST_MNEMONIC, DERIVATION_PATH).unwrap();
		assert_eq!(a.address(), b.address());
		assert_eq!(a.public_key_base64(), b.public_key_base64());
	}

	#[test]
	fn different_account_index_changes_the_address() {
		let a = SuiKeypair::derive(TEST_MNEMONIC, "m/44'/784'/0'/0'/0'").unwrap();
		let b = SuiKeypair::derive(TEST_MNEMONIC, "m/44'/784'/1'/0'/0'").unwrap();
		assert_ne!(a.address(), b.address());
	}

	#[test]
	fn address_is_20_byte_prefixed_hex() {
		let kp = SuiKeypair::derive(TEST_MNEMONIC, DERIVATION_PATH).unwrap();
		let addr = kp.address();
		assert!(addr.starts_with("0x"));
		assert_eq!(addr.len(), 2 + 2 * SUI_ADDRESS_LENGTH);
		assert!(hex::decode(&addr[2..]).is_ok());
	}

	#[test]
	fn invalid_mnemonic_is_rejected_before_any_derivation() {
		let err =
			SuiKeypair::derive("definitely not a bip39 phrase", DERIVATION_PATH).unwrap_err();
		assert!(format!("{err:#}").contains("invalid mnemonic"));
	}

	#[test]
	fn path_components_must_be_hardened() {
		assert!(DerivationPath::parse("m/44'/784'/0'/0/0").is_err());
		assert!(DerivationPath::parse("m/44'/784'/0'/0'/0").is_err());
	}

	#[test]
	fn path_must_target_sui() {
		assert!(DerivationPath::parse("m/44'/0'/0'/0'/0'").is_err());
		assert!(DerivationPath::parse("m/54'/784'/0'/0'/0'").is_err());
		assert!(DerivationPath::parse("m/44'/784'/0'/0'").is_err());
		assert!(DerivationPath::parse("44'/784'/0'/0'/0'").is_err());
	}

	#[test]
	fn fixed_path_parses() {
		let path = DerivationPath::parse(DERIVATION_PATH).unwrap();
		assert_eq!(path.indexes().len(), 5);
		assert_eq!(path.indexes()[1], 784 | HARDENED_OFFSET);
	}

	#[test]
	fn signatures_are_deterministic_64_byte_ed25519() {
		let kp = SuiKeypair::derive(TEST_MNEMONIC, DERIVATION_PATH).unwrap();
		let msg = b"serialized transaction bytes";
		let a = kp.sign_base64(msg);
		let b = kp.sign_base64(msg);
		assert_eq!(a, b);
		assert_eq!(BASE64.decode(&a).unwrap().len(), 64);
	}
}
