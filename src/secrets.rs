use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Contents of the local secrets file.
///
/// The file is JSON with a single field:
///
///   { "mnemonic": "word1 word2 ... word12" }
#[derive(Debug, Clone, Deserialize)]
pub struct Secrets {
	pub mnemonic: String,
}

/// Failures loading the secrets file.  Every variant names the path so a
/// bad setup is attributed before any network call happens.
#[derive(Debug, Error)]
pub enum SecretsError {
	#[error("secrets file not found at {}", .path.display())]
	NotFound { path: PathBuf },

	#[error("could not read secrets file at {}: {}", .path.display(), .source)]
	Unreadable {
		path: PathBuf,
		source: std::io::Error,
	},

	#[error("secrets file at {} is not JSON with a \"mnemonic\" field: {}", .path.display(), .source)]
	Malformed {
		path: PathBuf,
		source: serde_json::Error,
	},

	#[error("secrets file at {} has an empty mnemonic", .path.display())]
	EmptyMnemonic { path: PathBuf },
}

impl Secrets {
	/// Load and validate the secrets file at `path`.
	pub fn load(path: &Path) -> Result<Self, SecretsError> {
		if !path.exists() {
			return Err(SecretsError::NotFound {
				path: path.to_owned(),
			});
		}

		let content = std::fs::read_to_string(path).map_err(|source| SecretsError::Unreadable {
			path: path.to_owned(),
			source,
		})?;

		let secrets: Secrets =
			serde_json::from_str(&content).map_err(|source| SecretsError::Malformed {
				path: path.to_owned(),
				source,
			})?;

		if secrets.mnemonic.trim().is_empty() {
			return Err(SecretsError::EmptyMnemonic {
				path: path.to_owned(),
			});
		}

		Ok(secrets)
	}
}
