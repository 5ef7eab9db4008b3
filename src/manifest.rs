use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use serde::Deserialize;

use crate::error::BundleError;

/// The subset of a `package.json` manifest needed to locate an entry point.
#[derive(Deserialize)]
pub struct Manifest {
    name: String,

    bin: Option<BinField>,
}

/// The `bin` field of a manifest: either a single script path, or a mapping
/// of executable names to script paths.
///
/// The mapping keeps its keys in declaration order, since the first declared
/// executable is the one that gets bundled.
#[derive(Deserialize)]
#[serde(untagged)]
enum BinField {
    Path(String),
    Entries(IndexMap<String, String>),
}

/// The executable selected from a manifest: its command name and the entry
/// script path resolved against the manifest's directory.
#[derive(Debug)]
pub struct BinEntry {
    pub name: String,
    pub script: PathBuf,
}

/// Resolves a declared script path against the manifest's directory,
/// dropping the `./` prefix manifests conventionally carry.
fn resolve_script(manifest_dir: &Path, script: &str) -> PathBuf {
    manifest_dir.join(script.strip_prefix("./").unwrap_or(script))
}

impl Manifest {
    /// Parses a manifest file from disk.
    pub fn from_path(path: &Path) -> Result<Self, BundleError> {
        let unreadable = |reason: String| BundleError::ManifestUnreadable {
            path: path.to_path_buf(),
            reason,
        };

        let contents = std::fs::read_to_string(path).map_err(|e| unreadable(e.to_string()))?;

        serde_json::from_str(&contents).map_err(|e| unreadable(e.to_string()))
    }

    /// Selects the executable to bundle.
    ///
    /// A string `bin` field declares a single executable named after the
    /// package itself. A mapping declares one executable per key; only the
    /// first declared one is selected, and the names of the skipped ones are
    /// returned so the caller can warn about them.
    pub fn select_bin(&self, manifest_dir: &Path) -> Result<(BinEntry, Vec<String>), BundleError> {
        let bin = self
            .bin
            .as_ref()
            .ok_or_else(|| BundleError::MissingBinField {
                package: self.name.clone(),
            })?;

        match bin {
            BinField::Path(script) => {
                let entry = BinEntry {
                    name: self.name.clone(),
                    script: resolve_script(manifest_dir, script),
                };

                Ok((entry, Vec::new()))
            }
            BinField::Entries(entries) => {
                let (name, script) =
                    entries
                        .first()
                        .ok_or_else(|| BundleError::EmptyBinField {
                            package: self.name.clone(),
                        })?;

                let entry = BinEntry {
                    name: name.clone(),
                    script: resolve_script(manifest_dir, script),
                };
                let skipped = entries.keys().skip(1).cloned().collect();

                Ok((entry, skipped))
            }
        }
    }
}
