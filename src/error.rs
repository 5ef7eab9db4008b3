use std::path::PathBuf;

use thiserror::Error;

/// An error that fails a single package without stopping the run.
///
/// Fatal conditions (the packager being unavailable, the output directory
/// being uncreatable) are not represented here: they abort the whole run and
/// are propagated as [`anyhow::Error`] out of `main`.
#[derive(Debug, Error)]
pub enum BundleError {
    /// `npm install` exited with a failure or could not be spawned.
    #[error("failed to install `{package}`: {reason}")]
    Install { package: String, reason: String },

    /// The installed package's manifest could not be read or parsed.
    #[error("failed to read the manifest `{path}`: {reason}")]
    ManifestUnreadable { path: PathBuf, reason: String },

    /// The manifest has no `bin` field, so there is no entry point to bundle.
    #[error("`{package}` has no `bin` field in its manifest")]
    MissingBinField { package: String },

    /// The manifest's `bin` field is an empty mapping.
    #[error("the `bin` field of `{package}` is empty")]
    EmptyBinField { package: String },

    /// The packager exited with a failure or could not be spawned.
    #[error("pkg failed for `{package}`: {reason}")]
    Packager { package: String, reason: String },
}
