use std::path::Path;
use std::process::Command;

use anyhow::Context;

use crate::error::BundleError;

/// Wrapper around the `pkg` packager command
pub struct Pkg;

impl Pkg {
    fn command() -> Command {
        Command::new(std::env::var_os("PKG").unwrap_or_else(|| "pkg".into()))
    }

    /// Checks that the packager is invocable by querying its version.
    ///
    /// This gates the whole run: no package is processed when it fails.
    pub fn version() -> anyhow::Result<String> {
        let output = Self::command()
            .arg("--version")
            .output()
            .context("Failed to execute `pkg --version`")?;

        if !output.status.success() {
            anyhow::bail!("`pkg --version` exited with {}", output.status);
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_owned())
    }

    /// Compiles an entry script into a standalone executable at `output_path`.
    pub fn bundle(
        package: &str,
        targets: &str,
        output_path: &Path,
        entry: &Path,
    ) -> Result<(), BundleError> {
        let failed = |reason: String| BundleError::Packager {
            package: package.to_owned(),
            reason,
        };

        let output = Self::command()
            .arg("--targets")
            .arg(targets)
            .arg("--output")
            .arg(output_path)
            .arg(entry)
            .output()
            .map_err(|e| failed(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);

            return Err(failed(format!(
                "exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}
