use std::path::Path;
use std::process::Command;

use crate::error::BundleError;

/// Wrapper around the `npm` command
pub struct Npm;

impl Npm {
    fn command() -> Command {
        Command::new(std::env::var_os("NPM").unwrap_or_else(|| "npm".into()))
    }

    /// Installs a package into `install_dir`, populating its `node_modules`.
    ///
    /// Runs to completion before returning; a failure aborts only the
    /// package being installed, never the run.
    pub fn install(package: &str, install_dir: &Path) -> Result<(), BundleError> {
        let failed = |reason: String| BundleError::Install {
            package: package.to_owned(),
            reason,
        };

        let output = Self::command()
            .arg("install")
            .arg(package)
            .current_dir(install_dir)
            .output()
            .map_err(|e| failed(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);

            return Err(failed(format!(
                "`npm install` exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}
