use std::path::PathBuf;

use clap::ColorChoice;

use crate::config;

/// Bundle npm packages into standalone native executables with `pkg`
#[derive(clap::Parser)]
#[command(version, author, about, long_about)]
pub struct Args {
    /// Npm packages to bundle (defaults to the compiled-in list)
    #[clap(value_name = "PACKAGE")]
    pub packages: Vec<String>,

    /// Write the final executables to this directory
    #[clap(long, value_name = "PATH", default_value = config::DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Comma-separated list of target platforms given to pkg
    #[clap(
        long,
        use_value_delimiter = true,
        value_delimiter = ',',
        value_name = "TARGETS"
    )]
    pub targets: Vec<String>,

    /// Install packages into this directory (its `node_modules` is shared by
    /// every package of the run)
    #[clap(long, value_name = "PATH", default_value = ".")]
    pub install_dir: PathBuf,

    /// Color preferences for program output
    #[clap(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorChoice,
}

impl Args {
    /// Returns the packages given on the command line, or the compiled-in
    /// list if none is provided.
    pub fn packages(&self) -> Vec<String> {
        if self.packages.is_empty() {
            config::DEFAULT_PACKAGES
                .iter()
                .map(ToString::to_string)
                .collect()
        } else {
            self.packages.clone()
        }
    }

    /// Returns the targets given on the command line, or the compiled-in
    /// list if none is provided.
    pub fn targets(&self) -> Vec<String> {
        if self.targets.is_empty() {
            config::DEFAULT_TARGETS
                .iter()
                .map(ToString::to_string)
                .collect()
        } else {
            self.targets.clone()
        }
    }
}
