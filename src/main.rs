//! `npm-bundle` installs a list of npm packages, locates the executable
//! entry script each one declares in its manifest, and invokes the external
//! `pkg` packager to produce a standalone native executable per package.

use std::process::ExitCode;

use clap::Parser;

mod bundler;
mod cli;
mod config;
mod error;
mod manifest;
mod npm;
mod pkg;

use crate::bundler::Bundler;
use crate::cli::Args;

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let bundler = Bundler::from_args(args)?;
    let report = bundler.run()?;

    if report.has_failures() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
