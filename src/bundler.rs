use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;

use clap::ColorChoice;

use console::style;

use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::Args;
use crate::error::BundleError;
use crate::manifest::Manifest;
use crate::npm::Npm;
use crate::pkg::Pkg;

/// Outcome of a run: every configured package lands in exactly one of the
/// two lists, in the order it was processed.
#[derive(Default)]
pub struct BundleReport {
    succeeded: Vec<String>,
    failed: Vec<(String, BundleError)>,
}

impl BundleReport {
    fn record(&mut self, package: String, outcome: Result<(), BundleError>) {
        match outcome {
            Ok(()) => self.succeeded.push(package),
            Err(e) => self.failed.push((package, e)),
        }
    }

    /// Returns `true` when at least one package failed to bundle.
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    fn print(&self, output_dir: &std::path::Path, targets: &str) {
        for package in &self.succeeded {
            println!("{:>12} {package}", style("Bundled").bold().green());
        }
        for (package, error) in &self.failed {
            println!("{:>12} {package}: {error}", style("Failed").bold().red());
        }

        if self.succeeded.is_empty() {
            println!(
                "{:>12} no executable created ({} package(s) failed)",
                style("Finished").bold().red(),
                self.failed.len(),
            );
        } else {
            println!(
                "{:>12} {} of {} package(s) for {targets} ({})",
                style("Finished").bold().green(),
                self.succeeded.len(),
                self.succeeded.len() + self.failed.len(),
                output_dir.display(),
            );
        }
    }
}

/// Install npm packages, locate their entry scripts, and drive `pkg` to turn
/// each one into a standalone native executable
pub struct Bundler {
    packages: Vec<String>,
    output_dir: PathBuf,
    install_dir: PathBuf,
    targets: String,
    progress: ProgressBar,
}

impl Bundler {
    pub fn from_args(args: Args) -> anyhow::Result<Self> {
        let progress = ProgressBar::new(0).with_style(
            ProgressStyle::with_template(
                "{prefix:>12.cyan.bold} [{bar:57}] {pos}/{len} {spinner}",
            )?
            .progress_chars("=> "),
        );
        progress.enable_steady_tick(Duration::from_millis(200));

        if args.color == ColorChoice::Never {
            console::set_colors_enabled(false);
        } else if args.color == ColorChoice::Always {
            console::set_colors_enabled(true);
        }

        let packages = args.packages();
        let targets = args.targets().join(",");

        Ok(Self {
            packages,
            output_dir: args.output_dir,
            install_dir: args.install_dir,
            targets,
            progress,
        })
    }

    fn bundle_package(&self, package: &str) -> Result<(), BundleError> {
        self.progress.println(format!(
            "{:>12} {package}",
            style("Installing").bold().green()
        ));
        Npm::install(package, &self.install_dir)?;

        let manifest_dir = self.install_dir.join("node_modules").join(package);
        let manifest = Manifest::from_path(&manifest_dir.join("package.json"))?;

        let (entry, skipped) = manifest.select_bin(&manifest_dir)?;
        if !skipped.is_empty() {
            eprintln!(
                "{:>12} `{package}` declares multiple executables; bundling `{}`, skipping {}",
                style("Warning").bold().yellow(),
                entry.name,
                skipped
                    .iter()
                    .map(|name| format!("`{name}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
        }

        self.progress.println(format!(
            "{:>12} {} ({})",
            style("Packaging").bold().green(),
            entry.name,
            entry.script.display(),
        ));
        let output_path = self.output_dir.join(&entry.name);
        Pkg::bundle(package, &self.targets, &output_path, &entry.script)?;

        Ok(())
    }

    /// Runs the whole bundling pass and returns the succeeded/failed report.
    ///
    /// Packages are processed strictly in order; a per-package failure is
    /// reported and recorded but never stops the loop. Only an unavailable
    /// packager or an uncreatable output directory aborts the run.
    pub fn run(&self) -> anyhow::Result<BundleReport> {
        match Pkg::version() {
            Ok(version) => {
                println!("{:>12} pkg v{version}", style("Found").bold().green());
            }
            Err(e) => {
                eprintln!("`pkg` is not available. Install it with: npm install -g pkg");

                return Err(e);
            }
        }

        std::fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "Failed to create output directory `{}`",
                self.output_dir.display()
            )
        })?;

        self.progress.set_length(self.packages.len() as u64);
        self.progress.set_prefix("Bundling");

        let mut report = BundleReport::default();
        for package in &self.packages {
            println!("{:>12} {package}", style("Bundling").bold().green());

            let outcome = self.bundle_package(package);
            if let Err(e) = &outcome {
                eprintln!("{:>12} {package}: {e}", style("Failed").bold().red());
            }
            report.record(package.clone(), outcome);

            self.progress.inc(1);
        }

        self.progress.finish_and_clear();

        report.print(&self.output_dir, &self.targets);

        Ok(report)
    }
}
