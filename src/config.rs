//! Compiled-in defaults, used when the corresponding option is not given on
//! the command line.

/// Packages bundled when no package is named on the command line.
pub const DEFAULT_PACKAGES: &[&str] = &[
    "@modelcontextprotocol/server-filesystem",
    "@modelcontextprotocol/server-memory",
    "@modelcontextprotocol/server-sequential-thinking",
];

/// Directory the final executables are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "dist";

/// Target platforms given to `pkg`, in `node<version>-<platform>-<arch>` form.
pub const DEFAULT_TARGETS: &[&str] = &["node18-macos-x64"];
