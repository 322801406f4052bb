//! `docnav build` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use docnav_config::{CliSettings, Config};
use docnav_site::build_manifest;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Write the manifest to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,

    /// Enable verbose output (show per-section scan logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, serialization, or output
    /// writing fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!(
            "Docs root: {}",
            config.docs_resolved.source_dir.display()
        ));

        let manifest = build_manifest(&config);
        for (route, entries) in &manifest.theme.sidebar {
            output.info(&format!("Sidebar {route}: {} entries", entries.len()));
        }

        let json = manifest.to_json(!self.compact)?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, json)?;
                output.success(&format!("Manifest written to {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(json.as_bytes())?;
                stdout.write_all(b"\n")?;
            }
        }

        Ok(())
    }
}
