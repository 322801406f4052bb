//! `docnav sidebar` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use docnav_config::{CliSettings, Config};
use docnav_sidebar::SidebarBuilder;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    /// Section subdirectory to scan (e.g. "course").
    section: String,

    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Enable verbose output (show scan logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl SidebarArgs {
    /// Execute the sidebar command.
    ///
    /// Prints the derived entries one per line, in sidebar order. An empty
    /// or missing section prints nothing and succeeds, matching the build
    /// behavior for absent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or output writing fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let builder = SidebarBuilder::new(&config.docs_resolved.source_dir);
        let entries = builder.build(&self.section);

        output.info(&format!(
            "{} entries in {}",
            entries.len(),
            config
                .docs_resolved
                .source_dir
                .join(&self.section)
                .display()
        ));

        let mut stdout = std::io::stdout().lock();
        for entry in &entries {
            writeln!(stdout, "{entry}")?;
        }

        Ok(())
    }
}
