//! Configuration management for docnav.
//!
//! Parses `docnav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! A config file describes one documentation site: its metadata, theme
//! settings passed through to the external static-site tool, the navbar,
//! markdown rendering options, and per-section sidebar declarations. A
//! sidebar declaration either names a `section` subdirectory to scan or
//! carries a static `entries` list.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docnav.toml";

/// Deepest heading level the external tool renders in sidebars and TOCs.
const MAX_HEADING_LEVEL: u8 = 6;

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site metadata.
    pub site: SiteConfig,
    /// Theme settings passed through to the external build tool.
    pub theme: ThemeConfig,
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Per-section sidebar declarations.
    pub sidebar: Vec<SidebarDecl>,
    /// Navbar items.
    pub nav: Vec<NavDecl>,
    /// Markdown rendering options.
    pub markdown: MarkdownConfig,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site metadata.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Documentation".to_owned(),
            description: String::new(),
        }
    }
}

/// Theme settings passed through to the external build tool.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Repository slug or URL shown in the navbar.
    pub repo: Option<String>,
    /// Custom label for the repository link.
    pub repo_label: Option<String>,
    /// Repository holding the docs, when different from `repo`.
    pub docs_repo: Option<String>,
    /// Directory of the docs inside the repository.
    pub docs_dir: String,
    /// Branch the edit links point at.
    pub docs_branch: String,
    /// Whether "edit this page" links are generated.
    pub edit_links: bool,
    /// Custom text for edit links.
    pub edit_link_text: Option<String>,
    /// Heading depth rendered in sidebars.
    pub sidebar_depth: u8,
    /// Navbar mode understood by the external tool (e.g. "auto").
    pub navbar: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            repo: None,
            repo_label: None,
            docs_repo: None,
            docs_dir: "docs".to_owned(),
            docs_branch: "master".to_owned(),
            edit_links: false,
            edit_link_text: None,
            sidebar_depth: 2,
            navbar: "auto".to_owned(),
        }
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Source directory for markdown files.
    pub source_dir: PathBuf,
}

/// One sidebar declaration: a route mapped to scanned or literal entries.
#[derive(Debug, Deserialize)]
pub struct SidebarDecl {
    /// Route prefix the sidebar applies to (e.g. "/course/").
    pub route: String,
    /// Section subdirectory to scan for markdown files.
    #[serde(default)]
    pub section: Option<String>,
    /// Static entry list, used instead of scanning.
    #[serde(default)]
    pub entries: Option<Vec<String>>,
}

/// One navbar item: a direct link or a nested link group.
#[derive(Debug, Deserialize)]
pub struct NavDecl {
    /// Display text.
    pub text: String,
    /// Link target.
    #[serde(default)]
    pub link: Option<String>,
    /// Nested links forming a dropdown group.
    #[serde(default)]
    pub items: Vec<NavLinkDecl>,
}

/// A link inside a navbar group.
#[derive(Debug, Deserialize)]
pub struct NavLinkDecl {
    /// Display text.
    pub text: String,
    /// Link target.
    pub link: String,
}

/// Markdown rendering options passed through to the external build tool.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Render line numbers in code blocks.
    pub line_numbers: bool,
    /// Add permalink anchors to headings.
    pub anchor_permalink: bool,
    /// Heading levels included in generated tables of contents.
    pub toc_levels: Vec<u8>,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            line_numbers: false,
            anchor_permalink: true,
            toc_levels: vec![2, 3],
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docnav.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            theme: ThemeConfig::default(),
            docs: DocsConfigRaw::default(),
            sidebar: Vec::new(),
            nav: Vec::new(),
            markdown: MarkdownConfig::default(),
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading and resolution
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are properly set and contain valid values.
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_theme()?;
        self.validate_sidebar()?;
        self.validate_nav()?;
        self.validate_markdown()?;
        Ok(())
    }

    /// Validate site metadata.
    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")
    }

    /// Validate theme settings.
    fn validate_theme(&self) -> Result<(), ConfigError> {
        if self.theme.sidebar_depth > MAX_HEADING_LEVEL {
            return Err(ConfigError::Validation(format!(
                "theme.sidebar_depth cannot exceed {MAX_HEADING_LEVEL}"
            )));
        }
        Ok(())
    }

    /// Validate sidebar declarations.
    fn validate_sidebar(&self) -> Result<(), ConfigError> {
        let mut seen_routes = HashSet::new();
        for decl in &self.sidebar {
            require_non_empty(&decl.route, "sidebar.route")?;
            if !decl.route.starts_with('/') {
                return Err(ConfigError::Validation(format!(
                    "sidebar.route '{}' must start with '/'",
                    decl.route
                )));
            }
            if !seen_routes.insert(decl.route.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate sidebar.route '{}'",
                    decl.route
                )));
            }
            match (&decl.section, &decl.entries) {
                (Some(_), Some(_)) => {
                    return Err(ConfigError::Validation(format!(
                        "sidebar '{}' sets both section and entries",
                        decl.route
                    )));
                }
                (None, None) => {
                    return Err(ConfigError::Validation(format!(
                        "sidebar '{}' needs either section or entries",
                        decl.route
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Validate navbar declarations.
    fn validate_nav(&self) -> Result<(), ConfigError> {
        for decl in &self.nav {
            require_non_empty(&decl.text, "nav.text")?;
            match (&decl.link, decl.items.is_empty()) {
                (Some(_), false) => {
                    return Err(ConfigError::Validation(format!(
                        "nav item '{}' sets both link and items",
                        decl.text
                    )));
                }
                (None, true) => {
                    return Err(ConfigError::Validation(format!(
                        "nav item '{}' needs either link or items",
                        decl.text
                    )));
                }
                _ => {}
            }
            for item in &decl.items {
                require_non_empty(&item.text, "nav.items.text")?;
                require_non_empty(&item.link, "nav.items.link")?;
            }
        }
        Ok(())
    }

    /// Validate markdown options.
    fn validate_markdown(&self) -> Result<(), ConfigError> {
        if self.markdown.toc_levels.is_empty() {
            return Err(ConfigError::Validation(
                "markdown.toc_levels cannot be empty".to_owned(),
            ));
        }
        for &level in &self.markdown.toc_levels {
            if level == 0 || level > MAX_HEADING_LEVEL {
                return Err(ConfigError::Validation(format!(
                    "markdown.toc_levels entry {level} must be between 1 and {MAX_HEADING_LEVEL}"
                )));
            }
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.docs_resolved = DocsConfig {
            source_dir: config_dir.join(self.docs.source_dir.as_deref().unwrap_or("docs")),
        };
    }
}
