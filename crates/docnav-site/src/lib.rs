//! Site manifest assembly.
//!
//! Combines a loaded [`Config`] with the sidebar builder into a
//! [`SiteManifest`]: the resolved configuration object the external
//! static-site tool consumes. The manifest is computed once per build and
//! is not mutated afterward.

mod manifest;

pub use manifest::{
    AnchorManifest, MarkdownManifest, NavItem, SiteManifest, ThemeManifest, TocManifest,
};

use std::collections::BTreeMap;

use docnav_config::Config;
use docnav_sidebar::SidebarBuilder;

/// Assemble the site manifest from configuration.
///
/// For each sidebar declaration the entry list is either derived by
/// scanning the declared section under the docs root or taken literally
/// from the config. Scanned lists carry the sidebar builder's guarantees:
/// every entry corresponds to an existing markdown file, README pages are
/// excluded, and there are no duplicates.
#[must_use]
pub fn build_manifest(config: &Config) -> SiteManifest {
    let builder = SidebarBuilder::new(&config.docs_resolved.source_dir);

    let mut sidebar = BTreeMap::new();
    for decl in &config.sidebar {
        let entries = match (&decl.section, &decl.entries) {
            (Some(section), None) => builder.build(section),
            (None, Some(entries)) => entries.clone(),
            // Rejected by config validation; an unvalidated config gets
            // an empty list rather than a panic.
            _ => Vec::new(),
        };
        tracing::debug!(route = %decl.route, count = entries.len(), "resolved sidebar");
        sidebar.insert(decl.route.clone(), entries);
    }

    let nav = config
        .nav
        .iter()
        .map(|decl| NavItem {
            text: decl.text.clone(),
            link: decl.link.clone(),
            items: decl
                .items
                .iter()
                .map(|item| NavItem {
                    text: item.text.clone(),
                    link: Some(item.link.clone()),
                    items: Vec::new(),
                })
                .collect(),
        })
        .collect();

    SiteManifest {
        title: config.site.title.clone(),
        description: config.site.description.clone(),
        theme: ThemeManifest {
            repo: config.theme.repo.clone(),
            repo_label: config.theme.repo_label.clone(),
            docs_repo: config.theme.docs_repo.clone(),
            docs_dir: config.theme.docs_dir.clone(),
            docs_branch: config.theme.docs_branch.clone(),
            edit_links: config.theme.edit_links,
            edit_link_text: config.theme.edit_link_text.clone(),
            sidebar,
            sidebar_depth: config.theme.sidebar_depth,
            navbar: config.theme.navbar.clone(),
            nav,
        },
        markdown: MarkdownManifest {
            line_numbers: config.markdown.line_numbers,
            anchor: AnchorManifest {
                permalink: config.markdown.anchor_permalink,
            },
            toc: TocManifest {
                include_level: config.markdown.toc_levels.clone(),
            },
        },
    }
}
