//! Serialized site manifest types.
//!
//! These types mirror the configuration object of the external static-site
//! tool, which expects camelCase keys and a `themeConfig` wrapper around
//! navigation settings.

use std::collections::BTreeMap;

use serde::Serialize;

/// Resolved site configuration for the external build tool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SiteManifest {
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Theme and navigation settings.
    #[serde(rename = "themeConfig")]
    pub theme: ThemeManifest,
    /// Markdown rendering options.
    pub markdown: MarkdownManifest,
}

impl SiteManifest {
    /// Serialize the manifest to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// Theme and navigation settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeManifest {
    /// Repository slug or URL shown in the navbar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    /// Custom label for the repository link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_label: Option<String>,
    /// Repository holding the docs, when different from `repo`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs_repo: Option<String>,
    /// Directory of the docs inside the repository.
    pub docs_dir: String,
    /// Branch the edit links point at.
    pub docs_branch: String,
    /// Whether "edit this page" links are generated.
    pub edit_links: bool,
    /// Custom text for edit links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_link_text: Option<String>,
    /// Per-route sidebar entry lists, ordered by route.
    pub sidebar: BTreeMap<String, Vec<String>>,
    /// Heading depth rendered in sidebars.
    pub sidebar_depth: u8,
    /// Navbar mode understood by the external tool.
    pub navbar: String,
    /// Navbar items.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nav: Vec<NavItem>,
}

/// Navbar item: a direct link or a dropdown group of links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display text.
    pub text: String,
    /// Link target, absent for group headers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Nested links forming a dropdown group.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<NavItem>,
}

/// Markdown rendering options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkdownManifest {
    /// Render line numbers in code blocks.
    pub line_numbers: bool,
    /// Heading anchor options.
    pub anchor: AnchorManifest,
    /// Table-of-contents options.
    pub toc: TocManifest,
}

/// Heading anchor options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnchorManifest {
    /// Add permalink anchors to headings.
    pub permalink: bool,
}

/// Table-of-contents options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TocManifest {
    /// Heading levels included in generated tables of contents.
    pub include_level: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_item_link_serialization() {
        let item = NavItem {
            text: "Course".to_owned(),
            link: Some("/course/1".to_owned()),
            items: Vec::new(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json, serde_json::json!({"text": "Course", "link": "/course/1"}));
    }

    #[test]
    fn test_nav_item_group_serialization() {
        let item = NavItem {
            text: "Install".to_owned(),
            link: None,
            items: vec![NavItem {
                text: "Linux".to_owned(),
                link: Some("/installation/LinuxInstall.md".to_owned()),
                items: Vec::new(),
            }],
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "text": "Install",
                "items": [{"text": "Linux", "link": "/installation/LinuxInstall.md"}]
            })
        );
    }

    #[test]
    fn test_sidebar_routes_are_ordered() {
        let mut sidebar = BTreeMap::new();
        sidebar.insert("/resources/".to_owned(), vec!["glossary".to_owned()]);
        sidebar.insert("/course/".to_owned(), vec!["1".to_owned()]);

        let json = serde_json::to_string(&sidebar).unwrap();
        let course = json.find("/course/").unwrap();
        let resources = json.find("/resources/").unwrap();
        assert!(course < resources);
    }
}
