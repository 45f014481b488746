use std::fmt;
use std::path::Path;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tailwind build configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TailwindConfig {
    /// Content paths to scan, in declaration order
    pub content: Vec<String>,

    /// Theme configuration
    pub theme: Theme,

    /// Plugins to load, in declaration order
    pub plugins: Vec<Plugin>,
}

impl Default for TailwindConfig {
    fn default() -> Self {
        Self {
            content: vec!["./components/**/*.templ".to_string()],
            theme: Theme::default(),
            plugins: vec![Plugin::Forms, Plugin::Typography],
        }
    }
}

/// Theme configuration for Tailwind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Additive extensions on top of the tool defaults
    pub extend: ThemeExtend,

    /// Full overrides of default theme sections
    #[serde(flatten)]
    pub overrides: IndexMap<String, Value>,
}

impl Theme {
    /// True when no customization is applied beyond tool defaults
    pub fn is_empty(&self) -> bool {
        self.extend.is_empty() && self.overrides.is_empty()
    }
}

/// Theme extensions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeExtend {
    /// Custom colors
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub colors: IndexMap<String, Value>,

    /// Custom font families
    #[serde(rename = "fontFamily", skip_serializing_if = "IndexMap::is_empty")]
    pub font_family: IndexMap<String, Value>,

    /// Custom spacing values
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub spacing: IndexMap<String, Value>,

    /// Any other extension keys, kept in declaration order
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl ThemeExtend {
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
            && self.font_family.is_empty()
            && self.spacing.is_empty()
            && self.extra.is_empty()
    }
}

/// A plugin reference, serialized as its npm package name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Plugin {
    Forms,
    Typography,
    AspectRatio,
    ContainerQueries,
    Other(String),
}

impl Plugin {
    /// The npm package name Tailwind resolves this plugin by
    pub fn package_name(&self) -> &str {
        match self {
            Plugin::Forms => "@tailwindcss/forms",
            Plugin::Typography => "@tailwindcss/typography",
            Plugin::AspectRatio => "@tailwindcss/aspect-ratio",
            Plugin::ContainerQueries => "@tailwindcss/container-queries",
            Plugin::Other(name) => name,
        }
    }
}

impl FromStr for Plugin {
    type Err = std::convert::Infallible;

    /// Accepts both the full package name and the short form
    /// (`forms` for `@tailwindcss/forms`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let short = s.strip_prefix("@tailwindcss/").unwrap_or(s);
        Ok(match short {
            "forms" => Plugin::Forms,
            "typography" => Plugin::Typography,
            "aspect-ratio" => Plugin::AspectRatio,
            "container-queries" => Plugin::ContainerQueries,
            _ => Plugin::Other(s.to_string()),
        })
    }
}

impl fmt::Display for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.package_name())
    }
}

impl From<String> for Plugin {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(Plugin::Other(s))
    }
}

impl From<Plugin> for String {
    fn from(p: Plugin) -> Self {
        p.package_name().to_string()
    }
}

/// Outcome of validating a configuration
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    /// Problems that make the configuration unusable
    pub errors: Vec<String>,

    /// Suspicious but tolerated declarations
    pub warnings: Vec<String>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

impl TailwindConfig {
    /// Validate the configuration record
    ///
    /// Errors are malformed or absolute content patterns; warnings cover
    /// declarations the external build tool would accept but that usually
    /// indicate a stale or copy-pasted config.
    pub fn check(&self) -> CheckReport {
        let mut report = CheckReport::default();

        if self.content.is_empty() {
            report
                .warnings
                .push("content is empty: no files will be scanned for classes".to_string());
        }

        let mut seen_patterns = std::collections::HashSet::new();
        for pattern in &self.content {
            if let Err(e) = glob::Pattern::new(pattern) {
                report
                    .errors
                    .push(format!("invalid glob pattern '{}': {}", pattern, e));
                continue;
            }

            if Path::new(pattern).is_absolute() {
                report.errors.push(format!(
                    "content pattern '{}' is absolute; patterns must be relative to the config",
                    pattern
                ));
            }

            if !pattern.contains('*') && !pattern.contains('?') {
                report.warnings.push(format!(
                    "content pattern '{}' has no wildcard segment and matches at most one file",
                    pattern
                ));
            }

            if !seen_patterns.insert(pattern.as_str()) {
                report
                    .warnings
                    .push(format!("duplicate content pattern '{}'", pattern));
            }
        }

        let mut seen_plugins = std::collections::HashSet::new();
        for plugin in &self.plugins {
            if !seen_plugins.insert(plugin.package_name()) {
                report
                    .warnings
                    .push(format!("duplicate plugin '{}'", plugin.package_name()));
            }
        }

        report
    }
}
