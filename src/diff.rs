use std::fmt;

use crate::config::{Plugin, TailwindConfig};

/// Field-by-field drift between two configuration records
///
/// Near-duplicate configs tend to accumulate in multi-target repositories;
/// the diff shows maintainers exactly where two variants disagree instead
/// of leaving them to eyeball the files.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigDiff {
    /// Content patterns declared only on the left side
    pub content_only_left: Vec<String>,

    /// Content patterns declared only on the right side
    pub content_only_right: Vec<String>,

    /// Plugin lists when they differ (order included)
    pub plugins: Option<(Vec<Plugin>, Vec<Plugin>)>,

    /// Whether the theme sections differ
    pub theme_differs: bool,
}

impl ConfigDiff {
    pub fn is_empty(&self) -> bool {
        self.content_only_left.is_empty()
            && self.content_only_right.is_empty()
            && self.plugins.is_none()
            && !self.theme_differs
    }
}

impl fmt::Display for ConfigDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "configs are identical");
        }
        for pattern in &self.content_only_left {
            writeln!(f, "content: {} (left only)", pattern)?;
        }
        for pattern in &self.content_only_right {
            writeln!(f, "content: {} (right only)", pattern)?;
        }
        if let Some((left, right)) = &self.plugins {
            let names = |plugins: &[Plugin]| {
                plugins
                    .iter()
                    .map(Plugin::package_name)
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            writeln!(f, "plugins: [{}] vs [{}]", names(left), names(right))?;
        }
        if self.theme_differs {
            writeln!(f, "theme sections differ")?;
        }
        Ok(())
    }
}

impl TailwindConfig {
    /// Compare two configuration records field by field
    pub fn diff(&self, other: &Self) -> ConfigDiff {
        ConfigDiff {
            content_only_left: self
                .content
                .iter()
                .filter(|p| !other.content.contains(p))
                .cloned()
                .collect(),
            content_only_right: other
                .content
                .iter()
                .filter(|p| !self.content.contains(p))
                .cloned()
                .collect(),
            plugins: if self.plugins != other.plugins {
                Some((self.plugins.clone(), other.plugins.clone()))
            } else {
                None
            },
            theme_differs: self.theme != other.theme,
        }
    }
}
