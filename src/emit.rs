use std::path::Path;

use serde_json::Value;

use crate::config::TailwindConfig;
use crate::errors::{ConfigError, Result};

impl TailwindConfig {
    /// Serialize to JSON
    pub fn to_json_string(&self, pretty: bool) -> Result<String> {
        let out = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(out)
    }

    /// Serialize to YAML
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Render the canonical CommonJS `tailwind.config.js` form
    ///
    /// Tab-indented, `require('pkg')` plugin entries, trailing commas —
    /// the shape Tailwind's own `init` emits.
    pub fn to_js_string(&self) -> Result<String> {
        let mut out = String::new();
        out.push_str("/** @type {import('tailwindcss').Config} */\n");
        out.push_str("module.exports = {\n");

        out.push_str("\tcontent: [\n");
        for pattern in &self.content {
            out.push_str("\t\t");
            out.push_str(&serde_json::to_string(pattern)?);
            out.push_str(",\n");
        }
        out.push_str("\t],\n");

        out.push_str("\ttheme: ");
        render_js_value(&serde_json::to_value(&self.theme)?, 1, &mut out);
        out.push_str(",\n");

        out.push_str("\tplugins: [\n");
        for plugin in &self.plugins {
            out.push_str("\t\trequire('");
            out.push_str(plugin.package_name());
            out.push_str("'),\n");
        }
        out.push_str("\t],\n}\n");

        Ok(out)
    }

    /// Write the configuration to a file, format chosen by extension
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let content = match path.extension().and_then(|s| s.to_str()) {
            Some("js") | Some("cjs") => self.to_js_string()?,
            Some("json") => {
                let mut json = self.to_json_string(true)?;
                json.push('\n');
                json
            }
            Some("yaml") | Some("yml") => self.to_yaml_string()?,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.display().to_string(),
                })
            }
        };

        write_atomic(path, &content).map_err(|e| ConfigError::OutputError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

fn render_js_value(value: &Value, depth: usize, out: &mut String) {
    match value {
        Value::Object(map) if map.is_empty() => out.push_str("{}"),
        Value::Object(map) => {
            out.push_str("{\n");
            for (key, value) in map {
                push_tabs(depth + 1, out);
                if is_js_identifier(key) {
                    out.push_str(key);
                } else {
                    // serde_json handles quoting and escaping
                    out.push_str(&Value::String(key.clone()).to_string());
                }
                out.push_str(": ");
                render_js_value(value, depth + 1, out);
                out.push_str(",\n");
            }
            push_tabs(depth, out);
            out.push('}');
        }
        Value::Array(items) if items.is_empty() => out.push_str("[]"),
        Value::Array(items) => {
            out.push_str("[\n");
            for item in items {
                push_tabs(depth + 1, out);
                render_js_value(item, depth + 1, out);
                out.push_str(",\n");
            }
            push_tabs(depth, out);
            out.push(']');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}

fn push_tabs(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push('\t');
    }
}

fn is_js_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Write file atomically by writing to a temp file then renaming
fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    use std::io::Write;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let temp_path = path.with_extension("tmp");
    let mut file = std::fs::File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;
    std::fs::rename(&temp_path, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader;

    #[test]
    fn test_js_form_matches_init_shape() {
        let js = TailwindConfig::default().to_js_string().unwrap();
        assert!(js.starts_with("/** @type {import('tailwindcss').Config} */\n"));
        assert!(js.contains("\t\t\"./components/**/*.templ\",\n"));
        assert!(js.contains("\ttheme: {\n\t\textend: {},\n\t},\n"));
        assert!(js.contains("\t\trequire('@tailwindcss/forms'),\n"));
        assert!(js.contains("\t\trequire('@tailwindcss/typography'),\n"));
    }

    #[test]
    fn test_js_round_trip() {
        let mut config = TailwindConfig::default();
        config
            .theme
            .extend
            .colors
            .insert("brand".to_string(), serde_json::json!("#0066cc"));
        config
            .theme
            .extend
            .font_family
            .insert("sans".to_string(), serde_json::json!(["Inter", "sans-serif"]));

        let js = config.to_js_string().unwrap();
        let parsed = loader::from_js_str(&js, "emitted").unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = TailwindConfig::default();
        let yaml = config.to_yaml_string().unwrap();
        let parsed: TailwindConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_quoted_keys_for_non_identifiers() {
        let mut config = TailwindConfig::default();
        config
            .theme
            .extend
            .spacing
            .insert("4.5".to_string(), serde_json::json!("1.125rem"));

        let js = config.to_js_string().unwrap();
        assert!(js.contains("\"4.5\": \"1.125rem\""));

        let parsed = loader::from_js_str(&js, "emitted").unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_write_file_rejects_unknown_extension() {
        let err = TailwindConfig::default()
            .write_file(Path::new("tailwind.config.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat { .. }));
    }
}
