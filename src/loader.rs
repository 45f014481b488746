use std::path::Path;

use regex::Regex;

use crate::config::TailwindConfig;
use crate::errors::{ConfigError, Result};

/// Load a configuration from a file, auto-detecting the format by extension
pub fn from_file(path: &Path) -> Result<TailwindConfig> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("js") | Some("cjs") => from_js_file(path),
        Some("json") => from_json_file(path),
        Some("yaml") | Some("yml") => from_yaml_file(path),
        _ => Err(ConfigError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}

/// Load a configuration from a JSON file
pub fn from_json_file(path: &Path) -> Result<TailwindConfig> {
    let content = read(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load a configuration from a YAML file
pub fn from_yaml_file(path: &Path) -> Result<TailwindConfig> {
    let content = read(path)?;
    Ok(serde_yaml::from_str(&content)?)
}

/// Load a configuration from a CommonJS `tailwind.config.js` file
pub fn from_js_file(path: &Path) -> Result<TailwindConfig> {
    let content = read(path)?;
    from_js_str(&content, &path.display().to_string())
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Parse the CommonJS config form (`module.exports = {...}`)
///
/// The declarative subset Tailwind configs in the wild actually use is
/// normalized to JSON and handed to serde: comments are stripped,
/// `require('pkg')` plugin entries become package-name strings, bare keys
/// are quoted, single-quoted strings and trailing commas are rewritten.
/// Anything computed (plugin factory calls, expressions) is rejected rather
/// than guessed at.
pub fn from_js_str(source: &str, origin: &str) -> Result<TailwindConfig> {
    let json = normalize_js(source).map_err(|message| ConfigError::JsParseError {
        path: origin.to_string(),
        message,
    })?;

    serde_json::from_str(&json).map_err(|e| ConfigError::JsParseError {
        path: origin.to_string(),
        message: format!("normalized object is not a valid config: {}", e),
    })
}

fn normalize_js(source: &str) -> std::result::Result<String, String> {
    let stripped = strip_comments(source);
    let object = extract_exported_object(&stripped)?;

    if Regex::new(r"require\s*\([^)]*\)\s*\(")
        .unwrap()
        .is_match(&object)
    {
        return Err("plugin factory calls with options are not supported".to_string());
    }

    // require('pkg') -> "pkg", before quote rewriting so both quote styles match
    let require_re = Regex::new(r#"require\s*\(\s*['"]([^'"]+)['"]\s*\)"#).unwrap();
    let object = require_re.replace_all(&object, "\"$1\"").into_owned();

    let object = rewrite_single_quotes(&object);

    let key_re = Regex::new(r"([{,]\s*)([A-Za-z_$][A-Za-z0-9_$]*)\s*:").unwrap();
    let comma_re = Regex::new(r",\s*([}\]])").unwrap();
    let object = rewrite_outside_strings(&object, |segment| {
        let quoted = key_re.replace_all(segment, "$1\"$2\":");
        comma_re.replace_all(&quoted, "$1").into_owned()
    });

    Ok(object)
}

/// Remove `//` and `/* */` comments, leaving string contents untouched
fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    let mut in_string: Option<char> = None;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if let Some(quote) = in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == quote {
                in_string = None;
            }
            continue;
        }

        match c {
            '\'' | '"' | '`' => {
                in_string = Some(c);
                out.push(c);
            }
            '/' if chars.peek() == Some(&'/') => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = ' ';
                for c in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
            }
            _ => out.push(c),
        }
    }

    out
}

/// Locate the exported object literal and return it with balanced braces
fn extract_exported_object(source: &str) -> std::result::Result<String, String> {
    let trimmed = source.trim_start();
    let start = if let Some(pos) = source.find("module.exports") {
        let rest = &source[pos + "module.exports".len()..];
        let eq = rest
            .find('=')
            .ok_or_else(|| "module.exports is not assigned an object".to_string())?;
        pos + "module.exports".len() + eq + 1
    } else if let Some(pos) = source.find("export default") {
        pos + "export default".len()
    } else if trimmed.starts_with('{') {
        source.len() - trimmed.len()
    } else {
        return Err("no exported configuration object found".to_string());
    };

    let rest = &source[start..];
    let open = rest
        .find('{')
        .ok_or_else(|| "exported value is not an object literal".to_string())?;

    let body = &rest[open..];
    let mut depth = 0usize;
    let mut in_string: Option<char> = None;
    let mut escaped = false;

    for (i, c) in body.char_indices() {
        if let Some(quote) = in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == quote {
                in_string = None;
            }
            continue;
        }
        match c {
            '\'' | '"' | '`' => in_string = Some(c),
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(body[..=i].to_string());
                }
            }
            _ => {}
        }
    }

    Err("unbalanced braces in configuration object".to_string())
}

/// Convert single-quoted string literals to double-quoted JSON strings
fn rewrite_single_quotes(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                out.push(c);
                let mut escaped = false;
                for c in chars.by_ref() {
                    out.push(c);
                    if escaped {
                        escaped = false;
                    } else if c == '\\' {
                        escaped = true;
                    } else if c == '"' {
                        break;
                    }
                }
            }
            '\'' => {
                out.push('"');
                let mut escaped = false;
                for c in chars.by_ref() {
                    if escaped {
                        escaped = false;
                        if c == '\'' {
                            out.push('\'');
                        } else {
                            out.push('\\');
                            out.push(c);
                        }
                    } else if c == '\\' {
                        escaped = true;
                    } else if c == '\'' {
                        break;
                    } else if c == '"' {
                        out.push_str("\\\"");
                    } else {
                        out.push(c);
                    }
                }
                out.push('"');
            }
            _ => out.push(c),
        }
    }

    out
}

/// Apply a rewrite to the parts of the input outside double-quoted strings
fn rewrite_outside_strings<F>(source: &str, rewrite: F) -> String
where
    F: Fn(&str) -> String,
{
    let mut out = String::with_capacity(source.len());
    let mut segment = String::new();
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '"' || c == '\'' {
            out.push_str(&rewrite(&segment));
            segment.clear();

            let quote = c;
            out.push(c);
            let mut escaped = false;
            for c in chars.by_ref() {
                out.push(c);
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == quote {
                    break;
                }
            }
        } else {
            segment.push(c);
        }
    }

    out.push_str(&rewrite(&segment));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Plugin;

    const CONFIG_JS: &str = r#"/** @type {import('tailwindcss').Config} */
module.exports = {
	content: [
		"./components/**/*.templ",
		"./models/components/**/*.go",
	],
	theme: {
		extend: {},
	},
	plugins: [
		require('@tailwindcss/forms'),
		require('@tailwindcss/typography'),
	],
}
"#;

    #[test]
    fn test_parse_commonjs_config() {
        let config = from_js_str(CONFIG_JS, "tailwind.config.js").unwrap();
        assert_eq!(
            config.content,
            vec!["./components/**/*.templ", "./models/components/**/*.go"]
        );
        assert!(config.theme.is_empty());
        assert_eq!(config.plugins, vec![Plugin::Forms, Plugin::Typography]);
    }

    #[test]
    fn test_parse_export_default() {
        let source = r#"export default {
    content: ['./src/**/*.html'],
    theme: { extend: {} },
    plugins: [],
}"#;
        let config = from_js_str(source, "test").unwrap();
        assert_eq!(config.content, vec!["./src/**/*.html"]);
        assert!(config.plugins.is_empty());
    }

    #[test]
    fn test_line_comments_stripped() {
        let source = "module.exports = {\n// scan templ components\ncontent: ['./a/*.templ'],\n}";
        let config = from_js_str(source, "test").unwrap();
        assert_eq!(config.content, vec!["./a/*.templ"]);
    }

    #[test]
    fn test_comment_markers_inside_strings_survive() {
        let source = "module.exports = { content: ['./a//b/**/*.go'] }";
        let config = from_js_str(source, "test").unwrap();
        assert_eq!(config.content, vec!["./a//b/**/*.go"]);
    }

    #[test]
    fn test_theme_extension_values() {
        let source = r#"module.exports = {
    content: ['./src/**/*.jsx'],
    theme: {
        extend: {
            colors: { primary: '#1a73e8' },
            fontFamily: { sans: ['Inter', 'sans-serif'] },
        },
    },
    plugins: [require('@tailwindcss/forms')],
}"#;
        let config = from_js_str(source, "test").unwrap();
        assert_eq!(
            config.theme.extend.colors["primary"],
            serde_json::json!("#1a73e8")
        );
        assert_eq!(
            config.theme.extend.font_family["sans"],
            serde_json::json!(["Inter", "sans-serif"])
        );
    }

    #[test]
    fn test_plugin_factory_call_rejected() {
        let source = "module.exports = { plugins: [require('@tailwindcss/forms')({ strategy: 'class' })] }";
        let err = from_js_str(source, "test").unwrap_err();
        assert!(err.to_string().contains("factory calls"));
    }

    #[test]
    fn test_missing_export_rejected() {
        let err = from_js_str("const config = 1;", "test").unwrap_err();
        assert!(err.to_string().contains("no exported configuration"));
    }

    #[test]
    fn test_unbalanced_braces_rejected() {
        let err = from_js_str("module.exports = { content: [", "test").unwrap_err();
        assert!(err.to_string().contains("unbalanced"));
    }

    #[test]
    fn test_loading_is_idempotent() {
        let first = from_js_str(CONFIG_JS, "tailwind.config.js").unwrap();
        let second = from_js_str(CONFIG_JS, "tailwind.config.js").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let err = from_file(std::path::Path::new("tailwind.config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat { .. }));
    }
}
