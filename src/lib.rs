pub mod args;
pub mod config;
pub mod diff;
pub mod emit;
pub mod errors;
pub mod loader;

pub use args::{CheckArgs, Cli, Commands, ConvertArgs, DiffArgs, InitArgs, OutputFormat, ShowArgs};
pub use config::{CheckReport, Plugin, TailwindConfig, Theme, ThemeExtend};
pub use diff::ConfigDiff;
pub use errors::{ConfigError, Result};
pub use loader::{from_file, from_js_str};

/// Result of validating a configuration file
#[derive(Debug)]
pub struct CheckOutcome {
    /// The loaded configuration
    pub config: TailwindConfig,

    /// Findings from validation
    pub report: CheckReport,
}

impl CheckOutcome {
    /// Whether the run should be treated as a pass
    pub fn passed(&self, strict: bool) -> bool {
        if strict {
            self.report.is_clean()
        } else {
            self.report.is_ok()
        }
    }
}

/// Load and validate a configuration file
pub fn check_file(args: &CheckArgs) -> Result<CheckOutcome> {
    if args.verbose {
        eprintln!("Checking configuration: {}", args.file.display());
    }

    let config = loader::from_file(&args.file)?;
    let report = config.check();

    if args.verbose {
        eprintln!("  - {} content patterns", config.content.len());
        eprintln!("  - {} plugins", config.plugins.len());
        eprintln!(
            "  - theme customization: {}",
            if config.theme.is_empty() { "none" } else { "present" }
        );
    }

    Ok(CheckOutcome { config, report })
}

/// Load a configuration and render it in the requested format
pub fn show_config(args: &ShowArgs) -> Result<String> {
    let config = loader::from_file(&args.file)?;
    match args.format {
        OutputFormat::Json => config.to_json_string(!args.compact),
        OutputFormat::Yaml => config.to_yaml_string(),
        OutputFormat::Js => config.to_js_string(),
    }
}

/// Convert a configuration file to the format implied by the output extension
pub fn convert_file(args: &ConvertArgs) -> Result<()> {
    args.validate().map_err(ConfigError::InvalidInput)?;

    let config = loader::from_file(&args.input)?;
    config.write_file(&args.output)?;

    if args.verbose {
        eprintln!(
            "Converted {} -> {}",
            args.input.display(),
            args.output.display()
        );
    }

    Ok(())
}

/// Load two configuration files and report their drift
pub fn diff_files(args: &DiffArgs) -> Result<ConfigDiff> {
    args.validate().map_err(ConfigError::InvalidInput)?;

    let left = loader::from_file(&args.left)?;
    let right = loader::from_file(&args.right)?;
    Ok(left.diff(&right))
}

/// Write a default configuration file
pub fn init_file(args: &InitArgs) -> Result<()> {
    if args.path.exists() && !args.force {
        return Err(ConfigError::InvalidInput(format!(
            "{} already exists (use --force to overwrite)",
            args.path.display()
        )));
    }

    TailwindConfig::default().write_file(&args.path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_check_file_passes_valid_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "tailwind.config.js",
            "module.exports = { content: ['./src/**/*.html'], plugins: [] }",
        );

        let args = CheckArgs {
            file: path,
            strict: true,
            verbose: false,
        };
        let outcome = check_file(&args).unwrap();
        assert!(outcome.passed(true));
    }

    #[test]
    fn test_check_file_strict_fails_on_warning() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "tailwind.config.json",
            r#"{ "content": [], "plugins": [] }"#,
        );

        let args = CheckArgs {
            file: path,
            strict: true,
            verbose: false,
        };
        let outcome = check_file(&args).unwrap();
        assert!(outcome.passed(false));
        assert!(!outcome.passed(true));
    }

    #[test]
    fn test_convert_js_to_json_and_back() {
        let dir = TempDir::new().unwrap();
        let js_path = write_config(
            &dir,
            "tailwind.config.js",
            "module.exports = {\n\tcontent: ['./components/**/*.templ'],\n\ttheme: { extend: {} },\n\tplugins: [require('@tailwindcss/forms'), require('@tailwindcss/typography')],\n}",
        );
        let json_path = dir.path().join("tailwind.config.json");

        convert_file(&ConvertArgs {
            input: js_path.clone(),
            output: json_path.clone(),
            verbose: false,
        })
        .unwrap();

        let original = loader::from_file(&js_path).unwrap();
        let converted = loader::from_file(&json_path).unwrap();
        assert_eq!(original, converted);
    }

    #[test]
    fn test_convert_rejects_same_path() {
        let err = convert_file(&ConvertArgs {
            input: "a.js".into(),
            output: "a.js".into(),
            verbose: false,
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidInput(_)));
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tailwind.config.js");

        let args = InitArgs {
            path: path.clone(),
            force: false,
        };
        init_file(&args).unwrap();
        assert!(path.exists());

        let err = init_file(&args).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidInput(_)));

        init_file(&InitArgs { path, force: true }).unwrap();
    }

    #[test]
    fn test_init_output_loads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tailwind.config.js");
        init_file(&InitArgs {
            path: path.clone(),
            force: false,
        })
        .unwrap();

        let config = loader::from_file(&path).unwrap();
        assert_eq!(config, TailwindConfig::default());
    }
}
