use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Tailwind config CLI - loads, validates and compares Tailwind CSS build configurations
#[derive(Parser, Debug)]
#[command(name = "twconfig")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a configuration file
    Check(CheckArgs),
    /// Load a configuration and print it in the requested format
    Show(ShowArgs),
    /// Convert a configuration between formats
    Convert(ConvertArgs),
    /// Report drift between two configuration files
    Diff(DiffArgs),
    /// Write a default configuration file
    Init(InitArgs),
}

/// Output formats for printing a configuration
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Js,
}

/// Arguments for the check command
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Configuration file to validate (.js, .cjs, .json, .yaml, .yml)
    #[arg(value_name = "FILE", help = "Configuration file to validate")]
    pub file: PathBuf,

    /// Treat warnings as errors
    #[arg(
        long = "strict",
        default_value_t = false,
        help = "Fail on warnings as well as errors"
    )]
    pub strict: bool,

    /// Verbose output
    #[arg(
        short = 'v',
        long = "verbose",
        default_value_t = false,
        help = "Enable verbose output"
    )]
    pub verbose: bool,
}

/// Arguments for the show command
#[derive(Parser, Debug, Clone)]
pub struct ShowArgs {
    /// Configuration file to load
    #[arg(value_name = "FILE", help = "Configuration file to load")]
    pub file: PathBuf,

    /// Output format
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value_t = OutputFormat::Json,
        help = "Format to print the configuration in"
    )]
    pub format: OutputFormat,

    /// Compact JSON output
    #[arg(
        long = "compact",
        default_value_t = false,
        help = "Print compact JSON instead of pretty-printed"
    )]
    pub compact: bool,
}

/// Arguments for the convert command
#[derive(Parser, Debug, Clone)]
pub struct ConvertArgs {
    /// Input configuration file
    #[arg(value_name = "INPUT", help = "Configuration file to convert")]
    pub input: PathBuf,

    /// Output file path, format chosen by its extension
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        required = true,
        help = "Path to write the converted configuration to"
    )]
    pub output: PathBuf,

    /// Verbose output
    #[arg(
        short = 'v',
        long = "verbose",
        default_value_t = false,
        help = "Enable verbose output"
    )]
    pub verbose: bool,
}

/// Arguments for the diff command
#[derive(Parser, Debug, Clone)]
pub struct DiffArgs {
    /// Left-hand configuration file
    #[arg(value_name = "LEFT", help = "First configuration file")]
    pub left: PathBuf,

    /// Right-hand configuration file
    #[arg(value_name = "RIGHT", help = "Second configuration file")]
    pub right: PathBuf,
}

/// Arguments for the init command
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Where to write the new configuration
    #[arg(
        value_name = "PATH",
        default_value = "tailwind.config.js",
        help = "Path for the new configuration file"
    )]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(
        long = "force",
        default_value_t = false,
        help = "Overwrite the file if it already exists"
    )]
    pub force: bool,
}

impl ConvertArgs {
    /// Validate that the arguments are consistent
    pub fn validate(&self) -> Result<(), String> {
        if self.input == self.output {
            return Err("Input and output paths must be different".to_string());
        }
        Ok(())
    }
}

impl DiffArgs {
    /// Validate that the arguments are consistent
    pub fn validate(&self) -> Result<(), String> {
        if self.left == self.right {
            return Err("Diff requires two different files".to_string());
        }
        Ok(())
    }
}
