use clap::Parser;
use tailwind_config::{check_file, convert_file, diff_files, init_file, show_config};
use tailwind_config::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => {
            let strict = args.strict;
            match check_file(&args) {
                Ok(outcome) => {
                    for warning in &outcome.report.warnings {
                        eprintln!("warning: {}", warning);
                    }
                    for error in &outcome.report.errors {
                        eprintln!("error: {}", error);
                    }
                    if outcome.passed(strict) {
                        println!("{}: ok", args.file.display());
                        Ok(())
                    } else {
                        std::process::exit(1);
                    }
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Show(args) => {
            let rendered = show_config(&args)?;
            print!("{}", rendered);
            if !rendered.ends_with('\n') {
                println!();
            }
            Ok(())
        }
        Commands::Convert(args) => {
            convert_file(&args)?;
            Ok(())
        }
        Commands::Diff(args) => {
            let diff = diff_files(&args)?;
            print!("{}", diff);
            if !diff.is_empty() {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Init(args) => {
            init_file(&args)?;
            println!("Wrote {}", args.path.display());
            Ok(())
        }
    }
}
