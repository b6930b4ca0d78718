//! HXS CLI

use std::path::Path;
use std::process::ExitCode;

use hxsc::{eval_code, init_tracing, run_file, CliError, Config};

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            // Exit codes are small positive integers.
            ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1))
        }
    }
}

fn run() -> Result<(), CliError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut config = Config::from_env()?;
    let args = config.apply_flags(&args)?;

    let Some(command) = args.first() else {
        print_usage();
        return Ok(());
    };

    match command.as_str() {
        "run" => {
            let Some(path) = args.get(1) else {
                return Err(CliError::Usage("Usage: hxs run <file.hxs>".to_string()));
            };
            run_file(Path::new(path), &config, hxs_eval::stdout_handler())?;
        }
        "eval" => {
            if args.len() < 2 {
                return Err(CliError::Usage("Usage: hxs eval <code>".to_string()));
            }
            let code = args[1..].join(" ");
            if let Some(value) = eval_code(&code, &config, hxs_eval::stdout_handler())? {
                println!("{}", value.repr());
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-v" => {
            println!("HXS {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A bare script path runs it.
            let path = Path::new(command);
            if path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("hxs"))
            {
                run_file(path, &config, hxs_eval::stdout_handler())?;
            } else {
                print_usage();
                return Err(CliError::Usage(format!("Unknown command: {command}")));
            }
        }
    }
    Ok(())
}

fn print_usage() {
    println!("HXS script runner");
    println!();
    println!("Usage: hxs <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.hxs>      Run a script");
    println!("  eval <code>         Evaluate code and print its value");
    println!("  help                Show this help message");
    println!("  version             Show version information");
    println!();
    println!("Options:");
    println!("  --max-depth=<n>     Evaluation depth limit (env: HXS_MAX_DEPTH)");
    println!();
    println!("Logging:");
    println!("  RUST_LOG=hxs_eval=debug   Trace program runs and calls");
}
