//! stackup entry point.
//!
//! Loads configuration, initializes logging and dispatches to a command.

mod cli_parser;

use std::path::PathBuf;
use std::process::ExitCode;

use stackup::cli::{run_plan, run_provision, EXIT_CONFIG_ERROR, EXIT_SUCCESS};
use stackup::ProvisionConfig;

use cli_parser::CommandOptions;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("provision");

    let rest = args.get(2..).unwrap_or(&[]);

    match command {
        "provision" | "" => run_with_config(rest, Command::Provision).await,
        "plan" => run_with_config(rest, Command::Plan).await,
        "help" | "--help" | "-h" => {
            if let Some(sub) = args.get(2) {
                cli_parser::print_command_help(sub);
            } else {
                cli_parser::print_usage();
            }
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("stackup {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        flag if flag.starts_with('-') => run_with_config(&args[1..], Command::Provision).await,
        _ => {
            eprintln!("Unknown command: {}", command);
            cli_parser::print_usage();
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Command {
    Provision,
    Plan,
}

async fn run_with_config(args: &[String], command: Command) -> ExitCode {
    let options = match cli_parser::parse_options(args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e);
            return exit(EXIT_CONFIG_ERROR);
        }
    };

    let config = match load_config(&options) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return exit(EXIT_CONFIG_ERROR);
        }
    };
    config.logging.init();

    let code = match command {
        Command::Provision => run_provision(&config).await,
        Command::Plan => run_plan(&config),
    };
    exit(code)
}

fn load_config(options: &CommandOptions) -> Result<ProvisionConfig, stackup::ConfigError> {
    let path = options.config.as_deref().map(PathBuf::from);
    ProvisionConfig::load(path.as_deref(), options.namespace.as_deref())
}

fn exit(code: i32) -> ExitCode {
    if code == EXIT_SUCCESS {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(code as u8)
    }
}
