mod cli;
mod cli_error;
mod compare;
mod exit_codes;
mod fs;
mod output;
mod parse;

use clap::Parser;
use mimalloc::MiMalloc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn main() {
    let cli = match cli::Cli::try_parse() {
        Ok(v) => v,
        Err(err) => {
            use clap::error::ErrorKind;
            let _ = err.print();
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    exit_codes::ExitCode::Success.as_i32()
                }
                _ => exit_codes::ExitCode::InvalidInput.as_i32(),
            };
            std::process::exit(code);
        }
    };

    init_tracing(&cli.log_level);
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "starting stout");

    let out = output::formatter(cli.output);
    let res = match cli.command {
        cli::Command::Parse(args) => parse::parse(args, out.as_ref()),
        cli::Command::Compare(args) => {
            compare::compare(args, out.as_ref());
            Ok(())
        }
        cli::Command::Fs(cmd) => fs::fs(cmd, out.as_ref()),
    };

    let code = match res {
        Ok(()) => exit_codes::ExitCode::Success.as_i32(),
        Err(err) => {
            eprintln!("{err}");
            err.exit_code().as_i32()
        }
    };

    std::process::exit(code);
}
