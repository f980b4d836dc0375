//! jot - short text notes kept in a local storage slot

pub mod cli;
pub mod domain;
pub mod infra;
pub mod notebook;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use log::LevelFilter;

use cli::{
    Cli, Command,
    config::{Config, Location},
    handlers::{
        handle_add, handle_clear, handle_edit, handle_list, handle_remove, handle_shell,
        handle_show,
    },
};

/// Maps the `-v` count to a default log filter. `RUST_LOG` overrides it.
fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(verbose: u8) {
    let env = env_logger::Env::default().default_filter_or(log_level(verbose).as_str());
    // A second init (e.g. in tests) keeps the first logger.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Command::Completions(args) = &cli.command {
        clap_complete::generate(
            args.shell,
            &mut Cli::command(),
            "jot",
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    let Location { data_dir, slot } = Config::load()?.locate(cli.dir.clone(), cli.slot.clone());
    log::debug!("using slot '{}' in {}", slot, data_dir.display());

    match &cli.command {
        Command::Add(args) => handle_add(args, &data_dir, &slot),
        Command::List(args) => handle_list(args, &data_dir, &slot),
        Command::Show(args) => handle_show(args, &data_dir, &slot),
        Command::Edit(args) => handle_edit(args, &data_dir, &slot),
        Command::Remove(args) => handle_remove(args, &data_dir, &slot),
        Command::Clear(args) => handle_clear(args, &data_dir, &slot),
        Command::Shell => handle_shell(&data_dir, &slot),
        Command::Completions(_) => Ok(()),
    }
}
