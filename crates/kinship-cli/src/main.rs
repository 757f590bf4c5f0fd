//! Kinship CLI - Explore the family graph of a genealogical record.

use clap::Parser;
use kinship_cli::commands;
use kinship_cli::repl;
use kinship_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `KINSHIP_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env("KINSHIP_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> kinship_cli::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let graph_config = config.graph_config(cli.chart_id, cli.strict);
    let mut graph = commands::load_graph(cli.command.file(), &graph_config)?;

    let output = match &cli.command {
        Command::Summary(_) => commands::execute_summary(&graph, &formatter)?,
        Command::Persons(_) => commands::execute_persons(&graph, &formatter)?,
        Command::Families(_) => commands::execute_families(&graph, &formatter)?,
        Command::Person(args) => commands::execute_person(args, &graph, &formatter)?,
        Command::Repl(_) => {
            repl::run_repl(&mut graph, &formatter, config.settings.history_size)?;
            return Ok(());
        }
    };
    println!("{}", output);

    Ok(())
}
