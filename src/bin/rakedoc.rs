//! Command-line interface for rakedoc
//!
//! Scans Rakefiles and prints their tasks, namespaces and references.
//!
//! Usage:
//!   rakedoc `<path>...` [--format `<format>`] [--config `<file>`] [--force] [--stats]
//!   rakedoc --list-formats
//!
//! Logging goes to stderr and is controlled by `RAKEDOC_LOG` (default `warn`).

use clap::{Arg, ArgAction, ArgMatches, Command};
use rakedoc::rake::config::Loader;
use rakedoc::rake::files::is_rakefile;
use rakedoc::rake::formats::FormatRegistry;
use rakedoc::rake::processor::{process_file, ProcessingError, ProcessingSpec};
use rakedoc::rake::stats::Stats;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let matches = build_cli().get_matches();
    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    if let Err(e) = handle_scan_command(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("RAKEDOC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn build_cli() -> Command {
    Command::new("rakedoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extracts tasks, namespaces and dependencies from Rakefiles")
        .arg(
            Arg::new("paths")
                .help("Rakefiles to scan")
                .num_args(1..)
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'tree-treeviz', 'tree-json', 'token-simple')"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("force")
                .long("force")
                .help("Scan files even if their name is not a Rakefile name")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("stats")
                .long("stats")
                .help("Print file, namespace and task counts to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
}

fn handle_scan_command(matches: &ArgMatches) -> Result<(), ProcessingError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    let config = loader.build()?;
    let spec = config.processing_spec()?;

    let force = matches.get_flag("force");
    let mut stats = Stats::new();

    for path in matches.get_many::<String>("paths").into_iter().flatten() {
        if !force && !is_rakefile(path) {
            tracing::warn!(path = %path, "skipping, not a Rakefile (use --force to scan it)");
            continue;
        }
        let output = process_file(path, &spec, &config, &mut stats)?;
        print!("{}", output);
    }

    if matches.get_flag("stats") {
        eprint!("{}", stats.summary());
    }
    Ok(())
}

fn handle_list_formats_command() {
    println!("Available formats:\n");
    for spec in ProcessingSpec::available_specs() {
        println!("  {}", spec);
    }

    let registry = FormatRegistry::with_defaults();
    println!("\nTree formats:\n");
    for (name, description) in registry.descriptions() {
        println!("  {:<10} {}", name, description);
    }
}
