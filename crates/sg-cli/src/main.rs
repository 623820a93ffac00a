use clap::{Parser, ValueEnum};

mod banner;
mod cli;
mod commands;
mod console;
mod context;
mod output;
mod render;
mod ui;

fn main() {
    if let Err(error) = run() {
        eprintln!("statguide error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = sg_config::GuideConfig::load()?;
    context::warn_mistyped_env(&config);

    let default_format =
        <cli::OutputFormat as ValueEnum>::from_str(&config.output.default_format, true)
            .map_err(|error| anyhow::anyhow!("invalid output.default_format: {error}"))?;
    let flags = cli.global_flags(default_format);
    ui::init(&flags);

    commands::dispatch::dispatch(cli.command, &config, &flags)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("STATGUIDE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
