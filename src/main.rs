mod cli;
mod config;
mod convert;
mod error;
mod reader;
mod record;
mod schema;
mod ui;

use clap::Parser;
use cli::Cli;
use config::CursosConfig;
use ui::RunProgress;

// Falhas são relatadas no console; o processo termina normalmente.
fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => CursosConfig::load_from(path),
        None => CursosConfig::load(),
    };
    let config = match loaded {
        Ok(config) => config.with_overrides(cli.source, cli.dest),
        Err(e) => {
            ui::report_setup_error(&e);
            return;
        }
    };

    let progress = RunProgress::start(&config.source_path);
    match convert::run(&config.source_path, &config.dest_path) {
        Ok(summary) => progress.complete(&summary, cli.verbose),
        Err(e) => progress.fail(&e),
    }
}
