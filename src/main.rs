use clap::{CommandFactory, Parser};

use pspkg::app::{self, Action};
use pspkg::config::Settings;
use pspkg::logging::setup_logging;

#[derive(Parser)]
#[command(name = "pspkg")]
#[command(version, about = "A simple client for the PyScript packages static API")]
struct Cli {
    /// Package names to check for support. Emits JSON output.
    #[arg(value_name = "PACKAGES")]
    packages: Vec<String>,

    /// Refresh the local dump of supported packages from the API.
    #[arg(long)]
    refresh: bool,

    /// Delete the local dump of supported packages.
    #[arg(long)]
    reset: bool,

    /// Show debug logs on stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let Some(action) = Action::select(cli.reset, cli.refresh, cli.packages) else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let settings = Settings::from_env();

    let output = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(app::run(action, &settings))?;

    println!("{}", output);
    Ok(())
}
