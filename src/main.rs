use anyhow::Result;
use clap::Parser;
use namegen::config::ConfigManager;
use namegen::engines::generation::GenerationCycleController;
use namegen::repl;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "namegen",
    version,
    about = "Breed pronounceable names with a genetic algorithm"
)]
struct Cli {
    /// TOML config file (./namegen.toml is used when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible session
    #[arg(short, long)]
    seed: Option<u64>,

    /// Keep the terminal contents on start
    #[arg(long)]
    no_clear: bool,
}

fn main() -> Result<()> {
    // Configure logging (RUST_LOG=debug for details)
    env_logger::init();

    let cli = Cli::parse();
    let mut manager = ConfigManager::load(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        manager.update(|config| config.session.seed = Some(seed))?;
    }
    if cli.no_clear {
        manager.update(|config| config.session.clear_on_start = false)?;
    }
    let config = manager.into_inner();

    let stdout = io::stdout();
    let mut output = stdout.lock();
    if config.session.clear_on_start {
        repl::clear_screen(&mut output)?;
    }
    writeln!(output, "{}", repl::WELCOME)?;

    let mut controller = GenerationCycleController::from_config(&config);
    controller.start_session()?;

    repl::run(&mut controller, io::stdin().lock(), &mut output)?;
    Ok(())
}
