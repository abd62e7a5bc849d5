use std::process;

use orcamento_core::{cli::shell::Shell, config::ConfigManager, init};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let manager = ConfigManager::new()?;
    let config = manager.load()?;
    let mut shell = Shell::new(config, manager);
    shell.run()?;
    Ok(())
}
