use analyzer::runtime::{boot, cli::Cli, run};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    boot::init_logging();
    let cli = Cli::parse();
    let config = boot::boot()?;
    run::run(cli.log_file.as_deref(), &config)?;
    Ok(())
}
