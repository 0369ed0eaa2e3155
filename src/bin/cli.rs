// src/bin/cli.rs
use clap::Parser;
use snc_watch::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    // A missing .env is normal; real environment variables still apply.
    let _ = dotenvy::dotenv();

    let args = cli::Cli::parse();
    log::init(args.verbose);
    cli::run(args)
}
