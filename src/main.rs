use clap::Parser;

mod cli;
mod commands;
mod seed;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let args = cli::Cli::parse();
    commands::run(args)
}
