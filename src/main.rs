use clap::Parser;
use courtside::cli::{self, CheckCommand, Cli, Commands};
use courtside::error::Result;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = dispatch(&cli).await {
        cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn dispatch(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Update(args) => cli::update::execute(args).await,
        Commands::Status(args) => cli::status::execute(args).await,
        Commands::Check(CheckCommand::Config(args)) => cli::check::config::execute(args),
        Commands::Check(CheckCommand::Source(args)) => cli::check::source::execute(args).await,
    }
}
