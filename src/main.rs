use clap::Parser;
use mesh500_processor::cli::{run, Cli};
use mesh500_processor::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
