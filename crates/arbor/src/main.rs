use std::io;

use arbor::cli::Cli;
use clap::Parser;

#[tokio::main]
async fn main() -> io::Result<()> {
    let cli = Cli::parse();

    arbor::startup::run(cli).await.map_err(io::Error::other)
}
