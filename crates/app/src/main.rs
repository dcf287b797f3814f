//! Product Catalog Maintenance CLI

use std::process;

use clap::Parser;

use crate::cli::Cli;

mod cli;

#[tokio::main]
pub async fn main() {
    _ = dotenvy::dotenv();

    if let Err(error) = Cli::parse().run().await {
        eprintln!("{error}");
        process::exit(1);
    }
}
