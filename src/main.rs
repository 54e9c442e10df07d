//! cvsearch - Search the ComicVine database from the terminal
//!
//! Runs a single search against the ComicVine search resource and prints the
//! results as text or JSON.

use std::process;

use clap::Parser;

use cvsearch::cli::{render_text, Cli, SearchCommand};
use cvsearch::ComicVineClient;

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(err) = run(&cli).await {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let command = SearchCommand::from_cli(cli)?;
    let client = ComicVineClient::new(command.config)?;

    let response = client.search_with(&command.query, &command.options).await?;

    if command.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!("{}", render_text(&response));
    }

    if response.has_error() {
        return Err(format!(
            "ComicVine returned status {}: {}",
            response.status_code, response.error
        )
        .into());
    }

    Ok(())
}
