mod api;
mod consts;
mod environment;
mod events;
mod logging;
mod session;
mod stats;
mod store;
mod ui;
mod workers;

use crate::environment::Environment;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the block statistics dashboard
    Start {
        /// Run without the terminal UI, printing events to stdout.
        #[arg(long)]
        headless: bool,

        /// Override the statistics API base URL.
        #[arg(long, value_name = "API_URL")]
        api_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let environment_str = std::env::var("BLOCKSTATS_ENVIRONMENT").unwrap_or_default();
    let environment = environment_str
        .parse::<Environment>()
        .unwrap_or(Environment::default());

    let args = Args::parse();
    match args.command {
        Command::Start { headless, api_url } => {
            // An explicit URL takes precedence over the environment.
            let environment = match api_url {
                Some(url) => Environment::Custom(url),
                None => environment,
            };

            let session = setup_session(environment);
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session).await
            }
        }
    }
}
