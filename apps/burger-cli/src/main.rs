//! # Stellar Burgers CLI Entry Point
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Initialize tracing (stderr, `RUST_LOG` aware)
//! 3. Load configuration and build the app context
//! 4. Mount: fetch the catalog, restore the session
//! 5. Run the command

use clap::Parser;

use burger_cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    burger_cli::init_tracing(cli.verbose);

    if let Err(e) = burger_cli::run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
