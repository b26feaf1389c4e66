//! Restaurant finder CLI binary entry point.

use restaurant_finder::cli::{commands, Cli, Commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_args();

    let result = match cli.command {
        Commands::Ask(args) => commands::handle_ask(args).await.map(|()| true),
        Commands::Validate(args) => commands::handle_validate(&args).map(|errors| {
            for error in &errors {
                println!("{error}");
            }
            if errors.is_empty() {
                println!("valid");
            }
            errors.is_empty()
        }),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
