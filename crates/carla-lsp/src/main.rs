use std::path::PathBuf;

use clap::Parser;
use tower_lsp::{LspService, Server};

use carla_lsp_core::ApiCatalog;

mod capabilities;
mod document;
mod handlers;
mod server;

#[derive(Parser)]
#[command(name = "carla-lsp")]
#[command(about = "Language Server for the CARLA Python API")]
struct Cli {
    /// Use stdio for communication (required)
    #[arg(long)]
    stdio: bool,

    /// Enable debug mode
    #[arg(long)]
    debug: bool,

    /// Path to the API catalog JSON file
    #[arg(long, default_value = "utils/carla_api.json")]
    catalog: PathBuf,
}

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    if !args.stdio {
        eprintln!("Error: --stdio flag is required");
        std::process::exit(1);
    }

    // Loaded once; the server serves empty results if this failed
    let catalog = ApiCatalog::load(&args.catalog);

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) =
        LspService::new(|client| server::Backend::new(client, catalog, args.debug));

    Server::new(stdin, stdout, socket).serve(service).await;
}
