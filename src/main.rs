//! Product API entry point
//!
//! Parses CLI arguments, builds the store handle once, and starts the HTTP
//! server. The in-memory backend serves local runs; in production the
//! handle would point at the managed table service instead.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use product_api::config::ServiceConfig;
use product_api::http::HttpServer;
use product_api::product::{Dispatcher, ProductService};
use product_api::store::MemoryTableStore;

#[derive(Parser, Debug)]
#[command(name = "product-api")]
#[command(about = "HTTP CRUD facade over an external product table")]
struct Args {
    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to
    #[arg(short, long)]
    port: Option<u16>,

    /// Backing table name
    #[arg(long)]
    table: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "product_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let mut config = ServiceConfig::from_env();
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(table) = args.table {
        config.table_name = table;
    }

    let store = Arc::new(MemoryTableStore::with_table(&config.table_name));
    let service = ProductService::new(store, config.table_name.as_str());
    let dispatcher = Dispatcher::new(service);

    HttpServer::new(config, dispatcher).start().await
}
