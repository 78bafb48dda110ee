mod handlers;
mod models;
mod services;
mod utils;

use actix_files::Files;
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::Arc;

use handlers::widget::WidgetState;
use services::snapshot_loader::{FileSnapshotSource, HttpSnapshotSource, SnapshotSource};
use utils::{config::Config, http_client::create_http_client};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file FIRST before anything else
    dotenv::dotenv().ok();

    // Initialize logger with default level if RUST_LOG not set
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=================================================");
    println!("🚀 gh-activity homepage server");
    println!("=================================================");

    let config = Config::from_env().expect("Failed to load configuration");
    let host = config.host.clone();
    let port = config.port;

    let source: Arc<dyn SnapshotSource> = match &config.site_url {
        Some(site_url) => {
            let client =
                create_http_client(config.http_timeout()).expect("Failed to create HTTP client");
            Arc::new(
                HttpSnapshotSource::new(client, site_url).expect("Failed to resolve snapshot URL"),
            )
        }
        None => Arc::new(FileSnapshotSource::from_site_dir(&config.site_dir)),
    };

    println!("📝 Configuration loaded:");
    println!("   - Host: {}", host);
    println!("   - Port: {}", port);
    println!("   - Site directory: {}", config.site_dir.display());
    println!("   - Snapshot: {}", source.describe());
    println!("   - Widget layout: {:?}", config.widget_layout);
    println!(
        "   - Log level: {}",
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    );

    println!("🌐 Starting HTTP server at http://{}:{}", host, port);
    println!("📍 Available endpoints:");
    println!("   - GET  http://{}:{}/", host, port);
    println!("   - GET  http://{}:{}/widget", host, port);
    println!("   - GET  http://{}:{}/widget/plan", host, port);
    println!("   - GET  http://{}:{}/assets/...", host, port);
    println!("   - GET  http://{}:{}/health", host, port);
    println!("=================================================");

    log::info!("Server started at http://{}:{}", host, port);

    let state = web::Data::new(
        WidgetState::new(source, config.widget_layout).with_site_url(config.site_url.clone()),
    );
    let assets_dir = config.assets_dir();

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .configure(handlers::configure)
            .service(Files::new("/assets", assets_dir.clone()))
    })
    .bind((host, port))?
    .run()
    .await
}
