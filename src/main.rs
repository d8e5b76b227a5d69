// Possible site server - public pages, SEO files and the admin API

use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use possible_site::{app_state::AppState, config::Config, site_interface::create_site_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    if config.admin.token.is_none() {
        tracing::warn!("ADMIN_TOKEN is not set; the admin API will reject every request");
    }

    // Initialize application state
    let app_state = AppState::new(config.clone()).await?;

    // Build main application router
    let app = create_site_router(app_state).layer(CorsLayer::permissive());

    // Start server
    let addr: SocketAddr = config.server_address().parse()?;
    info!("Possible site starting on http://{}", addr);
    info!("Serving canonical URLs for {}", config.site.base_url);
    info!("  GET    /{{locale}}/{{section}}/{{slug}}   - Public pages");
    info!("  GET    /sitemap.xml, /robots.txt       - SEO files");
    info!("  *      /api/admin/...                  - Admin content API");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
