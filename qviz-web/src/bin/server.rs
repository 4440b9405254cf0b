use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use qviz_web::server::create_router;
use qviz_web::{env_config, AppContext};

fn setup_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");
}

#[tokio::main]
async fn main() {
    setup_logging();

    let port = env_config::server_port();
    let ctx = Arc::new(AppContext::new());
    info!("Starting qviz server ({} backend)", ctx.backend_name());

    let app = create_router(ctx);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .expect("failed to bind server port");
    info!("Listening on port {}. Press Ctrl+C to stop.", port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");

    info!("Stopping server");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install CTRL+C signal handler");
}
