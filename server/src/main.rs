mod error;
mod routes;

use leptos::prelude::get_configuration;

use crate::error::ServerError;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "fractal viewer host stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let conf = get_configuration(None)?;
    let options = conf.leptos_options;
    let addr = options.site_addr;

    let app = routes::app(options);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "fractal viewer listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
