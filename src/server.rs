mod error;

use std::time::Duration;

use axum::{Json, Router, body::Bytes, routing::post};
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

pub use self::error::ApiError;
use crate::{
    cli::ServeArgs,
    core::{dispatcher::dispatch, plan::Plan},
    document::Document,
    prelude::*,
};

pub async fn serve(args: ServeArgs) -> Result {
    let listener =
        TcpListener::bind(&args.bind_address).await.context("failed to bind to the address")?;
    let app = router(args.request_timeout);

    info!(bind_address = %args.bind_address, "serving…");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

pub fn router(request_timeout: Duration) -> Router {
    Router::new()
        .route("/productionplan", post(post_production_plan))
        .layer((TraceLayer::new_for_http(), TimeoutLayer::new(request_timeout)))
}

/// Per <https://github.com/tokio-rs/axum/blob/main/examples/graceful-shutdown/src/main.rs>.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("shutting down…");
}

#[instrument(skip_all, fields(n_bytes = body.len()))]
async fn post_production_plan(body: Bytes) -> Result<Json<Plan>, ApiError> {
    production_plan(&body).map(Json)
}

fn production_plan(body: &[u8]) -> Result<Plan, ApiError> {
    let request = Document::from_slice(body)?.into_request()?;
    let plan = dispatch(&request)?;
    info!(n_units = plan.len(), total = %plan.total(), "dispatched");
    Ok(plan)
}
