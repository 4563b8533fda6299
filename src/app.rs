/*
 * Responsibility
 * - tracing / panic-hook initialization
 * - Config loading → state construction → Router assembly
 * - axum::serve() startup
 */
use std::{panic, process, sync::Arc};

use anyhow::Result;
use axum::Router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{api, auth::identity::StaticIdentityStore, config::Config, middleware, state::AppState};

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,demo_api=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    // Keep the default hook as a fallback (prints to stderr with location/payload).
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // Surface panics via tracing so they don't get lost when stderr is hidden.
        tracing::error!(?info, "panic");

        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;

    // In development, fail fast on panics so we notice immediately.
    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting demo services in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_state(config: &Config) -> AppState {
    // The identity table is fixed for the process lifetime. In a real scenario
    // it would come from an identity provider; here it is the demo table.
    let users = Arc::new(StaticIdentityStore::demo());

    AppState::new(users, config.songs_api_key.clone())
}

pub fn build_router(state: AppState) -> Router {
    let router = api::routes(state.clone()).with_state(state);
    middleware::http::apply(router)
}
