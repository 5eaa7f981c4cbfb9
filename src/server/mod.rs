//! HTTP server: SPA assets, local media and the mock API.
//!
//! # Routing
//!
//! | Path             | Handler                               |
//! |------------------|---------------------------------------|
//! | `/media/…`       | [`media::serve`] (files under the media root) |
//! | API table paths  | [`api::handle`]                       |
//! | anything else    | [`spa::serve`] (index fallback)       |
//!
//! Requests are handed to a rayon pool; [`AppState`] is immutable and
//! shared by `Arc`, so handlers take no locks.

mod api;
mod content;
mod lifecycle;
mod media;
mod reply;
mod request;
mod spa;

use reply::Reply;
use request::Incoming;

use crate::{
    asset::{AssetSource, LocalSource},
    config::ServerConfig,
    core::register_server,
    dataset::Dataset,
    debug, log,
};
use anyhow::{Context, Result};
use std::sync::Arc;
use tiny_http::{Request, Server};

/// Everything a request handler can see.
pub struct AppState {
    pub config: ServerConfig,
    pub assets: Arc<dyn AssetSource>,
    pub dataset: Dataset,
    pub media: LocalSource,
}

impl AppState {
    pub fn new(config: ServerConfig, assets: Arc<dyn AssetSource>, dataset: Dataset) -> Self {
        let media = LocalSource::new(&config.media.root);
        Self {
            config,
            assets,
            dataset,
            media,
        }
    }
}

/// Bound server ready to accept requests
pub struct BoundServer {
    server: Arc<Server>,
}

/// Bind the HTTP server and register it for Ctrl+C shutdown.
pub fn bind_server(config: &ServerConfig) -> Result<BoundServer> {
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    register_server(Arc::clone(&server));

    log!("serve"; "http://{}", addr);

    Ok(BoundServer { server })
}

impl BoundServer {
    /// Start the request loop (blocking). Returns once the server is unblocked.
    pub fn run(self, state: Arc<AppState>) -> Result<()> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(state.config.serve.workers)
            .thread_name(|i| format!("reel-worker-{i}"))
            .build()
            .context("failed to create request worker pool")?;

        for request in self.server.incoming_requests() {
            let state = Arc::clone(&state);
            pool.spawn(move || {
                if let Err(e) = handle_request(request, &state) {
                    log!("serve"; "request error: {e}");
                }
            });
        }
        Ok(())
    }
}

/// Handle a single HTTP request
fn handle_request(request: Request, state: &AppState) -> Result<()> {
    // Early exit if shutdown requested
    if crate::core::is_shutdown() {
        return Ok(Reply::unavailable().send(request)?);
    }

    let incoming = Incoming::from_request(&request);
    let reply = dispatch(&incoming, state);
    debug!("serve"; "{} {} -> {}", incoming.method, incoming.url, reply.status);
    reply.send(request)?;
    Ok(())
}

/// Route a request to its handler.
pub fn dispatch(request: &Incoming, state: &AppState) -> Reply {
    let path = request.path();

    if media::matches(path) {
        return media::serve(&state.media, request);
    }
    if let Some(endpoint) = api::Endpoint::from_path(path) {
        return api::handle(endpoint, request, state);
    }
    spa::serve(state.assets.as_ref(), &state.config.assets.index, request)
}
