use crate::app::App;
use crate::config::Config;
use crate::handlers::ClientAddr;
use astra::Server;

mod api;
mod app;
mod auth;
mod config;
mod db;
mod domain;
mod errors;
mod forms;
mod handlers;
mod logger;
mod rate_limit;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    logger::init_logger();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let addr = config.bind_addr;
    let workers = config.max_workers;

    // Builds the API client and applies the session schema.
    let app = match App::new(config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "startup failed");
            std::process::exit(1);
        }
    };

    match db::connection::purge_expired(&app.db, chrono::Utc::now().timestamp()) {
        Ok(n) if n > 0 => tracing::info!(purged = n, "dropped expired sessions and drafts"),
        Ok(_) => {}
        Err(e) => tracing::warn!(error = %e, "session purge failed"),
    }

    tracing::info!(%addr, workers, api = %app.config.api_base_url, "starting server");

    let server = Server::bind(&addr).max_workers(workers);

    let result = server.serve(move |mut req: astra::Request, info: astra::ConnectionInfo| {
        if let Some(peer) = info.peer_addr() {
            req.extensions_mut().insert(ClientAddr(peer.ip()));
        }
        router::serve(req, &app)
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down");
}
