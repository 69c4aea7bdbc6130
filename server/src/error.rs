//! Startup and serve failures for the page host.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::net::SocketAddr;

use leptos::config::errors::LeptosConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("leptos configuration: {0}")]
    Config(#[from] LeptosConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
