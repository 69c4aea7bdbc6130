//! Networking modules for the fractal endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP fetch and decodes the body, `payload` defines the
//! validated image value the rest of the client works with.

pub mod api;
pub mod payload;
